mod department;
mod ids;
mod person;
mod roster;
mod settings;

pub use department::{ALL_DEPARTMENTS, DepartmentFilter, normalize_department};
pub use ids::{ParseIdError, PersonId};
pub use person::Person;
pub use roster::Roster;
pub use settings::{QuizSettings, SettingsError};
