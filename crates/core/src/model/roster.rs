use std::collections::HashSet;

use crate::model::{ALL_DEPARTMENTS, DepartmentFilter, Person, PersonId};

/// The people loaded for a quiz, in file order.
///
/// Owned for the whole session; filtered views are recomputed on demand and
/// expressed as `PersonId`s into this list.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Roster {
    people: Vec<Person>,
}

impl Roster {
    #[must_use]
    pub fn new(people: Vec<Person>) -> Self {
        Self { people }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.people.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.people.is_empty()
    }

    #[must_use]
    pub fn get(&self, id: PersonId) -> Option<&Person> {
        self.people.get(id.index())
    }

    pub fn iter(&self) -> impl Iterator<Item = (PersonId, &Person)> {
        self.people
            .iter()
            .enumerate()
            .map(|(index, person)| (PersonId::new(index), person))
    }

    #[must_use]
    pub fn people(&self) -> &[Person] {
        &self.people
    }

    /// Selectable filter labels: `"ALL"` followed by each distinct normalized
    /// department in order of first appearance. Blank departments are skipped.
    #[must_use]
    pub fn departments(&self) -> Vec<String> {
        let mut seen = HashSet::new();
        let mut departments = vec![ALL_DEPARTMENTS.to_owned()];
        for person in &self.people {
            let name = person.normalized_department();
            if name.is_empty() || !seen.insert(name.clone()) {
                continue;
            }
            departments.push(name);
        }
        departments
    }

    /// People matching `filter`, in roster order.
    #[must_use]
    pub fn filter(&self, filter: &DepartmentFilter) -> Vec<PersonId> {
        self.iter()
            .filter(|(_, person)| filter.matches(person))
            .map(|(id, _)| id)
            .collect()
    }
}

impl FromIterator<Person> for Roster {
    fn from_iter<T: IntoIterator<Item = Person>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
