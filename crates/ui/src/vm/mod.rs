mod quiz_vm;

pub use quiz_vm::{
    DepartmentOptionVm, QuizIntent, QuizVm, RevealVm, command_for, map_quiz_snapshot,
};
