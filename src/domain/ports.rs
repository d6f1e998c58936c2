use crate::core::system::StudentManagementSystem;
use crate::domain::model::{Person, PersonId};
use crate::utils::error::Result;

/// Identity shared by students and instructors.
pub trait Member {
    fn person(&self) -> &Person;
    fn person_mut(&mut self) -> &mut Person;

    fn name(&self) -> &str {
        &self.person().name
    }

    fn id_number(&self) -> &PersonId {
        &self.person().id_number
    }
}

/// Something that can register people, courses and enrollments in a system.
pub trait RosterSource {
    fn populate(&self, system: &mut StudentManagementSystem) -> Result<()>;
}
