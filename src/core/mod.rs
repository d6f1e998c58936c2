pub mod report;
pub mod system;

pub use crate::domain::model::{Course, Enrollment, Grade, Instructor, Person, Student};
pub use crate::domain::ports::{Member, RosterSource};
pub use crate::utils::error::Result;
