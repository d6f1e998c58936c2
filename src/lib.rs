pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::{DemoRoster, RosterConfig};
pub use core::{report::Snapshot, system::StudentManagementSystem};
pub use domain::model::{Course, CourseId, Enrollment, Grade, Instructor, Person, PersonId, Student};
pub use domain::ports::{Member, RosterSource};
pub use utils::error::{RecordsError, Result};
