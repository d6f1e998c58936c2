use crate::core::system::StudentManagementSystem;
use crate::core::RosterSource;
use crate::domain::model::{Course, Instructor, Student};
use crate::utils::error::Result;

/// Built-in sample data, used when no roster file is given.
#[derive(Debug, Clone, Copy, Default)]
pub struct DemoRoster;

impl RosterSource for DemoRoster {
    fn populate(&self, system: &mut StudentManagementSystem) -> Result<()> {
        system.add_student(Student::new("Alice", "s1", "Computer Science"));
        system.add_student(Student::new("Bob", "s2", "Mathematics"));
        system.add_instructor(Instructor::new("Dr. Smith", "i1", "Computer Science"));
        system.add_course(Course::new("Algorithms", "c1"));
        system.add_course(Course::new("Linear Algebra", "c2"));

        system.enroll_student_in_course("s1", "c1")?;
        system.enroll_student_in_course("s2", "c1")?;
        system.enroll_student_in_course("s2", "c2")?;
        system.assign_grade("s1", "c1", "A");

        tracing::info!("Loaded demo roster");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::Member;

    #[test]
    fn test_demo_roster() {
        let mut sms = StudentManagementSystem::new();
        DemoRoster.populate(&mut sms).unwrap();

        let names: Vec<&str> = sms
            .get_students_in_course("c1")
            .iter()
            .map(|s| s.name())
            .collect();
        assert_eq!(names, vec!["Alice", "Bob"]);
        assert_eq!(sms.get_courses_for_student("s2").len(), 2);
        assert_eq!(sms.enrollments().count(), 3);
    }
}
