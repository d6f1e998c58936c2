use crate::domain::idx;
use crate::domain::ports::Member;
use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

/// Identifier of a student or an instructor.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PersonId(String);

/// Identifier of a course.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CourseId(String);

/// A grade as given by the caller; no format is imposed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Grade(String);

macro_rules! string_newtype {
    ($($name:ident),* $(,)?) => {$(
        impl $name {
            pub fn new(value: impl Into<String>) -> Self {
                Self(value.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self(value.to_string())
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self(value)
            }
        }

        impl Borrow<str> for $name {
            fn borrow(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }
    )*};
}

string_newtype!(PersonId, CourseId, Grade);

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub name: String,
    pub id_number: PersonId,
}

impl Person {
    pub fn new(name: impl Into<String>, id_number: impl Into<PersonId>) -> Self {
        Self {
            name: name.into(),
            id_number: id_number.into(),
        }
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Name: {}, ID: {}", self.name, self.id_number)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    #[serde(flatten)]
    pub person: Person,
    pub major: String,
}

impl Student {
    pub fn new(
        name: impl Into<String>,
        id_number: impl Into<PersonId>,
        major: impl Into<String>,
    ) -> Self {
        Self {
            person: Person::new(name, id_number),
            major: major.into(),
        }
    }
}

impl fmt::Display for Student {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, Major: {}", self.person, self.major)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Instructor {
    #[serde(flatten)]
    pub person: Person,
    pub department: String,
}

impl Instructor {
    pub fn new(
        name: impl Into<String>,
        id_number: impl Into<PersonId>,
        department: impl Into<String>,
    ) -> Self {
        Self {
            person: Person::new(name, id_number),
            department: department.into(),
        }
    }
}

impl fmt::Display for Instructor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, Department: {}", self.person, self.department)
    }
}

impl Member for Person {
    fn person(&self) -> &Person {
        self
    }
    fn person_mut(&mut self) -> &mut Person {
        self
    }
}

impl Member for Student {
    fn person(&self) -> &Person {
        &self.person
    }
    fn person_mut(&mut self) -> &mut Person {
        &mut self.person
    }
}

impl Member for Instructor {
    fn person(&self) -> &Person {
        &self.person
    }
    fn person_mut(&mut self) -> &mut Person {
        &mut self.person
    }
}

/// A course and its roster.
///
/// The roster keeps enrollment order and may hold the same student several times.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Course {
    pub course_name: String,
    pub course_id: CourseId,
    enrolled_students: Vec<idx::Student>,
}

impl Course {
    pub fn new(course_name: impl Into<String>, course_id: impl Into<CourseId>) -> Self {
        Self {
            course_name: course_name.into(),
            course_id: course_id.into(),
            enrolled_students: Vec::new(),
        }
    }

    pub fn enrolled_students(&self) -> &[idx::Student] {
        &self.enrolled_students
    }

    pub(crate) fn add_student(&mut self, student: idx::Student) {
        self.enrolled_students.push(student)
    }

    /// Removes the first roster entry for `student`, returns `false` if there is none.
    pub(crate) fn remove_student(&mut self, student: idx::Student) -> bool {
        match self.enrolled_students.iter().position(|s| *s == student) {
            Some(pos) => {
                self.enrolled_students.remove(pos);
                true
            }
            None => false,
        }
    }

    /// Drops roster entries at or past `end`, the first index not yet allocated in the student
    /// arena. Returns how many were dropped.
    pub(crate) fn retain_students_before(&mut self, end: idx::Student) -> usize {
        let before = self.enrolled_students.len();
        self.enrolled_students.retain(|s| *s < end);
        before - self.enrolled_students.len()
    }

    /// Renders the course, resolving roster entries in `students`.
    pub(crate) fn display(&self, students: &idx::StudentMap<Student>) -> String {
        let end = students.next_index();
        let names: Vec<&str> = self
            .enrolled_students
            .iter()
            .filter(|s| **s < end)
            .map(|s| students[*s].name())
            .collect();
        format!(
            "Course Name: {}, Course ID: {}, Enrolled Students: {}",
            self.course_name,
            self.course_id,
            names.join(", ")
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Enrollment {
    student: idx::Student,
    course: idx::Course,
    grade: Option<Grade>,
}

impl Enrollment {
    pub(crate) fn new(student: idx::Student, course: idx::Course) -> Self {
        Self {
            student,
            course,
            grade: None,
        }
    }

    pub fn student(&self) -> idx::Student {
        self.student
    }

    pub fn course(&self) -> idx::Course {
        self.course
    }

    pub fn grade(&self) -> Option<&Grade> {
        self.grade.as_ref()
    }

    pub fn assign_grade(&mut self, grade: impl Into<Grade>) {
        self.grade = Some(grade.into())
    }

    pub(crate) fn display(
        &self,
        students: &idx::StudentMap<Student>,
        courses: &idx::CourseMap<Course>,
    ) -> String {
        let grade = self.grade.as_ref().map(Grade::as_str).unwrap_or("None");
        format!(
            "Student: {}, Course: {}, Grade: {}",
            students[self.student].name(),
            courses[self.course].course_name,
            grade
        )
    }
}
