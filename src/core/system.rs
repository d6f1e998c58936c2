//! The aggregate root.
//!
//! [`StudentManagementSystem`] owns every entity record. Records live in append-only arenas
//! ([`idx::StudentMap`], [`idx::CourseMap`], [`idx::EnrollmentMap`]) and the id maps bind ids to
//! arena indices. Course rosters and enrollments hold indices, so:
//!
//! - updating a student or course through the aggregate is visible from every roster and
//!   enrollment that refers to it;
//! - removing an id only unbinds it, rosters and enrollments keep the record they point to;
//! - re-adding an id binds it to a fresh record, older references keep the older one.
//!
//! The arenas never shrink: a replaced or removed record stays allocated for the lifetime of the
//! system, since a roster or enrollment may still point at it.
//!
//! Indices only mean something in the system that allocated them. Roster entries of a course
//! handed to [`StudentManagementSystem::add_course`] that lie outside this system's student arena
//! are dropped.

use crate::domain::idx;
use crate::domain::model::{Course, CourseId, Enrollment, Grade, Instructor, PersonId, Student};
use crate::domain::ports::Member;
use crate::utils::error::{RecordsError, Result};
use std::collections::BTreeMap;

pub struct StudentManagementSystem {
    student_records: idx::StudentMap<Student>,
    course_records: idx::CourseMap<Course>,
    students: BTreeMap<PersonId, idx::Student>,
    instructors: BTreeMap<PersonId, Instructor>,
    courses: BTreeMap<CourseId, idx::Course>,
    enrollments: idx::EnrollmentMap<Enrollment>,
}

impl Default for StudentManagementSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl StudentManagementSystem {
    pub fn new() -> Self {
        Self {
            student_records: idx::StudentMap::new(),
            course_records: idx::CourseMap::new(),
            students: BTreeMap::new(),
            instructors: BTreeMap::new(),
            courses: BTreeMap::new(),
            enrollments: idx::EnrollmentMap::new(),
        }
    }

    // Students

    pub fn add_student(&mut self, student: Student) {
        let handle = self.student_records.next_index();
        let id = student.id_number().clone();
        self.student_records.push(student);
        if self.students.insert(id.clone(), handle).is_some() {
            tracing::debug!("Student {} replaced", id);
        }
    }

    pub fn remove_student(&mut self, id_number: &str) {
        if self.students.remove(id_number).is_none() {
            tracing::debug!("No student {} to remove", id_number);
        }
    }

    /// Sets each supplied field of student `id_number`; an empty string is a value like any other.
    pub fn update_student(&mut self, id_number: &str, name: Option<&str>, major: Option<&str>) {
        let Some(handle) = self.student_handle(id_number) else {
            tracing::debug!("No student {} to update", id_number);
            return;
        };
        let student = &mut self.student_records[handle];
        if let Some(name) = name {
            student.person_mut().name = name.to_string();
        }
        if let Some(major) = major {
            student.major = major.to_string();
        }
    }

    pub fn student(&self, id_number: &str) -> Option<&Student> {
        self.student_handle(id_number)
            .map(|handle| &self.student_records[handle])
    }

    pub fn student_handle(&self, id_number: &str) -> Option<idx::Student> {
        self.students.get(id_number).copied()
    }

    /// Record behind a roster or enrollment reference, whether or not its id is still bound.
    ///
    /// `None` for an index this system never allocated.
    pub fn student_record(&self, handle: idx::Student) -> Option<&Student> {
        (handle < self.student_records.next_index()).then(|| &self.student_records[handle])
    }

    /// Registered students, ordered by id.
    pub fn students(&self) -> impl Iterator<Item = &Student> + '_ {
        self.students
            .values()
            .map(move |handle| &self.student_records[*handle])
    }

    // Instructors

    pub fn add_instructor(&mut self, instructor: Instructor) {
        let id = instructor.id_number().clone();
        if self.instructors.insert(id.clone(), instructor).is_some() {
            tracing::debug!("Instructor {} replaced", id);
        }
    }

    pub fn remove_instructor(&mut self, id_number: &str) {
        if self.instructors.remove(id_number).is_none() {
            tracing::debug!("No instructor {} to remove", id_number);
        }
    }

    pub fn update_instructor(
        &mut self,
        id_number: &str,
        name: Option<&str>,
        department: Option<&str>,
    ) {
        let Some(instructor) = self.instructors.get_mut(id_number) else {
            tracing::debug!("No instructor {} to update", id_number);
            return;
        };
        if let Some(name) = name {
            instructor.person_mut().name = name.to_string();
        }
        if let Some(department) = department {
            instructor.department = department.to_string();
        }
    }

    pub fn instructor(&self, id_number: &str) -> Option<&Instructor> {
        self.instructors.get(id_number)
    }

    pub fn instructors(&self) -> impl Iterator<Item = &Instructor> + '_ {
        self.instructors.values()
    }

    // Courses

    pub fn add_course(&mut self, mut course: Course) {
        let dropped = course.retain_students_before(self.student_records.next_index());
        if dropped > 0 {
            tracing::warn!(
                "Course {}: dropped {} roster entries unknown to this system",
                course.course_id,
                dropped
            );
        }
        let handle = self.course_records.next_index();
        let id = course.course_id.clone();
        self.course_records.push(course);
        if self.courses.insert(id.clone(), handle).is_some() {
            tracing::debug!("Course {} replaced", id);
        }
    }

    pub fn remove_course(&mut self, course_id: &str) {
        if self.courses.remove(course_id).is_none() {
            tracing::debug!("No course {} to remove", course_id);
        }
    }

    pub fn update_course(&mut self, course_id: &str, course_name: Option<&str>) {
        match (self.courses.get(course_id).copied(), course_name) {
            (Some(handle), Some(name)) => {
                self.course_records[handle].course_name = name.to_string();
            }
            (None, _) => tracing::debug!("No course {} to update", course_id),
            (Some(_), None) => {}
        }
    }

    pub fn course(&self, course_id: &str) -> Option<&Course> {
        self.courses
            .get(course_id)
            .map(|handle| &self.course_records[*handle])
    }

    /// Removes the first roster entry of `student_id` from `course_id`.
    ///
    /// Only the roster changes, enrollments are kept.
    pub fn remove_student_from_course(&mut self, student_id: &str, course_id: &str) -> Result<()> {
        let student = self
            .student_handle(student_id)
            .ok_or_else(|| RecordsError::UnknownStudent {
                id: student_id.to_string(),
            })?;
        let course = self
            .courses
            .get(course_id)
            .copied()
            .ok_or_else(|| RecordsError::UnknownCourse {
                id: course_id.to_string(),
            })?;
        if !self.course_records[course].remove_student(student) {
            return Err(RecordsError::NotOnRoster {
                course_id: course_id.to_string(),
                student_id: student_id.to_string(),
            });
        }
        Ok(())
    }

    /// `None` for an index this system never allocated.
    pub fn course_record(&self, handle: idx::Course) -> Option<&Course> {
        (handle < self.course_records.next_index()).then(|| &self.course_records[handle])
    }

    /// Registered courses, ordered by id.
    pub fn courses(&self) -> impl Iterator<Item = &Course> + '_ {
        self.courses
            .values()
            .map(move |handle| &self.course_records[*handle])
    }

    // Enrollments

    /// Adds the student to the course roster and records a new, ungraded enrollment.
    ///
    /// Nothing is changed when either id is unknown.
    pub fn enroll_student_in_course(
        &mut self,
        student_id: &str,
        course_id: &str,
    ) -> Result<idx::Enrollment> {
        let (student, course) = match (self.student_handle(student_id), self.courses.get(course_id))
        {
            (Some(student), Some(course)) => (student, *course),
            (student, _) => {
                tracing::warn!(
                    "Enrollment failed: Student ID {} or Course ID {} does not exist.",
                    student_id,
                    course_id
                );
                return Err(if student.is_none() {
                    RecordsError::UnknownStudent {
                        id: student_id.to_string(),
                    }
                } else {
                    RecordsError::UnknownCourse {
                        id: course_id.to_string(),
                    }
                });
            }
        };

        self.course_records[course].add_student(student);
        let handle = self.enrollments.next_index();
        self.enrollments.push(Enrollment::new(student, course));
        tracing::debug!("Enrolled {} in {}", student_id, course_id);
        Ok(handle)
    }

    /// Grades the first enrollment of `student_id` in `course_id`, if there is one.
    pub fn assign_grade(&mut self, student_id: &str, course_id: &str, grade: impl Into<Grade>) {
        let found = self.enrollments.iter().position(|enrollment| {
            self.student_records[enrollment.student()].id_number().as_str() == student_id
                && self.course_records[enrollment.course()].course_id.as_str() == course_id
        });
        match found {
            Some(pos) => self.enrollments[idx::Enrollment::new(pos)].assign_grade(grade),
            None => tracing::debug!("No enrollment of {} in {} to grade", student_id, course_id),
        }
    }

    pub fn get_students_in_course(&self, course_id: &str) -> Vec<&Student> {
        self.course(course_id)
            .map(|course| {
                course
                    .enrolled_students()
                    .iter()
                    .filter_map(|handle| self.student_record(*handle))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Courses of every enrollment of `student_id`, in enrollment order.
    pub fn get_courses_for_student(&self, student_id: &str) -> Vec<&Course> {
        if !self.students.contains_key(student_id) {
            return Vec::new();
        }
        self.enrollments
            .iter()
            .filter(|enrollment| {
                self.student_records[enrollment.student()].id_number().as_str() == student_id
            })
            .map(|enrollment| &self.course_records[enrollment.course()])
            .collect()
    }

    /// # Panics
    ///
    /// If `handle` was issued by another system.
    pub fn enrollment(&self, handle: idx::Enrollment) -> &Enrollment {
        &self.enrollments[handle]
    }

    pub fn enrollment_mut(&mut self, handle: idx::Enrollment) -> &mut Enrollment {
        &mut self.enrollments[handle]
    }

    /// Every enrollment, in enrollment order.
    pub fn enrollments(&self) -> impl Iterator<Item = &Enrollment> + '_ {
        self.enrollments.iter()
    }

    // Rendering

    pub fn describe_course(&self, course_id: &str) -> Option<String> {
        self.course(course_id)
            .map(|course| course.display(&self.student_records))
    }

    pub fn describe_enrollment(&self, enrollment: &Enrollment) -> String {
        enrollment.display(&self.student_records, &self.course_records)
    }
}
