use anyhow::Result;
use student_records::{
    Course, Grade, Instructor, Member, RecordsError, Student, StudentManagementSystem,
};

fn names<'a>(students: Vec<&'a Student>) -> Vec<&'a str> {
    students.into_iter().map(|s| s.name()).collect()
}

#[test]
fn test_alice_takes_algorithms() -> Result<()> {
    let mut sms = StudentManagementSystem::new();
    sms.add_student(Student::new("Alice", "s1", "CS"));
    sms.add_course(Course::new("Algorithms", "c1"));

    let handle = sms.enroll_student_in_course("s1", "c1")?;
    assert_eq!(
        sms.describe_enrollment(sms.enrollment(handle)),
        "Student: Alice, Course: Algorithms, Grade: None"
    );
    assert_eq!(names(sms.get_students_in_course("c1")), vec!["Alice"]);

    sms.assign_grade("s1", "c1", "A");
    assert_eq!(sms.enrollment(handle).grade(), Some(&Grade::from("A")));
    assert_eq!(
        sms.describe_enrollment(sms.enrollment(handle)),
        "Student: Alice, Course: Algorithms, Grade: A"
    );
    Ok(())
}

#[test]
fn test_enrollment_links_both_sides() -> Result<()> {
    let mut sms = StudentManagementSystem::new();
    sms.add_student(Student::new("Alice", "s1", "CS"));
    sms.add_course(Course::new("Algorithms", "c1"));
    sms.add_course(Course::new("Compilers", "c2"));

    sms.enroll_student_in_course("s1", "c1")?;
    sms.enroll_student_in_course("s1", "c2")?;

    let courses: Vec<&str> = sms
        .get_courses_for_student("s1")
        .iter()
        .map(|c| c.course_name.as_str())
        .collect();
    assert_eq!(courses, vec!["Algorithms", "Compilers"]);
    assert_eq!(
        sms.describe_course("c2").as_deref(),
        Some("Course Name: Compilers, Course ID: c2, Enrolled Students: Alice")
    );
    Ok(())
}

#[test]
fn test_failed_enrollment_leaves_state_untouched() {
    let mut sms = StudentManagementSystem::new();
    sms.add_student(Student::new("Alice", "s1", "CS"));
    sms.add_course(Course::new("Algorithms", "c1"));

    let err = sms.enroll_student_in_course("s2", "c1").unwrap_err();
    assert_eq!(
        err.to_string(),
        "Student ID s2 does not exist"
    );
    assert!(matches!(
        sms.enroll_student_in_course("s1", "c2"),
        Err(RecordsError::UnknownCourse { .. })
    ));

    assert_eq!(sms.enrollments().count(), 0);
    assert!(sms.get_students_in_course("c1").is_empty());
    assert!(sms.get_courses_for_student("s1").is_empty());
}

#[test]
fn test_grading_a_pair_that_is_not_enrolled_changes_nothing() -> Result<()> {
    let mut sms = StudentManagementSystem::new();
    sms.add_student(Student::new("Alice", "s1", "CS"));
    sms.add_student(Student::new("Bob", "s2", "Math"));
    sms.add_course(Course::new("Algorithms", "c1"));
    let handle = sms.enroll_student_in_course("s1", "c1")?;

    sms.assign_grade("s2", "c1", "A");
    sms.assign_grade("s9", "c9", "A");

    assert_eq!(sms.enrollments().count(), 1);
    assert!(sms.enrollment(handle).grade().is_none());
    Ok(())
}

#[test]
fn test_people_crud() {
    let mut sms = StudentManagementSystem::new();
    sms.add_student(Student::new("Alice", "s1", "CS"));
    sms.add_student(Student::new("Alice Two", "s1", "Art"));
    sms.add_instructor(Instructor::new("Dr. Smith", "i1", "CS"));

    assert_eq!(sms.students().count(), 1);
    assert_eq!(
        sms.student("s1").map(|s| s.to_string()).as_deref(),
        Some("Name: Alice Two, ID: s1, Major: Art")
    );

    sms.update_instructor("i1", Some("Prof. Smith"), None);
    assert_eq!(sms.instructor("i1").unwrap().name(), "Prof. Smith");
    assert_eq!(sms.instructor("i1").unwrap().department, "CS");

    sms.remove_instructor("i1");
    sms.remove_instructor("i1");
    assert_eq!(sms.instructors().count(), 0);
}

#[test]
fn test_removing_unknown_course_keeps_courses() {
    let mut sms = StudentManagementSystem::new();
    sms.add_course(Course::new("Algorithms", "c1"));

    sms.remove_course("c2");

    let ids: Vec<&str> = sms.courses().map(|c| c.course_id.as_str()).collect();
    assert_eq!(ids, vec!["c1"]);
}

#[test]
fn test_course_copied_into_fresh_system_has_empty_roster() -> Result<()> {
    let mut registrar = StudentManagementSystem::new();
    registrar.add_student(Student::new("Alice", "s1", "CS"));
    registrar.add_course(Course::new("Algorithms", "c1"));
    registrar.enroll_student_in_course("s1", "c1")?;

    let mut archive = StudentManagementSystem::new();
    archive.add_course(registrar.course("c1").unwrap().clone());

    assert!(archive.get_students_in_course("c1").is_empty());
    let text = student_records::Snapshot::capture(&archive)
        .render(student_records::core::report::OutputFormat::Text)?;
    assert!(text.contains("Course Name: Algorithms, Course ID: c1, Enrolled Students: "));
    Ok(())
}
