//! Arena indices for entity records.
//!
//! Rosters and enrollments refer to records by index rather than by id, so that a record stays
//! reachable from them after its id has been removed from (or re-bound in) the aggregate's maps.

safe_index::new! {
    /// Student record index.
    Student,
    /// Maps a [`Student`] to something.
    map: StudentMap,
}

safe_index::new! {
    /// Course record index.
    Course,
    /// Maps a [`Course`] to something.
    map: CourseMap,
}

safe_index::new! {
    /// Enrollment record index.
    Enrollment,
    /// Maps an [`Enrollment`] to something.
    map: EnrollmentMap,
}
