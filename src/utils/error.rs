use thiserror::Error;

#[derive(Error, Debug)]
pub enum RecordsError {
    #[error("Student ID {id} does not exist")]
    UnknownStudent { id: String },

    #[error("Course ID {id} does not exist")]
    UnknownCourse { id: String },

    #[error("Student {student_id} is not on the roster of course {course_id}")]
    NotOnRoster {
        course_id: String,
        student_id: String,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Configuration error in `{field}`: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value `{value}` for `{field}`: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl RecordsError {
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            RecordsError::UnknownStudent { .. }
            | RecordsError::UnknownCourse { .. }
            | RecordsError::NotOnRoster { .. } => ErrorSeverity::Medium,
            RecordsError::ConfigValidationError { .. }
            | RecordsError::InvalidConfigValueError { .. } => ErrorSeverity::High,
            RecordsError::SerializationError(_) | RecordsError::CsvError(_) => {
                ErrorSeverity::High
            }
            RecordsError::IoError(_) => ErrorSeverity::Critical,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            RecordsError::UnknownStudent { id } => format!("No student is registered with ID {}", id),
            RecordsError::UnknownCourse { id } => format!("No course is registered with ID {}", id),
            RecordsError::IoError(e) => format!("Could not read input: {}", e),
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            RecordsError::UnknownStudent { .. } => {
                "Declare the student under [[students]] before enrolling them"
            }
            RecordsError::UnknownCourse { .. } => {
                "Declare the course under [[courses]] before enrolling students in it"
            }
            RecordsError::NotOnRoster { .. } => "Check the course roster before removing a student",
            RecordsError::IoError(_) => "Make sure the roster file exists and is readable",
            RecordsError::SerializationError(_) | RecordsError::CsvError(_) => {
                "Try another output format"
            }
            RecordsError::ConfigValidationError { .. }
            | RecordsError::InvalidConfigValueError { .. } => "Fix the roster file and run again",
        }
    }
}

pub type Result<T> = std::result::Result<T, RecordsError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enrollment_failure_message() {
        let err = RecordsError::UnknownCourse {
            id: "c9".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Course ID c9 does not exist"
        );
        assert_eq!(err.severity(), ErrorSeverity::Medium);
    }

    #[test]
    fn test_io_errors_are_critical() {
        let err: RecordsError = std::io::Error::new(std::io::ErrorKind::NotFound, "gone").into();
        assert_eq!(err.severity(), ErrorSeverity::Critical);
        assert!(err.user_friendly_message().contains("gone"));
    }
}
