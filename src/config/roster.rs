use crate::core::system::StudentManagementSystem;
use crate::core::RosterSource;
use crate::domain::model::{Course, Instructor, Student};
use crate::domain::ports::Member;
use crate::utils::error::{RecordsError, Result};
use crate::utils::validation::{validate_declared, validate_non_empty_string, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;
use std::sync::LazyLock;

static ENV_VAR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\$\{([^}]+)\}").expect("env var pattern is valid")
});

/// A roster file: people, courses and enrollments to register at start-up.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RosterConfig {
    #[serde(default)]
    pub students: Vec<Student>,
    #[serde(default)]
    pub instructors: Vec<Instructor>,
    #[serde(default)]
    pub courses: Vec<CourseEntry>,
    #[serde(default)]
    pub enrollments: Vec<EnrollmentEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CourseEntry {
    pub course_name: String,
    pub course_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnrollmentEntry {
    pub student: String,
    pub course: String,
    pub grade: Option<String>,
}

impl RosterConfig {
    /// 從 TOML 檔案載入名冊
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(RecordsError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析名冊
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| RecordsError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${TERM_MAJOR})，未設定的變數保持原樣
    fn substitute_env_vars(content: &str) -> String {
        ENV_VAR
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }

    pub fn validate_config(&self) -> Result<()> {
        for student in &self.students {
            validate_non_empty_string("students.id_number", student.id_number().as_str())?;
            validate_non_empty_string("students.name", student.name())?;
        }
        for instructor in &self.instructors {
            validate_non_empty_string("instructors.id_number", instructor.id_number().as_str())?;
            validate_non_empty_string("instructors.name", instructor.name())?;
        }
        for course in &self.courses {
            validate_non_empty_string("courses.course_id", &course.course_id)?;
            validate_non_empty_string("courses.course_name", &course.course_name)?;
        }

        let student_ids: HashSet<&str> =
            self.students.iter().map(|s| s.id_number().as_str()).collect();
        let course_ids: HashSet<&str> = self.courses.iter().map(|c| c.course_id.as_str()).collect();
        for enrollment in &self.enrollments {
            validate_declared("enrollments.student", &enrollment.student, &student_ids)?;
            validate_declared("enrollments.course", &enrollment.course, &course_ids)?;
        }

        Ok(())
    }
}

impl Validate for RosterConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}

impl RosterSource for RosterConfig {
    fn populate(&self, system: &mut StudentManagementSystem) -> Result<()> {
        for student in &self.students {
            system.add_student(student.clone());
        }
        for instructor in &self.instructors {
            system.add_instructor(instructor.clone());
        }
        for course in &self.courses {
            system.add_course(Course::new(course.course_name.as_str(), course.course_id.as_str()));
        }
        for enrollment in &self.enrollments {
            system.enroll_student_in_course(&enrollment.student, &enrollment.course)?;
            if let Some(grade) = &enrollment.grade {
                system.assign_grade(&enrollment.student, &enrollment.course, grade.as_str());
            }
        }

        tracing::info!(
            "Loaded {} students, {} instructors, {} courses, {} enrollments",
            self.students.len(),
            self.instructors.len(),
            self.courses.len(),
            self.enrollments.len()
        );
        Ok(())
    }
}
