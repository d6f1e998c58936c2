use crate::core::system::StudentManagementSystem;
use crate::domain::model::{Grade, Instructor, Student};
use crate::domain::ports::Member;
use crate::utils::error::{RecordsError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Csv,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "csv" => Ok(OutputFormat::Csv),
            other => Err(format!("unsupported format `{}` (text, json, csv)", other)),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OutputFormat::Text => "text",
            OutputFormat::Json => "json",
            OutputFormat::Csv => "csv",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CourseRow {
    pub course_id: String,
    pub course_name: String,
    pub enrolled_students: Vec<String>,
    #[serde(skip)]
    pub rendered: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct EnrollmentRow {
    pub student_id: String,
    pub student_name: String,
    pub course_id: String,
    pub course_name: String,
    pub grade: Option<String>,
    #[serde(skip)]
    pub rendered: String,
}

/// Point-in-time copy of everything a system holds, ready to print.
#[derive(Debug, Clone, Serialize)]
pub struct Snapshot {
    pub students: Vec<Student>,
    pub instructors: Vec<Instructor>,
    pub courses: Vec<CourseRow>,
    pub enrollments: Vec<EnrollmentRow>,
}

impl Snapshot {
    pub fn capture(system: &StudentManagementSystem) -> Self {
        let courses = system
            .courses()
            .map(|course| CourseRow {
                course_id: course.course_id.to_string(),
                course_name: course.course_name.clone(),
                enrolled_students: course
                    .enrolled_students()
                    .iter()
                    .filter_map(|s| system.student_record(*s))
                    .map(|s| s.name().to_string())
                    .collect(),
                rendered: system
                    .describe_course(course.course_id.as_str())
                    .unwrap_or_default(),
            })
            .collect();

        let enrollments = system
            .enrollments()
            .filter_map(|enrollment| {
                let student = system.student_record(enrollment.student())?;
                let course = system.course_record(enrollment.course())?;
                Some(EnrollmentRow {
                    student_id: student.id_number().to_string(),
                    student_name: student.name().to_string(),
                    course_id: course.course_id.to_string(),
                    course_name: course.course_name.clone(),
                    grade: enrollment.grade().map(Grade::to_string),
                    rendered: system.describe_enrollment(enrollment),
                })
            })
            .collect();

        Self {
            students: system.students().cloned().collect(),
            instructors: system.instructors().cloned().collect(),
            courses,
            enrollments,
        }
    }

    pub fn render(&self, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Text => Ok(self.to_text()),
            OutputFormat::Json => Ok(serde_json::to_string_pretty(self)?),
            OutputFormat::Csv => self.to_csv(),
        }
    }

    fn to_text(&self) -> String {
        let mut lines = vec!["Students:".to_string()];
        lines.extend(self.students.iter().map(|s| format!("  {}", s)));
        lines.push("Instructors:".to_string());
        lines.extend(self.instructors.iter().map(|i| format!("  {}", i)));
        lines.push("Courses:".to_string());
        lines.extend(self.courses.iter().map(|c| format!("  {}", c.rendered)));
        lines.push("Enrollments:".to_string());
        lines.extend(self.enrollments.iter().map(|e| format!("  {}", e.rendered)));
        lines.join("\n")
    }

    fn to_csv(&self) -> Result<String> {
        let mut writer = csv::Writer::from_writer(Vec::new());
        writer.write_record([
            "student_id",
            "student_name",
            "course_id",
            "course_name",
            "grade",
        ])?;
        for row in &self.enrollments {
            writer.write_record([
                row.student_id.as_str(),
                row.student_name.as_str(),
                row.course_id.as_str(),
                row.course_name.as_str(),
                row.grade.as_deref().unwrap_or(""),
            ])?;
        }
        let bytes = writer
            .into_inner()
            .map_err(|e| RecordsError::IoError(e.into_error()))?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}
