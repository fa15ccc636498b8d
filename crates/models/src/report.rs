//! Rows produced by the read-only report queries.
//!
//! Each row renders as a single `Label: value, Label: value` line through its
//! `Display` impl; the binary only decides which lines to print and in what
//! order.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter, Result as FmtResult};

/// Format used when only the calendar day matters
pub const DATE_FORMAT: &str = "%Y-%m-%d";
/// Format used for full submission timestamps
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S UTC";

/// A student together with the number of courses they are enrolled in
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudentEnrollment {
    pub name: String,
    pub registered_on: DateTime<Utc>,
    pub course_count: i64,
}

impl Display for StudentEnrollment {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(
            f,
            "Student Name: {}, Registered On: {}, Courses Enrolled: {}",
            self.name,
            self.registered_on.format(DATE_FORMAT),
            self.course_count
        )
    }
}

/// A course together with how many resources are attached to it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseResourceCount {
    pub name: String,
    pub resource_count: i64,
}

impl Display for CourseResourceCount {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(
            f,
            "Course Name: {}, Resources Count: {}",
            self.name, self.resource_count
        )
    }
}

/// One homework submission as seen from the submitting student
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HomeworkSubmission {
    pub course_name: String,
    pub content: String,
    pub submission_time: DateTime<Utc>,
}

impl Display for HomeworkSubmission {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(
            f,
            "- Course: {}, Content: {}, Submission Time: {}",
            self.course_name,
            self.content,
            self.submission_time.format(TIMESTAMP_FORMAT)
        )
    }
}

/// All homework handed in by a single student
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudentHomeworks {
    pub student_name: String,
    pub homeworks: Vec<HomeworkSubmission>,
}

/// Student name and enrollment count, used for the ranking report
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentCourseCount {
    pub name: String,
    pub course_count: i64,
}

impl Display for StudentCourseCount {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(
            f,
            "- Student Name: {}, Courses Enrolled: {}",
            self.name, self.course_count
        )
    }
}

/// A homework submitted after its course had already ended
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LateHomework {
    pub content: String,
    pub submission_time: DateTime<Utc>,
    pub student_name: String,
}

impl Display for LateHomework {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(
            f,
            "- Late Homework: {} by {} (Submitted: {})",
            self.content,
            self.student_name,
            self.submission_time.format(TIMESTAMP_FORMAT)
        )
    }
}

/// A course with every homework that was handed in after its end date
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourseLateHomework {
    pub name: String,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub late_homeworks: Vec<LateHomework>,
}

impl Display for CourseLateHomework {
    /// Renders the course header only; late homeworks are printed line by line
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(
            f,
            "Course: {} (Starts: {}, Ends: {})",
            self.name,
            self.start_date.format(DATE_FORMAT),
            self.end_date.format(DATE_FORMAT)
        )
    }
}
