use anyhow::{Context, Result};
use database::services::ReportService;
use sea_orm::DatabaseConnection;
use std::io::Write;

/// Student whose homework submissions are listed by the third query
pub const SAMPLE_STUDENT: &str = "Alice Smith";

/// Runs every query and writes its results as text lines
///
/// # Arguments
/// * `db` - The database connection
/// * `out` - Destination of the report, usually stdout
/// * `student_name` - Student to list homework submissions for
pub async fn write_report<W: Write>(
    db: &DatabaseConnection,
    out: &mut W,
    student_name: &str,
) -> Result<()> {
    writeln!(out, "--- Student System Queries ---")?;

    write_student_enrollments(db, out).await?;
    write_course_resources(db, out).await?;
    write_student_homework(db, out, student_name).await?;
    write_ranked_students(db, out).await?;
    write_late_homework(db, out).await?;

    Ok(())
}

async fn write_student_enrollments<W: Write>(db: &DatabaseConnection, out: &mut W) -> Result<()> {
    writeln!(
        out,
        "\n1. List all students with their registered date and number of courses."
    )?;

    let rows = ReportService::student_enrollments(db)
        .await
        .context("failed to list student enrollments")?;
    for row in rows {
        writeln!(out, "{row}")?;
    }

    Ok(())
}

async fn write_course_resources<W: Write>(db: &DatabaseConnection, out: &mut W) -> Result<()> {
    writeln!(out, "\n2. List all courses with total number of resources.")?;

    let rows = ReportService::course_resource_counts(db)
        .await
        .context("failed to count course resources")?;
    for row in rows {
        writeln!(out, "{row}")?;
    }

    Ok(())
}

async fn write_student_homework<W: Write>(
    db: &DatabaseConnection,
    out: &mut W,
    student_name: &str,
) -> Result<()> {
    writeln!(
        out,
        "\n3. Show all homework submissions for a given student (e.g., '{student_name}')."
    )?;

    let found = ReportService::homework_for_student(db, student_name)
        .await
        .context("failed to look up student homework")?;

    match found {
        Some(student) => {
            writeln!(out, "Homework submissions for {}:", student.student_name)?;
            for homework in student.homeworks {
                writeln!(out, "{homework}")?;
            }
        }
        None => writeln!(out, "Student with name '{student_name}' not found.")?,
    }

    Ok(())
}

async fn write_ranked_students<W: Write>(db: &DatabaseConnection, out: &mut W) -> Result<()> {
    writeln!(
        out,
        "\n4. Show students ordered by number of courses they are enrolled in."
    )?;

    let rows = ReportService::students_by_enrollment(db)
        .await
        .context("failed to rank students by enrollment")?;

    writeln!(out, "Students ordered by number of courses enrolled:")?;
    for row in rows {
        writeln!(out, "{row}")?;
    }

    Ok(())
}

async fn write_late_homework<W: Write>(db: &DatabaseConnection, out: &mut W) -> Result<()> {
    writeln!(
        out,
        "\n5. Show all courses that have at least one homework submitted after their end date."
    )?;

    let courses = ReportService::courses_with_late_homework(db)
        .await
        .context("failed to find late homework")?;

    if courses.is_empty() {
        writeln!(out, "No courses found with late homework submissions.")?;
        return Ok(());
    }

    writeln!(out, "Courses with late homework submissions:")?;
    for course in courses {
        writeln!(out, "{course}")?;
        for homework in &course.late_homeworks {
            writeln!(out, "{homework}")?;
        }
    }

    Ok(())
}
