use crate::entities::{course, homework, resource, student, student_course};
use models::report::{
    CourseLateHomework, CourseResourceCount, HomeworkSubmission, LateHomework, StudentCourseCount,
    StudentEnrollment, StudentHomeworks,
};
use sea_orm::{
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, FromQueryResult, QueryFilter, QueryOrder,
    QuerySelect,
    prelude::{DateTimeUtc, Expr},
};

/// One late submission joined with its course and student
#[derive(Debug, FromQueryResult)]
struct LateHomeworkRow {
    course_id: i32,
    course_name: String,
    start_date: DateTimeUtc,
    end_date: DateTimeUtc,
    content: String,
    submission_time: DateTimeUtc,
    student_name: String,
}

/// Read-only aggregate queries over the seeded data
pub struct ReportService;

impl ReportService {
    /// Every student with their registration date and number of enrolled courses,
    /// in insertion order
    pub async fn student_enrollments(
        db: &DatabaseConnection,
    ) -> Result<Vec<StudentEnrollment>, DbErr> {
        let rows = student::Entity::find()
            .select_only()
            .column(student::Column::Name)
            .column(student::Column::RegisteredOn)
            .column_as(student_course::Column::CourseId.count(), "course_count")
            .left_join(student_course::Entity)
            .group_by(student::Column::StudentId)
            .group_by(student::Column::Name)
            .group_by(student::Column::RegisteredOn)
            .order_by_asc(student::Column::StudentId)
            .into_tuple::<(String, DateTimeUtc, i64)>()
            .all(db)
            .await?;

        Ok(rows
            .into_iter()
            .map(|(name, registered_on, course_count)| StudentEnrollment {
                name,
                registered_on,
                course_count,
            })
            .collect())
    }

    /// Every course with the number of resources attached to it
    pub async fn course_resource_counts(
        db: &DatabaseConnection,
    ) -> Result<Vec<CourseResourceCount>, DbErr> {
        let rows = course::Entity::find()
            .select_only()
            .column(course::Column::Name)
            .column_as(resource::Column::ResourceId.count(), "resource_count")
            .left_join(resource::Entity)
            .group_by(course::Column::CourseId)
            .group_by(course::Column::Name)
            .order_by_asc(course::Column::CourseId)
            .into_tuple::<(String, i64)>()
            .all(db)
            .await?;

        Ok(rows
            .into_iter()
            .map(|(name, resource_count)| CourseResourceCount {
                name,
                resource_count,
            })
            .collect())
    }

    /// All homework handed in by the first student with the given name
    ///
    /// # Returns
    /// * `None` if no student has that name
    pub async fn homework_for_student(
        db: &DatabaseConnection,
        student_name: &str,
    ) -> Result<Option<StudentHomeworks>, DbErr> {
        let Some(student) = student::Entity::find()
            .filter(student::Column::Name.eq(student_name))
            .order_by_asc(student::Column::StudentId)
            .one(db)
            .await?
        else {
            return Ok(None);
        };

        let homeworks = homework::Entity::find()
            .select_only()
            .column_as(course::Column::Name, "course_name")
            .column(homework::Column::Content)
            .column(homework::Column::SubmissionTime)
            .inner_join(course::Entity)
            .filter(homework::Column::StudentId.eq(student.student_id))
            .order_by_asc(homework::Column::HomeworkId)
            .into_tuple::<(String, String, DateTimeUtc)>()
            .all(db)
            .await?
            .into_iter()
            .map(|(course_name, content, submission_time)| HomeworkSubmission {
                course_name,
                content,
                submission_time,
            })
            .collect();

        Ok(Some(StudentHomeworks {
            student_name: student.name,
            homeworks,
        }))
    }

    /// Students ranked by enrollment count, highest first
    ///
    /// Students with the same count keep their insertion order.
    pub async fn students_by_enrollment(
        db: &DatabaseConnection,
    ) -> Result<Vec<StudentCourseCount>, DbErr> {
        let rows = student::Entity::find()
            .select_only()
            .column(student::Column::Name)
            .column_as(student_course::Column::CourseId.count(), "course_count")
            .left_join(student_course::Entity)
            .group_by(student::Column::StudentId)
            .group_by(student::Column::Name)
            .order_by_desc(student_course::Column::CourseId.count())
            .order_by_asc(student::Column::StudentId)
            .into_tuple::<(String, i64)>()
            .all(db)
            .await?;

        Ok(rows
            .into_iter()
            .map(|(name, course_count)| StudentCourseCount { name, course_count })
            .collect())
    }

    /// Courses that received at least one homework after their end date,
    /// each with only its late submissions
    pub async fn courses_with_late_homework(
        db: &DatabaseConnection,
    ) -> Result<Vec<CourseLateHomework>, DbErr> {
        let rows = homework::Entity::find()
            .select_only()
            .column(course::Column::CourseId)
            .column_as(course::Column::Name, "course_name")
            .column(course::Column::StartDate)
            .column(course::Column::EndDate)
            .column(homework::Column::Content)
            .column(homework::Column::SubmissionTime)
            .column_as(student::Column::Name, "student_name")
            .inner_join(course::Entity)
            .inner_join(student::Entity)
            .filter(
                Expr::col((homework::Entity, homework::Column::SubmissionTime))
                    .gt(Expr::col((course::Entity, course::Column::EndDate))),
            )
            .order_by_asc(course::Column::CourseId)
            .order_by_asc(homework::Column::HomeworkId)
            .into_model::<LateHomeworkRow>()
            .all(db)
            .await?;

        // Rows arrive sorted by course, so each course is one contiguous run
        let mut courses: Vec<(i32, CourseLateHomework)> = Vec::new();
        for row in rows {
            let late = LateHomework {
                content: row.content,
                submission_time: row.submission_time,
                student_name: row.student_name,
            };

            if let Some((course_id, course)) = courses.last_mut()
                && *course_id == row.course_id
            {
                course.late_homeworks.push(late);
                continue;
            }

            courses.push((
                row.course_id,
                CourseLateHomework {
                    name: row.course_name,
                    start_date: row.start_date,
                    end_date: row.end_date,
                    late_homeworks: vec![late],
                },
            ));
        }

        Ok(courses.into_iter().map(|(_, course)| course).collect())
    }
}
