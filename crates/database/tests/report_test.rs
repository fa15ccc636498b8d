mod common;

use common::{days_ago, fixed_now, seeded_db};
use database::entities::{course, homework, student};
use database::services::ReportService;
use models::content_type::ContentType;
use sea_orm::{
    ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QuerySelect,
};

async fn course_id(db: &DatabaseConnection, name: &str) -> i32 {
    course::Entity::find()
        .select_only()
        .column(course::Column::CourseId)
        .filter(course::Column::Name.eq(name))
        .into_tuple::<i32>()
        .one(db)
        .await
        .unwrap()
        .expect("course should exist")
}

async fn student_id(db: &DatabaseConnection, name: &str) -> i32 {
    student::Entity::find()
        .filter(student::Column::Name.eq(name))
        .one(db)
        .await
        .unwrap()
        .expect("student should exist")
        .student_id
}

async fn add_homework(
    db: &DatabaseConnection,
    content: &str,
    submitted_days_ago: i64,
    student: &str,
    course: &str,
) {
    let new_homework = homework::ActiveModel {
        content: Set(content.to_string()),
        content_type: Set(ContentType::Zip),
        submission_time: Set(days_ago(submitted_days_ago)),
        student_id: Set(student_id(db, student).await),
        course_id: Set(course_id(db, course).await),
        ..Default::default()
    };

    homework::Entity::insert(new_homework)
        .exec(db)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_student_enrollments() {
    let db = seeded_db().await;

    let rows = ReportService::student_enrollments(&db).await.unwrap();

    let summary: Vec<(&str, i64)> = rows
        .iter()
        .map(|row| (row.name.as_str(), row.course_count))
        .collect();
    assert_eq!(
        summary,
        vec![
            ("Alice Smith", 2),
            ("Bob Johnson", 1),
            ("Charlie Brown", 1),
            ("Diana Prince", 1),
            ("Eve Adams", 1),
        ]
    );
    assert_eq!(rows[0].registered_on, days_ago(30));
    assert_eq!(rows[4].registered_on, days_ago(150));
}

#[tokio::test]
async fn test_student_without_enrollments_counts_zero() {
    let db = seeded_db().await;

    let new_student = student::ActiveModel {
        name: Set("Frank Castle".to_string()),
        registered_on: Set(fixed_now()),
        ..Default::default()
    };
    student::Entity::insert(new_student).exec(&db).await.unwrap();

    let rows = ReportService::student_enrollments(&db).await.unwrap();

    assert_eq!(rows.len(), 6);
    assert_eq!(rows[5].name, "Frank Castle");
    assert_eq!(rows[5].course_count, 0);

    let ranked = ReportService::students_by_enrollment(&db).await.unwrap();
    let last = ranked.last().unwrap();
    assert_eq!(last.name, "Frank Castle");
    assert_eq!(last.course_count, 0);
}

#[tokio::test]
async fn test_course_resource_counts() {
    let db = seeded_db().await;

    let rows = ReportService::course_resource_counts(&db).await.unwrap();

    let summary: Vec<(&str, i64)> = rows
        .iter()
        .map(|row| (row.name.as_str(), row.resource_count))
        .collect();
    assert_eq!(
        summary,
        vec![
            ("C# Advanced", 2),
            ("SQL Fundamentals", 1),
            ("Web Development Basics", 1),
            ("Data Structures", 1),
        ]
    );
}

#[tokio::test]
async fn test_homework_for_student() {
    let db = seeded_db().await;

    let alice = ReportService::homework_for_student(&db, "Alice Smith")
        .await
        .unwrap()
        .expect("Alice should be found");

    assert_eq!(alice.student_name, "Alice Smith");
    assert_eq!(alice.homeworks.len(), 2);

    assert_eq!(alice.homeworks[0].course_name, "C# Advanced");
    assert_eq!(alice.homeworks[0].content, "http://example.com/hw1.zip");
    assert_eq!(alice.homeworks[0].submission_time, days_ago(5));

    assert_eq!(alice.homeworks[1].course_name, "SQL Fundamentals");
    assert_eq!(alice.homeworks[1].content, "http://example.com/hw4.zip");
    assert_eq!(alice.homeworks[1].submission_time, days_ago(35));
}

#[tokio::test]
async fn test_homework_for_student_without_submissions() {
    let db = seeded_db().await;

    let diana = ReportService::homework_for_student(&db, "Diana Prince")
        .await
        .unwrap()
        .expect("Diana should be found");

    assert!(diana.homeworks.is_empty());
}

#[tokio::test]
async fn test_homework_for_unknown_student() {
    let db = seeded_db().await;

    let result = ReportService::homework_for_student(&db, "Nobody Here")
        .await
        .unwrap();

    assert!(result.is_none());
}

#[tokio::test]
async fn test_students_by_enrollment_ordering() {
    let db = seeded_db().await;

    let rows = ReportService::students_by_enrollment(&db).await.unwrap();

    assert_eq!(rows.len(), 5);
    assert!(
        rows.windows(2)
            .all(|pair| pair[0].course_count >= pair[1].course_count)
    );

    // Ties keep insertion order
    let names: Vec<&str> = rows.iter().map(|row| row.name.as_str()).collect();
    assert_eq!(
        names,
        vec![
            "Alice Smith",
            "Bob Johnson",
            "Charlie Brown",
            "Diana Prince",
            "Eve Adams",
        ]
    );
    assert_eq!(rows[0].course_count, 2);
}

#[tokio::test]
async fn test_no_late_homework_in_sample_data() {
    let db = seeded_db().await;

    let courses = ReportService::courses_with_late_homework(&db).await.unwrap();

    assert!(courses.is_empty());
}

#[tokio::test]
async fn test_late_homework_is_reported() {
    let db = seeded_db().await;

    // SQL Fundamentals ended 10 days ago
    add_homework(
        &db,
        "http://example.com/late.zip",
        3,
        "Bob Johnson",
        "SQL Fundamentals",
    )
    .await;

    let courses = ReportService::courses_with_late_homework(&db).await.unwrap();

    assert_eq!(courses.len(), 1);
    let course = &courses[0];
    assert_eq!(course.name, "SQL Fundamentals");
    assert_eq!(course.start_date, days_ago(40));
    assert_eq!(course.end_date, days_ago(10));

    // Bob's on-time hw2 for the same course is left out
    assert_eq!(course.late_homeworks.len(), 1);
    assert_eq!(course.late_homeworks[0].content, "http://example.com/late.zip");
    assert_eq!(course.late_homeworks[0].student_name, "Bob Johnson");
    assert_eq!(course.late_homeworks[0].submission_time, days_ago(3));
}

#[tokio::test]
async fn test_late_homework_grouped_by_course() {
    let db = seeded_db().await;

    add_homework(&db, "http://example.com/ds1.zip", 40, "Eve Adams", "Data Structures").await;
    add_homework(
        &db,
        "http://example.com/web1.zip",
        1,
        "Charlie Brown",
        "Web Development Basics",
    )
    .await;
    add_homework(&db, "http://example.com/ds2.zip", 2, "Alice Smith", "Data Structures").await;
    // C# Advanced is still running, so this one is on time
    add_homework(&db, "http://example.com/cs.zip", 1, "Diana Prince", "C# Advanced").await;

    let courses = ReportService::courses_with_late_homework(&db).await.unwrap();

    let names: Vec<&str> = courses.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["Web Development Basics", "Data Structures"]);

    let data_structures: Vec<&str> = courses[1]
        .late_homeworks
        .iter()
        .map(|h| h.student_name.as_str())
        .collect();
    assert_eq!(data_structures, vec!["Eve Adams", "Alice Smith"]);

    assert!(
        courses
            .iter()
            .flat_map(|c| c.late_homeworks.iter().map(move |h| (c, h)))
            .all(|(c, h)| h.submission_time > c.end_date)
    );
}
