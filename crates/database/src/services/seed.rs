use crate::entities::{course, homework, resource, student, student_course};
use chrono::{Duration, NaiveDate};
use log::info;
use models::{content_type::ContentType, resource_type::ResourceType};
use sea_orm::{
    ActiveValue::Set, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait,
    QueryOrder, QuerySelect, TransactionTrait, prelude::DateTimeUtc, prelude::Decimal,
};

/// Name, phone number, days since registration and birthday of each sample student
const STUDENTS: [(&str, &str, i64, (i32, u32, u32)); 5] = [
    ("Alice Smith", "1234567890", 30, (2000, 5, 15)),
    ("Bob Johnson", "0987654321", 60, (1999, 10, 20)),
    ("Charlie Brown", "1122334455", 90, (2001, 1, 25)),
    ("Diana Prince", "5544332211", 120, (1998, 7, 30)),
    ("Eve Adams", "9988776655", 150, (2002, 3, 5)),
];

/// Name, description, start and end offsets in days from now, price in cents
const COURSES: [(&str, &str, i64, i64, i64); 4] = [
    ("C# Advanced", "Advanced C# programming", -20, 10, 30000),
    (
        "SQL Fundamentals",
        "Introduction to SQL databases",
        -40,
        -10,
        25000,
    ),
    (
        "Web Development Basics",
        "HTML, CSS, JavaScript",
        -70,
        -20,
        35000,
    ),
    (
        "Data Structures",
        "Algorithms and Data Structures",
        -100,
        -50,
        40000,
    ),
];

/// Name, url, type and index of the owning course
const RESOURCES: [(&str, &str, ResourceType, usize); 5] = [
    (
        "C# Advanced Video 1",
        "http://example.com/csharp_video1",
        ResourceType::Video,
        0,
    ),
    (
        "C# Advanced Presentation",
        "http://example.com/csharp_pres",
        ResourceType::Presentation,
        0,
    ),
    (
        "SQL Book",
        "http://example.com/sql_book",
        ResourceType::Document,
        1,
    ),
    (
        "Web Dev Tutorial",
        "http://example.com/webdev_tut",
        ResourceType::Video,
        2,
    ),
    (
        "Data Structures Notes",
        "http://example.com/ds_notes",
        ResourceType::Document,
        3,
    ),
];

/// Content, type, days since submission, student index and course index
const HOMEWORKS: [(&str, ContentType, i64, usize, usize); 4] = [
    ("http://example.com/hw1.zip", ContentType::Zip, 5, 0, 0),
    ("http://example.com/hw2.pdf", ContentType::Pdf, 15, 1, 1),
    ("http://example.com/hw3.app", ContentType::Application, 25, 2, 2),
    ("http://example.com/hw4.zip", ContentType::Zip, 35, 0, 1),
];

/// Student index and course index of each enrollment
const ENROLLMENTS: [(usize, usize); 6] = [(0, 0), (0, 1), (1, 1), (2, 2), (3, 0), (4, 3)];

/// Number of rows each table received during a seeding run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedReport {
    pub students: u64,
    pub courses: u64,
    pub resources: u64,
    pub homeworks: u64,
    pub student_courses: u64,
}

impl SeedReport {
    pub fn total(&self) -> u64 {
        self.students + self.courses + self.resources + self.homeworks + self.student_courses
    }
}

/// Parent ids the child tables point at
///
/// Ids of parents inserted in this run are known up front. Ids of parents from an
/// earlier run are only looked up once a child table actually needs them.
struct ParentIds {
    students: Option<Vec<i32>>,
    courses: Option<Vec<i32>>,
}

impl ParentIds {
    async fn student_ids(&mut self, db: &DatabaseConnection) -> Result<Vec<i32>, DbErr> {
        if let Some(ids) = &self.students {
            return Ok(ids.clone());
        }

        let ids = SeedService::existing_student_ids(db).await?;
        self.students = Some(ids.clone());
        Ok(ids)
    }

    async fn course_ids(&mut self, db: &DatabaseConnection) -> Result<Vec<i32>, DbErr> {
        if let Some(ids) = &self.courses {
            return Ok(ids.clone());
        }

        let ids = SeedService::existing_course_ids(db).await?;
        self.courses = Some(ids.clone());
        Ok(ids)
    }
}

pub struct SeedService;

impl SeedService {
    /// Inserts the sample data into every table that is still empty
    ///
    /// Tables that already hold rows are left untouched, so running this
    /// repeatedly never duplicates data. Parents are seeded before the rows
    /// that reference them.
    ///
    /// # Arguments
    /// * `db` - The database connection
    /// * `now` - Reference point for every relative date in the sample data
    pub async fn seed(db: &DatabaseConnection, now: DateTimeUtc) -> Result<SeedReport, DbErr> {
        let mut report = SeedReport::default();

        let students = Self::seed_students(db, now).await?;
        if let Some(ids) = &students {
            report.students = ids.len() as u64;
        }

        let courses = Self::seed_courses(db, now).await?;
        if let Some(ids) = &courses {
            report.courses = ids.len() as u64;
        }

        let mut parents = ParentIds { students, courses };
        report.resources = Self::seed_resources(db, &mut parents).await?;
        report.homeworks = Self::seed_homeworks(db, now, &mut parents).await?;
        report.student_courses = Self::seed_student_courses(db, &mut parents).await?;

        info!("Seeding finished, {} rows inserted", report.total());
        Ok(report)
    }

    /// Returns the ids of the freshly inserted students, or `None` if the table was not empty
    async fn seed_students(
        db: &DatabaseConnection,
        now: DateTimeUtc,
    ) -> Result<Option<Vec<i32>>, DbErr> {
        if student::Entity::find().count(db).await? > 0 {
            info!("Students already present, skipping");
            return Ok(None);
        }

        // Rows go in one by one so every generated key is known to the children
        let txn = db.begin().await?;
        let mut ids = Vec::with_capacity(STUDENTS.len());

        for (name, phone_number, registered_days_ago, (year, month, day)) in STUDENTS {
            let new_student = student::ActiveModel {
                name: Set(name.to_string()),
                phone_number: Set(Some(phone_number.to_string())),
                registered_on: Set(now - Duration::days(registered_days_ago)),
                birthday: Set(NaiveDate::from_ymd_opt(year, month, day)),
                ..Default::default()
            };

            let inserted = student::Entity::insert(new_student).exec(&txn).await?;
            ids.push(inserted.last_insert_id);
        }

        txn.commit().await?;
        info!("Seeded {} students", ids.len());
        Ok(Some(ids))
    }

    /// Returns the ids of the freshly inserted courses, or `None` if the table was not empty
    async fn seed_courses(
        db: &DatabaseConnection,
        now: DateTimeUtc,
    ) -> Result<Option<Vec<i32>>, DbErr> {
        if course::Entity::find().count(db).await? > 0 {
            info!("Courses already present, skipping");
            return Ok(None);
        }

        let txn = db.begin().await?;
        let mut ids = Vec::with_capacity(COURSES.len());

        for (name, description, start_offset, end_offset, price_cents) in COURSES {
            let new_course = course::ActiveModel {
                name: Set(name.to_string()),
                description: Set(Some(description.to_string())),
                start_date: Set(now + Duration::days(start_offset)),
                end_date: Set(now + Duration::days(end_offset)),
                price: Set(Decimal::new(price_cents, 2)),
                ..Default::default()
            };

            let inserted = course::Entity::insert(new_course).exec(&txn).await?;
            ids.push(inserted.last_insert_id);
        }

        txn.commit().await?;
        info!("Seeded {} courses", ids.len());
        Ok(Some(ids))
    }

    async fn seed_resources(
        db: &DatabaseConnection,
        parents: &mut ParentIds,
    ) -> Result<u64, DbErr> {
        if resource::Entity::find().count(db).await? > 0 {
            info!("Resources already present, skipping");
            return Ok(0);
        }

        let course_ids = parents.course_ids(db).await?;

        let resources = RESOURCES
            .iter()
            .map(|&(name, url, resource_type, course)| resource::ActiveModel {
                name: Set(name.to_string()),
                url: Set(url.to_string()),
                resource_type: Set(resource_type),
                course_id: Set(course_ids[course]),
                ..Default::default()
            });

        let txn = db.begin().await?;
        let inserted = resource::Entity::insert_many(resources)
            .exec_without_returning(&txn)
            .await?;
        txn.commit().await?;

        info!("Seeded {inserted} resources");
        Ok(inserted)
    }

    async fn seed_homeworks(
        db: &DatabaseConnection,
        now: DateTimeUtc,
        parents: &mut ParentIds,
    ) -> Result<u64, DbErr> {
        if homework::Entity::find().count(db).await? > 0 {
            info!("Homeworks already present, skipping");
            return Ok(0);
        }

        let student_ids = parents.student_ids(db).await?;
        let course_ids = parents.course_ids(db).await?;

        let homeworks = HOMEWORKS.iter().map(
            |&(content, content_type, submitted_days_ago, student, course)| homework::ActiveModel {
                content: Set(content.to_string()),
                content_type: Set(content_type),
                submission_time: Set(now - Duration::days(submitted_days_ago)),
                student_id: Set(student_ids[student]),
                course_id: Set(course_ids[course]),
                ..Default::default()
            },
        );

        let txn = db.begin().await?;
        let inserted = homework::Entity::insert_many(homeworks)
            .exec_without_returning(&txn)
            .await?;
        txn.commit().await?;

        info!("Seeded {inserted} homeworks");
        Ok(inserted)
    }

    async fn seed_student_courses(
        db: &DatabaseConnection,
        parents: &mut ParentIds,
    ) -> Result<u64, DbErr> {
        if student_course::Entity::find().count(db).await? > 0 {
            info!("Enrollments already present, skipping");
            return Ok(0);
        }

        let student_ids = parents.student_ids(db).await?;
        let course_ids = parents.course_ids(db).await?;

        let enrollments = ENROLLMENTS
            .iter()
            .map(|&(student, course)| student_course::ActiveModel {
                student_id: Set(student_ids[student]),
                course_id: Set(course_ids[course]),
            });

        let txn = db.begin().await?;
        let inserted = student_course::Entity::insert_many(enrollments)
            .exec_without_returning(&txn)
            .await?;
        txn.commit().await?;

        info!("Seeded {inserted} enrollments");
        Ok(inserted)
    }

    /// Ids of the students that were seeded by an earlier run, in insertion order
    async fn existing_student_ids(db: &DatabaseConnection) -> Result<Vec<i32>, DbErr> {
        let ids = student::Entity::find()
            .select_only()
            .column(student::Column::StudentId)
            .order_by_asc(student::Column::StudentId)
            .limit(STUDENTS.len() as u64)
            .into_tuple::<i32>()
            .all(db)
            .await?;

        Self::ensure_parent_count("students", ids, STUDENTS.len())
    }

    /// Ids of the courses that were seeded by an earlier run, in insertion order
    async fn existing_course_ids(db: &DatabaseConnection) -> Result<Vec<i32>, DbErr> {
        let ids = course::Entity::find()
            .select_only()
            .column(course::Column::CourseId)
            .order_by_asc(course::Column::CourseId)
            .limit(COURSES.len() as u64)
            .into_tuple::<i32>()
            .all(db)
            .await?;

        Self::ensure_parent_count("courses", ids, COURSES.len())
    }

    /// Children index into the parent ids, so there must be one per sample row
    fn ensure_parent_count(table: &str, ids: Vec<i32>, expected: usize) -> Result<Vec<i32>, DbErr> {
        if ids.len() < expected {
            return Err(DbErr::RecordNotFound(format!(
                "expected at least {expected} rows in {table}, found {}",
                ids.len()
            )));
        }

        Ok(ids)
    }
}
