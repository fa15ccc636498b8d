use sea_orm_migration::{prelude::*, sea_orm::DatabaseBackend};

#[derive(DeriveMigrationName)]
pub struct Migration;

/// `varchar(n)` is not enforced by every engine, so lengths are also checked explicitly
fn max_length(column: &str, len: u32) -> SimpleExpr {
    Expr::cust(format!("length({column}) <= {len}"))
}

/// Rejects any character outside ASCII by comparing byte and character lengths
fn ascii_only(backend: DatabaseBackend, column: &str) -> SimpleExpr {
    match backend {
        DatabaseBackend::Sqlite => {
            Expr::cust(format!("length(CAST({column} AS BLOB)) = length({column})"))
        }
        _ => Expr::cust(format!("octet_length({column}) = char_length({column})")),
    }
}

/// SQLite caps decimal precision at 16 digits
fn price_column(backend: DatabaseBackend) -> ColumnDef {
    let mut column = ColumnDef::new(Courses::Price);
    match backend {
        DatabaseBackend::Sqlite => column.decimal_len(16, 2),
        _ => column.decimal_len(18, 2),
    };
    column.not_null().to_owned()
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let backend = manager.get_database_backend();

        // Create students table
        manager
            .create_table(
                Table::create()
                    .table(Students::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Students::StudentId)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Students::Name)
                            .string_len(100)
                            .not_null()
                            .check(max_length("name", 100)),
                    )
                    .col(
                        ColumnDef::new(Students::PhoneNumber)
                            .string_len(10)
                            .check(max_length("phone_number", 10))
                            .check(ascii_only(backend, "phone_number")),
                    )
                    .col(
                        ColumnDef::new(Students::RegisteredOn)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Students::Birthday).date())
                    .to_owned(),
            )
            .await?;

        // Create courses table
        manager
            .create_table(
                Table::create()
                    .table(Courses::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Courses::CourseId)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Courses::Name)
                            .string_len(80)
                            .not_null()
                            .check(max_length("name", 80)),
                    )
                    .col(ColumnDef::new(Courses::Description).text())
                    .col(
                        ColumnDef::new(Courses::StartDate)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Courses::EndDate)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(price_column(backend))
                    .to_owned(),
            )
            .await?;

        // Create resources table
        manager
            .create_table(
                Table::create()
                    .table(Resources::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Resources::ResourceId)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Resources::Name)
                            .string_len(50)
                            .not_null()
                            .check(max_length("name", 50)),
                    )
                    .col(
                        ColumnDef::new(Resources::Url)
                            .text()
                            .not_null()
                            .check(ascii_only(backend, "url")),
                    )
                    .col(ColumnDef::new(Resources::ResourceType).integer().not_null())
                    .col(ColumnDef::new(Resources::CourseId).integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-resources-course_id")
                            .from(Resources::Table, Resources::CourseId)
                            .to(Courses::Table, Courses::CourseId),
                    )
                    .to_owned(),
            )
            .await?;

        // Create homeworks table
        manager
            .create_table(
                Table::create()
                    .table(Homeworks::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Homeworks::HomeworkId)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Homeworks::Content)
                            .text()
                            .not_null()
                            .check(ascii_only(backend, "content")),
                    )
                    .col(ColumnDef::new(Homeworks::ContentType).integer().not_null())
                    .col(
                        ColumnDef::new(Homeworks::SubmissionTime)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Homeworks::StudentId).integer().not_null())
                    .col(ColumnDef::new(Homeworks::CourseId).integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-homeworks-student_id")
                            .from(Homeworks::Table, Homeworks::StudentId)
                            .to(Students::Table, Students::StudentId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-homeworks-course_id")
                            .from(Homeworks::Table, Homeworks::CourseId)
                            .to(Courses::Table, Courses::CourseId),
                    )
                    .to_owned(),
            )
            .await?;

        // Create student_courses junction table (many-to-many)
        manager
            .create_table(
                Table::create()
                    .table(StudentCourses::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(StudentCourses::StudentId).integer().not_null())
                    .col(ColumnDef::new(StudentCourses::CourseId).integer().not_null())
                    .primary_key(
                        Index::create()
                            .name("pk-student_courses")
                            .col(StudentCourses::StudentId)
                            .col(StudentCourses::CourseId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-student_courses-student_id")
                            .from(StudentCourses::Table, StudentCourses::StudentId)
                            .to(Students::Table, Students::StudentId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-student_courses-course_id")
                            .from(StudentCourses::Table, StudentCourses::CourseId)
                            .to(Courses::Table, Courses::CourseId),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Drop tables in reverse order due to foreign key constraints
        manager
            .drop_table(Table::drop().table(StudentCourses::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Homeworks::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Resources::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Courses::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Students::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(Iden)]
enum Students {
    Table,
    StudentId,
    Name,
    PhoneNumber,
    RegisteredOn,
    Birthday,
}

#[derive(Iden)]
enum Courses {
    Table,
    CourseId,
    Name,
    Description,
    StartDate,
    EndDate,
    Price,
}

#[derive(Iden)]
enum Resources {
    Table,
    ResourceId,
    Name,
    Url,
    ResourceType,
    CourseId,
}

#[derive(Iden)]
enum Homeworks {
    Table,
    HomeworkId,
    Content,
    ContentType,
    SubmissionTime,
    StudentId,
    CourseId,
}

#[derive(Iden)]
enum StudentCourses {
    Table,
    StudentId,
    CourseId,
}
