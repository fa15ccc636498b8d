use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Homework lookup by student name
        manager
            .create_index(
                Index::create()
                    .name("idx_students_name")
                    .table(Students::Table)
                    .col(Students::Name)
                    .to_owned(),
            )
            .await?;

        // Foreign key columns used by the report joins
        manager
            .create_index(
                Index::create()
                    .name("idx_resources_course_id")
                    .table(Resources::Table)
                    .col(Resources::CourseId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_homeworks_student_id")
                    .table(Homeworks::Table)
                    .col(Homeworks::StudentId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_homeworks_course_id")
                    .table(Homeworks::Table)
                    .col(Homeworks::CourseId)
                    .to_owned(),
            )
            .await?;

        // student_id is already covered by the composite primary key
        manager
            .create_index(
                Index::create()
                    .name("idx_student_courses_course_id")
                    .table(StudentCourses::Table)
                    .col(StudentCourses::CourseId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_student_courses_course_id")
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(Index::drop().name("idx_homeworks_course_id").to_owned())
            .await?;

        manager
            .drop_index(Index::drop().name("idx_homeworks_student_id").to_owned())
            .await?;

        manager
            .drop_index(Index::drop().name("idx_resources_course_id").to_owned())
            .await?;

        manager
            .drop_index(Index::drop().name("idx_students_name").to_owned())
            .await?;

        Ok(())
    }
}

#[derive(Iden)]
enum Students {
    Table,
    Name,
}

#[derive(Iden)]
enum Resources {
    Table,
    CourseId,
}

#[derive(Iden)]
enum Homeworks {
    Table,
    StudentId,
    CourseId,
}

#[derive(Iden)]
enum StudentCourses {
    Table,
    CourseId,
}
