pub mod course;
pub mod homework;
pub mod resource;
pub mod student;
pub mod student_course;
