pub mod content_type;
pub mod report;
pub mod resource_type;
