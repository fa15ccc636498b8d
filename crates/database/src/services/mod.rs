pub mod report;
pub mod seed;

pub use report::ReportService;
pub use seed::{SeedReport, SeedService};
