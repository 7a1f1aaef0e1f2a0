pub mod aggregator;
pub mod submission;
pub mod version_probe;

pub use aggregator::{normalize_query, SearchAggregator};
pub use submission::SubmissionController;
pub use version_probe::VersionProbe;
