pub mod record;

pub use record::{CandidateFields, ResumeRecord};
