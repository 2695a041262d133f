// Candidate field extraction: prompt construction, service call, and
// response parsing with all-or-nothing fallback to null fields.

pub mod extractor;
pub mod prompts;
pub mod response;

pub use extractor::FieldExtractor;
