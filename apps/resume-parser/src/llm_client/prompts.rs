// Shared prompt fragments for the chat-completions client.
// Task-specific templates live next to the code that fills them in.

/// System message for every field-extraction call.
pub const RESUME_EXTRACTION_SYSTEM: &str = "You are a helpful assistant that extracts \
    information from resumes and returns it in JSON format.";
