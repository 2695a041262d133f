// Field extraction prompt template.
// `{resume_text}` is replaced with the (truncated) extracted text.

pub const FIELD_EXTRACTION_PROMPT: &str = r#"Extract the following information from the resume text provided below:
- Name of the candidate
- Email address
- Phone number
- Location (City, State/Country if available)
- Most recent or prominent job title (job_title_guess)

Return the information in a JSON format with the following keys: "name", "email", "phone", "location", "job_title_guess".
If a piece of information is not found, use a null value for that key.

Resume Text:
---
{resume_text}
---

JSON Output:"#;
