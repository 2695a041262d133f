use serde::{Deserialize, Serialize};

/// Column order of the persisted report.
pub const COLUMNS: [&str; 7] = [
    "filename",
    "name",
    "email",
    "phone",
    "location",
    "job_title_guess",
    "full_text_preview",
];

pub const UNSUPPORTED_TYPE: &str = "UNSUPPORTED TYPE";
pub const EXTRACTION_FAILED: &str = "EXTRACTION FAILED";
pub const PROCESSING_ERROR: &str = "PROCESSING ERROR";

pub const UNSUPPORTED_PREVIEW: &str = "Unsupported file type";
pub const EXTRACTION_FAILED_PREVIEW: &str = "Failed to extract text";

/// One row of the batch report. Field order matches `COLUMNS`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResumeRecord {
    pub filename: String,
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub location: Option<String>,
    pub job_title_guess: Option<String>,
    pub full_text_preview: String,
}

/// Fields the extraction service fills in.
/// Applied to a record all at once; never field by field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CandidateFields {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub location: Option<String>,
    pub job_title_guess: Option<String>,
}

impl ResumeRecord {
    /// A record with every parsed field null.
    pub fn empty(filename: &str, full_text_preview: String) -> Self {
        ResumeRecord {
            filename: filename.to_string(),
            name: None,
            email: None,
            phone: None,
            location: None,
            job_title_guess: None,
            full_text_preview,
        }
    }

    /// A failure row: `name` carries the sentinel, parsed fields stay null.
    pub fn sentinel(filename: &str, sentinel: &str, full_text_preview: String) -> Self {
        ResumeRecord {
            name: Some(sentinel.to_string()),
            ..Self::empty(filename, full_text_preview)
        }
    }

    pub fn apply(&mut self, fields: CandidateFields) {
        self.name = fields.name;
        self.email = fields.email;
        self.phone = fields.phone;
        self.location = fields.location;
        self.job_title_guess = fields.job_title_guess;
    }

    /// True when email, phone, location and job title are all null.
    pub fn has_no_contact_fields(&self) -> bool {
        self.email.is_none()
            && self.phone.is_none()
            && self.location.is_none()
            && self.job_title_guess.is_none()
    }

    /// Cell values in `COLUMNS` order; null becomes `None`.
    pub fn cells(&self) -> [Option<&str>; 7] {
        [
            Some(self.filename.as_str()),
            self.name.as_deref(),
            self.email.as_deref(),
            self.phone.as_deref(),
            self.location.as_deref(),
            self.job_title_guess.as_deref(),
            Some(self.full_text_preview.as_str()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sentinel_record_has_null_parsed_fields() {
        let record = ResumeRecord::sentinel("a.xyz", UNSUPPORTED_TYPE, UNSUPPORTED_PREVIEW.into());
        assert_eq!(record.name.as_deref(), Some(UNSUPPORTED_TYPE));
        assert!(record.has_no_contact_fields());
        assert_eq!(record.full_text_preview, "Unsupported file type");
    }

    #[test]
    fn test_apply_replaces_all_fields() {
        let mut record = ResumeRecord::empty("cv.txt", "preview...".into());
        record.apply(CandidateFields {
            name: Some("Jane Doe".into()),
            email: Some("jane@x.com".into()),
            ..Default::default()
        });
        assert_eq!(record.name.as_deref(), Some("Jane Doe"));
        assert_eq!(record.email.as_deref(), Some("jane@x.com"));
        assert!(record.phone.is_none());
        assert_eq!(record.filename, "cv.txt");
    }

    #[test]
    fn test_serialized_keys_follow_column_order() {
        let record = ResumeRecord::empty("cv.txt", "p".into());
        let json = serde_json::to_string(&record).unwrap();
        let mut last = 0;
        for column in COLUMNS {
            let pos = json.find(&format!("\"{column}\"")).unwrap();
            assert!(pos >= last, "{column} out of order");
            last = pos;
        }
    }

    #[test]
    fn test_cells_match_columns() {
        let record = ResumeRecord::sentinel("x.doc", EXTRACTION_FAILED, "p".into());
        let cells = record.cells();
        assert_eq!(cells.len(), COLUMNS.len());
        assert_eq!(cells[0], Some("x.doc"));
        assert_eq!(cells[1], Some(EXTRACTION_FAILED));
        assert_eq!(cells[2], None);
    }
}
