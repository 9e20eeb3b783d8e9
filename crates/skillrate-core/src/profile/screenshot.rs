use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A saved screenshot taken on the evaluation screen.
///
/// Ordered by capture time, then file name.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Screenshot {
    pub taken_at: DateTime<Utc>,
    pub file_name: String,
    #[serde(default)]
    pub md5: String,
    /// Attempt shown in the screenshot, if any
    #[serde(default)]
    pub score_key: Option<String>,
}

impl Screenshot {
    pub fn new(taken_at: DateTime<Utc>, file_name: impl Into<String>) -> Self {
        Self {
            taken_at,
            file_name: file_name.into(),
            md5: String::new(),
            score_key: None,
        }
    }
}

/// Sort and drop exact duplicates.
pub(crate) fn normalize(screenshots: &mut Vec<Screenshot>) {
    screenshots.sort();
    screenshots.dedup();
}
