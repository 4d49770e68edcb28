//! Document metadata written to `meta.xml`.
//!
//! Mirrors the Dublin Core and ODF `meta:` properties a presentation carries.
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Presentation metadata.
///
/// Dates are optional; when absent they are left out of `meta.xml` so two
/// saves of the same presentation produce identical bytes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Metadata {
    /// Document title
    pub title: Option<String>,
    /// Document subject
    pub subject: Option<String>,
    /// Document author/creator
    pub author: Option<String>,
    /// Keywords associated with the document
    pub keywords: Option<String>,
    /// Document description/comments
    pub description: Option<String>,
    /// Last person to modify the document
    pub last_modified_by: Option<String>,
    /// Document category
    pub category: Option<String>,
    /// Creation date
    pub created: Option<DateTime<Utc>>,
    /// Last modification date
    pub modified: Option<DateTime<Utc>>,
}

impl Metadata {
    /// Check if the metadata contains any actual data.
    ///
    /// Returns true if at least one field is populated.
    pub fn has_data(&self) -> bool {
        self.title.is_some()
            || self.subject.is_some()
            || self.author.is_some()
            || self.keywords.is_some()
            || self.description.is_some()
            || self.last_modified_by.is_some()
            || self.category.is_some()
            || self.created.is_some()
            || self.modified.is_some()
    }

    /// Split the keyword string into individual keywords.
    ///
    /// Both commas and semicolons are accepted as separators.
    pub fn keyword_list(&self) -> Vec<&str> {
        self.keywords
            .as_deref()
            .map(|k| {
                k.split([',', ';'])
                    .map(str::trim)
                    .filter(|s| !s.is_empty())
                    .collect()
            })
            .unwrap_or_default()
    }
}
