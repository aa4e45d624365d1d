use serde::{Deserialize, Serialize};

// ============================================================================
// Entry
// ============================================================================

/// One listing record from a page's JSON file
///
/// Cards (activities, museums, sightseeing) use `title`, `tags` and the image
/// fields; workspot rows use `name`, `borough`, `hours`, `wifi` and `type`.
/// Only `status` is required.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    pub status: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,

    #[serde(rename = "imageAlt", default, skip_serializing_if = "Option::is_none")]
    pub image_alt: Option<String>,

    #[serde(rename = "imageCredit", default, skip_serializing_if = "Option::is_none")]
    pub image_credit: Option<String>,

    #[serde(rename = "imageCreditUrl", default, skip_serializing_if = "Option::is_none")]
    pub image_credit_url: Option<String>,

    /// Trusted inline HTML, emitted without escaping
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,

    #[serde(rename = "locationUrl", default, skip_serializing_if = "Option::is_none")]
    pub location_url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub borough: Option<String>,

    /// Trusted inline HTML (`<br>` separated), emitted without escaping
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hours: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wifi: Option<String>,

    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
}

impl Entry {
    pub fn new(status: impl Into<String>) -> Self {
        Self {
            status: status.into(),
            ..Default::default()
        }
    }

    /// Card heading: `title`, falling back to `name`
    pub fn card_title(&self) -> &str {
        self.title
            .as_deref()
            .or(self.name.as_deref())
            .unwrap_or_default()
    }

    /// Row heading: `name`, falling back to `title`
    pub fn row_name(&self) -> &str {
        self.name
            .as_deref()
            .or(self.title.as_deref())
            .unwrap_or_default()
    }

    /// Tags in source order; a card without `tags` behaves as if it had none
    pub fn tags(&self) -> &[String] {
        self.tags.as_deref().unwrap_or_default()
    }

    /// Borough cell text: `borough`, falling back to `location`
    pub fn borough_or_location(&self) -> Option<&str> {
        self.borough.as_deref().or(self.location.as_deref())
    }
}

// ============================================================================
// Document
// ============================================================================

/// Contents of `data/<pagetype>.json`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EntriesDocument {
    #[serde(default)]
    pub entries: Vec<Entry>,
}

impl EntriesDocument {
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Parse a data file; `entries` may be absent but must be an array when present
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }
}
