//! Location facet derivation
//!
//! Cards take their location from the first tag that is not a status tag.
//! Rows take it from the borough cell, with a small alias table so that
//! "Bronx" and "The Bronx" land on the same filter value.

/// Tag values that mirror a status and never describe a location
pub const STATUS_TAGS: [&str; 3] = ["to-try", "loved", "to-do"];

/// Lowercase, trimmed facet text
fn normalize(text: &str) -> String {
    text.trim().to_lowercase()
}

pub fn is_status_tag(normalized: &str) -> bool {
    STATUS_TAGS.contains(&normalized)
}

/// Location of a card from its tag texts, in document order
pub fn card_location<'a, I>(tags: I) -> Option<String>
where
    I: IntoIterator<Item = &'a str>,
{
    tags.into_iter()
        .map(normalize)
        .find(|tag| !tag.is_empty() && !is_status_tag(tag))
}

/// Location of a row from the text of its borough cell
pub fn row_location(borough: &str) -> Option<String> {
    let text = normalize(borough);
    let location = match text.as_str() {
        "" => return None,
        "manhattan" => "manhattan",
        "brooklyn" => "brooklyn",
        "queens" => "queens",
        "bronx" | "the bronx" => "the bronx",
        other => other,
    };
    Some(location.to_string())
}
