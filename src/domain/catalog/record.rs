//! Resource record value objects.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of learning resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResourceType {
    Book,
    Course,
    #[serde(rename = "YouTube Channel")]
    YouTubeChannel,
    Article,
    Website,
}

impl fmt::Display for ResourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ResourceType::Book => "Book",
            ResourceType::Course => "Course",
            ResourceType::YouTubeChannel => "YouTube Channel",
            ResourceType::Article => "Article",
            ResourceType::Website => "Website",
        };
        write!(f, "{}", s)
    }
}

/// A single catalog entry. Immutable; sourced only from the static catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceRecord {
    /// Resource title, unique enough to key favorites and reviews.
    pub title: String,

    /// Kind of resource.
    #[serde(rename = "type")]
    pub resource_type: ResourceType,

    /// URL of the resource.
    pub link: String,
}

impl ResourceRecord {
    pub fn new(
        title: impl Into<String>,
        resource_type: ResourceType,
        link: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            resource_type,
            link: link.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resource_type_serializes_with_display_names() {
        let json = serde_json::to_string(&ResourceType::YouTubeChannel).unwrap();
        assert_eq!(json, "\"YouTube Channel\"");
        assert_eq!(
            serde_json::from_str::<ResourceType>("\"Book\"").unwrap(),
            ResourceType::Book
        );
    }

    #[test]
    fn record_serializes_with_renamed_type_field() {
        let record = ResourceRecord::new(
            "Eloquent JavaScript",
            ResourceType::Book,
            "https://eloquentjavascript.net/",
        );
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["title"], "Eloquent JavaScript");
        assert_eq!(json["type"], "Book");
        assert_eq!(json["link"], "https://eloquentjavascript.net/");
    }
}
