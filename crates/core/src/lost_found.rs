//! Lost-and-found item records.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use crate::UserRef;

/// Whether an item was reported lost or handed in as found.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LostFoundKind {
    Lost,
    Found,
}

impl LostFoundKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Lost => "lost",
            Self::Found => "found",
        }
    }
}

/// Lifecycle of a lost-and-found item.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LostFoundStatus {
    Open,
    Claimed,
    Returned,
    Closed,
}

impl LostFoundStatus {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::Claimed => "claimed",
            Self::Returned => "returned",
            Self::Closed => "closed",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LostFoundItem {
    pub id: String,
    pub item_name: String,
    pub description: String,
    pub category: String,
    #[serde(rename = "type")]
    pub kind: LostFoundKind,
    pub status: LostFoundStatus,
    pub reported_by: String,
    #[serde(default)]
    pub claimed_by: Option<String>,
    #[serde(default)]
    pub location_found: Option<String>,
    #[serde(default)]
    pub location_lost: Option<String>,
    #[serde(default)]
    pub current_location: Option<String>,
    #[serde(default)]
    pub date_lost_found: Option<NaiveDate>,
    #[serde(default)]
    pub date_found: Option<NaiveDate>,
    #[serde(default)]
    pub date_lost: Option<NaiveDate>,
    #[serde(default)]
    pub claimed_at: Option<DateTime<Utc>>,
    /// The backend emits either a single path or an array here.
    #[serde(default, deserialize_with = "string_or_seq")]
    pub images: Vec<String>,
    #[serde(default)]
    pub contact_info: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub reporter: Option<UserRef>,
    #[serde(default)]
    pub claimer: Option<UserRef>,
}

fn string_or_seq<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum OneOrMany {
        One(String),
        Many(Vec<String>),
    }

    Ok(match Option::<OneOrMany>::deserialize(deserializer)? {
        None => Vec::new(),
        Some(OneOrMany::One(s)) => vec![s],
        Some(OneOrMany::Many(v)) => v,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn base_item(images: serde_json::Value) -> serde_json::Value {
        json!({
            "id": "lf-1",
            "item_name": "Blue bottle",
            "description": "Steel bottle, dented cap",
            "category": "personal",
            "type": "found",
            "status": "open",
            "reported_by": "u-9",
            "images": images,
            "created_at": "2026-01-10T08:30:00Z",
            "updated_at": "2026-01-10T08:30:00Z"
        })
    }

    #[test]
    fn test_images_single_string() {
        let item: LostFoundItem =
            serde_json::from_value(base_item(json!("photos/bottle.jpg"))).expect("valid item");
        assert_eq!(item.images, vec!["photos/bottle.jpg"]);
        assert_eq!(item.kind, LostFoundKind::Found);
    }

    #[test]
    fn test_images_array() {
        let item: LostFoundItem =
            serde_json::from_value(base_item(json!(["a.jpg", "b.jpg"]))).expect("valid item");
        assert_eq!(item.images.len(), 2);
    }

    #[test]
    fn test_images_null() {
        let item: LostFoundItem =
            serde_json::from_value(base_item(json!(null))).expect("valid item");
        assert!(item.images.is_empty());
        assert_eq!(item.status.as_str(), "open");
    }
}
