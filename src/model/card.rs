use std::collections::HashSet;

use chrono::{DateTime, Utc};
use serde::Deserialize;

pub const EPIC_LABEL: &str = "EPIC";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Label {
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub due: Option<DateTime<Utc>>,
    pub short_url: String,
    #[serde(default)]
    pub labels: Vec<Label>,
    #[serde(default)]
    pub id_members: Vec<String>,
}

impl Card {
    pub fn label_names(&self) -> HashSet<&str> {
        self.labels.iter().map(|l| l.name.as_str()).collect()
    }

    pub fn has_members(&self) -> bool {
        !self.id_members.is_empty()
    }
}

/// Single-field responses such as `/members/{id}/fullName`.
#[derive(Debug, Deserialize)]
pub struct FieldValue {
    #[serde(rename = "_value")]
    pub value: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_trello_card() {
        let json = r#"{
            "id": "5f1",
            "name": "Epic A",
            "due": "2024-03-15T00:00:00.000Z",
            "shortUrl": "https://trello.com/c/x",
            "labels": [{"id": "l1", "name": "EPIC", "color": "red"}],
            "idMembers": ["m1"],
            "closed": false
        }"#;
        let card: Card = serde_json::from_str(json).unwrap();
        assert_eq!(card.name, "Epic A");
        assert_eq!(card.short_url, "https://trello.com/c/x");
        assert!(card.label_names().contains(EPIC_LABEL));
        assert!(card.has_members());
        assert_eq!(
            card.due.unwrap().to_rfc3339(),
            "2024-03-15T00:00:00+00:00"
        );
    }

    #[test]
    fn null_due_and_missing_collections() {
        let json = r#"{"id": "1", "name": "n", "due": null, "shortUrl": "u"}"#;
        let card: Card = serde_json::from_str(json).unwrap();
        assert!(card.due.is_none());
        assert!(card.labels.is_empty());
        assert!(!card.has_members());
        assert!(!card.label_names().contains(EPIC_LABEL));
    }

    #[test]
    fn epic_label_is_case_sensitive() {
        let json = r#"{"id": "1", "name": "n", "shortUrl": "u", "labels": [{"name": "Epic"}]}"#;
        let card: Card = serde_json::from_str(json).unwrap();
        assert!(!card.label_names().contains(EPIC_LABEL));
        assert!(card.label_names().contains("Epic"));
    }

    #[test]
    fn full_name_field_value() {
        let value: FieldValue = serde_json::from_str(r#"{"_value": "Ada Lovelace"}"#).unwrap();
        assert_eq!(value.value, "Ada Lovelace");
    }
}
