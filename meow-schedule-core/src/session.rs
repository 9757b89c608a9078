//! Photography sessions (scheduled shoots).

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_SESSION_TITLE, TITLE_SEPARATOR};
use crate::tag::Tag;

/// A scheduled shoot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub id: String,
    pub title: String,
    pub client_name: String,
    pub date: NaiveDate,
    pub time: String,
    /// Tag ids in selection order
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Session data before the store assigns an id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionDraft {
    pub title: String,
    pub client_name: String,
    pub date: NaiveDate,
    pub time: String,
    pub tags: Vec<String>,
    pub notes: Option<String>,
}

impl SessionDraft {
    pub fn with_id(self, id: String) -> Session {
        Session {
            id,
            title: self.title,
            client_name: self.client_name,
            date: self.date,
            time: self.time,
            tags: self.tags,
            notes: self.notes,
        }
    }
}

impl Session {
    /// Id of the tag that decides the session's display color.
    pub fn primary_tag(&self) -> Option<&str> {
        self.tags.first().map(String::as_str)
    }
}

/// Join the names of the selected tags, skipping ids that no longer resolve.
pub fn derive_title(tag_ids: &[String], tags: &[Tag]) -> String {
    let names: Vec<&str> = tag_ids
        .iter()
        .filter_map(|id| tags.iter().find(|t| &t.id == id))
        .map(|t| t.name.as_str())
        .collect();

    if names.is_empty() {
        DEFAULT_SESSION_TITLE.to_string()
    } else {
        names.join(TITLE_SEPARATOR)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tag::default_tags;

    fn ids(ids: &[&str]) -> Vec<String> {
        ids.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn title_joins_tag_names_in_selection_order() {
        let tags = default_tags();
        assert_eq!(derive_title(&ids(&["4", "1"]), &tags), "婚礼跟拍 + 外景拍摄");
    }

    #[test]
    fn title_falls_back_when_no_tags_resolve() {
        let tags = default_tags();
        assert_eq!(derive_title(&[], &tags), DEFAULT_SESSION_TITLE);
        assert_eq!(derive_title(&ids(&["gone"]), &tags), DEFAULT_SESSION_TITLE);
    }

    #[test]
    fn serializes_with_camel_case_and_omits_missing_notes() {
        let session = Session {
            id: "s1".into(),
            title: "新生儿".into(),
            client_name: "客户".into(),
            date: NaiveDate::from_ymd_opt(2024, 3, 15).unwrap(),
            time: "00:00".into(),
            tags: ids(&["3"]),
            notes: None,
        };

        let json = serde_json::to_value(&session).unwrap();
        assert_eq!(json["clientName"], "客户");
        assert_eq!(json["date"], "2024-03-15");
        assert!(json.get("notes").is_none());
    }

    #[test]
    fn deserializes_browser_records() {
        let json = r#"{"id":"x","title":"拍摄档期","clientName":"客户","date":"2024-12-31","time":"00:00","tags":[],"notes":"带三脚架"}"#;
        let session: Session = serde_json::from_str(json).unwrap();
        assert_eq!(session.date, NaiveDate::from_ymd_opt(2024, 12, 31).unwrap());
        assert_eq!(session.notes.as_deref(), Some("带三脚架"));
    }
}
