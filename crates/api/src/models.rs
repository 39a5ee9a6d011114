use serde::{Deserialize, Serialize};

/// A book record as the backend stores it.
///
/// The backend is Mongo-flavored: the identifier travels as `_id` and the
/// publish date as `publishDate`, a date-time-capable text field. Unknown
/// response fields are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    /// Server-assigned identifier, immutable once created.
    #[serde(rename = "_id")]
    pub id: String,
    /// Title of the book
    pub title: String,
    /// Author of the book
    pub author: String,
    /// Publish date as the backend recorded it, e.g. `1965-08-01T00:00:00Z`
    #[serde(
        rename = "publishDate",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub publish_date: Option<String>,
}

/// Draft form state and, unchanged, the create/update payload.
///
/// The form is submitted verbatim, so a single struct plays both roles:
/// the transient field values being edited and the
/// `{title, author, publishDate}` body sent on create and update.
/// `publish_date` holds the calendar-date text the form collects and may
/// be empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookDraft {
    pub title: String,
    pub author: String,
    #[serde(rename = "publishDate")]
    pub publish_date: String,
}

impl BookDraft {
    /// True when no field holds any text.
    pub fn is_empty(&self) -> bool {
        self.title.is_empty() && self.author.is_empty() && self.publish_date.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn book_reads_mongo_field_names_and_ignores_extras() {
        let raw = r#"{
            "_id": "1",
            "title": "Dune",
            "author": "Herbert",
            "publishDate": "1965-08-01T00:00:00Z",
            "__v": 0
        }"#;

        let book: Book = serde_json::from_str(raw).unwrap();
        assert_eq!(book.id, "1");
        assert_eq!(book.title, "Dune");
        assert_eq!(book.author, "Herbert");
        assert_eq!(book.publish_date.as_deref(), Some("1965-08-01T00:00:00Z"));
    }

    #[test]
    fn book_without_publish_date_deserializes() {
        let raw = r#"{"_id": "2", "title": "Untitled", "author": "Anon"}"#;
        let book: Book = serde_json::from_str(raw).unwrap();
        assert_eq!(book.publish_date, None);
    }

    #[test]
    fn draft_serializes_exactly_three_fields() {
        let draft = BookDraft {
            title: "Dune".to_string(),
            author: "Herbert".to_string(),
            publish_date: "1965-08-01".to_string(),
        };

        let value = serde_json::to_value(&draft).unwrap();
        let object = value.as_object().unwrap();
        assert_eq!(object.len(), 3);
        assert_eq!(object["title"], "Dune");
        assert_eq!(object["author"], "Herbert");
        assert_eq!(object["publishDate"], "1965-08-01");
    }

    #[test]
    fn empty_draft_reports_empty() {
        assert!(BookDraft::default().is_empty());
        let partial = BookDraft {
            title: "x".to_string(),
            ..BookDraft::default()
        };
        assert!(!partial.is_empty());
    }
}
