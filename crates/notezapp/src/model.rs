use serde::{Deserialize, Serialize};

/// A single note: a short name plus a free-form text body.
///
/// Notes carry no identifier beyond their position in the store's sequence.
/// Two notes with equal fields are indistinguishable, and a note's position
/// shifts when an earlier note is deleted. The persisted shape is exactly
/// these two string fields; anything else in a stored object is rejected at
/// load time.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Note {
    pub name: String,
    pub content: String,
}

impl Note {
    pub fn new(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_to_two_fields() {
        let note = Note::new("Groceries", "Milk, eggs");
        let json = serde_json::to_value(&note).unwrap();
        let obj = json.as_object().unwrap();
        assert_eq!(obj.len(), 2);
        assert_eq!(obj["name"], "Groceries");
        assert_eq!(obj["content"], "Milk, eggs");
    }

    #[test]
    fn deserializes_from_object() {
        let note: Note = serde_json::from_str(r#"{"name":"A","content":"x"}"#).unwrap();
        assert_eq!(note, Note::new("A", "x"));
    }

    #[test]
    fn rejects_unknown_fields() {
        let result: Result<Note, _> =
            serde_json::from_str(r#"{"name":"A","content":"x","id":1}"#);
        assert!(result.is_err());
    }

    #[test]
    fn rejects_missing_content() {
        let result: Result<Note, _> = serde_json::from_str(r#"{"name":"A"}"#);
        assert!(result.is_err());
    }
}
