//! Draft: the unsaved post being composed

/// A draft post held by the composer
///
/// The body is not stored here; it lives in the editor and is read
/// through [`Editor::serialize`](crate::editor::Editor::serialize) when
/// the draft is submitted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Draft {
    pub title: String,
    pub author: String,
}

impl Draft {
    /// Create a draft with the given fields
    pub fn new(title: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
        }
    }

    /// Reset both text fields to empty
    pub fn clear(&mut self) {
        self.title.clear();
        self.author.clear();
    }

    /// Whether both text fields are empty
    pub fn is_empty(&self) -> bool {
        self.title.is_empty() && self.author.is_empty()
    }
}

/// A draft that passed validation, ready to send to the store
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub title: String,
    pub body: String,
    pub author: String,
}

impl Submission {
    /// Validate the draft together with the editor's serialized body
    ///
    /// Returns `None` when any of title, author or body is empty.
    /// `body_blank` is the editor's own judgement of the markup, so a body
    /// such as `<p><br></p>` counts as empty.
    pub fn validate(draft: &Draft, body: String, body_blank: bool) -> Option<Self> {
        if draft.title.is_empty() || draft.author.is_empty() || body.is_empty() || body_blank {
            return None;
        }

        Some(Self {
            title: draft.title.clone(),
            body,
            author: draft.author.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clear() {
        let mut draft = Draft::new("Hello", "Alice");
        assert!(!draft.is_empty());
        draft.clear();
        assert!(draft.is_empty());
        assert_eq!(draft, Draft::default());
    }

    #[test]
    fn test_validate_accepts_complete_draft() {
        let draft = Draft::new("Hello", "Alice");
        let submission = Submission::validate(&draft, "<p>World</p>".to_string(), false).unwrap();
        assert_eq!(submission.title, "Hello");
        assert_eq!(submission.body, "<p>World</p>");
        assert_eq!(submission.author, "Alice");
    }

    #[test]
    fn test_validate_rejects_missing_fields() {
        let body = || "<p>World</p>".to_string();
        assert!(Submission::validate(&Draft::new("", "Alice"), body(), false).is_none());
        assert!(Submission::validate(&Draft::new("Hello", ""), body(), false).is_none());
        assert!(Submission::validate(&Draft::new("Hello", "Alice"), String::new(), true).is_none());
        assert!(
            Submission::validate(&Draft::new("Hello", "Alice"), "<p><br></p>".to_string(), true)
                .is_none()
        );
    }

    #[test]
    fn test_whitespace_title_is_not_empty() {
        // Only truly empty fields fail validation
        let draft = Draft::new(" ", "Alice");
        assert!(Submission::validate(&draft, "<p>x</p>".to_string(), false).is_some());
    }
}
