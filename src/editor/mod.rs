//! Rich-text editor capability
//!
//! The composer owns one editor for its whole lifetime and reads the
//! post body from it through [`Editor::serialize`].

mod toolbar;

pub use toolbar::{Toolbar, ToolbarItem};

use crate::helpers::is_blank_markup;

/// A rich-text input that produces HTML
pub trait Editor {
    /// Current content as HTML markup
    fn serialize(&self) -> String;

    /// Clear the content
    fn reset(&mut self);

    /// Replace the content with the given markup
    fn set_contents(&mut self, html: &str);

    /// The toolbar the editor was constructed with
    fn toolbar(&self) -> &Toolbar;

    /// Whether the content is empty for validation purposes
    fn is_blank(&self) -> bool {
        is_blank_markup(&self.serialize())
    }
}

/// Editor backed by a markup buffer
///
/// Content arrives already serialized, from a browser widget posting its
/// HTML or from the CLI.
#[derive(Debug, Clone, Default)]
pub struct HtmlEditor {
    toolbar: Toolbar,
    contents: String,
}

impl HtmlEditor {
    /// Create an empty editor with the standard toolbar
    pub fn new() -> Self {
        Self::with_toolbar(Toolbar::standard())
    }

    pub fn with_toolbar(toolbar: Toolbar) -> Self {
        Self {
            toolbar,
            contents: String::new(),
        }
    }
}

impl Editor for HtmlEditor {
    fn serialize(&self) -> String {
        self.contents.clone()
    }

    fn reset(&mut self) {
        self.contents.clear();
    }

    fn set_contents(&mut self, html: &str) {
        self.contents = html.to_string();
    }

    fn toolbar(&self) -> &Toolbar {
        &self.toolbar
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_editor_is_empty() {
        let editor = HtmlEditor::new();
        assert_eq!(editor.serialize(), "");
        assert!(editor.is_blank());
        assert_eq!(editor.toolbar(), &Toolbar::standard());
    }

    #[test]
    fn test_set_and_reset() {
        let mut editor = HtmlEditor::new();
        editor.set_contents("<p>World</p>");
        assert_eq!(editor.serialize(), "<p>World</p>");
        assert!(!editor.is_blank());

        editor.reset();
        assert_eq!(editor.serialize(), "");
    }

    #[test]
    fn test_widget_empty_paragraph_is_blank() {
        let mut editor = HtmlEditor::new();
        editor.set_contents("<p><br></p>");
        assert!(editor.is_blank());
    }
}
