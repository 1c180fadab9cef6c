//! Built-in board templates using the Tera template engine
//!
//! Templates are embedded in the binary. HTML autoescaping stays on, so
//! titles and authors are escaped; post bodies are marked `safe` and
//! emitted unchanged.

use anyhow::Result;
use tera::{Context, Tera};

use crate::view::BoardView;

/// Page renderer with the embedded board templates
pub struct TemplateRenderer {
    tera: Tera,
}

impl TemplateRenderer {
    /// Create a new renderer with all board templates loaded
    pub fn new() -> Result<Self> {
        let mut tera = Tera::default();

        tera.add_raw_templates(vec![
            ("layout.html", include_str!("board/layout.html")),
            ("index.html", include_str!("board/index.html")),
            (
                "partials/notices.html",
                include_str!("board/partials/notices.html"),
            ),
            (
                "partials/compose.html",
                include_str!("board/partials/compose.html"),
            ),
        ])?;

        Ok(Self { tera })
    }

    /// Render a template with given context
    pub fn render(&self, template_name: &str, context: &Context) -> Result<String> {
        Ok(self.tera.render(template_name, context)?)
    }

    /// Render the board page
    pub fn render_board(&self, site_title: &str, board: &BoardView) -> Result<String> {
        let mut context = Context::new();
        context.insert("site_title", site_title);
        context.insert("version", env!("CARGO_PKG_VERSION"));
        context.insert("board", board);
        self.render("index.html", &context)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::editor::Toolbar;
    use crate::error::BoardError;
    use crate::notify::Notice;
    use crate::view::{ComposeFormView, FeedCard};

    fn board() -> BoardView {
        BoardView {
            trigger_visible: true,
            compose_form: None,
            loading_overlay: false,
            feed: vec![FeedCard {
                title: "Fish & <Chips>".to_string(),
                byline: "By Alice".to_string(),
                date: "2023-11-14".to_string(),
                body_html: "<p><em>World</em></p>".to_string(),
            }],
            notices: Vec::new(),
        }
    }

    #[test]
    fn test_render_feed() {
        let renderer = TemplateRenderer::new().unwrap();
        let html = renderer.render_board("My Board", &board()).unwrap();

        assert!(html.contains("<title>My Board</title>"));
        assert!(html.contains(r#"<article class="post">"#));
        assert!(html.contains("<h2>Fish &amp; &lt;Chips&gt;</h2>"));
        assert!(html.contains(r#"<span class="author">By Alice</span>"#));
        assert!(html.contains(r#"<span class="date">2023-11-14</span>"#));
        assert!(html.contains("<p><em>World</em></p>"));
        assert!(!html.contains("newPostForm"));
        assert!(!html.contains("quill.min.js"));
        assert!(html.contains(r#"class="loading hidden""#));
    }

    #[test]
    fn test_render_compose_form() {
        let mut view = board();
        view.trigger_visible = false;
        view.loading_overlay = true;
        view.compose_form = Some(ComposeFormView {
            title: "Draft title".to_string(),
            author: "Bob".to_string(),
            body: "<p>unsaved</p>".to_string(),
            toolbar: Toolbar::standard().to_json(),
        });
        view.notices = vec![Notice::from(&BoardError::ValidationFailed)];

        let renderer = TemplateRenderer::new().unwrap();
        let html = renderer.render_board("My Board", &view).unwrap();

        assert!(html.contains(r#"id="newPostForm""#));
        assert!(html.contains(r#"value="Draft title""#));
        assert!(html.contains(r#"value="Bob""#));
        assert!(html.contains("&lt;p&gt;unsaved&lt;&#x2F;p&gt;"));
        assert!(html.contains("data-toolbar=\"[[&quot;bold&quot;"));
        assert!(html.contains("quill.min.js"));
        assert!(html.contains("new Quill(container"));
        assert!(html.contains("JSON.parse(textarea.dataset.toolbar)"));
        assert!(html.contains(r#"class="button hidden">New Post</a>"#));
        assert!(html.contains(r#"class="notice notice-validation_failed""#));
        assert!(html.contains("Please fill in all fields"));
        assert!(html.contains(r#"class="loading""#));
    }
}
