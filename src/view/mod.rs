//! Display projection
//!
//! Everything shown on screen is computed here from plain state, so the
//! display can be tested without a browser or terminal.

use chrono_tz::Tz;
use serde::Serialize;
use serde_json::Value;

use crate::config::BoardConfig;
use crate::content::{Draft, Post};
use crate::editor::Toolbar;
use crate::helpers::{calendar_date, parse_timezone};
use crate::notify::Notice;

/// Shown when a timestamp cannot be represented as a date
const INVALID_DATE: &str = "Invalid Date";

/// How card dates are written
#[derive(Debug, Clone, PartialEq)]
pub struct DateStyle {
    pub timezone: Tz,
    /// Moment.js-style format, e.g. `YYYY-MM-DD`
    pub format: String,
}

impl DateStyle {
    pub fn new(timezone: Tz, format: &str) -> Self {
        Self {
            timezone,
            format: format.to_string(),
        }
    }

    pub fn from_config(config: &BoardConfig) -> Self {
        Self::new(parse_timezone(&config.timezone), &config.date_format)
    }

    /// Calendar date of a post
    pub fn post_date(&self, post: &Post) -> String {
        match post.created_at() {
            Some(date) => calendar_date(&date, self.timezone, &self.format),
            None => INVALID_DATE.to_string(),
        }
    }
}

impl Default for DateStyle {
    fn default() -> Self {
        Self::new(Tz::UTC, "YYYY-MM-DD")
    }
}

/// One post as displayed in the feed
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FeedCard {
    pub title: String,
    /// Author with the "By " prefix
    pub byline: String,
    pub date: String,
    /// Body markup, emitted as-is
    pub body_html: String,
}

/// Render posts to cards, keeping the store's order
pub fn render_feed(posts: &[Post], style: &DateStyle) -> Vec<FeedCard> {
    posts
        .iter()
        .map(|post| FeedCard {
            title: post.title.clone(),
            byline: format!("By {}", post.author),
            date: style.post_date(post),
            body_html: post.body.clone(),
        })
        .collect()
}

/// The compose form with its current field values
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComposeFormView {
    pub title: String,
    pub author: String,
    pub body: String,
    /// Toolbar layout for the rich-text widget
    pub toolbar: Value,
}

/// Complete display instructions for the board
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BoardView {
    /// The "new post" trigger
    pub trigger_visible: bool,
    /// Present while the compose form is open
    pub compose_form: Option<ComposeFormView>,
    pub loading_overlay: bool,
    pub feed: Vec<FeedCard>,
    pub notices: Vec<Notice>,
}

/// Composer state needed to draw the board
#[derive(Debug, Clone, Copy)]
pub struct Snapshot<'a> {
    pub draft: &'a Draft,
    pub body: &'a str,
    pub toolbar: &'a Toolbar,
    pub compose_form_visible: bool,
    pub busy: bool,
    pub posts: &'a [Post],
}

/// Project composer state onto display instructions
pub fn project(snapshot: &Snapshot<'_>, notices: Vec<Notice>, style: &DateStyle) -> BoardView {
    let compose_form = snapshot.compose_form_visible.then(|| ComposeFormView {
        title: snapshot.draft.title.clone(),
        author: snapshot.draft.author.clone(),
        body: snapshot.body.to_string(),
        toolbar: snapshot.toolbar.to_json(),
    });

    BoardView {
        trigger_visible: !snapshot.compose_form_visible,
        compose_form,
        loading_overlay: snapshot.busy,
        feed: render_feed(snapshot.posts, style),
        notices,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{BoardError, ErrorKind};

    fn post(title: &str, author: &str, timestamp: u64) -> Post {
        Post::new(
            title.to_string(),
            format!("<p>{}</p>", title),
            author.to_string(),
            timestamp,
        )
    }

    #[test]
    fn test_render_feed_card() {
        let cards = render_feed(
            &[post("Hello", "Alice", 1_700_000_000_000_000_000)],
            &DateStyle::default(),
        );
        assert_eq!(
            cards,
            vec![FeedCard {
                title: "Hello".to_string(),
                byline: "By Alice".to_string(),
                date: "2023-11-14".to_string(),
                body_html: "<p>Hello</p>".to_string(),
            }]
        );
    }

    #[test]
    fn test_dates_one_day_apart() {
        let day = 86_400 * 1_000_000_000u64;
        let first = 1_700_000_000_000_000_000;
        let cards = render_feed(
            &[post("a", "x", first), post("b", "y", first + day)],
            &DateStyle::default(),
        );
        assert_eq!(cards[0].date, "2023-11-14");
        assert_eq!(cards[1].date, "2023-11-15");
    }

    #[test]
    fn test_feed_keeps_store_order() {
        let cards = render_feed(
            &[post("newer", "x", 2_000), post("older", "y", 1_000)],
            &DateStyle::default(),
        );
        let titles: Vec<_> = cards.iter().map(|c| c.title.as_str()).collect();
        assert_eq!(titles, vec!["newer", "older"]);
    }

    #[test]
    fn test_largest_timestamp() {
        let style = DateStyle::default();
        assert_eq!(style.post_date(&post("a", "b", u64::MAX)), "2554-07-21");
    }

    #[test]
    fn test_custom_date_format() {
        let style = DateStyle::new(Tz::UTC, "MMMM DD, YYYY");
        assert_eq!(
            style.post_date(&post("a", "b", 1_700_000_000_000_000_000)),
            "November 14, 2023"
        );
    }

    #[test]
    fn test_project_closed_form() {
        let draft = Draft::default();
        let toolbar = Toolbar::standard();
        let snapshot = Snapshot {
            draft: &draft,
            body: "",
            toolbar: &toolbar,
            compose_form_visible: false,
            busy: false,
            posts: &[],
        };
        let view = project(&snapshot, Vec::new(), &DateStyle::default());
        assert!(view.trigger_visible);
        assert!(view.compose_form.is_none());
        assert!(!view.loading_overlay);
        assert!(view.feed.is_empty());
    }

    #[test]
    fn test_project_open_form_with_notice() {
        let draft = Draft::new("Hello", "Alice");
        let toolbar = Toolbar::standard();
        let posts = [post("Old", "Bob", 1_700_000_000_000_000_000)];
        let snapshot = Snapshot {
            draft: &draft,
            body: "<p>World</p>",
            toolbar: &toolbar,
            compose_form_visible: true,
            busy: true,
            posts: &posts,
        };
        let notices = vec![Notice::from(&BoardError::ValidationFailed)];
        let view = project(&snapshot, notices, &DateStyle::default());

        assert!(!view.trigger_visible);
        assert!(view.loading_overlay);
        let form = view.compose_form.unwrap();
        assert_eq!(form.title, "Hello");
        assert_eq!(form.author, "Alice");
        assert_eq!(form.body, "<p>World</p>");
        assert_eq!(form.toolbar, toolbar.to_json());
        assert_eq!(view.feed.len(), 1);
        assert_eq!(view.notices[0].kind, ErrorKind::ValidationFailed);
    }
}
