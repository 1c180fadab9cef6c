//! Print the feed

use anyhow::Result;

use crate::composer::Composer;
use crate::editor::HtmlEditor;
use crate::helpers::{strip_html, truncate};
use crate::notify::ConsoleNotifier;
use crate::store::PostStore;
use crate::view::{DateStyle, FeedCard};
use crate::Postboard;

/// Characters of body text shown per card
const EXCERPT_LENGTH: usize = 72;

/// Format cards for the terminal
pub fn format_cards(cards: &[FeedCard]) -> String {
    let mut out = format!("Posts ({}):\n", cards.len());
    for card in cards {
        let text = strip_html(&card.body_html);
        let text = text.split_whitespace().collect::<Vec<_>>().join(" ");
        out.push_str(&format!(
            "  {} - {} [{}]\n",
            card.date, card.title, card.byline
        ));
        if !text.is_empty() {
            out.push_str(&format!("    {}\n", truncate(&text, EXCERPT_LENGTH, None)));
        }
    }
    out
}

/// Load the feed from a store and format it
pub async fn load_and_format<S: PostStore>(store: S, style: &DateStyle) -> Result<String> {
    let mut composer = Composer::new(store, HtmlEditor::new(), ConsoleNotifier);
    composer.start().await?;

    let view = composer.view(Vec::new(), style);
    Ok(format_cards(&view.feed))
}

/// Run the feed command
pub async fn run(board: &Postboard) -> Result<()> {
    let store = board.http_store()?;
    tracing::debug!("Loading feed from {}", store.base_url());

    let output = load_and_format(store, &board.date_style()).await?;
    print!("{}", output);
    Ok(())
}
