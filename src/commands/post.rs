//! Compose and submit a post from the command line

use anyhow::Result;
use std::fs;
use std::path::PathBuf;

use super::feed::format_cards;
use crate::composer::Composer;
use crate::content::markdown_to_html;
use crate::editor::HtmlEditor;
use crate::error::ErrorKind;
use crate::notify::{ConsoleNotifier, Notifier};
use crate::store::PostStore;
use crate::view::DateStyle;
use crate::Postboard;

/// Input for a new post
#[derive(Debug, Clone, Default)]
pub struct PostInput {
    pub title: String,
    pub author: String,
    /// Body given inline
    pub body: Option<String>,
    /// Body read from a file
    pub file: Option<PathBuf>,
    /// Treat the body as Markdown
    pub markdown: bool,
}

impl PostInput {
    /// The body as HTML
    pub fn body_html(&self) -> Result<String> {
        let raw = match (&self.body, &self.file) {
            (Some(_), Some(_)) => anyhow::bail!("Use either --body or --file, not both"),
            (Some(body), None) => body.clone(),
            (None, Some(path)) => fs::read_to_string(path)?,
            (None, None) => String::new(),
        };

        if self.markdown {
            Ok(markdown_to_html(&raw))
        } else {
            Ok(raw)
        }
    }
}

/// Submit a post and return the refreshed feed, formatted
///
/// Returns `Ok(None)` when the post was created but the feed could not
/// be reloaded; the post is stored, so this is not a failure.
pub async fn submit<S, N>(
    store: S,
    notifier: N,
    input: &PostInput,
    style: &DateStyle,
) -> Result<Option<String>>
where
    S: PostStore,
    N: Notifier,
{
    let body = input.body_html()?;

    let mut composer = Composer::new(store, HtmlEditor::new(), notifier);
    composer.open_compose();
    composer.set_title(&input.title);
    composer.set_author(&input.author);
    composer.set_body(&body);

    match composer.submit_post().await {
        Ok(()) => {
            let view = composer.view(Vec::new(), style);
            Ok(Some(format_cards(&view.feed)))
        }
        Err(e) if e.kind() == ErrorKind::LoadFailed => Ok(None),
        Err(e) => Err(e.into()),
    }
}

/// Run the post command
pub async fn run(board: &Postboard, input: &PostInput) -> Result<()> {
    let store = board.http_store()?;
    tracing::info!("Posting {:?} to {}", input.title, store.base_url());

    let output = submit(store, ConsoleNotifier, input, &board.date_style()).await?;
    println!("Created: {}", input.title);
    match output {
        Some(feed) => print!("{}", feed),
        None => println!("Feed unavailable; run `postboard feed` later."),
    }
    Ok(())
}
