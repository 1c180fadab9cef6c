//! Post composer and feed
//!
//! [`Composer`] owns the draft, the editor and the loaded feed. It talks
//! to a [`PostStore`] for persistence and reports every failure through
//! a [`Notifier`].

mod busy;

pub use busy::{BusyFlag, BusyGuard};

use crate::content::{Draft, Post, Submission};
use crate::editor::{Editor, HtmlEditor};
use crate::error::BoardError;
use crate::notify::{present, ConsoleNotifier, Notice, Notifier};
use crate::store::PostStore;
use crate::view::{project, BoardView, DateStyle, Snapshot};

/// Composes posts and keeps the feed
pub struct Composer<S, E = HtmlEditor, N = ConsoleNotifier> {
    store: S,
    editor: E,
    notifier: N,
    draft: Draft,
    compose_form_visible: bool,
    busy: BusyFlag,
    feed: Vec<Post>,
}

impl<S, E, N> Composer<S, E, N>
where
    S: PostStore,
    E: Editor,
    N: Notifier,
{
    /// Create a composer with a closed form and an empty feed
    pub fn new(store: S, editor: E, notifier: N) -> Self {
        Self {
            store,
            editor,
            notifier,
            draft: Draft::default(),
            compose_form_visible: false,
            busy: BusyFlag::new(),
            feed: Vec::new(),
        }
    }

    /// Load the feed for the first time
    pub async fn start(&mut self) -> Result<(), BoardError> {
        self.load_feed().await
    }

    /// Show the compose form and hide the trigger
    pub fn open_compose(&mut self) {
        if !self.compose_form_visible {
            self.clear_draft();
            self.compose_form_visible = true;
        }
    }

    /// Hide the compose form and discard the draft
    pub fn cancel_compose(&mut self) {
        self.compose_form_visible = false;
        self.clear_draft();
    }

    pub fn set_title(&mut self, title: &str) {
        self.draft.title = title.to_string();
    }

    pub fn set_author(&mut self, author: &str) {
        self.draft.author = author.to_string();
    }

    /// Replace the editor content
    pub fn set_body(&mut self, html: &str) {
        self.editor.set_contents(html);
    }

    /// Validate the draft and send it to the store
    ///
    /// On success the form closes, the draft is cleared and the feed is
    /// reloaded. On failure the draft is kept so the user can retry.
    pub async fn submit_post(&mut self) -> Result<(), BoardError> {
        let body = self.editor.serialize();
        let submission = match Submission::validate(&self.draft, body, self.editor.is_blank()) {
            Some(submission) => submission,
            None => return Err(self.fail(BoardError::ValidationFailed)),
        };

        let _busy = self.busy.hold();

        tracing::debug!(
            "Submitting post {:?} by {:?} ({} bytes)",
            submission.title,
            submission.author,
            submission.body.len()
        );

        match self
            .store
            .create_post(&submission.title, &submission.body, &submission.author)
            .await
        {
            Ok(post) => {
                tracing::info!("Created post {:?}", post.title);
                self.cancel_compose();
                self.load_feed().await
            }
            Err(e) => Err(self.fail(BoardError::create(&e))),
        }
    }

    /// Fetch all posts and replace the feed
    ///
    /// The feed is left untouched if the store fails.
    pub async fn load_feed(&mut self) -> Result<(), BoardError> {
        let _busy = self.busy.hold();

        match self.store.get_posts().await {
            Ok(posts) => {
                tracing::info!("Loaded {} posts", posts.len());
                self.feed = posts;
                Ok(())
            }
            Err(e) => Err(self.fail(BoardError::load(&e))),
        }
    }

    /// Display instructions for the current state
    pub fn view(&self, notices: Vec<Notice>, style: &DateStyle) -> BoardView {
        let body = self.editor.serialize();
        let snapshot = Snapshot {
            draft: &self.draft,
            body: &body,
            toolbar: self.editor.toolbar(),
            compose_form_visible: self.compose_form_visible,
            busy: self.busy.is_busy(),
            posts: &self.feed,
        };
        project(&snapshot, notices, style)
    }

    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    pub fn editor(&self) -> &E {
        &self.editor
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    /// Posts from the last successful load
    pub fn feed(&self) -> &[Post] {
        &self.feed
    }

    pub fn is_compose_form_visible(&self) -> bool {
        self.compose_form_visible
    }

    pub fn is_busy(&self) -> bool {
        self.busy.is_busy()
    }

    /// A handle observing this composer's busy flag
    pub fn busy_flag(&self) -> BusyFlag {
        self.busy.clone()
    }

    fn clear_draft(&mut self) {
        self.draft.clear();
        self.editor.reset();
    }

    fn fail(&self, error: BoardError) -> BoardError {
        present(&self.notifier, &error);
        error
    }
}
