//! Content module - posts, drafts and markdown input

mod draft;
mod markdown;
mod post;

pub use draft::{Draft, Submission};
pub use markdown::markdown_to_html;
pub use post::Post;
