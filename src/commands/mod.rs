//! CLI commands

pub mod feed;
pub mod init;
pub mod post;
