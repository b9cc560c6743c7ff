//! blogapi - Static JSON:API collections for a blog
//!
//! Turns parsed blog posts and author profiles into `posts`, `tags` and
//! `authors` collections, hiding drafts from production builds.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::BlogError;
