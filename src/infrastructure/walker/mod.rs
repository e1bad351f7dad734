//! Directory walks
//!
//! Both walks are sorted by file name so that runs over an unchanged tree
//! always see files in the same order.

mod html_files;
mod image_sources;

pub use html_files::collect_html_files;
pub use image_sources::collect_sources;

use thiserror::Error;

/// Errors that can occur while walking a tree
#[derive(Error, Debug)]
pub enum WalkError {
    #[error("Directory not found: {0}")]
    DirectoryNotFound(String),

    #[error("Walk error: {0}")]
    Walk(#[from] walkdir::Error),
}
