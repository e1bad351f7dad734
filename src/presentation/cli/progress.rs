//! Progress reporting for CLI

use crate::application::DerivationProgressCallback;
use indicatif::{ProgressBar, ProgressStyle};
use std::io::IsTerminal;
use std::sync::Arc;

const DERIVE_TEMPLATE: &str =
    "{msg}\n{spinner:.green} [{elapsed_precise}] [{wide_bar:.cyan/blue}] {pos}/{len} sources ({eta})";

/// Progress reporter using indicatif; draws on stderr
pub struct ProgressReporter {
    bar: Arc<ProgressBar>,
}

impl ProgressReporter {
    /// Creates a reporter for a derivation run over `total_sources`.
    ///
    /// The bar is hidden when `enabled` is false or stderr is not a terminal.
    pub fn for_derivation(total_sources: u64, enabled: bool) -> Self {
        let bar = if enabled && std::io::stderr().is_terminal() {
            ProgressBar::new(total_sources)
        } else {
            ProgressBar::hidden()
        };

        let style = ProgressStyle::default_bar()
            .template(DERIVE_TEMPLATE)
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("#>-");
        bar.set_style(style);
        bar.set_message("Deriving images...".to_string());

        Self { bar: Arc::new(bar) }
    }

    /// Finishes with a message
    pub fn finish(&self, message: &str) {
        self.bar.finish_with_message(message.to_string());
    }

    /// Gets a callback for derivation progress
    pub fn derivation_callback(&self) -> DerivationProgressCallback {
        let bar = Arc::clone(&self.bar);
        Box::new(move |current: usize, total: usize| {
            bar.set_length(total as u64);
            bar.set_position(current as u64);
        })
    }
}
