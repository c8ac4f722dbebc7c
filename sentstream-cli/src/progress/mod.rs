//! Progress reporting module

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

const TEMPLATE: &str = "[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} files {msg}";

/// Per-file progress bar on stderr, with a running sentence count
pub struct ProgressReporter {
    progress_bar: Option<ProgressBar>,
    quiet: bool,
    sentences: usize,
}

impl ProgressReporter {
    pub fn new(quiet: bool) -> Self {
        Self {
            progress_bar: None,
            quiet,
            sentences: 0,
        }
    }

    pub fn init_files(&mut self, total_files: u64) {
        if self.quiet {
            return;
        }

        let style = ProgressStyle::default_bar()
            .template(TEMPLATE)
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("##-");

        let pb = ProgressBar::new(total_files).with_style(style);
        pb.enable_steady_tick(Duration::from_millis(100));
        self.progress_bar = Some(pb);
    }

    pub fn file_completed(&mut self, filename: &str, sentences: usize) {
        self.sentences += sentences;
        if let Some(pb) = &self.progress_bar {
            pb.set_message(format!("{filename} ({} sentences so far)", self.sentences));
            pb.inc(1);
        }
    }

    pub fn finish(&self) {
        if let Some(pb) = &self.progress_bar {
            pb.finish_with_message(format!("{} sentences", self.sentences));
        }
    }

    /// Sentences reported so far
    pub fn sentences(&self) -> usize {
        self.sentences
    }
}
