use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

pub struct ProgressBarBuilder {
    message: String,
    length: Option<u64>,
}

impl ProgressBarBuilder {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            length: None,
        }
    }

    /// Switch from a spinner to a sized bar.
    pub fn with_length(mut self, length: u64) -> Self {
        self.length = Some(length);
        self
    }

    pub fn build(self) -> Result<ProgressBar> {
        let pb = match self.length {
            Some(length) => ProgressBar::new(length),
            None => {
                let pb = ProgressBar::new_spinner();
                pb.enable_steady_tick(Duration::from_millis(250));
                pb
            }
        };

        let template = if self.length.is_some() {
            "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}"
        } else {
            "{spinner:.green} {msg}"
        };
        pb.set_style(
            ProgressStyle::default_spinner()
                .template(template)?
                .progress_chars("#>-"),
        );
        pb.set_message(self.message);

        Ok(pb)
    }
}
