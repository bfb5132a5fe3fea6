// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Cosmetic activity indicator shown while a long git command runs.

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Something that can show "busy" while a blocking call runs.
pub trait Spinner {
    /// Begin animating with the given message.
    fn start(&mut self, message: &str);

    /// Stop animating and clear the line. Safe to call more than once.
    fn stop(&mut self);
}

/// Spinner drawn on stderr by indicatif's steady ticker.
pub struct IndicatifSpinner {
    interval: Duration,
    bar: Option<ProgressBar>,
}

impl IndicatifSpinner {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            bar: None,
        }
    }
}

impl Spinner for IndicatifSpinner {
    fn start(&mut self, message: &str) {
        self.stop();

        let style = ProgressStyle::with_template("{spinner:.cyan} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏ ");

        let bar = ProgressBar::new_spinner();
        bar.set_style(style);
        bar.set_message(message.to_string());
        bar.enable_steady_tick(self.interval);
        self.bar = Some(bar);
    }

    fn stop(&mut self) {
        if let Some(bar) = self.bar.take() {
            bar.finish_and_clear();
        }
    }
}

impl Drop for IndicatifSpinner {
    fn drop(&mut self) {
        self.stop();
    }
}

/// Spinner that draws nothing.
#[derive(Debug, Default)]
pub struct NoSpinner;

impl Spinner for NoSpinner {
    fn start(&mut self, _message: &str) {}

    fn stop(&mut self) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indicatif_spinner_stop_is_idempotent() {
        let mut spinner = IndicatifSpinner::new(Duration::from_millis(50));
        spinner.start("Pushing");
        assert!(spinner.bar.is_some());
        spinner.stop();
        spinner.stop();
        assert!(spinner.bar.is_none());
    }

    #[test]
    fn test_restart_replaces_bar() {
        let mut spinner = IndicatifSpinner::new(Duration::from_millis(50));
        spinner.start("one");
        spinner.start("two");
        assert_eq!(spinner.bar.as_ref().unwrap().message(), "two");
    }
}
