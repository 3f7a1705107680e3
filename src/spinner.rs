//! Background progress spinner shown while a long operation runs

use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::fmt;
use std::time::Duration;

/// Default delay between two animation frames
pub const DEFAULT_INTERVAL: Duration = Duration::from_millis(300);

/// Animation frames, the last one is shown once finished
const TICKS: &[&str] = &["-", "\\", "|", "/", ""];

/// Handle to a running spinner
///
/// The spinner keeps animating on its own tick thread until [Spinner::stop]
/// is called or the handle is dropped, either way its line is cleared.
pub struct Spinner {
    bar: ProgressBar,
}

impl Spinner {
    /// Starts spinning on stdout with the default interval
    pub fn start(title: &str) -> Self {
        Self::start_with(title, DEFAULT_INTERVAL, ProgressDrawTarget::stdout())
    }

    /// Starts spinning on any draw target
    pub fn start_with(title: &str, interval: Duration, target: ProgressDrawTarget) -> Self {
        let bar = ProgressBar::with_draw_target(None, target);
        match ProgressStyle::default_spinner()
            .tick_strings(TICKS)
            .template("{msg}{spinner}")
        {
            Ok(style) => bar.set_style(style),
            Err(err) => tracing::warn!(%err, "falling back to default spinner style"),
        }
        bar.set_message(title.to_string());
        bar.enable_steady_tick(interval);
        tracing::debug!(?interval, "spinner started");
        Self { bar }
    }

    /// Stops the spinner and clears its line
    pub fn stop(self) {
        self.halt()
    }

    fn halt(&self) {
        if !self.bar.is_finished() {
            self.bar.finish_and_clear();
            tracing::debug!("spinner stopped");
        }
    }
}

impl Drop for Spinner {
    fn drop(&mut self) {
        self.halt()
    }
}

impl fmt::Debug for Spinner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Spinner")
            .field("message", &self.bar.message())
            .field("finished", &self.bar.is_finished())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn shows_title() {
        let spinner = Spinner::start_with("loading ", Duration::from_millis(5), ProgressDrawTarget::hidden());
        assert_eq!(spinner.bar.message(), "loading ");
        assert!(!spinner.bar.is_finished());
        spinner.stop();
    }

    #[test]
    fn stop_finishes() {
        let spinner = Spinner::start_with("working ", Duration::from_millis(5), ProgressDrawTarget::hidden());
        let bar = spinner.bar.clone();
        thread::sleep(Duration::from_millis(20));
        spinner.stop();
        assert!(bar.is_finished());
    }

    #[test]
    fn drop_finishes() {
        let bar = {
            let spinner = Spinner::start_with("", Duration::from_millis(5), ProgressDrawTarget::hidden());
            spinner.bar.clone()
        };
        assert!(bar.is_finished());
    }

    #[test]
    fn style_template_is_valid() {
        assert!(ProgressStyle::default_spinner()
            .tick_strings(TICKS)
            .template("{msg}{spinner}")
            .is_ok());
    }
}
