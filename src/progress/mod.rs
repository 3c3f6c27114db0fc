use indicatif::{ProgressBar, ProgressStyle};

const TEMPLATE: &str = "{msg} [{bar:40.cyan/blue}] {pos}/{len}";

/// Row counter on stderr. Cleared when dropped, so an early return on error
/// does not leave a half drawn bar above the error message.
pub struct Bar {
    progress: ProgressBar,
}

impl Bar {
    pub fn new(message: &str, total: u64) -> Self {
        let progress = ProgressBar::new(total);
        if let Ok(style) = ProgressStyle::default_bar().template(TEMPLATE) {
            progress.set_style(style.progress_chars("=> "));
        }
        progress.set_message(message.to_string());

        Self { progress }
    }

    pub fn inc(&self, delta: u64) {
        self.progress.inc(delta);
    }
}

impl Drop for Bar {
    fn drop(&mut self) {
        self.progress.finish_and_clear();
    }
}
