use crate::ports::outbound::ProgressReporter;
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::cell::RefCell;

const STAGE_TEMPLATE: &str = "   {spinner:.green} [{bar:30.cyan/blue}] {pos}/{len} {msg}";

/// StderrProgressReporter adapter for reporting progress to stderr
///
/// Messages and the stage bar go to stderr so a diff printed on stdout can
/// be piped or redirected untouched. The bar is created on the first stage
/// update and cleared before any warning or the final summary is printed.
pub struct StderrProgressReporter {
    stage_bar: RefCell<Option<ProgressBar>>,
}

impl StderrProgressReporter {
    pub fn new() -> Self {
        Self {
            stage_bar: RefCell::new(None),
        }
    }

    fn stage_bar(&self, total: usize) -> ProgressBar {
        let mut slot = self.stage_bar.borrow_mut();
        if let Some(bar) = slot.as_ref() {
            return bar.clone();
        }

        let bar = ProgressBar::with_draw_target(Some(total as u64), ProgressDrawTarget::stderr());
        let style = ProgressStyle::default_bar()
            .template(STAGE_TEMPLATE)
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("=>-");
        bar.set_style(style);
        *slot = Some(bar.clone());
        bar
    }

    fn clear_stage_bar(&self) {
        if let Some(bar) = self.stage_bar.borrow_mut().take() {
            bar.finish_and_clear();
        }
    }
}

impl Default for StderrProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressReporter for StderrProgressReporter {
    fn report(&self, message: &str) {
        match self.stage_bar.borrow().as_ref() {
            // a hidden bar swallows println
            Some(bar) if !bar.is_hidden() => bar.println(message),
            _ => eprintln!("{}", message),
        }
    }

    fn report_progress(&self, current: usize, total: usize, message: Option<&str>) {
        let bar = self.stage_bar(total);
        bar.set_position(current as u64);
        if let Some(message) = message {
            bar.set_message(message.to_string());
        }
    }

    fn report_error(&self, message: &str) {
        self.clear_stage_bar();
        eprintln!("{}", message);
    }

    fn report_completion(&self, message: &str) {
        self.clear_stage_bar();
        eprintln!("✅ {}", message);
    }
}
