use console::{Term, style};
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};

use crate::constants::progress::TICK_INTERVAL;

const PROGRESS_BAR_TEMPLATE: &str =
    "{msg} [{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len}";

/// Progress display for manifest loading
///
/// Draws nothing when stderr is not a terminal so that piped runs stay clean.
pub struct ProgressReporter {
    term: Term,
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            term: Term::stderr(),
        }
    }

    pub fn is_interactive(&self) -> bool {
        self.term.is_term()
    }

    pub fn start_loading(&self, manifests: usize) -> ProgressBar {
        if !self.is_interactive() {
            return ProgressBar::with_draw_target(
                Some(manifests as u64),
                ProgressDrawTarget::hidden(),
            );
        }

        let pb = ProgressBar::new(manifests as u64);
        if let Ok(bar_style) = ProgressStyle::default_bar().template(PROGRESS_BAR_TEMPLATE) {
            pb.set_style(bar_style.progress_chars("█▉▊▋▌▍▎▏ "));
        }
        pb.set_message("Reading assets files");
        pb.enable_steady_tick(TICK_INTERVAL);
        pb
    }

    pub fn finish_loading(&self, pb: ProgressBar, edges: usize) {
        pb.finish_and_clear();
        eprintln!(
            "{} Loaded {} dependenc{}",
            style("✓").green(),
            style(edges).yellow().bold(),
            if edges == 1 { "y" } else { "ies" }
        );
    }
}
