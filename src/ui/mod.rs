//! UI/Progress presentation layer
//!
//! This module handles:
//! - Display formatting of dependency identifiers
//! - The yes/no confirmation gate shown before installing
//! - Progress reporting while an install request is outstanding
//!
//! Confirmation goes through the [`ConfirmationGate`] trait and progress
//! through the [`ProgressReporter`] trait, allowing interactive and
//! silent/headless implementations to be swapped per host context.

use console::Style;
use indicatif::{ProgressBar, ProgressStyle};
use inquire::Confirm;

use crate::error::{GitdepsError, Result};

/// Format a dependency identifier for display.
///
/// Removes the literal `.git` and a leading `https://github.com/`, so a
/// typical URL collapses to an `owner/repo` label. Purely cosmetic; the
/// raw declaration string is what gets compared and installed.
pub fn dependency_label(dependency: &str) -> String {
    let collapsed = dependency.replace(".git", "");
    match collapsed.strip_prefix("https://github.com/") {
        Some(rest) => rest.to_string(),
        None => collapsed,
    }
}

/// Confirmation gate shown before dependencies are installed
pub trait ConfirmationGate {
    /// Present the formatted dependency labels and ask whether to proceed.
    fn confirm(&mut self, labels: &[String]) -> Result<bool>;
}

/// Interactive gate: prints the dependency list and asks a yes/no prompt
pub struct InteractivePrompt;

impl ConfirmationGate for InteractivePrompt {
    fn confirm(&mut self, labels: &[String]) -> Result<bool> {
        println!("\nThe following missing dependencies will be installed:");
        for label in labels {
            println!("  - {}", Style::new().cyan().apply_to(label));
        }
        println!();

        Confirm::new("Install missing dependencies?")
            .with_default(true)
            .with_help_message("Press Enter to install, or 'n' to cancel")
            .prompt()
            .map_err(|e| GitdepsError::ConfirmationFailed {
                reason: e.to_string(),
            })
    }
}

/// Headless gate: proceeds without asking
pub struct AutoApprove;

impl ConfirmationGate for AutoApprove {
    fn confirm(&mut self, _labels: &[String]) -> Result<bool> {
        Ok(true)
    }
}

/// Progress reporter for an outstanding install request
pub trait ProgressReporter {
    /// Show the indicator with the given message
    fn begin(&mut self, message: &str);

    /// Clear the indicator after successful completion
    fn finish(&mut self);

    /// Tear the indicator down on failure, leaving `message` visible
    fn abandon(&mut self, message: &str);
}

/// Indeterminate spinner shown from submission until the host's install
/// request reports completion. There is no cancellation path, the spinner
/// is purely observational.
#[derive(Default)]
pub struct SpinnerProgress {
    pb: Option<ProgressBar>,
}

impl SpinnerProgress {
    pub fn new() -> Self {
        Self { pb: None }
    }
}

impl ProgressReporter for SpinnerProgress {
    fn begin(&mut self, message: &str) {
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner} {msg}")
                .unwrap()
                .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"]),
        );
        pb.set_message(message.to_string());
        pb.enable_steady_tick(std::time::Duration::from_millis(80));
        self.pb = Some(pb);
    }

    fn finish(&mut self) {
        if let Some(pb) = self.pb.take() {
            pb.finish_and_clear();
        }
    }

    fn abandon(&mut self, message: &str) {
        if let Some(pb) = self.pb.take() {
            pb.abandon_with_message(message.to_string());
        }
    }
}

/// Silent progress reporter for headless runs
///
/// No-op implementation that does not display anything.
#[derive(Default)]
pub struct SilentProgress;

impl ProgressReporter for SilentProgress {
    fn begin(&mut self, _message: &str) {
        // No-op for silent mode
    }

    fn finish(&mut self) {
        // No-op for silent mode
    }

    fn abandon(&mut self, _message: &str) {
        // No-op for silent mode
    }
}
