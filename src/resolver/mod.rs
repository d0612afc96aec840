//! Installation orchestrator
//!
//! The entry point the host wires to its "packages were added" event.
//! Per batch: extract declared dependencies from each package's manifest,
//! deduplicate, drop entries an installed package already satisfies,
//! confirm with the user, then submit one combined install request to the
//! host and track it to completion via [`DependencyResolver::poll`].

use std::collections::{HashSet, VecDeque};

use console::Style;

use crate::domain::PackageDescriptor;
use crate::error::Result;
use crate::host::{InstallStatus, InstallTicket, PackageHost};
use crate::ui::{
    AutoApprove, ConfirmationGate, InteractivePrompt, ProgressReporter, SilentProgress,
    SpinnerProgress, dependency_label,
};
use crate::{installed, manifest};

/// Options for dependency resolution
#[derive(Debug, Clone)]
pub struct ResolverOptions {
    /// Ask before installing and show a spinner. Headless hosts set this
    /// to false to skip the prompt and all terminal output.
    pub interactive: bool,
}

impl Default for ResolverOptions {
    fn default() -> Self {
        Self { interactive: true }
    }
}

/// What one `resolve` call did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// Every declared dependency was already satisfied (or nothing declared)
    NothingToInstall,
    /// The user cancelled at the confirmation prompt
    Declined,
    /// A combined install request for this many dependencies was submitted
    Submitted(usize),
    /// An install request is already outstanding; this many dependencies
    /// were queued behind it
    Queued(usize),
}

/// One outstanding install request
struct ActiveInstall {
    ticket: Box<dyn InstallTicket>,
    dependencies: Vec<String>,
    progress: Box<dyn ProgressReporter>,
}

/// Main orchestrator for dependency resolution
///
/// Owns the injected host capability plus the single outstanding install
/// request. Batches that arrive while a request is outstanding are queued
/// and submitted in arrival order, re-filtered against a fresh installed
/// set at submission time.
pub struct DependencyResolver<H: PackageHost> {
    host: H,
    options: ResolverOptions,
    confirmation: Box<dyn ConfirmationGate>,
    active: Option<ActiveInstall>,
    deferred: VecDeque<Vec<String>>,
}

impl<H: PackageHost> DependencyResolver<H> {
    pub fn new(host: H, options: ResolverOptions) -> Self {
        let confirmation: Box<dyn ConfirmationGate> = if options.interactive {
            Box::new(InteractivePrompt)
        } else {
            Box::new(AutoApprove)
        };
        Self::with_confirmation(host, options, confirmation)
    }

    /// Construct with a custom confirmation gate (tests, embedded UIs)
    pub fn with_confirmation(
        host: H,
        options: ResolverOptions,
        confirmation: Box<dyn ConfirmationGate>,
    ) -> Self {
        Self {
            host,
            options,
            confirmation,
            active: None,
            deferred: VecDeque::new(),
        }
    }

    /// Whether an install request is outstanding and `poll` still has
    /// work to do.
    pub fn has_pending_install(&self) -> bool {
        self.active.is_some()
    }

    /// Resolve one registration batch.
    ///
    /// Invoked once per host "packages added" event. A malformed manifest
    /// skips its package, never the batch. Returns without side effects
    /// when nothing is unmet or the user declines.
    pub fn resolve(&mut self, batch: &[PackageDescriptor]) -> Result<Resolution> {
        let declared = self.collect_declared(batch);
        let declared = dedup_first_occurrence(declared);

        let installed = self.installed_or_empty();
        let unmet = installed::unmet(declared, &installed);
        if unmet.is_empty() {
            return Ok(Resolution::NothingToInstall);
        }

        let labels: Vec<String> = unmet.iter().map(|d| dependency_label(d)).collect();
        if !self.confirmation.confirm(&labels)? {
            return Ok(Resolution::Declined);
        }

        let count = unmet.len();
        if self.active.is_some() {
            self.deferred.push_back(unmet);
            return Ok(Resolution::Queued(count));
        }

        self.submit(unmet)?;
        Ok(Resolution::Submitted(count))
    }

    /// Check the outstanding install request.
    ///
    /// Called on each tick of the host's update loop. Non-blocking, and
    /// idempotent once the request is terminal: the ticket is dropped at
    /// the tick that observes completion, so later ticks observe nothing.
    pub fn poll(&mut self) {
        let status = match &self.active {
            Some(active) => active.ticket.status(),
            None => return,
        };

        match status {
            InstallStatus::Pending => {}
            InstallStatus::Succeeded => {
                if let Some(mut finished) = self.active.take() {
                    finished.progress.finish();
                }
                self.submit_next_deferred();
            }
            InstallStatus::Failed(message) => {
                if let Some(mut finished) = self.active.take() {
                    finished.progress.abandon("Dependency installation failed");
                    report_install_failure(&finished.dependencies, &message);
                }
                self.submit_next_deferred();
            }
        }
    }

    /// Run the extractor over the batch, skipping packages whose manifest
    /// cannot be read or parsed.
    fn collect_declared(&self, batch: &[PackageDescriptor]) -> Vec<String> {
        let mut declared = Vec::new();
        for package in batch {
            match manifest::declared_dependencies(package) {
                Ok(Some(entries)) => declared.extend(entries),
                Ok(None) => {}
                Err(e) => eprintln!("Skipping manifest of '{}': {}", package.name, e),
            }
        }
        declared
    }

    /// A failed installed-packages query counts as an empty index: every
    /// declared dependency stays unmet rather than being silently dropped.
    fn installed_or_empty(&self) -> Vec<PackageDescriptor> {
        match self.host.installed_packages() {
            Ok(installed) => installed,
            Err(e) => {
                eprintln!("Error: {e}");
                Vec::new()
            }
        }
    }

    fn submit(&mut self, dependencies: Vec<String>) -> Result<()> {
        let ticket = self.host.submit_change(&dependencies, &[])?;

        let mut progress = self.make_progress();
        progress.begin(&format!(
            "Installing {} dependency(s)...",
            dependencies.len()
        ));

        self.active = Some(ActiveInstall {
            ticket,
            dependencies,
            progress,
        });
        Ok(())
    }

    /// Submit the next queued dependency set, re-filtered against a fresh
    /// installed index. Sets emptied by the re-filter are dropped.
    fn submit_next_deferred(&mut self) {
        while let Some(deferred) = self.deferred.pop_front() {
            let installed = self.installed_or_empty();
            let unmet = installed::unmet(deferred, &installed);
            if unmet.is_empty() {
                continue;
            }
            match self.submit(unmet) {
                Ok(()) => return,
                Err(e) => eprintln!("Error: {e}"),
            }
        }
    }

    fn make_progress(&self) -> Box<dyn ProgressReporter> {
        if self.options.interactive {
            Box::new(SpinnerProgress::new())
        } else {
            Box::new(SilentProgress)
        }
    }
}

/// Reduce to a set with first-occurrence order preserved. Stable order
/// matters only for deterministic display, not for correctness.
fn dedup_first_occurrence(declared: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::new();
    declared
        .into_iter()
        .filter(|dependency| seen.insert(dependency.clone()))
        .collect()
}

fn report_install_failure(dependencies: &[String], message: &str) {
    eprintln!(
        "{} {}",
        Style::new().red().bold().apply_to("Installation failed:"),
        message
    );
    for dependency in dependencies {
        eprintln!("  - {}", dependency_label(dependency));
    }
}
