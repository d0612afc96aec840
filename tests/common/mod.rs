//! Common test utilities for gitdeps integration tests

use std::cell::RefCell;
use std::path::PathBuf;
use std::rc::Rc;

use tempfile::TempDir;

use gitdeps::error::GitdepsError;
use gitdeps::{ConfirmationGate, InstallStatus, InstallTicket, PackageDescriptor, PackageHost};

/// On-disk package fixtures for extraction tests
pub struct TestRegistry {
    /// Temporary directory holding the package trees
    #[allow(dead_code)]
    pub temp: TempDir,
}

#[allow(dead_code)]
impl TestRegistry {
    pub fn new() -> Self {
        Self {
            temp: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Create a package directory containing the given manifest content
    pub fn package(&self, name: &str, manifest: &str) -> PackageDescriptor {
        let path = self.package_dir(name);
        std::fs::write(path.join("package.json"), manifest).expect("Failed to write manifest");
        PackageDescriptor::new(
            name,
            format!("{name}@https://github.com/test/{name}.git"),
            path,
        )
    }

    /// Create a package directory with git dependencies declared
    pub fn package_with_deps(&self, name: &str, deps: &[&str]) -> PackageDescriptor {
        let entries = deps
            .iter()
            .map(|d| format!("\"{d}\""))
            .collect::<Vec<_>>()
            .join(", ");
        self.package(
            name,
            &format!("{{\"name\": \"{name}\", \"git-dependencies\": [{entries}]}}"),
        )
    }

    /// Create a package directory with no manifest file at all
    pub fn package_without_manifest(&self, name: &str) -> PackageDescriptor {
        let path = self.package_dir(name);
        PackageDescriptor::new(
            name,
            format!("{name}@https://github.com/test/{name}.git"),
            path,
        )
    }

    fn package_dir(&self, name: &str) -> PathBuf {
        let path = self.temp.path().join(name);
        std::fs::create_dir_all(&path).expect("Failed to create package directory");
        path
    }
}

/// An installed package whose source portion is `source`
#[allow(dead_code)]
pub fn installed_package(name: &str, source: &str) -> PackageDescriptor {
    PackageDescriptor::new(name, format!("{name}@{source}"), format!("/installed/{name}"))
}

/// Scriptable state behind a [`ScriptedTicket`]
pub struct TicketState {
    pub status: InstallStatus,
    /// How many times the resolver has read `status()`
    pub status_reads: usize,
}

impl Default for TicketState {
    fn default() -> Self {
        Self {
            status: InstallStatus::Pending,
            status_reads: 0,
        }
    }
}

/// Ticket whose status tests flip between poll calls
pub struct ScriptedTicket {
    state: Rc<RefCell<TicketState>>,
}

impl InstallTicket for ScriptedTicket {
    fn status(&self) -> InstallStatus {
        let mut state = self.state.borrow_mut();
        state.status_reads += 1;
        state.status.clone()
    }
}

/// Mock host recording submissions and serving a configurable installed set
///
/// The `Rc` fields stay inspectable after the host moves into the
/// resolver: clone the handles first.
pub struct MockHost {
    pub installed: Rc<RefCell<Vec<PackageDescriptor>>>,
    /// Every `submit_change` call as `(add, remove)`
    pub submissions: Rc<RefCell<Vec<(Vec<String>, Vec<String>)>>>,
    /// One ticket state per submission, in submission order
    pub tickets: Rc<RefCell<Vec<Rc<RefCell<TicketState>>>>>,
    pub fail_installed_query: bool,
    pub fail_submission: bool,
}

#[allow(dead_code)]
impl MockHost {
    pub fn new() -> Self {
        Self::with_installed(Vec::new())
    }

    pub fn with_installed(installed: Vec<PackageDescriptor>) -> Self {
        Self {
            installed: Rc::new(RefCell::new(installed)),
            submissions: Rc::new(RefCell::new(Vec::new())),
            tickets: Rc::new(RefCell::new(Vec::new())),
            fail_installed_query: false,
            fail_submission: false,
        }
    }
}

impl PackageHost for MockHost {
    fn installed_packages(&self) -> gitdeps::Result<Vec<PackageDescriptor>> {
        if self.fail_installed_query {
            return Err(GitdepsError::InstalledQueryFailed {
                reason: "registry offline".to_string(),
            });
        }
        Ok(self.installed.borrow().clone())
    }

    fn submit_change(
        &mut self,
        add: &[String],
        remove: &[String],
    ) -> gitdeps::Result<Box<dyn InstallTicket>> {
        if self.fail_submission {
            return Err(GitdepsError::SubmissionFailed {
                reason: "host busy".to_string(),
            });
        }
        self.submissions
            .borrow_mut()
            .push((add.to_vec(), remove.to_vec()));
        let state = Rc::new(RefCell::new(TicketState::default()));
        self.tickets.borrow_mut().push(Rc::clone(&state));
        Ok(Box::new(ScriptedTicket { state }))
    }
}

/// Confirmation gate with a fixed answer that records what it was shown
pub struct CountingGate {
    pub answer: bool,
    pub calls: Rc<RefCell<usize>>,
    pub seen_labels: Rc<RefCell<Vec<Vec<String>>>>,
}

#[allow(dead_code)]
impl CountingGate {
    pub fn approving() -> Self {
        Self::answering(true)
    }

    pub fn declining() -> Self {
        Self::answering(false)
    }

    fn answering(answer: bool) -> Self {
        Self {
            answer,
            calls: Rc::new(RefCell::new(0)),
            seen_labels: Rc::new(RefCell::new(Vec::new())),
        }
    }
}

impl ConfirmationGate for CountingGate {
    fn confirm(&mut self, labels: &[String]) -> gitdeps::Result<bool> {
        *self.calls.borrow_mut() += 1;
        self.seen_labels.borrow_mut().push(labels.to_vec());
        Ok(self.answer)
    }
}
