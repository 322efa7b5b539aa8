//! Test utilities and fixtures for latbox development.
//!
//! Provides a [`RecordingObserver`] that captures setup diagnostics and
//! seeded generators for deterministic coordinate workloads (see
//! [`fixtures`]).

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

use std::sync::{Arc, Mutex};

use latbox_lattice::{SetupObserver, SetupReport};

pub use fixtures::{random_moves, random_positions, tagged_lattice};

/// Setup observer that records every report it receives.
///
/// Clones share the same log, so keep one clone for inspection and hand
/// the other to the lattice.
#[derive(Clone, Default)]
pub struct RecordingObserver {
    reports: Arc<Mutex<Vec<SetupReport>>>,
}

impl RecordingObserver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the reports recorded so far.
    pub fn reports(&self) -> Vec<SetupReport> {
        self.reports.lock().expect("observer log poisoned").clone()
    }

    pub fn count(&self) -> usize {
        self.reports.lock().expect("observer log poisoned").len()
    }
}

impl SetupObserver for RecordingObserver {
    fn on_setup(&self, report: &SetupReport) {
        self.reports
            .lock()
            .expect("observer log poisoned")
            .push(report.clone());
    }
}
