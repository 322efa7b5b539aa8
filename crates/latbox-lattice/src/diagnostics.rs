//! Setup diagnostics.
//!
//! Every successful [`Lattice::setup`](crate::Lattice::setup) emits a
//! `tracing` debug event and, if one is installed, hands a [`SetupReport`]
//! to the lattice's [`SetupObserver`].

use latbox_core::BoxExtents;

/// Sizing summary produced by a successful lattice setup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SetupReport {
    /// Name of the indexing strategy (`Indexing::NAME`).
    pub strategy: &'static str,
    /// Configured box extents.
    pub extents: BoxExtents,
    /// Y stride (linear) or shift (power-of-two).
    pub x_pro: usize,
    /// Z stride (linear) or shift (power-of-two).
    pub pro_xy: usize,
    /// Number of sites allocated.
    pub sites: usize,
    /// Size of the site buffer in bytes.
    pub bytes: usize,
}

impl SetupReport {
    /// Buffer size in MiB.
    pub fn megabytes(&self) -> f64 {
        self.bytes as f64 / (1024.0 * 1024.0)
    }
}

/// Hook receiving a [`SetupReport`] after each successful setup.
///
/// Closures `Fn(&SetupReport)` implement this trait directly.
///
/// # Examples
///
/// ```
/// use std::sync::{Arc, Mutex};
/// use latbox_lattice::{LinearLattice, SetupReport};
///
/// let seen = Arc::new(Mutex::new(Vec::new()));
/// let sink = Arc::clone(&seen);
/// let mut lattice: LinearLattice<u8> = LinearLattice::new()
///     .with_observer(move |r: &SetupReport| sink.lock().unwrap().push(r.bytes));
/// lattice.setup_box(4, 4, 4).unwrap();
/// assert_eq!(*seen.lock().unwrap(), vec![64]);
/// ```
pub trait SetupObserver: Send + Sync {
    /// Called once per successful setup.
    fn on_setup(&self, report: &SetupReport);
}

impl<F> SetupObserver for F
where
    F: Fn(&SetupReport) + Send + Sync,
{
    fn on_setup(&self, report: &SetupReport) {
        self(report)
    }
}

pub(crate) fn emit(report: &SetupReport) {
    tracing::debug!(
        strategy = report.strategy,
        extents = %report.extents,
        x_pro = report.x_pro,
        pro_xy = report.pro_xy,
        sites = report.sites,
        bytes = report.bytes,
        mib = report.megabytes(),
        "lattice set up"
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn megabytes_scales_bytes() {
        let r = SetupReport {
            strategy: "linear",
            extents: BoxExtents::cubic(128),
            x_pro: 128,
            pro_xy: 128 * 128,
            sites: 128 * 128 * 128,
            bytes: 2 * 1024 * 1024,
        };
        assert_eq!(r.megabytes(), 2.0);
    }
}
