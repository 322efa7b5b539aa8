//! Lattice configuration parameters.

use std::fmt;
use std::sync::Arc;

use latbox_core::BoxExtents;

use crate::diagnostics::SetupObserver;

/// Configuration for building a [`Lattice`](crate::Lattice) in one step.
///
/// Extents are validated by the indexing strategy when the lattice is
/// built, not here.
#[derive(Clone, Default)]
pub struct LatticeConfig {
    /// Box extents.
    pub extents: BoxExtents,

    /// Optional setup diagnostics hook.
    pub observer: Option<Arc<dyn SetupObserver>>,
}

impl LatticeConfig {
    /// Default box side used by [`LatticeConfig::default_cubic`].
    pub const DEFAULT_BOX: u32 = 64;

    /// Configuration for the given extents, without an observer.
    pub fn new(extents: BoxExtents) -> Self {
        Self {
            extents,
            observer: None,
        }
    }

    /// Cubic `DEFAULT_BOX`-sided configuration.
    pub fn default_cubic() -> Self {
        Self::new(BoxExtents::cubic(Self::DEFAULT_BOX))
    }

    /// Install a setup observer.
    pub fn with_observer(mut self, observer: impl SetupObserver + 'static) -> Self {
        self.observer = Some(Arc::new(observer));
        self
    }
}

impl fmt::Debug for LatticeConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LatticeConfig")
            .field("extents", &self.extents)
            .field("observer", &self.observer.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::SetupReport;

    #[test]
    fn default_cubic_is_64() {
        let config = LatticeConfig::default_cubic();
        assert_eq!(config.extents.volume(), Some(64 * 64 * 64));
        assert!(config.observer.is_none());
    }

    #[test]
    fn debug_hides_observer_body() {
        let config = LatticeConfig::new(BoxExtents::cubic(2)).with_observer(|_: &SetupReport| {});
        let text = format!("{config:?}");
        assert!(text.contains("observer: true"), "{text}");
    }
}
