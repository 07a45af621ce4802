//! Visibility observation capability.

use std::fmt;

use thiserror::Error;

/// Identity of a block registered with a [`VisibilityObserver`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BlockId(pub u64);

impl fmt::Display for BlockId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "block#{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ObserveError {
    #[error("visibility observation is not available on this host")]
    Unavailable,

    #[error("{0} is not mounted")]
    UnknownBlock(BlockId),
}

/// Host-provided viewport intersection tracking.
///
/// The host reports changes back by calling
/// [`RevealController::on_intersect`](super::RevealController::on_intersect)
/// for the block that crossed `threshold`.
pub trait VisibilityObserver {
    /// Start tracking `block`. `threshold` is the visible-area fraction
    /// at which the block counts as intersecting.
    fn observe(&mut self, block: BlockId, threshold: f32) -> Result<(), ObserveError>;

    fn unobserve(&mut self, block: BlockId);
}

/// Observer for hosts without any visibility primitive.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnavailableObserver;

impl VisibilityObserver for UnavailableObserver {
    fn observe(&mut self, _block: BlockId, _threshold: f32) -> Result<(), ObserveError> {
        Err(ObserveError::Unavailable)
    }

    fn unobserve(&mut self, _block: BlockId) {}
}
