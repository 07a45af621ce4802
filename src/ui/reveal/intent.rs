use crate::ui::mvi::Intent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealIntent {
    /// The observer accepted the block.
    Observed,
    /// The host has no visibility primitive. Fails open to visible.
    ObserverUnavailable,
    /// Visibility changed.
    Intersection { is_intersecting: bool },
    /// The stagger delay ran out.
    DelayElapsed,
}

impl Intent for RevealIntent {}
