//! Viewport width → items per view.

use serde::{Deserialize, Serialize};

/// From `min_width` upward, show `items_per_view` items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Breakpoint {
    pub min_width: u32,
    pub items_per_view: usize,
}

/// Breakpoint table, kept sorted by `min_width`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Breakpoints(Vec<Breakpoint>);

impl Breakpoints {
    pub fn new(mut entries: Vec<Breakpoint>) -> Self {
        entries.sort_by_key(|bp| bp.min_width);
        Self(entries)
    }

    /// Items to show at `width`. The widest matching breakpoint wins;
    /// widths below every breakpoint use the narrowest one.
    pub fn items_for_width(&self, width: u32) -> usize {
        self.0
            .iter()
            .rev()
            .find(|bp| bp.min_width <= width)
            .or_else(|| self.0.first())
            .map(|bp| bp.items_per_view.max(1))
            .unwrap_or(1)
    }

    pub fn entries(&self) -> &[Breakpoint] {
        &self.0
    }
}

impl Default for Breakpoints {
    fn default() -> Self {
        Self::new(default_breakpoints())
    }
}

/// `< 640` → 1, `< 1024` → 2, otherwise 3.
pub fn default_breakpoints() -> Vec<Breakpoint> {
    vec![
        Breakpoint {
            min_width: 0,
            items_per_view: 1,
        },
        Breakpoint {
            min_width: 640,
            items_per_view: 2,
        },
        Breakpoint {
            min_width: 1024,
            items_per_view: 3,
        },
    ]
}
