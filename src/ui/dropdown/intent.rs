use crate::ui::mvi::Intent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropdownIntent {
    /// Menu button pressed. `entries` is the number of menu rows.
    Toggle { entries: usize },
    Close,
    /// Pointer pressed outside the menu.
    ClickOutside,
    MoveUp,
    MoveDown,
    /// Entry chosen. The host reads the highlighted row before dispatching.
    Select,
}

impl Intent for DropdownIntent {}
