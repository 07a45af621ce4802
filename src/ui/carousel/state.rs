//! State and render snapshot for the carousel.

use serde::Serialize;

use crate::ui::mvi::UiState;

/// Lifecycle of a carousel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CarouselPhase {
    /// Items have not been delivered yet. Render a skeleton.
    #[default]
    Loading,
    /// Items delivered, none to show. Render the empty-state message.
    Empty,
    /// Everything fits in one view. No autoplay, no controls.
    Static,
    /// More items than fit in one view. Autoplay and controls active.
    Carousel,
}

/// Carousel state over an ordered item collection.
#[derive(Debug, Clone, PartialEq)]
pub struct CarouselState<T> {
    pub(super) items: Option<Vec<T>>,
    pub(super) items_per_view: usize,
    pub(super) current_index: usize,
    pub(super) paused: bool,
}

impl<T> Default for CarouselState<T> {
    fn default() -> Self {
        Self {
            items: None,
            items_per_view: 1,
            current_index: 0,
            paused: false,
        }
    }
}

impl<T: Clone + PartialEq + Send + 'static> UiState for CarouselState<T> {}

impl<T> CarouselState<T> {
    pub fn new(items_per_view: usize) -> Self {
        Self {
            items_per_view: items_per_view.max(1),
            ..Self::default()
        }
    }

    pub fn phase(&self) -> CarouselPhase {
        match &self.items {
            None => CarouselPhase::Loading,
            Some(items) if items.is_empty() => CarouselPhase::Empty,
            Some(items) if items.len() <= self.items_per_view => CarouselPhase::Static,
            Some(_) => CarouselPhase::Carousel,
        }
    }

    pub fn items(&self) -> &[T] {
        self.items.as_deref().unwrap_or(&[])
    }

    pub fn len(&self) -> usize {
        self.items().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items().is_empty()
    }

    pub fn items_per_view(&self) -> usize {
        self.items_per_view
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Largest valid `current_index`: `max(0, len - items_per_view)`.
    pub fn max_index(&self) -> usize {
        self.len().saturating_sub(self.items_per_view)
    }

    pub fn auto_advance_enabled(&self) -> bool {
        self.phase() == CarouselPhase::Carousel
    }

    /// Track translation as a fraction of the track: `current_index / len`.
    pub fn offset_fraction(&self) -> f64 {
        match self.len() {
            0 => 0.0,
            len => self.current_index as f64 / len as f64,
        }
    }

    /// Track width in multiples of the viewport width: `len / items_per_view`.
    pub fn track_extent(&self) -> f64 {
        self.len() as f64 / self.items_per_view as f64
    }

    /// Share of the track taken by one item: `1 / len`.
    pub fn item_fraction(&self) -> f64 {
        match self.len() {
            0 => 0.0,
            len => 1.0 / len as f64,
        }
    }

    /// Items inside the visible window.
    pub fn visible_items(&self) -> &[T] {
        let items = self.items();
        let start = self.current_index.min(items.len());
        let end = (start + self.items_per_view).min(items.len());
        &items[start..end]
    }

    /// Item at `current_index + offset`, wrapping around both ends.
    /// Used by single-item rotators to show their neighbours.
    pub fn wrapped(&self, offset: isize) -> Option<&T> {
        let items = self.items();
        if items.is_empty() {
            return None;
        }
        let len = items.len() as isize;
        let index = (self.current_index as isize + offset).rem_euclid(len);
        items.get(index as usize)
    }

    pub fn can_go_previous(&self) -> bool {
        self.current_index > 0
    }

    pub fn can_go_next(&self) -> bool {
        self.current_index < self.max_index()
    }

    /// Data-level render snapshot.
    pub fn view(&self) -> CarouselView {
        let phase = self.phase();
        let show_controls = phase == CarouselPhase::Carousel;
        let max_index = self.max_index();
        let dots = if show_controls {
            (0..=max_index)
                .map(|index| Dot {
                    index,
                    active: index == self.current_index,
                })
                .collect()
        } else {
            Vec::new()
        };

        CarouselView {
            phase,
            item_count: self.len(),
            items_per_view: self.items_per_view,
            current_index: self.current_index,
            max_index,
            offset_fraction: self.offset_fraction(),
            track_extent: self.track_extent(),
            item_fraction: self.item_fraction(),
            dots,
            show_controls,
            previous_enabled: show_controls && self.can_go_previous(),
            next_enabled: show_controls && self.can_go_next(),
            paused: self.paused,
            position_label: show_controls
                .then(|| format!("{} / {}", self.current_index + 1, max_index + 1)),
        }
    }
}

/// One dot indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Dot {
    pub index: usize,
    pub active: bool,
}

/// Immutable snapshot handed to renderers and subscribers.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CarouselView {
    pub phase: CarouselPhase,
    pub item_count: usize,
    pub items_per_view: usize,
    pub current_index: usize,
    pub max_index: usize,
    pub offset_fraction: f64,
    pub track_extent: f64,
    pub item_fraction: f64,
    pub dots: Vec<Dot>,
    pub show_controls: bool,
    pub previous_enabled: bool,
    pub next_enabled: bool,
    pub paused: bool,
    pub position_label: Option<String>,
}
