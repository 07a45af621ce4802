use std::collections::HashMap;
use std::time::{Duration, Instant};

use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;

use crate::config::Config;
use crate::content::Category;
use crate::schedule::{TimerQueue, TimerSink};
use crate::ui::carousel::{
    Breakpoint, Breakpoints, CarouselController, CarouselState, CarouselTiming, CarouselView,
};
use crate::ui::dropdown::{DropdownIntent, DropdownReducer, DropdownState};
use crate::ui::home::{self, Section, SectionSpec, Testimonial};
use crate::ui::layout::{
    categories_track, contains, dropdown_rect, layout_regions, place_section, Placed,
    PRODUCTS_LABEL_X,
};
use crate::ui::mvi::Reducer;
use crate::ui::reveal::{BlockId, RevealController, RevealMotion, RevealStyle};
use crate::ui::viewport::ViewportObserver;

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

/// Preview knobs taken from the config file.
#[derive(Debug, Clone)]
pub struct PreviewSettings {
    pub carousel: CarouselTiming,
    pub testimonials: CarouselTiming,
    pub breakpoints: Breakpoints,
    pub motion: RevealMotion,
    pub threshold: f32,
    pub column_width_px: u32,
}

impl PreviewSettings {
    pub fn from_config(config: &Config) -> Self {
        Self {
            carousel: config.carousel.timing(),
            testimonials: config.testimonials.timing(),
            breakpoints: config.carousel.breakpoint_table(),
            motion: config.reveal.motion(),
            threshold: config.reveal.threshold,
            column_width_px: config.preview.column_width_px,
        }
    }
}

impl Default for PreviewSettings {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

type Reveal = RevealController<TimerQueue, ViewportObserver>;

pub struct App {
    should_quit: bool,
    size: Option<(u16, u16)>,
    settings: PreviewSettings,
    queue: TimerQueue,
    observer: ViewportObserver,
    categories: CarouselController<Category, TimerQueue>,
    testimonials: CarouselController<Testimonial, TimerQueue>,
    reveals: Vec<(Section, Reveal)>,
    revealed_at: HashMap<BlockId, Instant>,
    dropdown: DropdownState,
    scroll: u16,
}

impl App {
    pub fn new(settings: PreviewSettings, queue: TimerQueue, categories: Vec<Category>) -> Self {
        let observer = ViewportObserver::new();
        let mut reveals = Vec::with_capacity(home::SECTIONS.len());
        for (spec, extent) in home::section_extents() {
            observer.place(spec.block(), extent);
            let mut reveal = RevealController::new(
                spec.block(),
                spec.direction,
                spec.delay,
                queue.clone(),
                observer.clone(),
            );
            reveal.observe(settings.threshold);
            reveals.push((spec.section, reveal));
        }

        let mut category_carousel = CarouselController::new(
            queue.clone(),
            settings.carousel,
            settings.breakpoints.clone(),
        );
        category_carousel.set_items(categories);

        let single = Breakpoints::new(vec![Breakpoint {
            min_width: 0,
            items_per_view: 1,
        }]);
        let mut testimonials =
            CarouselController::new(queue.clone(), settings.testimonials, single);
        testimonials.set_items(home::testimonials());

        Self {
            should_quit: false,
            size: None,
            settings,
            queue,
            observer,
            categories: category_carousel,
            testimonials,
            reveals,
            revealed_at: HashMap::new(),
            dropdown: DropdownState::default(),
            scroll: 0,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn scroll(&self) -> u16 {
        self.scroll
    }

    pub fn settings(&self) -> &PreviewSettings {
        &self.settings
    }

    pub fn categories(&self) -> &CarouselState<Category> {
        self.categories.state()
    }

    pub fn categories_view(&self) -> CarouselView {
        self.categories.view()
    }

    pub fn testimonials(&self) -> &CarouselState<Testimonial> {
        self.testimonials.state()
    }

    pub fn dropdown(&self) -> DropdownState {
        self.dropdown
    }

    /// Time until the next timer is due, for the event poll timeout.
    pub fn next_deadline(&self) -> Option<Duration> {
        self.queue.next_deadline()
    }

    /// Current style of a section's reveal block.
    pub fn reveal_style(&self, section: Section, now: Instant) -> RevealStyle {
        let Some((_, reveal)) = self.reveals.iter().find(|(s, _)| *s == section) else {
            return RevealStyle::visible();
        };
        let elapsed = self
            .revealed_at
            .get(&reveal.block())
            .map(|at| now.saturating_duration_since(*at))
            .unwrap_or_default();
        reveal.style(&self.settings.motion, elapsed)
    }

    pub fn on_resize(&mut self, cols: u16, rows: u16) {
        self.size = Some((cols, rows));
        let px_per_col = self.settings.column_width_px;
        self.categories
            .set_viewport_width(u32::from(cols).saturating_mul(px_per_col));
        self.scroll = self.scroll.min(self.max_scroll());
        self.sync_viewport();
    }

    /// Fire due timers and record reveal start times.
    pub fn on_tick(&mut self, now: Instant) {
        self.fire_timers(|queue, sinks| queue.run_due(sinks));
        self.record_reveals(now);
    }

    /// Move a manual clock forward by `by`. Realtime clocks ignore this.
    pub fn advance(&mut self, by: Duration, now: Instant) {
        self.fire_timers(|queue, sinks| queue.advance(by, sinks));
        self.record_reveals(now);
    }

    fn fire_timers(&mut self, fire: impl FnOnce(&TimerQueue, &mut [&mut dyn TimerSink])) {
        let mut sinks: Vec<&mut dyn TimerSink> = Vec::with_capacity(2 + self.reveals.len());
        sinks.push(&mut self.categories);
        sinks.push(&mut self.testimonials);
        for (_, reveal) in self.reveals.iter_mut() {
            sinks.push(reveal);
        }
        fire(&self.queue, &mut sinks);
    }

    fn record_reveals(&mut self, now: Instant) {
        for (_, reveal) in &self.reveals {
            if reveal.is_revealed() {
                self.revealed_at.entry(reveal.block()).or_insert(now);
            }
        }
    }

    pub fn on_key(&mut self, key: KeyEvent) {
        if self.dropdown.is_open() {
            match key.code {
                KeyCode::Up | KeyCode::Char('k') => {
                    dispatch_mvi!(self, dropdown, DropdownReducer, DropdownIntent::MoveUp);
                }
                KeyCode::Down | KeyCode::Char('j') => {
                    dispatch_mvi!(self, dropdown, DropdownReducer, DropdownIntent::MoveDown);
                }
                KeyCode::Enter => self.select_highlighted(),
                KeyCode::Esc | KeyCode::Char('p') => {
                    dispatch_mvi!(self, dropdown, DropdownReducer, DropdownIntent::Close);
                }
                _ => {}
            }
            return;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.request_quit(),
            KeyCode::Char('p') => self.toggle_dropdown(),
            KeyCode::Left | KeyCode::Char('h') => self.categories.previous(),
            KeyCode::Right | KeyCode::Char('l') => self.categories.next(),
            KeyCode::Char('[') => self.testimonials.previous(),
            KeyCode::Char(']') => self.testimonials.next(),
            KeyCode::Char(c @ '1'..='9') => {
                let index = c as usize - '1' as usize;
                self.categories.go_to(index);
            }
            KeyCode::Up | KeyCode::Char('k') => self.scroll_by(-1),
            KeyCode::Down | KeyCode::Char('j') => self.scroll_by(1),
            KeyCode::PageUp => self.scroll_by(-(self.body_height() as i32)),
            KeyCode::PageDown => self.scroll_by(self.body_height() as i32),
            KeyCode::Home => self.scroll_to(0),
            KeyCode::End => self.scroll_to(self.max_scroll()),
            _ => {}
        }
    }

    pub fn on_mouse(&mut self, mouse: MouseEvent) {
        match mouse.kind {
            MouseEventKind::ScrollUp => self.scroll_by(-3),
            MouseEventKind::ScrollDown => self.scroll_by(3),
            MouseEventKind::Moved => {
                let hovering = self
                    .categories_track_rect()
                    .is_some_and(|track| contains(track, mouse.column, mouse.row));
                self.categories.set_paused(hovering);
            }
            MouseEventKind::Down(MouseButton::Left) => self.on_click(mouse.column, mouse.row),
            _ => {}
        }
    }

    fn on_click(&mut self, column: u16, row: u16) {
        let Some(screen) = self.screen() else {
            return;
        };
        let (header, _, _) = layout_regions(screen);
        if self.dropdown.is_open() {
            let menu = dropdown_rect(header, screen, self.categories.state().len());
            if contains(menu, column, row) {
                let entry = usize::from(row.saturating_sub(menu.y + 1));
                if entry < self.categories.state().len() {
                    self.jump_to_category(entry);
                }
                dispatch_mvi!(self, dropdown, DropdownReducer, DropdownIntent::Select);
            } else {
                dispatch_mvi!(
                    self,
                    dropdown,
                    DropdownReducer,
                    DropdownIntent::ClickOutside
                );
            }
            return;
        }
        if contains(header, column, row) && column >= header.x + PRODUCTS_LABEL_X {
            self.toggle_dropdown();
        }
    }

    fn toggle_dropdown(&mut self) {
        let entries = self.categories.state().len();
        dispatch_mvi!(
            self,
            dropdown,
            DropdownReducer,
            DropdownIntent::Toggle { entries }
        );
    }

    fn select_highlighted(&mut self) {
        if let Some(index) = self.dropdown.highlighted() {
            self.jump_to_category(index);
        }
        dispatch_mvi!(self, dropdown, DropdownReducer, DropdownIntent::Select);
    }

    /// Scrolls the categories section into view and moves the carousel.
    fn jump_to_category(&mut self, index: usize) {
        if let Some((_, extent)) = home::section_extents()
            .into_iter()
            .find(|(spec, _)| spec.section == Section::Categories)
        {
            self.scroll_to(extent.top);
        }
        self.categories.go_to(index);
    }

    fn screen(&self) -> Option<Rect> {
        self.size.map(|(width, height)| Rect {
            x: 0,
            y: 0,
            width,
            height,
        })
    }

    fn body_height(&self) -> u16 {
        self.screen()
            .map(|screen| layout_regions(screen).1.height)
            .unwrap_or(0)
    }

    fn max_scroll(&self) -> u16 {
        home::document_height().saturating_sub(self.body_height())
    }

    /// Where a section currently sits on screen.
    pub fn placed(&self, section: Section) -> Option<(SectionSpec, Placed)> {
        let screen = self.screen()?;
        let body = layout_regions(screen).1;
        home::section_extents()
            .into_iter()
            .find(|(spec, _)| spec.section == section)
            .and_then(|(spec, extent)| {
                place_section(body, self.scroll, extent).map(|placed| (spec, placed))
            })
    }

    fn categories_track_rect(&self) -> Option<Rect> {
        self.placed(Section::Categories)
            .map(|(_, placed)| categories_track(placed.area))
    }

    fn scroll_by(&mut self, delta: i32) {
        let target = (i32::from(self.scroll) + delta).clamp(0, i32::from(self.max_scroll()));
        self.scroll_to(target as u16);
    }

    fn scroll_to(&mut self, scroll: u16) {
        self.scroll = scroll.min(self.max_scroll());
        self.sync_viewport();
    }

    /// Push the viewport to the observer and deliver intersection changes.
    fn sync_viewport(&mut self) {
        self.observer.set_viewport(self.scroll, self.body_height());
        for (block, intersecting) in self.observer.poll() {
            if let Some((_, reveal)) = self.reveals.iter_mut().find(|(_, r)| r.block() == block) {
                reveal.on_intersect(intersecting);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn category(slug: &str) -> Category {
        Category {
            slug: slug.to_string(),
            name: slug.to_uppercase(),
            description: String::new(),
            icon: String::new(),
            accent_color: "#FFC510".to_string(),
        }
    }

    fn app(count: usize) -> App {
        let categories = (0..count).map(|i| category(&format!("c{i}"))).collect();
        App::new(PreviewSettings::default(), TimerQueue::manual(), categories)
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn narrow_terminal_shows_one_card() {
        let mut app = app(5);
        app.on_resize(60, 30);
        assert_eq!(app.categories().items_per_view(), 1);
        app.on_resize(120, 30);
        assert_eq!(app.categories().items_per_view(), 3);
    }

    #[test]
    fn arrows_navigate_carousel() {
        let mut app = app(5);
        app.on_resize(120, 40);
        app.on_key(key(KeyCode::Right));
        assert_eq!(app.categories().current_index(), 1);
        app.on_key(key(KeyCode::Char('h')));
        assert_eq!(app.categories().current_index(), 0);
        app.on_key(key(KeyCode::Char('3')));
        assert_eq!(app.categories().current_index(), 2);
    }

    #[test]
    fn dropdown_selection_jumps_carousel() {
        let mut app = app(5);
        app.on_resize(60, 40);
        app.on_key(key(KeyCode::Char('p')));
        assert!(app.dropdown().is_open());
        app.on_key(key(KeyCode::Down));
        app.on_key(key(KeyCode::Down));
        app.on_key(key(KeyCode::Enter));
        assert!(!app.dropdown().is_open());
        assert_eq!(app.categories().current_index(), 2);
    }

    #[test]
    fn dropdown_keys_wrap_and_close() {
        let mut app = app(3);
        app.on_resize(60, 40);
        app.on_key(key(KeyCode::Char('p')));
        app.on_key(key(KeyCode::Up));
        assert_eq!(app.dropdown().highlighted(), Some(2));
        app.on_key(key(KeyCode::Char('j')));
        assert_eq!(app.dropdown().highlighted(), Some(0));

        app.on_key(key(KeyCode::Esc));
        assert!(!app.dropdown().is_open());
        assert_eq!(app.categories().current_index(), 0);
    }

    #[test]
    fn visible_sections_reveal_after_delay() {
        let mut app = app(3);
        app.on_resize(100, 40);
        let hero = app.reveal_style(Section::Hero, Instant::now());
        assert_eq!(hero.opacity, 0.0);

        let now = Instant::now();
        app.advance(Duration::from_millis(200), now);
        let style = app.reveal_style(Section::Hero, now + Duration::from_secs(5));
        assert!(style.is_settled());
    }

    #[test]
    fn offscreen_sections_stay_hidden_until_scrolled() {
        let mut app = app(3);
        app.on_resize(100, 12);
        app.advance(Duration::from_millis(500), Instant::now());
        let later = Instant::now() + Duration::from_secs(5);
        assert!(!app.reveal_style(Section::CallToAction, later).is_settled());

        app.on_key(key(KeyCode::End));
        let now = Instant::now();
        app.advance(Duration::from_millis(500), now);
        assert!(app
            .reveal_style(Section::CallToAction, now + Duration::from_secs(5))
            .is_settled());
    }

    #[test]
    fn testimonials_rotate_and_hold_after_manual_step() {
        let mut app = app(5);
        app.on_resize(120, 40);
        let interval = app.settings.testimonials.interval;

        app.advance(interval, Instant::now());
        assert_eq!(app.testimonials().current_index(), 1);

        app.on_key(key(KeyCode::Char(']')));
        assert_eq!(app.testimonials().current_index(), 2);
        app.advance(interval, Instant::now());
        assert_eq!(app.testimonials().current_index(), 2);
        app.advance(interval, Instant::now());
        assert_eq!(app.testimonials().current_index(), 0);
    }

    #[test]
    fn q_quits() {
        let mut app = app(0);
        app.on_key(key(KeyCode::Char('q')));
        assert!(app.should_quit());
    }
}
