mod common;

use std::time::{Duration, Instant};

use buildchem::content::seed;
use buildchem::schedule::TimerQueue;
use buildchem::ui::app::{App, PreviewSettings};
use buildchem::ui::home::{Section, HERO_TITLE};
use buildchem::ui::render;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::backend::TestBackend;
use ratatui::Terminal;

const COLS: u16 = 120;
const ROWS: u16 = 40;

fn preview_app() -> App {
    let mut app = App::new(
        PreviewSettings::default(),
        TimerQueue::manual(),
        seed::demo_categories(),
    );
    app.on_resize(COLS, ROWS);
    app
}

fn screen(app: &App, now: Instant) -> String {
    let mut terminal = Terminal::new(TestBackend::new(COLS, ROWS)).unwrap();
    terminal
        .draw(|frame| render::draw(frame, app, now))
        .unwrap();
    terminal
        .backend()
        .buffer()
        .content
        .iter()
        .map(|cell| cell.symbol())
        .collect()
}

#[test]
fn header_is_drawn_before_anything_reveals() {
    let app = preview_app();
    let text = screen(&app, Instant::now());
    assert!(text.contains("BuildChem Pro"));
    assert!(!text.contains("Our Product Categories"));
}

#[test]
fn visible_sections_reveal_after_their_delay() {
    let mut app = preview_app();
    let now = Instant::now();
    app.advance(Duration::from_millis(200), now);

    let text = screen(&app, now + Duration::from_secs(2));
    assert!(text.contains(&HERO_TITLE[..20]));
    assert!(text.contains("Our Product Categories"));
    assert!(text.contains("Adhesive Solutions"));
    assert!(text.contains("1 / 2"));
}

#[test]
fn offscreen_sections_stay_hidden() {
    let mut app = preview_app();
    let now = Instant::now();
    app.advance(Duration::from_secs(1), now);
    assert!(!app.reveal_style(Section::CallToAction, now).is_settled());

    let text = screen(&app, now + Duration::from_secs(2));
    assert!(!text.contains("Ready to start your project?"));
}

#[test]
fn products_dropdown_lists_categories() {
    let mut app = preview_app();
    app.on_key(KeyEvent::new(KeyCode::Char('p'), KeyModifiers::NONE));
    assert!(app.dropdown().is_open());

    let text = screen(&app, Instant::now());
    assert!(text.contains("Products"));
    assert!(text.contains("Roofing Solutions"));
}

#[test]
fn autoplay_moves_the_category_window() {
    let mut app = preview_app();
    let now = Instant::now();
    assert_eq!(app.categories_view().max_index, 1);

    app.advance(Duration::from_millis(4000), now);
    assert_eq!(app.categories().current_index(), 1);
    app.advance(Duration::from_millis(4000), now);
    assert_eq!(app.categories().current_index(), 0);
}
