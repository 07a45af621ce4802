mod common;

use std::sync::Arc;
use std::time::Duration;

use buildchem::schedule::{TimerQueue, TimerSink};
use buildchem::ui::carousel::{
    Breakpoints, CarouselController, CarouselPhase, CarouselView, TimerRole,
};
use common::{carousel, letters, timing};
use parking_lot::Mutex;

fn ms(value: u64) -> Duration {
    Duration::from_millis(value)
}

fn advance(
    queue: &TimerQueue,
    controller: &mut CarouselController<String, TimerQueue>,
    by_ms: u64,
) {
    queue.advance(ms(by_ms), &mut [controller]);
}

#[test]
fn autoplay_walks_the_window_then_wraps() {
    let (queue, mut c) = carousel("ABCDE", 3);
    assert_eq!(c.phase(), CarouselPhase::Carousel);
    assert_eq!(c.view().max_index, 2);
    assert_eq!(c.current_index(), 0);

    advance(&queue, &mut c, 4000);
    assert_eq!(c.current_index(), 1);
    advance(&queue, &mut c, 4000);
    assert_eq!(c.current_index(), 2);
    advance(&queue, &mut c, 4000);
    assert_eq!(c.current_index(), 0);
}

#[test]
fn nothing_moves_before_the_interval() {
    let (queue, mut c) = carousel("ABCDE", 3);
    advance(&queue, &mut c, 3999);
    assert_eq!(c.current_index(), 0);
    advance(&queue, &mut c, 1);
    assert_eq!(c.current_index(), 1);
}

#[test]
fn go_to_holds_autoplay_for_the_resume_delay() {
    let (queue, mut c) = carousel("ABCDE", 3);
    advance(&queue, &mut c, 2000);

    c.go_to(1);
    assert_eq!(c.current_index(), 1);
    assert!(matches!(c.active_timer(), Some((_, TimerRole::Resume))));

    // The autoplay deadline at 4000 was cancelled.
    advance(&queue, &mut c, 2000);
    assert_eq!(c.current_index(), 1);

    // Resume fires at 7000 and only re-arms autoplay.
    advance(&queue, &mut c, 3000);
    assert_eq!(c.current_index(), 1);
    assert!(matches!(c.active_timer(), Some((_, TimerRole::Autoplay))));

    advance(&queue, &mut c, 3999);
    assert_eq!(c.current_index(), 1);
    advance(&queue, &mut c, 1);
    assert_eq!(c.current_index(), 2);
}

#[test]
fn later_navigation_supersedes_the_pending_resume() {
    let (queue, mut c) = carousel("ABCDE", 3);
    c.go_to(1);
    advance(&queue, &mut c, 3000);
    c.go_to(2);
    assert_eq!(queue.pending(), 1);

    // The first resume would have fired at 5000.
    advance(&queue, &mut c, 2000);
    assert!(matches!(c.active_timer(), Some((_, TimerRole::Resume))));

    advance(&queue, &mut c, 3000);
    assert!(matches!(c.active_timer(), Some((_, TimerRole::Autoplay))));
    advance(&queue, &mut c, 4000);
    assert_eq!(c.current_index(), 0);
}

#[test]
fn stale_timer_id_is_ignored() {
    let (queue, mut c) = carousel("ABCDE", 3);
    let (old, _) = c.active_timer().unwrap();
    c.go_to(2);
    c.on_timer(old);
    assert_eq!(c.current_index(), 2);
    assert!(matches!(c.active_timer(), Some((_, TimerRole::Resume))));
    assert!(!queue.is_pending(old));
}

#[test]
fn arrows_clamp_at_the_edges() {
    let (_queue, mut c) = carousel("ABCDE", 3);
    c.previous();
    assert_eq!(c.current_index(), 0);
    assert!(!c.view().previous_enabled);

    c.next();
    c.next();
    c.next();
    assert_eq!(c.current_index(), 2);
    assert!(!c.view().next_enabled);
    assert!(c.view().previous_enabled);
}

#[test]
fn go_to_past_the_end_clamps() {
    let (_queue, mut c) = carousel("ABCDE", 3);
    c.go_to(99);
    assert_eq!(c.current_index(), 2);
}

#[test]
fn paused_ticks_do_not_move_and_keep_the_schedule() {
    let (queue, mut c) = carousel("ABCDE", 3);
    c.set_paused(true);
    advance(&queue, &mut c, 8000);
    assert_eq!(c.current_index(), 0);
    assert!(matches!(c.active_timer(), Some((_, TimerRole::Autoplay))));

    c.set_paused(false);
    advance(&queue, &mut c, 4000);
    assert_eq!(c.current_index(), 1);
}

#[test]
fn unpausing_does_not_restart_the_interval() {
    let (queue, mut c) = carousel("ABCDE", 3);
    advance(&queue, &mut c, 3000);
    c.set_paused(true);
    c.set_paused(false);
    advance(&queue, &mut c, 1000);
    assert_eq!(c.current_index(), 1);
}

#[test]
fn shrinking_the_window_reclamps_the_index() {
    let (_queue, mut c) = carousel("ABCDEFGHIJ", 1);
    c.go_to(9);
    assert_eq!(c.current_index(), 9);

    c.set_items_per_view(3);
    assert_eq!(c.view().max_index, 7);
    assert_eq!(c.current_index(), 7);
}

#[test]
fn page_count_change_restarts_autoplay() {
    let (queue, mut c) = carousel("ABCDE", 3);
    advance(&queue, &mut c, 3000);
    let (before, _) = c.active_timer().unwrap();

    c.set_items_per_view(2);
    let (after, role) = c.active_timer().unwrap();
    assert_ne!(before, after);
    assert_eq!(role, TimerRole::Autoplay);
    assert_eq!(queue.pending(), 1);

    advance(&queue, &mut c, 1000);
    assert_eq!(c.current_index(), 0);
    advance(&queue, &mut c, 3000);
    assert_eq!(c.current_index(), 1);
}

#[test]
fn viewport_width_picks_items_per_view() {
    let (_queue, mut c) = carousel("ABCDE", 1);
    c.set_viewport_width(700);
    assert_eq!(c.view().items_per_view, 2);
    c.set_viewport_width(1280);
    assert_eq!(c.view().items_per_view, 3);
    c.set_viewport_width(320);
    assert_eq!(c.view().items_per_view, 1);
}

#[test]
fn growing_into_static_cancels_the_timer() {
    let (queue, mut c) = carousel("ABCDE", 3);
    c.go_to(2);
    c.set_items_per_view(5);
    assert_eq!(c.phase(), CarouselPhase::Static);
    assert_eq!(c.current_index(), 0);
    assert!(c.active_timer().is_none());
    assert_eq!(queue.pending(), 0);
}

#[test]
fn empty_collection_has_no_timer() {
    let (queue, mut c) = carousel("", 3);
    assert_eq!(c.phase(), CarouselPhase::Empty);
    assert!(c.active_timer().is_none());
    assert_eq!(queue.pending(), 0);

    c.go_to(2);
    c.tick();
    c.next();
    assert_eq!(c.current_index(), 0);
    assert_eq!(queue.pending(), 0);
}

#[test]
fn static_collection_shows_everything_without_controls() {
    let (queue, mut c) = carousel("AB", 3);
    assert_eq!(c.phase(), CarouselPhase::Static);
    assert_eq!(c.state().visible_items(), letters("AB").as_slice());

    let view = c.view();
    assert!(!view.show_controls);
    assert!(view.dots.is_empty());
    assert!(view.position_label.is_none());
    assert!(c.active_timer().is_none());

    c.go_to(1);
    assert_eq!(c.current_index(), 0);
    assert_eq!(queue.pending(), 0);
}

#[test]
fn loading_until_items_arrive() {
    let queue = TimerQueue::manual();
    let mut c: CarouselController<String, _> =
        CarouselController::new(queue.clone(), timing(4000, 5000), Breakpoints::default());
    assert_eq!(c.phase(), CarouselPhase::Loading);
    c.tick();
    assert_eq!(queue.pending(), 0);

    c.set_items_per_view(2);
    c.set_items(letters("ABC"));
    assert_eq!(c.phase(), CarouselPhase::Carousel);
    assert_eq!(queue.pending(), 1);
}

#[test]
fn reload_resets_to_the_start() {
    let (_queue, mut c) = carousel("ABCDE", 3);
    c.go_to(2);
    c.set_items(letters("VWXYZ"));
    assert_eq!(c.current_index(), 0);
}

#[test]
fn index_stays_in_bounds_across_mixed_events() {
    let (queue, mut c) = carousel("ABCDEFG", 2);
    for step in 0..200u64 {
        match step % 7 {
            0 => c.next(),
            1 => advance(&queue, &mut c, 2500),
            2 => c.set_items_per_view((step % 5) as usize + 1),
            3 => c.go_to((step * 3) as usize),
            4 => c.set_paused(step % 2 == 0),
            5 => c.previous(),
            _ => advance(&queue, &mut c, 5000),
        }
        let view = c.view();
        assert!(
            view.current_index <= view.max_index,
            "step {step}: {view:?}"
        );
        assert!(queue.pending() <= 1);
    }
}

#[test]
fn subscribers_see_each_change() {
    let (queue, mut c) = carousel("ABCDE", 3);
    let seen: Arc<Mutex<Vec<CarouselView>>> = Arc::default();
    let sink = seen.clone();
    c.subscribe(move |view| sink.lock().push(view.clone()));

    advance(&queue, &mut c, 4000);
    c.set_paused(true);
    c.set_paused(true);

    let seen = seen.lock();
    assert_eq!(seen.len(), 2);
    assert_eq!(seen[0].current_index, 1);
    assert!(seen[1].paused);
}

#[test]
fn teardown_cancels_and_ignores_later_events() {
    let (queue, mut c) = carousel("ABCDE", 3);
    let seen = Arc::new(Mutex::new(0usize));
    let counter = seen.clone();
    c.subscribe(move |_| *counter.lock() += 1);

    c.teardown();
    assert!(c.is_torn_down());
    assert_eq!(queue.pending(), 0);

    c.go_to(2);
    c.tick();
    advance(&queue, &mut c, 10_000);
    assert_eq!(c.current_index(), 0);
    assert_eq!(*seen.lock(), 0);
}

#[test]
fn dropping_the_controller_cancels_its_timer() {
    let (queue, c) = carousel("ABCDE", 3);
    assert_eq!(queue.pending(), 1);
    drop(c);
    assert_eq!(queue.pending(), 0);
}

#[test]
fn two_carousels_share_one_queue() {
    let queue = TimerQueue::manual();
    let mut fast =
        CarouselController::new(queue.clone(), timing(1000, 2000), Breakpoints::default());
    let mut slow =
        CarouselController::new(queue.clone(), timing(3000, 3000), Breakpoints::default());
    fast.set_items(letters("ABC"));
    slow.set_items(letters("ABC"));

    queue.advance(ms(3000), &mut [&mut fast, &mut slow]);
    assert_eq!(fast.current_index(), 0);
    assert_eq!(slow.current_index(), 1);
}
