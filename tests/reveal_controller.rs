mod common;

use std::sync::Arc;
use std::time::Duration;

use buildchem::schedule::TimerQueue;
use buildchem::ui::reveal::{
    BlockId, RevealController, RevealDirection, RevealMotion, RevealState, UnavailableObserver,
    DEFAULT_THRESHOLD,
};
use common::{ObserverCall, RecordingObserver};
use parking_lot::Mutex;

const BLOCK: BlockId = BlockId(7);

fn reveal(
    delay_ms: u64,
) -> (
    TimerQueue,
    RecordingObserver,
    RevealController<TimerQueue, RecordingObserver>,
) {
    let queue = TimerQueue::manual();
    let observer = RecordingObserver::default();
    let controller = RevealController::new(
        BLOCK,
        RevealDirection::Up,
        Duration::from_millis(delay_ms),
        queue.clone(),
        observer.clone(),
    );
    (queue, observer, controller)
}

#[test]
fn reveals_after_intersection_and_delay() {
    let (queue, observer, mut c) = reveal(150);
    c.observe(0.1);
    assert_eq!(c.state(), RevealState::Observing);
    assert_eq!(observer.calls(), vec![ObserverCall::Observe(BLOCK, 0.1)]);

    c.on_intersect(true);
    assert_eq!(c.state(), RevealState::Triggered);
    assert!(c.pending_timer().is_some());

    queue.advance(Duration::from_millis(149), &mut [&mut c]);
    assert!(!c.is_revealed());
    queue.advance(Duration::from_millis(1), &mut [&mut c]);
    assert!(c.is_revealed());
    assert!(c.pending_timer().is_none());
}

#[test]
fn zero_delay_still_waits_for_the_scheduler() {
    let (queue, _observer, mut c) = reveal(0);
    c.observe(0.1);
    c.on_intersect(true);
    assert_eq!(c.state(), RevealState::Triggered);

    queue.advance(Duration::ZERO, &mut [&mut c]);
    assert!(c.is_revealed());
}

#[test]
fn block_is_unobserved_once_triggered() {
    let (queue, observer, mut c) = reveal(100);
    c.observe(0.2);
    c.on_intersect(true);
    assert_eq!(
        observer.calls(),
        vec![
            ObserverCall::Observe(BLOCK, 0.2),
            ObserverCall::Unobserve(BLOCK),
        ]
    );

    // Further callbacks neither re-arm nor unobserve again.
    c.on_intersect(false);
    c.on_intersect(true);
    assert_eq!(observer.calls().len(), 2);
    assert_eq!(queue.pending(), 1);
}

#[test]
fn leaving_view_before_trigger_keeps_observing() {
    let (queue, observer, mut c) = reveal(0);
    c.observe(0.1);
    c.on_intersect(false);
    assert_eq!(c.state(), RevealState::Observing);
    assert_eq!(queue.pending(), 0);
    assert_eq!(observer.calls().len(), 1);
}

#[test]
fn revealed_never_reverts() {
    let (queue, _observer, mut c) = reveal(0);
    c.observe(0.1);
    c.on_intersect(true);
    queue.advance(Duration::ZERO, &mut [&mut c]);

    c.on_intersect(false);
    c.observe(0.5);
    c.on_intersect(true);
    queue.advance(Duration::from_secs(10), &mut [&mut c]);
    assert!(c.is_revealed());
    assert_eq!(queue.pending(), 0);
}

#[test]
fn missing_observer_reveals_immediately() {
    let queue = TimerQueue::manual();
    let mut c = RevealController::new(
        BLOCK,
        RevealDirection::Scale,
        Duration::from_millis(300),
        queue.clone(),
        UnavailableObserver,
    );
    c.observe(DEFAULT_THRESHOLD);
    assert!(c.is_revealed());
    assert_eq!(queue.pending(), 0);
}

#[test]
fn unmounted_block_is_left_alone() {
    let (queue, observer, mut c) = reveal(0);
    observer.forget(BLOCK);
    c.observe(0.1);
    assert_eq!(c.state(), RevealState::Idle);
    assert!(observer.calls().is_empty());
    assert_eq!(queue.pending(), 0);
}

#[test]
fn threshold_is_clamped() {
    let (_queue, observer, mut c) = reveal(0);
    c.observe(4.0);
    assert_eq!(observer.calls(), vec![ObserverCall::Observe(BLOCK, 1.0)]);

    let (_queue, observer, mut c) = reveal(0);
    c.observe(f32::NAN);
    assert_eq!(
        observer.calls(),
        vec![ObserverCall::Observe(BLOCK, DEFAULT_THRESHOLD)]
    );
}

#[test]
fn teardown_while_observing_unobserves() {
    let (_queue, observer, mut c) = reveal(100);
    c.observe(0.1);
    c.teardown();
    assert!(c.is_torn_down());
    assert_eq!(
        observer.calls().last(),
        Some(&ObserverCall::Unobserve(BLOCK))
    );

    c.on_intersect(true);
    assert_eq!(c.state(), RevealState::Observing);
}

#[test]
fn teardown_cancels_the_pending_delay() {
    let (queue, _observer, mut c) = reveal(100);
    c.observe(0.1);
    c.on_intersect(true);
    c.teardown();
    assert_eq!(queue.pending(), 0);

    queue.advance(Duration::from_secs(1), &mut [&mut c]);
    assert!(!c.is_revealed());
}

#[test]
fn drop_cleans_up() {
    let (queue, observer, mut c) = reveal(100);
    c.observe(0.1);
    drop(c);
    assert_eq!(queue.pending(), 0);
    assert_eq!(
        observer.calls().last(),
        Some(&ObserverCall::Unobserve(BLOCK))
    );
}

#[test]
fn subscribers_follow_state_changes() {
    let (queue, _observer, mut c) = reveal(50);
    let seen: Arc<Mutex<Vec<RevealState>>> = Arc::default();
    let sink = seen.clone();
    c.subscribe(move |state| sink.lock().push(*state));

    c.observe(0.1);
    c.on_intersect(false);
    c.on_intersect(true);
    queue.advance(Duration::from_millis(50), &mut [&mut c]);

    assert_eq!(
        *seen.lock(),
        vec![
            RevealState::Observing,
            RevealState::Triggered,
            RevealState::Revealed,
        ]
    );
}

#[test]
fn style_is_hidden_then_eases_in() {
    let (queue, _observer, mut c) = reveal(0);
    let motion = RevealMotion::default();
    let hidden = c.style(&motion, Duration::from_secs(5));
    assert_eq!(hidden.opacity, 0.0);
    assert_eq!(hidden.transform.to_css(), "translateY(30px)");

    c.observe(0.1);
    c.on_intersect(true);
    queue.advance(Duration::ZERO, &mut [&mut c]);

    let midway = c.style(&motion, Duration::from_millis(350));
    assert!(midway.opacity > 0.5 && midway.opacity < 1.0);
    assert!(c.style(&motion, motion.duration).is_settled());
}

#[test]
fn staggered_blocks_reveal_in_delay_order() {
    let queue = TimerQueue::manual();
    let observer = RecordingObserver::default();
    let mut first = RevealController::new(
        BlockId(1),
        RevealDirection::Left,
        Duration::ZERO,
        queue.clone(),
        observer.clone(),
    );
    let mut second = RevealController::new(
        BlockId(2),
        RevealDirection::Right,
        Duration::from_millis(100),
        queue.clone(),
        observer.clone(),
    );
    first.observe(0.1);
    second.observe(0.1);
    first.on_intersect(true);
    second.on_intersect(true);

    queue.advance(Duration::from_millis(50), &mut [&mut first, &mut second]);
    assert!(first.is_revealed());
    assert!(!second.is_revealed());

    queue.advance(Duration::from_millis(50), &mut [&mut first, &mut second]);
    assert!(second.is_revealed());
}
