use super::*;
use crate::gesture::InputChannel::{Mouse, Touch};
use std::time::{Duration, Instant};

const WIDTH: f32 = 1000.0;

fn t0() -> Instant {
    Instant::now()
}

#[test]
fn swipe_past_threshold_commits_after_the_animation_window() {
    let start = t0();
    let mut ctrl = TransitionController::new();

    ctrl.on_gesture_start(Touch, 300.0);
    ctrl.on_gesture_move(Touch, 150.0);
    ctrl.on_gesture_end(Touch, start);

    assert!(ctrl.is_animating());
    assert_eq!(ctrl.screen(), Screen::Welcome);

    assert_eq!(ctrl.tick(start + Duration::from_millis(499)), None);
    assert_eq!(ctrl.screen(), Screen::Welcome);

    assert_eq!(
        ctrl.tick(start + Duration::from_millis(500)),
        Some(Screen::Payment)
    );
    assert_eq!(ctrl.screen(), Screen::Payment);
    assert!(!ctrl.is_animating());
    assert!(ctrl
        .transform(start + Duration::from_millis(500), WIDTH)
        .is_identity());
}

#[test]
fn swipe_short_of_threshold_snaps_back_with_no_state_change() {
    let start = t0();
    let mut ctrl = TransitionController::new();

    ctrl.on_gesture_start(Touch, 300.0);
    ctrl.on_gesture_move(Touch, 250.0);
    ctrl.on_gesture_end(Touch, start);

    assert!(!ctrl.is_animating());
    assert_eq!(ctrl.screen(), Screen::Welcome);
    // Reset is synchronous; no animation window applies.
    assert!(ctrl.transform(start, WIDTH).is_identity());
    assert_eq!(ctrl.tick(start + Duration::from_secs(1)), None);
    assert_eq!(ctrl.screen(), Screen::Welcome);
}

#[test]
fn drag_exactly_at_threshold_does_not_commit() {
    let start = t0();
    let mut ctrl = TransitionController::new();

    ctrl.on_gesture_start(Mouse, 300.0);
    ctrl.on_gesture_move(Mouse, 200.0);
    ctrl.on_gesture_end(Mouse, start);

    assert!(!ctrl.is_animating());
    assert_eq!(ctrl.screen(), Screen::Welcome);
}

#[test]
fn preview_translate_is_clamped_and_opacity_floored() {
    let mut ctrl = TransitionController::new();
    let now = t0();

    ctrl.on_gesture_start(Touch, 300.0);
    ctrl.on_gesture_move(Touch, 250.0);
    let preview = ctrl.transform(now, WIDTH);
    assert_eq!(preview.offset_x, -50.0);
    assert_eq!(preview.opacity, 0.75);

    ctrl.on_gesture_move(Touch, 100.0);
    let preview = ctrl.transform(now, WIDTH);
    assert_eq!(preview.offset_x, -PREVIEW_MAX_TRANSLATE_PX);
    assert_eq!(preview.opacity, PREVIEW_MIN_OPACITY);
}

#[test]
fn rightward_drag_never_shows_a_preview() {
    let mut ctrl = TransitionController::new();
    let now = t0();

    ctrl.on_gesture_start(Touch, 300.0);
    ctrl.on_gesture_move(Touch, 420.0);
    assert!(ctrl.transform(now, WIDTH).is_identity());

    ctrl.on_gesture_end(Touch, now);
    assert!(!ctrl.is_animating());
    assert_eq!(ctrl.screen(), Screen::Welcome);
}

#[test]
fn advance_and_key_calls_mid_animation_are_no_ops() {
    let start = t0();
    let mut ctrl = TransitionController::new();

    ctrl.advance(start);
    assert!(ctrl.is_animating());

    // A second trigger mid-animation must not restart or queue a transition.
    ctrl.advance(start + Duration::from_millis(100));
    ctrl.on_key(NavKey::Forward, start + Duration::from_millis(200));
    ctrl.on_key(NavKey::Back, start + Duration::from_millis(200));

    assert_eq!(
        ctrl.tick(start + Duration::from_millis(500)),
        Some(Screen::Payment)
    );
    // Exactly one transition: nothing further is pending.
    assert_eq!(ctrl.tick(start + Duration::from_secs(2)), None);
    assert_eq!(ctrl.screen(), Screen::Payment);
}

#[test]
fn gesture_starts_mid_animation_are_ignored() {
    let start = t0();
    let mut ctrl = TransitionController::new();

    ctrl.advance(start);
    ctrl.on_gesture_start(Touch, 300.0);
    assert!(!ctrl.has_active_gesture());
}

#[test]
fn right_arrow_on_welcome_advances_like_a_swipe() {
    let start = t0();
    let mut ctrl = TransitionController::new();

    ctrl.on_key(NavKey::Forward, start);
    assert!(ctrl.is_animating());
    assert_eq!(
        ctrl.tick(start + TRANSITION_DURATION),
        Some(Screen::Payment)
    );
}

#[test]
fn back_from_payment_returns_to_welcome_after_the_window() {
    let start = t0();
    let mut ctrl = TransitionController::new();

    ctrl.advance(start);
    ctrl.tick(start + TRANSITION_DURATION);
    assert_eq!(ctrl.screen(), Screen::Payment);

    let back_at = start + Duration::from_secs(2);
    ctrl.back(back_at);
    assert!(ctrl.is_animating());
    assert_eq!(ctrl.tick(back_at + Duration::from_millis(499)), None);
    assert_eq!(
        ctrl.tick(back_at + Duration::from_millis(500)),
        Some(Screen::Welcome)
    );
}

#[test]
fn back_and_left_arrow_are_no_ops_on_welcome() {
    let start = t0();
    let mut ctrl = TransitionController::new();

    ctrl.back(start);
    ctrl.on_key(NavKey::Back, start);
    assert!(!ctrl.is_animating());
    assert_eq!(ctrl.screen(), Screen::Welcome);
}

#[test]
fn advance_is_a_no_op_on_the_payment_screen() {
    let start = t0();
    let mut ctrl = TransitionController::new();

    ctrl.advance(start);
    ctrl.tick(start + TRANSITION_DURATION);
    assert_eq!(ctrl.screen(), Screen::Payment);

    ctrl.advance(start + Duration::from_secs(1));
    assert!(!ctrl.is_animating());
}

#[test]
fn a_session_is_owned_by_the_channel_that_started_it() {
    let start = t0();
    let mut ctrl = TransitionController::new();

    ctrl.on_gesture_start(Touch, 300.0);
    // The mouse channel can neither move nor end a touch-owned session.
    ctrl.on_gesture_move(Mouse, 100.0);
    ctrl.on_gesture_end(Mouse, start);
    assert!(ctrl.has_active_gesture());
    assert!(ctrl.transform(start, WIDTH).is_identity());

    // The owner releases without having moved: no transition.
    ctrl.on_gesture_end(Touch, start);
    assert!(!ctrl.has_active_gesture());
    assert!(!ctrl.is_animating());
}

#[test]
fn a_new_start_from_the_owner_supersedes_the_session() {
    let mut ctrl = TransitionController::new();
    let now = t0();

    ctrl.on_gesture_start(Touch, 300.0);
    ctrl.on_gesture_move(Touch, 250.0);
    ctrl.on_gesture_start(Touch, 400.0);
    // The superseding session starts with zero drag.
    assert!(ctrl.transform(now, WIDTH).is_identity());
}

#[test]
fn gesture_cancel_resets_without_committing() {
    let start = t0();
    let mut ctrl = TransitionController::new();

    ctrl.on_gesture_start(Touch, 300.0);
    ctrl.on_gesture_move(Touch, 100.0);
    ctrl.on_gesture_cancel(Touch);

    assert!(!ctrl.has_active_gesture());
    assert!(!ctrl.is_animating());
    assert!(ctrl.transform(start, WIDTH).is_identity());
}

#[test]
fn animation_transform_moves_outward_and_fades() {
    let start = t0();
    let mut ctrl = TransitionController::new();
    ctrl.advance(start);

    let halfway = ctrl.transform(start + Duration::from_millis(250), WIDTH);
    assert!(halfway.offset_x < 0.0 && halfway.offset_x > -WIDTH);
    assert!(halfway.opacity > 0.0 && halfway.opacity < 1.0);

    let done = ctrl.transform(start + TRANSITION_DURATION, WIDTH);
    assert_eq!(done.offset_x, -WIDTH);
    assert_eq!(done.opacity, 0.0);

    ctrl.tick(start + TRANSITION_DURATION);
    let back_at = start + Duration::from_secs(1);
    ctrl.back(back_at);
    let halfway = ctrl.transform(back_at + Duration::from_millis(250), WIDTH);
    assert!(halfway.offset_x > 0.0 && halfway.offset_x < WIDTH);
}
