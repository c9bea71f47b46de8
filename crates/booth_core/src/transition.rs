//! The screen-transition controller: a small finite-state interaction
//! handler that consumes raw pointer deltas over the welcome view and drives
//! the animated handoff between the welcome and payment screens.

use std::time::{Duration, Instant};

use shared::domain::Screen;
use tracing::debug;

use crate::gesture::{GestureSession, InputChannel};

/// Minimum leftward drag, in pixels, for a release to commit the advance.
pub const SWIPE_COMMIT_THRESHOLD_PX: f32 = 100.0;
/// Duration of the advance/back handoff animation.
pub const TRANSITION_DURATION: Duration = Duration::from_millis(500);
/// The drag preview never translates further than this.
pub const PREVIEW_MAX_TRANSLATE_PX: f32 = 100.0;
/// The drag preview never fades below this opacity.
pub const PREVIEW_MIN_OPACITY: f32 = 0.7;

/// Keyboard navigation commands, already mapped from raw key codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavKey {
    Forward,
    Back,
}

/// Horizontal offset and opacity the renderer applies to the active view
/// this frame. Identity means the view sits untransformed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewTransform {
    pub offset_x: f32,
    pub opacity: f32,
}

impl ViewTransform {
    pub const IDENTITY: Self = Self {
        offset_x: 0.0,
        opacity: 1.0,
    };

    pub fn is_identity(&self) -> bool {
        self.offset_x == 0.0 && self.opacity == 1.0
    }
}

#[derive(Debug, Clone, Copy)]
enum Phase {
    Idle,
    Animating { to: Screen, started_at: Instant },
}

pub struct TransitionController {
    screen: Screen,
    phase: Phase,
    session: Option<GestureSession>,
}

impl Default for TransitionController {
    fn default() -> Self {
        Self::new()
    }
}

impl TransitionController {
    pub fn new() -> Self {
        Self {
            screen: Screen::Welcome,
            phase: Phase::Idle,
            session: None,
        }
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn is_animating(&self) -> bool {
        matches!(self.phase, Phase::Animating { .. })
    }

    pub fn has_active_gesture(&self) -> bool {
        self.session.is_some()
    }

    /// Records the start of a drag. Ignored off the welcome screen, while an
    /// animation is pending, or while another channel owns the session.
    pub fn on_gesture_start(&mut self, channel: InputChannel, x: f32) {
        if self.screen != Screen::Welcome || self.is_animating() {
            return;
        }
        if let Some(session) = &self.session {
            if !session.owns(channel) {
                return;
            }
        }
        self.session = Some(GestureSession::begin(channel, x));
    }

    /// Updates the live drag position. Only the owning channel may move the
    /// session, and only while the welcome screen is idle.
    pub fn on_gesture_move(&mut self, channel: InputChannel, x: f32) {
        if self.screen != Screen::Welcome || self.is_animating() {
            return;
        }
        if let Some(session) = &mut self.session {
            if session.owns(channel) {
                session.move_to(x);
            }
        }
    }

    /// Ends the drag: past the threshold it commits the advance transition,
    /// otherwise the preview snaps back to identity with no state change.
    pub fn on_gesture_end(&mut self, channel: InputChannel, now: Instant) {
        let Some(session) = self.session else {
            return;
        };
        if !session.owns(channel) {
            return;
        }
        self.session = None;
        if self.screen != Screen::Welcome || self.is_animating() {
            return;
        }
        let distance = session.drag_distance();
        if distance > SWIPE_COMMIT_THRESHOLD_PX {
            debug!(distance, "swipe released past threshold; advancing");
            self.begin(Screen::Payment, now);
        } else {
            debug!(distance, "swipe released short of threshold; snapping back");
        }
    }

    /// Aborts the drag without evaluating the threshold (e.g. a touch-cancel
    /// from the platform). The preview resets; no transition occurs.
    pub fn on_gesture_cancel(&mut self, channel: InputChannel) {
        if let Some(session) = &self.session {
            if session.owns(channel) {
                self.session = None;
            }
        }
    }

    /// Direct advance trigger (tap target). Subject to the idle guard.
    pub fn advance(&mut self, now: Instant) {
        if self.screen == Screen::Welcome && !self.is_animating() {
            self.session = None;
            self.begin(Screen::Payment, now);
        }
    }

    /// Returns from the payment screen. Subject to the idle guard.
    pub fn back(&mut self, now: Instant) {
        if self.screen == Screen::Payment && !self.is_animating() {
            self.begin(Screen::Welcome, now);
        }
    }

    pub fn on_key(&mut self, key: NavKey, now: Instant) {
        match key {
            NavKey::Forward => self.advance(now),
            NavKey::Back => self.back(now),
        }
    }

    /// Completes a due animation: flips the screen, resets the transform,
    /// and clears the re-entrancy lock in one step, so no frame can observe
    /// the new screen with a stale transform. Returns the newly committed
    /// screen, if any.
    pub fn tick(&mut self, now: Instant) -> Option<Screen> {
        let Phase::Animating { to, started_at } = self.phase else {
            return None;
        };
        if now.duration_since(started_at) < TRANSITION_DURATION {
            return None;
        }
        self.screen = to;
        self.phase = Phase::Idle;
        self.session = None;
        debug!(screen = ?to, "transition committed");
        Some(to)
    }

    /// The translate/opacity pair to render with this frame: the eased
    /// outward animation while transitioning, the clamped drag preview while
    /// a leftward drag is live, identity otherwise.
    pub fn transform(&self, now: Instant, viewport_width: f32) -> ViewTransform {
        if let Phase::Animating { to, started_at } = self.phase {
            let elapsed = now.duration_since(started_at).as_secs_f32();
            let progress = (elapsed / TRANSITION_DURATION.as_secs_f32()).clamp(0.0, 1.0);
            let eased = ease_out_cubic(progress);
            let direction = match to {
                Screen::Payment => -1.0,
                Screen::Welcome => 1.0,
            };
            return ViewTransform {
                offset_x: direction * eased * viewport_width,
                opacity: 1.0 - eased,
            };
        }

        if let Some(session) = &self.session {
            let distance = session.drag_distance();
            if distance > 0.0 {
                let translate = distance.min(PREVIEW_MAX_TRANSLATE_PX);
                return ViewTransform {
                    offset_x: -translate,
                    opacity: (1.0 - translate / 200.0).max(PREVIEW_MIN_OPACITY),
                };
            }
        }

        ViewTransform::IDENTITY
    }

    fn begin(&mut self, to: Screen, now: Instant) {
        debug!(from = ?self.screen, ?to, "transition started");
        self.phase = Phase::Animating {
            to,
            started_at: now,
        };
    }
}

fn ease_out_cubic(progress: f32) -> f32 {
    let inverse = 1.0 - progress.clamp(0.0, 1.0);
    1.0 - inverse * inverse * inverse
}

#[cfg(test)]
#[path = "tests/transition_tests.rs"]
mod tests;
