//! Horizontal drag sessions over the welcome view.
//!
//! A session is exclusively owned by the input channel that started it:
//! touch and mouse must not interleave conflicting coordinates, so moves and
//! releases from the other channel are ignored until the owning channel's
//! end event fires.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputChannel {
    Touch,
    Mouse,
}

#[derive(Debug, Clone, Copy)]
pub struct GestureSession {
    channel: InputChannel,
    start_x: f32,
    current_x: f32,
}

impl GestureSession {
    pub fn begin(channel: InputChannel, x: f32) -> Self {
        Self {
            channel,
            start_x: x,
            current_x: x,
        }
    }

    pub fn owns(&self, channel: InputChannel) -> bool {
        self.channel == channel
    }

    pub fn move_to(&mut self, x: f32) {
        self.current_x = x;
    }

    /// Positive values mean a leftward drag (the advance direction).
    pub fn drag_distance(&self) -> f32 {
        self.start_x - self.current_x
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drag_distance_is_positive_for_leftward_drags() {
        let mut session = GestureSession::begin(InputChannel::Touch, 300.0);
        session.move_to(150.0);
        assert_eq!(session.drag_distance(), 150.0);
    }

    #[test]
    fn drag_distance_is_negative_for_rightward_drags() {
        let mut session = GestureSession::begin(InputChannel::Mouse, 300.0);
        session.move_to(360.0);
        assert_eq!(session.drag_distance(), -60.0);
    }

    #[test]
    fn session_ownership_is_per_channel() {
        let session = GestureSession::begin(InputChannel::Touch, 10.0);
        assert!(session.owns(InputChannel::Touch));
        assert!(!session.owns(InputChannel::Mouse));
    }
}
