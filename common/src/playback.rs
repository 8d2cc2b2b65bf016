//! Background music playback states.
//!
//! Browsers may refuse unmuted autoplay. The controller first tries unmuted
//! playback; if that is refused it plays muted and unmutes on the first user
//! gesture. Failures never stop the page.

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PlaybackState {
    #[default]
    AttemptingUnmuted,
    PlayingMuted,
    PlayingUnmuted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackEvent {
    /// The unmuted play attempt resolved.
    Started,
    /// The unmuted play attempt was rejected.
    Blocked,
    /// First click or touch anywhere in the document.
    Gesture,
}

impl PlaybackState {
    pub fn on(self, event: PlaybackEvent) -> Self {
        match (self, event) {
            (PlaybackState::AttemptingUnmuted, PlaybackEvent::Started) => {
                PlaybackState::PlayingUnmuted
            }
            (PlaybackState::AttemptingUnmuted, PlaybackEvent::Blocked) => {
                PlaybackState::PlayingMuted
            }
            (PlaybackState::PlayingMuted, PlaybackEvent::Gesture) => PlaybackState::PlayingUnmuted,
            (state, _) => state,
        }
    }

    pub fn is_muted(self) -> bool {
        self == PlaybackState::PlayingMuted
    }

    /// Whether a gesture listener should still be armed.
    pub fn awaits_gesture(self) -> bool {
        self.is_muted()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::PlaybackEvent::*;
    use super::PlaybackState::*;

    #[test]
    fn autoplay_allowed() {
        let state = AttemptingUnmuted.on(Started);
        assert_eq!(state, PlayingUnmuted);
        assert_eq!(state.on(Gesture), PlayingUnmuted);
        assert_eq!(state.on(Blocked), PlayingUnmuted);
    }

    #[test]
    fn autoplay_blocked_then_gesture() {
        let state = AttemptingUnmuted.on(Blocked);
        assert!(state.is_muted());
        assert!(state.awaits_gesture());
        let state = state.on(Gesture);
        assert_eq!(state, PlayingUnmuted);
        assert!(!state.awaits_gesture());
    }

    #[test]
    fn gesture_before_outcome_is_ignored() {
        assert_eq!(AttemptingUnmuted.on(Gesture), AttemptingUnmuted);
    }
}
