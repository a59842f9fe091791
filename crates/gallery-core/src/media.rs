//! Background-music toggle state.
//!
//! Playback is asynchronous on the web: `play()` returns a promise the
//! browser may reject (autoplay policy, missing source). The toggle only
//! reports `Playing` once that promise resolves, and each promise is matched
//! to the click that issued it so a late answer to an older request is dropped.

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum PlaybackState {
    #[default]
    Stopped,
    /// `play()` requested, waiting on the promise.
    Starting,
    Playing,
}

/// What the host should do with the media element after a click.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MediaCommand {
    /// Call `play()` and report its outcome with this request id.
    Play(u64),
    Pause,
}

#[derive(Clone, Debug, Default)]
pub struct MediaToggle {
    state: PlaybackState,
    // id of the latest play request
    request: u64,
}

impl MediaToggle {
    pub fn state(&self) -> PlaybackState {
        self.state
    }

    pub fn is_playing(&self) -> bool {
        self.state == PlaybackState::Playing
    }

    pub fn toggle(&mut self) -> MediaCommand {
        match self.state {
            PlaybackState::Stopped => {
                self.state = PlaybackState::Starting;
                self.request += 1;
                MediaCommand::Play(self.request)
            }
            PlaybackState::Starting | PlaybackState::Playing => {
                self.state = PlaybackState::Stopped;
                MediaCommand::Pause
            }
        }
    }

    fn is_pending(&self, request: u64) -> bool {
        self.state == PlaybackState::Starting && request == self.request
    }

    /// Play request `request` resolved. Returns `true` when it is the pending
    /// request and playback is now on. Otherwise the answer is stale; if the
    /// toggle ended up [`Stopped`](PlaybackState::Stopped) the host should
    /// pause the element again.
    pub fn play_resolved(&mut self, request: u64) -> bool {
        if !self.is_pending(request) {
            return false;
        }
        self.state = PlaybackState::Playing;
        true
    }

    /// Play request `request` was refused. Returns `true` when it was the
    /// pending request and the toggle fell back to stopped; stale refusals,
    /// such as the abort of a request superseded by pause and play, are
    /// ignored.
    pub fn play_rejected(&mut self, request: u64) -> bool {
        if !self.is_pending(request) {
            return false;
        }
        self.state = PlaybackState::Stopped;
        true
    }

    pub fn ended(&mut self) {
        self.state = PlaybackState::Stopped;
    }
}
