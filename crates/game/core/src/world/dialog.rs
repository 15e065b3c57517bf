//! The on-screen dialog line and its timeout.

use crate::timer::Countdown;

/// The single dialog box at the bottom of the screen.
///
/// Scripts set the text; the timeout owns clearing it. While a script is
/// running, nothing else writes here.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DialogBox {
    text: Option<String>,
    timeout: Countdown,
}

impl DialogBox {
    pub fn new() -> Self {
        Self::default()
    }

    /// Shows `text` for `seconds`. Replaces whatever was showing.
    pub fn show(&mut self, text: impl Into<String>, seconds: f32) {
        self.text = Some(text.into());
        self.timeout = Countdown::start(seconds);
    }

    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    pub fn is_open(&self) -> bool {
        self.text.is_some()
    }

    /// Seconds until the current text clears; zero when nothing is showing.
    pub fn remaining(&self) -> f32 {
        self.timeout.remaining()
    }

    /// One fixed step of the timeout. Returns `true` on the step the text
    /// clears.
    pub fn update(&mut self, dt: f32) -> bool {
        if self.text.is_none() {
            return false;
        }
        if self.timeout.tick(dt) || self.timeout.is_expired() {
            self.text = None;
            return true;
        }
        false
    }

    pub fn clear(&mut self) {
        self.text = None;
        self.timeout = Countdown::default();
    }
}
