//! Control signals returned by executing one script action.

/// What the interpreter does after an action executes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ActionSignal {
    /// Keep draining: run the next queued action in the same call.
    Continue,
    /// Park the script for this many simulation seconds, then resume.
    Suspend(f32),
    /// A precondition failed: drop the rest of the script.
    Abort,
}

impl ActionSignal {
    #[inline]
    pub fn is_continue(self) -> bool {
        matches!(self, ActionSignal::Continue)
    }

    #[inline]
    pub fn is_abort(self) -> bool {
        matches!(self, ActionSignal::Abort)
    }

    /// The suspension to take, if any. Suspensions of zero or less behave
    /// like [`ActionSignal::Continue`]: the action's effect already happened
    /// and there is nothing left to wait for.
    #[inline]
    pub fn suspends_for(self) -> Option<f32> {
        match self {
            ActionSignal::Suspend(seconds) if seconds > 0.0 => Some(seconds),
            _ => None,
        }
    }
}
