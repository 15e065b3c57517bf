//! Countdown timers shared by the per-tick subsystems.
//!
//! Every timed effect in the engine follows the same rule: arm a timer with a
//! duration in simulation seconds, decrement it exactly once per fixed step,
//! expire the step the remainder crosses zero. Dialog timeouts, camera pans,
//! trigger cooldowns, combat windows, and the interpreter's wait all count
//! down this way, so they stay in lockstep with each other.

use std::collections::BTreeMap;

/// A single countdown in simulation seconds.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Countdown {
    remaining: f32,
}

impl Countdown {
    /// Arms the countdown. Non-positive durations start already expired.
    pub fn start(seconds: f32) -> Self {
        Self {
            remaining: seconds.max(0.0),
        }
    }

    /// Seconds left; clamped at zero once expired.
    pub fn remaining(&self) -> f32 {
        self.remaining
    }

    pub fn is_expired(&self) -> bool {
        self.remaining <= 0.0
    }

    /// Advances by `dt` seconds. Returns `true` only on the step the
    /// countdown expires; already-expired timers return `false`.
    pub fn tick(&mut self, dt: f32) -> bool {
        if self.remaining <= 0.0 {
            return false;
        }
        self.remaining = (self.remaining - dt).max(0.0);
        self.remaining <= 0.0
    }
}

/// Countdowns keyed by owner.
///
/// Backed by a `BTreeMap` so ticking and expiry reporting walk the keys in a
/// deterministic order. Arming with a non-positive duration clears the slot
/// instead; a live entry always has time left on it.
#[derive(Clone, Debug, PartialEq)]
pub struct TimerBank<K: Ord> {
    timers: BTreeMap<K, Countdown>,
}

impl<K: Ord> Default for TimerBank<K> {
    fn default() -> Self {
        Self {
            timers: BTreeMap::new(),
        }
    }
}

impl<K: Ord + Clone> TimerBank<K> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Arms (or rearms) the countdown for `key`.
    pub fn set(&mut self, key: K, seconds: f32) {
        if seconds > 0.0 {
            self.timers.insert(key, Countdown::start(seconds));
        } else {
            self.timers.remove(&key);
        }
    }

    /// `true` while `key` has time left.
    pub fn is_active(&self, key: &K) -> bool {
        self.timers.contains_key(key)
    }

    /// Seconds left for `key`; zero when absent.
    pub fn remaining(&self, key: &K) -> f32 {
        self.timers.get(key).map_or(0.0, Countdown::remaining)
    }

    pub fn remove(&mut self, key: &K) {
        self.timers.remove(key);
    }

    pub fn clear(&mut self) {
        self.timers.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.timers.is_empty()
    }

    /// Ticks every countdown once. Expired keys are dropped from the bank and
    /// returned in key order.
    pub fn tick(&mut self, dt: f32) -> Vec<K> {
        let mut expired = Vec::new();
        for (key, timer) in self.timers.iter_mut() {
            if timer.tick(dt) {
                expired.push(key.clone());
            }
        }
        for key in &expired {
            self.timers.remove(key);
        }
        expired
    }
}
