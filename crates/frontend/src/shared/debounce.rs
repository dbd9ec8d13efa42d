//! Debounced callbacks built on a generation counter.
//!
//! Every call bumps the generation and sleeps; after the delay the action
//! only runs if no newer call happened meanwhile.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Pure part of the debouncer: hands out tokens and tells whether a token
/// is still the latest one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Generation(u64);

impl Generation {
    /// Starts a new generation and returns its token.
    pub fn bump(&mut self) -> u64 {
        self.0 = self.0.wrapping_add(1);
        self.0
    }

    pub fn is_current(&self, token: u64) -> bool {
        self.0 == token
    }
}

#[derive(Clone, Copy)]
pub struct Debounce {
    generation: StoredValue<Generation>,
    delay_ms: u32,
}

impl Debounce {
    pub fn new(delay_ms: u32) -> Self {
        Self {
            generation: StoredValue::new(Generation::default()),
            delay_ms,
        }
    }

    /// Schedules `action`, superseding whatever was scheduled before.
    pub fn run<F>(&self, action: F)
    where
        F: FnOnce() + 'static,
    {
        let mut token = 0;
        self.generation.update_value(|g| token = g.bump());
        let generation = self.generation;
        let delay_ms = self.delay_ms;
        spawn_local(async move {
            TimeoutFuture::new(delay_ms).await;
            let latest = generation
                .try_with_value(|g| g.is_current(token))
                .unwrap_or(false);
            if latest {
                action();
            }
        });
    }

    /// Drops any pending action.
    pub fn cancel(&self) {
        self.generation.update_value(|g| {
            g.bump();
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_latest_token_is_current() {
        let mut gen = Generation::default();
        let first = gen.bump();
        let second = gen.bump();
        assert!(!gen.is_current(first));
        assert!(gen.is_current(second));
    }

    #[test]
    fn test_burst_of_keystrokes_keeps_last() {
        let mut gen = Generation::default();
        let tokens: Vec<u64> = (0..5).map(|_| gen.bump()).collect();
        let live: Vec<&u64> = tokens.iter().filter(|t| gen.is_current(**t)).collect();
        assert_eq!(live, vec![&tokens[4]]);
    }

    #[test]
    fn test_cancel_invalidates_pending() {
        let mut gen = Generation::default();
        let token = gen.bump();
        gen.bump();
        assert!(!gen.is_current(token));
    }
}
