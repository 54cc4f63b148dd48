//! Held-key tracking for terminal environments.
//!
//! Supports terminals that do not emit key release events by using a timeout:
//! every press (or auto-repeat) refreshes a key, and keys not refreshed within
//! the timeout are released on the next [`ControlState::advance`].

use arrayvec::ArrayVec;
use crossterm::event::KeyCode;

use crate::map::{action_for_key, normalize_key};
use crate::types::{Action, DEFAULT_KEY_RELEASE_TIMEOUT_MS, MAX_HELD_ACTIONS};

/// Maximum number of distinct keys tracked at once.
pub const MAX_HELD_KEYS: usize = 16;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct HeldKey {
    code: KeyCode,
    action: Action,
    /// Milliseconds since the key was last pressed or repeated
    idle_ms: u32,
}

/// Keys currently held, each with the action it is bound to.
#[derive(Debug, Clone)]
pub struct ControlState {
    held: ArrayVec<HeldKey, MAX_HELD_KEYS>,
    key_release_timeout_ms: Option<u32>,
}

impl ControlState {
    pub fn new() -> Self {
        Self {
            held: ArrayVec::new(),
            key_release_timeout_ms: Some(DEFAULT_KEY_RELEASE_TIMEOUT_MS),
        }
    }

    pub fn with_key_release_timeout_ms(mut self, timeout_ms: u32) -> Self {
        self.key_release_timeout_ms = Some(timeout_ms);
        self
    }

    /// Keep keys held until an explicit release, for terminals that report
    /// release events.
    pub fn without_key_release_timeout(mut self) -> Self {
        self.key_release_timeout_ms = None;
        self
    }

    pub fn key_release_timeout_ms(&self) -> Option<u32> {
        self.key_release_timeout_ms
    }

    /// Record a key press.
    ///
    /// Returns the action if the key was not already held. Pressing a held key
    /// only refreshes it; unbound keys are ignored.
    pub fn press(&mut self, code: KeyCode) -> Option<Action> {
        let code = normalize_key(code);
        let action = action_for_key(code)?;

        if let Some(key) = self.held.iter_mut().find(|k| k.code == code) {
            key.idle_ms = 0;
            return None;
        }

        if self
            .held
            .try_push(HeldKey {
                code,
                action,
                idle_ms: 0,
            })
            .is_err()
        {
            log::warn!("ignoring {:?}: {} keys already held", code, MAX_HELD_KEYS);
            return None;
        }
        log::trace!("press {:?} -> {}", code, action.as_str());
        Some(action)
    }

    /// Record a key release. Releasing a key that is not held is a no-op.
    pub fn release(&mut self, code: KeyCode) -> Option<Action> {
        let code = normalize_key(code);
        let idx = self.held.iter().position(|k| k.code == code)?;
        let key = self.held.remove(idx);
        log::trace!("release {:?} -> {}", code, key.action.as_str());
        Some(key.action)
    }

    /// Age held keys by `elapsed_ms`, releasing any past the timeout.
    ///
    /// Returns how many keys were released.
    pub fn advance(&mut self, elapsed_ms: u32) -> usize {
        let Some(timeout) = self.key_release_timeout_ms else {
            return 0;
        };
        let before = self.held.len();
        for key in self.held.iter_mut() {
            key.idle_ms = key.idle_ms.saturating_add(elapsed_ms);
        }
        self.held.retain(|k| k.idle_ms <= timeout);
        before - self.held.len()
    }

    /// Distinct actions currently held, in [`Action::ALL`] order.
    pub fn snapshot(&self) -> ArrayVec<Action, MAX_HELD_ACTIONS> {
        let mut out = ArrayVec::new();
        for action in Action::ALL {
            if self.is_held(action) {
                out.push(action);
            }
        }
        out
    }

    pub fn is_held(&self, action: Action) -> bool {
        self.held.iter().any(|k| k.action == action)
    }

    pub fn is_key_held(&self, code: KeyCode) -> bool {
        let code = normalize_key(code);
        self.held.iter().any(|k| k.code == code)
    }

    /// Number of keys held
    pub fn len(&self) -> usize {
        self.held.len()
    }

    pub fn is_empty(&self) -> bool {
        self.held.is_empty()
    }

    pub fn reset(&mut self) {
        self.held.clear();
    }
}

impl Default for ControlState {
    fn default() -> Self {
        Self::new()
    }
}
