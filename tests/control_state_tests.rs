//! ControlState properties under long press/release sequences

use std::collections::HashSet;

use crossterm::event::KeyCode;

use guff::input::{action_for_key, ControlState};
use guff::types::Action;

/// Numerical Recipes LCG; enough to shuffle key sequences deterministically.
struct Lcg(u32);

impl Lcg {
    fn next(&mut self, max: u32) -> u32 {
        self.0 = self.0.wrapping_mul(1664525).wrapping_add(1013904223);
        (self.0 >> 8) % max
    }
}

const KEYS: [KeyCode; 9] = [
    KeyCode::Up,
    KeyCode::Down,
    KeyCode::Left,
    KeyCode::Right,
    KeyCode::Char('h'),
    KeyCode::Char('x'),
    KeyCode::Char('B'),
    KeyCode::Char('q'),
    KeyCode::Char('z'),
];

fn canonical(code: KeyCode) -> KeyCode {
    match code {
        KeyCode::Char(c) => KeyCode::Char(c.to_ascii_lowercase()),
        other => other,
    }
}

#[test]
fn test_snapshot_matches_pressed_keys_exactly() {
    for seed in [1u32, 7, 42, 12345] {
        let mut rng = Lcg(seed);
        let mut cs = ControlState::new().without_key_release_timeout();
        let mut model: HashSet<KeyCode> = HashSet::new();

        for _ in 0..2_000 {
            let key = KEYS[rng.next(KEYS.len() as u32) as usize];
            if rng.next(2) == 0 {
                cs.press(key);
                if action_for_key(key).is_some() {
                    model.insert(canonical(key));
                }
            } else {
                cs.release(key);
                model.remove(&canonical(key));
            }

            let expected: HashSet<Action> =
                model.iter().filter_map(|k| action_for_key(*k)).collect();
            let snap = cs.snapshot();
            let got: HashSet<Action> = snap.iter().copied().collect();

            assert_eq!(got, expected, "seed {}", seed);
            assert_eq!(got.len(), snap.len(), "duplicate action in snapshot");
            assert_eq!(cs.len(), model.len());
        }
    }
}

#[test]
fn test_release_of_never_pressed_key_is_silent() {
    let mut cs = ControlState::new();
    for key in KEYS {
        assert_eq!(cs.release(key), None);
    }
    assert!(cs.is_empty());
}

#[test]
fn test_repeat_presses_do_not_duplicate() {
    let mut cs = ControlState::new();
    for _ in 0..10 {
        cs.press(KeyCode::Right);
    }
    assert_eq!(cs.snapshot().as_slice(), &[Action::Right]);
    assert_eq!(cs.release(KeyCode::Right), Some(Action::Right));
    assert!(cs.snapshot().is_empty());
}
