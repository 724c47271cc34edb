//! Behavior selection: uniform, and weighted by the agent's emotion.
//!
//! Selection is the only place randomness enters the library. Each entry
//! point comes in two forms: a plain one using the thread-local RNG, and
//! a `*_with` form taking any [`Rng`] so callers (and tests) can pass a
//! seeded generator for reproducible picks.

use crate::catalog::{behaviors, find_behavior, Behavior};
use kinesis_core::Emotion;
use rand::Rng;

/// Per-emotion weight rows, behavior name → relative integer weight.
///
/// Row order is load-bearing: the roulette walk subtracts weights in this
/// order, and a draw landing exactly on a boundary selects the entry it
/// just crossed, not the next one.
fn weights_for(emotion: Emotion) -> &'static [(&'static str, u32)] {
    match emotion {
        Emotion::Happy => &[
            ("happy_wave", 3),
            ("playful_shake", 2),
            ("deep_breath_relax", 1),
            ("charming_wink", 1),
        ],
        Emotion::Sad => &[
            ("sad_shrug", 3),
            ("deep_breath_relax", 2),
            ("confused_tilt", 1),
        ],
        Emotion::Surprised => &[
            ("surprised_raise", 3),
            ("surprised_gasp", 2),
            ("oh_pose", 1),
        ],
        Emotion::Confused => &[
            ("confused_tilt", 2),
            ("confused_scratch", 2),
            ("playful_shake", 1),
        ],
        Emotion::Oh => &[
            ("oh_pose", 3),
            ("surprised_gasp", 2),
            ("charming_wink", 1),
        ],
        Emotion::Neutral => &[
            ("deep_breath_relax", 2),
            ("charming_wink", 1),
            ("playful_shake", 1),
            ("confused_tilt", 1),
        ],
    }
}

/// Pick a behavior uniformly at random from the catalog.
pub fn pick_random() -> &'static Behavior {
    pick_random_with(&mut rand::thread_rng())
}

/// [`pick_random`] with a caller-supplied RNG.
pub fn pick_random_with<R: Rng + ?Sized>(rng: &mut R) -> &'static Behavior {
    let all = behaviors();
    &all[rng.gen_range(0..all.len())]
}

/// Pick a behavior fitting an emotion label from the agent.
///
/// Unknown labels fall back to the neutral row; the function is total
/// over any string input and never fails.
pub fn pick_for_emotion(label: &str) -> &'static Behavior {
    pick_for_emotion_with(&mut rand::thread_rng(), label)
}

/// [`pick_for_emotion`] with a caller-supplied RNG.
pub fn pick_for_emotion_with<R: Rng + ?Sized>(rng: &mut R, label: &str) -> &'static Behavior {
    pick_for_with(rng, Emotion::from_label(label))
}

/// Pick a behavior fitting an already-parsed [`Emotion`].
pub fn pick_for(emotion: Emotion) -> &'static Behavior {
    pick_for_with(&mut rand::thread_rng(), emotion)
}

/// [`pick_for`] with a caller-supplied RNG.
pub fn pick_for_with<R: Rng + ?Sized>(rng: &mut R, emotion: Emotion) -> &'static Behavior {
    pick_from_row(rng, emotion, weights_for(emotion))
}

/// Roulette-select from a weight row and resolve against the catalog.
///
/// A row naming a behavior the catalog doesn't know degrades to a uniform
/// pick instead of failing — the table is data, and data can drift.
fn pick_from_row<R: Rng + ?Sized>(
    rng: &mut R,
    emotion: Emotion,
    row: &[(&'static str, u32)],
) -> &'static Behavior {
    let Some(name) = roulette(rng, row) else {
        tracing::warn!("empty weight row for {}, picking uniformly", emotion);
        return pick_random_with(rng);
    };
    match find_behavior(name) {
        Some(behavior) => {
            tracing::debug!("picked '{}' for {}", behavior.name, emotion);
            behavior
        }
        None => {
            tracing::warn!(
                "weight row for {} references unknown behavior '{}', picking uniformly",
                emotion,
                name
            );
            pick_random_with(rng)
        }
    }
}

/// Cumulative-weight roulette over an ordered row.
///
/// Draws uniformly in [0, total) and walks the row subtracting each
/// weight until the remainder reaches zero or below; that entry wins.
/// Returns `None` only for a row with no positive weight.
fn roulette<R: Rng + ?Sized>(rng: &mut R, row: &[(&'static str, u32)]) -> Option<&'static str> {
    let total: u32 = row.iter().map(|(_, w)| *w).sum();
    if total == 0 {
        return None;
    }
    let mut draw = rng.gen_range(0.0..f64::from(total));
    let mut chosen = row[0].0;
    for &(name, weight) in row {
        draw -= f64::from(weight);
        if draw <= 0.0 {
            chosen = name;
            break;
        }
    }
    Some(chosen)
}
