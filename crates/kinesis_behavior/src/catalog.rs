//! The behavior catalog: ten hand-tuned idle animations.
//!
//! Each entry pairs a suggested duration with a pure blend curve over a
//! normalized progress fraction. The curves share a small pattern: a
//! `sin(p·π)` envelope (zero at both endpoints, peak at the midpoint),
//! sometimes shaped further by an easing curve, with per-channel
//! coefficients tuned by hand. Blinks are progress-threshold pulses, so
//! evaluation stays deterministic — the same progress always yields the
//! same weights.

use crate::easing::{ease_in_out_quad, ease_out_elastic};
use kinesis_core::{Channel, WeightMap};
use std::f32::consts::PI;
use std::time::Duration;

/// A named idle behavior: duration metadata plus a pure blend curve.
///
/// The duration is advisory — the caller's timeline divides elapsed time
/// by it to produce the progress fraction passed to [`Behavior::evaluate`].
#[derive(Debug, Clone, Copy)]
pub struct Behavior {
    /// Unique identifier, referenced by the emotion weight rows.
    pub name: &'static str,
    /// Suggested playback length in seconds.
    pub duration_secs: f32,
    blend: fn(f32) -> WeightMap,
}

impl Behavior {
    /// Suggested playback length as a [`Duration`].
    pub fn duration(&self) -> Duration {
        Duration::from_secs_f32(self.duration_secs)
    }

    /// Evaluate the blend curve at `progress`.
    ///
    /// Progress is normally in [0, 1]; values outside extrapolate through
    /// the underlying formulas rather than clamping. Pure — safe to call
    /// repeatedly and from any number of threads.
    pub fn evaluate(&self, progress: f32) -> WeightMap {
        (self.blend)(progress)
    }
}

fn charming_wink(p: f32) -> WeightMap {
    let t = ease_in_out_quad((p * PI).sin());
    let wink = if p > 0.42 && p < 0.60 { 1.0 } else { 0.0 };
    WeightMap::from([
        (Channel::Joy, 0.6 * t),
        (Channel::Blink, 0.85 * wink),
        (Channel::Fun, 0.3 * t),
        (Channel::NeckZ, -0.15 * t),
        (Channel::HeadY, -0.1 * t),
        (Channel::HeadX, 0.05 * t),
    ])
}

fn surprised_gasp(p: f32) -> WeightMap {
    let _t = ease_out_elastic(p);
    let fade = (p * PI).sin();
    WeightMap::from([
        (Channel::Surprised, 0.8 * fade),
        (Channel::Joy, 0.1 * fade),
        (Channel::Blink, 0.0),
        (Channel::NeckX, -0.1 * fade),
        (Channel::HeadX, -0.15 * fade),
        (Channel::ChestX, 0.2 * fade),
    ])
}

fn deep_breath_relax(p: f32) -> WeightMap {
    let t = (p * PI).sin();
    let blink = if p > 0.3 && p < 0.7 { 1.0 } else { 0.0 };
    WeightMap::from([
        (Channel::Joy, 0.2 * t),
        (Channel::Sorrow, 0.1 * t),
        (Channel::Blink, blink),
        (Channel::ChestX, 0.15 * t),
        (Channel::NeckX, -0.05 * t),
        (Channel::HeadX, 0.1 * t),
        (Channel::SpineY, 0.02 * t),
    ])
}

fn playful_shake(p: f32) -> WeightMap {
    let fade = (p * PI).sin();
    let shake = (p * PI * 6.0).sin() * 0.1;
    let blink = if shake.abs() > 0.08 { 1.0 } else { 0.0 };
    WeightMap::from([
        (Channel::Fun, 0.7 * fade),
        (Channel::Joy, 0.4 * fade),
        (Channel::Blink, blink),
        (Channel::NeckY, shake * fade),
        (Channel::HeadZ, shake * 0.5 * fade),
        (Channel::HeadX, 0.05 * fade),
    ])
}

fn confused_tilt(p: f32) -> WeightMap {
    let t = ease_in_out_quad((p * PI).sin());
    let blink = if p > 0.8 { 1.0 } else { 0.0 };
    WeightMap::from([
        (Channel::Fun, 0.3 * t),
        (Channel::Sorrow, 0.1 * t),
        (Channel::Blink, blink),
        (Channel::HeadZ, 0.2 * t),
        (Channel::NeckY, 0.1 * t),
        (Channel::HeadX, 0.1 * t),
    ])
}

fn happy_wave(p: f32) -> WeightMap {
    let fade = (p * PI).sin();
    WeightMap::from([
        (Channel::Joy, 0.6 * fade),
        (Channel::Fun, 0.4 * fade),
        (Channel::ChestY, 0.05 * fade),
    ])
}

fn sad_shrug(p: f32) -> WeightMap {
    let t = ease_in_out_quad((p * PI).sin());
    WeightMap::from([(Channel::Sorrow, 0.6 * t), (Channel::ChestX, -0.1 * t)])
}

fn surprised_raise(p: f32) -> WeightMap {
    let fade = ease_out_elastic(p);
    WeightMap::from([
        (Channel::Surprised, 0.9 * (p * PI).sin()),
        (Channel::HeadX, -0.1 * fade),
        (Channel::ChestX, 0.2 * fade),
    ])
}

fn confused_scratch(p: f32) -> WeightMap {
    let t = ease_in_out_quad((p * PI).sin());
    let blink = if p > 0.6 { 1.0 } else { 0.0 };
    WeightMap::from([
        (Channel::Fun, 0.2 * t),
        (Channel::Blink, blink),
        (Channel::NeckY, 0.1 * t),
        (Channel::HeadZ, 0.15 * t),
    ])
}

fn oh_pose(p: f32) -> WeightMap {
    let t = (p * PI).sin();
    WeightMap::from([(Channel::Oh, 0.7 * t), (Channel::ChestX, 0.1 * t)])
}

/// The fixed catalog, in definition order. Built once at process start
/// and never mutated.
static BEHAVIORS: [Behavior; 10] = [
    Behavior {
        name: "charming_wink",
        duration_secs: 3.0,
        blend: charming_wink,
    },
    Behavior {
        name: "surprised_gasp",
        duration_secs: 2.5,
        blend: surprised_gasp,
    },
    Behavior {
        name: "deep_breath_relax",
        duration_secs: 5.0,
        blend: deep_breath_relax,
    },
    Behavior {
        name: "playful_shake",
        duration_secs: 3.5,
        blend: playful_shake,
    },
    Behavior {
        name: "confused_tilt",
        duration_secs: 4.0,
        blend: confused_tilt,
    },
    Behavior {
        name: "happy_wave",
        duration_secs: 3.0,
        blend: happy_wave,
    },
    Behavior {
        name: "sad_shrug",
        duration_secs: 2.5,
        blend: sad_shrug,
    },
    Behavior {
        name: "surprised_raise",
        duration_secs: 2.2,
        blend: surprised_raise,
    },
    Behavior {
        name: "confused_scratch",
        duration_secs: 3.2,
        blend: confused_scratch,
    },
    Behavior {
        name: "oh_pose",
        duration_secs: 2.8,
        blend: oh_pose,
    },
];

/// Ordered, read-only view of the catalog.
pub fn behaviors() -> &'static [Behavior] {
    &BEHAVIORS
}

/// Look up a behavior by its unique name.
pub fn find_behavior(name: &str) -> Option<&'static Behavior> {
    BEHAVIORS.iter().find(|b| b.name == name)
}
