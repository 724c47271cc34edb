//! Kinesis behavior library — parametric idle animations for the avatar.
//!
//! Ten hand-tuned curves map a normalized progress fraction to a sparse
//! [`kinesis_core::WeightMap`] of expression and pose weights, and two
//! selectors pick an entry — uniformly, or weighted by the emotion label
//! the agent attached to its reply.
//!
//! The library holds no state and performs no I/O: the caller owns the
//! timeline (advance elapsed time, divide by [`Behavior::duration`],
//! clamp, evaluate every tick) and merges the returned weights into its
//! rendering system.

mod catalog;
mod easing;
mod select;

pub use catalog::{behaviors, find_behavior, Behavior};
pub use easing::{ease_in_out_quad, ease_out_elastic};
pub use select::{
    pick_for, pick_for_emotion, pick_for_emotion_with, pick_for_with, pick_random,
    pick_random_with,
};
