//! Shared vocabulary for the Kinesis avatar behavior library.
//!
//! The behavior crates speak in three types: [`Channel`] (what an
//! animation can drive on the avatar), [`WeightMap`] (how hard each
//! channel is driven at one instant), and [`Emotion`] (the label the
//! conversational agent attaches to a reply). They live here so every
//! consumer — selection, playback, output encoding — agrees on the
//! wire names without duplicating them.

pub mod channel;
pub mod emotion;
pub mod weights;

pub use channel::{Channel, ChannelKind};
pub use emotion::{Emotion, UnknownEmotion};
pub use weights::WeightMap;
