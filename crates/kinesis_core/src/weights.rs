//! Sparse weight maps produced by behavior evaluation.

use crate::channel::Channel;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Sparse mapping from blend channel to intensity.
///
/// A channel that is absent reads as 0.0; how absent channels interact
/// with the avatar's resting pose is the consumer's merge policy. Backed
/// by a `BTreeMap` so iteration order (and the serialized form) is
/// deterministic.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WeightMap(BTreeMap<Channel, f32>);

impl WeightMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Intensity for `channel`, 0.0 when the behavior does not drive it.
    pub fn get(&self, channel: Channel) -> f32 {
        self.0.get(&channel).copied().unwrap_or(0.0)
    }

    /// Whether the behavior drives `channel` at all (even at 0.0).
    pub fn contains(&self, channel: Channel) -> bool {
        self.0.contains_key(&channel)
    }

    pub fn set(&mut self, channel: Channel, value: f32) {
        self.0.insert(channel, value);
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Channel, f32)> + '_ {
        self.0.iter().map(|(ch, w)| (*ch, *w))
    }
}

impl FromIterator<(Channel, f32)> for WeightMap {
    fn from_iter<I: IntoIterator<Item = (Channel, f32)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<const N: usize> From<[(Channel, f32); N]> for WeightMap {
    fn from(entries: [(Channel, f32); N]) -> Self {
        Self(BTreeMap::from(entries))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_channel_reads_zero() {
        let map = WeightMap::from([(Channel::Joy, 0.6)]);
        assert_eq!(map.get(Channel::Joy), 0.6);
        assert_eq!(map.get(Channel::Sorrow), 0.0);
        assert!(map.contains(Channel::Joy));
        assert!(!map.contains(Channel::Sorrow));
    }

    #[test]
    fn test_explicit_zero_is_still_present() {
        // Behaviors emit some channels at exactly 0.0 (e.g. a suppressed
        // blink); that is distinct from not driving the channel.
        let map = WeightMap::from([(Channel::Blink, 0.0)]);
        assert!(map.contains(Channel::Blink));
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn test_serializes_as_wire_object() {
        let map = WeightMap::from([(Channel::Joy, 0.5), (Channel::NeckZ, -0.15)]);
        let json = serde_json::to_string(&map).unwrap();
        assert_eq!(json, r#"{"joy":0.5,"neckZ":-0.15}"#);
        let back: WeightMap = serde_json::from_str(&json).unwrap();
        assert_eq!(back, map);
    }
}
