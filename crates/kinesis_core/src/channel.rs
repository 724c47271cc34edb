//! Blend channels — the closed set of outputs a behavior can drive.
//!
//! Expression channels land on the avatar's morph targets; pose channels
//! land on bone rotations. The serde names are the exact keys the avatar
//! client applies each frame, so a serialized [`crate::WeightMap`] can be
//! consumed without translation.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single blendable output on the avatar.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "camelCase")]
pub enum Channel {
    // Expression morphs, intensity 0.0 - 1.0.
    Joy,
    Fun,
    Sorrow,
    Surprised,
    Oh,
    /// Eyelid close. Behaviors emit this as a 0/1 pulse, scaled per entry.
    Blink,
    // Bone rotations, typically -1.0 - 1.0 (normalized radians factor
    // interpreted by the rig).
    HeadX,
    HeadY,
    HeadZ,
    NeckX,
    NeckY,
    NeckZ,
    ChestX,
    ChestY,
    SpineY,
}

/// How the avatar rig consumes a channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChannelKind {
    /// Morph target weight on the face mesh.
    Expression,
    /// Rotation applied to a skeleton bone.
    Pose,
}

impl Channel {
    /// Wire name, identical to the serde representation.
    pub fn name(&self) -> &'static str {
        match self {
            Channel::Joy => "joy",
            Channel::Fun => "fun",
            Channel::Sorrow => "sorrow",
            Channel::Surprised => "surprised",
            Channel::Oh => "oh",
            Channel::Blink => "blink",
            Channel::HeadX => "headX",
            Channel::HeadY => "headY",
            Channel::HeadZ => "headZ",
            Channel::NeckX => "neckX",
            Channel::NeckY => "neckY",
            Channel::NeckZ => "neckZ",
            Channel::ChestX => "chestX",
            Channel::ChestY => "chestY",
            Channel::SpineY => "spineY",
        }
    }

    /// Whether this channel drives a morph target or a bone.
    pub fn kind(&self) -> ChannelKind {
        match self {
            Channel::Joy
            | Channel::Fun
            | Channel::Sorrow
            | Channel::Surprised
            | Channel::Oh
            | Channel::Blink => ChannelKind::Expression,
            _ => ChannelKind::Pose,
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_names_match_client_keys() {
        assert_eq!(serde_json::to_string(&Channel::Joy).unwrap(), "\"joy\"");
        assert_eq!(serde_json::to_string(&Channel::NeckZ).unwrap(), "\"neckZ\"");
        assert_eq!(
            serde_json::to_string(&Channel::SpineY).unwrap(),
            "\"spineY\""
        );
    }

    #[test]
    fn test_wire_names_round_trip() {
        let all = [
            Channel::Joy,
            Channel::Fun,
            Channel::Sorrow,
            Channel::Surprised,
            Channel::Oh,
            Channel::Blink,
            Channel::HeadX,
            Channel::HeadY,
            Channel::HeadZ,
            Channel::NeckX,
            Channel::NeckY,
            Channel::NeckZ,
            Channel::ChestX,
            Channel::ChestY,
            Channel::SpineY,
        ];
        for ch in all {
            let json = serde_json::to_string(&ch).unwrap();
            assert_eq!(json, format!("\"{}\"", ch.name()));
            let back: Channel = serde_json::from_str(&json).unwrap();
            assert_eq!(back, ch);
        }
    }

    #[test]
    fn test_kind_split() {
        assert_eq!(Channel::Blink.kind(), ChannelKind::Expression);
        assert_eq!(Channel::Oh.kind(), ChannelKind::Expression);
        assert_eq!(Channel::HeadZ.kind(), ChannelKind::Pose);
        assert_eq!(Channel::ChestY.kind(), ChannelKind::Pose);
    }
}
