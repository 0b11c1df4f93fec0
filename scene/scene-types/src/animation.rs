//! Keyframed node animations.

use nalgebra::{UnitQuaternion, Vector3};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A keyframe holding a vector value (position or scaling).
///
/// Equality compares only the value, not the time: two keys are equal when
/// they describe the same pose.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct VectorKey {
    /// Time of the key, in ticks.
    pub time: f64,
    /// Value at `time`.
    pub value: Vector3<f64>,
}

impl VectorKey {
    /// Create a key.
    #[inline]
    #[must_use]
    pub const fn new(time: f64, value: Vector3<f64>) -> Self {
        Self { time, value }
    }
}

impl PartialEq for VectorKey {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

/// A keyframe holding a rotation.
///
/// Equality compares only the value, like [`VectorKey`].
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct QuatKey {
    /// Time of the key, in ticks.
    pub time: f64,
    /// Rotation at `time`.
    pub value: UnitQuaternion<f64>,
}

impl QuatKey {
    /// Create a key.
    #[inline]
    #[must_use]
    pub const fn new(time: f64, value: UnitQuaternion<f64>) -> Self {
        Self { time, value }
    }
}

impl PartialEq for QuatKey {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

/// Animation track for a single node.
///
/// The three key sequences are independent and any of them may be empty.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct NodeAnim {
    /// Name of the animated node.
    pub node_name: String,
    /// Translation keys.
    pub position_keys: Vec<VectorKey>,
    /// Rotation keys.
    pub rotation_keys: Vec<QuatKey>,
    /// Scaling keys.
    pub scaling_keys: Vec<VectorKey>,
}

impl NodeAnim {
    /// Create a channel without keys for the named node.
    #[must_use]
    pub fn new(node_name: impl Into<String>) -> Self {
        Self {
            node_name: node_name.into(),
            ..Self::default()
        }
    }

    /// Total number of keys across all three sequences.
    #[must_use]
    pub fn key_count(&self) -> usize {
        self.position_keys.len() + self.rotation_keys.len() + self.scaling_keys.len()
    }
}

/// A named animation made of per-node channels.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Animation {
    /// Animation name, may be empty.
    pub name: String,
    /// Duration in ticks.
    pub duration: f64,
    /// Ticks per second, `0.0` if unspecified.
    pub ticks_per_second: f64,
    /// Node channels.
    pub channels: Vec<NodeAnim>,
}

impl Animation {
    /// Create an animation with the given name and channels.
    #[must_use]
    pub fn new(name: impl Into<String>, channels: Vec<NodeAnim>) -> Self {
        Self {
            name: name.into(),
            duration: 0.0,
            ticks_per_second: 0.0,
            channels,
        }
    }
}

impl Default for Animation {
    fn default() -> Self {
        Self::new(String::new(), Vec::new())
    }
}
