//! Dummy animation track detection and removal.

use scene_types::{Animation, NodeAnim};

use crate::diagnostics::DiagnosticSink;
use crate::params::DummyChannelRule;
use crate::ScrubParams;

/// Result of scrubbing a single animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimationOutcome {
    /// No channel was removed.
    Unchanged,
    /// Some dummy channels were removed, at least one channel remains.
    Modified {
        /// Number of channels removed.
        channels_removed: usize,
    },
    /// No channel remains; the animation must be removed from the scene.
    Unusable,
}

impl AnimationOutcome {
    /// Whether the animation must be removed.
    #[inline]
    #[must_use]
    pub const fn is_unusable(self) -> bool {
        matches!(self, Self::Unusable)
    }

    /// Whether the animation was changed or must be removed.
    #[inline]
    #[must_use]
    pub const fn had_changes(self) -> bool {
        !matches!(self, Self::Unchanged)
    }
}

fn all_identical<T: PartialEq>(keys: &[T]) -> bool {
    keys.windows(2).all(|pair| pair[0] == pair[1])
}

/// Whether a channel carries no motion.
///
/// With [`DummyChannelRule::Strict`] a channel is dummy when each of its
/// position, rotation and scaling sequences is either empty or holds one
/// repeated value. A channel without any keys is dummy.
///
/// # Example
///
/// ```
/// use scene_scrub::{is_dummy_channel, DummyChannelRule};
/// use scene_types::{NodeAnim, Vector3, VectorKey};
///
/// let mut channel = NodeAnim::new("hand");
/// channel.position_keys = vec![
///     VectorKey::new(0.0, Vector3::new(0.0, 1.0, 0.0)),
///     VectorKey::new(1.0, Vector3::new(0.0, 1.0, 0.0)),
/// ];
/// assert!(is_dummy_channel(&channel, DummyChannelRule::Strict));
///
/// channel.position_keys[1].value.y = 2.0;
/// assert!(!is_dummy_channel(&channel, DummyChannelRule::Strict));
/// ```
#[must_use]
pub fn is_dummy_channel(channel: &NodeAnim, rule: DummyChannelRule) -> bool {
    let positions = all_identical(&channel.position_keys);
    let rotations = all_identical(&channel.rotation_keys);
    let scalings = all_identical(&channel.scaling_keys);

    match rule {
        DummyChannelRule::Strict => positions && rotations && scalings,
        DummyChannelRule::Legacy => {
            positions
                && (channel.scaling_keys.is_empty() || rotations)
                && (channel.rotation_keys.is_empty() || scalings)
        }
    }
}

/// Remove dummy channels from an animation.
///
/// Surviving channels keep their relative order. If no channel survives the
/// animation is [`Unusable`](AnimationOutcome::Unusable) and the caller
/// should drop it. Nothing is checked when
/// [`ScrubParams::remove_dummy_channels`] is off.
pub fn scrub_animation(
    animation: &mut Animation,
    params: &ScrubParams,
    sink: &mut impl DiagnosticSink,
) -> AnimationOutcome {
    if !params.remove_dummy_channels {
        return AnimationOutcome::Unchanged;
    }

    let before = animation.channels.len();
    animation.channels.retain(|channel| {
        let dummy = is_dummy_channel(channel, params.dummy_channel_rule);
        if dummy {
            sink.error(&format!(
                "Deleting dummy animation channel for node '{}'",
                channel.node_name
            ));
        }
        !dummy
    });
    let channels_removed = before - animation.channels.len();

    if animation.channels.is_empty() {
        sink.error(&format!(
            "Deleting animation '{}': it consists of dummy tracks",
            animation.name
        ));
        AnimationOutcome::Unusable
    } else if channels_removed > 0 {
        AnimationOutcome::Modified { channels_removed }
    } else {
        AnimationOutcome::Unchanged
    }
}
