//! Configuration for the invalid data scrub.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// How animation channels are classified as dummy tracks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum DummyChannelRule {
    /// A channel is dummy when every non-empty key sequence holds a single
    /// repeated value.
    #[default]
    Strict,

    /// Historical classification: rotation keys are only consulted when the
    /// channel also has scaling keys, and scaling keys only when it also has
    /// rotation keys. Kept for output compatibility with older pipelines.
    Legacy,
}

/// Which element a checked element is compared against when looking for a
/// constant array.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum DegeneracyBaseline {
    /// The nearest preceding element that is not exempt. Empty and fully
    /// exempt arrays are never degenerate.
    #[default]
    PreviousChecked,

    /// The immediately preceding element, exempt or not. An array with no
    /// checked element that differs from its neighbour is degenerate, so
    /// empty and fully exempt arrays are degenerate too.
    PreviousElement,
}

/// Configuration parameters for the scrub.
///
/// # Example
///
/// ```
/// use scene_scrub::{DummyChannelRule, ScrubParams};
///
/// // Use defaults
/// let params = ScrubParams::default();
/// assert!(params.check_exempt_finiteness);
///
/// // Or customize
/// let params = ScrubParams::default()
///     .with_dummy_channel_rule(DummyChannelRule::Legacy)
///     .with_remove_dummy_channels(false);
/// assert!(!params.remove_dummy_channels);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ScrubParams {
    /// Whether vertices exempted by the dirty mask are still checked for
    /// non-finite components.
    ///
    /// Exemption always skips the degeneracy check. With this enabled a NaN
    /// or infinity in an exempt slot still fails the array.
    /// Default: `true`
    pub check_exempt_finiteness: bool,

    /// Baseline for the degeneracy comparison.
    ///
    /// Default: [`DegeneracyBaseline::PreviousChecked`]
    pub degeneracy_baseline: DegeneracyBaseline,

    /// Whether dummy animation channels are removed.
    ///
    /// Default: `true`
    pub remove_dummy_channels: bool,

    /// Rule used to classify dummy channels.
    ///
    /// Default: [`DummyChannelRule::Strict`]
    pub dummy_channel_rule: DummyChannelRule,
}

impl Default for ScrubParams {
    fn default() -> Self {
        Self {
            check_exempt_finiteness: true,
            degeneracy_baseline: DegeneracyBaseline::PreviousChecked,
            remove_dummy_channels: true,
            dummy_channel_rule: DummyChannelRule::Strict,
        }
    }
}

impl ScrubParams {
    /// Same as [`ScrubParams::default`].
    #[must_use]
    pub fn strict() -> Self {
        Self::default()
    }

    /// Reproduces the historical behavior of the step.
    ///
    /// - exempt vertices are skipped entirely, finiteness included
    /// - checked elements are compared with their immediate neighbour
    /// - dummy channels use [`DummyChannelRule::Legacy`]
    #[must_use]
    pub fn legacy() -> Self {
        Self {
            check_exempt_finiteness: false,
            degeneracy_baseline: DegeneracyBaseline::PreviousElement,
            remove_dummy_channels: true,
            dummy_channel_rule: DummyChannelRule::Legacy,
        }
    }

    /// Set whether exempt vertices are checked for non-finite components.
    #[must_use]
    pub fn with_check_exempt_finiteness(mut self, check: bool) -> Self {
        self.check_exempt_finiteness = check;
        self
    }

    /// Set the baseline for the degeneracy comparison.
    #[must_use]
    pub fn with_degeneracy_baseline(mut self, baseline: DegeneracyBaseline) -> Self {
        self.degeneracy_baseline = baseline;
        self
    }

    /// Set whether dummy animation channels are removed.
    #[must_use]
    pub fn with_remove_dummy_channels(mut self, remove: bool) -> Self {
        self.remove_dummy_channels = remove;
        self
    }

    /// Set the dummy channel classification rule.
    #[must_use]
    pub fn with_dummy_channel_rule(mut self, rule: DummyChannelRule) -> Self {
        self.dummy_channel_rule = rule;
        self
    }
}
