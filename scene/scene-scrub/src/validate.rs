//! Content validation for per-vertex attribute arrays.
//!
//! Checks an array for values that are structurally present but useless to
//! downstream consumers: non-finite components and arrays where every
//! element is the same.

use std::fmt;

use nalgebra::{Point3, Vector3};
use scene_types::{Color4, QuatKey, VectorKey};

use crate::params::{DegeneracyBaseline, ScrubParams};

/// Element types that can be stored in a validated array.
///
/// Only vector-valued geometric attributes have their content checked.
/// For every other type [`validate_array`] reports [`ArrayDiagnosis::Ok`].
pub trait ArrayElement: PartialEq {
    /// Whether arrays of this type are checked at all.
    const CONTENT_CHECKED: bool = false;

    /// Whether every numeric component is finite.
    fn all_finite(&self) -> bool {
        true
    }
}

impl ArrayElement for Vector3<f64> {
    const CONTENT_CHECKED: bool = true;

    fn all_finite(&self) -> bool {
        self.iter().all(|c| f64::is_finite(*c))
    }
}

impl ArrayElement for Vector3<f32> {
    const CONTENT_CHECKED: bool = true;

    fn all_finite(&self) -> bool {
        self.iter().all(|c| f32::is_finite(*c))
    }
}

impl ArrayElement for Point3<f64> {
    const CONTENT_CHECKED: bool = true;

    fn all_finite(&self) -> bool {
        self.coords.iter().all(|c| f64::is_finite(*c))
    }
}

impl ArrayElement for f32 {}
impl ArrayElement for f64 {}
impl ArrayElement for Color4 {}
impl ArrayElement for VectorKey {}
impl ArrayElement for QuatKey {}

/// Outcome of validating one array.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArrayDiagnosis {
    /// The array is usable.
    Ok,
    /// An element has a NaN or infinite component.
    Corrupt {
        /// Index of the first offending element.
        index: usize,
    },
    /// Every considered element is identical.
    Degenerate,
}

impl ArrayDiagnosis {
    /// Whether the array passed validation.
    #[inline]
    #[must_use]
    pub const fn is_ok(self) -> bool {
        matches!(self, Self::Ok)
    }

    /// Whether the array contains a non-finite value.
    #[inline]
    #[must_use]
    pub const fn is_corrupt(self) -> bool {
        matches!(self, Self::Corrupt { .. })
    }

    /// Whether the array holds a single repeated value.
    #[inline]
    #[must_use]
    pub const fn is_degenerate(self) -> bool {
        matches!(self, Self::Degenerate)
    }
}

impl fmt::Display for ArrayDiagnosis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ok => f.write_str("ok"),
            Self::Corrupt { index } => {
                write!(f, "INF/NAN was found in a vector component (element {index})")
            }
            Self::Degenerate => f.write_str("all vectors are identical"),
        }
    }
}

/// Validate an array using default parameters.
///
/// `mask` marks elements exempt from the degeneracy check; `None` exempts
/// nothing. Entries past the end of the mask are not exempt.
///
/// # Example
///
/// ```
/// use scene_scrub::{validate_array, ArrayDiagnosis};
/// use scene_types::Vector3;
///
/// let constant = vec![Vector3::new(1.0, 1.0, 1.0); 5];
/// assert_eq!(validate_array(&constant, None), ArrayDiagnosis::Degenerate);
///
/// let varied = vec![Vector3::new(1.0, 1.0, 1.0), Vector3::new(0.0, 1.0, 1.0)];
/// assert_eq!(validate_array(&varied, None), ArrayDiagnosis::Ok);
///
/// let broken = vec![Vector3::new(f64::NAN, 0.0, 0.0), Vector3::zeros()];
/// assert!(validate_array(&broken, None).is_corrupt());
/// ```
#[must_use]
pub fn validate_array<T: ArrayElement>(array: &[T], mask: Option<&[bool]>) -> ArrayDiagnosis {
    validate_array_with_params(array, mask, &ScrubParams::default())
}

/// Validate an array with explicit parameters.
///
/// An array is [`Corrupt`](ArrayDiagnosis::Corrupt) if any element has a
/// non-finite component. Exempt elements are included in that check unless
/// `params.check_exempt_finiteness` is off. It is
/// [`Degenerate`](ArrayDiagnosis::Degenerate) if at least one element is not
/// exempt and all non-exempt elements compare equal. An empty or fully
/// exempt array is not degenerate. With
/// [`DegeneracyBaseline::PreviousElement`] each checked element is compared
/// with its immediate neighbour instead, and an array without any such
/// difference is degenerate.
#[must_use]
pub fn validate_array_with_params<T: ArrayElement>(
    array: &[T],
    mask: Option<&[bool]>,
    params: &ScrubParams,
) -> ArrayDiagnosis {
    if !T::CONTENT_CHECKED {
        return ArrayDiagnosis::Ok;
    }

    let is_exempt = |i: usize| mask.and_then(|m| m.get(i)).copied().unwrap_or(false);

    let mut previous: Option<&T> = None;
    let mut varies = false;

    for (i, element) in array.iter().enumerate() {
        let exempt = is_exempt(i);
        if exempt && !params.check_exempt_finiteness {
            continue;
        }
        if !element.all_finite() {
            return ArrayDiagnosis::Corrupt { index: i };
        }
        if exempt {
            continue;
        }
        let baseline = match params.degeneracy_baseline {
            DegeneracyBaseline::PreviousChecked => previous,
            DegeneracyBaseline::PreviousElement => i.checked_sub(1).and_then(|p| array.get(p)),
        };
        if baseline.is_some_and(|p| p != element) {
            varies = true;
        }
        previous = Some(element);
    }

    let degenerate = match params.degeneracy_baseline {
        DegeneracyBaseline::PreviousChecked => previous.is_some() && !varies,
        DegeneracyBaseline::PreviousElement => !varies,
    };
    if degenerate {
        ArrayDiagnosis::Degenerate
    } else {
        ArrayDiagnosis::Ok
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::UnitQuaternion;

    fn v(x: f64, y: f64, z: f64) -> Vector3<f64> {
        Vector3::new(x, y, z)
    }

    #[test]
    fn all_identical_is_degenerate() {
        let array = vec![v(1.0, 1.0, 1.0); 5];
        assert_eq!(validate_array(&array, None), ArrayDiagnosis::Degenerate);
    }

    #[test]
    fn one_differing_element_is_ok() {
        let mut array = vec![v(1.0, 1.0, 1.0); 5];
        array[3] = v(1.0, 1.0, 1.5);
        assert_eq!(validate_array(&array, None), ArrayDiagnosis::Ok);
    }

    #[test]
    fn single_element_is_degenerate() {
        let array = vec![v(0.0, 1.0, 0.0)];
        assert_eq!(validate_array(&array, None), ArrayDiagnosis::Degenerate);
    }

    #[test]
    fn empty_array_is_ok() {
        let array: Vec<Vector3<f64>> = Vec::new();
        assert_eq!(validate_array(&array, None), ArrayDiagnosis::Ok);
    }

    #[test]
    fn nan_is_corrupt() {
        let array = vec![v(0.0, 0.0, 0.0), v(1.0, 0.0, 0.0), v(f64::NAN, 0.0, 0.0)];
        assert_eq!(
            validate_array(&array, None),
            ArrayDiagnosis::Corrupt { index: 2 }
        );
    }

    #[test]
    fn infinity_is_corrupt() {
        let array = vec![v(0.0, f64::NEG_INFINITY, 0.0), v(1.0, 0.0, 0.0)];
        assert!(validate_array(&array, None).is_corrupt());
    }

    #[test]
    fn corrupt_reported_before_degenerate() {
        let array = vec![v(1.0, 1.0, 1.0), v(1.0, 1.0, 1.0), v(1.0, f64::INFINITY, 1.0)];
        assert!(validate_array(&array, None).is_corrupt());
    }

    #[test]
    fn exempt_elements_skip_degeneracy() {
        // Two zero normals on line vertices, the rest vary.
        let array = vec![
            v(0.0, 0.0, 0.0),
            v(0.0, 0.0, 0.0),
            v(0.0, 0.0, 1.0),
            v(0.0, 1.0, 0.0),
        ];
        let mask = [true, true, false, false];
        assert_eq!(validate_array(&array, Some(&mask)), ArrayDiagnosis::Ok);
    }

    #[test]
    fn exempt_elements_do_not_mask_constant_rest() {
        let array = vec![
            v(5.0, 0.0, 0.0),
            v(0.0, 0.0, 1.0),
            v(0.0, 0.0, 1.0),
            v(0.0, 0.0, 1.0),
        ];
        let mask = [true, false, false, false];
        assert_eq!(
            validate_array(&array, Some(&mask)),
            ArrayDiagnosis::Degenerate
        );
    }

    #[test]
    fn fully_exempt_array_is_not_degenerate() {
        let array = vec![v(0.0, 0.0, 0.0); 3];
        let mask = [true; 3];
        assert_eq!(validate_array(&array, Some(&mask)), ArrayDiagnosis::Ok);
    }

    #[test]
    fn finiteness_checked_on_exempt_elements_by_default() {
        let array = vec![v(f64::NAN, 0.0, 0.0), v(0.0, 0.0, 1.0), v(0.0, 1.0, 0.0)];
        let mask = [true, false, false];
        assert_eq!(
            validate_array(&array, Some(&mask)),
            ArrayDiagnosis::Corrupt { index: 0 }
        );
    }

    #[test]
    fn exempt_finiteness_can_be_disabled() {
        let array = vec![v(f64::NAN, 0.0, 0.0), v(0.0, 0.0, 1.0), v(0.0, 1.0, 0.0)];
        let mask = [true, false, false];
        let params = ScrubParams::default().with_check_exempt_finiteness(false);
        assert_eq!(
            validate_array_with_params(&array, Some(&mask), &params),
            ArrayDiagnosis::Ok
        );
    }

    #[test]
    fn short_mask_treats_missing_entries_as_checked() {
        let array = vec![v(1.0, 0.0, 0.0); 4];
        let mask = [true];
        assert_eq!(
            validate_array(&array, Some(&mask)),
            ArrayDiagnosis::Degenerate
        );
    }

    #[test]
    fn points_are_checked() {
        let array = vec![Point3::new(1.0, 2.0, 3.0); 3];
        assert_eq!(validate_array(&array, None), ArrayDiagnosis::Degenerate);

        let array = vec![Point3::new(1.0, 2.0, 3.0), Point3::new(f64::NAN, 2.0, 3.0)];
        assert!(validate_array(&array, None).is_corrupt());
    }

    #[test]
    fn single_precision_vectors_are_checked() {
        let array = vec![Vector3::new(0.0f32, 1.0, 0.0), Vector3::new(f32::NAN, 1.0, 0.0)];
        assert!(validate_array(&array, None).is_corrupt());
    }

    #[test]
    fn unchecked_types_always_ok() {
        let scalars = vec![f64::NAN; 4];
        assert_eq!(validate_array(&scalars, None), ArrayDiagnosis::Ok);

        let keys = vec![QuatKey::new(0.0, UnitQuaternion::identity()); 3];
        assert_eq!(validate_array(&keys, None), ArrayDiagnosis::Ok);

        let colors = vec![Color4::new(1.0, 1.0, 1.0, 1.0); 3];
        assert_eq!(validate_array(&colors, None), ArrayDiagnosis::Ok);
    }

    #[test]
    fn non_finite_detected_in_every_component() {
        let specials = [f64::NAN, f64::INFINITY, f64::NEG_INFINITY];
        for value in specials {
            for axis in 0..3 {
                let mut vector = Vector3::new(1.0_f64, 2.0, 3.0);
                vector[axis] = value;
                assert!(!vector.all_finite(), "{vector:?}");

                let point = Point3::from(vector);
                assert!(!point.all_finite(), "{point:?}");

                #[allow(clippy::cast_possible_truncation)]
                let single = vector.map(|c| c as f32);
                assert!(!single.all_finite(), "{single:?}");
            }
        }

        assert!(Vector3::new(1.0_f64, -2.0, 0.0).all_finite());
        assert!(Vector3::new(f32::MAX, f32::MIN, 0.0).all_finite());
        assert!(Point3::new(0.0, f64::MAX, f64::MIN_POSITIVE).all_finite());
    }

    #[test]
    fn previous_element_baseline_compares_exempt_neighbours() {
        let a = v(1.0, 0.0, 0.0);
        let b = v(0.0, 1.0, 0.0);
        let array = vec![a, b, a];
        let mask = [false, true, false];

        assert_eq!(
            validate_array(&array, Some(&mask)),
            ArrayDiagnosis::Degenerate
        );
        assert_eq!(
            validate_array_with_params(&array, Some(&mask), &ScrubParams::legacy()),
            ArrayDiagnosis::Ok
        );
    }

    #[test]
    fn legacy_skips_exempt_slots_entirely() {
        let params = ScrubParams::legacy();

        let array = vec![v(0.0, 0.0, 1.0), v(0.0, 1.0, 0.0), v(f64::NAN, 0.0, 0.0)];
        let mask = [false, false, true];
        assert_eq!(
            validate_array_with_params(&array, Some(&mask), &params),
            ArrayDiagnosis::Ok
        );

        let empty: Vec<Vector3<f64>> = Vec::new();
        assert_eq!(
            validate_array_with_params(&empty, None, &params),
            ArrayDiagnosis::Degenerate
        );

        let exempt = vec![v(0.0, 0.0, 0.0), v(1.0, 0.0, 0.0)];
        assert_eq!(
            validate_array_with_params(&exempt, Some(&[true, true]), &params),
            ArrayDiagnosis::Degenerate
        );
    }

    #[test]
    fn diagnosis_display() {
        assert!(ArrayDiagnosis::Corrupt { index: 4 }
            .to_string()
            .contains("INF/NAN"));
        assert_eq!(
            ArrayDiagnosis::Degenerate.to_string(),
            "all vectors are identical"
        );
        assert!(ArrayDiagnosis::Ok.is_ok());
        assert!(ArrayDiagnosis::Degenerate.is_degenerate());
    }
}
