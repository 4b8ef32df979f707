//! Basin Affinity: How Strongly a Point Belongs to an Attractor's Basin
//!
//! Affinity combines spatial distance with a coarse "compatibility"
//! derived from coordinate sums:
//!
//!   s(x) = (Σᵢ xᵢ) mod 7
//!
//!   c(p, a) = 1 / (1 + |s(p) - s(a)|)
//!
//!   A(p, a) = c(p, a) / (1 + 0.01·‖p - a‖)
//!
//! Both denominators are at least 1, so A ∈ (0, 1] for finite inputs,
//! with A = 1 only when the point sits on an attractor of equal signature.

use ndarray::ArrayView1;

use super::traits::Affinity;

/// Modulus of the coordinate-sum signature
pub const SIGNATURE_MODULUS: f64 = 7.0;

/// Distance attenuation factor
pub const DISTANCE_SCALE: f64 = 0.01;

/// Coordinate-sum signature in [0, 7)
///
/// Uses floored modulo so negative sums still land in [0, 7).
pub fn phase_signature(point: ArrayView1<f64>) -> f64 {
    point.sum().rem_euclid(SIGNATURE_MODULUS)
}

/// Compatibility of two signatures, in (0, 1]
pub fn compatibility(point_signature: f64, attractor_signature: f64) -> f64 {
    1.0 / (1.0 + (point_signature - attractor_signature).abs())
}

/// Reference affinity model: compatibility attenuated by distance
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BasinAffinity;

impl Affinity for BasinAffinity {
    fn affinity(&self, point: ArrayView1<f64>, attractor: ArrayView1<f64>) -> f64 {
        // hypot fold: no overflow for coordinates near f64::MAX
        let distance = point
            .iter()
            .zip(attractor.iter())
            .fold(0.0_f64, |acc, (&p, &a)| acc.hypot(p - a));

        let c = compatibility(phase_signature(point), phase_signature(attractor));
        c / (1.0 + distance * DISTANCE_SCALE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use ndarray::array;
    use proptest::prelude::*;

    #[test]
    fn test_signature_wraps_negative() {
        // -1 mod 7 = 6 with floored modulo
        assert_relative_eq!(phase_signature(array![-1.0, 0.0].view()), 6.0);
        assert_relative_eq!(phase_signature(array![3.0, 5.0].view()), 1.0);
        assert_relative_eq!(phase_signature(array![7.0, 14.0].view()), 0.0);
    }

    #[test]
    fn test_self_affinity_is_one() {
        let p = array![12.5, 40.0];
        assert_relative_eq!(BasinAffinity.affinity(p.view(), p.view()), 1.0);
    }

    #[test]
    fn test_known_value() {
        // distance 5, signatures 0 and 0 -> 1 / 1.05
        let p = array![0.0, 0.0];
        let a = array![3.0, 4.0];
        let expected = (1.0 / (1.0 + 0.0)) / (1.0 + 0.05);
        assert_relative_eq!(BasinAffinity.affinity(p.view(), a.view()), expected);

        // signatures 1 and 3 -> compatibility 1/3, distance 2
        let p = array![1.0, 0.0];
        let a = array![1.0, 2.0];
        let expected = (1.0 / 3.0) / (1.0 + 0.02);
        assert_relative_eq!(BasinAffinity.affinity(p.view(), a.view()), expected, epsilon = 1e-12);
    }

    #[test]
    fn test_decreasing_with_distance() {
        // Same signature (both sum to multiples of 7) at growing distance
        let a = array![0.0, 0.0];
        let near = BasinAffinity.affinity(array![7.0, 0.0].view(), a.view());
        let far = BasinAffinity.affinity(array![70.0, 0.0].view(), a.view());
        assert!(near > far);
    }

    #[test]
    fn test_huge_coordinates_stay_positive() {
        let origin = array![0.0, 0.0];
        for x in [1.0e160, 1.0e300, 1.0e308] {
            let a = BasinAffinity.affinity(array![x, 50.0].view(), origin.view());
            assert!(a > 0.0, "affinity underflowed at x = {}", x);
        }
        // Both coordinates large: naive squares overflow here
        let a = BasinAffinity.affinity(array![1.0e200, 1.0e200].view(), origin.view());
        assert!(a > 0.0 && a <= 1.0);
    }

    proptest! {
        #[test]
        fn affinity_bounded_for_extreme_points(
            px in -1.0e300f64..1.0e300, py in -1.0e300f64..1.0e300,
            ax in 0.0f64..100.0, ay in 0.0f64..100.0,
        ) {
            let a = BasinAffinity.affinity(array![px, py].view(), array![ax, ay].view());
            prop_assert!(a > 0.0);
            prop_assert!(a <= 1.0);
        }

        #[test]
        fn affinity_in_unit_interval(
            px in -1.0e6f64..1.0e6, py in -1.0e6f64..1.0e6,
            ax in -1.0e6f64..1.0e6, ay in -1.0e6f64..1.0e6,
        ) {
            let a = BasinAffinity.affinity(array![px, py].view(), array![ax, ay].view());
            prop_assert!(a > 0.0);
            prop_assert!(a <= 1.0);
        }

        #[test]
        fn compatibility_in_unit_interval(s in 0.0f64..7.0, t in 0.0f64..7.0) {
            let c = compatibility(s, t);
            prop_assert!(c > 0.0 && c <= 1.0);
        }
    }
}
