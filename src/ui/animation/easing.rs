//! Easing curves mapping elapsed-time fraction to interpolation fraction

/// Interpolation curve for value transitions
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Easing {
    /// Constant rate
    Linear,
    /// Fast start, slow finish: `1 - (1 - t)^(2 * factor)`
    ///
    /// `factor` must be positive; smaller values (and NaN) are raised to
    /// [`Easing::MIN_FACTOR`].
    Decelerate { factor: f32 },
}

impl Default for Easing {
    fn default() -> Self {
        Self::DECELERATE
    }
}

impl Easing {
    /// Quadratic ease-out
    pub const DECELERATE: Easing = Easing::Decelerate { factor: 1.0 };

    /// Smallest decelerate factor that still reaches 1.0 at `t = 1`
    pub const MIN_FACTOR: f32 = 1e-3;

    /// Map a time fraction in [0, 1] to an interpolation fraction in [0, 1]
    ///
    /// Out-of-range input is clamped, so `apply(0.0) == 0.0` and
    /// `apply(1.0) == 1.0` hold for every curve.
    pub fn apply(self, t: f32) -> f32 {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        match self {
            Easing::Linear => t,
            Easing::Decelerate { factor } if factor == 1.0 => 1.0 - (1.0 - t) * (1.0 - t),
            Easing::Decelerate { factor } => {
                1.0 - (1.0 - t).powf(2.0 * factor.max(Self::MIN_FACTOR))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoints_are_exact() {
        for easing in [Easing::Linear, Easing::DECELERATE, Easing::Decelerate { factor: 2.5 }] {
            assert_eq!(easing.apply(0.0), 0.0);
            assert_eq!(easing.apply(1.0), 1.0);
        }
    }

    #[test]
    fn test_decelerate_is_monotonic_and_slows_down() {
        let easing = Easing::DECELERATE;
        let mut previous = 0.0;
        let mut previous_step = f32::MAX;
        for i in 1..=20 {
            let value = easing.apply(i as f32 / 20.0);
            let step = value - previous;
            assert!(value >= previous);
            assert!(step <= previous_step + f32::EPSILON);
            previous = value;
            previous_step = step;
        }
    }

    #[test]
    fn test_decelerate_leads_linear() {
        assert!(Easing::DECELERATE.apply(0.5) > Easing::Linear.apply(0.5));
        assert_eq!(Easing::DECELERATE.apply(0.5), 0.75);
    }

    #[test]
    fn test_non_positive_factor_keeps_endpoints() {
        for factor in [0.0, -3.0, f32::NAN] {
            let easing = Easing::Decelerate { factor };
            assert_eq!(easing.apply(0.0), 0.0);
            assert_eq!(easing.apply(1.0), 1.0);
            assert!(easing.apply(0.5) >= 0.0 && easing.apply(0.5) <= 1.0);
        }
    }

    #[test]
    fn test_out_of_range_is_clamped() {
        assert_eq!(Easing::DECELERATE.apply(-1.0), 0.0);
        assert_eq!(Easing::DECELERATE.apply(3.0), 1.0);
        assert_eq!(Easing::Linear.apply(f32::NAN), 0.0);
    }
}
