//! Data-driven axis domain calculator.
//!
//! Derives a sensible (min, max) range and padding for a numeric axis,
//! adapting to data variance so charts neither over-zoom flat series nor
//! under-zoom volatile ones.

use insight_core::{AxisBound, AxisScale, Domain, ScaleType};

/// Padding heuristic per chart family.
///
/// Scatter plots get lighter padding than line/bar/combo charts so point
/// clustering stays visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PaddingProfile {
    #[default]
    Standard,
    Scatter,
}

impl PaddingProfile {
    fn flat_percent(&self) -> f64 {
        match self {
            Self::Standard => 10.0,
            Self::Scatter => 5.0,
        }
    }

    /// Map the coefficient of variation to a padding percentage.
    /// Near-flat series need heavy padding to avoid a misleading zoom;
    /// highly volatile series need little.
    fn percent_for_cv(&self, cv: f64) -> f64 {
        let bands: [f64; 5] = match self {
            Self::Standard => [25.0, 20.0, 10.0, 8.0, 5.0],
            Self::Scatter => [20.0, 15.0, 8.0, 5.0, 3.0],
        };

        if cv < 0.05 {
            bands[0]
        } else if cv < 0.15 {
            bands[1]
        } else if cv < 0.50 {
            bands[2]
        } else if cv < 1.0 {
            bands[3]
        } else {
            bands[4]
        }
    }
}

/// Padding percentage for a value extent, derived from the coefficient of
/// variation `(max - min) / |midpoint|`
pub fn smart_padding(min: f64, max: f64, profile: PaddingProfile) -> f64 {
    let range = max - min;

    if range == 0.0 {
        return profile.flat_percent();
    }

    let midpoint = (min + max) / 2.0;
    if midpoint == 0.0 {
        return profile.flat_percent();
    }

    profile.percent_for_cv(range / midpoint.abs())
}

/// Compute the axis domain for the given numeric values and scale directive.
///
/// Pure: fixed inputs always yield identical output. Non-finite inputs are
/// discarded before any arithmetic so NaN cannot propagate into the bounds.
pub fn compute_domain(values: &[f64], axis: &AxisScale, profile: PaddingProfile) -> Domain {
    // Explicit caller bounds always win, whatever the scale mode says
    if let Some((min, max)) = axis.bounds {
        return (AxisBound::Value(min), AxisBound::Value(max));
    }

    match axis.scale {
        ScaleType::Percentage => (AxisBound::Value(0.0), AxisBound::Value(100.0)),
        ScaleType::FromZero | ScaleType::Custom => (AxisBound::Value(0.0), AxisBound::Auto),
        ScaleType::Auto => {
            let finite: Vec<f64> = values.iter().copied().filter(|v| v.is_finite()).collect();
            if finite.is_empty() {
                return (AxisBound::Value(0.0), AxisBound::Auto);
            }

            let min = finite.iter().copied().fold(f64::MAX, f64::min);
            let max = finite.iter().copied().fold(f64::MIN, f64::max);

            // Straddling zero: defer to the renderer rather than risk an
            // asymmetric pad around the sign change
            if min < 0.0 && max > 0.0 {
                return (AxisBound::Auto, AxisBound::Auto);
            }

            let percent = axis
                .padding_percent
                .unwrap_or_else(|| smart_padding(min, max, profile));

            let range = max - min;
            let padding = range * (percent / 100.0);

            let padded_min = (min - padding).max(0.0);
            let padded_max = max + padding;

            (
                AxisBound::Value(padded_min.floor()),
                AxisBound::Value(padded_max.ceil()),
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn auto() -> AxisScale {
        AxisScale::auto()
    }

    #[test]
    fn test_volatile_series_gets_light_padding() {
        // range 900, midpoint 550, cv ~1.64 -> 5% -> padding 45
        let domain = compute_domain(&[100.0, 1000.0], &auto(), PaddingProfile::Standard);
        assert_eq!(domain, (AxisBound::Value(55.0), AxisBound::Value(1045.0)));
    }

    #[test]
    fn test_near_flat_series_gets_heavy_padding() {
        // range 4, midpoint 102, cv ~0.039 -> 25% -> padding 1
        let domain = compute_domain(&[100.0, 104.0], &auto(), PaddingProfile::Standard);
        assert_eq!(domain, (AxisBound::Value(99.0), AxisBound::Value(105.0)));
    }

    #[test]
    fn test_padding_bands() {
        assert_eq!(smart_padding(100.0, 104.0, PaddingProfile::Standard), 25.0);
        assert_eq!(smart_padding(100.0, 110.0, PaddingProfile::Standard), 20.0);
        assert_eq!(smart_padding(100.0, 130.0, PaddingProfile::Standard), 10.0);
        assert_eq!(smart_padding(100.0, 190.0, PaddingProfile::Standard), 8.0);
        assert_eq!(smart_padding(100.0, 1000.0, PaddingProfile::Standard), 5.0);

        assert_eq!(smart_padding(100.0, 104.0, PaddingProfile::Scatter), 20.0);
        assert_eq!(smart_padding(100.0, 110.0, PaddingProfile::Scatter), 15.0);
        assert_eq!(smart_padding(100.0, 130.0, PaddingProfile::Scatter), 8.0);
        assert_eq!(smart_padding(100.0, 190.0, PaddingProfile::Scatter), 5.0);
        assert_eq!(smart_padding(100.0, 1000.0, PaddingProfile::Scatter), 3.0);
    }

    #[test]
    fn test_flat_data_stays_finite() {
        let domain = compute_domain(&[50.0, 50.0, 50.0], &auto(), PaddingProfile::Standard);
        let (lo, hi) = domain;
        let lo = lo.value().unwrap();
        let hi = hi.value().unwrap();
        assert!(lo.is_finite() && hi.is_finite());
        // Flat data takes the 10% band of a zero range: both bounds collapse
        // to the value itself, still well formed
        assert_eq!((lo, hi), (50.0, 50.0));
    }

    #[test]
    fn test_zero_midpoint_stays_finite() {
        let domain = compute_domain(&[-20.0, 20.0], &auto(), PaddingProfile::Standard);
        assert_eq!(domain, (AxisBound::Auto, AxisBound::Auto));
    }

    #[test]
    fn test_straddling_zero_defers_both_bounds() {
        let domain = compute_domain(&[-5.0, 120.0], &auto(), PaddingProfile::Standard);
        assert_eq!(domain, (AxisBound::Auto, AxisBound::Auto));
    }

    #[test]
    fn test_percentage_ignores_data() {
        let axis = AxisScale::percentage();
        let domain = compute_domain(&[33.0, 420.0], &axis, PaddingProfile::Standard);
        assert_eq!(domain, (AxisBound::Value(0.0), AxisBound::Value(100.0)));
    }

    #[test]
    fn test_from_zero_pins_lower_bound() {
        let axis = AxisScale::from_zero();
        let domain = compute_domain(&[33.0, 420.0], &axis, PaddingProfile::Standard);
        assert_eq!(domain, (AxisBound::Value(0.0), AxisBound::Auto));
    }

    #[test]
    fn test_custom_bounds_always_win() {
        let axis = AxisScale::custom(10.0, 90.0);
        let domain = compute_domain(&[33.0, 420.0], &axis, PaddingProfile::Standard);
        assert_eq!(domain, (AxisBound::Value(10.0), AxisBound::Value(90.0)));

        // Even in percentage mode, explicit bounds override
        let axis = AxisScale {
            scale: ScaleType::Percentage,
            bounds: Some((5.0, 45.0)),
            padding_percent: None,
        };
        let domain = compute_domain(&[], &axis, PaddingProfile::Standard);
        assert_eq!(domain, (AxisBound::Value(5.0), AxisBound::Value(45.0)));
    }

    #[test]
    fn test_empty_values_fall_back() {
        let domain = compute_domain(&[], &auto(), PaddingProfile::Standard);
        assert_eq!(domain, (AxisBound::Value(0.0), AxisBound::Auto));
    }

    #[test]
    fn test_percentage_holds_even_without_values() {
        // The fixed 0-100 window applies before any data inspection, so an
        // empty dataset in percentage mode does not degrade to (0, auto)
        let axis = AxisScale::percentage();
        let domain = compute_domain(&[], &axis, PaddingProfile::Standard);
        assert_eq!(domain, (AxisBound::Value(0.0), AxisBound::Value(100.0)));
    }

    #[test]
    fn test_non_finite_values_are_discarded() {
        let domain = compute_domain(
            &[f64::NAN, 100.0, f64::INFINITY, 1000.0],
            &auto(),
            PaddingProfile::Standard,
        );
        assert_eq!(domain, (AxisBound::Value(55.0), AxisBound::Value(1045.0)));
    }

    #[test]
    fn test_padding_percent_override() {
        let axis = AxisScale {
            scale: ScaleType::Auto,
            bounds: None,
            padding_percent: Some(50.0),
        };
        let domain = compute_domain(&[100.0, 200.0], &axis, PaddingProfile::Standard);
        assert_eq!(domain, (AxisBound::Value(50.0), AxisBound::Value(250.0)));
    }

    #[test]
    fn test_deterministic_on_repeated_calls() {
        let values = [3.7, 812.4, 55.0, 209.9];
        let first = compute_domain(&values, &auto(), PaddingProfile::Scatter);
        for _ in 0..10 {
            assert_eq!(compute_domain(&values, &auto(), PaddingProfile::Scatter), first);
        }
    }
}
