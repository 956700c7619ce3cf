//! Control-limit calculation: the G, T, and I chart conventions.
//!
//! Each variant is an independent pure function from a sample to a
//! `{cl, ucl, lcl}` triple. The lower limit is clamped at zero in every
//! variant. Samples too small for a variant produce the zero triple instead
//! of an error (empty for T, fewer than two points for I).

use crate::models::ChartType;
use serde::{Deserialize, Serialize};

/// `d2` bias-correction constant for moving ranges of subgroup size 2.
const D2_SUBGROUP_2: f64 = 1.128;

/// Center line and control limits, in the units of the input sample.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct ControlLimits {
    pub cl: f64,
    pub ucl: f64,
    pub lcl: f64,
}

impl ControlLimits {
    const ZERO: ControlLimits = ControlLimits {
        cl: 0.0,
        ucl: 0.0,
        lcl: 0.0,
    };

    /// Compute the limits for `values` under the given chart convention.
    pub fn for_chart(kind: ChartType, values: &[f64]) -> Self {
        match kind {
            ChartType::G => g_chart_limits(values),
            ChartType::I => i_chart_limits(values),
            ChartType::T => t_chart_limits(values),
        }
    }

    /// Whether `value` falls outside the `[lcl, ucl]` band.
    pub fn is_out_of_control(&self, value: f64) -> bool {
        value > self.ucl || value < self.lcl
    }
}

fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

/// G-chart limits for Poisson-like counts (variance ≈ mean):
/// `ucl/lcl = cl ± 3·sqrt(cl)`.
///
/// The sample is required to be non-empty by contract; this is not enforced,
/// and an empty sample yields a NaN triple by IEEE arithmetic rather than a
/// panic.
pub fn g_chart_limits(values: &[f64]) -> ControlLimits {
    let cl = mean(values);
    let spread = 3.0 * cl.sqrt();
    ControlLimits {
        cl,
        ucl: cl + spread,
        lcl: (cl - spread).max(0.0),
    }
}

/// T-chart limits from the sample range: `ucl/lcl = cl ± 0.5·(max − min)`.
pub fn t_chart_limits(values: &[f64]) -> ControlLimits {
    if values.is_empty() {
        return ControlLimits::ZERO;
    }
    let cl = mean(values);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let half_range = 0.5 * (max - min);
    ControlLimits {
        cl,
        ucl: cl + half_range,
        lcl: (cl - half_range).max(0.0),
    }
}

/// I-chart (individuals) limits from the average moving range:
/// `sigma = mr_bar / d2`, `ucl/lcl = cl ± 3·sigma`.
pub fn i_chart_limits(values: &[f64]) -> ControlLimits {
    if values.len() < 2 {
        return ControlLimits::ZERO;
    }
    let cl = mean(values);
    let moving_ranges: Vec<f64> = values.windows(2).map(|w| (w[1] - w[0]).abs()).collect();
    let mr_bar = mean(&moving_ranges);
    let sigma = mr_bar / D2_SUBGROUP_2;
    ControlLimits {
        cl,
        ucl: cl + 3.0 * sigma,
        lcl: (cl - 3.0 * sigma).max(0.0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) {
        assert!((a - b).abs() < 1e-9, "{a} != {b}");
    }

    #[test]
    fn g_chart_poisson_band() {
        let limits = g_chart_limits(&[9.0, 16.0, 25.0]);
        let cl = 50.0 / 3.0;
        close(limits.cl, cl);
        close(limits.ucl, cl + 3.0 * cl.sqrt());
        close(limits.lcl, cl - 3.0 * cl.sqrt());
        assert!(limits.ucl >= limits.cl && limits.cl >= limits.lcl && limits.lcl >= 0.0);
    }

    #[test]
    fn t_chart_half_range_band() {
        let limits = t_chart_limits(&[4.0, 8.0, 2.0, 6.0]);
        close(limits.cl, 5.0);
        close(limits.ucl, 8.0);
        close(limits.lcl, 2.0);
    }

    #[test]
    fn t_chart_empty_sample_is_zero() {
        assert_eq!(t_chart_limits(&[]), ControlLimits::ZERO);
    }

    #[test]
    fn i_chart_moving_range_band() {
        // moving ranges [2, 1, 2], mr_bar = 5/3
        let limits = i_chart_limits(&[10.0, 12.0, 11.0, 13.0]);
        let sigma = (5.0 / 3.0) / 1.128;
        close(limits.cl, 11.5);
        close(limits.ucl, 11.5 + 3.0 * sigma);
        close(limits.lcl, 11.5 - 3.0 * sigma);
        assert!(limits.lcl >= 0.0);
    }

    #[test]
    fn i_chart_single_point_is_zero() {
        assert_eq!(i_chart_limits(&[]), ControlLimits::ZERO);
        assert_eq!(i_chart_limits(&[42.0]), ControlLimits::ZERO);
    }

    #[test]
    fn lcl_never_negative() {
        // Spread far exceeds the mean; the raw lower limit would be negative.
        let g = g_chart_limits(&[0.5, 1.5]);
        assert_eq!(g.lcl, 0.0);
        let i = i_chart_limits(&[1.0, 100.0, 1.0]);
        assert_eq!(i.lcl, 0.0);
        let t = t_chart_limits(&[1.0, 100.0]);
        assert_eq!(t.lcl, 0.0);
    }

    #[test]
    fn dispatch_selects_variant() {
        let values = [4.0, 8.0, 2.0, 6.0];
        assert_eq!(
            ControlLimits::for_chart(ChartType::T, &values),
            t_chart_limits(&values)
        );
        assert_eq!(
            ControlLimits::for_chart(ChartType::G, &values),
            g_chart_limits(&values)
        );
        assert_eq!(
            ControlLimits::for_chart(ChartType::I, &values),
            i_chart_limits(&values)
        );
    }

    #[test]
    fn out_of_control_classification() {
        let limits = t_chart_limits(&[4.0, 8.0, 2.0, 6.0]);
        assert!(!limits.is_out_of_control(5.0));
        assert!(limits.is_out_of_control(8.1));
        assert!(limits.is_out_of_control(1.9));
    }
}
