use inference_engine::PredictionResult;
use serde::Serialize;

/// Display-only color zones of the gauge. They never feed back into the
/// class decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RiskBand {
    Low,
    Medium,
    High,
}

/// Band boundaries on the 0..=100 gauge scale.
pub const BAND_STOPS: [(f64, f64, RiskBand); 3] = [
    (0.0, 30.0, RiskBand::Low),
    (30.0, 60.0, RiskBand::Medium),
    (60.0, 100.0, RiskBand::High),
];

impl RiskBand {
    pub fn of(value: f64) -> RiskBand {
        if value < 30.0 {
            RiskBand::Low
        } else if value < 60.0 {
            RiskBand::Medium
        } else {
            RiskBand::High
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            RiskBand::Low => "low",
            RiskBand::Medium => "medium",
            RiskBand::High => "high",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GaugeSpec {
    /// Bar value on the 0..=100 scale.
    pub value: f64,
    /// Threshold marker, drawn at the same value as the bar.
    pub threshold: f64,
    pub band: RiskBand,
}

/// `None` when the model exposes no probability: the gauge is omitted
/// entirely and the verdict banner renders alone.
pub fn gauge(result: &PredictionResult) -> Option<GaugeSpec> {
    let value = result.probability? * 100.0;
    Some(GaugeSpec { value, threshold: value, band: RiskBand::of(value) })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gauge_value_is_probability_times_hundred() {
        let result = PredictionResult { predicted_class: 1, probability: Some(0.72) };
        let spec = gauge(&result).unwrap();
        assert_eq!(spec.value, 72.0);
        assert_eq!(spec.threshold, 72.0);
        assert_eq!(spec.band, RiskBand::High);
        assert_eq!(spec.band.label(), "high");
    }

    #[test]
    fn gauge_is_omitted_without_probability() {
        let result = PredictionResult { predicted_class: 1, probability: None };
        assert!(gauge(&result).is_none());
    }

    #[test]
    fn band_edges() {
        assert_eq!(RiskBand::of(0.0), RiskBand::Low);
        assert_eq!(RiskBand::of(29.9), RiskBand::Low);
        assert_eq!(RiskBand::of(30.0), RiskBand::Medium);
        assert_eq!(RiskBand::of(59.9), RiskBand::Medium);
        assert_eq!(RiskBand::of(60.0), RiskBand::High);
        assert_eq!(RiskBand::of(100.0), RiskBand::High);
    }

    #[test]
    fn band_stops_cover_the_whole_scale() {
        assert_eq!(BAND_STOPS[0].0, 0.0);
        assert_eq!(BAND_STOPS[2].1, 100.0);
        for window in BAND_STOPS.windows(2) {
            assert_eq!(window[0].1, window[1].0);
        }
    }
}
