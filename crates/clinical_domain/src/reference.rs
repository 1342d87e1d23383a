//! Baseline values of a healthy patient, used only for the radar
//! comparison. Immutable for the process lifetime.

pub const REFERENCE_AXIS_COUNT: usize = 5;

/// Axis order of the radar chart.
pub const HEALTHY_REFERENCE: [(&str, f64); REFERENCE_AXIS_COUNT] = [
    ("age", 30.0),
    ("trestbps", 120.0),
    ("chol", 200.0),
    ("thalach", 170.0),
    ("oldpeak", 0.0),
];

pub fn reference_value(name: &str) -> Option<f64> {
    HEALTHY_REFERENCE
        .iter()
        .find(|(axis, _)| *axis == name)
        .map(|(_, value)| *value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::feature;

    #[test]
    fn reference_axes_are_a_subset_of_the_schema() {
        for (name, _) in &HEALTHY_REFERENCE {
            assert!(feature(name).is_some(), "'{name}' is not a schema feature");
        }
    }

    #[test]
    fn axis_order_is_fixed() {
        let axes: Vec<&str> = HEALTHY_REFERENCE.iter().map(|(name, _)| *name).collect();
        assert_eq!(axes, vec!["age", "trestbps", "chol", "thalach", "oldpeak"]);
    }

    #[test]
    fn lookup_by_name() {
        assert_eq!(reference_value("chol"), Some(200.0));
        assert_eq!(reference_value("sex"), None);
    }
}
