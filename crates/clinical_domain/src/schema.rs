//! The ordered feature schema of the trained classifier.
//!
//! Order is significant: element `i` of the inference vector is the value
//! of `FEATURES[i]`, matching the column order the model was trained on.

/// One selectable option of a coded feature. The label is what the user
/// sees; the code is what the model consumes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CodedOption {
    pub code: u8,
    pub label: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FeatureDomain {
    Numeric {
        min: f64,
        max: f64,
        step: f64,
        default: f64,
    },
    /// The first listed option is the default, and the list order is the
    /// display order of the selector.
    Coded { options: &'static [CodedOption] },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeatureDef {
    pub name: &'static str,
    pub label: &'static str,
    pub domain: FeatureDomain,
}

pub const FEATURE_COUNT: usize = 13;

pub const FEATURES: [FeatureDef; FEATURE_COUNT] = [
    FeatureDef {
        name: "age",
        label: "Age (years)",
        domain: FeatureDomain::Numeric {
            min: 1.0,
            max: 120.0,
            step: 1.0,
            default: 45.0,
        },
    },
    FeatureDef {
        name: "sex",
        label: "Sex",
        domain: FeatureDomain::Coded {
            options: &[
                CodedOption { code: 1, label: "Male" },
                CodedOption { code: 0, label: "Female" },
            ],
        },
    },
    FeatureDef {
        name: "cp",
        label: "Chest Pain Type",
        domain: FeatureDomain::Coded {
            options: &[
                CodedOption { code: 0, label: "Typical Angina" },
                CodedOption { code: 1, label: "Atypical Angina" },
                CodedOption { code: 2, label: "Non-anginal" },
                CodedOption { code: 3, label: "Asymptomatic" },
            ],
        },
    },
    FeatureDef {
        name: "trestbps",
        label: "Resting BP (mm Hg)",
        domain: FeatureDomain::Numeric {
            min: 50.0,
            max: 250.0,
            step: 1.0,
            default: 130.0,
        },
    },
    FeatureDef {
        name: "chol",
        label: "Serum Cholesterol (mg/dl)",
        domain: FeatureDomain::Numeric {
            min: 80.0,
            max: 650.0,
            step: 1.0,
            default: 246.0,
        },
    },
    FeatureDef {
        name: "fbs",
        label: "Fasting Blood Sugar > 120 mg/dl",
        domain: FeatureDomain::Coded {
            options: &[
                CodedOption { code: 1, label: "Yes" },
                CodedOption { code: 0, label: "No" },
            ],
        },
    },
    FeatureDef {
        name: "restecg",
        label: "Resting ECG Results",
        domain: FeatureDomain::Coded {
            options: &[
                CodedOption { code: 0, label: "Normal" },
                CodedOption { code: 1, label: "ST-T abnormality" },
                CodedOption { code: 2, label: "LV Hypertrophy" },
            ],
        },
    },
    FeatureDef {
        name: "thalach",
        label: "Max Heart Rate Achieved",
        domain: FeatureDomain::Numeric {
            min: 60.0,
            max: 250.0,
            step: 1.0,
            default: 150.0,
        },
    },
    FeatureDef {
        name: "exang",
        label: "Exercise Induced Angina",
        domain: FeatureDomain::Coded {
            options: &[
                CodedOption { code: 1, label: "Yes" },
                CodedOption { code: 0, label: "No" },
            ],
        },
    },
    FeatureDef {
        name: "oldpeak",
        label: "ST Depression (oldpeak)",
        domain: FeatureDomain::Numeric {
            min: 0.0,
            max: 10.0,
            step: 0.1,
            default: 1.0,
        },
    },
    FeatureDef {
        name: "slope",
        label: "Slope of ST Segment",
        domain: FeatureDomain::Coded {
            options: &[
                CodedOption { code: 0, label: "Upsloping" },
                CodedOption { code: 1, label: "Flat" },
                CodedOption { code: 2, label: "Downsloping" },
            ],
        },
    },
    FeatureDef {
        name: "ca",
        label: "Major Vessels Colored (0-4)",
        domain: FeatureDomain::Coded {
            options: &[
                CodedOption { code: 0, label: "0" },
                CodedOption { code: 1, label: "1" },
                CodedOption { code: 2, label: "2" },
                CodedOption { code: 3, label: "3" },
                CodedOption { code: 4, label: "4" },
            ],
        },
    },
    FeatureDef {
        name: "thal",
        label: "Thalassemia",
        domain: FeatureDomain::Coded {
            options: &[
                CodedOption { code: 0, label: "Normal" },
                CodedOption { code: 1, label: "Fixed Defect" },
                CodedOption { code: 2, label: "Reversible Defect" },
                CodedOption { code: 3, label: "Other" },
            ],
        },
    },
];

impl FeatureDef {
    pub fn default_value(&self) -> f64 {
        match self.domain {
            FeatureDomain::Numeric { default, .. } => default,
            FeatureDomain::Coded { options } => options[0].code as f64,
        }
    }

    /// Whether a value lies in this feature's declared domain.
    pub fn contains(&self, value: f64) -> bool {
        match self.domain {
            FeatureDomain::Numeric { min, max, .. } => value >= min && value <= max,
            FeatureDomain::Coded { options } => {
                options.iter().any(|option| value == option.code as f64)
            }
        }
    }
}

pub fn feature(name: &str) -> Option<&'static FeatureDef> {
    FEATURES.iter().find(|feature| feature.name == name)
}
