//! Diagnosis Types
//!
//! Data structures only - decoding logic lives in `decode.rs`.

use serde::{Deserialize, Serialize};

// ============================================================================
// FAILURE CATEGORIES
// ============================================================================

/// Named failure classifications, a closed set.
///
/// The first five correspond to the classifier's sub-type outputs; `Unknown`
/// is the fallback when the machine-failure flag is raised with no sub-type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FailureCategory {
    ToolWear,
    HeatDissipation,
    Power,
    Overstrain,
    Random,
    Unknown,
}

impl FailureCategory {
    /// Full display name
    pub fn label(&self) -> &'static str {
        match self {
            FailureCategory::ToolWear => "Tool Wear Failure",
            FailureCategory::HeatDissipation => "Heat Dissipation Failure",
            FailureCategory::Power => "Power Failure",
            FailureCategory::Overstrain => "Overstrain Failure",
            FailureCategory::Random => "Random Failure",
            FailureCategory::Unknown => "Unknown Failure",
        }
    }

    /// Static remediation tips for this category
    pub fn tips(&self) -> &'static [&'static str] {
        match self {
            FailureCategory::ToolWear => &[
                "Regularly replace worn-out tools.",
                "Maintain proper lubrication to reduce wear.",
                "Use high-quality cutting materials for durability.",
            ],
            FailureCategory::HeatDissipation => &[
                "Ensure proper cooling system operation.",
                "Maintain air temperature to avoid overheating.",
                "Regularly check heat sinks & ventilation.",
            ],
            FailureCategory::Power => &[
                "Use stable power sources with surge protectors.",
                "Regularly inspect power cables & connections.",
                "Implement backup power solutions if needed.",
            ],
            FailureCategory::Overstrain => &[
                "Reduce excessive load on machinery.",
                "Implement gradual stress-testing on materials.",
                "Regularly inspect machine components for stress fractures.",
            ],
            FailureCategory::Random => &[
                "Conduct routine maintenance checks.",
                "Analyze historical failure patterns for insights.",
                "Improve system redundancy for better reliability.",
            ],
            FailureCategory::Unknown => &[
                "Run detailed diagnostics to identify unknown issues.",
                "Review machine logs for anomalies.",
                "Consult maintenance experts for further investigation.",
            ],
        }
    }
}

impl std::fmt::Display for FailureCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

// ============================================================================
// DIAGNOSIS
// ============================================================================

/// Decoded prediction: the machine-failure flag plus detected categories.
/// Lives only for the duration of one request/response cycle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Diagnosis {
    pub is_failure: bool,
    pub categories: Vec<FailureCategory>,
}

impl Diagnosis {
    /// Banner text for the result page
    pub fn banner_text(&self) -> &'static str {
        if self.is_failure {
            "\u{26a0}\u{fe0f} Machine Failure Detected!"
        } else {
            "\u{2705} No Failure"
        }
    }

    /// CSS class selecting the banner's visual state
    pub fn banner_class(&self) -> &'static str {
        if self.is_failure {
            "failure"
        } else {
            "no-failure"
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels() {
        assert_eq!(FailureCategory::ToolWear.label(), "Tool Wear Failure");
        assert_eq!(
            FailureCategory::HeatDissipation.label(),
            "Heat Dissipation Failure"
        );
        assert_eq!(FailureCategory::Unknown.label(), "Unknown Failure");
    }

    #[test]
    fn test_every_category_has_tips() {
        let all = [
            FailureCategory::ToolWear,
            FailureCategory::HeatDissipation,
            FailureCategory::Power,
            FailureCategory::Overstrain,
            FailureCategory::Random,
            FailureCategory::Unknown,
        ];
        for category in all {
            assert_eq!(category.tips().len(), 3, "{}", category);
        }
    }

    #[test]
    fn test_banner_states() {
        let failure = Diagnosis {
            is_failure: true,
            categories: vec![FailureCategory::Unknown],
        };
        assert_eq!(failure.banner_class(), "failure");

        let healthy = Diagnosis {
            is_failure: false,
            categories: vec![],
        };
        assert_eq!(healthy.banner_class(), "no-failure");
        assert!(healthy.banner_text().contains("No Failure"));
    }
}
