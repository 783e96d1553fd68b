//! Feature Layout - Centralized Feature Definition
//!
//! The classifier was trained on exactly this column order. Any change to the
//! names or their order breaks compatibility with the model artifact.

// ============================================================================
// FEATURE LAYOUT (Authoritative source)
// ============================================================================

/// Feature names in exact order they appear in the vector.
/// This is the SINGLE SOURCE OF TRUTH for feature layout; the names double
/// as the HTML form field names.
pub const FEATURE_LAYOUT: &[&str] = &[
    "Air temperature [K]",     // 0
    "Process temperature [K]", // 1
    "Rotational speed [rpm]",  // 2
    "Torque [Nm]",             // 3
    "Tool wear [min]",         // 4
    "Type_H",                  // 5
    "Type_L",                  // 6
    "Type_M",                  // 7
];

/// Total number of features
/// IMPORTANT: Must match FEATURE_LAYOUT.len()!
pub const FEATURE_COUNT: usize = 8;

// ============================================================================
// FEATURE INDEX LOOKUP
// ============================================================================

/// Get feature index by name (O(n) but features are few)
pub fn feature_index(name: &str) -> Option<usize> {
    FEATURE_LAYOUT.iter().position(|&n| n == name)
}

/// Get feature name by index
pub fn feature_name(index: usize) -> Option<&'static str> {
    FEATURE_LAYOUT.get(index).copied()
}

// ============================================================================
// TESTS
// ============================================================================
