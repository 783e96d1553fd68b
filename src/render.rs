//! HTML rendering for the input form and the result page
//!
//! Embedded HTML for portability; no templating engine. The form fields are
//! generated from FEATURE_LAYOUT so form names and vector layout cannot
//! drift apart.

use crate::diagnosis::Diagnosis;
use crate::features::FEATURE_LAYOUT;

// ============================================================================
// INPUT FORM
// ============================================================================

const FORM_HEAD: &str = r#"<!DOCTYPE html>
<html>
<head>
    <title>Predictive Maintenance</title>
    <link href="https://cdn.jsdelivr.net/npm/bootstrap@5.1.3/dist/css/bootstrap.min.css" rel="stylesheet">
    <style>
        .container { padding-top: 50px; max-width: 600px; }
    </style>
</head>
<body>
    <div class="container">
        <h2 class="mb-4 text-center">Enter Data for Prediction</h2>
        <form action="/predict" method="post">
"#;

const FORM_TAIL: &str = r#"            <button type="submit" class="btn btn-primary w-100">Predict</button>
        </form>
    </div>
</body>
</html>
"#;

/// Render the static input form with one required numeric field per feature
pub fn form_page() -> String {
    let mut page = String::from(FORM_HEAD);
    for name in FEATURE_LAYOUT {
        page.push_str(&format!(
            r#"            <div class="mb-3"><label class="form-label">{name}:</label>
            <input type="number" class="form-control" name="{name}" step="any" required></div>
"#
        ));
    }
    page.push_str(FORM_TAIL);
    page
}

// ============================================================================
// RESULT PAGE
// ============================================================================

/// Render the result page: status banner plus, when categories were
/// detected, one tips section per category from the static table.
pub fn result_page(diagnosis: &Diagnosis) -> String {
    let mut suggestions = String::new();
    if !diagnosis.categories.is_empty() {
        suggestions.push_str(
            r#"        <div class="suggestions">
            <h4>Failure Type(s) Detected:</h4>
            <ul>
"#,
        );
        for category in &diagnosis.categories {
            suggestions.push_str(&format!(
                "                <li><strong>{}</strong></li>\n",
                category.label()
            ));
        }
        suggestions.push_str("            </ul>\n");

        for category in &diagnosis.categories {
            suggestions.push_str(&format!(
                "            <h5>Tips to Prevent {}:</h5>\n            <ol>\n",
                category.label()
            ));
            for tip in category.tips() {
                suggestions.push_str(&format!("                <li>{}</li>\n", tip));
            }
            suggestions.push_str("            </ol>\n");
        }
        suggestions.push_str("        </div>\n");
    }

    format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <title>Prediction Result</title>
    <link href="https://cdn.jsdelivr.net/npm/bootstrap@5.1.3/dist/css/bootstrap.min.css" rel="stylesheet">
    <style>
        .container {{ padding-top: 50px; text-align: center; max-width: 600px; }}
        .result-box {{ padding: 30px; border-radius: 10px; font-size: 22px; font-weight: bold; }}
        .failure {{ background-color: #ff4d4d; color: white; }}
        .no-failure {{ background-color: #28a745; color: white; }}
        .suggestions {{ margin-top: 20px; padding: 20px; background-color: #f8f9fa; border-radius: 10px; text-align: left; }}
    </style>
</head>
<body>
    <div class="container">
        <h2>Prediction Result</h2>
        <div class="result-box {banner_class}">{banner_text}</div>
{suggestions}
        <a href="/" class="btn btn-primary mt-4">Try Again</a>
    </div>
</body>
</html>
"#,
        banner_class = diagnosis.banner_class(),
        banner_text = diagnosis.banner_text(),
        suggestions = suggestions,
    )
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnosis::FailureCategory;

    #[test]
    fn test_form_contains_every_field() {
        let page = form_page();
        for name in FEATURE_LAYOUT {
            assert!(
                page.contains(&format!(r#"name="{}""#, name)),
                "missing field {}",
                name
            );
        }
        assert!(page.contains(r#"action="/predict""#));
    }

    #[test]
    fn test_healthy_result_has_no_suggestions() {
        let page = result_page(&Diagnosis {
            is_failure: false,
            categories: vec![],
        });
        assert!(page.contains("no-failure"));
        assert!(page.contains("No Failure"));
        assert!(!page.contains("suggestions"));
    }

    #[test]
    fn test_failure_result_lists_categories_and_tips() {
        let page = result_page(&Diagnosis {
            is_failure: true,
            categories: vec![FailureCategory::HeatDissipation, FailureCategory::Overstrain],
        });
        assert!(page.contains(r#"result-box failure"#));
        assert!(page.contains("Machine Failure Detected!"));
        assert!(page.contains("Heat Dissipation Failure"));
        assert!(page.contains("Overstrain Failure"));
        assert!(page.contains("Ensure proper cooling system operation."));
        assert!(page.contains("Reduce excessive load on machinery."));
        // Index order preserved
        let hdf = page.find("Heat Dissipation Failure").unwrap();
        let osf = page.find("Overstrain Failure").unwrap();
        assert!(hdf < osf);
    }

    #[test]
    fn test_unknown_failure_tips_rendered() {
        let page = result_page(&Diagnosis {
            is_failure: true,
            categories: vec![FailureCategory::Unknown],
        });
        assert!(page.contains("Tips to Prevent Unknown Failure:"));
        assert!(page.contains("Run detailed diagnostics to identify unknown issues."));
    }
}
