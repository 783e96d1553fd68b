//! Form and prediction handlers

use std::collections::HashMap;

use axum::{
    extract::{Form, State},
    response::Html,
};

use crate::diagnosis::decode;
use crate::error::AppResult;
use crate::features::FeatureVector;
use crate::render;
use crate::AppState;

/// GET / - the input form. Pure presentation, no side effects.
pub async fn home() -> Html<String> {
    Html(render::form_page())
}

/// POST /predict - parse, predict, decode, render.
///
/// Fields may arrive in any order; parsing reorders them into the layout the
/// classifier was trained on. Any failure along the way is rendered by
/// `AppError` as a plain-text "Error: ..." body.
pub async fn predict(
    State(state): State<AppState>,
    Form(fields): Form<HashMap<String, String>>,
) -> AppResult<Html<String>> {
    let features = FeatureVector::from_form(&fields)?;

    tracing::debug!("running prediction for features {:?}", features.values);
    let output = state.classifier.predict(&features)?;

    let diagnosis = decode(&output)?;
    tracing::info!(
        is_failure = diagnosis.is_failure,
        categories = diagnosis.categories.len(),
        "prediction decoded"
    );

    Ok(Html(render::result_page(&diagnosis)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_home_serves_the_form() {
        let Html(page) = home().await;
        assert!(page.contains("Enter Data for Prediction"));
        assert!(page.contains(r#"name="Air temperature [K]""#));
    }
}
