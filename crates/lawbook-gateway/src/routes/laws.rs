//! Law submission form endpoints.

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{Html, IntoResponse, Response},
    routing::get,
    Form, Router,
};
use lawbook_core::{process_submission, LawForm};

use crate::config::GatewayConfig;
use crate::error::AppError;
use crate::view::{render_form_page, render_success_page};
use crate::{AppState, FORM_PATH};

/// Form and confirmation routes.
pub fn routes(config: &GatewayConfig) -> Router<AppState> {
    Router::new()
        .route(
            FORM_PATH,
            get(show_form).post(submit_law).fallback(show_form),
        )
        .route(&config.success_path, get(show_confirmation))
}

/// Render the empty form. Answers every method except POST.
async fn show_form() -> Html<String> {
    Html(render_form_page(FORM_PATH, None))
}

/// Handle a form submission.
///
/// A body that cannot be read as a form counts as a submission with both
/// fields empty.
async fn submit_law(
    State(state): State<AppState>,
    form: Option<Form<LawForm>>,
) -> Result<Response, AppError> {
    let form = form.map(|Form(form)| form).unwrap_or_default();

    process_submission(state.store.as_ref(), &form).await?;

    Ok((
        StatusCode::FOUND,
        [(header::LOCATION, state.config.success_path.clone())],
    )
        .into_response())
}

/// Confirmation page shown after a redirect.
async fn show_confirmation() -> Html<String> {
    Html(render_success_page(FORM_PATH))
}
