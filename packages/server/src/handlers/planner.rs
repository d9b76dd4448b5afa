use axum::{
    extract::State,
    response::{Html, IntoResponse, Redirect, Response},
};
use axum_extra::extract::cookie::{CookieJar, SignedCookieJar};
use tracing::instrument;

use crate::error::AppError;
use crate::extractors::form::LenientForm;
use crate::models::submission::{Field, SubmissionForm};
use crate::state::AppState;
use crate::utils::flash;
use crate::views;

/// Serve the empty planner form along with any messages flashed by the
/// previous request.
#[instrument(skip_all)]
pub async fn show_form(
    State(state): State<AppState>,
    signed: SignedCookieJar,
    raw: CookieJar,
) -> (CookieJar, Html<String>) {
    let (raw, messages) = flash::take(&signed, raw, state.flash_cookie());
    (raw, views::form_page(&messages))
}

/// Handle a form submission.
///
/// A blank field sends the user back to the form with one flashed message per
/// missing field. A complete submission is echoed on the results page.
#[instrument(skip_all)]
pub async fn submit(
    State(state): State<AppState>,
    jar: SignedCookieJar,
    LenientForm(form): LenientForm<SubmissionForm>,
) -> Result<Response, AppError> {
    match form.validate() {
        Ok(submission) => Ok(views::results_page(&submission).into_response()),
        Err(missing) => {
            let names: Vec<&str> = missing.fields().map(Field::form_name).collect();
            tracing::info!(missing = ?names, "Incomplete submission");

            let jar = flash::set(jar, state.flash_cookie(), missing.messages())?;
            Ok((jar, Redirect::to("/")).into_response())
        }
    }
}
