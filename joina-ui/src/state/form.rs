//! Form Submission
//!
//! Runs a [`FormController`] submit against the API from a Leptos signal.

use leptos::*;
use serde_json::Value;

use joina::forms::{FormController, FormStatus, SubmitOutcome};

use crate::api;

/// Start a submit on `form` and send it.
///
/// `done` receives the accepted response body (if any) and the status the
/// form settled on. Nothing is sent when the form refuses to submit.
pub fn submit_form<F>(form: RwSignal<FormController>, done: F)
where
    F: FnOnce(Option<Value>, FormStatus) + 'static,
{
    let mut started = None;
    form.update(|f| started = Some(f.begin_submit()));

    let submission = match started {
        Some(Ok(submission)) => submission,
        Some(Err(e)) => {
            web_sys::console::warn_1(&e.to_string().into());
            return;
        }
        None => return,
    };

    spawn_local(async move {
        let outcome = api::submit(&submission).await;
        let accepted = match &outcome {
            SubmitOutcome::Accepted(body) => Some(body.clone()),
            SubmitOutcome::Rejected { .. } | SubmitOutcome::Unreachable(_) => None,
        };

        let mut status = FormStatus::Idle;
        form.update(|f| status = f.finish(outcome).clone());
        done(accepted, status);
    });
}
