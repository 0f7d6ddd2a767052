//! Form Controllers
//!
//! Submission lifecycle shared by the login, register and settings forms.
//! Like the view controller, this does no I/O: [`FormController::begin_submit`]
//! produces the request to send and [`FormController::finish`] applies the
//! response.

use serde::Deserialize;
use serde_json::Value;

use super::error::FormError;
use super::schema::{FieldValue, FormKind, FormSchema};
use super::state::FormState;

/// The request a submit produces
#[derive(Debug, Clone, PartialEq)]
pub struct Submission {
    pub kind: FormKind,
    /// POST target, `None` when the form is saved locally
    pub endpoint: Option<&'static str>,
    pub body: Value,
}

/// Server answer to a submission
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// 2xx with the decoded body (`Null` if the body was not JSON)
    Accepted(Value),
    /// Non-2xx; `message` is the server's `message` field when present
    Rejected { message: Option<String> },
    /// The request never got an answer
    Unreachable(String),
}

#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

impl SubmitOutcome {
    /// Classify a completed HTTP exchange
    pub fn from_response(success: bool, body: &str) -> Self {
        if success {
            SubmitOutcome::Accepted(serde_json::from_str(body).unwrap_or(Value::Null))
        } else {
            let message = serde_json::from_str::<ErrorBody>(body)
                .ok()
                .and_then(|b| b.message)
                .filter(|m| !m.is_empty());
            SubmitOutcome::Rejected { message }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FormStatus {
    #[default]
    Idle,
    Submitting,
    Succeeded(String),
    Failed(String),
}

impl FormStatus {
    pub fn message(&self) -> Option<&str> {
        match self {
            FormStatus::Succeeded(m) | FormStatus::Failed(m) => Some(m),
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct FormController {
    state: FormState,
    status: FormStatus,
}

impl FormController {
    pub fn new(kind: FormKind) -> Self {
        Self {
            state: FormState::new(FormSchema::for_kind(kind)),
            status: FormStatus::Idle,
        }
    }

    pub fn kind(&self) -> FormKind {
        self.state.schema().kind
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn status(&self) -> &FormStatus {
        &self.status
    }

    pub fn is_submitting(&self) -> bool {
        self.status == FormStatus::Submitting
    }

    /// Field change handler
    pub fn set(&mut self, name: &str, value: impl Into<FieldValue>) -> Result<(), FormError> {
        self.state.set(name, value)
    }

    /// Restore defaults and clear any message
    pub fn reset(&mut self) {
        self.state.reset();
        self.status = FormStatus::Idle;
    }

    /// Start a submit. Fails without a request when another submit is in
    /// flight or a required field is blank.
    pub fn begin_submit(&mut self) -> Result<Submission, FormError> {
        if self.is_submitting() {
            return Err(FormError::InFlight);
        }

        let missing = self.state.missing_required();
        if !missing.is_empty() {
            self.status = FormStatus::Failed(missing_message(self.kind()).to_string());
            return Err(FormError::MissingRequired(missing));
        }

        self.status = FormStatus::Submitting;
        Ok(Submission {
            kind: self.kind(),
            endpoint: self.state.schema().endpoint,
            body: self.state.to_json(),
        })
    }

    /// Apply the answer to the submission in flight
    pub fn finish(&mut self, outcome: SubmitOutcome) -> &FormStatus {
        let kind = self.kind();

        self.status = match outcome {
            SubmitOutcome::Accepted(body) => {
                let message = success_message(kind, &body, &self.state);
                // Settings stay as saved; account forms start over
                if kind != FormKind::Settings {
                    self.state.reset();
                }
                tracing::info!(form = ?kind, "form submitted");
                FormStatus::Succeeded(message)
            }
            SubmitOutcome::Rejected { message } => {
                tracing::warn!(form = ?kind, message = message.as_deref().unwrap_or(""), "form rejected");
                FormStatus::Failed(rejected_message(kind, message))
            }
            SubmitOutcome::Unreachable(error) => {
                tracing::warn!(form = ?kind, %error, "form submission failed");
                FormStatus::Failed(unreachable_message(kind, &error))
            }
        };

        &self.status
    }
}

fn field<'a>(body: &'a Value, name: &str) -> &'a str {
    body.get(name).and_then(Value::as_str).unwrap_or_default()
}

fn success_message(kind: FormKind, body: &Value, submitted: &FormState) -> String {
    match kind {
        FormKind::Login => {
            // Replies without a username greet by the email that signed in
            let name = [field(body, "username"), field(body, "email"), submitted.text("email")]
                .into_iter()
                .find(|name| !name.is_empty());
            match name {
                Some(name) => format!("Welcome back, {}!", name),
                None => "Welcome back!".to_string(),
            }
        }
        FormKind::Register => format!("User registered successfully: {}", field(body, "username")),
        FormKind::Settings => "Settings have been saved successfully!".to_string(),
    }
}

fn rejected_message(kind: FormKind, message: Option<String>) -> String {
    match kind {
        FormKind::Login => message.unwrap_or_else(|| "Invalid email or password".to_string()),
        FormKind::Register => format!(
            "Registration failed: {}",
            message.as_deref().unwrap_or("Unknown error")
        ),
        FormKind::Settings => message.unwrap_or_else(|| "Settings could not be saved".to_string()),
    }
}

fn unreachable_message(kind: FormKind, error: &str) -> String {
    match kind {
        FormKind::Login => "An error occurred while logging in. Please try again.".to_string(),
        FormKind::Register | FormKind::Settings => format!("An error occurred: {}", error),
    }
}

fn missing_message(kind: FormKind) -> &'static str {
    match kind {
        FormKind::Login => "Please fill in both fields",
        FormKind::Register | FormKind::Settings => "Please fill in all fields",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn filled_login() -> FormController {
        let mut form = FormController::new(FormKind::Login);
        form.set("email", "alice@example.com").unwrap();
        form.set("password", "hunter2").unwrap();
        form
    }

    #[test]
    fn test_login_success_resets() {
        let mut form = filled_login();

        let submission = form.begin_submit().unwrap();
        assert_eq!(submission.endpoint, Some("/api/users/login"));
        assert_eq!(
            submission.body,
            json!({"email": "alice@example.com", "password": "hunter2"})
        );
        assert!(form.is_submitting());

        let status = form.finish(SubmitOutcome::Accepted(json!({"username": "alice"})));
        assert_eq!(*status, FormStatus::Succeeded("Welcome back, alice!".into()));
        assert_eq!(form.state().text("email"), "");
    }

    #[test]
    fn test_login_failure_keeps_values() {
        let mut form = filled_login();
        form.begin_submit().unwrap();

        form.finish(SubmitOutcome::from_response(false, r#"{"message": "Account locked"}"#));

        assert_eq!(form.status().message(), Some("Account locked"));
        assert_eq!(form.state().text("email"), "alice@example.com");
        assert_eq!(form.state().text("password"), "hunter2");
    }

    #[test]
    fn test_login_failure_fallback() {
        let mut form = filled_login();
        form.begin_submit().unwrap();
        form.finish(SubmitOutcome::from_response(false, "Internal Server Error"));
        assert_eq!(form.status().message(), Some("Invalid email or password"));

        form.begin_submit().unwrap();
        form.finish(SubmitOutcome::Unreachable("connection refused".into()));
        assert_eq!(
            form.status().message(),
            Some("An error occurred while logging in. Please try again.")
        );
    }

    #[test]
    fn test_login_missing_fields() {
        let mut form = FormController::new(FormKind::Login);
        form.set("email", "alice@example.com").unwrap();

        let result = form.begin_submit();

        assert_eq!(result, Err(FormError::MissingRequired(vec!["password"])));
        assert_eq!(form.status().message(), Some("Please fill in both fields"));
        assert!(!form.is_submitting());
    }

    #[test]
    fn test_login_greeting_without_username() {
        let mut form = filled_login();
        form.begin_submit().unwrap();
        let status = form.finish(SubmitOutcome::from_response(true, ""));
        assert_eq!(*status, FormStatus::Succeeded("Welcome back, alice@example.com!".into()));

        let mut form = filled_login();
        form.begin_submit().unwrap();
        let status = form.finish(SubmitOutcome::Accepted(json!({"email": "a.smith@example.com"})));
        assert_eq!(*status, FormStatus::Succeeded("Welcome back, a.smith@example.com!".into()));
    }

    #[test]
    fn test_whitespace_counts_as_filled() {
        let mut form = FormController::new(FormKind::Register);
        form.set("username", "bob").unwrap();
        form.set("email", "bob@example.com").unwrap();
        form.set("password", "   ").unwrap();

        let submission = form.begin_submit().unwrap();
        assert_eq!(submission.body["password"], "   ");
        assert!(form.is_submitting());
    }

    #[test]
    fn test_second_submit_rejected_while_in_flight() {
        let mut form = filled_login();
        form.begin_submit().unwrap();
        assert_eq!(form.begin_submit(), Err(FormError::InFlight));
    }

    #[test]
    fn test_register_messages() {
        let mut form = FormController::new(FormKind::Register);
        form.set("username", "bob").unwrap();
        form.set("email", "bob@example.com").unwrap();
        form.set("password", "pw").unwrap();

        form.begin_submit().unwrap();
        form.finish(SubmitOutcome::from_response(false, r#"{"message": "Email already in use"}"#));
        assert_eq!(form.status().message(), Some("Registration failed: Email already in use"));
        assert_eq!(form.state().text("username"), "bob");

        form.begin_submit().unwrap();
        form.finish(SubmitOutcome::from_response(false, "{}"));
        assert_eq!(form.status().message(), Some("Registration failed: Unknown error"));

        form.begin_submit().unwrap();
        form.finish(SubmitOutcome::Unreachable("timed out".into()));
        assert_eq!(form.status().message(), Some("An error occurred: timed out"));

        form.begin_submit().unwrap();
        form.finish(SubmitOutcome::from_response(true, r#"{"username": "bob", "email": "bob@example.com"}"#));
        assert_eq!(form.status().message(), Some("User registered successfully: bob"));
        assert_eq!(form.state().text("username"), "");
    }

    #[test]
    fn test_settings_save_keeps_values() {
        let mut form = FormController::new(FormKind::Settings);
        form.set("theme", "dark").unwrap();

        let submission = form.begin_submit().unwrap();
        assert_eq!(submission.endpoint, None);
        form.finish(SubmitOutcome::Accepted(submission.body));

        assert_eq!(form.status().message(), Some("Settings have been saved successfully!"));
        assert_eq!(form.state().text("theme"), "dark");

        form.reset();
        assert_eq!(form.state().text("theme"), "light");
        assert_eq!(*form.status(), FormStatus::Idle);
    }
}
