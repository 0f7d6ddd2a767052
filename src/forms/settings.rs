//! Typed dashboard settings

use serde::{Deserialize, Serialize};

use super::error::FormError;
use super::schema::SETTINGS;
use super::state::FormState;

/// Local storage key the browser keeps saved settings under
pub const SETTINGS_STORAGE_KEY: &str = "joina_settings";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Es,
    Fr,
}

impl Language {
    pub fn label(&self) -> &'static str {
        match self {
            Language::En => "English",
            Language::Es => "Spanish",
            Language::Fr => "French",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    pub theme: Theme,
    pub notifications: bool,
    pub language: Language,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            theme: Theme::Light,
            notifications: true,
            language: Language::En,
        }
    }
}

impl Settings {
    /// Read the settings form. The form only admits declared choices, so
    /// this fails only for a state built from another schema.
    pub fn from_state(state: &FormState) -> Result<Self, FormError> {
        if state.schema().kind != SETTINGS.kind {
            return Err(FormError::WrongForm {
                expected: SETTINGS.title,
                found: state.schema().title,
            });
        }
        serde_json::from_value(state.to_json()).map_err(|e| FormError::InvalidChoice {
            field: "settings",
            value: e.to_string(),
        })
    }

    /// Settings form holding these values
    pub fn to_state(&self) -> FormState {
        let mut state = FormState::new(&SETTINGS);
        if let Ok(json) = serde_json::to_value(self) {
            state.load_json(&json);
        }
        state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::schema::LOGIN;

    #[test]
    fn test_default_matches_form_defaults() {
        let settings = Settings::from_state(&FormState::new(&SETTINGS)).unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_state_round_trip() {
        let settings = Settings {
            theme: Theme::Dark,
            notifications: false,
            language: Language::Fr,
        };
        let state = settings.to_state();

        assert_eq!(state.text("theme"), "dark");
        assert!(!state.flag("notifications"));
        assert_eq!(Settings::from_state(&state).unwrap(), settings);
    }

    #[test]
    fn test_wrong_schema() {
        let err = Settings::from_state(&FormState::new(&LOGIN)).unwrap_err();
        assert_eq!(
            err,
            FormError::WrongForm {
                expected: "Default Settings",
                found: "Login",
            }
        );
        assert_eq!(err.to_string(), "Expected the Default Settings form, got the Login form");
    }
}
