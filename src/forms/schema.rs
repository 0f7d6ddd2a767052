//! Form Schemas
//!
//! Static field declarations for the login, register and settings forms.

use serde::Serialize;

use super::error::FormError;

pub const THEMES: &[&str] = &["light", "dark"];
pub const LANGUAGES: &[&str] = &["en", "es", "fr"];

/// Value held by one field
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    Flag(bool),
}

impl FieldValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(text) => Some(text),
            FieldValue::Flag(_) => None,
        }
    }

    pub fn as_flag(&self) -> Option<bool> {
        match self {
            FieldValue::Flag(flag) => Some(*flag),
            FieldValue::Text(_) => None,
        }
    }

    fn is_blank(&self) -> bool {
        matches!(self, FieldValue::Text(text) if text.is_empty())
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        FieldValue::Flag(value)
    }
}

/// Input control of a field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Email,
    Password,
    /// One of a fixed set of options
    Choice {
        options: &'static [&'static str],
        default: &'static str,
    },
    Toggle {
        default: bool,
    },
}

impl FieldKind {
    /// HTML input type
    pub fn input_type(&self) -> &'static str {
        match self {
            FieldKind::Text => "text",
            FieldKind::Email => "email",
            FieldKind::Password => "password",
            FieldKind::Choice { .. } => "select",
            FieldKind::Toggle { .. } => "checkbox",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub required: bool,
}

impl FieldSpec {
    pub fn default_value(&self) -> FieldValue {
        match self.kind {
            FieldKind::Text | FieldKind::Email | FieldKind::Password => {
                FieldValue::Text(String::new())
            }
            FieldKind::Choice { default, .. } => FieldValue::Text(default.to_string()),
            FieldKind::Toggle { default } => FieldValue::Flag(default),
        }
    }

    /// Check `value` fits this field
    pub fn accept(&self, value: &FieldValue) -> Result<(), FormError> {
        match (self.kind, value) {
            (FieldKind::Toggle { .. }, FieldValue::Flag(_)) => Ok(()),
            (FieldKind::Toggle { .. }, FieldValue::Text(_)) => Err(FormError::TypeMismatch {
                field: self.name,
                expected: "boolean",
            }),
            (_, FieldValue::Flag(_)) => Err(FormError::TypeMismatch {
                field: self.name,
                expected: "text",
            }),
            (FieldKind::Choice { options, .. }, FieldValue::Text(text)) => {
                if options.contains(&text.as_str()) {
                    Ok(())
                } else {
                    Err(FormError::InvalidChoice {
                        field: self.name,
                        value: text.clone(),
                    })
                }
            }
            (_, FieldValue::Text(_)) => Ok(()),
        }
    }

    pub(crate) fn is_missing(&self, value: &FieldValue) -> bool {
        self.required && value.is_blank()
    }
}

/// Which form a schema describes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormKind {
    Login,
    Register,
    Settings,
}

#[derive(Debug, PartialEq, Eq)]
pub struct FormSchema {
    pub kind: FormKind,
    pub title: &'static str,
    /// POST target; `None` for forms saved locally
    pub endpoint: Option<&'static str>,
    pub fields: &'static [FieldSpec],
}

impl FormSchema {
    pub fn field(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.name == name)
    }

    pub fn for_kind(kind: FormKind) -> &'static FormSchema {
        match kind {
            FormKind::Login => &LOGIN,
            FormKind::Register => &REGISTER,
            FormKind::Settings => &SETTINGS,
        }
    }
}

pub static LOGIN: FormSchema = FormSchema {
    kind: FormKind::Login,
    title: "Login",
    endpoint: Some("/api/users/login"),
    fields: &[
        FieldSpec {
            name: "email",
            label: "Email Address",
            kind: FieldKind::Email,
            required: true,
        },
        FieldSpec {
            name: "password",
            label: "Password",
            kind: FieldKind::Password,
            required: true,
        },
    ],
};

pub static REGISTER: FormSchema = FormSchema {
    kind: FormKind::Register,
    title: "Register",
    endpoint: Some("/api/users/register"),
    fields: &[
        FieldSpec {
            name: "username",
            label: "Username",
            kind: FieldKind::Text,
            required: true,
        },
        FieldSpec {
            name: "email",
            label: "Email",
            kind: FieldKind::Email,
            required: true,
        },
        FieldSpec {
            name: "password",
            label: "Password",
            kind: FieldKind::Password,
            required: true,
        },
    ],
};

pub static SETTINGS: FormSchema = FormSchema {
    kind: FormKind::Settings,
    title: "Default Settings",
    endpoint: None,
    fields: &[
        FieldSpec {
            name: "theme",
            label: "Theme",
            kind: FieldKind::Choice {
                options: THEMES,
                default: "light",
            },
            required: false,
        },
        FieldSpec {
            name: "notifications",
            label: "Enable Notifications",
            kind: FieldKind::Toggle { default: true },
            required: false,
        },
        FieldSpec {
            name: "language",
            label: "Language",
            kind: FieldKind::Choice {
                options: LANGUAGES,
                default: "en",
            },
            required: false,
        },
    ],
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let theme = SETTINGS.field("theme").unwrap();
        assert_eq!(theme.default_value(), FieldValue::from("light"));

        let notifications = SETTINGS.field("notifications").unwrap();
        assert_eq!(notifications.default_value(), FieldValue::Flag(true));

        let email = LOGIN.field("email").unwrap();
        assert_eq!(email.default_value(), FieldValue::from(""));
        assert_eq!(email.kind.input_type(), "email");
    }

    #[test]
    fn test_accept() {
        let language = SETTINGS.field("language").unwrap();
        assert!(language.accept(&"fr".into()).is_ok());
        assert_eq!(
            language.accept(&"de".into()),
            Err(FormError::InvalidChoice { field: "language", value: "de".into() })
        );

        let notifications = SETTINGS.field("notifications").unwrap();
        assert!(matches!(
            notifications.accept(&"yes".into()),
            Err(FormError::TypeMismatch { expected: "boolean", .. })
        ));

        let username = REGISTER.field("username").unwrap();
        assert!(matches!(
            username.accept(&true.into()),
            Err(FormError::TypeMismatch { expected: "text", .. })
        ));
    }

    #[test]
    fn test_for_kind() {
        assert_eq!(FormSchema::for_kind(FormKind::Register).endpoint, Some("/api/users/register"));
        assert_eq!(FormSchema::for_kind(FormKind::Settings).endpoint, None);
    }
}
