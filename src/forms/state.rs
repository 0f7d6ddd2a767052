//! Form field state

use serde_json::{Map, Value};

use super::error::FormError;
use super::schema::{FieldValue, FormSchema};

/// Current value of every field declared by a schema
#[derive(Debug, Clone, PartialEq)]
pub struct FormState {
    schema: &'static FormSchema,
    values: Vec<FieldValue>,
}

impl FormState {
    /// State holding each field's default
    pub fn new(schema: &'static FormSchema) -> Self {
        Self {
            schema,
            values: schema.fields.iter().map(|f| f.default_value()).collect(),
        }
    }

    pub fn schema(&self) -> &'static FormSchema {
        self.schema
    }

    fn index(&self, name: &str) -> Result<usize, FormError> {
        self.schema
            .fields
            .iter()
            .position(|f| f.name == name)
            .ok_or_else(|| FormError::UnknownField(name.to_string()))
    }

    /// Update one field, leaving every other field untouched
    pub fn set(&mut self, name: &str, value: impl Into<FieldValue>) -> Result<(), FormError> {
        let index = self.index(name)?;
        let value = value.into();
        self.schema.fields[index].accept(&value)?;
        self.values[index] = value;
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.index(name).ok().map(|i| &self.values[i])
    }

    /// Text of a field, empty for unknown or toggle fields
    pub fn text(&self, name: &str) -> &str {
        self.get(name).and_then(FieldValue::as_text).unwrap_or_default()
    }

    pub fn flag(&self, name: &str) -> bool {
        self.get(name).and_then(FieldValue::as_flag).unwrap_or(false)
    }

    /// Restore every field to its default
    pub fn reset(&mut self) {
        *self = Self::new(self.schema);
    }

    /// Names of required fields that are still blank
    pub fn missing_required(&self) -> Vec<&'static str> {
        self.schema
            .fields
            .iter()
            .zip(&self.values)
            .filter(|(spec, value)| spec.is_missing(value))
            .map(|(spec, _)| spec.name)
            .collect()
    }

    /// All fields as a JSON object
    pub fn to_json(&self) -> Value {
        let mut object = Map::new();
        for (spec, value) in self.schema.fields.iter().zip(&self.values) {
            let value = match value {
                FieldValue::Text(text) => Value::String(text.clone()),
                FieldValue::Flag(flag) => Value::Bool(*flag),
            };
            object.insert(spec.name.to_string(), value);
        }
        Value::Object(object)
    }

    /// Restore values previously produced by [`FormState::to_json`]. Fields
    /// that are absent or invalid keep their current value.
    pub fn load_json(&mut self, json: &Value) {
        let Some(object) = json.as_object() else {
            return;
        };

        for spec in self.schema.fields {
            let value = match object.get(spec.name) {
                Some(Value::String(text)) => FieldValue::Text(text.clone()),
                Some(Value::Bool(flag)) => FieldValue::Flag(*flag),
                _ => continue,
            };
            if let Err(e) = self.set(spec.name, value) {
                tracing::debug!(field = spec.name, error = %e, "ignoring stored value");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::schema::{LOGIN, REGISTER, SETTINGS};
    use serde_json::json;

    #[test]
    fn test_set_touches_one_field() {
        let mut state = FormState::new(&REGISTER);

        state.set("username", "alice").unwrap();
        state.set("email", "alice@example.com").unwrap();

        assert_eq!(state.text("username"), "alice");
        assert_eq!(state.text("email"), "alice@example.com");
        assert_eq!(state.text("password"), "");
    }

    #[test]
    fn test_unknown_field() {
        let mut state = FormState::new(&LOGIN);
        assert_eq!(
            state.set("username", "bob"),
            Err(FormError::UnknownField("username".into()))
        );
        assert!(state.get("username").is_none());
    }

    #[test]
    fn test_to_json() {
        let mut state = FormState::new(&LOGIN);
        state.set("email", "a@b.c").unwrap();
        state.set("password", "secret").unwrap();

        assert_eq!(state.to_json(), json!({"email": "a@b.c", "password": "secret"}));
    }

    #[test]
    fn test_settings_defaults_and_reset() {
        let mut state = FormState::new(&SETTINGS);
        assert_eq!(
            state.to_json(),
            json!({"theme": "light", "notifications": true, "language": "en"})
        );

        state.set("theme", "dark").unwrap();
        state.set("notifications", false).unwrap();
        state.set("language", "es").unwrap();
        assert!(state.set("language", "de").is_err());
        assert_eq!(state.text("language"), "es");

        state.reset();
        assert_eq!(state.text("theme"), "light");
        assert!(state.flag("notifications"));
        assert_eq!(state.text("language"), "en");
    }

    #[test]
    fn test_missing_required() {
        let mut state = FormState::new(&LOGIN);
        assert_eq!(state.missing_required(), vec!["email", "password"]);

        state.set("email", "a@b.c").unwrap();
        assert_eq!(state.missing_required(), vec!["password"]);

        // Whitespace counts as filled in, the same as an HTML required input
        state.set("password", "   ").unwrap();
        assert!(state.missing_required().is_empty());

        assert!(FormState::new(&SETTINGS).missing_required().is_empty());
    }

    #[test]
    fn test_load_json_skips_bad_values() {
        let mut state = FormState::new(&SETTINGS);
        state.load_json(&json!({"theme": "dark", "language": "de", "notifications": "no"}));

        assert_eq!(state.text("theme"), "dark");
        assert_eq!(state.text("language"), "en");
        assert!(state.flag("notifications"));
    }
}
