//! Consuming decoder for strategy settings.
//!
//! Strategy entries in the configuration file are open key/value maps. Each
//! handler pulls the keys it understands out of a [`Settings`] with the typed
//! `take_*` accessors; whatever is left afterwards is rejected by
//! [`Settings::finish`].

use std::collections::BTreeMap;

use serde_yaml::Value;

use super::errors::HandlerError;

/// Raw settings of a single strategy, keyed by field name.
pub type StrategySettings = BTreeMap<String, Value>;

#[derive(Debug, Clone, Default)]
pub struct Settings {
    values: StrategySettings,
}

impl Settings {
    pub fn new(values: StrategySettings) -> Self {
        Self { values }
    }

    /// Remove `field` and decode it as a bool. Absent fields yield `None`.
    pub fn take_bool(&mut self, field: &str) -> Result<Option<bool>, HandlerError> {
        match self.values.remove(field) {
            None | Some(Value::Null) => Ok(None),
            Some(Value::Bool(b)) => Ok(Some(b)),
            Some(_) => Err(invalid_type(field, "bool")),
        }
    }

    /// Remove `field` and decode it as a string. Absent fields yield `None`.
    pub fn take_string(&mut self, field: &str) -> Result<Option<String>, HandlerError> {
        match self.values.remove(field) {
            None | Some(Value::Null) => Ok(None),
            Some(Value::String(s)) => Ok(Some(s)),
            Some(_) => Err(invalid_type(field, "string")),
        }
    }

    /// Remove `field` and decode it as a sequence of strings.
    pub fn take_string_list(&mut self, field: &str) -> Result<Option<Vec<String>>, HandlerError> {
        match self.values.remove(field) {
            None | Some(Value::Null) => Ok(None),
            Some(Value::Sequence(items)) => items
                .into_iter()
                .map(|item| match item {
                    Value::String(s) => Ok(s),
                    _ => Err(invalid_type(field, "list of strings")),
                })
                .collect::<Result<Vec<_>, _>>()
                .map(Some),
            Some(_) => Err(invalid_type(field, "list of strings")),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Fail if any field was left unconsumed.
    pub fn finish(self) -> Result<(), HandlerError> {
        if self.values.is_empty() {
            return Ok(());
        }
        // BTreeMap keys are already sorted
        Err(HandlerError::UnrecognizedFields {
            fields: self.values.into_keys().collect(),
        })
    }
}

fn invalid_type(field: &str, expected: &'static str) -> HandlerError {
    HandlerError::InvalidFieldType {
        field: field.to_string(),
        expected,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings(yaml: &str) -> Settings {
        Settings::new(serde_yaml::from_str(yaml).unwrap())
    }

    #[test]
    fn test_take_bool() {
        let mut s = settings("remove: true\nother: 1");
        assert_eq!(s.take_bool("remove").unwrap(), Some(true));
        assert_eq!(s.take_bool("remove").unwrap(), None);
        assert_eq!(
            s.take_bool("other").unwrap_err(),
            HandlerError::InvalidFieldType {
                field: "other".to_string(),
                expected: "bool"
            }
        );
    }

    #[test]
    fn test_take_bool_does_not_coerce_strings() {
        let mut s = settings("remove: \"yes\"");
        assert!(s.take_bool("remove").is_err());
    }

    #[test]
    fn test_take_string() {
        let mut s = settings("image: alpine:latest\nport: 8080");
        assert_eq!(
            s.take_string("image").unwrap(),
            Some("alpine:latest".to_string())
        );
        assert_eq!(
            s.take_string("port").unwrap_err(),
            HandlerError::InvalidFieldType {
                field: "port".to_string(),
                expected: "string"
            }
        );
    }

    #[test]
    fn test_null_is_treated_as_absent() {
        let mut s = settings("service: ~");
        assert_eq!(s.take_string("service").unwrap(), None);
        assert!(s.finish().is_ok());
    }

    #[test]
    fn test_take_string_list() {
        let mut s = settings("volumes:\n  - ./:/opt/\n  - /tmp:/tmp");
        assert_eq!(
            s.take_string_list("volumes").unwrap(),
            Some(vec!["./:/opt/".to_string(), "/tmp:/tmp".to_string()])
        );
        assert!(s.is_empty());
    }

    #[test]
    fn test_take_string_list_rejects_scalars_and_mixed_items() {
        let mut s = settings("volumes: ./:/opt/");
        assert!(s.take_string_list("volumes").is_err());

        let mut s = settings("volumes:\n  - ./:/opt/\n  - 3");
        let err = s.take_string_list("volumes").unwrap_err();
        assert_eq!(err.to_string(), "field 'volumes' must be a list of strings");
    }

    #[test]
    fn test_finish_reports_leftover_fields_sorted() {
        let mut s = settings("service: app\nzeta: 1\nalpha: 2");
        s.take_string("service").unwrap();
        assert_eq!(
            s.finish().unwrap_err(),
            HandlerError::UnrecognizedFields {
                fields: vec!["alpha".to_string(), "zeta".to_string()]
            }
        );
    }
}
