/// A single field-level validation failure, serialized verbatim into the
/// 400 response body.
#[derive(Debug, Clone, serde::Serialize)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

/// The ordered list of field-level failures produced by parsing one payload.
/// Malformed input is a normal outcome, not an exceptional one: every field
/// is checked and reported, not just the first offender.
#[derive(Debug, Clone, Default, serde::Serialize)]
#[serde(transparent)]
pub struct ValidationErrors(Vec<FieldError>);

impl ValidationErrors {
    pub fn push(&mut self, field: &'static str, message: String) {
        self.0.push(FieldError { field, message });
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[FieldError] {
        &self.0
    }
}

impl std::fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut first = true;
        for error in &self.0 {
            if !first {
                write!(f, "; ")?;
            }
            write!(f, "{}: {}", error.field, error.message)?;
            first = false;
        }
        Ok(())
    }
}

/// Parse a mandatory field. A missing or blank value is reported against the
/// field name; a present value is handed to the domain parser.
pub(crate) fn require<T>(
    errors: &mut ValidationErrors,
    field: &'static str,
    value: Option<String>,
    parse: impl FnOnce(String) -> Result<T, String>,
) -> Option<T> {
    match value {
        None => {
            errors.push(field, format!("{field} is required."));
            None
        }
        Some(v) if v.trim().is_empty() => {
            errors.push(field, format!("{field} is required."));
            None
        }
        Some(v) => match parse(v) {
            Ok(parsed) => Some(parsed),
            Err(message) => {
                errors.push(field, message);
                None
            }
        },
    }
}

/// Parse an optional field. Absence (or a blank value) is allowed; a present
/// non-blank value must satisfy the domain parser.
pub(crate) fn optional<T>(
    errors: &mut ValidationErrors,
    field: &'static str,
    value: Option<String>,
    parse: impl FnOnce(String) -> Result<T, String>,
) -> Option<T> {
    match value {
        None => None,
        Some(v) if v.trim().is_empty() => None,
        Some(v) => match parse(v) {
            Ok(parsed) => Some(parsed),
            Err(message) => {
                errors.push(field, message);
                None
            }
        },
    }
}
