//! Error types for validation failures.
//!
//! All string fields use `Cow<'static, str>` for zero-allocation in the
//! common case of static error codes and messages.

use std::borrow::Cow;
use std::fmt;

// ============================================================================
// VALIDATION ERROR
// ============================================================================

/// A structured validation error.
///
/// Uses `Cow<'static, str>` so that error codes and messages known at compile
/// time (the common case) never allocate.
///
/// # Examples
///
/// ```rust
/// use rulecheck::foundation::ValidationError;
///
/// let error = ValidationError::new("min_length", "String is too short")
///     .with_param("min", "5")
///     .with_param("actual", "3");
///
/// assert_eq!(error.code, "min_length");
/// assert_eq!(error.param("min"), Some("5"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Error code for programmatic handling.
    ///
    /// Examples: "min_length", "invalid_format", "required"
    pub code: Cow<'static, str>,

    /// Human-readable error message in English.
    pub message: Cow<'static, str>,

    /// Optional field name, set by orchestration layers.
    pub field: Option<Cow<'static, str>>,

    /// Parameters for the error message template.
    ///
    /// Stored as ordered key-value pairs (typically 0-3 params).
    pub params: Vec<(Cow<'static, str>, Cow<'static, str>)>,
}

impl ValidationError {
    /// Creates a new validation error with a code and message.
    pub fn new(code: impl Into<Cow<'static, str>>, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            field: None,
            params: Vec::new(),
        }
    }

    /// Sets the field name for this error.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_field(mut self, field: impl Into<Cow<'static, str>>) -> Self {
        self.field = Some(field.into());
        self
    }

    /// Adds a parameter to the error.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_param(
        mut self,
        key: impl Into<Cow<'static, str>>,
        value: impl Into<Cow<'static, str>>,
    ) -> Self {
        self.params.push((key.into(), value.into()));
        self
    }

    /// Looks up a parameter value by key.
    #[must_use]
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k.as_ref() == key)
            .map(|(_, v)| v.as_ref())
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(field) = &self.field {
            write!(f, "[{}] {}: {}", field, self.code, self.message)?;
        } else {
            write!(f, "{}: {}", self.code, self.message)?;
        }

        if !self.params.is_empty() {
            write!(f, " (")?;
            for (i, (k, v)) in self.params.iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{k}={v}")?;
            }
            write!(f, ")")?;
        }

        Ok(())
    }
}

impl std::error::Error for ValidationError {}

// ============================================================================
// CONVENIENCE CONSTRUCTORS
// ============================================================================

impl ValidationError {
    /// Creates a "required" error.
    #[must_use]
    pub fn required() -> Self {
        Self::new("required", "This field is required")
    }

    /// Creates a "min_length" error.
    #[must_use]
    pub fn min_length(min: usize, actual: usize) -> Self {
        Self::new("min_length", format!("Must be at least {min} characters"))
            .with_param("min", min.to_string())
            .with_param("actual", actual.to_string())
    }

    /// Creates a "max_length" error.
    #[must_use]
    pub fn max_length(max: usize, actual: usize) -> Self {
        Self::new("max_length", format!("Must be at most {max} characters"))
            .with_param("max", max.to_string())
            .with_param("actual", actual.to_string())
    }

    /// Creates an "invalid_format" error.
    #[must_use]
    pub fn invalid_format(expected: impl Into<Cow<'static, str>>) -> Self {
        Self::new("invalid_format", "Invalid format").with_param("expected", expected)
    }

    /// Creates a "type_mismatch" error.
    #[must_use]
    pub fn type_mismatch(
        expected: impl Into<Cow<'static, str>>,
        actual: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self::new("type_mismatch", "Type mismatch")
            .with_param("expected", expected)
            .with_param("actual", actual)
    }
}

// ============================================================================
// TESTS
// ============================================================================
