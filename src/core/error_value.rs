//! Error values the logger knows how to render and walk
//!
//! The logger only reads errors: it asks for a type name, a message and the
//! next cause. [`CapturedError`] is an owned snapshot that can be built by
//! hand or captured from any [`std::error::Error`].

use std::error::Error as StdError;
use std::fmt;

/// An error with a type identifier, a message and an optional cause.
///
/// The cause chain is read-only to the logger and is expected to be finite.
pub trait ErrorValue: fmt::Debug + Send + Sync {
    /// Fully-qualified type identifier, e.g. `my_app::db::QueryError`
    fn qualified_type_name(&self) -> &str;

    /// Short type identifier, e.g. `QueryError`
    fn type_name(&self) -> &str {
        short_type_name(self.qualified_type_name())
    }

    fn message(&self) -> String;

    /// The wrapped error, nearest first
    fn cause(&self) -> Option<&dyn ErrorValue>;
}

/// Strips the module path and any generic arguments from a type identifier.
pub fn short_type_name(qualified: &str) -> &str {
    let without_generics = qualified.split('<').next().unwrap_or(qualified);
    without_generics
        .rsplit("::")
        .next()
        .unwrap_or(without_generics)
}

/// Owned error snapshot with a singly-linked cause chain.
///
/// # Examples
///
/// ```
/// use rust_text_logger::{CapturedError, ErrorValue};
///
/// let err = CapturedError::new("app::TopError", "top")
///     .with_cause(CapturedError::new("app::RootError", "root"));
///
/// assert_eq!(err.type_name(), "TopError");
/// assert_eq!(err.cause().map(|c| c.message()), Some("root".to_string()));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapturedError {
    qualified_type: String,
    message: String,
    cause: Option<Box<CapturedError>>,
}

impl CapturedError {
    pub fn new(qualified_type: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            qualified_type: qualified_type.into(),
            message: message.into(),
            cause: None,
        }
    }

    /// Attach `cause` at the root end of this error's chain.
    #[must_use]
    pub fn with_cause(mut self, cause: CapturedError) -> Self {
        self.cause = Some(Box::new(match self.cause.take() {
            Some(inner) => (*inner).with_cause(cause),
            None => cause,
        }));
        self
    }

    /// Capture a standard error and its `source()` chain.
    ///
    /// The outer error is named by its static type. Sources are type-erased,
    /// so they are named by the leading identifier of their `Debug` output,
    /// which for derived `Debug` is the type or variant name.
    pub fn capture<E: StdError + 'static>(err: &E) -> Self {
        let mut captured = Self::new(std::any::type_name::<E>(), err.to_string());
        captured.cause = err.source().map(|source| Box::new(Self::capture_dyn(source)));
        captured
    }

    /// Capture a type-erased error and its `source()` chain.
    pub fn capture_dyn(err: &(dyn StdError + 'static)) -> Self {
        let mut captured = Self::new(debug_type_hint(err), err.to_string());
        captured.cause = err.source().map(|source| Box::new(Self::capture_dyn(source)));
        captured
    }

    /// Number of errors in the chain, this one included
    pub fn chain_len(&self) -> usize {
        1 + self.cause.as_ref().map_or(0, |c| c.chain_len())
    }
}

impl ErrorValue for CapturedError {
    fn qualified_type_name(&self) -> &str {
        &self.qualified_type
    }

    fn message(&self) -> String {
        self.message.clone()
    }

    fn cause(&self) -> Option<&dyn ErrorValue> {
        self.cause.as_deref().map(|c| c as &dyn ErrorValue)
    }
}

impl fmt::Display for CapturedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.type_name(), self.message)
    }
}

fn debug_type_hint(err: &(dyn StdError + 'static)) -> String {
    let debug = format!("{:?}", err);
    let ident: String = debug
        .chars()
        .take_while(|c| c.is_alphanumeric() || *c == '_' || *c == ':')
        .collect();
    let ident = ident.trim_end_matches(':');
    match ident.chars().next() {
        Some(first) if first.is_alphabetic() || first == '_' => ident.to_string(),
        _ => "Error".to_string(),
    }
}
