//! Heterogeneous values that make up a log entry body

use super::error_value::{CapturedError, ErrorValue};
use std::fmt;
use std::sync::Arc;

/// Rendering of a null item
pub const NULL_ITEM_PLACEHOLDER: &str = "null";

/// Rendering of an absent error
pub const NULL_ERROR_PLACEHOLDER: &str = "(null error)";

/// One value passed to a logging call.
///
/// Every variant has exactly one canonical text rendering; error values are
/// rendered by the logger's formatter so that type-name settings apply.
#[derive(Debug, Clone)]
pub enum LogItem {
    Text(String),
    Integer(i64),
    Unsigned(u64),
    Float(f64),
    Bool(bool),
    Error(Arc<dyn ErrorValue>),
    Null,
}

impl LogItem {
    pub fn error(err: impl ErrorValue + 'static) -> Self {
        LogItem::Error(Arc::new(err))
    }

    /// The error carried by this item, if any
    pub fn as_error(&self) -> Option<&dyn ErrorValue> {
        match self {
            LogItem::Error(err) => Some(err.as_ref()),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, LogItem::Null)
    }

    /// Render with `render_error` handling the error variant.
    pub fn render_with<F>(&self, render_error: F) -> String
    where
        F: FnOnce(&dyn ErrorValue) -> String,
    {
        match self {
            LogItem::Text(text) => text.clone(),
            LogItem::Integer(value) => value.to_string(),
            LogItem::Unsigned(value) => value.to_string(),
            LogItem::Float(value) => value.to_string(),
            LogItem::Bool(value) => value.to_string(),
            LogItem::Error(err) => render_error(err.as_ref()),
            LogItem::Null => NULL_ITEM_PLACEHOLDER.to_string(),
        }
    }
}

/// Renders errors as `Type: Message` with short type names.
impl fmt::Display for LogItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered =
            self.render_with(|err| format!("{}: {}", err.type_name(), err.message()));
        f.write_str(&rendered)
    }
}

impl From<&str> for LogItem {
    fn from(value: &str) -> Self {
        LogItem::Text(value.to_string())
    }
}

impl From<String> for LogItem {
    fn from(value: String) -> Self {
        LogItem::Text(value)
    }
}

impl From<&String> for LogItem {
    fn from(value: &String) -> Self {
        LogItem::Text(value.clone())
    }
}

impl From<char> for LogItem {
    fn from(value: char) -> Self {
        LogItem::Text(value.to_string())
    }
}

macro_rules! impl_from_signed {
    ($($ty:ty),*) => {
        $(impl From<$ty> for LogItem {
            fn from(value: $ty) -> Self {
                LogItem::Integer(value as i64)
            }
        })*
    };
}

macro_rules! impl_from_unsigned {
    ($($ty:ty),*) => {
        $(impl From<$ty> for LogItem {
            fn from(value: $ty) -> Self {
                LogItem::Unsigned(value as u64)
            }
        })*
    };
}

impl_from_signed!(i8, i16, i32, i64, isize);
impl_from_unsigned!(u8, u16, u32, u64, usize);

impl From<f32> for LogItem {
    fn from(value: f32) -> Self {
        LogItem::Float(f64::from(value))
    }
}

impl From<f64> for LogItem {
    fn from(value: f64) -> Self {
        LogItem::Float(value)
    }
}

impl From<bool> for LogItem {
    fn from(value: bool) -> Self {
        LogItem::Bool(value)
    }
}

impl From<CapturedError> for LogItem {
    fn from(value: CapturedError) -> Self {
        LogItem::Error(Arc::new(value))
    }
}

impl From<Arc<dyn ErrorValue>> for LogItem {
    fn from(value: Arc<dyn ErrorValue>) -> Self {
        LogItem::Error(value)
    }
}

impl<T: Into<LogItem>> From<Option<T>> for LogItem {
    fn from(value: Option<T>) -> Self {
        value.map_or(LogItem::Null, Into::into)
    }
}
