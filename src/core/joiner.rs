//! Joins a list of items into one entry body

use super::error_value::ErrorValue;
use super::log_item::LogItem;

/// Body text plus the first error item found while joining
#[derive(Debug, Clone)]
pub struct JoinedItems<'a> {
    pub body: String,
    pub first_error: Option<&'a dyn ErrorValue>,
}

/// Joins `items` in order, separated by `delimiter`.
///
/// A delimiter is inserted before an item only when the body built so far is
/// non-empty, so there is never a leading or trailing delimiter. Error items
/// are rendered through `render_error` in short form; the first one is also
/// returned for cause-chain expansion.
pub fn join_items<'a, F>(items: &'a [LogItem], delimiter: &str, render_error: F) -> JoinedItems<'a>
where
    F: Fn(&dyn ErrorValue) -> String,
{
    let mut body = String::new();
    let mut first_error = None;

    for item in items {
        if first_error.is_none() {
            first_error = item.as_error();
        }

        if !body.is_empty() {
            body.push_str(delimiter);
        }
        body.push_str(&item.render_with(&render_error));
    }

    JoinedItems { body, first_error }
}
