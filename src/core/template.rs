//! Runtime positional templates for formatted log calls
//!
//! Syntax:
//! - `{N}` inserts argument `N` (zero-based)
//! - `{N,W}` right-aligns it in `W` columns, `{N,-W}` left-aligns it
//! - `{{` and `}}` are literal braces
//!
//! Malformed templates and out-of-range indices are reported as
//! [`LoggerError::FormatterError`] rather than being written.

use super::error::{LoggerError, Result};
use super::error_value::ErrorValue;
use super::log_item::LogItem;

const FORMAT_TYPE: &str = "template";

/// Largest accepted alignment width, in either direction
pub const MAX_ALIGNMENT: u64 = 999_999;

/// Render `template` against `args`.
///
/// # Examples
///
/// ```
/// use rust_text_logger::core::template::render_template;
/// use rust_text_logger::LogItem;
///
/// let args = [LogItem::from("disk"), LogItem::from(93)];
/// let text = render_template("{0} at {1}%", &args, |e| e.message()).unwrap();
/// assert_eq!(text, "disk at 93%");
/// ```
pub fn render_template<F>(template: &str, args: &[LogItem], render_error: F) -> Result<String>
where
    F: Fn(&dyn ErrorValue) -> String,
{
    let mut output = String::with_capacity(template.len());
    let mut chars = template.char_indices().peekable();

    while let Some((pos, ch)) = chars.next() {
        match ch {
            '{' => {
                if matches!(chars.peek(), Some((_, '{'))) {
                    chars.next();
                    output.push('{');
                    continue;
                }

                let mut spec = String::new();
                let mut closed = false;
                for (_, c) in chars.by_ref() {
                    if c == '}' {
                        closed = true;
                        break;
                    }
                    spec.push(c);
                }
                if !closed {
                    return Err(LoggerError::formatter(
                        FORMAT_TYPE,
                        format!("unterminated placeholder starting at byte {}", pos),
                    ));
                }

                let placeholder = Placeholder::parse(&spec, pos)?;
                let arg = args.get(placeholder.index).ok_or_else(|| {
                    LoggerError::formatter(
                        FORMAT_TYPE,
                        format!(
                            "placeholder {{{}}} out of range: {} argument(s) supplied",
                            placeholder.index,
                            args.len()
                        ),
                    )
                })?;
                placeholder.write_padded(&mut output, &arg.render_with(&render_error));
            }
            '}' => {
                if matches!(chars.peek(), Some((_, '}'))) {
                    chars.next();
                    output.push('}');
                } else {
                    return Err(LoggerError::formatter(
                        FORMAT_TYPE,
                        format!("unmatched '}}' at byte {}", pos),
                    ));
                }
            }
            _ => output.push(ch),
        }
    }

    Ok(output)
}

struct Placeholder {
    index: usize,
    width: i64,
}

impl Placeholder {
    fn parse(spec: &str, pos: usize) -> Result<Self> {
        let (index_part, width_part) = match spec.split_once(',') {
            Some((index, width)) => (index, Some(width)),
            None => (spec, None),
        };

        let index = index_part.trim().parse::<usize>().map_err(|_| {
            LoggerError::formatter(
                FORMAT_TYPE,
                format!("invalid placeholder index '{}' at byte {}", index_part, pos),
            )
        })?;

        let width = match width_part {
            Some(width) => width.trim().parse::<i64>().map_err(|_| {
                LoggerError::formatter(
                    FORMAT_TYPE,
                    format!("invalid alignment '{}' at byte {}", width, pos),
                )
            })?,
            None => 0,
        };
        if width.unsigned_abs() > MAX_ALIGNMENT {
            return Err(LoggerError::formatter(
                FORMAT_TYPE,
                format!(
                    "alignment {} at byte {} out of range (limit {})",
                    width, pos, MAX_ALIGNMENT
                ),
            ));
        }

        Ok(Self { index, width })
    }

    fn write_padded(&self, output: &mut String, value: &str) {
        let width = self.width.unsigned_abs() as usize;
        let padding = width.saturating_sub(value.chars().count());
        if self.width < 0 {
            output.push_str(value);
            output.extend(std::iter::repeat(' ').take(padding));
        } else {
            output.extend(std::iter::repeat(' ').take(padding));
            output.push_str(value);
        }
    }
}
