//! Length-bounded string option descriptor.

use super::super::scanner;
use super::super::status::Status;
use super::{ArgSpec, Argument, TypedArgument, Value};

/// A string option returning a borrowed view into the input line.
///
/// A value wrapped in one pair of double quotes has the quotes stripped and
/// may contain spaces; an unbalanced or stray quote rejects the value. The
/// unquoted length must fall inside `[min_len, max_len]`.
///
/// # Examples
///
/// ```rust
/// use libcli::cli::{Argument, StringArg, Status, Value};
///
/// let color = StringArg::new(None, "color", "color", "Color name.", 1, 40);
/// assert_eq!(color.parse_value("\"racing green\""), Ok(Value::Str("racing green")));
/// assert_eq!(color.parse_value("\"open"), Err(Status::INCORRECT_ARGUMENT));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct StringArg {
    spec: ArgSpec,
    min_len: usize,
    max_len: usize,
}

impl StringArg {
    /// Describe a string option with inclusive length bounds.
    pub const fn new(
        short: Option<char>,
        long: &'static str,
        display: &'static str,
        help: &'static str,
        min_len: usize,
        max_len: usize,
    ) -> Self {
        Self {
            spec: ArgSpec::new(short, long, display, help),
            min_len,
            max_len,
        }
    }

    /// Mark the option as required.
    pub const fn required(mut self) -> Self {
        self.spec.required = true;
        self
    }
}

impl Argument for StringArg {
    fn spec(&self) -> &ArgSpec {
        &self.spec
    }

    fn parse_value<'line>(&self, text: &'line str) -> Result<Value<'line>, Status> {
        let text = scanner::trim_spaces(text);
        if text.is_empty() {
            return Err(Status::INCORRECT_ARGUMENT);
        }
        let text = match text.strip_prefix('"') {
            Some(opened) => match opened.strip_suffix('"') {
                Some(inner) => inner,
                None => return Err(Status::INCORRECT_ARGUMENT),
            },
            None => text,
        };
        // at this point no quote may remain
        if text.contains('"') {
            return Err(Status::INCORRECT_ARGUMENT);
        }
        if text.len() > self.max_len || text.len() < self.min_len {
            return Err(Status::LENGTH_VIOLATION);
        }
        Ok(Value::Str(text))
    }
}

impl TypedArgument for StringArg {
    type Output<'line> = &'line str;

    fn decode<'line>(&self, value: Value<'line>) -> Option<&'line str> {
        match value {
            Value::Str(text) => Some(text),
            _ => None,
        }
    }
}
