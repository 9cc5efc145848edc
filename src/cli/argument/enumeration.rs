//! Closed-enumeration option descriptor.

use super::super::scanner;
use super::super::status::Status;
use super::{ArgSpec, Argument, ByteWriter, TypedArgument, Value};

/// An option whose value is one key out of a closed keyword map.
///
/// The map pairs each key with the exact text the user must type. In the
/// help table the value placeholder is the literal `{...}`; the usage line
/// expands the real keyword list, truncated to whatever fits the rendering
/// buffer but always closed.
///
/// # Examples
///
/// ```rust
/// use libcli::cli::{Argument, EnumArg, Status, Value};
///
/// #[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// enum Parity {
///     None,
///     Even,
///     Odd,
/// }
///
/// let parity = EnumArg::new(Some('p'), "parity", "Parity mode.", [
///     (Parity::None, "none"),
///     (Parity::Even, "even"),
///     (Parity::Odd, "odd"),
/// ]);
/// assert_eq!(parity.parse_value("even"), Ok(Value::Key(1)));
/// assert_eq!(parity.parse_value("mark"), Err(Status::ERROR));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct EnumArg<K: 'static, const N: usize> {
    spec: ArgSpec,
    map: [(K, &'static str); N],
}

impl<K, const N: usize> EnumArg<K, N> {
    /// Describe an enumeration option over the given key/keyword map.
    pub const fn new(
        short: Option<char>,
        long: &'static str,
        help: &'static str,
        map: [(K, &'static str); N],
    ) -> Self {
        Self {
            spec: ArgSpec::new(short, long, "{...}", help),
            map,
        }
    }

    /// Mark the option as required.
    pub const fn required(mut self) -> Self {
        self.spec.required = true;
        self
    }

    /// The keyword spelled for the key at `index`, if any.
    pub fn keyword(&self, index: usize) -> Option<&'static str> {
        self.map.get(index).map(|(_, keyword)| *keyword)
    }
}

impl<K: core::fmt::Debug, const N: usize> Argument for EnumArg<K, N> {
    fn spec(&self) -> &ArgSpec {
        &self.spec
    }

    fn parse_value<'line>(&self, text: &'line str) -> Result<Value<'line>, Status> {
        let text = scanner::trim_spaces(text);
        match self.map.iter().position(|(_, keyword)| *keyword == text) {
            Some(index) => Ok(Value::Key(index)),
            None => Err(Status::ERROR),
        }
    }

    fn usage_fragment<'b>(&self, buf: &'b mut [u8]) -> Option<&'b str> {
        let prefix_len = match self.spec.short {
            Some(short) => 2 + short.len_utf8(),
            None => 3 + self.spec.long.len(),
        };
        // minimal form is the prefix plus " {}]"
        if buf.len() < prefix_len + 4 {
            return None;
        }
        let mut writer = ByteWriter::new(buf);
        match self.spec.short {
            Some(short) => {
                writer.push_str("[-");
                writer.push_char(short);
            }
            None => {
                writer.push_str("[--");
                writer.push_str(self.spec.long);
            }
        }
        writer.push_str(" {");
        let mut listed = false;
        for (_, keyword) in &self.map {
            // the keyword, its separator, and the closing "]" must all fit
            if writer.remaining() < keyword.len() + 2 {
                break;
            }
            writer.push_str(keyword);
            writer.push(b',');
            listed = true;
        }
        if listed {
            writer.set_last(b'}');
        } else {
            writer.push(b'}');
        }
        writer.push(b']');
        writer.into_str()
    }
}

impl<K: Copy + core::fmt::Debug, const N: usize> TypedArgument for EnumArg<K, N> {
    type Output<'line> = K;

    fn decode<'line>(&self, value: Value<'line>) -> Option<K> {
        match value {
            Value::Key(index) => self.map.get(index).map(|(key, _)| *key),
            _ => None,
        }
    }
}
