//! Option descriptors.
//!
//! Every option a command accepts is described by one immutable descriptor
//! value: the flag names, a display placeholder for usage text, a required
//! bit, and a type-specific conversion rule. Descriptors implement the
//! [`Argument`] trait, which covers token matching, value conversion into a
//! [`Value`], and rendering of usage/help fragments into caller-supplied
//! buffers. The set of descriptor kinds is closed; the parser only ever sees
//! `&dyn Argument`.

use super::scanner;
use super::status::Status;

pub mod enumeration;
pub mod ip;
pub mod numeric;
pub mod string;

use ip::IpV4;

/// Data shared by every option descriptor.
#[derive(Debug, Clone, Copy)]
pub struct ArgSpec {
    /// Short flag letter, matched as `-x`. `None` disables the short form.
    pub short: Option<char>,
    /// Long flag name, matched as `--name`. May be empty when only a short
    /// flag exists.
    pub long: &'static str,
    /// Placeholder shown for the value in usage and help text.
    pub display: &'static str,
    /// Whether a parse without this option reports a missing argument.
    pub required: bool,
    /// One-line description shown in the help table.
    pub help: &'static str,
}

impl ArgSpec {
    /// Describe an optional flag. At least one of `short` and `long` must be
    /// usable or no token can ever reach the descriptor.
    pub const fn new(
        short: Option<char>,
        long: &'static str,
        display: &'static str,
        help: &'static str,
    ) -> Self {
        Self {
            short,
            long,
            display,
            required: false,
            help,
        }
    }
}

/// A typed value produced by one descriptor during a parse.
///
/// String values borrow from the parsed line, so a `Value` never outlives
/// the input text it was carved from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value<'line> {
    /// Unsigned integer, widened from the descriptor's native type.
    Unsigned(u64),
    /// Signed integer, widened from the descriptor's native type.
    Signed(i64),
    /// Floating-point number, widened from the descriptor's native type.
    Float(f64),
    /// Borrowed text with any enclosing quotes removed.
    Str(&'line str),
    /// IPv4 address or subnet mask.
    Ip(IpV4),
    /// Index of the matched key in an enumeration descriptor's map.
    Key(usize),
}

/// Capability shared by all option descriptors.
///
/// Token matching and usage/help rendering are derived from the common
/// [`ArgSpec`] data and rarely need overriding; value conversion is what
/// distinguishes the descriptor kinds.
pub trait Argument: core::fmt::Debug {
    /// The descriptor's common data.
    fn spec(&self) -> &ArgSpec;

    /// Convert already-extracted parameter text into a typed value.
    ///
    /// The text is the raw parameter run, quotes included; each descriptor
    /// trims and validates it according to its own rules.
    fn parse_value<'line>(&self, text: &'line str) -> Result<Value<'line>, Status>;

    /// How many parameter segments follow a matched flag token.
    fn parameter_count(&self) -> u8 {
        1
    }

    /// Check whether `token` addresses this descriptor.
    ///
    /// Returns the number of parameter segments to extract on a match. A
    /// long token must equal `--<long>` exactly; a short token must be `-`
    /// followed by exactly the short letter.
    fn match_token(&self, token: &str) -> Option<u8> {
        let spec = self.spec();
        let token = scanner::trim_spaces(token);
        if let Some(rest) = token.strip_prefix("--") {
            if !spec.long.is_empty() && rest == spec.long {
                return Some(self.parameter_count());
            }
        } else if let (Some(short), Some(rest)) = (spec.short, token.strip_prefix('-')) {
            let mut chars = rest.chars();
            if chars.next() == Some(short) && chars.next().is_none() {
                return Some(self.parameter_count());
            }
        }
        None
    }

    /// Render the compact usage fragment, `[-x display]` or
    /// `[--long display]`, into `buf`.
    ///
    /// Returns `None` when the buffer cannot hold the fragment. The short
    /// form wins when both flags exist.
    fn usage_fragment<'b>(&self, buf: &'b mut [u8]) -> Option<&'b str> {
        format_usage_fragment(self.spec(), buf)
    }

    /// Render the help-table signature, ` -x display, --long display`, into
    /// `buf`.
    ///
    /// Returns `None` when the buffer cannot hold the entry.
    fn help_entry<'b>(&self, buf: &'b mut [u8]) -> Option<&'b str> {
        format_help_entry(self.spec(), buf)
    }
}

/// A descriptor whose parsed value can be recovered with its native type.
///
/// Implemented by every concrete descriptor; lets
/// [`Matches`](super::parser::Matches) hand back a `u32`, `&str`, [`IpV4`],
/// or enumeration key instead of a raw [`Value`].
pub trait TypedArgument: Argument {
    /// The native value type, borrowing from the parsed line where needed.
    type Output<'line>;

    /// Recover the native value from the slot contents, if the slot was
    /// filled by this kind of descriptor.
    fn decode<'line>(&self, value: Value<'line>) -> Option<Self::Output<'line>>;
}

/// Bounded byte writer for rendering fragments into caller buffers.
pub(crate) struct ByteWriter<'b> {
    buf: &'b mut [u8],
    len: usize,
}

impl<'b> ByteWriter<'b> {
    pub(crate) fn new(buf: &'b mut [u8]) -> Self {
        Self { buf, len: 0 }
    }

    pub(crate) fn capacity(&self) -> usize {
        self.buf.len()
    }

    pub(crate) fn remaining(&self) -> usize {
        self.buf.len() - self.len
    }

    pub(crate) fn push(&mut self, byte: u8) {
        if self.len < self.buf.len() {
            self.buf[self.len] = byte;
            self.len += 1;
        }
    }

    pub(crate) fn push_char(&mut self, c: char) {
        let mut utf8 = [0u8; 4];
        self.push_str(c.encode_utf8(&mut utf8));
    }

    pub(crate) fn push_str(&mut self, text: &str) {
        for &byte in text.as_bytes() {
            self.push(byte);
        }
    }

    /// Overwrite the most recently written byte.
    pub(crate) fn set_last(&mut self, byte: u8) {
        if self.len > 0 {
            self.buf[self.len - 1] = byte;
        }
    }

    pub(crate) fn into_str(self) -> Option<&'b str> {
        let Self { buf, len } = self;
        core::str::from_utf8(&buf[..len]).ok()
    }
}

fn format_usage_fragment<'b>(spec: &ArgSpec, buf: &'b mut [u8]) -> Option<&'b str> {
    let display_len = if spec.display.is_empty() {
        0
    } else {
        spec.display.len() + 1
    };
    let mut writer = ByteWriter::new(buf);
    match spec.short {
        Some(short) => {
            if writer.capacity() < 3 + short.len_utf8() + display_len {
                return None;
            }
            writer.push_str("[-");
            writer.push_char(short);
        }
        None => {
            if writer.capacity() < spec.long.len() + 4 + display_len {
                return None;
            }
            writer.push_str("[--");
            writer.push_str(spec.long);
        }
    }
    if !spec.display.is_empty() {
        writer.push(b' ');
        writer.push_str(spec.display);
    }
    writer.push(b']');
    writer.into_str()
}

fn format_help_entry<'b>(spec: &ArgSpec, buf: &'b mut [u8]) -> Option<&'b str> {
    let mut required = match spec.short {
        Some(short) => spec.display.len() + 5 + short.len_utf8(),
        None => 1,
    };
    if !spec.long.is_empty() {
        required += spec.long.len() + spec.display.len() + 3;
    }
    if buf.len() < required {
        return None;
    }
    let mut writer = ByteWriter::new(buf);
    writer.push(b' ');
    if let Some(short) = spec.short {
        writer.push(b'-');
        writer.push_char(short);
        writer.push(b' ');
        writer.push_str(spec.display);
        writer.push_str(", ");
    }
    if !spec.long.is_empty() {
        writer.push_str("--");
        writer.push_str(spec.long);
        writer.push(b' ');
        writer.push_str(spec.display);
    }
    writer.into_str()
}
