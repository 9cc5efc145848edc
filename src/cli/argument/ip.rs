//! IPv4 address and subnet-mask option descriptors.

use super::super::scanner;
use super::super::status::Status;
use super::{ArgSpec, Argument, TypedArgument, Value};
use core::fmt;

/// An IPv4 address as four dotted-decimal octets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct IpV4 {
    /// The octets in dotted order: `octets[0]` is the first dotted segment.
    pub octets: [u8; 4],
}

impl IpV4 {
    /// Build an address from its dotted segments, first segment first.
    pub const fn new(a: u8, b: u8, c: u8, d: u8) -> Self {
        Self {
            octets: [a, b, c, d],
        }
    }

    /// The address in network order: the first dotted segment ends up in
    /// the most significant byte, so a subnet mask's run of ones sits at
    /// the top of the word.
    pub const fn as_u32(self) -> u32 {
        u32::from_be_bytes(self.octets)
    }
}

impl fmt::Display for IpV4 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}.{}.{}.{}",
            self.octets[0], self.octets[1], self.octets[2], self.octets[3]
        )
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for IpV4 {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(
            f,
            "{=u8}.{=u8}.{=u8}.{=u8}",
            self.octets[0],
            self.octets[1],
            self.octets[2],
            self.octets[3]
        );
    }
}

/// Parse strictly formatted dotted-decimal text: exactly four segments,
/// each a plain decimal number in `0..=255`, no signs, no spaces.
fn parse_octets(text: &str) -> Result<IpV4, Status> {
    let text = scanner::trim_spaces(text);
    if text.is_empty() {
        return Err(Status::MISSING_ARGUMENT);
    }
    let mut octets = [0u8; 4];
    let mut count = 0;
    for segment in text.split('.') {
        if count == 4 {
            return Err(Status::INCORRECT_ARGUMENT);
        }
        if segment.is_empty() || !segment.bytes().all(|byte| byte.is_ascii_digit()) {
            return Err(Status::INCORRECT_ARGUMENT);
        }
        octets[count] = segment
            .parse()
            .map_err(|_| Status::INCORRECT_ARGUMENT)?;
        count += 1;
    }
    if count != 4 {
        return Err(Status::INCORRECT_ARGUMENT);
    }
    Ok(IpV4 { octets })
}

/// An IPv4 address option, e.g. `--ip 192.168.11.1`.
///
/// Any malformed segment, embedded space, or wrong octet count rejects the
/// whole value; no partial address is ever produced.
#[derive(Debug, Clone, Copy)]
pub struct IpArg {
    spec: ArgSpec,
}

impl IpArg {
    /// Describe an IPv4 address option.
    pub const fn new(
        short: Option<char>,
        long: &'static str,
        display: &'static str,
        help: &'static str,
    ) -> Self {
        Self {
            spec: ArgSpec::new(short, long, display, help),
        }
    }

    /// Mark the option as required.
    pub const fn required(mut self) -> Self {
        self.spec.required = true;
        self
    }
}

impl Argument for IpArg {
    fn spec(&self) -> &ArgSpec {
        &self.spec
    }

    fn parse_value<'line>(&self, text: &'line str) -> Result<Value<'line>, Status> {
        parse_octets(text).map(Value::Ip)
    }
}

impl TypedArgument for IpArg {
    type Output<'line> = IpV4;

    fn decode<'line>(&self, value: Value<'line>) -> Option<IpV4> {
        match value {
            Value::Ip(ip) => Some(ip),
            _ => None,
        }
    }
}

/// A subnet-mask option, e.g. `--mask 255.255.255.0`.
///
/// Parses like [`IpArg`] and additionally requires a canonical mask: viewed
/// in network order, a single run of ones from the most significant bit
/// followed only by zeros. The all-ones mask is accepted outright, and the
/// all-zeros mask passes the scan as the degenerate empty run.
#[derive(Debug, Clone, Copy)]
pub struct MaskArg {
    spec: ArgSpec,
}

impl MaskArg {
    /// Describe a subnet-mask option.
    pub const fn new(
        short: Option<char>,
        long: &'static str,
        display: &'static str,
        help: &'static str,
    ) -> Self {
        Self {
            spec: ArgSpec::new(short, long, display, help),
        }
    }

    /// Mark the option as required.
    pub const fn required(mut self) -> Self {
        self.spec.required = true;
        self
    }
}

fn is_valid_mask(mask: IpV4) -> bool {
    let mut bits = mask.as_u32();
    if bits & 1 != 0 {
        // ones reach the lowest bit, only the full mask qualifies
        return bits == u32::MAX;
    }
    let mut expect_zeros = true;
    for _ in 0..32 {
        if expect_zeros {
            if bits & 1 != 0 {
                expect_zeros = false;
            }
        } else if bits & 1 == 0 {
            return false;
        }
        bits >>= 1;
    }
    true
}

impl Argument for MaskArg {
    fn spec(&self) -> &ArgSpec {
        &self.spec
    }

    fn parse_value<'line>(&self, text: &'line str) -> Result<Value<'line>, Status> {
        let mask = parse_octets(text)?;
        if !is_valid_mask(mask) {
            return Err(Status::INCORRECT_ARGUMENT);
        }
        Ok(Value::Ip(mask))
    }
}

impl TypedArgument for MaskArg {
    type Output<'line> = IpV4;

    fn decode<'line>(&self, value: Value<'line>) -> Option<IpV4> {
        match value {
            Value::Ip(ip) => Some(ip),
            _ => None,
        }
    }
}
