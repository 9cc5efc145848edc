//! Numeric option descriptors.

use super::super::scanner;
use super::super::status::Status;
use super::{ArgSpec, Argument, TypedArgument, Value};
use core::num::IntErrorKind;

mod sealed {
    pub trait Sealed {}
}

/// Primitive value types a [`NumericArg`] can produce.
///
/// Implemented for the fixed-width integers (`u8` through `u64`, `i8`
/// through `i64`) and for `f32`/`f64`. The trait is sealed; the descriptor
/// set stays closed.
pub trait Numeric: Copy + PartialOrd + Default + core::fmt::Debug + sealed::Sealed {
    /// Convert parameter text in the given radix.
    ///
    /// Text that overflows the type entirely reports
    /// `MAX_VIOLATION | MIN_VIOLATION`; malformed text reports
    /// `INCORRECT_ARGUMENT`. Float types parse decimal and ignore the radix.
    fn from_text(text: &str, base: u32) -> Result<Self, Status>;

    /// Widen into a [`Value`] slot.
    fn into_value(self) -> Value<'static>;

    /// Narrow back out of a [`Value`] slot.
    fn from_value(value: Value<'_>) -> Option<Self>;
}

macro_rules! numeric_unsigned {
    ($($ty:ty),*) => {$(
        impl sealed::Sealed for $ty {}

        impl Numeric for $ty {
            fn from_text(text: &str, base: u32) -> Result<Self, Status> {
                <$ty>::from_str_radix(text, base).map_err(|err| match err.kind() {
                    IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => {
                        Status::MAX_VIOLATION | Status::MIN_VIOLATION
                    }
                    _ => Status::INCORRECT_ARGUMENT,
                })
            }

            fn into_value(self) -> Value<'static> {
                Value::Unsigned(self as u64)
            }

            fn from_value(value: Value<'_>) -> Option<Self> {
                match value {
                    Value::Unsigned(wide) => Some(wide as $ty),
                    _ => None,
                }
            }
        }
    )*};
}

macro_rules! numeric_signed {
    ($($ty:ty),*) => {$(
        impl sealed::Sealed for $ty {}

        impl Numeric for $ty {
            fn from_text(text: &str, base: u32) -> Result<Self, Status> {
                <$ty>::from_str_radix(text, base).map_err(|err| match err.kind() {
                    IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => {
                        Status::MAX_VIOLATION | Status::MIN_VIOLATION
                    }
                    _ => Status::INCORRECT_ARGUMENT,
                })
            }

            fn into_value(self) -> Value<'static> {
                Value::Signed(self as i64)
            }

            fn from_value(value: Value<'_>) -> Option<Self> {
                match value {
                    Value::Signed(wide) => Some(wide as $ty),
                    _ => None,
                }
            }
        }
    )*};
}

macro_rules! numeric_float {
    ($($ty:ty),*) => {$(
        impl sealed::Sealed for $ty {}

        impl Numeric for $ty {
            fn from_text(text: &str, _base: u32) -> Result<Self, Status> {
                match text.parse::<$ty>() {
                    Ok(value) if value.is_nan() => Err(Status::INCORRECT_ARGUMENT),
                    Ok(value) => Ok(value),
                    Err(_) => Err(Status::INCORRECT_ARGUMENT),
                }
            }

            fn into_value(self) -> Value<'static> {
                Value::Float(self as f64)
            }

            fn from_value(value: Value<'_>) -> Option<Self> {
                match value {
                    Value::Float(wide) => Some(wide as $ty),
                    _ => None,
                }
            }
        }
    )*};
}

numeric_unsigned!(u8, u16, u32, u64);
numeric_signed!(i8, i16, i32, i64);
numeric_float!(f32, f64);

/// A range-checked numeric option.
///
/// Integer descriptors parse in a configurable radix; float descriptors
/// parse decimal. The value must land inside `[min, max]`, each bound
/// inclusive, or the parse reports the violated bound. A float parse that
/// overflows to infinity is caught by the same bounds.
///
/// # Examples
///
/// ```rust
/// use libcli::cli::{Argument, NumericArg, Status, Value};
///
/// let gears = NumericArg::<u8>::new(Some('g'), "gears", "count", "Gear count.", 3, 20);
/// assert_eq!(gears.parse_value("5"), Ok(Value::Unsigned(5)));
/// assert_eq!(gears.parse_value("21"), Err(Status::MAX_VIOLATION));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct NumericArg<T> {
    spec: ArgSpec,
    base: u32,
    min: T,
    max: T,
}

impl<T: Numeric> NumericArg<T> {
    /// Describe a numeric option with inclusive bounds, parsing decimal.
    pub const fn new(
        short: Option<char>,
        long: &'static str,
        display: &'static str,
        help: &'static str,
        min: T,
        max: T,
    ) -> Self {
        Self {
            spec: ArgSpec::new(short, long, display, help),
            base: 10,
            min,
            max,
        }
    }

    /// Parse integer text in `base` instead of decimal.
    ///
    /// `base` must be in `2..=36`. Float descriptors ignore it.
    pub const fn with_base(mut self, base: u32) -> Self {
        assert!(2 <= base && base <= 36);
        self.base = base;
        self
    }

    /// Mark the option as required.
    pub const fn required(mut self) -> Self {
        self.spec.required = true;
        self
    }
}

impl<T: Numeric> Argument for NumericArg<T> {
    fn spec(&self) -> &ArgSpec {
        &self.spec
    }

    fn parse_value<'line>(&self, text: &'line str) -> Result<Value<'line>, Status> {
        let text = scanner::trim_spaces(text);
        if text.is_empty() {
            return Err(Status::MISSING_ARGUMENT);
        }
        // spaces in the middle of the number are not allowed
        if text.contains(' ') {
            return Err(Status::INCORRECT_ARGUMENT);
        }
        let value = T::from_text(text, self.base)?;
        if value > self.max {
            return Err(Status::MAX_VIOLATION);
        }
        if value < self.min {
            return Err(Status::MIN_VIOLATION);
        }
        Ok(value.into_value())
    }
}

impl<T: Numeric> TypedArgument for NumericArg<T> {
    type Output<'line> = T;

    fn decode<'line>(&self, value: Value<'line>) -> Option<T> {
        T::from_value(value)
    }
}
