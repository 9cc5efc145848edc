//! Parse status flags.

use core::fmt;
use core::ops::{BitOr, BitOrAssign};

/// Outcome of a parse step or a whole parse pass.
///
/// `Status` is a set of flags rather than a plain enum so that simultaneous
/// violations stay visible: text that overflows the value type entirely
/// reports [`Status::MAX_VIOLATION`] and [`Status::MIN_VIOLATION`] together.
/// An empty set means success.
///
/// # Examples
///
/// ```rust
/// use libcli::cli::Status;
///
/// let status = Status::MAX_VIOLATION | Status::MIN_VIOLATION;
/// assert!(status.contains(Status::MAX_VIOLATION));
/// assert!(status.contains(Status::MIN_VIOLATION));
/// assert!(!status.is_success());
/// ```
#[derive(Clone, Copy, PartialEq, Eq)]
#[must_use]
pub struct Status(u16);

impl Status {
    /// Nothing went wrong.
    pub const SUCCESS: Status = Status(0);
    /// A token matched no bound descriptor.
    pub const UNRECOGNIZED_PARAMETER: Status = Status(1 << 1);
    /// Value above the permitted maximum.
    pub const MAX_VIOLATION: Status = Status(1 << 2);
    /// Value below the permitted minimum.
    pub const MIN_VIOLATION: Status = Status(1 << 3);
    /// String value outside its permitted length bounds.
    pub const LENGTH_VIOLATION: Status = Status(1 << 4);
    /// A value was required but none was given.
    pub const MISSING_ARGUMENT: Status = Status(1 << 5);
    /// The value text has the wrong format.
    pub const INCORRECT_ARGUMENT: Status = Status(1 << 6);
    /// The line held no arguments although the command declares some.
    pub const NO_ARGUMENTS: Status = Status(1 << 7);
    /// A help token was found; usage text has been written to the sink.
    pub const HELP_REQUESTED: Status = Status(1 << 8);
    /// Catch-all failure, the complement of success.
    pub const ERROR: Status = Status(!0);

    /// Whether every flag in `other` is set in `self`.
    pub const fn contains(self, other: Status) -> bool {
        self.0 & other.0 == other.0
    }

    /// Whether no flag is set.
    pub const fn is_success(self) -> bool {
        self.0 == 0
    }

    /// The raw flag bits.
    pub const fn bits(self) -> u16 {
        self.0
    }
}

impl BitOr for Status {
    type Output = Status;

    fn bitor(self, rhs: Status) -> Status {
        Status(self.0 | rhs.0)
    }
}

impl BitOrAssign for Status {
    fn bitor_assign(&mut self, rhs: Status) {
        self.0 |= rhs.0;
    }
}

const FLAG_NAMES: [(Status, &str); 8] = [
    (Status::UNRECOGNIZED_PARAMETER, "UnrecognizedParameter"),
    (Status::MAX_VIOLATION, "MaxViolation"),
    (Status::MIN_VIOLATION, "MinViolation"),
    (Status::LENGTH_VIOLATION, "LengthViolation"),
    (Status::MISSING_ARGUMENT, "MissingArgument"),
    (Status::INCORRECT_ARGUMENT, "IncorrectArgument"),
    (Status::NO_ARGUMENTS, "NoArguments"),
    (Status::HELP_REQUESTED, "HelpRequested"),
];

impl fmt::Debug for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_success() {
            return f.write_str("Success");
        }
        if *self == Status::ERROR {
            return f.write_str("Error");
        }
        let mut first = true;
        for (flag, name) in FLAG_NAMES {
            if self.contains(flag) {
                if !first {
                    f.write_str(" | ")?;
                }
                f.write_str(name)?;
                first = false;
            }
        }
        Ok(())
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Status {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "Status({=u16:b})", self.0);
    }
}
