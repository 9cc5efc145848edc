//! Typed command-line argument parsing.
//!
//! An option is described once, as an immutable value, by one of the
//! descriptor types in [`argument`]: [`NumericArg`] for integers and floats,
//! [`StringArg`] for length-bounded text, [`IpArg`] and [`MaskArg`] for IPv4
//! addresses and subnet masks, and [`EnumArg`] for closed keyword sets. A
//! [`CommandParser`] binds an ordered set of descriptors and walks a raw
//! input line against them, returning combinable [`Status`] flags and a
//! [`Matches`] record holding the typed values.
//!
//! Descriptors carry no per-parse state, so a single `static` descriptor set
//! can back every invocation of a command:
//!
//! ```rust
//! use libcli::cli::{Argument, CommandParser, Status, StringArg};
//! use libcli::io::Null;
//!
//! static COLOR: StringArg = StringArg::new(Some('c'), "color", "color", "Color name.", 1, 16);
//!
//! let arguments: [&dyn Argument; 1] = [&COLOR];
//! let parser = CommandParser::new("paint", "Paint settings.", &arguments);
//!
//! let (matches, status) = parser.parse("-c \"racing green\"", &mut Null);
//! assert_eq!(status, Status::SUCCESS);
//! assert_eq!(matches.get(&COLOR), "racing green");
//! ```

pub mod argument;
pub mod parser;
pub mod scanner;
pub mod status;

pub use argument::enumeration::EnumArg;
pub use argument::ip::{IpArg, IpV4, MaskArg};
pub use argument::numeric::{Numeric, NumericArg};
pub use argument::string::StringArg;
pub use argument::{ArgSpec, Argument, TypedArgument, Value};
pub use parser::{CommandParser, Matches};
pub use status::Status;

/// Maximum number of option descriptors one parser can bind.
///
/// Descriptors past this count are ignored by [`CommandParser::new`]. The
/// limit sizes the per-parse value slots; sixteen options is already an
/// unusually wide command surface for a device console.
pub const MAX_ARGUMENTS: usize = 16;
