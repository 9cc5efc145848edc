//! # libcli - Embedded command-line argument parsing
//!
//! A compact, typed command-line argument parser for embedded systems and
//! `no_std` environments. Option descriptors are declared once as immutable
//! values, bound to a parser in a fixed order, and matched against raw text
//! lines without any heap allocation. Parsed string values are borrowed views
//! into the input line.
//!
//! ## Features
//!
//! - **Zero-allocation**: descriptors, parse state, and rendering buffers are
//!   all fixed-size; nothing is heap allocated
//! - **Typed options**: numeric (integer and float, with range and base),
//!   length-bounded strings, IPv4 addresses, subnet masks, and closed
//!   enumerations
//! - **Combinable status flags**: simultaneous violations are reported
//!   together instead of collapsing to a single error
//! - **Usage and help rendering**: compact `[-x value]` usage fragments and
//!   an aligned help table, generated from the descriptors themselves
//! - **Pluggable output**: diagnostics and help text go to any byte sink
//!
//! ## Usage
//!
//! ```rust
//! use libcli::cli::{Argument, CommandParser, NumericArg, Status};
//! use libcli::io::Buffer;
//!
//! let baud = NumericArg::<u32>::new(Some('b'), "baudrate", "baud", "Baudrate", 10, 200_000);
//! let data_bits = NumericArg::<u8>::new(None, "dataBits", "data_bits", "Data bits count.", 1, 9);
//! let arguments: [&dyn Argument; 2] = [&baud, &data_bits];
//!
//! let parser = CommandParser::new("usart", "USART configuration.", &arguments);
//! let mut console = Buffer::<512>::new();
//!
//! let (matches, status) = parser.parse("-b 115200 --dataBits 8", &mut console);
//! assert_eq!(status, Status::SUCCESS);
//! assert_eq!(matches.get(&baud), 115_200);
//! assert_eq!(matches.get(&data_bits), 8);
//! ```
//!
//! A menu or console layer is expected to split the command word from the
//! rest of the line and hand the remainder to [`cli::CommandParser::parse`],
//! together with a sink implementing [`io::Write`] for help output and
//! diagnostics.
//!
//! ## Platform Support
//!
//! This library is designed to work on:
//! - Embedded microcontrollers (ARM Cortex-M, RISC-V, etc.)
//! - Linux-based devices exposing a serial console
//! - Any platform supporting Rust's `core` library
//!
//! ## Optional Features
//!
//! - `std`: Enable standard library support (default: disabled)
//! - `defmt`: Enable defmt formatting support for embedded debugging

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(missing_docs)]
#![warn(missing_debug_implementations)]

/// Command-line argument parsing: option descriptors, the parser engine,
/// status flags, and usage/help rendering.
pub mod cli;

/// Byte-sink abstraction used for help output and diagnostics, with
/// ready-made discard and capture sinks.
pub mod io;
