//! The argument parser engine.

use super::MAX_ARGUMENTS;
use super::argument::{Argument, TypedArgument, Value};
use super::scanner;
use super::status::Status;
use crate::io::Write;

const ENDL: &str = "\n\r";
const HELP_COLUMN: &str = "                    ";
const USAGE_BUFFER: usize = 30;
const HELP_BUFFER: usize = 40;

/// Best-effort sink output; a sink failure never changes a parse outcome.
fn emit<S: Write>(sink: &mut S, text: &str) {
    let _ = sink.write_str(text);
}

fn is_help_token(token: &str) -> bool {
    let token = scanner::trim_spaces(token);
    token == "-h" || token == "--help"
}

/// A single-command argument parser.
///
/// Binds an ordered set of option descriptors at construction and never
/// mutates afterwards, so one parser can serve every invocation of its
/// command. Each [`parse`](CommandParser::parse) call scans one line of
/// text, everything after the command name, and produces a fresh
/// [`Matches`] record next to a [`Status`].
///
/// # Examples
///
/// ```rust
/// use libcli::cli::{Argument, CommandParser, NumericArg, Status};
/// use libcli::io::Buffer;
///
/// let speed = NumericArg::<f32>::new(None, "speed", "speed", "Max speed.", 50.0, 400.0);
/// let arguments: [&dyn Argument; 1] = [&speed];
/// let parser = CommandParser::new("set", "Set car parameters", &arguments);
///
/// let mut console = Buffer::<256>::new();
/// let (matches, status) = parser.parse("--speed 180.5", &mut console);
/// assert_eq!(status, Status::SUCCESS);
/// assert_eq!(matches.get(&speed), 180.5);
/// ```
#[derive(Debug)]
pub struct CommandParser<'a> {
    name: &'a str,
    description: &'a str,
    arguments: &'a [&'a dyn Argument],
}

impl<'a> CommandParser<'a> {
    /// Bind `arguments`, in order, to a parser for the command `name`.
    ///
    /// The first descriptor matching a token wins, so order matters when
    /// flags overlap. At most [`MAX_ARGUMENTS`] descriptors are bound;
    /// any beyond that are ignored.
    pub fn new(
        name: &'a str,
        description: &'a str,
        arguments: &'a [&'a dyn Argument],
    ) -> Self {
        let arguments = if arguments.len() > MAX_ARGUMENTS {
            &arguments[..MAX_ARGUMENTS]
        } else {
            arguments
        };
        Self {
            name,
            description,
            arguments,
        }
    }

    /// Parse one line of text against the bound descriptors.
    ///
    /// The scan walks from flag token to flag token. A `-h` or `--help`
    /// token writes the full usage text to `sink` and short-circuits with
    /// [`Status::HELP_REQUESTED`]; a token no descriptor recognizes writes
    /// a one-line diagnostic and aborts with
    /// [`Status::UNRECOGNIZED_PARAMETER`]; a value conversion failure
    /// aborts with that conversion's status. After a clean scan, a missing
    /// required option reports [`Status::MISSING_ARGUMENT`].
    ///
    /// String values in the returned [`Matches`] borrow from `line`.
    pub fn parse<'line, S: Write>(
        &self,
        line: &'line str,
        sink: &mut S,
    ) -> (Matches<'line, 'a>, Status) {
        let mut matches = Matches::new(self.arguments);
        let mut rest = scanner::trim_spaces(line);
        if rest.is_empty() && !self.arguments.is_empty() {
            return (matches, Status::NO_ARGUMENTS);
        }
        while let Some(pos) = scanner::find_flag(rest) {
            rest = &rest[pos..];
            let token = scanner::token(rest);
            if is_help_token(token) {
                self.write_usage(sink);
                return (matches, Status::HELP_REQUESTED);
            }
            let mut consumed = None;
            for (index, argument) in self.arguments.iter().enumerate() {
                if let Some(count) = argument.match_token(token) {
                    let tail = &rest[token.len()..];
                    let (parameters, advance) = scanner::parameter_run(tail, count);
                    match argument.parse_value(parameters) {
                        Ok(value) => matches.fill(index, value),
                        Err(status) => return (matches, status),
                    }
                    consumed = Some(token.len() + advance);
                    break;
                }
            }
            match consumed {
                Some(advance) => rest = &rest[advance..],
                None => {
                    emit(sink, "\n\r\tUnrecognized parameter: ");
                    emit(sink, token);
                    return (matches, Status::UNRECOGNIZED_PARAMETER);
                }
            }
        }
        for (index, argument) in self.arguments.iter().enumerate() {
            if argument.spec().required && !matches.filled(index) {
                return (matches, Status::MISSING_ARGUMENT);
            }
        }
        (matches, Status::SUCCESS)
    }

    /// Write the full usage text to `sink`.
    ///
    /// The banner lists every option's usage fragment, the command
    /// description, and a help table with descriptions aligned to column
    /// 20; a signature wider than the column wraps onto its own line.
    pub fn write_usage<S: Write>(&self, sink: &mut S) {
        emit(sink, "usage: ");
        emit(sink, self.name);
        for argument in self.arguments {
            emit(sink, " ");
            let mut buf = [0u8; USAGE_BUFFER];
            let fragment = argument.usage_fragment(&mut buf).unwrap_or("");
            emit(sink, fragment);
        }
        emit(sink, ENDL);
        emit(sink, ENDL);
        emit(sink, self.description);
        emit(sink, ENDL);
        emit(sink, ENDL);
        emit(sink, "optional arguments:");
        emit(sink, ENDL);
        emit(sink, " -h, --help         show this help message and exit");
        for argument in self.arguments {
            emit(sink, ENDL);
            let mut buf = [0u8; HELP_BUFFER];
            let entry = argument.help_entry(&mut buf).unwrap_or("");
            emit(sink, entry);
            if entry.len() > HELP_COLUMN.len() {
                emit(sink, ENDL);
                emit(sink, HELP_COLUMN);
            } else {
                emit(sink, &HELP_COLUMN[..HELP_COLUMN.len() - entry.len()]);
            }
            emit(sink, argument.spec().help);
        }
        emit(sink, ENDL);
    }
}

/// Typed values collected by one parse call.
///
/// Holds one slot per bound descriptor, in binding order. A slot is filled
/// only when its option appeared on the line and converted cleanly;
/// [`get`](Matches::get) falls back to the value type's default for an
/// absent option, and [`is_present`](Matches::is_present) tells the two
/// cases apart.
#[derive(Debug)]
pub struct Matches<'line, 'a> {
    arguments: &'a [&'a dyn Argument],
    slots: heapless::Vec<Option<Value<'line>>, MAX_ARGUMENTS>,
}

impl<'line, 'a> Matches<'line, 'a> {
    fn new(arguments: &'a [&'a dyn Argument]) -> Self {
        let mut slots = heapless::Vec::new();
        for _ in arguments {
            let _ = slots.push(None);
        }
        Self { arguments, slots }
    }

    fn fill(&mut self, index: usize, value: Value<'line>) {
        if let Some(slot) = self.slots.get_mut(index) {
            *slot = Some(value);
        }
    }

    fn filled(&self, index: usize) -> bool {
        matches!(self.slots.get(index), Some(Some(_)))
    }

    fn slot_index(&self, target: *const u8) -> Option<usize> {
        self.arguments.iter().position(|argument| {
            let ptr: *const dyn Argument = *argument;
            ptr.cast::<u8>() == target
        })
    }

    /// The typed value produced by `argument`, or `None` when the option
    /// was absent or `argument` is not bound to the parser.
    pub fn value<A: TypedArgument>(&self, argument: &A) -> Option<A::Output<'line>> {
        let index = self.slot_index((argument as *const A).cast())?;
        let value = (*self.slots.get(index)?)?;
        argument.decode(value)
    }

    /// The typed value produced by `argument`, or the type's default when
    /// the option was absent.
    pub fn get<A: TypedArgument>(&self, argument: &A) -> A::Output<'line>
    where
        A::Output<'line>: Default,
    {
        self.value(argument).unwrap_or_default()
    }

    /// Whether `argument` received a value during the parse.
    pub fn is_present(&self, argument: &dyn Argument) -> bool {
        match self.slot_index((argument as *const dyn Argument).cast()) {
            Some(index) => self.filled(index),
            None => false,
        }
    }
}
