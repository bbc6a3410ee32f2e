//! # Formath Formatter
//!
//! Positional template formatting and timestamped log lines.
//!
//! ## Overview
//!
//! This crate turns a template string plus a list of heterogeneous values
//! into a single `String`, and optionally prints that string as a log line
//! on standard output:
//!
//! ```text
//! "Hello, {}! The answer is {}."  +  ["World", 42]
//!                 │
//!                 │ format()
//!                 ▼
//! "Hello, World! The answer is 42."
//!                 │
//!                 │ log(Level::Info, ..)
//!                 ▼
//! [2024-01-31 09:15:00] [INFO] Hello, World! The answer is 42.
//! ```
//!
//! ## Failure Policy
//!
//! [`format`] never panics and never returns an error. A malformed template,
//! or an argument list that does not match its placeholders, yields a string
//! starting with `"Format error: "` followed by the [`FormatError`]
//! description. Callers that want the typed error use [`try_format`].
//! [`log`] inherits this policy: the diagnostic text ends up in the line.
//!
//! ## Template Grammar
//!
//! - `{}` takes the next argument
//! - `{N}` takes argument `N`
//! - `{:spec}` / `{N:spec}` apply fill, alignment, sign, width, precision
//!   and a type (`x`, `b`, `o`, `e`, `f`, `g`, ...), see [`format_spec`]
//! - `{{` / `}}` are literal braces
//!
//! Automatic and manual indexing cannot be mixed in one template. Options
//! that do not fit the argument (`{:x}` on text, a precision on an integer)
//! are reported as [`FormatError::InvalidPlaceholder`].
//!
//! ## Canonical Text
//!
//! Integers, booleans, characters and text render as their `Display` form.
//! A float without options renders in its shortest round-trip form, in
//! exponent notation (`1e+20`, `1.5e-07`) when the decimal exponent is below
//! -4 or at least 16, and as plain decimals otherwise. NaN and infinity
//! print as `nan` and `inf`.
//!
//! ## Examples
//!
//! ```
//! use formath_fmt::{sformat, Formatter};
//!
//! let formatter = Formatter::new();
//! let greeting = formatter.format("Hello, {}! The answer is {}.", &["World".into(), 42.into()]);
//! assert_eq!(greeting, "Hello, World! The answer is 42.");
//!
//! // The macro converts each argument for you.
//! assert_eq!(sformat!("{} + {} = {}", 1, 2.5, 3.5), "1 + 2.5 = 3.5");
//! assert_eq!(sformat!("[{:.2f}] [{:>5}] [{:#x}]", 3.14159, 7, 255), "[3.14] [    7] [0xff]");
//!
//! // Failures are data.
//! assert!(sformat!("{} {}", 1).starts_with("Format error:"));
//! ```
//!
//! ## Feature Flags
//!
//! - `dynamic`: [`LIBRARY_TYPE`] reports `"Dynamic Library"` instead of
//!   `"Static Library"`.

/// Argument values substituted into placeholders.
pub mod arg;
pub mod format_spec;
/// Log severity and the log line record.
pub mod record;
/// Template parsing and rendering.
pub mod template;


pub use arg::Arg;
pub use format_spec::FormatSpec;
pub use record::{Level, LogRecord};
pub use template::{FormatError, Template};

use std::io::{self, Write};

/// Semantic version of this library build.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// How this library was packaged, fixed at compile time.
#[cfg(feature = "dynamic")]
pub const LIBRARY_TYPE: &str = "Dynamic Library";
#[cfg(not(feature = "dynamic"))]
pub const LIBRARY_TYPE: &str = "Static Library";

/// Prefix of every string returned by [`format`] on failure.
pub const FORMAT_ERROR_PREFIX: &str = "Format error: ";

/// Renders `template` with `args`, reporting failures as a [`FormatError`].
pub fn try_format(template: &str, args: &[Arg]) -> Result<String, FormatError> {
    Template::parse(template)?.render(args)
}

/// Renders `template` with `args`.
///
/// On failure the result is `"Format error: <details>"` instead of the
/// rendered text.
pub fn format(template: &str, args: &[Arg]) -> String {
    match try_format(template, args) {
        Ok(text) => text,
        Err(e) => {
            log::debug!("template {:?} failed: {}", template, e);
            format!("{}{}", FORMAT_ERROR_PREFIX, e)
        }
    }
}

/// Formats the message and stamps it with the current local time.
pub fn record(level: impl Into<Level>, template: &str, args: &[Arg]) -> LogRecord {
    LogRecord::new(level.into(), format(template, args))
}

/// Writes one log line to `writer` and flushes it.
///
/// The record is terminated by a single newline. Newlines inside the level
/// tag, the template or an argument are written as-is, so such a record
/// spans several physical lines.
pub fn log_to<W: Write>(
    writer: &mut W,
    level: impl Into<Level>,
    template: &str,
    args: &[Arg],
) -> io::Result<()> {
    let record = record(level, template, args);
    log::trace!("emitting {:?} record", record.level);
    writeln!(writer, "{}", record)?;
    writer.flush()
}

/// Writes one log line to standard output.
///
/// Same output as [`log_to`], including its caveat about embedded newlines.
/// The line is written under the stdout lock so concurrent callers never
/// interleave within a line. Write failures are dropped.
pub fn log(level: impl Into<Level>, template: &str, args: &[Arg]) {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    if let Err(e) = log_to(&mut handle, level, template, args) {
        log::debug!("failed to write log line to stdout: {}", e);
    }
}

/// Field-free handle bundling the formatting operations.
///
/// Every method delegates to the free function of the same name; the type
/// exists for callers that prefer passing a formatter value around.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Formatter;

impl Formatter {
    pub fn new() -> Self {
        Self
    }

    /// See [`format`].
    pub fn format(&self, template: &str, args: &[Arg]) -> String {
        format(template, args)
    }

    /// See [`try_format`].
    pub fn try_format(&self, template: &str, args: &[Arg]) -> Result<String, FormatError> {
        try_format(template, args)
    }

    /// See [`log`].
    pub fn log(&self, level: impl Into<Level>, template: &str, args: &[Arg]) {
        log(level, template, args)
    }

    /// See [`log_to`].
    pub fn log_to<W: Write>(
        &self,
        writer: &mut W,
        level: impl Into<Level>,
        template: &str,
        args: &[Arg],
    ) -> io::Result<()> {
        log_to(writer, level, template, args)
    }

    pub fn version() -> &'static str {
        VERSION
    }

    pub fn library_type() -> &'static str {
        LIBRARY_TYPE
    }
}

/// Formats a template with any mix of argument types.
///
/// ```
/// assert_eq!(formath_fmt::sformat!("{} is {}", "x", true), "x is true");
/// ```
#[macro_export]
macro_rules! sformat {
    ($template:expr $(, $arg:expr)* $(,)?) => {
        $crate::format($template, &[$($crate::Arg::from($arg)),*])
    };
}

/// Logs a formatted line to standard output with any mix of argument types.
///
/// ```
/// formath_fmt::slog!("INFO", "processed {} items", 3);
/// ```
#[macro_export]
macro_rules! slog {
    ($level:expr, $template:expr $(, $arg:expr)* $(,)?) => {
        $crate::log($level, $template, &[$($crate::Arg::from($arg)),*])
    };
}
