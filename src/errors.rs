//! Error types with rich diagnostics using miette
//!
//! Parse errors carry the input text and a span so a front end can point at
//! the offending character.

use glam::IVec2;
use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Source context for error reporting
#[derive(Debug, Clone)]
pub struct SourceContext {
    /// Name of the source ("<input>", "<stdin>:3", a file name, ...)
    pub name: String,
    /// The full path text
    pub source: String,
}

impl SourceContext {
    pub fn new(name: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            source: source.into(),
        }
    }

    /// Create a NamedSource for miette
    pub fn named_source(&self) -> NamedSource<String> {
        NamedSource::new(&self.name, self.source.clone())
    }

    /// Span covering `len` bytes at `position`, clamped to the source.
    pub(crate) fn span(&self, position: usize, len: usize) -> SourceSpan {
        let position = position.min(self.source.len());
        let len = len.min(self.source.len() - position);
        (position, len).into()
    }
}

// ============================================================================
// Parse Errors
// ============================================================================

/// Errors that occur while turning path text into commands
#[derive(Error, Diagnostic, Debug)]
pub enum ParseError {
    #[error("malformed argument at position {position}: expected a number")]
    #[diagnostic(
        code(pathtags::parse::malformed_argument),
        help("arguments are integers: an optional `-` followed by one or more digits")
    )]
    MalformedArgument {
        position: usize,
        #[source_code]
        src: NamedSource<String>,
        #[label("expected digits here")]
        span: SourceSpan,
    },

    #[error("unknown command '{command}' at position {position}")]
    #[diagnostic(
        code(pathtags::parse::unknown_command),
        help("supported commands are M, m, L and l")
    )]
    UnknownCommand {
        command: char,
        position: usize,
        #[source_code]
        src: NamedSource<String>,
        #[label("not a command")]
        span: SourceSpan,
    },

    #[error("argument at position {position} does not fit in a 32-bit integer")]
    #[diagnostic(code(pathtags::parse::argument_out_of_range))]
    ArgumentOutOfRange {
        position: usize,
        #[source_code]
        src: NamedSource<String>,
        #[label("out of range")]
        span: SourceSpan,
    },
}

impl ParseError {
    /// Byte offset in the input where the error was detected
    pub fn position(&self) -> usize {
        match self {
            ParseError::MalformedArgument { position, .. }
            | ParseError::UnknownCommand { position, .. }
            | ParseError::ArgumentOutOfRange { position, .. } => *position,
        }
    }
}

// ============================================================================
// Resolve Errors
// ============================================================================

/// Errors that occur while replaying commands against the cursor
#[derive(Error, Diagnostic, Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    /// Reserved for command variants that cannot be replayed against the cursor
    #[error("command {index} ('{command}') cannot be resolved")]
    #[diagnostic(code(pathtags::resolve::unsupported_command))]
    UnsupportedCommand { index: usize, command: String },

    #[error("command {index} moves the cursor out of range from {cursor}")]
    #[diagnostic(
        code(pathtags::resolve::coordinate_overflow),
        help("coordinates are 32-bit signed integers")
    )]
    CoordinateOverflow { index: usize, cursor: IVec2 },
}
