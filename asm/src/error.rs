use color_print::cprintln;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Syntax,
    Value,
    Io,
}

#[derive(Error, Debug)]
pub enum Error {
    // Syntax errors
    #[error("Malformed label: `{0}` (expected `(name)`)")]
    MalformedLabel(String),

    #[error("Invalid symbol: `{0}` (symbols cannot begin with a digit and may only contain letters, digits, `_`, `.`, `$` and `:`)")]
    InvalidSymbol(String),

    #[error("Malformed C-instruction: `{0}` (if dest is empty, omit the `=`)")]
    EmptyDest(String),

    #[error("Malformed C-instruction: `{0}` (if jump is empty, omit the `;`)")]
    EmptyJump(String),

    #[error("Duplicate assignment target `{1}` in `{0}`")]
    DuplicateDest(String, char),

    #[error("Re-defined label: `{0}`")]
    RedefinedLabel(String),

    #[error("Unknown instruction: `{0}`")]
    UnknownInstruction(String),

    // Value errors
    #[error("Address out of range: `{0}` (must be 0-32767)")]
    AddressOutOfRange(String),

    #[error("Unknown operation: `{0}`")]
    UnknownComp(String),

    #[error("Invalid assignment target `{1}` in `{0}`")]
    UnknownDest(String, char),

    #[error("Unknown jump: `{0}`")]
    UnknownJump(String),

    // IO
    #[error("Failed to open file: {0}")]
    FileOpen(String, #[source] std::io::Error),

    #[error("Failed to write file: {0}")]
    FileWrite(String, #[source] std::io::Error),
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::MalformedLabel(_)
            | Error::InvalidSymbol(_)
            | Error::EmptyDest(_)
            | Error::EmptyJump(_)
            | Error::DuplicateDest(..)
            | Error::RedefinedLabel(_)
            | Error::UnknownInstruction(_) => ErrorKind::Syntax,
            Error::AddressOutOfRange(_)
            | Error::UnknownComp(_)
            | Error::UnknownDest(..)
            | Error::UnknownJump(_) => ErrorKind::Value,
            Error::FileOpen(..)
            | Error::FileWrite(..) => ErrorKind::Io,
        }
    }

    /// Print error with the file location and the offending source line
    pub fn print_diag(&self, file: &str, line: usize, raw: &str) {
        match self.kind() {
            ErrorKind::Syntax => cprintln!("<red,bold>error[syntax]</>: {}", self),
            ErrorKind::Value => cprintln!("<red,bold>error[value]</>: {}", self),
            ErrorKind::Io => {
                cprintln!("<red,bold>error[io]</>: {}", self);
                cprintln!("     <blue>--></> <underline>{}</>", file);
                return;
            }
        }
        cprintln!("     <blue>--></> <underline>{}:{}</>", file, line);
        cprintln!("      <blue>|</>");
        cprintln!(" <blue>{:>4} |</> {}", line, raw);
        cprintln!("      <blue>|</>");
    }
}

/// An error attributed to a 1-based source line.
#[derive(Error, Debug)]
#[error("{error} at line: {line}")]
pub struct LineError {
    pub line: usize,
    pub raw: String,
    #[source]
    pub error: Error,
}

impl LineError {
    pub fn new(line: usize, raw: &str, error: Error) -> Self {
        LineError {
            line,
            raw: raw.to_string(),
            error,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        self.error.kind()
    }

    pub fn print_diag(&self, file: &str) {
        self.error.print_diag(file, self.line, &self.raw);
    }
}
