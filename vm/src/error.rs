use color_print::cprintln;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Unknown command: `{0}`")]
    UnknownCommand(String),

    #[error("Unknown segment: `{0}`")]
    UnknownSegment(String),

    #[error("Invalid index: `{0}` (must be 0-32767)")]
    InvalidIndex(String),

    #[error("Cannot pop to the constant segment")]
    PopConstant,

    #[error("Index {1} out of range for segment `{0}` (max {2})")]
    SegmentIndexOutOfRange(String, u16, u16),

    #[error("Generated assembly does not assemble: {0}")]
    Assemble(#[source] hasm::LineError),

    #[error("--output is required with several input files")]
    MissingOutput,

    #[error("Failed to open file: {0}")]
    FileOpen(String, #[source] std::io::Error),

    #[error("Failed to write file: {0}")]
    FileWrite(String, #[source] std::io::Error),
}

/// An error attributed to a source line of one input file. IO errors have line 0.
#[derive(Error, Debug)]
#[error("{error} at {file}:{line}")]
pub struct LineError {
    pub file: String,
    pub line: usize,
    pub raw: String,
    #[source]
    pub error: Error,
}

impl LineError {
    pub fn new(file: &str, line: usize, raw: &str, error: Error) -> Self {
        LineError {
            file: file.to_string(),
            line,
            raw: raw.to_string(),
            error,
        }
    }

    pub fn print_diag(&self) {
        cprintln!("<red,bold>error</>: {}", self.error);
        if self.line == 0 {
            cprintln!("     <blue>--></> <underline>{}</>", self.file);
            return;
        }
        cprintln!("     <blue>--></> <underline>{}:{}</>", self.file, self.line);
        cprintln!("      <blue>|</>");
        cprintln!(" <blue>{:>4} |</> {}", self.line, self.raw);
        cprintln!("      <blue>|</>");
    }
}
