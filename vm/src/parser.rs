use strum::{Display, EnumString};

use crate::error::Error;

/// Largest value an `@constant` can hold.
const MAX_INDEX: u16 = 0x7FFF;

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, Display)]
#[strum(serialize_all = "lowercase")]
pub enum Segment {
    Constant,
    Local,
    Argument,
    This,
    That,
    Temp,
    Pointer,
    Static,
}

impl Segment {
    fn max_index(&self) -> u16 {
        match self {
            Segment::Temp => 7,
            Segment::Pointer => 1,
            _ => MAX_INDEX,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, Display)]
#[strum(serialize_all = "lowercase")]
pub enum ArithOp {
    Add,
    Sub,
    Neg,
    Eq,
    Gt,
    Lt,
    And,
    Or,
    Not,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Push(Segment, u16),
    Pop(Segment, u16),
    Arith(ArithOp),
}

impl Command {
    /// Parses one trimmed, non-comment line.
    pub fn parse(code: &str) -> Result<Command, Error> {
        let words: Vec<&str> = code.split_whitespace().collect();
        match words.as_slice() {
            [op @ ("push" | "pop"), segment, index] => {
                let segment: Segment = segment
                    .parse()
                    .map_err(|_| Error::UnknownSegment(segment.to_string()))?;
                let index = match index.parse::<u16>() {
                    Ok(v) if v <= MAX_INDEX => v,
                    _ => return Err(Error::InvalidIndex(index.to_string())),
                };
                if index > segment.max_index() {
                    return Err(Error::SegmentIndexOutOfRange(
                        segment.to_string(),
                        index,
                        segment.max_index(),
                    ));
                }
                match *op {
                    "push" => Ok(Command::Push(segment, index)),
                    _ => Ok(Command::Pop(segment, index)),
                }
            }
            [op] => op
                .parse()
                .map(Command::Arith)
                .map_err(|_| Error::UnknownCommand(code.to_string())),
            _ => Err(Error::UnknownCommand(code.to_string())),
        }
    }
}
