use arch::{
    comp::Comp,
    dest::{Dest, DestError},
    inst::Inst,
    jump::Jump,
    symbol::{is_valid_symbol, MAX_ADDR},
};

use crate::error::Error;

// ----------------------------------------------------------------------------
// Statement

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Stmt {
    /// `(name)`
    Label(String),
    /// `@value` or `@symbol`
    AInst(Imm),
    /// `dest=comp;jump`
    CInst(Inst),
}

impl Stmt {
    /// Classifies one source line. Blank lines and lines starting with `//` give `None`.
    pub fn parse(raw: &str) -> Result<Option<Stmt>, Error> {
        let code = raw.trim();
        if code.is_empty() || code.starts_with("//") {
            return Ok(None);
        }
        let stmt = match code.chars().next() {
            Some('(') => Stmt::Label(parse_label(code)?),
            Some('@') => Stmt::AInst(Imm::parse(&code[1..])?),
            _ => Stmt::CInst(parse_cinst(code)?),
        };
        Ok(Some(stmt))
    }
}

fn parse_label(code: &str) -> Result<String, Error> {
    let label = code
        .strip_prefix('(')
        .and_then(|s| s.strip_suffix(')'))
        .ok_or_else(|| Error::MalformedLabel(code.to_string()))?;
    if is_valid_symbol(label) {
        Ok(label.to_string())
    } else {
        Err(Error::InvalidSymbol(label.to_string()))
    }
}

// ----------------------------------------------------------------------------
// Immidiate

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Imm {
    Literal(u16),
    Ident(String),
}

impl Imm {
    fn parse(s: &str) -> Result<Imm, Error> {
        if !s.is_empty() && s.chars().all(|c| c.is_ascii_digit()) {
            return match s.parse::<u16>() {
                Ok(v) if v <= MAX_ADDR => Ok(Imm::Literal(v)),
                _ => Err(Error::AddressOutOfRange(s.to_string())),
            };
        }
        if is_valid_symbol(s) {
            Ok(Imm::Ident(s.to_string()))
        } else {
            Err(Error::InvalidSymbol(s.to_string()))
        }
    }
}

// ----------------------------------------------------------------------------
// Compute instruction

/// Splits on `=` and `;`, keeping each delimiter as its own part.
fn split_delims(s: &str) -> Vec<&str> {
    let mut parts = vec![];
    let mut start = 0;
    for (idx, c) in s.char_indices() {
        if c == '=' || c == ';' {
            parts.push(&s[start..idx]);
            parts.push(&s[idx..idx + 1]);
            start = idx + 1;
        }
    }
    parts.push(&s[start..]);
    parts
}

fn parse_cinst(code: &str) -> Result<Inst, Error> {
    let (dest, comp, jump) = match split_delims(code).as_slice() {
        ["", "=", ..] => return Err(Error::EmptyDest(code.to_string())),
        [_, ";", ""] | [_, "=", _, ";", ""] => return Err(Error::EmptyJump(code.to_string())),
        [dest, "=", comp, ";", jump] => (*dest, *comp, *jump),
        [dest, "=", comp] => (*dest, *comp, ""),
        [comp, ";", jump] => ("", *comp, *jump),
        [comp] => ("", *comp, ""),
        _ => return Err(Error::UnknownInstruction(code.to_string())),
    };

    let dest = Dest::parse(dest).map_err(|err| match err {
        DestError::Unknown(c) => Error::UnknownDest(dest.to_string(), c),
        DestError::Duplicate(c) => Error::DuplicateDest(dest.to_string(), c),
    })?;
    let comp = Comp::parse(comp).ok_or_else(|| Error::UnknownComp(comp.to_string()))?;
    let jump = Jump::parse(jump).ok_or_else(|| Error::UnknownJump(jump.to_string()))?;
    Ok(Inst::C(dest, comp, jump))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    fn kind_of(raw: &str) -> ErrorKind {
        Stmt::parse(raw).unwrap_err().kind()
    }

    #[test]
    fn test_skip() {
        assert_eq!(Stmt::parse("").unwrap(), None);
        assert_eq!(Stmt::parse("   \t").unwrap(), None);
        assert_eq!(Stmt::parse("// comment").unwrap(), None);
        assert_eq!(Stmt::parse("  //push constant 7").unwrap(), None);
    }

    #[test]
    fn test_comment_must_start_the_line() {
        assert!(matches!(Stmt::parse("@x//y"), Err(Error::InvalidSymbol(_))));
        assert_eq!(kind_of("@x//y"), ErrorKind::Syntax);
        assert!(matches!(Stmt::parse("D=M // c"), Err(Error::UnknownComp(_))));
        assert!(matches!(Stmt::parse("(LOOP) // top"), Err(Error::MalformedLabel(_))));
    }

    #[test]
    fn test_unicode_symbol() {
        assert_eq!(
            Stmt::parse("@café").unwrap(),
            Some(Stmt::AInst(Imm::Ident("café".into())))
        );
    }

    #[test]
    fn test_label() {
        assert_eq!(
            Stmt::parse("(Main.loop$1)").unwrap(),
            Some(Stmt::Label("Main.loop$1".into()))
        );
        assert!(matches!(Stmt::parse("(LOOP"), Err(Error::MalformedLabel(_))));
        assert!(matches!(Stmt::parse("("), Err(Error::MalformedLabel(_))));
        assert!(matches!(Stmt::parse("(1LOOP)"), Err(Error::InvalidSymbol(_))));
        assert!(matches!(Stmt::parse("()"), Err(Error::InvalidSymbol(_))));
        assert_eq!(kind_of("(a b)"), ErrorKind::Syntax);
    }

    #[test]
    fn test_ainst() {
        assert_eq!(Stmt::parse("@0").unwrap(), Some(Stmt::AInst(Imm::Literal(0))));
        assert_eq!(
            Stmt::parse("@32767").unwrap(),
            Some(Stmt::AInst(Imm::Literal(32767)))
        );
        assert_eq!(
            Stmt::parse("@foo").unwrap(),
            Some(Stmt::AInst(Imm::Ident("foo".into())))
        );
    }

    #[test]
    fn test_ainst_errors() {
        assert!(matches!(Stmt::parse("@32768"), Err(Error::AddressOutOfRange(_))));
        assert!(matches!(Stmt::parse("@40000"), Err(Error::AddressOutOfRange(_))));
        assert!(matches!(
            Stmt::parse("@123456789012345678901234567890"),
            Err(Error::AddressOutOfRange(_))
        ));
        assert!(matches!(Stmt::parse("@-1"), Err(Error::InvalidSymbol(_))));
        assert!(matches!(Stmt::parse("@1x"), Err(Error::InvalidSymbol(_))));
        assert!(matches!(Stmt::parse("@"), Err(Error::InvalidSymbol(_))));
        assert_eq!(kind_of("@40000"), ErrorKind::Value);
        assert_eq!(kind_of("@a-b"), ErrorKind::Syntax);
    }

    #[test]
    fn test_split_delims() {
        assert_eq!(split_delims("D=M;JGT"), vec!["D", "=", "M", ";", "JGT"]);
        assert_eq!(split_delims("=D"), vec!["", "=", "D"]);
        assert_eq!(split_delims("0;"), vec!["0", ";", ""]);
        assert_eq!(split_delims("D"), vec!["D"]);
    }

    #[test]
    fn test_cinst_shapes() {
        let parse = |s: &str| match Stmt::parse(s).unwrap() {
            Some(Stmt::CInst(inst)) => inst.to_hack(),
            other => panic!("not a C-instruction: {:?}", other),
        };
        assert_eq!(parse("D=A"), "1110110000010000");
        assert_eq!(parse("0;JMP"), "1110101010000111");
        assert_eq!(parse("D"), "1110001100000000");
        assert_eq!(parse("AMD=D|M;JLE"), "1111010101111110");
    }

    #[test]
    fn test_cinst_syntax_errors() {
        assert!(matches!(Stmt::parse("=D"), Err(Error::EmptyDest(_))));
        assert!(matches!(Stmt::parse("=D;JMP"), Err(Error::EmptyDest(_))));
        assert!(matches!(Stmt::parse("0;"), Err(Error::EmptyJump(_))));
        assert!(matches!(Stmt::parse("D=M;"), Err(Error::EmptyJump(_))));
        assert!(matches!(Stmt::parse("DD=M"), Err(Error::DuplicateDest(_, 'D'))));
        assert!(matches!(Stmt::parse("D=A=M"), Err(Error::UnknownInstruction(_))));
        assert!(matches!(Stmt::parse("0;JMP;JMP"), Err(Error::UnknownInstruction(_))));
        assert!(matches!(Stmt::parse("0;JMP=D"), Err(Error::UnknownInstruction(_))));
    }

    #[test]
    fn test_cinst_value_errors() {
        assert!(matches!(Stmt::parse("X=A"), Err(Error::UnknownDest(_, 'X'))));
        assert!(matches!(Stmt::parse("D=A+D"), Err(Error::UnknownComp(_))));
        assert!(matches!(Stmt::parse("D=A;JXX"), Err(Error::UnknownJump(_))));
        assert!(matches!(Stmt::parse(";JMP"), Err(Error::UnknownComp(_))));
        assert!(matches!(Stmt::parse("D = A"), Err(Error::UnknownDest(_, ' '))));
        assert_eq!(kind_of("D=Q"), ErrorKind::Value);
    }

    #[test]
    fn test_dest_checked_before_comp() {
        assert!(matches!(Stmt::parse("Q=Z;JXX"), Err(Error::UnknownDest(_, 'Q'))));
        assert!(matches!(Stmt::parse("D=Z;JXX"), Err(Error::UnknownComp(_))));
    }
}
