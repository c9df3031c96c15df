//! Translator from the stack machine language to Hack assembly.

pub mod codegen;
pub mod error;
pub mod parser;

use error::LineError;
use parser::Command;

/// Translates one source file. `prog` names its static variables (`prog.i`).
/// Each command is preceded by its source text as a comment.
pub fn translate_source(prog: &str, src: &str, uid: u32) -> Result<(String, u32), LineError> {
    let mut out = String::new();
    let mut uid = uid;
    for (idx, raw) in src.lines().enumerate() {
        let code = raw.trim();
        if code.is_empty() || code.starts_with("//") {
            continue;
        }
        let err = |e| LineError::new(prog, idx + 1, raw, e);
        let cmd = Command::parse(code).map_err(err)?;
        let (asm, next) = codegen::translate(cmd, prog, uid).map_err(err)?;
        out.push_str("//");
        out.push_str(code);
        out.push('\n');
        out.push_str(&asm);
        uid = next;
    }
    Ok((out, uid))
}

/// Translates several files into one program. Comparison labels stay unique across files.
pub fn translate<S: AsRef<str>>(files: &[(S, S)]) -> Result<String, LineError> {
    let mut out = String::new();
    let mut uid = 0;
    for (prog, src) in files {
        let (asm, next) = translate_source(prog.as_ref(), src.as_ref(), uid)?;
        out.push_str(&asm);
        uid = next;
    }
    out.push_str(codegen::FOOTER);
    Ok(out)
}
