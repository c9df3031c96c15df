use arch::{inst::Inst, symbol::VAR_BASE};

use crate::{
    error::{Error, LineError},
    ident::{Ident, Idents},
    parser::{Imm, Stmt},
};

/// Output of one assembly run.
#[derive(Debug, Clone)]
pub struct Assembly {
    /// (1-based source line, instruction) per ROM word.
    pub code: Vec<(usize, Inst)>,
    /// Final symbol table, including labels and allocated variables.
    pub idents: Idents,
}

impl Assembly {
    pub fn words(&self) -> Vec<u16> {
        self.code.iter().map(|(_, inst)| inst.to_bin()).collect()
    }

    /// One 16-character binary line per instruction.
    pub fn to_hack(&self) -> Vec<String> {
        self.code.iter().map(|(_, inst)| inst.to_hack()).collect()
    }

    /// Contents of a `.hack` file: every word terminated by a newline.
    pub fn to_hack_string(&self) -> String {
        let mut out = String::with_capacity(self.code.len() * 17);
        for (_, inst) in &self.code {
            out.push_str(&inst.to_hack());
            out.push('\n');
        }
        out
    }
}

pub fn assemble_str(src: &str) -> Result<Assembly, LineError> {
    let lines: Vec<&str> = src.lines().collect();
    assemble(&lines)
}

/// Translates a whole program. The first error aborts the run.
pub fn assemble<S: AsRef<str>>(lines: &[S]) -> Result<Assembly, LineError> {
    let mut idents = Idents::new();
    // Pending slots hold a placeholder until pass 2 patches them.
    let mut code: Vec<(usize, Inst)> = vec![];
    let mut pending: Vec<(usize, String)> = vec![];

    // Pass 1: bind labels, encode everything already resolvable
    for (idx, raw) in lines.iter().enumerate() {
        let raw = raw.as_ref();
        let line = idx + 1;
        let stmt = match Stmt::parse(raw).map_err(|err| LineError::new(line, raw, err))? {
            Some(stmt) => stmt,
            None => continue,
        };

        match stmt {
            Stmt::Label(name) => {
                let pc = code.len() as u16;
                if idents.insert(&name, Some(line), Ident::Label, pc).is_some() {
                    return Err(LineError::new(line, raw, Error::RedefinedLabel(name)));
                }
            }
            Stmt::AInst(Imm::Literal(val)) => code.push((line, Inst::A(val))),
            Stmt::AInst(Imm::Ident(name)) => match idents.get_val(&name) {
                Some(val) => code.push((line, Inst::A(val))),
                None => {
                    pending.push((code.len(), name));
                    code.push((line, Inst::A(0)));
                }
            },
            Stmt::CInst(inst) => code.push((line, inst)),
        }
    }

    // Pass 2: whatever is still unknown is a variable, allocated on first reference
    let mut next_var = VAR_BASE;
    for (slot, name) in pending {
        let (line, inst) = &mut code[slot];
        let addr = match idents.get_val(&name) {
            Some(addr) => addr,
            None => {
                let addr = next_var;
                idents.insert(&name, Some(*line), Ident::Variable, addr);
                next_var = next_var.wrapping_add(1);
                addr
            }
        };
        *inst = Inst::A(addr);
    }

    Ok(Assembly { code, idents })
}
