use crate::{comp::Comp, dest::Dest, jump::Jump, symbol::MAX_ADDR};

use color_print::cformat;
use std::fmt::Display;

/// Opcode class bits of every C-instruction.
const C_PREFIX: u16 = 0b111 << 13;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Inst {
    /// `@value`: load a 15-bit constant into A.
    A(u16),
    /// `dest=comp;jump`
    C(Dest, Comp, Jump),
}

impl Inst {
    /// Machine word. Bits above the 15-bit address field are never set for an A-instruction.
    pub fn to_bin(&self) -> u16 {
        match self {
            Inst::A(addr) => addr & MAX_ADDR,
            Inst::C(dest, comp, jump) => {
                C_PREFIX | comp.bits() << 6 | dest.bits() << 3 | jump.bits()
            }
        }
    }

    /// The word as it appears in a `.hack` file.
    pub fn to_hack(&self) -> String {
        format!("{:016b}", self.to_bin())
    }

    pub fn cformat(&self) -> String {
        match self {
            Inst::A(addr) => cformat!("<b>@</><y>{}</>", addr),
            Inst::C(dest, comp, jump) => {
                let dest = match dest.is_empty() {
                    true => String::new(),
                    false => cformat!("<b>{}</>=", dest),
                };
                let jump = match jump {
                    Jump::NULL => String::new(),
                    _ => cformat!(";<g>{}</>", jump),
                };
                cformat!("{}<r>{}</>{}", dest, comp, jump)
            }
        }
    }
}

impl Display for Inst {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Inst::A(addr) => write!(f, "@{}", addr),
            Inst::C(dest, comp, jump) => {
                if !dest.is_empty() {
                    write!(f, "{}=", dest)?;
                }
                write!(f, "{}", comp)?;
                if *jump != Jump::NULL {
                    write!(f, ";{}", jump)?;
                }
                Ok(())
            }
        }
    }
}
