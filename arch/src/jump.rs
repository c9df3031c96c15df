use num_enum::IntoPrimitive;
use strum::{Display, EnumIter, EnumString};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, IntoPrimitive, EnumString, Display, EnumIter,
)]
#[repr(u8)]
pub enum Jump {
    #[default]
    #[strum(serialize = "")]
    NULL,
    JGT,
    JEQ,
    JGE,
    JLT,
    JNE,
    JLE,
    JMP,
}

impl Jump {
    pub fn parse(s: &str) -> Option<Jump> {
        s.parse().ok()
    }

    pub fn bits(self) -> u16 {
        u8::from(self) as u16
    }
}
