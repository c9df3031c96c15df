use bimap::BiMap;
use once_cell::sync::Lazy;
use std::fmt::Display;

static COMP_MAP: Lazy<BiMap<&'static str, u8>> = Lazy::new(|| {
    let mut map: BiMap<&'static str, u8> = BiMap::new();
    map.insert("0", 0b0101010);
    map.insert("1", 0b0111111);
    map.insert("-1", 0b0111010);
    map.insert("D", 0b0001100);
    map.insert("A", 0b0110000);
    map.insert("M", 0b1110000);
    map.insert("!D", 0b0001101);
    map.insert("!A", 0b0110001);
    map.insert("!M", 0b1110001);
    map.insert("-D", 0b0001111);
    map.insert("-A", 0b0110011);
    map.insert("-M", 0b1110011);
    map.insert("D+1", 0b0011111);
    map.insert("A+1", 0b0110111);
    map.insert("M+1", 0b1110111);
    map.insert("D-1", 0b0001110);
    map.insert("A-1", 0b0110010);
    map.insert("M-1", 0b1110010);
    map.insert("D+A", 0b0000010);
    map.insert("D+M", 0b1000010);
    map.insert("D-A", 0b0010011);
    map.insert("D-M", 0b1010011);
    map.insert("A-D", 0b0000111);
    map.insert("M-D", 0b1000111);
    map.insert("D&A", 0b0000000);
    map.insert("D&M", 0b1000000);
    map.insert("D|A", 0b0010101);
    map.insert("D|M", 0b1010101);
    map
});

/// ALU operation of a C-instruction, held as its 7-bit code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Comp(u8);

impl Comp {
    pub fn parse(s: &str) -> Option<Comp> {
        COMP_MAP.get_by_left(s).map(|bits| Comp(*bits))
    }

    pub fn bits(&self) -> u16 {
        self.0 as u16
    }

    pub fn mnemonic(&self) -> &'static str {
        COMP_MAP.get_by_right(&self.0).copied().unwrap_or("?")
    }
}

impl Display for Comp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.mnemonic())
    }
}
