use std::fmt::Display;

/// Destination registers of a C-instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Dest {
    pub a: bool,
    pub d: bool,
    pub m: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DestError {
    /// A letter other than `A`, `D` or `M`.
    Unknown(char),
    /// The same letter given twice.
    Duplicate(char),
}

impl Dest {
    /// Letters are checked left to right: first that each is known, then that it does not occur again later.
    pub fn parse(s: &str) -> Result<Dest, DestError> {
        let mut dest = Dest::default();
        for (i, c) in s.char_indices() {
            let slot = match c {
                'A' => &mut dest.a,
                'D' => &mut dest.d,
                'M' => &mut dest.m,
                _ => return Err(DestError::Unknown(c)),
            };
            if s[i + c.len_utf8()..].contains(c) {
                return Err(DestError::Duplicate(c));
            }
            *slot = true;
        }
        Ok(dest)
    }

    pub fn bits(&self) -> u16 {
        (self.a as u16) << 2 | (self.d as u16) << 1 | self.m as u16
    }

    pub fn is_empty(&self) -> bool {
        !(self.a || self.d || self.m)
    }
}

impl Display for Dest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (set, c) in [(self.a, 'A'), (self.d, 'D'), (self.m, 'M')] {
            if set {
                write!(f, "{}", c)?;
            }
        }
        Ok(())
    }
}
