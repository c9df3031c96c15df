/// Base address of the memory-mapped screen.
pub const SCREEN: u16 = 0x4000;

/// Address of the memory-mapped keyboard.
pub const KBD: u16 = 0x6000;

/// First RAM address handed out to variables.
pub const VAR_BASE: u16 = 16;

/// Largest value an A-instruction can carry (15-bit field).
pub const MAX_ADDR: u16 = 0x7FFF;

/// Symbols available to every program without declaration.
pub const PREDEFINED: [(&str, u16); 23] = [
    ("R0", 0),
    ("R1", 1),
    ("R2", 2),
    ("R3", 3),
    ("R4", 4),
    ("R5", 5),
    ("R6", 6),
    ("R7", 7),
    ("R8", 8),
    ("R9", 9),
    ("R10", 10),
    ("R11", 11),
    ("R12", 12),
    ("R13", 13),
    ("R14", 14),
    ("R15", 15),
    ("SP", 0),
    ("LCL", 1),
    ("ARG", 2),
    ("THIS", 3),
    ("THAT", 4),
    ("SCREEN", SCREEN),
    ("KBD", KBD),
];

/// A symbol must not start with a digit and may only contain letters, digits and `_ . $ :`.
pub fn is_valid_symbol(s: &str) -> bool {
    match s.chars().next() {
        None => false,
        Some(head) if head.is_numeric() => false,
        Some(_) => s
            .chars()
            .all(|c| c.is_alphanumeric() || matches!(c, '_' | '.' | '$' | ':')),
    }
}
