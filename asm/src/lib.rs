//! Two-pass assembler for the Hack 16-bit computer.
//!
//! Pass 1 classifies every line, binds labels to ROM addresses and encodes
//! every instruction it can. `@symbol` references that are still unknown are
//! recorded as pending slots. Pass 2 resolves them, allocating RAM addresses
//! from 16 upward for each new variable in order of first reference.

pub mod assemble;
pub mod error;
pub mod ident;
pub mod parser;
pub mod util;

pub use assemble::{assemble, assemble_str, Assembly};
pub use error::{Error, ErrorKind, LineError};
