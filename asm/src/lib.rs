//! Two-pass assembler for the Hack computer.
//!
//! The first pass ([normalize]) strips comments and whitespace and binds every
//! `(LABEL)` to the address of the instruction after it. The second pass
//! ([parser]) turns each remaining line into an [Inst], allocating variables
//! from address 16 in order of first use.

pub mod error;
pub mod normalize;
pub mod parser;
pub mod symbol;
pub mod util;

pub use arch::inst::Inst;
pub use error::{Error, LineError};
pub use symbol::{Kind, SymbolTable};

/// One assembled instruction and where it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Code {
    /// 0-based source line
    pub line_idx: usize,
    pub pc: u16,
    pub inst: Inst,
}

pub struct Program {
    pub codes: Vec<Code>,
    pub symbols: SymbolTable,
}

impl Program {
    pub fn words(&self) -> impl Iterator<Item = String> + '_ {
        self.codes.iter().map(|code| code.inst.to_word())
    }

    /// Contents of the `.hack` file.
    pub fn to_hack(&self) -> String {
        self.words().map(|word| word + "\n").collect()
    }
}

pub fn assemble<S: AsRef<str>>(raw_lines: &[S]) -> Result<Program, LineError> {
    let mut symbols = SymbolTable::new();
    let lines = normalize::normalize(raw_lines, &mut symbols)?;

    let mut codes = Vec::with_capacity(lines.len());
    for (pc, line) in lines.iter().enumerate() {
        let inst = parser::parse(line, &mut symbols).map_err(|e| e.at(line.idx))?;
        codes.push(Code {
            line_idx: line.idx,
            pc: pc as u16,
            inst,
        });
    }

    Ok(Program { codes, symbols })
}
