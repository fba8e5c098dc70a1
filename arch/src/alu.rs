use num_enum::{IntoPrimitive, TryFromPrimitive};
use std::fmt;
use strum::{Display, EnumString};

/// ALU control bits `c1..c6`, keyed by the A-form mnemonic.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, TryFromPrimitive, IntoPrimitive, EnumString, Display,
)]
#[repr(u8)]
pub enum Alu {
    #[strum(serialize = "0")]
    Zero = 0b101010,
    #[strum(serialize = "1")]
    One = 0b111111,
    #[strum(serialize = "-1")]
    MinusOne = 0b111010,
    #[strum(serialize = "D")]
    D = 0b001100,
    #[strum(serialize = "A")]
    A = 0b110000,
    #[strum(serialize = "!D")]
    NotD = 0b001101,
    #[strum(serialize = "!A")]
    NotA = 0b110001,
    #[strum(serialize = "-D")]
    NegD = 0b001111,
    #[strum(serialize = "-A")]
    NegA = 0b110011,
    #[strum(serialize = "D+1")]
    IncD = 0b011111,
    #[strum(serialize = "A+1")]
    IncA = 0b110111,
    #[strum(serialize = "D-1")]
    DecD = 0b001110,
    #[strum(serialize = "A-1")]
    DecA = 0b110010,
    #[strum(serialize = "D+A")]
    Add = 0b000010,
    #[strum(serialize = "D-A")]
    SubDA = 0b010011,
    #[strum(serialize = "A-D")]
    SubAD = 0b000111,
    #[strum(serialize = "D&A")]
    And = 0b000000,
    #[strum(serialize = "D|A")]
    Or = 0b010101,
}

/// Computation field: the `a` bit selects M in place of A.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Comp {
    pub alu: Alu,
    pub mem: bool,
}

impl Comp {
    pub fn new(alu: Alu, mem: bool) -> Self {
        Comp { alu, mem }
    }

    /// `M` anywhere in the mnemonic sets `a` and is looked up as `A`.
    pub fn parse(s: &str) -> Result<Self, String> {
        let mem = s.contains('M');
        let key = s.replace('M', "A");
        match key.parse::<Alu>() {
            Ok(alu) => Ok(Comp { alu, mem }),
            Err(_) => Err(format!("Unknown comp: {s}")),
        }
    }

    /// `a c1 c2 c3 c4 c5 c6`
    pub fn bits(self) -> u16 {
        ((self.mem as u16) << 6) | u8::from(self.alu) as u16
    }

    pub fn from_bits(bits: u16) -> Result<Self, String> {
        let mem = (bits >> 6) & 1 == 1;
        match Alu::try_from((bits & 0b111111) as u8) {
            Ok(alu) => Ok(Comp { alu, mem }),
            Err(_) => Err(format!("Unknown comp bits: {:07b}", bits & 0b1111111)),
        }
    }
}

impl fmt::Display for Comp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = self.alu.to_string();
        if self.mem {
            write!(f, "{}", text.replace('A', "M"))
        } else {
            write!(f, "{}", text)
        }
    }
}
