use num_enum::{FromPrimitive, IntoPrimitive};
use strum::{Display, EnumString};

/// Jump field of a C-instruction: `j1 j2 j3` = (out < 0) (out = 0) (out > 0).
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    FromPrimitive,
    IntoPrimitive,
    EnumString,
    Display,
)]
#[repr(u8)]
pub enum Jump {
    #[default]
    #[strum(serialize = "null")]
    Null = 0b000,
    JGT = 0b001,
    JEQ = 0b010,
    JGE = 0b011,
    JLT = 0b100,
    JNE = 0b101,
    JLE = 0b110,
    JMP = 0b111,
}

impl Jump {
    pub fn parse(s: &str) -> Result<Self, String> {
        match s.parse::<Self>() {
            Ok(j) => Ok(j),
            Err(_) => Err(format!("Unknown jump: {s}")),
        }
    }

    pub fn bits(self) -> u16 {
        u8::from(self) as u16
    }

    pub fn from_bits(bits: u16) -> Self {
        Self::from((bits & 0b111) as u8)
    }
}
