use num_enum::{FromPrimitive, IntoPrimitive};
use strum::{Display, EnumString};

/// Destination field of a C-instruction: `d1 d2 d3` = A D M.
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
pub enum Dest {
    #[default]
    #[strum(serialize = "null")]
    Null = 0b000,
    M = 0b001,
    D = 0b010,
    MD = 0b011,
    A = 0b100,
    AM = 0b101,
    AD = 0b110,
    AMD = 0b111,
}

impl Dest {
    pub fn parse(s: &str) -> Result<Self, String> {
        match s.parse::<Self>() {
            Ok(d) => Ok(d),
            Err(_) => Err(format!("Unknown dest: {s}")),
        }
    }

    pub fn bits(self) -> u16 {
        u8::from(self) as u16
    }

    pub fn from_bits(bits: u16) -> Self {
        Self::from((bits & 0b111) as u8)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    macro_rules! test_dest {
        ($($name:ident: $text:expr => $bits:expr,)*) => {
            $(
                #[test]
                fn $name() {
                    let dest = Dest::parse($text).unwrap();
                    assert_eq!(dest.bits(), $bits);
                    assert_eq!(dest.to_string(), $text);
                    assert_eq!(Dest::from_bits($bits), dest);
                }
            )*
        }
    }

    test_dest! {
        null: "null" => 0b000,
        m: "M" => 0b001,
        d: "D" => 0b010,
        md: "MD" => 0b011,
        a: "A" => 0b100,
        am: "AM" => 0b101,
        ad: "AD" => 0b110,
        amd: "AMD" => 0b111,
    }

    #[test]
    fn unknown() {
        assert!(Dest::parse("DM").is_err());
        assert!(Dest::parse("X").is_err());
        assert!(Dest::parse("").is_err());
    }
}
