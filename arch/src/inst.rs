use crate::{
    alu::Comp,
    dest::Dest,
    jump::Jump,
    symbol::ADDR_MAX,
};

use color_print::cformat;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Inst {
    /// `@value`
    A(u16),
    /// `dest=comp;jump`
    C(Dest, Comp, Jump),
}

// ----------------------------------------------------------------------------
// Binary format
//
//   A: 0 v v v v v v v v v v v v v v v
//   C: 1 1 1 a c c c c c c d d d j j j

const C_PREFIX: u16 = 0b111 << 13;

fn enc_c(comp: u16, dest: u16, jump: u16) -> u16 {
    C_PREFIX | (comp << 6) | (dest << 3) | jump
}

fn dec_c(bin: u16) -> (u16, u16, u16) {
    let comp = (bin >> 6) & 0b1111111;
    let dest = (bin >> 3) & 0b111;
    let jump = bin & 0b111;
    (comp, dest, jump)
}

impl Inst {
    pub fn to_bin(&self) -> u16 {
        match *self {
            Inst::A(value) => value & ADDR_MAX,
            Inst::C(dest, comp, jump) => enc_c(comp.bits(), dest.bits(), jump.bits()),
        }
    }

    pub fn from_bin(bin: u16) -> Result<Inst, String> {
        if bin >> 15 == 0 {
            return Ok(Inst::A(bin));
        }
        if bin & C_PREFIX != C_PREFIX {
            return Err(format!("Malformed C-instruction: {:016b}", bin));
        }
        let (comp, dest, jump) = dec_c(bin);
        Ok(Inst::C(
            Dest::from_bits(dest),
            Comp::from_bits(comp)?,
            Jump::from_bits(jump),
        ))
    }

    /// One line of a `.hack` file, MSB first.
    pub fn to_word(&self) -> String {
        format!("{:016b}", self.to_bin())
    }

    pub fn from_word(word: &str) -> Result<Inst, String> {
        if word.len() != 16 || !word.chars().all(|c| c == '0' || c == '1') {
            return Err(format!("Malformed word: `{word}`"));
        }
        match u16::from_str_radix(word, 2) {
            Ok(bin) => Inst::from_bin(bin),
            Err(e) => Err(format!("Malformed word: `{word}` ({e})")),
        }
    }
}

// ----------------------------------------------------------------------------
// Assembly text

impl fmt::Display for Inst {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Inst::A(value) => write!(f, "@{}", value),
            Inst::C(dest, comp, jump) => {
                if *dest != Dest::Null {
                    write!(f, "{}=", dest)?;
                }
                write!(f, "{}", comp)?;
                if *jump != Jump::Null {
                    write!(f, ";{}", jump)?;
                }
                Ok(())
            }
        }
    }
}

impl Inst {
    pub fn cformat(&self) -> String {
        match self {
            Inst::A(value) => cformat!("<r>@</><y>{}</>", value),
            Inst::C(dest, comp, jump) => {
                let dest = match dest {
                    Dest::Null => String::new(),
                    d => cformat!("<b>{}</>=", d),
                };
                let jump = match jump {
                    Jump::Null => String::new(),
                    j => cformat!(";<g>{}</>", j),
                };
                cformat!("{}<r>{}</>{}", dest, comp, jump)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alu::Alu;

    macro_rules! test_inst {
        ($($name:ident: $inst:expr => $word:expr,)*) => {
            $(
                #[test]
                fn $name() {
                    let inst = $inst;
                    let word = inst.to_word();
                    assert_eq!(word, $word, "{}", inst);
                    assert_eq!(Inst::from_word(&word), Ok(inst));
                }
            )*
        }
    }

    test_inst! {
        a_zero: Inst::A(0) => "0000000000000000",
        a_max: Inst::A(32767) => "0111111111111111",
        a_screen: Inst::A(16384) => "0100000000000000",
        c_d_eq_m: Inst::C(Dest::D, Comp::new(Alu::A, true), Jump::Null) => "1111110000010000",
        c_d_eq_d_sub_m: Inst::C(Dest::D, Comp::new(Alu::SubDA, true), Jump::Null) => "1111010011010000",
        c_d_jgt: Inst::C(Dest::Null, Comp::new(Alu::D, false), Jump::JGT) => "1110001100000001",
        c_m_eq_d_inc: Inst::C(Dest::M, Comp::new(Alu::IncD, false), Jump::Null) => "1110011111001000",
        c_zero_jmp: Inst::C(Dest::Null, Comp::new(Alu::Zero, false), Jump::JMP) => "1110101010000111",
        c_amd_all: Inst::C(Dest::AMD, Comp::new(Alu::Or, true), Jump::JLE) => "1111010101111110",
    }

    #[test]
    fn display() {
        assert_eq!(Inst::A(21).to_string(), "@21");
        assert_eq!(
            Inst::C(Dest::MD, Comp::new(Alu::IncA, true), Jump::Null).to_string(),
            "MD=M+1"
        );
        assert_eq!(
            Inst::C(Dest::Null, Comp::new(Alu::D, false), Jump::JNE).to_string(),
            "D;JNE"
        );
    }

    #[test]
    fn c_prefix() {
        let inst = Inst::C(Dest::Null, Comp::new(Alu::And, false), Jump::Null);
        assert!(inst.to_word().starts_with("111"));
    }

    #[test]
    fn malformed_word() {
        assert!(Inst::from_word("010").is_err());
        assert!(Inst::from_word("01000000000000002").is_err());
        assert!(Inst::from_word("000000000000000x").is_err());
        // a=0, c=000001 is not in the table
        assert!(Inst::from_word("1110000001000000").is_err());
        // C-instructions need the full 111 prefix
        assert!(Inst::from_word("1000001100000000").is_err());
        assert!(Inst::from_word("1010001100000000").is_err());
        assert!(Inst::from_word("1100001100000000").is_err());
    }
}
