use arch::{
    alu::Comp,
    dest::Dest,
    inst::Inst,
    jump::Jump,
    symbol::{is_symbol, ADDR_MAX},
};

use crate::{error::Error, normalize::Line, symbol::SymbolTable};

// ----------------------------------------------------------------------------
// Instruction

pub fn parse(line: &Line, symbols: &mut SymbolTable) -> Result<Inst, Error> {
    match line.text.strip_prefix('@') {
        Some(addr) => parse_a(addr, line.idx, symbols),
        None => parse_c(&line.text),
    }
}

// ----------------------------------------------------------------------------
// A-instruction

fn parse_a(addr: &str, idx: usize, symbols: &mut SymbolTable) -> Result<Inst, Error> {
    if !addr.is_empty() && addr.chars().all(|c| c.is_ascii_digit()) {
        return match addr.parse::<u16>() {
            Ok(v) if v <= ADDR_MAX => Ok(Inst::A(v)),
            _ => Err(Error::AddressOutOfRange(addr.to_string())),
        };
    }
    if !is_symbol(addr) {
        return Err(Error::MalformedAddress(addr.to_string()));
    }
    Ok(Inst::A(symbols.resolve(addr, idx)?))
}

// ----------------------------------------------------------------------------
// C-instruction

fn parse_c(text: &str) -> Result<Inst, Error> {
    let (dest, rest) = match text.split_once('=') {
        Some((dest, rest)) => (Some(dest), rest),
        None => (None, text),
    };
    let (comp, jump) = match rest.split_once(';') {
        Some((comp, jump)) => (comp, Some(jump)),
        None => (rest, None),
    };

    let dest = match dest {
        Some(d) => Dest::parse(d).map_err(|_| Error::UnknownDest(d.to_string()))?,
        None => Dest::Null,
    };
    let comp = Comp::parse(comp).map_err(|_| Error::UnknownComp(comp.to_string()))?;
    let jump = match jump {
        Some(j) => Jump::parse(j).map_err(|_| Error::UnknownJump(j.to_string()))?,
        None => Jump::Null,
    };

    Ok(Inst::C(dest, comp, jump))
}

#[cfg(test)]
mod tests {
    use super::*;
    use arch::alu::Alu;

    fn line(text: &str) -> Line {
        Line {
            idx: 0,
            text: text.to_string(),
        }
    }

    macro_rules! test_parse {
        ($($name:ident: $text:expr => $inst:expr,)*) => {
            $(
                #[test]
                fn $name() {
                    let mut symbols = SymbolTable::new();
                    assert_eq!(parse(&line($text), &mut symbols).unwrap(), $inst);
                }
            )*
        }
    }

    test_parse! {
        a_literal: "@21" => Inst::A(21),
        a_leading_zero: "@007" => Inst::A(7),
        a_max: "@32767" => Inst::A(32767),
        a_predefined: "@THAT" => Inst::A(4),
        a_screen: "@SCREEN" => Inst::A(16384),
        a_variable: "@counter" => Inst::A(16),
        c_full: "AMD=D|M;JNE" => Inst::C(Dest::AMD, Comp::new(Alu::Or, true), Jump::JNE),
        c_no_jump: "D=M" => Inst::C(Dest::D, Comp::new(Alu::A, true), Jump::Null),
        c_no_dest: "D;JGT" => Inst::C(Dest::Null, Comp::new(Alu::D, false), Jump::JGT),
        c_comp_only: "M+1" => Inst::C(Dest::Null, Comp::new(Alu::IncA, true), Jump::Null),
        c_dest_m_only: "M=D+1" => Inst::C(Dest::M, Comp::new(Alu::IncD, false), Jump::Null),
        c_minus_one: "A=-1" => Inst::C(Dest::A, Comp::new(Alu::MinusOne, false), Jump::Null),
        c_explicit_null: "null=0;null" => Inst::C(Dest::Null, Comp::new(Alu::Zero, false), Jump::Null),
    }

    macro_rules! test_error {
        ($($name:ident: $text:expr => $err:pat,)*) => {
            $(
                #[test]
                fn $name() {
                    let mut symbols = SymbolTable::new();
                    let result = parse(&line($text), &mut symbols);
                    assert!(matches!(result, Err($err)), "{:?}", result);
                }
            )*
        }
    }

    test_error! {
        err_a_empty: "@" => Error::MalformedAddress(_),
        err_a_negative: "@-1" => Error::MalformedAddress(_),
        err_a_digit_head: "@12abc" => Error::MalformedAddress(_),
        err_a_illegal: "@a+b" => Error::MalformedAddress(_),
        err_a_range: "@32768" => Error::AddressOutOfRange(_),
        err_a_huge: "@99999999" => Error::AddressOutOfRange(_),
        err_dest: "X=D" => Error::UnknownDest(_),
        err_dest_order: "DM=D" => Error::UnknownDest(_),
        err_comp: "D=D+2" => Error::UnknownComp(_),
        err_comp_empty: "D=;JMP" => Error::UnknownComp(_),
        err_comp_mixed: "D=A+M" => Error::UnknownComp(_),
        err_jump: "0;JMPX" => Error::UnknownJump(_),
        err_jump_empty: "0;" => Error::UnknownJump(_),
    }

    #[test]
    fn variables_allocated_once() {
        let mut symbols = SymbolTable::new();
        let insts: Vec<Inst> = ["@i", "@sum", "@i", "@R3", "@n"]
            .iter()
            .map(|t| parse(&line(t), &mut symbols).unwrap())
            .collect();
        assert_eq!(
            insts,
            vec![Inst::A(16), Inst::A(17), Inst::A(16), Inst::A(3), Inst::A(18)]
        );
    }
}
