use arch::symbol::{is_symbol, ROM_SIZE};

use crate::{
    error::{Error, LineError},
    symbol::{Kind, SymbolTable},
};

/// A source line reduced to a single instruction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    /// 0-based index of the source line
    pub idx: usize,
    pub text: String,
}

/// Remove whitespace and comments. Returns `None` when nothing is left.
pub fn clean(raw: &str) -> Option<String> {
    let line: String = raw.chars().filter(|c| !c.is_whitespace()).collect();
    if line.starts_with('/') {
        return None;
    }
    let line = match line.find('/') {
        Some(pos) => &line[..pos],
        None => &line[..],
    };
    if line.is_empty() {
        None
    } else {
        Some(line.to_string())
    }
}

/// First pass: keep instruction lines and bind every `(LABEL)` to the index
/// of the instruction that follows it.
pub fn normalize<S: AsRef<str>>(
    raw_lines: &[S],
    symbols: &mut SymbolTable,
) -> Result<Vec<Line>, LineError> {
    let mut lines = vec![];
    let mut pc: usize = 0;

    for (idx, raw) in raw_lines.iter().enumerate() {
        let text = match clean(raw.as_ref()) {
            Some(text) => text,
            None => continue,
        };

        if text.starts_with('(') {
            let label = parse_label(&text).map_err(|e| e.at(idx))?;
            if let Some(prev) = symbols.lookup(label) {
                if let (Kind::Label, Some(prev_idx)) = (prev.kind, prev.line_idx) {
                    return Err(Error::RedefinedLabel(label.to_string(), prev_idx).at(idx));
                }
            }
            if pc >= ROM_SIZE {
                return Err(Error::ProgramTooLarge(ROM_SIZE).at(idx));
            }
            symbols.add(label, pc as u16, idx);
            continue;
        }

        if pc >= ROM_SIZE {
            return Err(Error::ProgramTooLarge(ROM_SIZE).at(idx));
        }
        lines.push(Line { idx, text });
        pc += 1;
    }

    Ok(lines)
}

fn parse_label(text: &str) -> Result<&str, Error> {
    match text.strip_prefix('(').and_then(|s| s.strip_suffix(')')) {
        Some(label) if is_symbol(label) => Ok(label),
        _ => Err(Error::MalformedLabel(text.to_string())),
    }
}
