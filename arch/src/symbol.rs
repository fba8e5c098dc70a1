// ----------------------------------------------------------------------------
// Memory map

pub const SCREEN: u16 = 0x4000;
pub const KBD: u16 = 0x6000;

/// First data address handed out to variables.
pub const VAR_BASE: u16 = 16;

/// Largest value an A-instruction can load.
pub const ADDR_MAX: u16 = 0x7FFF;

/// Number of words in instruction memory.
pub const ROM_SIZE: usize = 0x8000;

// ----------------------------------------------------------------------------
// Predefined symbols

pub const PREDEFINED: [(&str, u16); 23] = [
    ("SP", 0),
    ("LCL", 1),
    ("ARG", 2),
    ("THIS", 3),
    ("THAT", 4),
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
    ("SCREEN", SCREEN),
    ("KBD", KBD),
];

/// Symbols are letters, digits, `_`, `.`, `$` and `:`, not starting with a digit.
pub fn is_symbol(s: &str) -> bool {
    match s.chars().next() {
        Some(head) if !head.is_ascii_digit() => s
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '$' | ':')),
        _ => false,
    }
}

#[test]
fn test_is_symbol() {
    assert!(is_symbol("LOOP"));
    assert!(is_symbol("sys.init$ret.0"));
    assert!(is_symbol("_a:b"));
    assert!(!is_symbol(""));
    assert!(!is_symbol("1abc"));
    assert!(!is_symbol("a-b"));
    assert!(!is_symbol("a b"));
}
