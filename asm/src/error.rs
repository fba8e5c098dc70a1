use color_print::cformat;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Malformed A-instruction: `@{0}`")]
    MalformedAddress(String),

    #[error("Address out of range: `@{0}` (max 32767)")]
    AddressOutOfRange(String),

    #[error("Unknown comp: `{0}`")]
    UnknownComp(String),

    #[error("Unknown dest: `{0}`")]
    UnknownDest(String),

    #[error("Unknown jump: `{0}`")]
    UnknownJump(String),

    #[error("Malformed label: `{0}`")]
    MalformedLabel(String),

    #[error("Re-defined label: `{0}`")]
    RedefinedLabel(String, usize),

    #[error("Out of variable memory: cannot allocate `{0}`")]
    VariableOverflow(String),

    #[error("Program too large: more than {0} instructions")]
    ProgramTooLarge(usize),

    #[error("Input file must have the `.asm` extension: {0}")]
    Extension(String),

    #[error("Failed to read file: {0}")]
    FileRead(String, #[source] std::io::Error),

    #[error("Failed to write file: {0}")]
    FileWrite(String, #[source] std::io::Error),

    #[error("Failed to serialize symbols: {0}")]
    Serialize(String, #[source] serde_yaml::Error),
}

impl Error {
    pub fn at(self, line_idx: usize) -> LineError {
        LineError {
            line_idx,
            error: self,
        }
    }
}

/// An error tied to a source line (0-based index).
#[derive(Error, Debug)]
#[error("line {}: {}", .line_idx + 1, .error)]
pub struct LineError {
    pub line_idx: usize,
    pub error: Error,
}

impl LineError {
    /// Print error to stderr with diagnostic information showing file location and line content
    pub fn print_diag<S: AsRef<str>>(&self, file: &str, lines: &[S]) {
        eprintln!("{}", cformat!("<red,bold>error</>: {}", self.error));
        print_location(file, lines, self.line_idx);

        if let Error::RedefinedLabel(_, prev_idx) = &self.error {
            eprintln!("{}", cformat!("<green,bold>note</>: Already defined here"));
            print_location(file, lines, *prev_idx);
        }
    }
}

fn print_location<S: AsRef<str>>(file: &str, lines: &[S], line_idx: usize) {
    // line_idx is 0-based, display as 1-based
    let line_num = line_idx + 1;
    let line_content = lines.get(line_idx).map(|s| s.as_ref()).unwrap_or("");

    eprintln!("{}", cformat!("     <blue>--></> <underline>{}:{}</>", file, line_num));
    eprintln!("{}", cformat!("      <blue>|</>"));
    eprintln!("{}", cformat!(" <blue>{:>4} |</> {}", line_num, line_content));
    eprintln!("{}", cformat!("      <blue>|</>"));
}

#[test]
fn test_line_error_message() {
    let err = Error::UnknownComp("D+2".to_string()).at(4);
    assert_eq!(err.to_string(), "line 5: Unknown comp: `D+2`");
}
