use crate::Program;
use color_print::cformat;

pub fn print_dump<S: AsRef<str>>(path: &str, raw_lines: &[S], program: &Program) {
    println!(
        "{}+------[{}]{}",
        "-".repeat(25),
        path,
        "-".repeat(40_usize.saturating_sub(path.len()))
    );

    let mut codes = program.codes.iter().peekable();
    for (idx, raw) in raw_lines.iter().enumerate() {
        let raw = raw.as_ref().trim_end();
        let line_num = idx + 1;
        let body = match codes.next_if(|code| code.line_idx == idx) {
            Some(code) => {
                // Inline comment kept after the instruction
                let comment = raw
                    .find('/')
                    .map(|pos| cformat!(" <dim>{}</>", &raw[pos..]))
                    .unwrap_or_default();
                format!(
                    "[{:05}] {} | {:>4}:   {}{}",
                    code.pc,
                    code.inst.to_word(),
                    line_num,
                    code.inst.cformat(),
                    comment
                )
            }
            None => {
                let text = raw.trim_start();
                let text = if text.starts_with('(') {
                    cformat!("<g>{}</>", text)
                } else {
                    cformat!("<dim>{}</>", text)
                };
                format!("{:25}| {:>4}: {}", "", line_num, text)
            }
        };
        println!("{}", body);
    }
    println!("{}+{}", "-".repeat(25), "-".repeat(48));
}
