use color_print::{cformat, cprintln};
use hackasm::{util::print_dump, Error, Kind, Program};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

const HELP_TEMPLATE: &str = "\
{before-help}{bin} {version}
  {about}

{usage-heading}
{tab}{usage}

{all-args}{after-help}";

#[derive(Debug, clap::Parser)]
#[clap(version, about, help_template = HELP_TEMPLATE)]
struct Args {
    /// Input file (.asm)
    input: PathBuf,

    /// Output file [default: input with .hack extension]
    #[clap(short, long)]
    output: Option<PathBuf>,

    /// Dump assembly listing
    #[clap(short, long)]
    dump: bool,

    /// Write label and variable addresses as YAML
    #[clap(short, long)]
    symbols: Option<PathBuf>,

    /// Only print errors
    #[clap(short, long)]
    quiet: bool,
}

fn main() -> ExitCode {
    use clap::Parser;

    let args: Args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(()) => ExitCode::FAILURE,
    }
}

fn run(args: &Args) -> Result<(), ()> {
    let input = args.input.display().to_string();
    let output = output_path(&args.input, args.output.as_deref()).map_err(report)?;

    macro_rules! step {
        ($($arg:tt)*) => {
            if !args.quiet {
                println!($($arg)*);
            }
        };
    }

    step!("Hack Assembler");

    step!("1. Read File");
    step!("  < {}", input);
    let source = std::fs::read_to_string(&args.input)
        .map_err(|e| report(Error::FileRead(input.clone(), e)))?;
    let lines: Vec<&str> = source.lines().collect();

    step!("2. Collect Labels & Resolve Symbols");
    let program: Program = match hackasm::assemble(&lines) {
        Ok(program) => program,
        Err(err) => {
            err.print_diag(&input, &lines);
            return Err(());
        }
    };

    step!("3. Generate Binary");
    let mut outputs = vec![(output, program.to_hack())];
    if let Some(path) = &args.symbols {
        let yaml = program
            .symbols
            .to_yaml()
            .map_err(|e| report(Error::Serialize(path.display().to_string(), e)))?;
        outputs.push((path.clone(), yaml));
    }
    for (path, _) in &outputs {
        step!("  > {}", path.display());
    }
    write_outputs(&outputs).map_err(report)?;

    if args.dump {
        print_dump(&input, &lines, &program);
    }

    if !args.quiet {
        cprintln!(
            "<g,s>Done</>: {} instructions, {} labels, {} variables",
            program.codes.len(),
            program.symbols.count(Kind::Label),
            program.symbols.count(Kind::Variable)
        );
    }
    Ok(())
}

/// `foo/Prog.asm` -> `foo/Prog.hack` unless an explicit output is given.
fn output_path(input: &Path, output: Option<&Path>) -> Result<PathBuf, Error> {
    if input.extension().map_or(true, |ext| ext != "asm") {
        return Err(Error::Extension(input.display().to_string()));
    }
    Ok(match output {
        Some(path) => path.to_path_buf(),
        None => input.with_extension("hack"),
    })
}

/// Stage every output in a sibling temp file, then rename them into place.
/// Nothing is replaced unless all of them were written.
fn write_outputs(outputs: &[(PathBuf, String)]) -> Result<(), Error> {
    let mut staged: Vec<(PathBuf, &Path)> = vec![];
    for (path, contents) in outputs {
        let tmp = temp_path(path);
        if let Err(e) = std::fs::write(&tmp, contents) {
            let _ = std::fs::remove_file(&tmp);
            discard(&staged);
            return Err(Error::FileWrite(path.display().to_string(), e));
        }
        staged.push((tmp, path.as_path()));
    }
    for (idx, (tmp, path)) in staged.iter().enumerate() {
        if let Err(e) = std::fs::rename(tmp, path) {
            discard(&staged[idx..]);
            return Err(Error::FileWrite(path.display().to_string(), e));
        }
    }
    Ok(())
}

fn temp_path(path: &Path) -> PathBuf {
    let name = path
        .file_name()
        .map_or_else(String::new, |name| name.to_string_lossy().into_owned());
    path.with_file_name(format!(".{}.tmp", name))
}

fn discard(staged: &[(PathBuf, &Path)]) {
    for (tmp, _) in staged {
        let _ = std::fs::remove_file(tmp);
    }
}

fn report(err: Error) {
    eprintln!("{}", cformat!("<red,bold>error</>: {}", err));
    let mut source = std::error::Error::source(&err);
    while let Some(cause) = source {
        eprintln!("{}", cformat!("  <blue>caused by</>: {}", cause));
        source = std::error::Error::source(cause);
    }
}
