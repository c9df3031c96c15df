use color_print::cprintln;
use hvm::error::{Error, LineError};
use std::path::Path;

const HELP_TEMPLATE: &str = "\
{before-help}{bin} {version}
  {author}
  {about}

{usage-heading}
{tab}{usage}

{all-args}{after-help}";

#[derive(Debug, clap::Parser)]
#[clap(author, version, about, help_template = HELP_TEMPLATE)]
struct Args {
    /// Input files
    #[clap(required = true)]
    input: Vec<String>,

    /// Output file [default: <input>.asm, required for several inputs]
    #[clap(short, long)]
    output: Option<String>,

    /// Also assemble the output into a .hack file
    #[clap(short, long)]
    assemble: bool,

    /// Only print diagnostics
    #[clap(short, long)]
    quiet: bool,
}

fn main() {
    use clap::Parser;

    let args: Args = Args::parse();
    if let Err(err) = run(&args) {
        err.print_diag();
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), LineError> {
    macro_rules! progress {
        ($($arg:tt)*) => {
            if !args.quiet {
                println!($($arg)*);
            }
        };
    }

    let output = output_path(args)?;

    if !args.quiet {
        cprintln!("<s>Hack VM Translator</>");
    }

    progress!("1. Read Files");
    let mut files = vec![];
    for path in &args.input {
        progress!("  < {}", path);
        let src = std::fs::read_to_string(path)
            .map_err(|e| LineError::new(path, 0, "", Error::FileOpen(path.clone(), e)))?;
        let prog = Path::new(path)
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.clone());
        files.push((prog, src));
    }

    progress!("2. Translate");
    let asm = hvm::translate(&files)?;

    progress!("3. Write Assembly");
    progress!("  > {}", output);
    write_atomic(&output, &asm)?;

    if args.assemble {
        progress!("4. Assemble");
        let hack = hasm::assemble_str(&asm).map_err(|e| {
            let (line, raw) = (e.line, e.raw.clone());
            LineError::new(&output, line, &raw, Error::Assemble(e))
        })?;
        let path = Path::new(&output)
            .with_extension("hack")
            .to_string_lossy()
            .into_owned();
        progress!("  > {}", path);
        write_atomic(&path, &hack.to_hack_string())?;
    }
    Ok(())
}

fn output_path(args: &Args) -> Result<String, LineError> {
    match (&args.output, args.input.as_slice()) {
        (Some(path), _) => Ok(path.clone()),
        (None, [single]) => Ok(Path::new(single)
            .with_extension("asm")
            .to_string_lossy()
            .into_owned()),
        (None, inputs) => Err(LineError::new(&inputs.join(" "), 0, "", Error::MissingOutput)),
    }
}

fn write_atomic(path: &str, contents: &str) -> Result<(), LineError> {
    hasm::util::write_atomic(path, contents)
        .map_err(|e| LineError::new(path, 0, "", Error::FileWrite(path.to_string(), e)))
}
