use color_print::cprintln;
use hasm::{assemble, error::Error, util, LineError};
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
    /// Input file
    input: String,

    /// Output file [default: <input>.hack]
    #[clap(short, long)]
    output: Option<String>,

    /// Dump listing and symbol table
    #[clap(short, long)]
    dump: bool,

    /// Only print diagnostics
    #[clap(short, long)]
    quiet: bool,
}

fn main() {
    use clap::Parser;

    let args: Args = Args::parse();
    if let Err(err) = run(&args) {
        err.print_diag(&args.input);
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), LineError> {
    let io = |err: Error| LineError::new(0, "", err);
    macro_rules! progress {
        ($($arg:tt)*) => {
            if !args.quiet {
                println!($($arg)*);
            }
        };
    }

    if !args.quiet {
        cprintln!("<s>Hack Assembler</>");
    }

    progress!("1. Read File");
    progress!("  < {}", args.input);
    let src = std::fs::read_to_string(&args.input)
        .map_err(|e| io(Error::FileOpen(args.input.clone(), e)))?;
    let lines: Vec<String> = src.lines().map(|s| s.to_string()).collect();

    progress!("2. Assemble");
    let asm = assemble(&lines)?;
    progress!("  {} words", asm.code.len());

    if args.dump {
        for row in util::dump(&args.input, &lines, &asm) {
            println!("{}", row);
        }
    }

    let output = output_path(args);
    progress!("3. Write Binary");
    progress!("  > {}", output);
    util::write_atomic(&output, &asm.to_hack_string())
        .map_err(|e| io(Error::FileWrite(output.clone(), e)))?;
    Ok(())
}

fn output_path(args: &Args) -> String {
    match &args.output {
        Some(path) => path.clone(),
        None => Path::new(&args.input)
            .with_extension("hack")
            .to_string_lossy()
            .into_owned(),
    }
}
