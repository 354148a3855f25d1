use clap::Parser;
use color_print::cprintln;
use hackasm::{
    error::IoError,
    listing,
    parser::Stmt,
    Assembly,
};
use std::{fs::File, io::Read, io::Write, process::ExitCode};

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
    #[clap(default_value = "main.asm")]
    input: String,

    /// Output file [default: input with `.hack` extension]
    #[clap(short, long)]
    output: Option<String>,

    /// Dump assembly listing
    #[clap(short, long)]
    dump: bool,

    /// Print each instruction as it is translated
    #[clap(short, long)]
    verbose: bool,

    /// Write the label and variable table as YAML
    #[clap(short, long)]
    symbols: Option<String>,
}

impl Args {
    fn output_path(&self) -> String {
        match &self.output {
            Some(path) => path.clone(),
            None => match self.input.strip_suffix(".asm") {
                Some(stem) => format!("{}.hack", stem),
                None => format!("{}.hack", self.input),
            },
        }
    }
}

fn main() -> ExitCode {
    let args = Args::parse();
    println!("Hack Assembler");

    println!("1. Read File");
    println!("  < {}", args.input);
    let source = match read_source(&args.input) {
        Ok(source) => source,
        Err(err) => {
            err.print_diag();
            return ExitCode::FAILURE;
        }
    };

    println!("2. Resolve Symbols & Generate Binary");
    let asm = match hackasm::assemble(&source) {
        Ok(asm) => asm,
        Err(err) => {
            err.print_diag(&args.input);
            return ExitCode::FAILURE;
        }
    };
    warn_redefined(&args.input, &asm);
    println!(
        "  - {} instructions, {} labels, {} variables",
        asm.words.len(),
        asm.symbols.labels().count(),
        asm.symbols.variables().count()
    );

    if args.verbose {
        trace(&asm);
    }

    let output = args.output_path();
    println!("3. Write Binary");
    println!("  > {}", output);
    if let Err(err) = write_file(&output, &asm.to_hack()) {
        err.print_diag();
        return ExitCode::FAILURE;
    }

    if let Some(path) = &args.symbols {
        println!("  > {}", path);
        let yaml = asm.symbols.to_yaml().map_err(IoError::Serialize);
        if let Err(err) = yaml.and_then(|yaml| write_file(path, &yaml)) {
            err.print_diag();
            return ExitCode::FAILURE;
        }
    }

    if args.dump {
        listing::print_dump(&args.input, &asm);
        listing::print_symbols(&asm);
    }

    ExitCode::SUCCESS
}

fn read_source(path: &str) -> Result<String, IoError> {
    let mut file = File::open(path).map_err(|e| IoError::FileOpen(path.to_string(), e))?;
    let mut source = String::new();
    file.read_to_string(&mut source)
        .map_err(|e| IoError::FileRead(path.to_string(), e))?;
    Ok(source)
}

fn write_file(path: &str, content: &str) -> Result<(), IoError> {
    let mut file = File::create(path).map_err(|e| IoError::FileCreate(path.to_string(), e))?;
    file.write_all(content.as_bytes())
        .map_err(|e| IoError::FileWrite(path.to_string(), e))
}

fn warn_redefined(path: &str, asm: &Assembly) {
    for r in &asm.redefined {
        cprintln!("<yellow,bold>warn</>: Re-defined label: `{}`", r.name);
        cprintln!("     <blue>--></> <underline>{}:{}</>", path, r.idx + 1);
        match r.prev.line {
            Some(line) => cprintln!(
                "<green,bold>note</>: Already defined at line {}. The first definition is kept.",
                line + 1
            ),
            None => cprintln!("<green,bold>note</>: `{}` is a predefined symbol.", r.name),
        }
    }
}

fn trace(asm: &Assembly) {
    for stmt in asm.stmts.iter().flatten() {
        match stmt {
            Stmt::Address(_) => {
                let symbol = stmt.symbol().unwrap_or_default();
                let addr = asm.symbols.get_val(&symbol);
                match addr {
                    Some(addr) => cprintln!("<cyan>A</>: {} ({})", symbol, addr),
                    None => cprintln!("<cyan>A</>: {}", symbol),
                }
            }
            Stmt::Compute { .. } => cprintln!(
                "<red>C</>: dest: {} comp: {} jump: {}",
                stmt.dest().ok().flatten().unwrap_or(""),
                stmt.comp().unwrap_or(""),
                stmt.jump().ok().flatten().unwrap_or("")
            ),
            Stmt::Label(_) => {
                cprintln!("<green>L</>: {}", stmt.symbol().unwrap_or_default())
            }
        }
    }
}
