use crate::error;
use crate::lang::{self, Error};
use crate::mach::{Event, Program, Runtime};
use ansi_term::Style;
use clap::Parser;
use std::fs;
use std::io::{self, BufRead, ErrorKind, Read, Write};
use std::path::{Path, PathBuf};
use std::process;

type Result<T> = std::result::Result<T, Error>;

/// Instructions per `execute` slice; keeps the loop responsive without
/// per-instruction event traffic.
const BATCH: usize = 5000;

#[derive(Parser, Debug)]
#[command(name = "ippcode")]
#[command(about = "IPPcode23 interpreter", version)]
struct Args {
    /// File with the program source; stdin when omitted
    #[arg(long)]
    source: Option<PathBuf>,

    /// File with lines for READ; stdin when omitted
    #[arg(long)]
    input: Option<PathBuf>,
}

pub fn main() {
    process::exit(match run() {
        Ok(code) => code,
        Err(error) => {
            eprintln!("{}", Style::new().bold().paint(error.to_string()));
            error.exit_code()
        }
    });
}

fn run() -> Result<i32> {
    let args = parse_args()?;
    let source = match &args.source {
        Some(path) => read_file(path)?,
        None => read_stdin()?,
    };
    let records = lang::parse(&source)?;
    let program = Program::assemble(records)?;
    let mut runtime = match &args.input {
        Some(path) => {
            let lines = read_file(path)?.lines().map(str::to_string).collect();
            Runtime::with_input(program, lines)
        }
        None => Runtime::new(program),
    };
    pump(&mut runtime)
}

fn parse_args() -> Result<Args> {
    use clap::error::ErrorKind::{DisplayHelp, DisplayVersion};
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) if matches!(e.kind(), DisplayHelp | DisplayVersion) => {
            let _ = e.print();
            process::exit(0);
        }
        Err(e) => {
            let _ = e.print();
            return Err(error!(Parameter));
        }
    };
    // Source and program input cannot both come from stdin.
    if args.source.is_none() && args.input.is_none() {
        return Err(error!(Parameter; "at least one of --source and --input is required"));
    }
    Ok(args)
}

fn read_file(path: &Path) -> Result<String> {
    match fs::read_to_string(path) {
        Ok(text) => Ok(text),
        Err(error) => {
            let msg = format!("{}: {}", path.display(), error);
            match error.kind() {
                ErrorKind::NotFound | ErrorKind::PermissionDenied => {
                    Err(error!(InputFile; "{}", msg))
                }
                _ => Err(error!(Internal; "{}", msg)),
            }
        }
    }
}

fn read_stdin() -> Result<String> {
    let mut text = String::new();
    match io::stdin().read_to_string(&mut text) {
        Ok(_) => Ok(text),
        Err(error) => Err(error!(InputFile; "{}", error)),
    }
}

fn pump(runtime: &mut Runtime) -> Result<i32> {
    let stdout = io::stdout();
    let stdin = io::stdin();
    loop {
        match runtime.execute(BATCH)? {
            Event::Running => {}
            Event::Print(text) => {
                let mut out = stdout.lock();
                let written = out.write_all(text.as_bytes()).and_then(|_| out.flush());
                if let Err(error) = written {
                    return Err(error!(OutputFile; "{}", error));
                }
            }
            Event::Debug(text) => eprintln!("{}", text),
            Event::Input => {
                let mut line = String::new();
                match stdin.lock().read_line(&mut line) {
                    Ok(0) => runtime.input(None)?,
                    Ok(_) => {
                        trim_newline(&mut line);
                        runtime.input(Some(&line))?;
                    }
                    Err(error) => return Err(error!(InputFile; "{}", error)),
                }
            }
            Event::Stopped(code) => return Ok(code),
        }
    }
}

fn trim_newline(line: &mut String) {
    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
}
