#![allow(dead_code)]

use ipp::lang::{parse, Error};
use ipp::mach::{Event, Program, Runtime};

pub struct Run {
    pub output: String,
    pub debug: String,
    pub code: i32,
}

fn assemble(source: &str) -> Result<Program, Error> {
    Ok(Program::assemble(parse(source)?)?)
}

pub fn load(source: &str) -> Runtime {
    match assemble(source) {
        Ok(program) => Runtime::new(program),
        Err(e) => panic!("{} : {:?}", e, e),
    }
}

pub fn load_with(source: &str, input: &[&str]) -> Runtime {
    match assemble(source) {
        Ok(program) => Runtime::with_input(program, input.iter().map(|s| s.to_string()).collect()),
        Err(e) => panic!("{} : {:?}", e, e),
    }
}

pub fn load_err(source: &str) -> Error {
    match assemble(source) {
        Ok(_) => panic!("expected a load failure"),
        Err(e) => e,
    }
}

pub fn exec(runtime: &mut Runtime) -> Run {
    match try_exec(runtime) {
        Ok(run) => run,
        Err(e) => panic!("{} : {:?}", e, e),
    }
}

pub fn exec_err(runtime: &mut Runtime) -> Error {
    match try_exec(runtime) {
        Ok(run) => panic!("stopped with {} instead of failing", run.code),
        Err(e) => e,
    }
}

/// Exit code of a program expected to fail, at load time or run time.
pub fn err_code(source: &str) -> i32 {
    match assemble(source) {
        Ok(program) => exec_err(&mut Runtime::new(program)).exit_code(),
        Err(e) => e.exit_code(),
    }
}

fn try_exec(runtime: &mut Runtime) -> Result<Run, Error> {
    let mut run = Run {
        output: String::new(),
        debug: String::new(),
        code: 0,
    };
    let mut prev_running = false;
    loop {
        let event = runtime.execute(5000)?;
        match &event {
            Event::Stopped(code) => {
                run.code = *code;
                return Ok(run);
            }
            Event::Print(text) => run.output.push_str(text),
            Event::Debug(text) => {
                run.debug.push_str(text);
                run.debug.push('\n');
            }
            Event::Input => panic!("unexpected input request"),
            Event::Running => {
                if prev_running {
                    panic!("execution cycles exceeded");
                }
            }
        }
        prev_running = matches!(event, Event::Running);
    }
}
