use crate::lang;
use crate::mach::{Event, Program, Runtime};

mod program_test;

/// Assembles IPPcode23 source, panicking on any load or assembly error.
fn assemble(source: &str) -> Program {
    let records = match lang::parse(source) {
        Ok(records) => records,
        Err(e) => panic!("{} : {:?}", e, e),
    };
    match Program::assemble(records) {
        Ok(program) => program,
        Err(e) => panic!("{} : {:?}", e, e),
    }
}

/// Pumps a machine to its halt, collecting WRITE output.
fn run(runtime: &mut Runtime) -> String {
    let mut s = String::new();
    let mut prev_running = false;
    loop {
        let event = match runtime.execute(5000) {
            Ok(event) => event,
            Err(e) => panic!("{} : {:?}", e, e),
        };
        match &event {
            Event::Stopped(_) => break,
            Event::Print(text) => s.push_str(text),
            Event::Debug(_) => {}
            Event::Input => panic!("unexpected input request"),
            Event::Running => {
                if prev_running {
                    panic!("execution cycles exceeded");
                }
            }
        }
        prev_running = matches!(event, Event::Running);
    }
    s
}

/// Pumps a machine expecting a runtime error, returning it.
fn run_err(runtime: &mut Runtime) -> lang::Error {
    for _ in 0..4 {
        match runtime.execute(5000) {
            Ok(Event::Stopped(code)) => panic!("stopped with {} instead of failing", code),
            Ok(_) => {}
            Err(e) => return e,
        }
    }
    panic!("execution cycles exceeded");
}

/// Pumps a machine to its halt, returning the stop code.
fn stop_code(runtime: &mut Runtime) -> i32 {
    let mut prev_running = false;
    loop {
        let event = match runtime.execute(5000) {
            Ok(event) => event,
            Err(e) => panic!("{} : {:?}", e, e),
        };
        match event {
            Event::Stopped(code) => return code,
            Event::Input => panic!("unexpected input request"),
            Event::Running => {
                if prev_running {
                    panic!("execution cycles exceeded");
                }
                prev_running = true;
            }
            _ => prev_running = false,
        }
    }
}
