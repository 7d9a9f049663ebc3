use super::{DataType, Frames, Opcode, Operation, Program, Stack, Symbol, Val, Variable};
use crate::error;
use crate::lang::{Error, ErrorCode};
use std::rc::Rc;

type Result<T> = std::result::Result<T, Error>;

/// What the machine reports when `execute` returns. Opcode handlers
/// never touch the process's streams themselves; they yield events and
/// the embedding caller owns the single I/O boundary.
#[derive(Clone, Debug, PartialEq)]
pub enum Event {
    /// Step budget exhausted; call `execute` again.
    Running,
    /// One WRITE's text for the output stream.
    Print(String),
    /// One DPRINT or BREAK payload for the diagnostic stream.
    Debug(String),
    /// An interactive READ wants a line; answer with `Runtime::input`.
    Input,
    /// Halt, clean or requested by EXIT, with the process exit code.
    Stopped(i32),
}

enum Input {
    Preloaded { lines: Vec<String>, cursor: usize },
    Interactive,
}

/// ## Execution engine
///
/// A plain sequential fetch-dispatch loop over the assembled sequence.
/// One instruction completes fully before the next begins; the first
/// error aborts the run and already performed effects stay performed.

pub struct Runtime {
    program: Program,
    counter: usize,
    frames: Frames,
    data: Stack<Val>,
    calls: Stack<usize>,
    input: Input,
    pending: Option<(Variable, DataType)>,
    executed: u64,
    stopped: Option<i32>,
}

impl Runtime {
    /// Machine whose READ asks the caller for lines via `Event::Input`.
    pub fn new(program: Program) -> Runtime {
        Runtime::build(program, Input::Interactive)
    }

    /// Machine reading from a preloaded line list; one line per READ,
    /// exhaustion reads as Nil.
    pub fn with_input(program: Program, lines: Vec<String>) -> Runtime {
        Runtime::build(program, Input::Preloaded { lines, cursor: 0 })
    }

    fn build(program: Program, input: Input) -> Runtime {
        Runtime {
            program,
            counter: 0,
            frames: Frames::new(),
            data: Stack::new(ErrorCode::MissingValue),
            calls: Stack::new(ErrorCode::MissingValue),
            input,
            pending: None,
            executed: 0,
            stopped: None,
        }
    }

    /// Runs at most `steps` instructions, returning early to report an
    /// event. Terminal states are sticky: a stopped machine keeps
    /// reporting `Stopped`, an unanswered READ keeps reporting `Input`.
    pub fn execute(&mut self, steps: usize) -> Result<Event> {
        if let Some(code) = self.stopped {
            return Ok(Event::Stopped(code));
        }
        if self.pending.is_some() {
            return Ok(Event::Input);
        }
        for _ in 0..steps {
            let instruction = match self.program.get(self.counter) {
                Some(instruction) => instruction,
                None => {
                    self.stopped = Some(0);
                    return Ok(Event::Stopped(0));
                }
            };
            let order = instruction.order;
            let opcode = instruction.opcode.clone();
            self.counter += 1;
            self.executed += 1;
            match self.step(opcode, order) {
                Ok(Some(event)) => return Ok(event),
                Ok(None) => {}
                Err(e) => return Err(e.at_order(order)),
            }
            if let Some(code) = self.stopped {
                return Ok(Event::Stopped(code));
            }
        }
        Ok(Event::Running)
    }

    /// Answers an `Event::Input` request. `None` means end of input.
    pub fn input(&mut self, line: Option<&str>) -> Result<()> {
        match self.pending.take() {
            Some((var, data_type)) => {
                let val = parse_input(line, data_type);
                self.frames.store(&var, val)
            }
            None => Err(error!(Internal; "no read pending")),
        }
    }

    fn step(&mut self, opcode: Opcode, order: i32) -> Result<Option<Event>> {
        match opcode {
            Opcode::Move(var, symb) => {
                let val = self.resolve(&symb)?;
                self.frames.store(&var, val)?;
                Ok(None)
            }
            Opcode::CreateFrame => {
                self.frames.create_temporary();
                Ok(None)
            }
            Opcode::PushFrame => {
                self.frames.push_temporary()?;
                Ok(None)
            }
            Opcode::PopFrame => {
                self.frames.pop_local()?;
                Ok(None)
            }
            Opcode::DefVar(var) => {
                self.frames.define(&var)?;
                Ok(None)
            }
            Opcode::Call(name) => {
                let target = self.target(&name)?;
                self.calls.push(self.counter);
                self.counter = target;
                Ok(None)
            }
            Opcode::Return => {
                self.counter = self.calls.pop()?;
                Ok(None)
            }
            Opcode::Pushs(symb) => {
                let val = self.resolve(&symb)?;
                self.data.push(val);
                Ok(None)
            }
            Opcode::Pops(var) => {
                let val = self.data.pop()?;
                self.frames.store(&var, val)?;
                Ok(None)
            }
            Opcode::Add(var, lhs, rhs) => self.apply_2(var, lhs, rhs, Operation::add),
            Opcode::Sub(var, lhs, rhs) => self.apply_2(var, lhs, rhs, Operation::subtract),
            Opcode::Mul(var, lhs, rhs) => self.apply_2(var, lhs, rhs, Operation::multiply),
            Opcode::IDiv(var, lhs, rhs) => self.apply_2(var, lhs, rhs, Operation::divide),
            Opcode::Lt(var, lhs, rhs) => self.apply_2(var, lhs, rhs, Operation::less),
            Opcode::Gt(var, lhs, rhs) => self.apply_2(var, lhs, rhs, Operation::greater),
            Opcode::Eq(var, lhs, rhs) => self.apply_2(var, lhs, rhs, Operation::equal),
            Opcode::And(var, lhs, rhs) => self.apply_2(var, lhs, rhs, Operation::and),
            Opcode::Or(var, lhs, rhs) => self.apply_2(var, lhs, rhs, Operation::or),
            Opcode::Not(var, symb) => self.apply_1(var, symb, Operation::not),
            Opcode::Int2Char(var, symb) => self.apply_1(var, symb, Operation::int_to_char),
            Opcode::Stri2Int(var, lhs, rhs) => self.apply_2(var, lhs, rhs, Operation::str_to_int),
            Opcode::Read(var, data_type) => self.read(var, data_type),
            Opcode::Write(symb) => {
                let val = self.resolve(&symb)?;
                Ok(Some(Event::Print(val.to_string())))
            }
            Opcode::Concat(var, lhs, rhs) => self.apply_2(var, lhs, rhs, Operation::concat),
            Opcode::StrLen(var, symb) => self.apply_1(var, symb, Operation::str_len),
            Opcode::GetChar(var, lhs, rhs) => self.apply_2(var, lhs, rhs, Operation::get_char),
            Opcode::SetChar(var, index, replacement) => {
                let current = self.frames.fetch(&var)?;
                let index = self.resolve(&index)?;
                let replacement = self.resolve(&replacement)?;
                let val = Operation::set_char(current, index, replacement)?;
                self.frames.store(&var, val)?;
                Ok(None)
            }
            Opcode::Type(var, symb) => {
                let name = self.type_of(&symb)?;
                self.frames.store(&var, Val::Str(name.to_string()))?;
                Ok(None)
            }
            Opcode::Label(_) => Ok(None),
            Opcode::Jump(name) => {
                self.counter = self.target(&name)?;
                Ok(None)
            }
            Opcode::JumpIfEq(name, lhs, rhs) => self.jump_if(name, lhs, rhs, true),
            Opcode::JumpIfNeq(name, lhs, rhs) => self.jump_if(name, lhs, rhs, false),
            Opcode::Exit(symb) => match self.resolve(&symb)? {
                Val::Int(code) if (0..=49).contains(&code) => {
                    self.stopped = Some(code as i32);
                    Ok(None)
                }
                Val::Int(code) => Err(error!(OperandValue; "exit code {} out of range", code)),
                _ => Err(error!(OperandType)),
            },
            Opcode::DPrint(symb) => {
                let val = self.resolve(&symb)?;
                Ok(Some(Event::Debug(val.to_string())))
            }
            Opcode::Break => Ok(Some(Event::Debug(self.dump(order)))),
        }
    }

    fn resolve(&self, symb: &Symbol) -> Result<Val> {
        match symb {
            Symbol::Const(val) => Ok(val.clone()),
            Symbol::Var(var) => self.frames.fetch(var),
        }
    }

    fn type_of(&self, symb: &Symbol) -> Result<&'static str> {
        match symb {
            Symbol::Const(val) => Ok(val.type_name()),
            Symbol::Var(var) => self.frames.type_of(var),
        }
    }

    fn target(&self, name: &Rc<str>) -> Result<usize> {
        match self.program.label(name) {
            Some(index) => Ok(index),
            None => Err(error!(Semantic; "undefined label {}", name)),
        }
    }

    fn apply_1(
        &mut self,
        var: Variable,
        symb: Symbol,
        op: fn(Val) -> Result<Val>,
    ) -> Result<Option<Event>> {
        let val = op(self.resolve(&symb)?)?;
        self.frames.store(&var, val)?;
        Ok(None)
    }

    fn apply_2(
        &mut self,
        var: Variable,
        lhs: Symbol,
        rhs: Symbol,
        op: fn(Val, Val) -> Result<Val>,
    ) -> Result<Option<Event>> {
        let lhs = self.resolve(&lhs)?;
        let rhs = self.resolve(&rhs)?;
        let val = op(lhs, rhs)?;
        self.frames.store(&var, val)?;
        Ok(None)
    }

    /// The label is checked before the operands are even compared.
    fn jump_if(
        &mut self,
        name: Rc<str>,
        lhs: Symbol,
        rhs: Symbol,
        when: bool,
    ) -> Result<Option<Event>> {
        let target = self.target(&name)?;
        let lhs = self.resolve(&lhs)?;
        let rhs = self.resolve(&rhs)?;
        if Operation::equal_bool(lhs, rhs)? == when {
            self.counter = target;
        }
        Ok(None)
    }

    fn read(&mut self, var: Variable, data_type: DataType) -> Result<Option<Event>> {
        match &mut self.input {
            Input::Preloaded { lines, cursor } => {
                let line = lines.get(*cursor).cloned();
                if line.is_some() {
                    *cursor += 1;
                }
                let val = parse_input(line.as_deref(), data_type);
                self.frames.store(&var, val)?;
                Ok(None)
            }
            Input::Interactive => {
                self.pending = Some((var, data_type));
                Ok(Some(Event::Input))
            }
        }
    }

    fn dump(&self, order: i32) -> String {
        let mut s = String::new();
        s.push_str(&format!("break at order {}\n", order));
        s.push_str(&format!("instructions executed: {}\n", self.executed));
        s.push_str(&format!(
            "data stack {} deep, call stack {} deep\n",
            self.data.len(),
            self.calls.len()
        ));
        s.push_str(&self.frames.to_string());
        if s.ends_with('\n') {
            s.pop();
        }
        s
    }
}

/// READ's parse rules. End of input and an unparsable number both read
/// as Nil, never as an error.
fn parse_input(line: Option<&str>, data_type: DataType) -> Val {
    match line {
        None => Val::Nil,
        Some(text) => match data_type {
            DataType::Int => match text.trim().parse::<i64>() {
                Ok(n) => Val::Int(n),
                Err(_) => Val::Nil,
            },
            DataType::Bool => Val::Bool(text.trim().eq_ignore_ascii_case("true")),
            DataType::Str => Val::Str(text.to_string()),
        },
    }
}
