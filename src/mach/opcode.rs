use super::{DataType, Symbol, Val, Variable};
use crate::error;
use crate::lang::{is_identifier, Arg, ArgKind, Error, Record};
use std::rc::Rc;

type Result<T> = std::result::Result<T, Error>;

/// ## Machine instruction set
///
/// Every variant carries operands already validated and decoded at
/// assembly, so the dispatch loop never sees raw text. An opcode name
/// that fails to map here is rejected while the program is being
/// assembled, before anything runs.

#[derive(Clone, Debug, PartialEq)]
pub enum Opcode {
    /// Copy the symbol's value into the variable.
    Move(Variable, Symbol),
    CreateFrame,
    PushFrame,
    PopFrame,
    /// Declare the name in its designated frame, without a value.
    DefVar(Variable),
    /// Push the next index onto the call stack and jump to the label.
    Call(Rc<str>),
    Return,
    Pushs(Symbol),
    Pops(Variable),
    Add(Variable, Symbol, Symbol),
    Sub(Variable, Symbol, Symbol),
    Mul(Variable, Symbol, Symbol),
    IDiv(Variable, Symbol, Symbol),
    Lt(Variable, Symbol, Symbol),
    Gt(Variable, Symbol, Symbol),
    Eq(Variable, Symbol, Symbol),
    And(Variable, Symbol, Symbol),
    Or(Variable, Symbol, Symbol),
    Not(Variable, Symbol),
    Int2Char(Variable, Symbol),
    Stri2Int(Variable, Symbol, Symbol),
    /// Consume one input line, parsed as the named type.
    Read(Variable, DataType),
    Write(Symbol),
    Concat(Variable, Symbol, Symbol),
    StrLen(Variable, Symbol),
    GetChar(Variable, Symbol, Symbol),
    SetChar(Variable, Symbol, Symbol),
    Type(Variable, Symbol),
    /// No effect at run time; consumed by the label table.
    Label(Rc<str>),
    Jump(Rc<str>),
    JumpIfEq(Rc<str>, Symbol, Symbol),
    JumpIfNeq(Rc<str>, Symbol, Symbol),
    Exit(Symbol),
    DPrint(Symbol),
    /// Diagnostic state dump; no semantic effect.
    Break,
}

/// Operand slot kinds of an opcode signature.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Param {
    Var,
    Symb,
    Label,
    Type,
}

impl Opcode {
    /// Operand signature for a case-insensitive opcode name, `None` for
    /// names outside the catalog.
    pub fn params(name: &str) -> Option<&'static [Param]> {
        use Param::*;
        match name.to_ascii_uppercase().as_str() {
            "CREATEFRAME" | "PUSHFRAME" | "POPFRAME" | "RETURN" | "BREAK" => Some(&[]),
            "DEFVAR" | "POPS" => Some(&[Var]),
            "PUSHS" | "WRITE" | "EXIT" | "DPRINT" => Some(&[Symb]),
            "CALL" | "LABEL" | "JUMP" => Some(&[Label]),
            "MOVE" | "NOT" | "INT2CHAR" | "STRLEN" | "TYPE" => Some(&[Var, Symb]),
            "READ" => Some(&[Var, Type]),
            "ADD" | "SUB" | "MUL" | "IDIV" | "LT" | "GT" | "EQ" | "AND" | "OR" | "STRI2INT"
            | "CONCAT" | "GETCHAR" | "SETCHAR" => Some(&[Var, Symb, Symb]),
            "JUMPIFEQ" | "JUMPIFNEQ" => Some(&[Label, Symb, Symb]),
            _ => None,
        }
    }

    /// Builds one typed opcode from a raw record: opcode name, operand
    /// count, contiguity and every operand's form are all checked here.
    pub fn assemble(record: &Record) -> Result<Opcode> {
        let order = record.order;
        let name = record.opcode.to_ascii_uppercase();
        let params = match Opcode::params(&name) {
            Some(params) => params,
            None => return Err(error!(Structure, order; "unknown opcode {:?}", record.opcode)),
        };
        for (index, slot) in record.args.iter().enumerate() {
            if index < params.len() && slot.is_none() {
                return Err(error!(Structure, order; "missing operand {}", index + 1));
            }
            if index >= params.len() && slot.is_some() {
                return Err(error!(Structure, order; "unexpected operand {}", index + 1));
            }
        }
        let op = match name.as_str() {
            "MOVE" => Opcode::Move(var(record, 0)?, symb(record, 1)?),
            "CREATEFRAME" => Opcode::CreateFrame,
            "PUSHFRAME" => Opcode::PushFrame,
            "POPFRAME" => Opcode::PopFrame,
            "DEFVAR" => Opcode::DefVar(var(record, 0)?),
            "CALL" => Opcode::Call(label(record, 0)?),
            "RETURN" => Opcode::Return,
            "PUSHS" => Opcode::Pushs(symb(record, 0)?),
            "POPS" => Opcode::Pops(var(record, 0)?),
            "ADD" => Opcode::Add(var(record, 0)?, symb(record, 1)?, symb(record, 2)?),
            "SUB" => Opcode::Sub(var(record, 0)?, symb(record, 1)?, symb(record, 2)?),
            "MUL" => Opcode::Mul(var(record, 0)?, symb(record, 1)?, symb(record, 2)?),
            "IDIV" => Opcode::IDiv(var(record, 0)?, symb(record, 1)?, symb(record, 2)?),
            "LT" => Opcode::Lt(var(record, 0)?, symb(record, 1)?, symb(record, 2)?),
            "GT" => Opcode::Gt(var(record, 0)?, symb(record, 1)?, symb(record, 2)?),
            "EQ" => Opcode::Eq(var(record, 0)?, symb(record, 1)?, symb(record, 2)?),
            "AND" => Opcode::And(var(record, 0)?, symb(record, 1)?, symb(record, 2)?),
            "OR" => Opcode::Or(var(record, 0)?, symb(record, 1)?, symb(record, 2)?),
            "NOT" => Opcode::Not(var(record, 0)?, symb(record, 1)?),
            "INT2CHAR" => Opcode::Int2Char(var(record, 0)?, symb(record, 1)?),
            "STRI2INT" => Opcode::Stri2Int(var(record, 0)?, symb(record, 1)?, symb(record, 2)?),
            "READ" => Opcode::Read(var(record, 0)?, data_type(record, 1)?),
            "WRITE" => Opcode::Write(symb(record, 0)?),
            "CONCAT" => Opcode::Concat(var(record, 0)?, symb(record, 1)?, symb(record, 2)?),
            "STRLEN" => Opcode::StrLen(var(record, 0)?, symb(record, 1)?),
            "GETCHAR" => Opcode::GetChar(var(record, 0)?, symb(record, 1)?, symb(record, 2)?),
            "SETCHAR" => Opcode::SetChar(var(record, 0)?, symb(record, 1)?, symb(record, 2)?),
            "TYPE" => Opcode::Type(var(record, 0)?, symb(record, 1)?),
            "LABEL" => Opcode::Label(label(record, 0)?),
            "JUMP" => Opcode::Jump(label(record, 0)?),
            "JUMPIFEQ" => Opcode::JumpIfEq(label(record, 0)?, symb(record, 1)?, symb(record, 2)?),
            "JUMPIFNEQ" => {
                Opcode::JumpIfNeq(label(record, 0)?, symb(record, 1)?, symb(record, 2)?)
            }
            "EXIT" => Opcode::Exit(symb(record, 0)?),
            "DPRINT" => Opcode::DPrint(symb(record, 0)?),
            "BREAK" => Opcode::Break,
            _ => return Err(error!(Internal; "no assembly for opcode {:?}", name)),
        };
        Ok(op)
    }

    pub fn name(&self) -> &'static str {
        use Opcode::*;
        match self {
            Move(..) => "MOVE",
            CreateFrame => "CREATEFRAME",
            PushFrame => "PUSHFRAME",
            PopFrame => "POPFRAME",
            DefVar(..) => "DEFVAR",
            Call(..) => "CALL",
            Return => "RETURN",
            Pushs(..) => "PUSHS",
            Pops(..) => "POPS",
            Add(..) => "ADD",
            Sub(..) => "SUB",
            Mul(..) => "MUL",
            IDiv(..) => "IDIV",
            Lt(..) => "LT",
            Gt(..) => "GT",
            Eq(..) => "EQ",
            And(..) => "AND",
            Or(..) => "OR",
            Not(..) => "NOT",
            Int2Char(..) => "INT2CHAR",
            Stri2Int(..) => "STRI2INT",
            Read(..) => "READ",
            Write(..) => "WRITE",
            Concat(..) => "CONCAT",
            StrLen(..) => "STRLEN",
            GetChar(..) => "GETCHAR",
            SetChar(..) => "SETCHAR",
            Type(..) => "TYPE",
            Label(..) => "LABEL",
            Jump(..) => "JUMP",
            JumpIfEq(..) => "JUMPIFEQ",
            JumpIfNeq(..) => "JUMPIFNEQ",
            Exit(..) => "EXIT",
            DPrint(..) => "DPRINT",
            Break => "BREAK",
        }
    }
}

impl std::fmt::Display for Opcode {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

fn arg(record: &Record, index: usize) -> Result<&Arg> {
    match &record.args[index] {
        Some(arg) => Ok(arg),
        None => Err(error!(Structure, record.order; "missing operand {}", index + 1)),
    }
}

fn var(record: &Record, index: usize) -> Result<Variable> {
    let arg = arg(record, index)?;
    match arg.kind {
        ArgKind::Var => Variable::parse(&arg.text).map_err(|e| e.at_order(record.order)),
        _ => Err(wrong_kind(record, index, "a variable")),
    }
}

fn symb(record: &Record, index: usize) -> Result<Symbol> {
    let arg = arg(record, index)?;
    let val = match arg.kind {
        ArgKind::Var => {
            return Ok(Symbol::Var(
                Variable::parse(&arg.text).map_err(|e| e.at_order(record.order))?,
            ))
        }
        ArgKind::Int => match arg.text.parse::<i64>() {
            Ok(n) => Val::Int(n),
            Err(_) => {
                return Err(error!(Structure, record.order; "bad int constant {:?}", arg.text))
            }
        },
        ArgKind::Bool => match arg.text.as_str() {
            "true" => Val::Bool(true),
            "false" => Val::Bool(false),
            _ => return Err(error!(Structure, record.order; "bad bool constant {:?}", arg.text)),
        },
        ArgKind::Str => Val::Str(decode_escapes(&arg.text, record.order)?),
        ArgKind::Nil => {
            if arg.text == "nil" {
                Val::Nil
            } else {
                return Err(error!(Structure, record.order; "bad nil constant {:?}", arg.text));
            }
        }
        ArgKind::Label | ArgKind::Type => return Err(wrong_kind(record, index, "a symbol")),
    };
    Ok(Symbol::Const(val))
}

fn label(record: &Record, index: usize) -> Result<Rc<str>> {
    let arg = arg(record, index)?;
    if arg.kind != ArgKind::Label || !is_identifier(&arg.text) {
        return Err(wrong_kind(record, index, "a label"));
    }
    Ok(arg.text.as_str().into())
}

fn data_type(record: &Record, index: usize) -> Result<DataType> {
    let arg = arg(record, index)?;
    if arg.kind != ArgKind::Type {
        return Err(wrong_kind(record, index, "a type name"));
    }
    match DataType::from_text(&arg.text) {
        Some(t) => Ok(t),
        None => Err(error!(Structure, record.order; "bad type name {:?}", arg.text)),
    }
}

fn wrong_kind(record: &Record, index: usize, wanted: &str) -> Error {
    error!(Structure, record.order; "operand {} must be {}", index + 1, wanted)
}

/// Decodes the `\xyz` string escapes, exactly once per program: a
/// backslash must be followed by three decimal digits naming a code
/// point. Run-time string operations never reinterpret the result.
fn decode_escapes(text: &str, order: i32) -> Result<String> {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        let mut code = 0;
        for _ in 0..3 {
            match chars.next().and_then(|d| d.to_digit(10)) {
                Some(d) => code = code * 10 + d,
                None => {
                    return Err(error!(Structure, order; "bad escape in string constant"));
                }
            }
        }
        match char::from_u32(code) {
            Some(c) => out.push(c),
            None => return Err(error!(Internal; "escape {} out of range", code)),
        }
    }
    Ok(out)
}
