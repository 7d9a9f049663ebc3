use super::Val;
use crate::error;
use crate::lang::{is_identifier, Error};
use std::rc::Rc;

type Result<T> = std::result::Result<T, Error>;

/// Which of the three variable storages a reference names.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Scope {
    Global,
    Local,
    Temporary,
}

impl Scope {
    pub fn as_str(&self) -> &'static str {
        match self {
            Scope::Global => "GF",
            Scope::Local => "LF",
            Scope::Temporary => "TF",
        }
    }
}

/// A variable reference: the frame designator written in the source and
/// the name looked up inside that frame at run time.
#[derive(Clone, Debug, PartialEq)]
pub struct Variable {
    pub scope: Scope,
    pub name: Rc<str>,
}

impl Variable {
    /// Parses the `GF@name` form. The text loader guarantees this shape
    /// for its own records; records from other producers are checked
    /// here again, since a bad reference is an ill-formed instruction.
    pub fn parse(text: &str) -> Result<Variable> {
        let (scope, name) = match text.split_once('@') {
            Some(("GF", name)) => (Scope::Global, name),
            Some(("LF", name)) => (Scope::Local, name),
            Some(("TF", name)) => (Scope::Temporary, name),
            _ => return Err(error!(Structure; "bad variable {:?}", text)),
        };
        if !is_identifier(name) {
            return Err(error!(Structure; "bad variable name {:?}", name));
        }
        Ok(Variable {
            scope,
            name: name.into(),
        })
    }
}

impl std::fmt::Display for Variable {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}@{}", self.scope.as_str(), self.name)
    }
}

/// An operand resolved to a value at use time: either a constant fixed
/// at assembly or a variable reference into the frames.
#[derive(Clone, Debug, PartialEq)]
pub enum Symbol {
    Const(Val),
    Var(Variable),
}
