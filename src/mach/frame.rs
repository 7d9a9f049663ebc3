use super::{Scope, Stack, Val, Variable};
use crate::error;
use crate::lang::{Error, ErrorCode};
use std::collections::HashMap;
use std::rc::Rc;

type Result<T> = std::result::Result<T, Error>;

type Frame = HashMap<Rc<str>, Val>;

/// ## Three-tier variable storage
///
/// One global frame for the whole run, at most one temporary frame, and
/// a stack of local frames. `LF` always means the top of that stack.
/// Whether a frame exists and whether a name exists in it are separate
/// checks with separate error codes, in that order.

pub struct Frames {
    global: Frame,
    temporary: Option<Frame>,
    locals: Stack<Frame>,
}

impl Frames {
    pub fn new() -> Frames {
        Frames {
            global: HashMap::new(),
            temporary: None,
            locals: Stack::new(ErrorCode::Frame),
        }
    }

    /// Installs a fresh temporary frame, discarding any existing one.
    pub fn create_temporary(&mut self) {
        self.temporary = Some(HashMap::new());
    }

    /// Moves the temporary frame onto the local stack. The temporary
    /// slot is empty afterwards.
    pub fn push_temporary(&mut self) -> Result<()> {
        match self.temporary.take() {
            Some(frame) => {
                self.locals.push(frame);
                Ok(())
            }
            None => Err(error!(Frame)),
        }
    }

    /// Moves the top local frame back into the temporary slot,
    /// overwriting whatever was there.
    pub fn pop_local(&mut self) -> Result<()> {
        self.temporary = Some(self.locals.pop()?);
        Ok(())
    }

    /// Declares a name in the designated frame. The new slot holds no
    /// value until the first assignment.
    pub fn define(&mut self, var: &Variable) -> Result<()> {
        let frame = self.resolve_mut(var.scope)?;
        if frame.contains_key(&var.name) {
            return Err(error!(Semantic; "{} already defined", var));
        }
        frame.insert(var.name.clone(), Val::Undefined);
        Ok(())
    }

    pub fn store(&mut self, var: &Variable, val: Val) -> Result<()> {
        let frame = self.resolve_mut(var.scope)?;
        match frame.get_mut(&var.name) {
            Some(slot) => {
                *slot = val;
                Ok(())
            }
            None => Err(error!(Variable; "{}", var)),
        }
    }

    pub fn fetch(&self, var: &Variable) -> Result<Val> {
        match self.resolve(var.scope)?.get(&var.name) {
            Some(Val::Undefined) => Err(error!(MissingValue; "{}", var)),
            Some(val) => Ok(val.clone()),
            None => Err(error!(Variable; "{}", var)),
        }
    }

    /// Like `fetch` for the dynamic type name, except that a declared
    /// but unassigned variable reports `""` instead of failing. `TYPE`
    /// is the only caller.
    pub fn type_of(&self, var: &Variable) -> Result<&'static str> {
        match self.resolve(var.scope)?.get(&var.name) {
            Some(val) => Ok(val.type_name()),
            None => Err(error!(Variable; "{}", var)),
        }
    }

    fn resolve(&self, scope: Scope) -> Result<&Frame> {
        match scope {
            Scope::Global => Ok(&self.global),
            Scope::Temporary => match &self.temporary {
                Some(frame) => Ok(frame),
                None => Err(error!(Frame)),
            },
            Scope::Local => match self.locals.last() {
                Some(frame) => Ok(frame),
                None => Err(error!(Frame)),
            },
        }
    }

    fn resolve_mut(&mut self, scope: Scope) -> Result<&mut Frame> {
        match scope {
            Scope::Global => Ok(&mut self.global),
            Scope::Temporary => match &mut self.temporary {
                Some(frame) => Ok(frame),
                None => Err(error!(Frame)),
            },
            Scope::Local => match self.locals.last_mut() {
                Some(frame) => Ok(frame),
                None => Err(error!(Frame)),
            },
        }
    }
}

/// State dump used by `BREAK`. Names print sorted so the output is
/// stable across runs.
impl std::fmt::Display for Frames {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write_frame(f, "GF", Some(&self.global))?;
        write_frame(f, "TF", self.temporary.as_ref())?;
        writeln!(f, "LF: {} deep", self.locals.len())?;
        if let Some(top) = self.locals.last() {
            write_frame(f, "LF top", Some(top))?;
        }
        Ok(())
    }
}

fn write_frame(f: &mut std::fmt::Formatter, tag: &str, frame: Option<&Frame>) -> std::fmt::Result {
    write!(f, "{}:", tag)?;
    match frame {
        None => writeln!(f, " absent"),
        Some(frame) if frame.is_empty() => writeln!(f, " empty"),
        Some(frame) => {
            let mut names: Vec<&Rc<str>> = frame.keys().collect();
            names.sort();
            for name in names {
                match &frame[name] {
                    Val::Undefined => write!(f, " {}=undefined", name)?,
                    val => write!(f, " {}={}@{}", name, val.type_name(), val)?,
                }
            }
            writeln!(f)
        }
    }
}
