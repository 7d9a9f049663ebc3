/// One raw instruction record as produced by a program source.
///
/// A record is untyped transport: the opcode is still a name and every
/// operand is still text tagged with the kind its producer claimed for it.
/// Assembly turns records into machine instructions and is where all
/// validation beyond surface shape happens.
#[derive(Clone, Debug, PartialEq)]
pub struct Record {
    pub order: i32,
    pub opcode: String,
    pub args: [Option<Arg>; 3],
}

#[derive(Clone, Debug, PartialEq)]
pub struct Arg {
    pub kind: ArgKind,
    pub text: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ArgKind {
    Var,
    Int,
    Bool,
    Str,
    Nil,
    Label,
    Type,
}

impl Record {
    pub fn new(order: i32, opcode: &str) -> Record {
        Record {
            order,
            opcode: opcode.to_string(),
            args: [None, None, None],
        }
    }

    /// Appends an operand to the first empty slot. Slots past the third
    /// are silently ignored; assembly rejects such records anyway.
    pub fn arg(mut self, kind: ArgKind, text: &str) -> Record {
        for slot in self.args.iter_mut() {
            if slot.is_none() {
                *slot = Some(Arg::new(kind, text));
                break;
            }
        }
        self
    }
}

impl Arg {
    pub fn new(kind: ArgKind, text: &str) -> Arg {
        Arg {
            kind,
            text: text.to_string(),
        }
    }
}

impl ArgKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ArgKind::Var => "var",
            ArgKind::Int => "int",
            ArgKind::Bool => "bool",
            ArgKind::Str => "string",
            ArgKind::Nil => "nil",
            ArgKind::Label => "label",
            ArgKind::Type => "type",
        }
    }
}

impl std::fmt::Display for ArgKind {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
