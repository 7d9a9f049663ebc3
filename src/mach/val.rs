/// A runtime value. `Undefined` is not a language type: it fills a
/// declared variable slot until the first assignment and turns into a
/// missing-value error the moment something tries to resolve it.
#[derive(Clone, Debug, PartialEq)]
pub enum Val {
    Int(i64),
    Bool(bool),
    Str(String),
    Nil,
    Undefined,
}

impl Val {
    /// Dynamic type name as reported by `TYPE`. Empty for `Undefined`.
    pub fn type_name(&self) -> &'static str {
        match self {
            Val::Int(_) => "int",
            Val::Bool(_) => "bool",
            Val::Str(_) => "string",
            Val::Nil => "nil",
            Val::Undefined => "",
        }
    }
}

/// Textual form used by `WRITE` and `DPRINT`. `Nil` prints as nothing.
impl std::fmt::Display for Val {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Val::Int(n) => write!(f, "{}", n),
            Val::Bool(true) => write!(f, "true"),
            Val::Bool(false) => write!(f, "false"),
            Val::Str(s) => write!(f, "{}", s),
            Val::Nil | Val::Undefined => Ok(()),
        }
    }
}

/// Target type named by `READ`'s second operand.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DataType {
    Int,
    Bool,
    Str,
}

impl DataType {
    pub fn from_text(text: &str) -> Option<DataType> {
        match text {
            "int" => Some(DataType::Int),
            "bool" => Some(DataType::Bool),
            "string" => Some(DataType::Str),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DataType::Int => "int",
            DataType::Bool => "bool",
            DataType::Str => "string",
        }
    }
}
