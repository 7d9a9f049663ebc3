use super::Val;
use crate::error;
use crate::lang::Error;

type Result<T> = std::result::Result<T, Error>;

/// ## Typed value operations
///
/// Pure functions over `Val`, one per arithmetic, relational, boolean
/// and string primitive. No implicit conversions anywhere: a type that
/// an operation does not list is a wrong-operand-type error.

pub struct Operation {}

impl Operation {
    pub fn add(lhs: Val, rhs: Val) -> Result<Val> {
        use Val::*;
        match lhs {
            Int(l) => match rhs {
                Int(r) => Ok(Int(l.wrapping_add(r))),
                _ => Err(error!(OperandType)),
            },
            _ => Err(error!(OperandType)),
        }
    }

    pub fn subtract(lhs: Val, rhs: Val) -> Result<Val> {
        use Val::*;
        match lhs {
            Int(l) => match rhs {
                Int(r) => Ok(Int(l.wrapping_sub(r))),
                _ => Err(error!(OperandType)),
            },
            _ => Err(error!(OperandType)),
        }
    }

    pub fn multiply(lhs: Val, rhs: Val) -> Result<Val> {
        use Val::*;
        match lhs {
            Int(l) => match rhs {
                Int(r) => Ok(Int(l.wrapping_mul(r))),
                _ => Err(error!(OperandType)),
            },
            _ => Err(error!(OperandType)),
        }
    }

    pub fn divide(lhs: Val, rhs: Val) -> Result<Val> {
        use Val::*;
        match lhs {
            Int(l) => match rhs {
                Int(0) => Err(error!(OperandValue; "division by zero")),
                Int(r) => {
                    // Floor division. wrapping_div keeps i64::MIN / -1
                    // from panicking; that one quotient wraps like the
                    // rest of the arithmetic.
                    let quotient = l.wrapping_div(r);
                    let remainder = l.wrapping_rem(r);
                    if remainder != 0 && (remainder < 0) != (r < 0) {
                        Ok(Int(quotient - 1))
                    } else {
                        Ok(Int(quotient))
                    }
                }
                _ => Err(error!(OperandType)),
            },
            _ => Err(error!(OperandType)),
        }
    }

    pub fn less(lhs: Val, rhs: Val) -> Result<Val> {
        Ok(Val::Bool(Operation::less_bool(lhs, rhs)?))
    }

    pub fn greater(lhs: Val, rhs: Val) -> Result<Val> {
        Ok(Val::Bool(Operation::less_bool(rhs, lhs)?))
    }

    fn less_bool(lhs: Val, rhs: Val) -> Result<bool> {
        use Val::*;
        match lhs {
            Int(l) => match rhs {
                Int(r) => Ok(l < r),
                _ => Err(error!(OperandType)),
            },
            Str(l) => match rhs {
                Str(r) => Ok(l < r),
                _ => Err(error!(OperandType)),
            },
            _ => Err(error!(OperandType)),
        }
    }

    pub fn equal(lhs: Val, rhs: Val) -> Result<Val> {
        Ok(Val::Bool(Operation::equal_bool(lhs, rhs)?))
    }

    /// Equality with the one sanctioned asymmetry: `Nil` compares as
    /// unequal to any non-`Nil` value instead of raising a type error.
    pub fn equal_bool(lhs: Val, rhs: Val) -> Result<bool> {
        use Val::*;
        match lhs {
            Int(l) => match rhs {
                Int(r) => Ok(l == r),
                Nil => Ok(false),
                _ => Err(error!(OperandType)),
            },
            Bool(l) => match rhs {
                Bool(r) => Ok(l == r),
                Nil => Ok(false),
                _ => Err(error!(OperandType)),
            },
            Str(l) => match rhs {
                Str(r) => Ok(l == r),
                Nil => Ok(false),
                _ => Err(error!(OperandType)),
            },
            Nil => match rhs {
                Nil => Ok(true),
                _ => Ok(false),
            },
            Undefined => Err(error!(Internal; "unresolved value")),
        }
    }

    pub fn and(lhs: Val, rhs: Val) -> Result<Val> {
        use Val::*;
        match lhs {
            Bool(l) => match rhs {
                Bool(r) => Ok(Bool(l && r)),
                _ => Err(error!(OperandType)),
            },
            _ => Err(error!(OperandType)),
        }
    }

    pub fn or(lhs: Val, rhs: Val) -> Result<Val> {
        use Val::*;
        match lhs {
            Bool(l) => match rhs {
                Bool(r) => Ok(Bool(l || r)),
                _ => Err(error!(OperandType)),
            },
            _ => Err(error!(OperandType)),
        }
    }

    pub fn not(val: Val) -> Result<Val> {
        use Val::*;
        match val {
            Bool(b) => Ok(Bool(!b)),
            _ => Err(error!(OperandType)),
        }
    }

    pub fn concat(lhs: Val, rhs: Val) -> Result<Val> {
        use Val::*;
        match lhs {
            Str(l) => match rhs {
                Str(r) => Ok(Str(l + &r)),
                _ => Err(error!(OperandType)),
            },
            _ => Err(error!(OperandType)),
        }
    }

    pub fn str_len(val: Val) -> Result<Val> {
        use Val::*;
        match val {
            Str(s) => Ok(Int(s.chars().count() as i64)),
            _ => Err(error!(OperandType)),
        }
    }

    pub fn get_char(lhs: Val, rhs: Val) -> Result<Val> {
        use Val::*;
        match lhs {
            Str(s) => match rhs {
                Int(i) => Ok(Str(Operation::char_at(&s, i)?.to_string())),
                _ => Err(error!(OperandType)),
            },
            _ => Err(error!(OperandType)),
        }
    }

    pub fn set_char(val: Val, index: Val, replacement: Val) -> Result<Val> {
        use Val::*;
        match val {
            Str(s) => match index {
                Int(i) => match replacement {
                    Str(r) => {
                        let c = match r.chars().next() {
                            Some(c) => c,
                            None => return Err(error!(StringRange; "empty replacement")),
                        };
                        Operation::char_at(&s, i)?;
                        Ok(Str(s
                            .chars()
                            .enumerate()
                            .map(|(n, old)| if n as i64 == i { c } else { old })
                            .collect()))
                    }
                    _ => Err(error!(OperandType)),
                },
                _ => Err(error!(OperandType)),
            },
            _ => Err(error!(OperandType)),
        }
    }

    pub fn str_to_int(lhs: Val, rhs: Val) -> Result<Val> {
        use Val::*;
        match lhs {
            Str(s) => match rhs {
                Int(i) => Ok(Int(i64::from(u32::from(Operation::char_at(&s, i)?)))),
                _ => Err(error!(OperandType)),
            },
            _ => Err(error!(OperandType)),
        }
    }

    pub fn int_to_char(val: Val) -> Result<Val> {
        use Val::*;
        match val {
            Int(n) => match u32::try_from(n).ok().and_then(char::from_u32) {
                Some(c) => Ok(Str(c.to_string())),
                None => Err(error!(StringRange; "invalid code point {}", n)),
            },
            _ => Err(error!(OperandType)),
        }
    }

    /// Character at a 0-based index counted in Unicode scalar values.
    fn char_at(s: &str, index: i64) -> Result<char> {
        if index >= 0 {
            if let Some(c) = s.chars().nth(index as usize) {
                return Ok(c);
            }
        }
        Err(error!(StringRange; "index {} out of range", index))
    }
}
