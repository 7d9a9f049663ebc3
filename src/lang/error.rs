pub struct Error {
    code: u16,
    order: Option<i32>,
    message: String,
}

#[doc(hidden)]
#[macro_export]
macro_rules! error {
    ($err:ident) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
    };
    ($err:ident, $order:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err).at_order($order)
    };
    ($err:ident; $($msg:tt)+) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err).message(format!($($msg)+))
    };
    ($err:ident, $order:expr; $($msg:tt)+) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
            .at_order($order)
            .message(format!($($msg)+))
    };
}

impl Error {
    pub fn new(code: ErrorCode) -> Error {
        Error {
            code: code as u16,
            order: None,
            message: String::new(),
        }
    }

    /// Attach the order of the instruction being assembled or executed.
    /// An order already present wins, so outer boundaries may tag errors
    /// without clobbering a more precise inner position.
    pub fn at_order(mut self, order: i32) -> Error {
        if self.order.is_none() {
            self.order = Some(order);
        }
        self
    }

    pub fn message(mut self, message: impl Into<String>) -> Error {
        self.message = message.into();
        self
    }

    /// Process exit code this error maps to.
    pub fn exit_code(&self) -> i32 {
        i32::from(self.code)
    }
}

/// Exit codes of the IPPcode23 tool family. The discriminants are the
/// externally observable contract; everything else about an `Error` is
/// human-oriented detail.
#[derive(Clone, Copy)]
pub enum ErrorCode {
    Parameter = 10,
    InputFile = 11,
    OutputFile = 12,
    Loading = 31,
    Structure = 32,
    Semantic = 52,
    OperandType = 53,
    Variable = 54,
    Frame = 55,
    MissingValue = 56,
    OperandValue = 57,
    StringRange = 58,
    Internal = 99,
}

impl std::fmt::Debug for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Error {{ {} }}", self)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let code_str = match self.code {
            10 => "invalid arguments",
            11 => "cannot read input file",
            12 => "cannot write output file",
            31 => "malformed program source",
            32 => "ill-formed instruction",
            52 => "semantic error",
            53 => "wrong operand type",
            54 => "variable not declared",
            55 => "frame not found",
            56 => "missing value",
            57 => "wrong operand value",
            58 => "string index out of range",
            _ => "internal error",
        };
        write!(f, "error {}: {}", self.code, code_str)?;
        if let Some(order) = self.order {
            write!(f, " at order {}", order)?;
        }
        if !self.message.is_empty() {
            write!(f, "; {}", self.message)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        assert_eq!(Error::new(ErrorCode::Loading).exit_code(), 31);
        assert_eq!(Error::new(ErrorCode::Structure).exit_code(), 32);
        assert_eq!(Error::new(ErrorCode::Semantic).exit_code(), 52);
        assert_eq!(Error::new(ErrorCode::OperandType).exit_code(), 53);
        assert_eq!(Error::new(ErrorCode::Variable).exit_code(), 54);
        assert_eq!(Error::new(ErrorCode::Frame).exit_code(), 55);
        assert_eq!(Error::new(ErrorCode::MissingValue).exit_code(), 56);
        assert_eq!(Error::new(ErrorCode::OperandValue).exit_code(), 57);
        assert_eq!(Error::new(ErrorCode::StringRange).exit_code(), 58);
    }

    #[test]
    fn test_display_carries_order_and_detail() {
        let e = error!(Variable, 7; "GF@{}", "x");
        assert_eq!(
            e.to_string(),
            "error 54: variable not declared at order 7; GF@x"
        );
        let e = error!(Frame);
        assert_eq!(e.to_string(), "error 55: frame not found");
    }

    #[test]
    fn test_inner_order_wins() {
        let e = error!(MissingValue, 3).at_order(9);
        assert_eq!(e.to_string(), "error 56: missing value at order 3");
    }
}
