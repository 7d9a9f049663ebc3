use super::lex::{is_header, is_identifier, lex};
use super::record::{Arg, ArgKind, Record};
use super::Error;
use crate::error;

type Result<T> = std::result::Result<T, Error>;

/// Reads the textual IPPcode23 form into raw instruction records.
///
/// The text is line oriented: a `.IPPcode23` header first, then one
/// instruction per line as `OPCODE operand operand operand`, with `#`
/// comments allowed anywhere. Orders are assigned from the position in
/// the text, starting at 1. Operand tokens are classified here by shape
/// only; constant values, escapes and opcode names are checked during
/// assembly.
pub fn parse(source: &str) -> Result<Vec<Record>> {
    Parser::parse(source)
}

struct Parser {
    records: Vec<Record>,
    seen_header: bool,
}

impl Parser {
    fn parse(source: &str) -> Result<Vec<Record>> {
        let mut parser = Parser {
            records: vec![],
            seen_header: false,
        };
        for (index, line) in source.lines().enumerate() {
            parser.line(index + 1, line)?;
        }
        if !parser.seen_header {
            return Err(error!(Loading; "missing .IPPcode23 header"));
        }
        Ok(parser.records)
    }

    fn line(&mut self, number: usize, line: &str) -> Result<()> {
        let fields = lex(line);
        if fields.is_empty() {
            return Ok(());
        }
        if !self.seen_header {
            if is_header(line) {
                self.seen_header = true;
                return Ok(());
            }
            return Err(error!(Loading; "line {}: expected the .IPPcode23 header", number));
        }
        self.instruction(number, &fields)
    }

    fn instruction(&mut self, number: usize, fields: &[&str]) -> Result<()> {
        if fields.len() > 4 {
            return Err(error!(Structure; "line {}: too many operands", number));
        }
        let opcode = fields[0];
        let order = self.records.len() as i32 + 1;
        let mut record = Record::new(order, opcode);
        for (index, field) in fields[1..].iter().enumerate() {
            record.args[index] = Some(operand(number, opcode, index, field)?);
        }
        self.records.push(record);
        Ok(())
    }
}

fn operand(number: usize, opcode: &str, index: usize, field: &str) -> Result<Arg> {
    if let Some((prefix, rest)) = field.split_once('@') {
        return match prefix {
            "GF" | "LF" | "TF" => {
                if is_identifier(rest) {
                    Ok(Arg::new(ArgKind::Var, field))
                } else {
                    Err(error!(Loading; "line {}: bad variable {:?}", number, field))
                }
            }
            "int" => Ok(Arg::new(ArgKind::Int, rest)),
            "bool" => Ok(Arg::new(ArgKind::Bool, rest)),
            "string" => Ok(Arg::new(ArgKind::Str, rest)),
            "nil" => Ok(Arg::new(ArgKind::Nil, rest)),
            _ => Err(error!(Loading; "line {}: unknown operand form {:?}", number, field)),
        };
    }
    // Bare words: READ names its target type in the second slot, every
    // other bare operand is a label. Type names are checked at assembly.
    if opcode.eq_ignore_ascii_case("READ") && index == 1 {
        return Ok(Arg::new(ArgKind::Type, field));
    }
    if is_identifier(field) {
        Ok(Arg::new(ArgKind::Label, field))
    } else {
        Err(error!(Loading; "line {}: expected an operand, found {:?}", number, field))
    }
}
