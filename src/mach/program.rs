use super::Opcode;
use crate::error;
use crate::lang::{Error, Record};
use std::collections::HashMap;
use std::rc::Rc;

type Result<T> = std::result::Result<T, Error>;

/// One assembled instruction. The order is the source ordering key,
/// kept only for error reports and BREAK dumps; addressing always uses
/// the index in the assembled sequence.
#[derive(Clone, Debug)]
pub struct Instruction {
    pub order: i32,
    pub opcode: Opcode,
}

/// ## Assembled program
///
/// Built once from raw records, then read-only for the whole run.

#[derive(Debug)]
pub struct Program {
    instructions: Vec<Instruction>,
    labels: HashMap<Rc<str>, usize>,
}

impl Program {
    /// Assembles raw records from any producer into the executable
    /// sequence: validates every record, fixes execution order by
    /// sorting on `order`, and builds the label table. Record order in
    /// the input is irrelevant.
    pub fn assemble<T: IntoIterator<Item = Record>>(records: T) -> Result<Program> {
        let mut instructions: Vec<Instruction> = vec![];
        for record in records {
            if record.order <= 0 {
                return Err(error!(Structure; "order {} is not positive", record.order));
            }
            let opcode = Opcode::assemble(&record)?;
            instructions.push(Instruction {
                order: record.order,
                opcode,
            });
        }
        instructions.sort_by_key(|i| i.order);
        for pair in instructions.windows(2) {
            if pair[0].order == pair[1].order {
                return Err(error!(Structure; "duplicate order {}", pair[0].order));
            }
        }
        let mut labels: HashMap<Rc<str>, usize> = HashMap::new();
        for (index, instruction) in instructions.iter().enumerate() {
            if let Opcode::Label(name) = &instruction.opcode {
                if labels.insert(name.clone(), index).is_some() {
                    return Err(
                        error!(Semantic, instruction.order; "label {} already defined", name),
                    );
                }
            }
        }
        Ok(Program {
            instructions,
            labels,
        })
    }

    pub fn len(&self) -> usize {
        self.instructions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Instruction> {
        self.instructions.get(index)
    }

    /// Index of a label in the assembled sequence.
    pub fn label(&self, name: &str) -> Option<usize> {
        self.labels.get(name).copied()
    }
}
