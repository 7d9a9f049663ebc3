/*!
## Rust Machine Module

This Rust module assembles and executes IPPcode23 programs.

*/

mod frame;
mod opcode;
mod operand;
mod operation;
mod program;
mod runtime;
mod stack;
mod val;

pub use frame::Frames;
pub use opcode::Opcode;
pub use opcode::Param;
pub use operand::Scope;
pub use operand::Symbol;
pub use operand::Variable;
pub use operation::Operation;
pub use program::Instruction;
pub use program::Program;
pub use runtime::Event;
pub use runtime::Runtime;
pub use stack::Stack;
pub use val::DataType;
pub use val::Val;

#[cfg(test)]
mod tests;
