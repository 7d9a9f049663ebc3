//! # IPPcode23
//!
//! An interpreter for IPPcode23, the three-address intermediate code
//! with one instruction per line, global, local and temporary variable
//! frames, and a data stack.
//!
//! Programs are plain text. Load one from a file and run it:
//! ```text
//! ippcode --source program.ippcode
//! ```
//! With no `--source` the program text is read from standard input;
//! with no `--input` the `READ` instruction reads from standard input.
//! At least one of the two must name a file so the interpreter knows
//! where each stream comes from.
//!
//! The library half of this crate embeds without any terminal: parse
//! text with [`lang::parse`], assemble with [`mach::Program::assemble`]
//! and pump [`mach::Runtime::execute`] for events.

#[path = "doc/introduction.rs"]
#[allow(non_snake_case)]
pub mod _Introduction;

#[path = "doc/chapter_1.rs"]
#[allow(non_snake_case)]
pub mod __Chapter_1;

#[path = "doc/appendix_a.rs"]
#[allow(non_snake_case)]
pub mod ___Appendix_A;

pub mod lang;
pub mod mach;
pub mod term;
