/*!
# Rust Language Module

This Rust module reads the textual IPPcode23 representation: lexing of
source lines, parsing into raw instruction records, and the error type
shared by the whole crate.

*/

#[macro_use]
mod error;
mod lex;
mod parse;
mod record;

pub use error::Error;
pub use error::ErrorCode;
pub use lex::is_identifier;
pub use parse::parse;
pub use record::Arg;
pub use record::ArgKind;
pub use record::Record;
