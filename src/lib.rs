//! ippcode18 – IPPcode18 source to XML translator
//!
//! One pass: the tokenizer splits the source into lines, the parser checks
//! each line against the instruction table and numbers it, and the encoder
//! renders the accepted program once the whole input validated.

pub mod encoder;
pub mod error;
pub mod instructions;
pub mod lexer;
pub mod operand;
pub mod parser;
pub mod stats;

pub use error::ParseError;
pub use parser::{Instruction, Program, Translation, translate};
pub use stats::{Counters, Metric, StatsConfig};
