use std::{io, path::PathBuf};

use thiserror::Error;

use crate::operand::Role;

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("invalid parameters: {0}")]
    Config(String),

    #[error("cannot read input: {0}")]
    Input(#[source] io::Error),

    #[error("line {line}: missing header `.IPPcode18`, found `{found}`")]
    MissingHeader { line: usize, found: String },

    #[error("line {line}: unknown instruction `{mnemonic}` in `{text}`")]
    UnknownInstruction {
        line: usize,
        mnemonic: String,
        text: String,
    },

    #[error("line {line}: `{mnemonic}` expects {expected} operand(s), got {actual} in `{text}`")]
    ArityMismatch {
        line: usize,
        mnemonic: String,
        expected: usize,
        actual: usize,
        text: String,
    },

    #[error("line {line}: operand {position} `{operand}` is not a valid {role} in `{text}`")]
    InvalidOperand {
        line: usize,
        position: usize,
        role: Role,
        operand: String,
        text: String,
    },

    #[error("cannot write statistics to `{}`: {source}", path.display())]
    StatsWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot write output: {0}")]
    Output(#[source] io::Error),
}

impl ParseError {
    /// Process exit status for this error class.
    pub fn exit_code(&self) -> u8 {
        match self {
            ParseError::Config(_) => 10,
            ParseError::Input(_) => 11,
            ParseError::StatsWrite { .. } | ParseError::Output(_) => 12,
            ParseError::MissingHeader { .. }
            | ParseError::UnknownInstruction { .. }
            | ParseError::ArityMismatch { .. }
            | ParseError::InvalidOperand { .. } => 21,
        }
    }
}
