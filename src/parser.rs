use crate::{
    error::ParseError,
    instructions,
    lexer::{Line, Tokenizer},
    operand::{self, Operand},
    stats::Counters,
};

pub const HEADER: &str = ".IPPcode18";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Instruction {
    /// 1-based, assigned in acceptance order.
    pub order: usize,
    /// Upper-case mnemonic.
    pub opcode: String,
    pub args: Vec<Operand>,
}

/// Accepted instructions in source order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Program {
    pub instructions: Vec<Instruction>,
}

/// Result of a complete run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Translation {
    pub program: Program,
    pub counters: Counters,
}

/// Validates tokenized lines and numbers the accepted instructions.
#[derive(Debug)]
pub struct Parser {
    next_order: usize,
    program: Program,
}

impl Parser {
    pub fn new() -> Self {
        Self { next_order: 1, program: Program::default() }
    }

    /// Validate one line. Blank lines yield `Ok(None)`.
    pub fn accept(&mut self, line: &Line) -> Result<Option<&Instruction>, ParseError> {
        let Some((first, rest)) = line.tokens.split_first() else {
            return Ok(None);
        };
        let opcode = first.to_ascii_uppercase();

        let roles = instructions::signature(&opcode).ok_or_else(|| {
            ParseError::UnknownInstruction {
                line: line.line_no,
                mnemonic: first.clone(),
                text: line.text(),
            }
        })?;

        if rest.len() != roles.len() {
            return Err(ParseError::ArityMismatch {
                line: line.line_no,
                mnemonic: opcode,
                expected: roles.len(),
                actual: rest.len(),
                text: line.text(),
            });
        }

        let args = rest
            .iter()
            .zip(roles)
            .enumerate()
            .map(|(i, (tok, &role))| {
                operand::classify(tok, role).ok_or_else(|| ParseError::InvalidOperand {
                    line: line.line_no,
                    position: i + 1,
                    role,
                    operand: tok.clone(),
                    text: line.text(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let order = self.next_order;
        self.next_order += 1;
        tracing::debug!(order, opcode = %opcode, line = line.line_no, "instruction accepted");

        self.program.instructions.push(Instruction { order, opcode, args });
        Ok(self.program.instructions.last())
    }

    pub fn finish(self) -> Program {
        self.program
    }
}

/// Check the header, then validate every line until the input ends.
pub fn translate(src: &str) -> Result<Translation, ParseError> {
    let mut tokenizer = Tokenizer::new(src);

    let header = tokenizer.header_line();
    if !matches!(header.tokens.as_slice(), [h] if h.eq_ignore_ascii_case(HEADER)) {
        return Err(ParseError::MissingHeader {
            line: header.line_no,
            found: header.text(),
        });
    }

    let mut parser = Parser::new();
    let mut at_end = header.at_end;
    while !at_end {
        let line = tokenizer.next_line();
        parser.accept(&line)?;
        at_end = line.at_end;
    }

    let program = parser.finish();
    let counters = tokenizer.counters();
    tracing::info!(
        instructions = program.instructions.len(),
        lines = counters.lines,
        comments = counters.comments,
        "translation finished"
    );
    Ok(Translation { program, counters })
}
