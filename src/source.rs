//! Line filter: turns raw source text into statements tagged with their
//! physical line index. Blank and comment lines are dropped but still
//! consume an index.

use std::io::{self, BufRead};

use serde::Serialize;
use tracing::{trace, warn};

use crate::assembler::AsmError;
use crate::opcode::{self, Arity};

pub const COMMENT_MARKER: &str = "//";

/// An accepted source line, parsed but not yet encoded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Statement {
    /// Zero-based physical line index, counting skipped lines.
    pub index: usize,
    /// The trimmed source text.
    pub text: String,
    /// Upper-cased mnemonic.
    pub mnemonic: String,
    pub operand: u32,
}

/// Parse one raw line. Returns `Ok(None)` for blank and comment lines.
pub fn parse_line(index: usize, raw: &str) -> Result<Option<Statement>, AsmError> {
    let text = raw.trim();
    if text.is_empty() || text.starts_with(COMMENT_MARKER) {
        trace!(line = index, "skip");
        return Ok(None);
    }

    let mut parts = text.split_whitespace();
    let Some(mnemonic) = parts.next().map(str::to_uppercase) else {
        return Ok(None);
    };
    let token = parts.next();
    let extra = parts.count();
    if extra > 0 {
        warn!(line = index, extra, "ignoring tokens after operand");
    }

    let arity = opcode::lookup(&mnemonic).map(|d| d.arity);
    let operand = match (arity, token) {
        (_, None) => 0,
        (Some(Arity::None), Some(tok)) => {
            warn!(line = index, %mnemonic, operand = tok, "operand ignored");
            0
        }
        (_, Some(tok)) => parse_operand(index, tok)?,
    };

    Ok(Some(Statement {
        index,
        text: text.to_string(),
        mnemonic,
        operand,
    }))
}

/// Bare hexadecimal, no `0x` prefix. Negative values are rejected.
pub fn parse_operand(index: usize, token: &str) -> Result<u32, AsmError> {
    u32::from_str_radix(token, 16).map_err(|source| AsmError::BadOperand {
        line: index,
        token: token.to_string(),
        source,
    })
}

/// Iterator over the statements of a source, in order.
pub struct Statements<R> {
    lines: io::Lines<R>,
    index: usize,
}

impl<R: BufRead> Statements<R> {
    pub fn new(reader: R) -> Self {
        Self {
            lines: reader.lines(),
            index: 0,
        }
    }

    /// Physical lines consumed so far, skipped ones included.
    pub fn lines_read(&self) -> usize {
        self.index
    }
}

impl<R: BufRead> Iterator for Statements<R> {
    type Item = Result<Statement, AsmError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let raw = match self.lines.next()? {
                Ok(raw) => raw,
                Err(e) => return Some(Err(e.into())),
            };
            let index = self.index;
            self.index += 1;
            match parse_line(index, &raw) {
                Ok(Some(stmt)) => return Some(Ok(stmt)),
                Ok(None) => continue,
                Err(e) => return Some(Err(e)),
            }
        }
    }
}
