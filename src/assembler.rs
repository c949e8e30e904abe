use std::io::{BufRead, Write};
use std::num::ParseIntError;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::encoder::Encoder;
use crate::isa::s12::S12Encoder;
use crate::listing;
use crate::source::{Statement, Statements};

/// What to do with physical line indices that no longer fit in one hex byte.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AddressOverflow {
    /// Keep every digit (`100`, `101`, ...).
    #[default]
    Widen,
    /// Keep the low byte only.
    Wrap,
    /// Abort the run.
    Reject,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct AsmConfig {
    pub address_overflow: AddressOverflow,
    pub header: bool, // emit the initial PC/ALU record
}

impl Default for AsmConfig {
    fn default() -> Self {
        Self {
            address_overflow: AddressOverflow::Widen,
            header: true,
        }
    }
}

#[derive(thiserror::Error, Debug)]
pub enum AsmError {
    #[error("File not found: {path}")]
    InputNotFound { path: String },
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error("Bad operand {token:?} on line {line}: {source}")]
    BadOperand {
        line: usize,
        token: String,
        #[source]
        source: ParseIntError,
    },
    #[error("Unknown instruction: {mnemonic}")]
    UnknownInstruction { mnemonic: String },
    #[error("Line {line} does not fit in a one-byte address")]
    AddressOverflow { line: usize },
}

/// One emitted instruction, as written to the output image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Record {
    pub address: String,
    pub source: String,
    pub mnemonic: String,
    pub operand: u8,
    pub bits: String,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct Summary {
    /// Physical source lines read, skipped ones included.
    pub lines: usize,
    pub records: Vec<Record>,
}

impl Summary {
    pub fn encoded(&self) -> usize {
        self.records.len()
    }
}

pub struct Assembler<E: Encoder = S12Encoder> {
    pub cfg: AsmConfig,
    enc: E,
}

impl Assembler<S12Encoder> {
    pub fn new(cfg: AsmConfig) -> Self {
        Self::with_encoder(cfg, S12Encoder::new())
    }
}

impl<E: Encoder> Assembler<E> {
    pub fn with_encoder(cfg: AsmConfig, enc: E) -> Self {
        Self { cfg, enc }
    }

    /// Assemble `src` in a single pass.
    ///
    /// The image goes to `out`, the human-readable trace to `diag`. The first
    /// failing line aborts the run; records already written are left in `out`.
    pub fn run<R, W, D>(&self, src: R, out: &mut W, diag: &mut D) -> Result<Summary, AsmError>
    where
        R: BufRead,
        W: Write + ?Sized,
        D: Write + ?Sized,
    {
        if self.cfg.header {
            writeln!(out, "{}", listing::HEADER)?;
        }

        let mut stmts = Statements::new(src);
        let mut records = Vec::new();
        for stmt in stmts.by_ref() {
            let rec = self.step(&stmt?, out, diag)?;
            records.push(rec);
        }
        out.flush()?;

        let summary = Summary {
            lines: stmts.lines_read(),
            records,
        };
        info!(lines = summary.lines, encoded = summary.encoded(), "assembly complete");
        Ok(summary)
    }

    /// Encode one statement and emit its output and trace lines.
    pub fn step<W, D>(&self, stmt: &Statement, out: &mut W, diag: &mut D) -> Result<Record, AsmError>
    where
        W: Write + ?Sized,
        D: Write + ?Sized,
    {
        let enc = self.enc.encode(&stmt.mnemonic, stmt.operand)?;
        let address = listing::fmt_address(stmt.index, self.cfg.address_overflow)?;
        debug!(%address, mnemonic = %stmt.mnemonic, operand = stmt.operand, "encode");

        writeln!(out, "{}", listing::fmt_record(&address, &enc))?;
        writeln!(diag, "{}", listing::fmt_trace(&address, &stmt.text, &enc))?;

        Ok(Record {
            bits: enc.to_string(),
            address,
            source: stmt.text.clone(),
            mnemonic: stmt.mnemonic.clone(),
            operand: enc.operand,
        })
    }
}
