use std::fmt;

use bitvec::prelude::*;
use serde::{Deserialize, Serialize};

use crate::assembler::AsmError;
use crate::opcode::Arity;

/// One encoded instruction: a 4-bit opcode followed by an 8-bit operand field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Encoded {
    pub opcode: u8,
    pub operand: u8,
    pub arity: Arity,
}

impl Encoded {
    /// `opcode` as four binary digits, most significant first.
    pub fn opcode_bits(&self) -> String {
        render(&self.opcode.view_bits::<Msb0>()[4..])
    }

    /// `operand` as eight binary digits, zero-padded on the left.
    pub fn operand_bits(&self) -> String {
        render(self.operand.view_bits::<Msb0>())
    }
}

fn render(bits: &BitSlice<u8, Msb0>) -> String {
    bits.iter()
        .by_vals()
        .map(|b| if b { '1' } else { '0' })
        .collect()
}

impl fmt::Display for Encoded {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.opcode_bits(), self.operand_bits())
    }
}

pub trait Encoder {
    fn encode(&self, mnemonic: &str, operand: u32) -> Result<Encoded, AsmError>;
}
