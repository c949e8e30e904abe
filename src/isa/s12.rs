use crate::assembler::AsmError;
use crate::encoder::{Encoded, Encoder};
use crate::opcode::{self, Arity};

/// Simple-12 encoder.
/// Table driven: a 4-bit opcode from [`opcode::TABLE`] plus the low byte of the operand.
#[derive(Debug, Default, Clone, Copy)]
pub struct S12Encoder;

impl S12Encoder {
    pub fn new() -> Self {
        Self
    }
}

impl Encoder for S12Encoder {
    fn encode(&self, mnemonic: &str, operand: u32) -> Result<Encoded, AsmError> {
        let desc = opcode::lookup(mnemonic).ok_or_else(|| AsmError::UnknownInstruction {
            mnemonic: mnemonic.to_string(),
        })?;
        let operand = match desc.arity {
            // HALT and friends: operand field is always zero padding
            Arity::None => 0,
            Arity::Byte => (operand & 0xFF) as u8,
        };
        Ok(Encoded {
            opcode: desc.opcode & 0xF,
            operand,
            arity: desc.arity,
        })
    }
}
