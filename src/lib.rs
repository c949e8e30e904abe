pub mod assembler;
pub mod encoder;
pub mod listing;
pub mod opcode;
pub mod source;

pub mod isa {
    pub mod s12; // Simple-12, 4-bit opcode + 8-bit operand
}

pub use assembler::{AddressOverflow, AsmConfig, AsmError, Assembler, Record, Summary};
pub use encoder::{Encoded, Encoder};
