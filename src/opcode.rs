use serde::{Deserialize, Serialize};

/// How many operand bytes a mnemonic consumes from the source line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Arity {
    /// Operand text is ignored; the operand field is zero padding.
    None,
    /// One hexadecimal operand, masked to 8 bits.
    Byte,
}

#[derive(Debug, Clone, Copy)]
pub struct OpcodeDesc {
    pub mnemonic: &'static str,
    pub opcode: u8, // low nibble only
    pub arity: Arity,
}

pub const TABLE: &[OpcodeDesc] = &[
    OpcodeDesc {
        mnemonic: "JMP",
        opcode: 0b0000,
        arity: Arity::Byte,
    },
    OpcodeDesc {
        mnemonic: "JN",
        opcode: 0b0001,
        arity: Arity::Byte,
    },
    OpcodeDesc {
        mnemonic: "JZ",
        opcode: 0b0010,
        arity: Arity::Byte,
    },
    OpcodeDesc {
        mnemonic: "LOAD",
        opcode: 0b0100,
        arity: Arity::Byte,
    },
    OpcodeDesc {
        mnemonic: "STORE",
        opcode: 0b0101,
        arity: Arity::Byte,
    },
    OpcodeDesc {
        mnemonic: "LOADI",
        opcode: 0b0110,
        arity: Arity::Byte,
    },
    OpcodeDesc {
        mnemonic: "STOREI",
        opcode: 0b0111,
        arity: Arity::Byte,
    },
    OpcodeDesc {
        mnemonic: "AND",
        opcode: 0b1000,
        arity: Arity::Byte,
    },
    OpcodeDesc {
        mnemonic: "OR",
        opcode: 0b1001,
        arity: Arity::Byte,
    },
    OpcodeDesc {
        mnemonic: "ADD",
        opcode: 0b1010,
        arity: Arity::Byte,
    },
    OpcodeDesc {
        mnemonic: "SUB",
        opcode: 0b1011,
        arity: Arity::Byte,
    },
    OpcodeDesc {
        mnemonic: "HALT",
        opcode: 0b1111,
        arity: Arity::None,
    },
];

/// Case-insensitive lookup into [`TABLE`].
pub fn lookup(mnemonic: &str) -> Option<&'static OpcodeDesc> {
    TABLE
        .iter()
        .find(|d| d.mnemonic.eq_ignore_ascii_case(mnemonic))
}
