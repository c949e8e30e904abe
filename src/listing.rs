use crate::assembler::{AddressOverflow, AsmError};
use crate::encoder::Encoded;

/// Initial PC and ALU state; always the first record of an image.
pub const HEADER: &str = "00000000 000000000000";

/// Two-digit uppercase hex address for a physical line index.
pub fn fmt_address(index: usize, policy: AddressOverflow) -> Result<String, AsmError> {
    if index <= 0xFF {
        return Ok(format!("{:02X}", index));
    }
    match policy {
        AddressOverflow::Widen => Ok(format!("{:02X}", index)),
        AddressOverflow::Wrap => Ok(format!("{:02X}", index & 0xFF)),
        AddressOverflow::Reject => Err(AsmError::AddressOverflow { line: index }),
    }
}

/// `HH` immediately followed by the encoded bits.
pub fn fmt_record(address: &str, enc: &Encoded) -> String {
    format!("{address}{enc}")
}

/// `HH: <source> -> <bits>`
pub fn fmt_trace(address: &str, text: &str, enc: &Encoded) -> String {
    format!("{address}: {text} -> {enc}")
}

pub fn fmt_complete(output: &str) -> String {
    format!("Assembly complete. Output written to {output}")
}
