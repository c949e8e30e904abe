use s12_rs::isa::s12::S12Encoder;
use s12_rs::opcode::{self, Arity, TABLE};
use s12_rs::{AsmError, Encoder};

#[test]
fn every_operand_mnemonic_encodes_zero() {
    let enc = S12Encoder::new();
    let expected = [
        ("JMP", "0000"),
        ("JN", "0001"),
        ("JZ", "0010"),
        ("LOAD", "0100"),
        ("STORE", "0101"),
        ("LOADI", "0110"),
        ("STOREI", "0111"),
        ("AND", "1000"),
        ("OR", "1001"),
        ("ADD", "1010"),
        ("SUB", "1011"),
    ];
    for (mn, op) in expected {
        let e = enc.encode(mn, 0).unwrap();
        assert_eq!(e.to_string(), format!("{op} 00000000"), "{mn}");
    }
}

#[test]
fn halt_ignores_operand() {
    let enc = S12Encoder::new();
    for operand in [0u32, 1, 0xFF, 0x1234] {
        assert_eq!(enc.encode("HALT", operand).unwrap().to_string(), "1111 00000000");
    }
}

#[test]
fn operand_masked_to_low_byte() {
    let enc = S12Encoder::new();
    assert_eq!(enc.encode("LOAD", 0x100).unwrap(), enc.encode("LOAD", 0).unwrap());
    let e = enc.encode("SUB", 0x1AB).unwrap();
    assert_eq!(e.operand, 0xAB);
    assert_eq!(e.to_string(), "1011 10101011");
}

#[test]
fn operand_bits_zero_padded() {
    let e = S12Encoder::new().encode("JZ", 0x05).unwrap();
    assert_eq!(e.opcode_bits(), "0010");
    assert_eq!(e.operand_bits(), "00000101");
}

#[test]
fn unknown_mnemonic_is_rejected() {
    let err = S12Encoder::new().encode("FOO", 1).unwrap_err();
    match &err {
        AsmError::UnknownInstruction { mnemonic } => assert_eq!(mnemonic, "FOO"),
        other => panic!("unexpected error: {other:?}"),
    }
    assert_eq!(err.to_string(), "Unknown instruction: FOO");
}

#[test]
fn table_lookup() {
    assert_eq!(TABLE.len(), 12);
    assert_eq!(opcode::lookup("storei").unwrap().opcode, 0b0111);
    assert_eq!(opcode::lookup("HALT").unwrap().arity, Arity::None);
    assert!(opcode::lookup("NOP").is_none());
    // opcodes are unique nibbles
    for (i, a) in TABLE.iter().enumerate() {
        assert!(a.opcode <= 0xF);
        assert!(TABLE[i + 1..].iter().all(|b| b.opcode != a.opcode));
    }
}
