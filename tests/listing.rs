use s12_rs::isa::s12::S12Encoder;
use s12_rs::listing::{fmt_address, fmt_complete, fmt_record, fmt_trace, HEADER};
use s12_rs::{AddressOverflow, AsmError, Encoder};

#[test]
fn header_literal() {
    assert_eq!(HEADER, "00000000 000000000000");
}

#[test]
fn address_is_two_uppercase_hex_digits() {
    assert_eq!(fmt_address(0, AddressOverflow::Widen).unwrap(), "00");
    assert_eq!(fmt_address(0x0A, AddressOverflow::Widen).unwrap(), "0A");
    assert_eq!(fmt_address(0xFF, AddressOverflow::Reject).unwrap(), "FF");
}

#[test]
fn address_overflow_policies() {
    assert_eq!(fmt_address(0x100, AddressOverflow::Widen).unwrap(), "100");
    assert_eq!(fmt_address(0x1AB, AddressOverflow::Widen).unwrap(), "1AB");
    assert_eq!(fmt_address(0x100, AddressOverflow::Wrap).unwrap(), "00");
    assert_eq!(fmt_address(0x1AB, AddressOverflow::Wrap).unwrap(), "AB");
    assert!(matches!(
        fmt_address(0x100, AddressOverflow::Reject),
        Err(AsmError::AddressOverflow { line: 0x100 })
    ));
}

#[test]
fn record_and_trace_lines() {
    let e = S12Encoder::new().encode("STORE", 0xFF).unwrap();
    assert_eq!(fmt_record("01", &e), "010101 11111111");
    assert_eq!(fmt_trace("01", "store ff", &e), "01: store ff -> 0101 11111111");
    assert_eq!(fmt_complete("out.mem"), "Assembly complete. Output written to out.mem");
}
