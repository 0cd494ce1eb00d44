//! RAM tests.

use rstest::rstest;
use rvmon_core::common::SimError;
use rvmon_core::soc::Memory;

#[test]
fn reads_are_little_endian() {
    let mut mem = Memory::new(0x100, 16);
    mem.paddr_write(0x100, 8, 0x0807_0605_0403_0201).unwrap();
    assert_eq!(mem.paddr_read(0x100, 1).unwrap(), 0x01);
    assert_eq!(mem.paddr_read(0x101, 2).unwrap(), 0x0302);
    assert_eq!(mem.paddr_read(0x104, 4).unwrap(), 0x0807_0605);
}

#[test]
fn reports_its_window() {
    let mem = Memory::new(0x100, 16);
    assert_eq!(mem.base(), 0x100);
    assert_eq!(mem.size(), 16);
    assert!(mem.in_pmem(0x10f, 1));
    assert!(!mem.in_pmem(0x10f, 2));
}

#[test]
fn narrow_write_touches_only_its_bytes() {
    let mut mem = Memory::new(0, 8);
    mem.paddr_write(0, 8, u64::MAX).unwrap();
    mem.paddr_write(2, 1, 0).unwrap();
    assert_eq!(mem.paddr_read(0, 8).unwrap(), 0xFFFF_FFFF_FF00_FFFF);
}

#[rstest]
#[case(0x0ff, 1)]
#[case(0x10f, 2)]
#[case(0x110, 1)]
#[case(u64::MAX, 8)]
fn out_of_range_access_is_rejected(#[case] addr: u64, #[case] len: usize) {
    let mem = Memory::new(0x100, 16);
    assert!(!mem.in_pmem(addr, len));
    let err = mem.paddr_read(addr, len).unwrap_err();
    assert!(matches!(err, SimError::AddressOutOfBounds { base: 0x100, end: 0x10f, .. }));
}

#[rstest]
#[case(0)]
#[case(3)]
#[case(16)]
fn odd_widths_are_rejected(#[case] len: usize) {
    let mem = Memory::new(0, 32);
    assert!(matches!(
        mem.paddr_read(0, len).unwrap_err(),
        SimError::InvalidAccessSize(l) if l == len
    ));
}

#[test]
fn last_byte_is_addressable() {
    let mem = Memory::new(0x100, 16);
    assert!(mem.in_pmem(0x10f, 1));
    assert_eq!(mem.paddr_read(0x10f, 1).unwrap(), 0);
}
