//! # Instruction Size Tests
//!
//! The size helpers depend only on the two lowest bits of a word.

use proptest::prelude::*;
use rstest::rstest;
use rvsim_isa::isa::instruction::{
    COMPRESSED_SIZE, FULL_SIZE, InstructionBits, instruction_size, is_compressed_inst,
    is_full_size_inst,
};

use crate::common::r_type;

#[rstest]
#[case::low_bits_11(0x0000_0003, true)]
#[case::low_bits_01(0x0000_0001, false)]
#[case::low_bits_10(0x0000_0002, false)]
#[case::zero(0x0000_0000, false)]
#[case::all_ones(0xFFFF_FFFF, true)]
#[case::add(0x0031_00B3, true)]
#[case::c_addi(0x0000_0505, false)]
fn test_full_size_classification(#[case] word: u32, #[case] full: bool) {
    assert_eq!(is_full_size_inst(word), full);
    assert_eq!(is_compressed_inst(word), !full);
    assert_eq!(instruction_size(word), if full { 4 } else { 2 });
}

#[test]
fn test_size_constants() {
    assert_eq!(FULL_SIZE, 4);
    assert_eq!(COMPRESSED_SIZE, 2);
}

#[test]
fn test_field_extraction() {
    // sub x5, x6, x7
    let word = r_type(0x33, 5, 0, 6, 7, 0x20);
    assert_eq!(word.opcode(), 0x33);
    assert_eq!(word.rd(), 5);
    assert_eq!(word.rs1(), 6);
    assert_eq!(word.rs2(), 7);
    assert_eq!(word.funct3(), 0);
    assert_eq!(word.funct7(), 0x20);
}

#[test]
fn test_fused_rs3_extraction() {
    // fmadd.s f1, f2, f3, f4
    let word = 0x2031_00C3_u32;
    assert_eq!(word.rs3(), 4);
    assert_eq!(word.rs2(), 3);
}

#[test]
fn test_csr_extraction() {
    // csrrw x1, mstatus, x2
    let word = 0x3001_10F3_u32;
    assert_eq!(word.csr(), 0x300);
    assert_eq!(word.funct3(), 1);
}

#[test]
fn test_compressed_group_extraction() {
    // c.jr ra
    let parcel = 0x8082_u32;
    assert_eq!(parcel.quadrant(), 2);
    assert_eq!(parcel.c_funct3(), 4);
}

proptest! {
    #[test]
    fn prop_size_is_two_or_four(word in any::<u32>()) {
        let size = instruction_size(word);
        prop_assert!(size == 2 || size == 4);
        prop_assert_eq!(size == 4, word & 0b11 == 0b11);
    }

    #[test]
    fn prop_compressed_is_negation_of_full(word in any::<u32>()) {
        prop_assert_eq!(is_compressed_inst(word), !is_full_size_inst(word));
    }

    #[test]
    fn prop_size_ignores_upper_bits(word in any::<u32>(), upper in any::<u32>()) {
        let mixed = (upper & !0b11) | (word & 0b11);
        prop_assert_eq!(instruction_size(mixed), instruction_size(word));
    }
}
