//! # Decode Tests
//!
//! Encoding lookup over the full RV64 and RV32 tables.
//!
//! # Coverage Matrix
//!
//! - Base:  U/J, I, S, B, R formats, FENCE, SYSTEM, RV64 word forms
//! - Extensions: M, A, F, D, Zicsr, Zifencei, privileged, C (all quadrants), Zba, Zbb, Zbc, Zbs
//! - Rules: most-specific match, XLEN filtering, sentinel on miss

use std::sync::LazyLock;

use proptest::prelude::*;
use rstest::rstest;
use rvsim_isa::config::Xlen;
use rvsim_isa::isa::instruction::is_compressed_inst;
use rvsim_isa::{InstEntry, InstId, InstTable};

use crate::common::{b_type, i_type, r_type, s_type, table};

static RV64: LazyLock<InstTable> = LazyLock::new(|| table(Xlen::Rv64));
static RV32: LazyLock<InstTable> = LazyLock::new(|| table(Xlen::Rv32));

#[rstest]
// RV32I / RV64I
#[case::lui(0x0000_10B7, InstId::Lui)]
#[case::auipc(0x0000_1097, InstId::Auipc)]
#[case::jal(0x0080_00EF, InstId::Jal)]
#[case::jalr(i_type(0x67, 0, 0, 1, 0), InstId::Jalr)]
#[case::beq(b_type(0x63, 0, 1, 2, 8), InstId::Beq)]
#[case::bgeu(b_type(0x63, 7, 1, 2, -4), InstId::Bgeu)]
#[case::lb(i_type(0x03, 1, 0, 2, 8), InstId::Lb)]
#[case::lwu(i_type(0x03, 1, 6, 2, 0), InstId::Lwu)]
#[case::ld(i_type(0x03, 1, 3, 2, -8), InstId::Ld)]
#[case::sb(s_type(0x23, 0, 2, 1, -1), InstId::Sb)]
#[case::sd(s_type(0x23, 3, 2, 1, 16), InstId::Sd)]
#[case::addi(i_type(0x13, 1, 0, 2, 5), InstId::Addi)]
#[case::nop(0x0000_0013, InstId::Addi)]
#[case::sltiu(i_type(0x13, 1, 3, 2, 1), InstId::Sltiu)]
#[case::slli_shamt63(i_type(0x13, 1, 1, 2, 63), InstId::Slli)]
#[case::srli(i_type(0x13, 1, 5, 2, 12), InstId::Srli)]
#[case::srai(i_type(0x13, 1, 5, 2, 0x400 | 33), InstId::Srai)]
#[case::add(r_type(0x33, 1, 0, 2, 3, 0x00), InstId::Add)]
#[case::sub(r_type(0x33, 1, 0, 2, 3, 0x20), InstId::Sub)]
#[case::sra(r_type(0x33, 1, 5, 2, 3, 0x20), InstId::Sra)]
#[case::and(r_type(0x33, 1, 7, 2, 3, 0x00), InstId::And)]
#[case::fence(0x0FF0_000F, InstId::Fence)]
#[case::fence_tso(0x8330_000F, InstId::Fence)]
#[case::fence_nonzero_rd(0x0FF0_008F, InstId::Fence)]
#[case::fence_nonzero_rs1(0x0FF0_800F, InstId::Fence)]
#[case::ecall(0x0000_0073, InstId::Ecall)]
#[case::ebreak(0x0010_0073, InstId::Ebreak)]
#[case::addiw(i_type(0x1B, 1, 0, 2, -1), InstId::Addiw)]
#[case::sraiw(i_type(0x1B, 1, 5, 2, 0x400 | 3), InstId::Sraiw)]
#[case::subw(r_type(0x3B, 1, 0, 2, 3, 0x20), InstId::Subw)]
#[case::sraw(r_type(0x3B, 1, 5, 2, 3, 0x20), InstId::Sraw)]
// Privileged, Zifencei, Zicsr
#[case::mret(0x3020_0073, InstId::Mret)]
#[case::sret(0x1020_0073, InstId::Sret)]
#[case::wfi(0x1050_0073, InstId::Wfi)]
#[case::sfence_vma(r_type(0x73, 0, 0, 1, 2, 0x09), InstId::SfenceVma)]
#[case::fence_i(0x0000_100F, InstId::FenceI)]
#[case::csrrw(0x3001_10F3, InstId::Csrrw)]
#[case::csrrsi(i_type(0x73, 1, 6, 5, 0x300), InstId::Csrrsi)]
#[case::csrrci(i_type(0x73, 1, 7, 5, 0x300), InstId::Csrrci)]
// M
#[case::mul(r_type(0x33, 1, 0, 2, 3, 0x01), InstId::Mul)]
#[case::mulhu(r_type(0x33, 1, 3, 2, 3, 0x01), InstId::Mulhu)]
#[case::div(r_type(0x33, 1, 4, 2, 3, 0x01), InstId::Div)]
#[case::remu(r_type(0x33, 1, 7, 2, 3, 0x01), InstId::Remu)]
#[case::mulw(r_type(0x3B, 1, 0, 2, 3, 0x01), InstId::Mulw)]
#[case::remuw(r_type(0x3B, 1, 7, 2, 3, 0x01), InstId::Remuw)]
// A (funct7 = funct5 << 2 | aq << 1 | rl)
#[case::lr_w(0x1001_20AF, InstId::LrW)]
#[case::lr_w_aq(r_type(0x2F, 1, 2, 2, 0, 0x0A), InstId::LrW)]
#[case::sc_d(r_type(0x2F, 1, 3, 2, 3, 0x0C), InstId::ScD)]
#[case::amoadd_w(r_type(0x2F, 1, 2, 2, 3, 0x00), InstId::AmoaddW)]
#[case::amoswap_w_aqrl(r_type(0x2F, 1, 2, 2, 3, 0x07), InstId::AmoswapW)]
#[case::amomaxu_d(r_type(0x2F, 1, 3, 2, 3, 0x70), InstId::AmomaxuD)]
// F
#[case::flw(i_type(0x07, 1, 2, 2, 0), InstId::Flw)]
#[case::fsw(s_type(0x27, 2, 2, 1, 0), InstId::Fsw)]
#[case::fmadd_s(0x2031_00C3, InstId::FmaddS)]
#[case::fadd_s(r_type(0x53, 1, 0, 2, 3, 0x00), InstId::FaddS)]
#[case::fadd_s_dyn(r_type(0x53, 1, 7, 2, 3, 0x00), InstId::FaddS)]
#[case::fsqrt_s(r_type(0x53, 1, 0, 2, 0, 0x2C), InstId::FsqrtS)]
#[case::fcvt_w_s(0xC001_00D3, InstId::FcvtWS)]
#[case::fcvt_lu_s(r_type(0x53, 1, 0, 2, 3, 0x60), InstId::FcvtLuS)]
#[case::fmv_x_w(r_type(0x53, 1, 0, 2, 0, 0x70), InstId::FmvXW)]
#[case::fclass_s(r_type(0x53, 1, 1, 2, 0, 0x70), InstId::FclassS)]
#[case::feq_s(r_type(0x53, 1, 2, 2, 3, 0x50), InstId::FeqS)]
#[case::fmv_w_x(r_type(0x53, 1, 0, 2, 0, 0x78), InstId::FmvWX)]
// D
#[case::fld(i_type(0x07, 1, 3, 2, 0), InstId::Fld)]
#[case::fadd_d(r_type(0x53, 1, 0, 2, 3, 0x01), InstId::FaddD)]
#[case::fcvt_s_d(r_type(0x53, 1, 0, 2, 1, 0x20), InstId::FcvtSD)]
#[case::fcvt_d_s(r_type(0x53, 1, 0, 2, 0, 0x21), InstId::FcvtDS)]
#[case::fmv_x_d(r_type(0x53, 1, 0, 2, 0, 0x71), InstId::FmvXD)]
#[case::fnmadd_d(r_type(0x4F, 1, 0, 2, 3, 0x11), InstId::FnmaddD)]
// C, quadrant 0
#[case::c_addi4spn(0x0048, InstId::CAddi4spn)]
#[case::c_fld(0x2188, InstId::CFld)]
#[case::c_lw(0x4188, InstId::CLw)]
#[case::c_ld(0x6188, InstId::CLd)]
#[case::c_fsd(0xA188, InstId::CFsd)]
#[case::c_sw(0xC188, InstId::CSw)]
#[case::c_sd(0xE188, InstId::CSd)]
// C, quadrant 1
#[case::c_nop(0x0001, InstId::CAddi)]
#[case::c_addi(0x0505, InstId::CAddi)]
#[case::c_addiw(0x2505, InstId::CAddiw)]
#[case::c_li(0x4505, InstId::CLi)]
#[case::c_addi16sp(0x6141, InstId::CAddi16sp)]
#[case::c_lui(0x6505, InstId::CLui)]
#[case::c_srli(0x8005, InstId::CSrli)]
#[case::c_srai(0x8405, InstId::CSrai)]
#[case::c_andi(0x8805, InstId::CAndi)]
#[case::c_sub(0x8C05, InstId::CSub)]
#[case::c_xor(0x8C25, InstId::CXor)]
#[case::c_or(0x8C45, InstId::COr)]
#[case::c_and(0x8C65, InstId::CAnd)]
#[case::c_subw(0x9C05, InstId::CSubw)]
#[case::c_addw(0x9C25, InstId::CAddw)]
#[case::c_j(0xA001, InstId::CJ)]
#[case::c_beqz(0xC101, InstId::CBeqz)]
#[case::c_bnez(0xE101, InstId::CBnez)]
// C, quadrant 2
#[case::c_slli(0x0506, InstId::CSlli)]
#[case::c_fldsp(0x2502, InstId::CFldsp)]
#[case::c_lwsp(0x4502, InstId::CLwsp)]
#[case::c_ldsp(0x6502, InstId::CLdsp)]
#[case::c_jr(0x8082, InstId::CJr)]
#[case::c_mv(0x852E, InstId::CMv)]
#[case::c_ebreak(0x9002, InstId::CEbreak)]
#[case::c_jalr(0x9082, InstId::CJalr)]
#[case::c_add(0x952E, InstId::CAdd)]
#[case::c_fsdsp(0xA02A, InstId::CFsdsp)]
#[case::c_swsp(0xC02A, InstId::CSwsp)]
#[case::c_sdsp(0xE02A, InstId::CSdsp)]
// Zba
#[case::sh1add(r_type(0x33, 1, 2, 2, 3, 0x10), InstId::Sh1add)]
#[case::sh3add(r_type(0x33, 1, 6, 2, 3, 0x10), InstId::Sh3add)]
#[case::add_uw(r_type(0x3B, 1, 0, 2, 3, 0x04), InstId::AddUw)]
#[case::sh2add_uw(r_type(0x3B, 1, 4, 2, 3, 0x10), InstId::Sh2addUw)]
#[case::slli_uw(i_type(0x1B, 1, 1, 2, (0x02 << 6) | 40), InstId::SlliUw)]
// Zbb
#[case::andn(r_type(0x33, 1, 7, 2, 3, 0x20), InstId::Andn)]
#[case::xnor(r_type(0x33, 1, 4, 2, 3, 0x20), InstId::Xnor)]
#[case::clz(0x6001_1093, InstId::Clz)]
#[case::cpopw(i_type(0x1B, 1, 1, 2, 0x602), InstId::Cpopw)]
#[case::max(r_type(0x33, 1, 6, 2, 3, 0x05), InstId::Max)]
#[case::minu(r_type(0x33, 1, 5, 2, 3, 0x05), InstId::Minu)]
#[case::sext_h(i_type(0x13, 1, 1, 2, 0x605), InstId::SextH)]
#[case::rol(r_type(0x33, 1, 1, 2, 3, 0x30), InstId::Rol)]
#[case::rori(i_type(0x13, 1, 5, 2, (0x18 << 6) | 35), InstId::Rori)]
#[case::rorw(r_type(0x3B, 1, 5, 2, 3, 0x30), InstId::Rorw)]
#[case::roriw(i_type(0x1B, 1, 5, 2, 0x600 | 7), InstId::Roriw)]
#[case::orc_b(i_type(0x13, 1, 5, 2, 0x287), InstId::OrcB)]
// Zbc
#[case::clmul(r_type(0x33, 1, 1, 2, 3, 0x05), InstId::Clmul)]
#[case::clmulh(r_type(0x33, 1, 3, 2, 3, 0x05), InstId::Clmulh)]
// Zbs
#[case::bclr(r_type(0x33, 1, 1, 2, 3, 0x24), InstId::Bclr)]
#[case::bext(r_type(0x33, 1, 5, 2, 3, 0x24), InstId::Bext)]
#[case::bexti(i_type(0x13, 1, 5, 2, (0x12 << 6) | 40), InstId::Bexti)]
#[case::binvi(i_type(0x13, 1, 1, 2, (0x1A << 6) | 3), InstId::Binvi)]
#[case::bset(r_type(0x33, 1, 1, 2, 3, 0x14), InstId::Bset)]
#[case::bseti(i_type(0x13, 1, 1, 2, (0x0A << 6) | 5), InstId::Bseti)]
fn test_decode_rv64(#[case] word: u32, #[case] expected: InstId) {
    assert_eq!(RV64.decode(word).inst_id(), expected);
}

#[rstest]
#[case::c_jal(0x2505, InstId::CJal)]
#[case::c_flw(0x6188, InstId::CFlw)]
#[case::zext_h(r_type(0x33, 1, 4, 2, 0, 0x04), InstId::ZextHRv32)]
#[case::add(r_type(0x33, 1, 0, 2, 3, 0x00), InstId::Add)]
#[case::lw(i_type(0x03, 1, 2, 2, 0), InstId::Lw)]
#[case::fence_tso(0x8330_000F, InstId::Fence)]
#[case::slli_shamt31(i_type(0x13, 1, 1, 2, 31), InstId::Slli)]
#[case::srai_shamt31(i_type(0x13, 1, 5, 2, 0x400 | 31), InstId::Srai)]
#[case::rori_shamt31(i_type(0x13, 1, 5, 2, (0x18 << 6) | 31), InstId::Rori)]
#[case::bseti_shamt31(i_type(0x13, 1, 1, 2, (0x0A << 6) | 31), InstId::Bseti)]
fn test_decode_rv32(#[case] word: u32, #[case] expected: InstId) {
    assert_eq!(RV32.decode(word).inst_id(), expected);
}

#[rstest]
#[case::ld(i_type(0x03, 1, 3, 2, 0))]
#[case::lwu(i_type(0x03, 1, 6, 2, 0))]
#[case::addiw(i_type(0x1B, 1, 0, 2, 1))]
#[case::mulw(r_type(0x3B, 1, 0, 2, 3, 0x01))]
#[case::lr_d(r_type(0x2F, 1, 3, 2, 0, 0x08))]
#[case::fcvt_l_s(r_type(0x53, 1, 0, 2, 2, 0x60))]
#[case::c_subw(0x9C05)]
fn test_rv64_only_forms_are_illegal_in_rv32(#[case] word: u32) {
    assert!(RV32.is_illegal(RV32.decode(word)));
}

#[rstest]
#[case::slli(i_type(0x13, 1, 1, 2, 32), InstId::Slli)]
#[case::srli(i_type(0x13, 1, 5, 2, 63), InstId::Srli)]
#[case::srai(i_type(0x13, 1, 5, 2, 0x400 | 33), InstId::Srai)]
#[case::rori(i_type(0x13, 1, 5, 2, (0x18 << 6) | 35), InstId::Rori)]
#[case::bclri(i_type(0x13, 1, 1, 2, (0x12 << 6) | 33), InstId::Bclri)]
#[case::bexti(i_type(0x13, 1, 5, 2, (0x12 << 6) | 40), InstId::Bexti)]
#[case::binvi(i_type(0x13, 1, 1, 2, (0x1A << 6) | 63), InstId::Binvi)]
#[case::bseti(i_type(0x13, 1, 1, 2, (0x0A << 6) | 32), InstId::Bseti)]
fn test_shamt5_set_is_illegal_only_in_rv32(#[case] word: u32, #[case] rv64: InstId) {
    assert!(RV32.is_illegal(RV32.decode(word)));
    assert_eq!(RV64.decode(word).inst_id(), rv64);
}

#[rstest]
// c.jr (rs2 = 0) over c.mv
#[case::c_jr_over_c_mv(0x8082, InstId::CJr)]
// c.jalr (rs2 = 0) over c.add
#[case::c_jalr_over_c_add(0x9082, InstId::CJalr)]
// c.ebreak (rs1 = rs2 = 0) over c.jalr and c.add
#[case::c_ebreak_over_c_jalr(0x9002, InstId::CEbreak)]
// c.addi16sp (rd = sp) over c.lui
#[case::c_addi16sp_over_c_lui(0x6141, InstId::CAddi16sp)]
fn test_most_specific_match_wins(#[case] word: u32, #[case] expected: InstId) {
    assert_eq!(RV64.decode(word).inst_id(), expected);
}

#[rstest]
#[case::zero_parcel(0x0000_0000)]
#[case::zero_parcel_upper_garbage(0xDEAD_0000)]
#[case::all_ones(0xFFFF_FFFF)]
#[case::unused_major_opcode(0x0000_007F)]
#[case::load_funct3_7(i_type(0x03, 1, 7, 2, 0))]
#[case::op_funct7_7f(r_type(0x33, 1, 0, 2, 3, 0x7F))]
#[case::q0_funct3_4(0x8000)]
#[case::c_reserved_arith(0x9C41)]
fn test_unmatched_words_are_illegal(#[case] word: u32) {
    let entry = RV64.decode(word);
    assert!(RV64.is_illegal(entry));
    assert_eq!(entry.inst_id(), InstId::Illegal);
    assert_eq!(entry.name(), InstEntry::ILLEGAL_NAME);
}

#[test]
fn test_compressed_upper_half_is_ignored() {
    assert_eq!(RV64.decode(0xDEAD_0505).inst_id(), InstId::CAddi);
}

#[test]
fn test_every_record_decodes_its_own_code() {
    for table in [&*RV32, &*RV64] {
        for entry in table {
            if !entry.xlen_support().supports(table.xlen()) {
                continue;
            }
            if entry.is_compressed() && entry.code() & 0xFFFF == 0 {
                continue;
            }
            let decoded = table.decode(entry.code());
            assert!(decoded.matches(entry.code()), "{} -> {}", entry.name(), decoded.name());
            assert!(
                decoded.code_mask().count_ones() >= entry.code_mask().count_ones(),
                "{} shadowed by less specific {}",
                entry.name(),
                decoded.name()
            );
        }
    }
}

/// Returns the records of `table` that could answer for `word`.
fn candidates(table: &InstTable, word: u32) -> impl Iterator<Item = &InstEntry> {
    let compressed = is_compressed_inst(word);
    table.iter().filter(move |entry| {
        entry.xlen_support().supports(table.xlen())
            && entry.is_compressed() == compressed
            && entry.matches_xlen(word, table.xlen())
    })
}

proptest! {
    #[test]
    fn prop_decode_agrees_with_linear_scan(word in any::<u32>()) {
        for table in [&*RV32, &*RV64] {
            let decoded = table.decode(word);
            let best = candidates(table, word).map(|e| e.code_mask().count_ones()).max();

            if is_compressed_inst(word) && word & 0xFFFF == 0 {
                prop_assert!(table.is_illegal(decoded));
                continue;
            }
            match best {
                None => prop_assert!(table.is_illegal(decoded)),
                Some(bits) => {
                    prop_assert!(!table.is_illegal(decoded));
                    prop_assert!(decoded.matches(word));
                    prop_assert!(decoded.xlen_support().supports(table.xlen()));
                    prop_assert_eq!(decoded.is_compressed(), is_compressed_inst(word));
                    prop_assert_eq!(decoded.code_mask().count_ones(), bits);
                }
            }
        }
    }

    #[test]
    fn prop_decoded_size_matches_word(word in any::<u32>()) {
        let decoded = RV64.decode(word);
        if !RV64.is_illegal(decoded) {
            prop_assert_eq!(decoded.size(), rvsim_isa::isa::instruction::instruction_size(word));
        }
    }
}
