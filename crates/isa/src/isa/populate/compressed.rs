//! C extension: 16-bit compressed instructions.
//!
//! Every record fixes the quadrant (bits 1-0) and funct3 (bits 15-13); the
//! more specific forms fix further bits on top. Encodings that mean different
//! instructions in RV32 and RV64 are registered once per register width.
//!
//! Floating-point loads and stores are only registered when the matching
//! floating-point extension is enabled.

use crate::config::{Extension, TableConfig};
use crate::isa::entry::OperandMode::{Read, ReadWrite, Write};
use crate::isa::entry::OperandType::{FpReg, Imm, IntReg};
use crate::isa::entry::{InstEntryBuilder, InstType, OperandMode, OperandType, XlenSupport};
use crate::isa::inst_id::InstId;
use crate::isa::opcodes::{
    C_FUNCT3_FORMAT, C_RD_FIELD, C_RD_PRIME_FIELD, C_RS1_PRIME_FIELD, C_RS2_FIELD,
};

/// CI-format immediate (bits 12 and 6-2).
const CI_IMM: u32 = 0x107C;
/// CL/CS-format offset (bits 12-10 and 6-5).
const CLS_IMM: u32 = 0x1C60;
/// CSS-format offset (bits 12-7).
const CSS_IMM: u32 = 0x1F80;
/// CIW-format immediate (bits 12-5).
const CIW_IMM: u32 = 0x1FE0;
/// CJ-format jump target (bits 12-2).
const CJ_IMM: u32 = 0x1FFC;
/// CB-format branch offset (bits 12-10 and 6-2).
const CB_IMM: u32 = 0x1C7C;

/// C.ADDI16SP fixes rd to sp.
const ADDI16SP_FORMAT: u32 = 0xEF83;
/// Shifts and ANDI also fix funct2 (bits 11-10).
const CB_ALU_FORMAT: u32 = 0xEC03;
/// Register-register arithmetic fixes funct6 and funct2.
const CA_FORMAT: u32 = 0xFC63;
/// Jumps through a register fix funct4 and rs2 = 0.
const CR_JUMP_FORMAT: u32 = 0xF07F;
/// Moves and adds fix funct4.
const CR_FORMAT: u32 = 0xF003;
/// Every bit of the parcel fixed.
const PARCEL: u32 = 0xFFFF;

fn c(name: &str, id: InstId, code: u32, mask: u32, inst_type: InstType) -> InstEntryBuilder {
    InstEntryBuilder::new(name, id, code, mask, inst_type).extension(Extension::C)
}

/// CL format: `load rd', offset(rs1')`.
fn cl(name: &str, id: InstId, code: u32, rd_type: OperandType, size: u32) -> InstEntryBuilder {
    c(name, id, code, C_FUNCT3_FORMAT, InstType::Load)
        .operand(rd_type, Write, C_RD_PRIME_FIELD)
        .operand(IntReg, Read, C_RS1_PRIME_FIELD)
        .operand(Imm, Read, CLS_IMM)
        .load_size(size)
}

/// CS format: `store rs2', offset(rs1')`.
fn cs(name: &str, id: InstId, code: u32, rs2_type: OperandType, size: u32) -> InstEntryBuilder {
    c(name, id, code, C_FUNCT3_FORMAT, InstType::Store)
        .operand(rs2_type, Read, C_RD_PRIME_FIELD)
        .operand(IntReg, Read, C_RS1_PRIME_FIELD)
        .operand(Imm, Read, CLS_IMM)
        .store_size(size)
}

/// CI-format stack-relative load: `load rd, offset(sp)`.
fn ci_sp(name: &str, id: InstId, code: u32, rd_type: OperandType, size: u32) -> InstEntryBuilder {
    c(name, id, code, C_FUNCT3_FORMAT, InstType::Load)
        .operand(rd_type, Write, C_RD_FIELD)
        .operand(Imm, Read, CI_IMM)
        .load_size(size)
}

/// CSS format: `store rs2, offset(sp)`.
fn css(name: &str, id: InstId, code: u32, rs2_type: OperandType, size: u32) -> InstEntryBuilder {
    c(name, id, code, C_FUNCT3_FORMAT, InstType::Store)
        .operand(rs2_type, Read, C_RS2_FIELD)
        .operand(Imm, Read, CSS_IMM)
        .store_size(size)
}

/// CI format: `inst rd, imm` with rd read (`ReadWrite`) or not (`Write`).
fn ci(name: &str, id: InstId, code: u32, rd_mode: OperandMode) -> InstEntryBuilder {
    c(name, id, code, C_FUNCT3_FORMAT, InstType::Int)
        .operand(IntReg, rd_mode, C_RD_FIELD)
        .operand(Imm, Read, CI_IMM)
}

/// CB-format ALU: `inst rd', imm`.
fn cb_alu(name: &str, id: InstId, code: u32) -> InstEntryBuilder {
    c(name, id, code, CB_ALU_FORMAT, InstType::Int)
        .operand(IntReg, ReadWrite, C_RS1_PRIME_FIELD)
        .operand(Imm, Read, CI_IMM)
}

/// CA format: `inst rd', rs2'`.
fn ca(name: &str, id: InstId, code: u32) -> InstEntryBuilder {
    c(name, id, code, CA_FORMAT, InstType::Int)
        .operand(IntReg, ReadWrite, C_RS1_PRIME_FIELD)
        .operand(IntReg, Read, C_RD_PRIME_FIELD)
}

/// CB-format branch: `branch rs1', offset`.
fn cb_branch(name: &str, id: InstId, code: u32) -> InstEntryBuilder {
    c(name, id, code, C_FUNCT3_FORMAT, InstType::Branch)
        .operand(IntReg, Read, C_RS1_PRIME_FIELD)
        .operand(Imm, Read, CB_IMM)
        .conditional_branch()
}

/// CJ format: `jump offset`.
fn cj(name: &str, id: InstId, code: u32) -> InstEntryBuilder {
    c(name, id, code, C_FUNCT3_FORMAT, InstType::Branch).operand(Imm, Read, CJ_IMM)
}

/// CR-format jump: `jump rs1`.
fn cr_jump(name: &str, id: InstId, code: u32) -> InstEntryBuilder {
    c(name, id, code, CR_JUMP_FORMAT, InstType::Branch)
        .operand(IntReg, Read, C_RD_FIELD)
        .branch_to_register()
}

/// CR format: `inst rd, rs2`.
fn cr(name: &str, id: InstId, code: u32, rd_mode: OperandMode) -> InstEntryBuilder {
    c(name, id, code, CR_FORMAT, InstType::Int)
        .operand(IntReg, rd_mode, C_RD_FIELD)
        .operand(IntReg, Read, C_RS2_FIELD)
}

fn rv32(builder: InstEntryBuilder) -> InstEntryBuilder {
    builder.xlen(XlenSupport::Rv32Only)
}

fn rv64(builder: InstEntryBuilder) -> InstEntryBuilder {
    builder.xlen(XlenSupport::Rv64Only)
}

pub(super) fn builders(config: &TableConfig) -> Vec<InstEntryBuilder> {
    use InstId::*;

    let single = config.is_enabled(Extension::F);
    let double = config.is_enabled(Extension::D);

    let quadrant0 = [
        Some(
            c("c.addi4spn", CAddi4spn, 0x0000, C_FUNCT3_FORMAT, InstType::Int)
                .operand(IntReg, Write, C_RD_PRIME_FIELD)
                .operand(Imm, Read, CIW_IMM),
        ),
        double.then(|| cl("c.fld", CFld, 0x2000, FpReg, 8)),
        Some(cl("c.lw", CLw, 0x4000, IntReg, 4)),
        single.then(|| rv32(cl("c.flw", CFlw, 0x6000, FpReg, 4))),
        Some(rv64(cl("c.ld", CLd, 0x6000, IntReg, 8))),
        double.then(|| cs("c.fsd", CFsd, 0xA000, FpReg, 8)),
        Some(cs("c.sw", CSw, 0xC000, IntReg, 4)),
        single.then(|| rv32(cs("c.fsw", CFsw, 0xE000, FpReg, 4))),
        Some(rv64(cs("c.sd", CSd, 0xE000, IntReg, 8))),
    ];

    let quadrant1 = [
        Some(ci("c.addi", CAddi, 0x0001, ReadWrite)),
        Some(rv32(cj("c.jal", CJal, 0x2001))),
        Some(rv64(ci("c.addiw", CAddiw, 0x2001, ReadWrite))),
        Some(ci("c.li", CLi, 0x4001, Write)),
        Some(
            c("c.addi16sp", CAddi16sp, 0x6101, ADDI16SP_FORMAT, InstType::Int)
                .operand(Imm, Read, CI_IMM),
        ),
        Some(ci("c.lui", CLui, 0x6001, Write)),
        Some(cb_alu("c.srli", CSrli, 0x8001)),
        Some(cb_alu("c.srai", CSrai, 0x8401)),
        Some(cb_alu("c.andi", CAndi, 0x8801)),
        Some(ca("c.sub", CSub, 0x8C01)),
        Some(ca("c.xor", CXor, 0x8C21)),
        Some(ca("c.or", COr, 0x8C41)),
        Some(ca("c.and", CAnd, 0x8C61)),
        Some(rv64(ca("c.subw", CSubw, 0x9C01))),
        Some(rv64(ca("c.addw", CAddw, 0x9C21))),
        Some(cj("c.j", CJ, 0xA001)),
        Some(cb_branch("c.beqz", CBeqz, 0xC001)),
        Some(cb_branch("c.bnez", CBnez, 0xE001)),
    ];

    let quadrant2 = [
        Some(ci("c.slli", CSlli, 0x0002, ReadWrite)),
        double.then(|| ci_sp("c.fldsp", CFldsp, 0x2002, FpReg, 8)),
        Some(ci_sp("c.lwsp", CLwsp, 0x4002, IntReg, 4)),
        single.then(|| rv32(ci_sp("c.flwsp", CFlwsp, 0x6002, FpReg, 4))),
        Some(rv64(ci_sp("c.ldsp", CLdsp, 0x6002, IntReg, 8))),
        Some(cr_jump("c.jr", CJr, 0x8002)),
        Some(cr("c.mv", CMv, 0x8002, Write)),
        Some(c("c.ebreak", CEbreak, 0x9002, PARCEL, InstType::Int)),
        Some(cr_jump("c.jalr", CJalr, 0x9002)),
        Some(cr("c.add", CAdd, 0x9002, ReadWrite)),
        double.then(|| css("c.fsdsp", CFsdsp, 0xA002, FpReg, 8)),
        Some(css("c.swsp", CSwsp, 0xC002, IntReg, 4)),
        single.then(|| rv32(css("c.fswsp", CFswsp, 0xE002, FpReg, 4))),
        Some(rv64(css("c.sdsp", CSdsp, 0xE002, IntReg, 8))),
    ];

    quadrant0
        .into_iter()
        .chain(quadrant1)
        .chain(quadrant2)
        .flatten()
        .collect()
}
