//! F and D extensions: single- and double-precision floating point.
//!
//! OP-FP instructions are keyed by funct7 (operation and format) and, where the
//! rs2 field does not name a register, by rs2 as well. The rounding mode in
//! funct3 is left free unless funct3 selects the operation.

use super::{load, store};
use crate::config::Extension;
use crate::isa::entry::OperandType::{FpReg, IntReg};
use crate::isa::entry::{InstEntryBuilder, InstType, OperandMode, OperandType, XlenSupport};
use crate::isa::inst_id::InstId;
use crate::isa::opcodes::{
    OP_FMADD, OP_FMSUB, OP_FNMADD, OP_FNMSUB, OP_FP, OP_LOAD_FP, OP_STORE_FP, RD_FIELD, RS1_FIELD,
    RS2_FIELD, RS3_FIELD,
};

/// Opcode and fmt (fused multiply-add).
const FUSED_FORMAT: u32 = 0x0600_007F;
/// Opcode and funct7 (rounding-mode arithmetic).
const ROUNDED_FORMAT: u32 = 0xFE00_007F;
/// Opcode, funct7 and funct3.
const SELECTED_FORMAT: u32 = 0xFE00_707F;
/// Opcode, funct7 and rs2 (rounding-mode conversions).
const CONVERT_FORMAT: u32 = 0xFFF0_007F;
/// Opcode, funct7, rs2 and funct3 (moves and classify).
const MOVE_FORMAT: u32 = 0xFFF0_707F;

const SINGLE: u32 = 0b00;
const DOUBLE: u32 = 0b01;

/// `fmadd rd, rs1, rs2, rs3` and its three siblings.
fn fused(name: &str, id: InstId, opcode: u32, fmt: u32) -> InstEntryBuilder {
    InstEntryBuilder::new(name, id, (fmt << 25) | opcode, FUSED_FORMAT, InstType::Fp)
        .operand(FpReg, OperandMode::Write, RD_FIELD)
        .operand(FpReg, OperandMode::Read, RS1_FIELD)
        .operand(FpReg, OperandMode::Read, RS2_FIELD)
        .operand(FpReg, OperandMode::Read, RS3_FIELD)
}

/// `fop rd, rs1, rs2` with the rounding mode free.
fn rounded(name: &str, id: InstId, funct7: u32) -> InstEntryBuilder {
    InstEntryBuilder::new(name, id, (funct7 << 25) | OP_FP, ROUNDED_FORMAT, InstType::Fp)
        .operand(FpReg, OperandMode::Write, RD_FIELD)
        .operand(FpReg, OperandMode::Read, RS1_FIELD)
        .operand(FpReg, OperandMode::Read, RS2_FIELD)
}

/// `fop rd, rs1, rs2` where funct3 picks the operation; `rd_type` is `IntReg`
/// for comparisons.
fn selected(
    name: &str,
    id: InstId,
    funct7: u32,
    funct3: u32,
    rd_type: OperandType,
) -> InstEntryBuilder {
    let code = (funct7 << 25) | (funct3 << 12) | OP_FP;
    InstEntryBuilder::new(name, id, code, SELECTED_FORMAT, InstType::Fp)
        .operand(rd_type, OperandMode::Write, RD_FIELD)
        .operand(FpReg, OperandMode::Read, RS1_FIELD)
        .operand(FpReg, OperandMode::Read, RS2_FIELD)
}

/// `fcvt rd, rs1` (and `fsqrt`), with the rounding mode free.
fn convert(
    name: &str,
    id: InstId,
    funct7: u32,
    rs2: u32,
    rd_type: OperandType,
    rs1_type: OperandType,
) -> InstEntryBuilder {
    let code = (funct7 << 25) | (rs2 << 20) | OP_FP;
    InstEntryBuilder::new(name, id, code, CONVERT_FORMAT, InstType::Fp)
        .operand(rd_type, OperandMode::Write, RD_FIELD)
        .operand(rs1_type, OperandMode::Read, RS1_FIELD)
}

/// `fmv rd, rs1` and `fclass rd, rs1`.
fn moved(
    name: &str,
    id: InstId,
    funct7: u32,
    funct3: u32,
    rd_type: OperandType,
    rs1_type: OperandType,
) -> InstEntryBuilder {
    let code = (funct7 << 25) | (funct3 << 12) | OP_FP;
    InstEntryBuilder::new(name, id, code, MOVE_FORMAT, InstType::Fp)
        .operand(rd_type, OperandMode::Write, RD_FIELD)
        .operand(rs1_type, OperandMode::Read, RS1_FIELD)
}

fn rv64(builder: InstEntryBuilder) -> InstEntryBuilder {
    builder.xlen(XlenSupport::Rv64Only)
}

/// F extension records.
pub(super) fn single_builders() -> Vec<InstEntryBuilder> {
    use InstId::*;

    vec![
        load("flw", Flw, OP_LOAD_FP, 0b010, FpReg, 4),
        store("fsw", Fsw, OP_STORE_FP, 0b010, FpReg, 4),
        fused("fmadd.s", FmaddS, OP_FMADD, SINGLE),
        fused("fmsub.s", FmsubS, OP_FMSUB, SINGLE),
        fused("fnmsub.s", FnmsubS, OP_FNMSUB, SINGLE),
        fused("fnmadd.s", FnmaddS, OP_FNMADD, SINGLE),
        rounded("fadd.s", FaddS, 0b0000000),
        rounded("fsub.s", FsubS, 0b0000100),
        rounded("fmul.s", FmulS, 0b0001000),
        rounded("fdiv.s", FdivS, 0b0001100),
        convert("fsqrt.s", FsqrtS, 0b0101100, 0, FpReg, FpReg),
        selected("fsgnj.s", FsgnjS, 0b0010000, 0b000, FpReg),
        selected("fsgnjn.s", FsgnjnS, 0b0010000, 0b001, FpReg),
        selected("fsgnjx.s", FsgnjxS, 0b0010000, 0b010, FpReg),
        selected("fmin.s", FminS, 0b0010100, 0b000, FpReg),
        selected("fmax.s", FmaxS, 0b0010100, 0b001, FpReg),
        convert("fcvt.w.s", FcvtWS, 0b1100000, 0, IntReg, FpReg),
        convert("fcvt.wu.s", FcvtWuS, 0b1100000, 1, IntReg, FpReg).unsigned(),
        moved("fmv.x.w", FmvXW, 0b1110000, 0b000, IntReg, FpReg),
        selected("feq.s", FeqS, 0b1010000, 0b010, IntReg),
        selected("flt.s", FltS, 0b1010000, 0b001, IntReg),
        selected("fle.s", FleS, 0b1010000, 0b000, IntReg),
        moved("fclass.s", FclassS, 0b1110000, 0b001, IntReg, FpReg),
        convert("fcvt.s.w", FcvtSW, 0b1101000, 0, FpReg, IntReg),
        convert("fcvt.s.wu", FcvtSWu, 0b1101000, 1, FpReg, IntReg).unsigned(),
        moved("fmv.w.x", FmvWX, 0b1111000, 0b000, FpReg, IntReg),
        rv64(convert("fcvt.l.s", FcvtLS, 0b1100000, 2, IntReg, FpReg)),
        rv64(convert("fcvt.lu.s", FcvtLuS, 0b1100000, 3, IntReg, FpReg).unsigned()),
        rv64(convert("fcvt.s.l", FcvtSL, 0b1101000, 2, FpReg, IntReg)),
        rv64(convert("fcvt.s.lu", FcvtSLu, 0b1101000, 3, FpReg, IntReg).unsigned()),
    ]
    .into_iter()
    .map(|builder| builder.extension(Extension::F))
    .collect()
}

/// D extension records.
pub(super) fn double_builders() -> Vec<InstEntryBuilder> {
    use InstId::*;

    vec![
        load("fld", Fld, OP_LOAD_FP, 0b011, FpReg, 8),
        store("fsd", Fsd, OP_STORE_FP, 0b011, FpReg, 8),
        fused("fmadd.d", FmaddD, OP_FMADD, DOUBLE),
        fused("fmsub.d", FmsubD, OP_FMSUB, DOUBLE),
        fused("fnmsub.d", FnmsubD, OP_FNMSUB, DOUBLE),
        fused("fnmadd.d", FnmaddD, OP_FNMADD, DOUBLE),
        rounded("fadd.d", FaddD, 0b0000001),
        rounded("fsub.d", FsubD, 0b0000101),
        rounded("fmul.d", FmulD, 0b0001001),
        rounded("fdiv.d", FdivD, 0b0001101),
        convert("fsqrt.d", FsqrtD, 0b0101101, 0, FpReg, FpReg),
        selected("fsgnj.d", FsgnjD, 0b0010001, 0b000, FpReg),
        selected("fsgnjn.d", FsgnjnD, 0b0010001, 0b001, FpReg),
        selected("fsgnjx.d", FsgnjxD, 0b0010001, 0b010, FpReg),
        selected("fmin.d", FminD, 0b0010101, 0b000, FpReg),
        selected("fmax.d", FmaxD, 0b0010101, 0b001, FpReg),
        convert("fcvt.s.d", FcvtSD, 0b0100000, 1, FpReg, FpReg),
        convert("fcvt.d.s", FcvtDS, 0b0100001, 0, FpReg, FpReg),
        selected("feq.d", FeqD, 0b1010001, 0b010, IntReg),
        selected("flt.d", FltD, 0b1010001, 0b001, IntReg),
        selected("fle.d", FleD, 0b1010001, 0b000, IntReg),
        moved("fclass.d", FclassD, 0b1110001, 0b001, IntReg, FpReg),
        convert("fcvt.w.d", FcvtWD, 0b1100001, 0, IntReg, FpReg),
        convert("fcvt.wu.d", FcvtWuD, 0b1100001, 1, IntReg, FpReg).unsigned(),
        convert("fcvt.d.w", FcvtDW, 0b1101001, 0, FpReg, IntReg),
        convert("fcvt.d.wu", FcvtDWu, 0b1101001, 1, FpReg, IntReg).unsigned(),
        rv64(convert("fcvt.l.d", FcvtLD, 0b1100001, 2, IntReg, FpReg)),
        rv64(convert("fcvt.lu.d", FcvtLuD, 0b1100001, 3, IntReg, FpReg).unsigned()),
        rv64(moved("fmv.x.d", FmvXD, 0b1110001, 0b000, IntReg, FpReg)),
        rv64(convert("fcvt.d.l", FcvtDL, 0b1101001, 2, FpReg, IntReg)),
        rv64(convert("fcvt.d.lu", FcvtDLu, 0b1101001, 3, FpReg, IntReg).unsigned()),
        rv64(moved("fmv.d.x", FmvDX, 0b1111001, 0b000, FpReg, IntReg)),
    ]
    .into_iter()
    .map(|builder| builder.extension(Extension::D))
    .collect()
}
