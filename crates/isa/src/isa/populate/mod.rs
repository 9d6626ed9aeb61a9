//! Instruction table population.
//!
//! Each submodule returns the record builders of one instruction family in
//! registration order. Registration order matters twice: it is the table's
//! storage order, and it breaks ties when a mnemonic or an encoding is shared.
//!
//! The format helpers below build the common operand shapes (R, I, S, B, U, J)
//! from a major opcode and its function codes, the way the ISA manual lays them out.

use crate::config::TableConfig;
use crate::isa::entry::{InstEntryBuilder, InstType, OperandMode, OperandType};
use crate::isa::inst_id::InstId;
use crate::isa::opcodes::{
    FUNCT3_FORMAT, FUNCT6_FORMAT, FUNCT7_FORMAT, I_IMM_FIELD, OPCODE_ONLY, RD_FIELD, RS1_FIELD,
    RS2_FIELD, S_IMM_FIELD, SHAMT5_FIELD, SHAMT6_FIELD, U_IMM_FIELD, UNARY_FORMAT,
};

mod atomic;
mod base;
mod bitmanip;
mod compressed;
mod float;
mod mul;

/// `shamt[5]`: part of the shift amount in RV64, reserved in RV32.
const SHAMT_HIGH_BIT: u32 = SHAMT6_FIELD & !SHAMT5_FIELD;

/// Returns the builders of every enabled extension, in registration order.
pub(crate) fn builders(config: &TableConfig) -> Vec<InstEntryBuilder> {
    let mut builders = base::builders();
    builders.extend(mul::builders());
    builders.extend(atomic::builders());
    builders.extend(float::single_builders());
    builders.extend(float::double_builders());
    builders.extend(compressed::builders(config));
    builders.extend(bitmanip::builders());
    builders.retain(|builder| config.is_enabled(builder.extension_of()));
    builders
}

/// Places funct7, funct3 and the major opcode.
pub(super) const fn encode(opcode: u32, funct3: u32, funct7: u32) -> u32 {
    (funct7 << 25) | (funct3 << 12) | opcode
}

/// `inst rd, rs1, rs2` with integer registers.
pub(super) fn r_type(
    name: &str,
    id: InstId,
    opcode: u32,
    funct3: u32,
    funct7: u32,
    inst_type: InstType,
) -> InstEntryBuilder {
    InstEntryBuilder::new(name, id, encode(opcode, funct3, funct7), FUNCT7_FORMAT, inst_type)
        .operand(OperandType::IntReg, OperandMode::Write, RD_FIELD)
        .operand(OperandType::IntReg, OperandMode::Read, RS1_FIELD)
        .operand(OperandType::IntReg, OperandMode::Read, RS2_FIELD)
}

/// `inst rd, rs1` with a fixed rs2 field (count, extend, reverse).
pub(super) fn unary(
    name: &str,
    id: InstId,
    opcode: u32,
    funct3: u32,
    funct12: u32,
    inst_type: InstType,
) -> InstEntryBuilder {
    let code = (funct12 << 20) | (funct3 << 12) | opcode;
    InstEntryBuilder::new(name, id, code, UNARY_FORMAT, inst_type)
        .operand(OperandType::IntReg, OperandMode::Write, RD_FIELD)
        .operand(OperandType::IntReg, OperandMode::Read, RS1_FIELD)
}

/// `inst rd, rs1, imm12`.
pub(super) fn i_type(
    name: &str,
    id: InstId,
    opcode: u32,
    funct3: u32,
    inst_type: InstType,
) -> InstEntryBuilder {
    InstEntryBuilder::new(name, id, encode(opcode, funct3, 0), FUNCT3_FORMAT, inst_type)
        .operand(OperandType::IntReg, OperandMode::Write, RD_FIELD)
        .operand(OperandType::IntReg, OperandMode::Read, RS1_FIELD)
        .operand(OperandType::Imm, OperandMode::Read, I_IMM_FIELD)
}

/// `inst rd, rs1, shamt` where the shift amount occupies `shamt_field` and the
/// remaining upper bits are fixed to `funct7`.
///
/// The 6-bit form serves both widths; RV32 rejects it when `shamt[5]` is set.
pub(super) fn shift_imm(
    name: &str,
    id: InstId,
    opcode: u32,
    funct3: u32,
    funct7: u32,
    shamt_field: u32,
    inst_type: InstType,
) -> InstEntryBuilder {
    let (mask, reserved) = if shamt_field == SHAMT6_FIELD {
        (FUNCT6_FORMAT, SHAMT_HIGH_BIT)
    } else {
        (FUNCT7_FORMAT, 0)
    };
    InstEntryBuilder::new(name, id, encode(opcode, funct3, funct7), mask, inst_type)
        .operand(OperandType::IntReg, OperandMode::Write, RD_FIELD)
        .operand(OperandType::IntReg, OperandMode::Read, RS1_FIELD)
        .operand(OperandType::Imm, OperandMode::Read, shamt_field)
        .rv32_reserved(reserved)
}

/// `load rd, offset(rs1)` into a register of the given type.
pub(super) fn load(
    name: &str,
    id: InstId,
    opcode: u32,
    funct3: u32,
    rd_type: OperandType,
    size: u32,
) -> InstEntryBuilder {
    InstEntryBuilder::new(name, id, encode(opcode, funct3, 0), FUNCT3_FORMAT, InstType::Load)
        .operand(rd_type, OperandMode::Write, RD_FIELD)
        .operand(OperandType::IntReg, OperandMode::Read, RS1_FIELD)
        .operand(OperandType::Imm, OperandMode::Read, I_IMM_FIELD)
        .load_size(size)
}

/// `store rs2, offset(rs1)` from a register of the given type.
pub(super) fn store(
    name: &str,
    id: InstId,
    opcode: u32,
    funct3: u32,
    rs2_type: OperandType,
    size: u32,
) -> InstEntryBuilder {
    InstEntryBuilder::new(name, id, encode(opcode, funct3, 0), FUNCT3_FORMAT, InstType::Store)
        .operand(rs2_type, OperandMode::Read, RS2_FIELD)
        .operand(OperandType::IntReg, OperandMode::Read, RS1_FIELD)
        .operand(OperandType::Imm, OperandMode::Read, S_IMM_FIELD)
        .store_size(size)
}

/// `branch rs1, rs2, offset`.
pub(super) fn b_type(name: &str, id: InstId, opcode: u32, funct3: u32) -> InstEntryBuilder {
    InstEntryBuilder::new(name, id, encode(opcode, funct3, 0), FUNCT3_FORMAT, InstType::Branch)
        .operand(OperandType::IntReg, OperandMode::Read, RS1_FIELD)
        .operand(OperandType::IntReg, OperandMode::Read, RS2_FIELD)
        .operand(OperandType::Imm, OperandMode::Read, S_IMM_FIELD)
        .conditional_branch()
}

/// `inst rd, imm20` (U-type and J-type share the operand layout).
pub(super) fn u_type(name: &str, id: InstId, opcode: u32, inst_type: InstType) -> InstEntryBuilder {
    InstEntryBuilder::new(name, id, opcode, OPCODE_ONLY, inst_type)
        .operand(OperandType::IntReg, OperandMode::Write, RD_FIELD)
        .operand(OperandType::Imm, OperandMode::Read, U_IMM_FIELD)
}
