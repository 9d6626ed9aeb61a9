//! Base integer instructions (RV32I/RV64I), privileged instructions, Zifencei and Zicsr.

use super::{b_type, encode, i_type, load, r_type, shift_imm, store, u_type};
use crate::config::Extension;
use crate::isa::entry::{InstEntryBuilder, InstType, OperandMode, OperandType, XlenSupport};
use crate::isa::inst_id::InstId;
use crate::isa::opcodes::{
    ALL_BITS, CSR_FIELD, FENCE_PRED_FIELD, FENCE_SUCC_FIELD, FUNCT3_FORMAT, I_IMM_FIELD, OP_AUIPC,
    OP_BRANCH, OP_IMM, OP_IMM_32, OP_JAL, OP_JALR, OP_LOAD, OP_LUI, OP_MISC_MEM, OP_REG,
    OP_REG_32, OP_STORE, OP_SYSTEM, RD_FIELD, RS1_FIELD, RS2_FIELD, SHAMT5_FIELD, SHAMT6_FIELD,
};

/// funct7 selecting SUB/SRA/SRAI over ADD/SRL/SRLI.
const ALT: u32 = 0b0100000;

/// SFENCE.VMA fixes everything but rs1 and rs2.
const SFENCE_FORMAT: u32 = 0xFE00_7FFF;

pub(super) fn builders() -> Vec<InstEntryBuilder> {
    use InstId::*;
    use InstType::Int;

    let rv64 = |b: InstEntryBuilder| b.xlen(XlenSupport::Rv64Only);

    vec![
        u_type("lui", Lui, OP_LUI, Int),
        u_type("auipc", Auipc, OP_AUIPC, Int),
        u_type("jal", Jal, OP_JAL, InstType::Branch),
        InstEntryBuilder::new(
            "jalr",
            Jalr,
            encode(OP_JALR, 0b000, 0),
            FUNCT3_FORMAT,
            InstType::Branch,
        )
        .operand(OperandType::IntReg, OperandMode::Write, RD_FIELD)
        .operand(OperandType::IntReg, OperandMode::Read, RS1_FIELD)
        .operand(OperandType::Imm, OperandMode::Read, I_IMM_FIELD)
        .branch_to_register(),
        b_type("beq", Beq, OP_BRANCH, 0b000),
        b_type("bne", Bne, OP_BRANCH, 0b001),
        b_type("blt", Blt, OP_BRANCH, 0b100),
        b_type("bge", Bge, OP_BRANCH, 0b101),
        b_type("bltu", Bltu, OP_BRANCH, 0b110).unsigned(),
        b_type("bgeu", Bgeu, OP_BRANCH, 0b111).unsigned(),
        load("lb", Lb, OP_LOAD, 0b000, OperandType::IntReg, 1),
        load("lh", Lh, OP_LOAD, 0b001, OperandType::IntReg, 2),
        load("lw", Lw, OP_LOAD, 0b010, OperandType::IntReg, 4),
        load("lbu", Lbu, OP_LOAD, 0b100, OperandType::IntReg, 1).unsigned(),
        load("lhu", Lhu, OP_LOAD, 0b101, OperandType::IntReg, 2).unsigned(),
        rv64(load("lwu", Lwu, OP_LOAD, 0b110, OperandType::IntReg, 4).unsigned()),
        rv64(load("ld", Ld, OP_LOAD, 0b011, OperandType::IntReg, 8)),
        store("sb", Sb, OP_STORE, 0b000, OperandType::IntReg, 1),
        store("sh", Sh, OP_STORE, 0b001, OperandType::IntReg, 2),
        store("sw", Sw, OP_STORE, 0b010, OperandType::IntReg, 4),
        rv64(store("sd", Sd, OP_STORE, 0b011, OperandType::IntReg, 8)),
        i_type("addi", Addi, OP_IMM, 0b000, Int),
        i_type("slti", Slti, OP_IMM, 0b010, Int),
        i_type("sltiu", Sltiu, OP_IMM, 0b011, Int).unsigned(),
        i_type("xori", Xori, OP_IMM, 0b100, Int),
        i_type("ori", Ori, OP_IMM, 0b110, Int),
        i_type("andi", Andi, OP_IMM, 0b111, Int),
        // 6-bit shamt; RV32 treats shamt[5] = 1 as illegal.
        shift_imm("slli", Slli, OP_IMM, 0b001, 0, SHAMT6_FIELD, Int),
        shift_imm("srli", Srli, OP_IMM, 0b101, 0, SHAMT6_FIELD, Int),
        shift_imm("srai", Srai, OP_IMM, 0b101, ALT, SHAMT6_FIELD, Int),
        r_type("add", Add, OP_REG, 0b000, 0, Int),
        r_type("sub", Sub, OP_REG, 0b000, ALT, Int),
        r_type("sll", Sll, OP_REG, 0b001, 0, Int),
        r_type("slt", Slt, OP_REG, 0b010, 0, Int),
        r_type("sltu", Sltu, OP_REG, 0b011, 0, Int).unsigned(),
        r_type("xor", Xor, OP_REG, 0b100, 0, Int),
        r_type("srl", Srl, OP_REG, 0b101, 0, Int),
        r_type("sra", Sra, OP_REG, 0b101, ALT, Int),
        r_type("or", Or, OP_REG, 0b110, 0, Int),
        r_type("and", And, OP_REG, 0b111, 0, Int),
        // fm, rs1 and rd are ignored: fence.tso and the reserved fences decode as fence.
        InstEntryBuilder::new("fence", Fence, OP_MISC_MEM, FUNCT3_FORMAT, Int)
            .operand(OperandType::Imm, OperandMode::Read, FENCE_PRED_FIELD)
            .operand(OperandType::Imm, OperandMode::Read, FENCE_SUCC_FIELD),
        InstEntryBuilder::new("ecall", Ecall, OP_SYSTEM, ALL_BITS, Int),
        InstEntryBuilder::new("ebreak", Ebreak, 0x0010_0000 | OP_SYSTEM, ALL_BITS, Int),
        rv64(i_type("addiw", Addiw, OP_IMM_32, 0b000, Int)),
        rv64(shift_imm("slliw", Slliw, OP_IMM_32, 0b001, 0, SHAMT5_FIELD, Int)),
        rv64(shift_imm("srliw", Srliw, OP_IMM_32, 0b101, 0, SHAMT5_FIELD, Int)),
        rv64(shift_imm("sraiw", Sraiw, OP_IMM_32, 0b101, ALT, SHAMT5_FIELD, Int)),
        rv64(r_type("addw", Addw, OP_REG_32, 0b000, 0, Int)),
        rv64(r_type("subw", Subw, OP_REG_32, 0b000, ALT, Int)),
        rv64(r_type("sllw", Sllw, OP_REG_32, 0b001, 0, Int)),
        rv64(r_type("srlw", Srlw, OP_REG_32, 0b101, 0, Int)),
        rv64(r_type("sraw", Sraw, OP_REG_32, 0b101, ALT, Int)),
        // Privileged.
        InstEntryBuilder::new("mret", Mret, 0x3020_0000 | OP_SYSTEM, ALL_BITS, Int),
        InstEntryBuilder::new("sret", Sret, 0x1020_0000 | OP_SYSTEM, ALL_BITS, Int),
        InstEntryBuilder::new("wfi", Wfi, 0x1050_0000 | OP_SYSTEM, ALL_BITS, Int),
        InstEntryBuilder::new(
            "sfence.vma",
            SfenceVma,
            encode(OP_SYSTEM, 0, 0b0001001),
            SFENCE_FORMAT,
            Int,
        )
        .operand(OperandType::IntReg, OperandMode::Read, RS1_FIELD)
        .operand(OperandType::IntReg, OperandMode::Read, RS2_FIELD),
        InstEntryBuilder::new(
            "fence.i",
            FenceI,
            encode(OP_MISC_MEM, 0b001, 0),
            FUNCT3_FORMAT,
            Int,
        )
        .extension(Extension::Zifencei),
        csr("csrrw", Csrrw, 0b001, OperandType::IntReg),
        csr("csrrs", Csrrs, 0b010, OperandType::IntReg),
        csr("csrrc", Csrrc, 0b011, OperandType::IntReg),
        csr("csrrwi", Csrrwi, 0b101, OperandType::Imm),
        csr("csrrsi", Csrrsi, 0b110, OperandType::Imm),
        csr("csrrci", Csrrci, 0b111, OperandType::Imm),
    ]
}

/// `csr* rd, csr, rs1` or `csr*i rd, csr, uimm` (the uimm sits in the rs1 field).
fn csr(name: &str, id: InstId, funct3: u32, source: OperandType) -> InstEntryBuilder {
    InstEntryBuilder::new(name, id, encode(OP_SYSTEM, funct3, 0), FUNCT3_FORMAT, InstType::Csr)
        .operand(OperandType::IntReg, OperandMode::Write, RD_FIELD)
        .operand(OperandType::CsReg, OperandMode::ReadWrite, CSR_FIELD)
        .operand(source, OperandMode::Read, RS1_FIELD)
        .extension(Extension::Zicsr)
}
