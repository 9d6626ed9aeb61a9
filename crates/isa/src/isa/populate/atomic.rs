//! A extension: load-reserved/store-conditional and atomic memory operations.

use crate::config::Extension;
use crate::isa::entry::{InstEntryBuilder, InstType, OperandMode, OperandType, XlenSupport};
use crate::isa::inst_id::InstId;
use crate::isa::opcodes::{OP_AMO, RD_FIELD, RS1_FIELD, RS2_FIELD};

/// Opcode, funct3 and funct5; the aq/rl bits and all registers are free.
const AMO_FORMAT: u32 = 0xF800_707F;

/// LR also fixes rs2 to zero.
const LR_FORMAT: u32 = 0xF9F0_707F;

const WORD: u32 = 0b010;
const DOUBLE: u32 = 0b011;

const fn amo_code(funct5: u32, width: u32) -> u32 {
    (funct5 << 27) | (width << 12) | OP_AMO
}

fn lr(name: &str, id: InstId, width: u32) -> InstEntryBuilder {
    InstEntryBuilder::new(name, id, amo_code(0b00010, width), LR_FORMAT, InstType::Atomic)
        .operand(OperandType::IntReg, OperandMode::Write, RD_FIELD)
        .operand(OperandType::IntReg, OperandMode::Read, RS1_FIELD)
}

/// `amo rd, rs2, (rs1)`; SC shares the shape.
fn amo(name: &str, id: InstId, funct5: u32, width: u32) -> InstEntryBuilder {
    InstEntryBuilder::new(name, id, amo_code(funct5, width), AMO_FORMAT, InstType::Atomic)
        .operand(OperandType::IntReg, OperandMode::Write, RD_FIELD)
        .operand(OperandType::IntReg, OperandMode::Read, RS1_FIELD)
        .operand(OperandType::IntReg, OperandMode::Read, RS2_FIELD)
}

pub(super) fn builders() -> Vec<InstEntryBuilder> {
    use InstId::*;

    let rv64 = |b: InstEntryBuilder| b.xlen(XlenSupport::Rv64Only);

    vec![
        lr("lr.w", LrW, WORD),
        amo("sc.w", ScW, 0b00011, WORD),
        amo("amoswap.w", AmoswapW, 0b00001, WORD),
        amo("amoadd.w", AmoaddW, 0b00000, WORD),
        amo("amoxor.w", AmoxorW, 0b00100, WORD),
        amo("amoand.w", AmoandW, 0b01100, WORD),
        amo("amoor.w", AmoorW, 0b01000, WORD),
        amo("amomin.w", AmominW, 0b10000, WORD),
        amo("amomax.w", AmomaxW, 0b10100, WORD),
        amo("amominu.w", AmominuW, 0b11000, WORD).unsigned(),
        amo("amomaxu.w", AmomaxuW, 0b11100, WORD).unsigned(),
        rv64(lr("lr.d", LrD, DOUBLE)),
        rv64(amo("sc.d", ScD, 0b00011, DOUBLE)),
        rv64(amo("amoswap.d", AmoswapD, 0b00001, DOUBLE)),
        rv64(amo("amoadd.d", AmoaddD, 0b00000, DOUBLE)),
        rv64(amo("amoxor.d", AmoxorD, 0b00100, DOUBLE)),
        rv64(amo("amoand.d", AmoandD, 0b01100, DOUBLE)),
        rv64(amo("amoor.d", AmoorD, 0b01000, DOUBLE)),
        rv64(amo("amomin.d", AmominD, 0b10000, DOUBLE)),
        rv64(amo("amomax.d", AmomaxD, 0b10100, DOUBLE)),
        rv64(amo("amominu.d", AmominuD, 0b11000, DOUBLE).unsigned()),
        rv64(amo("amomaxu.d", AmomaxuD, 0b11100, DOUBLE).unsigned()),
    ]
    .into_iter()
    .map(|builder| builder.extension(Extension::A))
    .collect()
}
