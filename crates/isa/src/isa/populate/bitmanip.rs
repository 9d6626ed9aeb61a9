//! Bit-manipulation extensions: Zba, Zbb, Zbc and Zbs.
//!
//! `zext.h` and `rev8` have a different encoding in RV32 and RV64 and are
//! registered under one mnemonic with two identifiers.

use super::{r_type, shift_imm, unary};
use crate::config::Extension;
use crate::isa::entry::{InstEntryBuilder, InstType, XlenSupport};
use crate::isa::inst_id::InstId;
use crate::isa::opcodes::{OP_IMM, OP_IMM_32, OP_REG, OP_REG_32, SHAMT5_FIELD, SHAMT6_FIELD};

fn rv32(builder: InstEntryBuilder) -> InstEntryBuilder {
    builder.xlen(XlenSupport::Rv32Only)
}

fn rv64(builder: InstEntryBuilder) -> InstEntryBuilder {
    builder.xlen(XlenSupport::Rv64Only)
}

fn tagged(builders: Vec<InstEntryBuilder>, extension: Extension) -> Vec<InstEntryBuilder> {
    builders
        .into_iter()
        .map(|builder| builder.extension(extension))
        .collect()
}

fn zba() -> Vec<InstEntryBuilder> {
    use InstId::*;
    use InstType::Zba;

    vec![
        r_type("sh1add", Sh1add, OP_REG, 0b010, 0b0010000, Zba),
        r_type("sh2add", Sh2add, OP_REG, 0b100, 0b0010000, Zba),
        r_type("sh3add", Sh3add, OP_REG, 0b110, 0b0010000, Zba),
        rv64(r_type("add.uw", AddUw, OP_REG_32, 0b000, 0b0000100, Zba).unsigned()),
        rv64(r_type("sh1add.uw", Sh1addUw, OP_REG_32, 0b010, 0b0010000, Zba).unsigned()),
        rv64(r_type("sh2add.uw", Sh2addUw, OP_REG_32, 0b100, 0b0010000, Zba).unsigned()),
        rv64(r_type("sh3add.uw", Sh3addUw, OP_REG_32, 0b110, 0b0010000, Zba).unsigned()),
        rv64(
            shift_imm("slli.uw", SlliUw, OP_IMM_32, 0b001, 0b0000100, SHAMT6_FIELD, Zba)
                .unsigned(),
        ),
    ]
}

fn zbb() -> Vec<InstEntryBuilder> {
    use InstId::*;
    use InstType::Zbb;

    vec![
        r_type("andn", Andn, OP_REG, 0b111, 0b0100000, Zbb),
        r_type("orn", Orn, OP_REG, 0b110, 0b0100000, Zbb),
        r_type("xnor", Xnor, OP_REG, 0b100, 0b0100000, Zbb),
        unary("clz", Clz, OP_IMM, 0b001, 0x600, Zbb),
        unary("ctz", Ctz, OP_IMM, 0b001, 0x601, Zbb),
        unary("cpop", Cpop, OP_IMM, 0b001, 0x602, Zbb),
        rv64(unary("clzw", Clzw, OP_IMM_32, 0b001, 0x600, Zbb)),
        rv64(unary("ctzw", Ctzw, OP_IMM_32, 0b001, 0x601, Zbb)),
        rv64(unary("cpopw", Cpopw, OP_IMM_32, 0b001, 0x602, Zbb)),
        r_type("max", Max, OP_REG, 0b110, 0b0000101, Zbb),
        r_type("maxu", Maxu, OP_REG, 0b111, 0b0000101, Zbb).unsigned(),
        r_type("min", Min, OP_REG, 0b100, 0b0000101, Zbb),
        r_type("minu", Minu, OP_REG, 0b101, 0b0000101, Zbb).unsigned(),
        unary("sext.b", SextB, OP_IMM, 0b001, 0x604, Zbb),
        unary("sext.h", SextH, OP_IMM, 0b001, 0x605, Zbb),
        rv32(unary("zext.h", ZextHRv32, OP_REG, 0b100, 0x080, Zbb)),
        rv64(unary("zext.h", ZextHRv64, OP_REG_32, 0b100, 0x080, Zbb)),
        r_type("rol", Rol, OP_REG, 0b001, 0b0110000, Zbb),
        r_type("ror", Ror, OP_REG, 0b101, 0b0110000, Zbb),
        shift_imm("rori", Rori, OP_IMM, 0b101, 0b0110000, SHAMT6_FIELD, Zbb),
        rv64(r_type("rolw", Rolw, OP_REG_32, 0b001, 0b0110000, Zbb)),
        rv64(r_type("rorw", Rorw, OP_REG_32, 0b101, 0b0110000, Zbb)),
        rv64(shift_imm("roriw", Roriw, OP_IMM_32, 0b101, 0b0110000, SHAMT5_FIELD, Zbb)),
        unary("orc.b", OrcB, OP_IMM, 0b101, 0x287, Zbb),
        rv32(unary("rev8", Rev8Rv32, OP_IMM, 0b101, 0x698, Zbb)),
        rv64(unary("rev8", Rev8Rv64, OP_IMM, 0b101, 0x6B8, Zbb)),
    ]
}

fn zbc() -> Vec<InstEntryBuilder> {
    use InstId::*;
    use InstType::Zbc;

    vec![
        r_type("clmul", Clmul, OP_REG, 0b001, 0b0000101, Zbc),
        r_type("clmulr", Clmulr, OP_REG, 0b010, 0b0000101, Zbc),
        r_type("clmulh", Clmulh, OP_REG, 0b011, 0b0000101, Zbc),
    ]
}

fn zbs() -> Vec<InstEntryBuilder> {
    use InstId::*;
    use InstType::Zbs;

    vec![
        r_type("bclr", Bclr, OP_REG, 0b001, 0b0100100, Zbs),
        shift_imm("bclri", Bclri, OP_IMM, 0b001, 0b0100100, SHAMT6_FIELD, Zbs),
        r_type("bext", Bext, OP_REG, 0b101, 0b0100100, Zbs),
        shift_imm("bexti", Bexti, OP_IMM, 0b101, 0b0100100, SHAMT6_FIELD, Zbs),
        r_type("binv", Binv, OP_REG, 0b001, 0b0110100, Zbs),
        shift_imm("binvi", Binvi, OP_IMM, 0b001, 0b0110100, SHAMT6_FIELD, Zbs),
        r_type("bset", Bset, OP_REG, 0b001, 0b0010100, Zbs),
        shift_imm("bseti", Bseti, OP_IMM, 0b001, 0b0010100, SHAMT6_FIELD, Zbs),
    ]
}

pub(super) fn builders() -> Vec<InstEntryBuilder> {
    let mut builders = tagged(zba(), Extension::Zba);
    builders.extend(tagged(zbb(), Extension::Zbb));
    builders.extend(tagged(zbc(), Extension::Zbc));
    builders.extend(tagged(zbs(), Extension::Zbs));
    builders
}
