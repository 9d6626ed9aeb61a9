//! M extension: integer multiplication and division.

use super::r_type;
use crate::config::Extension;
use crate::isa::entry::{InstEntryBuilder, InstType, XlenSupport};
use crate::isa::inst_id::InstId;
use crate::isa::opcodes::{OP_REG, OP_REG_32};

/// funct7 shared by every M-extension instruction.
const MULDIV: u32 = 0b0000001;

pub(super) fn builders() -> Vec<InstEntryBuilder> {
    use InstId::*;
    use InstType::{Divide, Multiply};

    let rv64 = |b: InstEntryBuilder| b.xlen(XlenSupport::Rv64Only);

    vec![
        r_type("mul", Mul, OP_REG, 0b000, MULDIV, Multiply),
        r_type("mulh", Mulh, OP_REG, 0b001, MULDIV, Multiply),
        r_type("mulhsu", Mulhsu, OP_REG, 0b010, MULDIV, Multiply),
        r_type("mulhu", Mulhu, OP_REG, 0b011, MULDIV, Multiply).unsigned(),
        r_type("div", Div, OP_REG, 0b100, MULDIV, Divide),
        r_type("divu", Divu, OP_REG, 0b101, MULDIV, Divide).unsigned(),
        r_type("rem", Rem, OP_REG, 0b110, MULDIV, Divide),
        r_type("remu", Remu, OP_REG, 0b111, MULDIV, Divide).unsigned(),
        rv64(r_type("mulw", Mulw, OP_REG_32, 0b000, MULDIV, Multiply)),
        rv64(r_type("divw", Divw, OP_REG_32, 0b100, MULDIV, Divide)),
        rv64(r_type("divuw", Divuw, OP_REG_32, 0b101, MULDIV, Divide).unsigned()),
        rv64(r_type("remw", Remw, OP_REG_32, 0b110, MULDIV, Divide)),
        rv64(r_type("remuw", Remuw, OP_REG_32, 0b111, MULDIV, Divide).unsigned()),
    ]
    .into_iter()
    .map(|builder| builder.extension(Extension::M))
    .collect()
}
