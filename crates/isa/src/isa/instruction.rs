//! Instruction encoding utilities.
//!
//! Provides the size conventions for raw instruction words and bit extraction
//! functions for the standard RISC-V instruction fields.

/// Low two bits of every full-size (32-bit) instruction.
pub const FULL_SIZE_MARKER: u32 = 0b11;
/// Size in bytes of a full-size instruction.
pub const FULL_SIZE: u32 = 4;
/// Size in bytes of a compressed instruction.
pub const COMPRESSED_SIZE: u32 = 2;

/// Bit mask for extracting the opcode field (bits 0-6).
pub const OPCODE_MASK: u32 = 0x7F;
/// Bit mask for extracting the destination register field (bits 7-11).
pub const RD_MASK: u32 = 0x1F;
/// Bit mask for extracting the first source register field (bits 15-19).
pub const RS1_MASK: u32 = 0x1F;
/// Bit mask for extracting the second source register field (bits 20-24).
pub const RS2_MASK: u32 = 0x1F;
/// Bit mask for extracting the funct3 field (bits 12-14).
pub const FUNCT3_MASK: u32 = 0x7;
/// Bit mask for extracting the funct7 field (bits 25-31).
pub const FUNCT7_MASK: u32 = 0x7F;
/// Bit mask for extracting the CSR address field (bits 20-31).
pub const CSR_MASK: u32 = 0xFFF;
/// Bit mask for extracting the compressed quadrant (bits 0-1).
pub const QUADRANT_MASK: u32 = 0x3;

/// Returns true if the given instruction is a 4-byte instruction.
///
/// RISC-V marks full-size instructions with `11` in the two lowest bits.
#[inline]
pub const fn is_full_size_inst(inst: u32) -> bool {
    inst & FULL_SIZE_MARKER == FULL_SIZE_MARKER
}

/// Returns true if the given instruction is a compressed (2-byte) instruction.
#[inline]
pub const fn is_compressed_inst(inst: u32) -> bool {
    !is_full_size_inst(inst)
}

/// Returns the size in bytes (2 or 4) of the given instruction based on its opcode.
#[inline]
pub const fn instruction_size(inst: u32) -> u32 {
    if is_full_size_inst(inst) {
        FULL_SIZE
    } else {
        COMPRESSED_SIZE
    }
}

/// Trait for extracting instruction fields from encoded instructions.
///
/// Provides methods to extract the standard RISC-V instruction fields
/// from a 32-bit instruction encoding, plus the two fields that select
/// a compressed instruction's major group.
pub trait InstructionBits {
    /// Extracts the opcode field (bits 0-6).
    fn opcode(&self) -> u32;

    /// Extracts the destination register field (bits 7-11).
    ///
    /// Returns the 5-bit register index (0-31) for the destination register.
    fn rd(&self) -> usize;

    /// Extracts the first source register field (bits 15-19).
    fn rs1(&self) -> usize;

    /// Extracts the second source register field (bits 20-24).
    fn rs2(&self) -> usize;

    /// Extracts the third source register field (bits 27-31, for FMA instructions).
    fn rs3(&self) -> usize;

    /// Extracts the funct3 field (bits 12-14).
    ///
    /// Used to distinguish between different operations within the same opcode.
    fn funct3(&self) -> u32;

    /// Extracts the funct7 field (bits 25-31).
    fn funct7(&self) -> u32;

    /// Extracts the CSR address field (bits 20-31).
    fn csr(&self) -> u32;

    /// Extracts the compressed quadrant (bits 0-1).
    fn quadrant(&self) -> u32;

    /// Extracts the compressed funct3 field (bits 13-15).
    fn c_funct3(&self) -> u32;
}

impl InstructionBits for u32 {
    #[inline(always)]
    fn opcode(&self) -> u32 {
        self & OPCODE_MASK
    }

    #[inline(always)]
    fn rd(&self) -> usize {
        ((self >> 7) & RD_MASK) as usize
    }

    #[inline(always)]
    fn rs1(&self) -> usize {
        ((self >> 15) & RS1_MASK) as usize
    }

    #[inline(always)]
    fn rs2(&self) -> usize {
        ((self >> 20) & RS2_MASK) as usize
    }

    #[inline(always)]
    fn rs3(&self) -> usize {
        ((self >> 27) & RS1_MASK) as usize
    }

    #[inline(always)]
    fn funct3(&self) -> u32 {
        (self >> 12) & FUNCT3_MASK
    }

    #[inline(always)]
    fn funct7(&self) -> u32 {
        (self >> 25) & FUNCT7_MASK
    }

    #[inline(always)]
    fn csr(&self) -> u32 {
        (self >> 20) & CSR_MASK
    }

    #[inline(always)]
    fn quadrant(&self) -> u32 {
        self & QUADRANT_MASK
    }

    #[inline(always)]
    fn c_funct3(&self) -> u32 {
        (self >> 13) & FUNCT3_MASK
    }
}
