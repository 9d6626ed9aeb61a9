//! Instruction records.
//!
//! An `InstEntry` describes one instruction variant: its fixed encoding bits, up
//! to four operand descriptors, its classification and a few derived flags. It
//! is a pure value; the only way to make one is through `InstEntryBuilder`,
//! whose `build` step validates the record and freezes it.
//!
//! # Operand order
//!
//! Operands are listed in assembly order:
//! - `inst rd, rs1, rs2`: rd, rs1 and rs2 are operands 0, 1 and 2.
//! - `inst rd, rs1, imm`: rd, rs1 and the immediate are operands 0, 1 and 2.
//! - Loads (`load rd, offset(rs1)`): rd, rs1 and offset are operands 0, 1 and 2.
//! - Stores (`store rs2, offset(rs1)`): rs2, rs1 and offset are operands 0, 1 and 2.
//! - Branches (`branch rs1, rs2, offset`): rs1, rs2 and offset are operands 0, 1 and 2.

use crate::common::error::EntryError;
use crate::config::{Extension, Xlen};
use crate::isa::inst_id::InstId;
use crate::isa::instruction::{instruction_size, is_compressed_inst};

/// Maximum number of operands a record can describe.
pub const MAX_OPERANDS: usize = 4;

/// Kind of value an operand specifier selects.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum OperandType {
    /// Integer register (x0-x31).
    IntReg,
    /// Floating-point register (f0-f31).
    FpReg,
    /// Control and status register.
    CsReg,
    /// Vector register (v0-v31).
    VecReg,
    /// Immediate value.
    Imm,
    /// No operand.
    #[default]
    None,
}

/// Direction in which an instruction uses an operand.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum OperandMode {
    /// Source operand.
    Read,
    /// Destination operand.
    Write,
    /// Operand that is both read and written.
    ReadWrite,
    /// No operand.
    #[default]
    None,
}

impl OperandMode {
    /// Returns true for `Read` and `ReadWrite`.
    #[inline]
    pub const fn is_read(self) -> bool {
        matches!(self, Self::Read | Self::ReadWrite)
    }

    /// Returns true for `Write` and `ReadWrite`.
    #[inline]
    pub const fn is_write(self) -> bool {
        matches!(self, Self::Write | Self::ReadWrite)
    }
}

/// Semantic classification of an instruction.
///
/// This is a single-valued tag: every record has exactly one type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum InstType {
    /// Memory load (integer or floating point).
    Load,
    /// Memory store (integer or floating point).
    Store,
    /// Integer multiplication.
    Multiply,
    /// Integer division and remainder.
    Divide,
    /// Branch or jump.
    Branch,
    /// Integer arithmetic, logic and everything not otherwise classified.
    #[default]
    Int,
    /// Floating-point arithmetic, conversion and moves.
    Fp,
    /// Control and status register access.
    Csr,
    /// Atomic memory operation (including LR/SC).
    Atomic,
    /// Vector operation.
    Vector,
    /// Address generation bit manipulation.
    Zba,
    /// Basic bit manipulation.
    Zbb,
    /// Carry-less multiplication.
    Zbc,
    /// Bit extract/deposit.
    Zbe,
    /// Bit-field place.
    Zbf,
    /// Bit matrix operations.
    Zbm,
    /// Bit permutation.
    Zbp,
    /// CRC operations.
    Zbr,
    /// Single-bit operations.
    Zbs,
    /// Ternary bit operations.
    Zbt,
}

impl InstType {
    /// Returns true for the bit-manipulation sub-extension types.
    pub const fn is_bit_manipulation(self) -> bool {
        matches!(
            self,
            Self::Zba
                | Self::Zbb
                | Self::Zbc
                | Self::Zbe
                | Self::Zbf
                | Self::Zbm
                | Self::Zbp
                | Self::Zbr
                | Self::Zbs
                | Self::Zbt
        )
    }
}

/// Base register widths in which a record exists.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum XlenSupport {
    /// Present in RV32 and RV64.
    #[default]
    Both,
    /// Present in RV32 only.
    Rv32Only,
    /// Present in RV64 only.
    Rv64Only,
}

impl XlenSupport {
    /// Returns true if the record exists for the given register width.
    pub const fn supports(self, xlen: Xlen) -> bool {
        match self {
            Self::Both => true,
            Self::Rv32Only => matches!(xlen, Xlen::Rv32),
            Self::Rv64Only => matches!(xlen, Xlen::Rv64),
        }
    }
}

/// One operand descriptor: what it selects, how it is used, where it sits.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct Operand {
    operand_type: OperandType,
    mode: OperandMode,
    mask: u32,
}

impl Operand {
    /// The absent operand.
    pub const NONE: Self = Self::new(OperandType::None, OperandMode::None, 0);

    /// Creates an operand descriptor.
    pub const fn new(operand_type: OperandType, mode: OperandMode, mask: u32) -> Self {
        Self {
            operand_type,
            mode,
            mask,
        }
    }

    /// Returns the kind of value the operand selects.
    #[inline]
    pub const fn operand_type(self) -> OperandType {
        self.operand_type
    }

    /// Returns how the instruction uses the operand.
    #[inline]
    pub const fn mode(self) -> OperandMode {
        self.mode
    }

    /// Returns the mask of the operand specifier bits.
    #[inline]
    pub const fn mask(self) -> u32 {
        self.mask
    }
}

/// Generic information about an instruction: opcode, type (integer,
/// floating point, etc.), operand count, operand types and operand direction.
///
/// Each record is one entry of the table defining the instruction set.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InstEntry {
    name: String,
    id: InstId,
    code: u32,      // Code with all operand bits set to zero.
    code_mask: u32, // Bits corresponding to code bits are 1.
    operands: [Operand; MAX_OPERANDS],
    operand_count: usize,
    inst_type: InstType,
    extension: Extension,
    xlen_support: XlenSupport,
    rv32_reserved: u32, // Operand bits that must be zero in RV32.
    load_size: u32,  // Zero for non-load.
    store_size: u32, // Zero for non-store.
    is_unsigned: bool,
    is_conditional_branch: bool,
    is_branch_to_register: bool,
}

impl InstEntry {
    /// Mnemonic of the illegal-instruction record.
    pub const ILLEGAL_NAME: &'static str = "illegal";

    /// Creates the illegal-instruction record.
    pub(crate) fn illegal() -> Self {
        Self {
            name: Self::ILLEGAL_NAME.to_owned(),
            id: InstId::Illegal,
            code: u32::MAX,
            code_mask: u32::MAX,
            operands: [Operand::NONE; MAX_OPERANDS],
            operand_count: 0,
            inst_type: InstType::Int,
            extension: Extension::I,
            xlen_support: XlenSupport::Both,
            rv32_reserved: 0,
            load_size: 0,
            store_size: 0,
            is_unsigned: false,
            is_conditional_branch: false,
            is_branch_to_register: false,
        }
    }

    /// Returns the name of the instruction.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the id of the instruction.
    ///
    /// Two records with the same code may have different ids: the same
    /// encoding names different instructions depending on the feature set
    /// and mode of the processor.
    #[inline]
    pub const fn inst_id(&self) -> InstId {
        self.id
    }

    /// Returns the instruction bits with all the operand specifiers set to zero.
    #[inline]
    pub const fn code(&self) -> u32 {
        self.code
    }

    /// Returns the mask of the code bits: 1 for each non-operand-specifier bit.
    #[inline]
    pub const fn code_mask(&self) -> u32 {
        self.code_mask
    }

    /// Returns the number of populated operand slots.
    #[inline]
    pub const fn operand_count(&self) -> usize {
        self.operand_count
    }

    /// Returns the populated operands in order.
    pub fn operands(&self) -> &[Operand] {
        &self.operands[..self.operand_count]
    }

    /// Returns the ith operand (zero-based), or the absent operand if there is none.
    #[inline]
    pub fn ith_operand(&self, i: usize) -> Operand {
        self.operands().get(i).copied().unwrap_or(Operand::NONE)
    }

    /// Returns the type of the ith operand, or `None` if no such operand.
    #[inline]
    pub fn ith_operand_type(&self, i: usize) -> OperandType {
        self.ith_operand(i).operand_type()
    }

    /// Returns the mode of the ith operand, or `None` if no such operand.
    #[inline]
    pub fn ith_operand_mode(&self, i: usize) -> OperandMode {
        self.ith_operand(i).mode()
    }

    /// Returns the specifier mask of the ith operand, or 0 if no such operand.
    #[inline]
    pub fn ith_operand_mask(&self, i: usize) -> u32 {
        self.ith_operand(i).mask()
    }

    /// Returns true if the ith operand is written.
    pub fn is_ith_operand_write(&self, i: usize) -> bool {
        self.ith_operand_mode(i).is_write()
    }

    /// Returns true if the ith operand is read.
    pub fn is_ith_operand_read(&self, i: usize) -> bool {
        self.ith_operand_mode(i).is_read()
    }

    /// Returns true if the ith operand is an integer register used only as a source.
    pub fn is_ith_operand_int_reg_source(&self, i: usize) -> bool {
        let operand = self.ith_operand(i);
        operand.operand_type() == OperandType::IntReg && operand.mode() == OperandMode::Read
    }

    /// Returns true if the ith operand is a floating-point register used only as a source.
    pub fn is_ith_operand_fp_reg_source(&self, i: usize) -> bool {
        let operand = self.ith_operand(i);
        operand.operand_type() == OperandType::FpReg && operand.mode() == OperandMode::Read
    }

    /// Gathers the bits of `word` under the ith operand's mask into a
    /// right-aligned value.
    ///
    /// For a register operand this is the register number as encoded (the
    /// 3-bit compressed specifiers still need the +8 bias). Immediates come
    /// back as their raw specifier bits in ascending bit order, not as the
    /// reassembled immediate. Returns 0 if no such operand.
    pub fn ith_operand_bits(&self, i: usize, word: u32) -> u32 {
        let mut remaining = self.ith_operand_mask(i);
        let mut value = 0;
        let mut out_bit = 0;
        while remaining != 0 {
            let bit = remaining.trailing_zeros();
            value |= ((word >> bit) & 1) << out_bit;
            out_bit += 1;
            remaining &= remaining - 1;
        }
        value
    }

    /// Returns true if the fixed bits of `word` equal this record's code.
    ///
    /// Compressed records only fix low half-word bits, so the upper half of
    /// `word` is ignored for them.
    #[inline]
    pub const fn matches(&self, word: u32) -> bool {
        word & self.code_mask == self.code
    }

    /// Returns true if `word` encodes this record in a hart of the given width.
    ///
    /// On top of [`InstEntry::matches`], RV32 requires the bits of
    /// [`InstEntry::rv32_reserved`] to be zero (`shamt[5]` of the immediate
    /// shifts). Availability in `xlen` is checked separately through
    /// [`InstEntry::xlen_support`].
    #[inline]
    pub const fn matches_xlen(&self, word: u32, xlen: Xlen) -> bool {
        self.matches(word) && (matches!(xlen, Xlen::Rv64) || word & self.rv32_reserved == 0)
    }

    /// Returns the operand bits an RV32 encoding must leave zero.
    #[inline]
    pub const fn rv32_reserved(&self) -> u32 {
        self.rv32_reserved
    }

    /// Returns the instruction type.
    #[inline]
    pub const fn inst_type(&self) -> InstType {
        self.inst_type
    }

    /// Returns the extension the instruction belongs to.
    #[inline]
    pub const fn extension(&self) -> Extension {
        self.extension
    }

    /// Returns the register widths in which the instruction exists.
    #[inline]
    pub const fn xlen_support(&self) -> XlenSupport {
        self.xlen_support
    }

    /// Returns true if this is a 16-bit compressed instruction.
    #[inline]
    pub const fn is_compressed(&self) -> bool {
        is_compressed_inst(self.code)
    }

    /// Returns the instruction size in bytes (2 or 4).
    #[inline]
    pub const fn size(&self) -> u32 {
        instruction_size(self.code)
    }

    /// Returns true if this is a load instruction (lb, lh, flw, ...).
    pub const fn is_load(&self) -> bool {
        matches!(self.inst_type, InstType::Load)
    }

    /// Returns true if this is a store instruction (sb, sh, fsw, ...).
    pub const fn is_store(&self) -> bool {
        matches!(self.inst_type, InstType::Store)
    }

    /// Returns true if this is a branch instruction (beq, jal, ...).
    pub const fn is_branch(&self) -> bool {
        matches!(self.inst_type, InstType::Branch)
    }

    /// Returns true if this is a multiply instruction (mul, mulh, ...).
    pub const fn is_multiply(&self) -> bool {
        matches!(self.inst_type, InstType::Multiply)
    }

    /// Returns true if this is a divide instruction (div, rem, ...).
    pub const fn is_divide(&self) -> bool {
        matches!(self.inst_type, InstType::Divide)
    }

    /// Returns true if this is a CSR instruction.
    pub const fn is_csr(&self) -> bool {
        matches!(self.inst_type, InstType::Csr)
    }

    /// Returns true if this is an atomic instruction.
    pub const fn is_atomic(&self) -> bool {
        matches!(self.inst_type, InstType::Atomic)
    }

    /// Returns true if this is a vector instruction.
    pub const fn is_vector(&self) -> bool {
        matches!(self.inst_type, InstType::Vector)
    }

    /// Returns true if source operands have unsigned integer values.
    #[inline]
    pub const fn is_unsigned(&self) -> bool {
        self.is_unsigned
    }

    /// Returns true if this is a branch whose target address is in a register.
    #[inline]
    pub const fn is_branch_to_register(&self) -> bool {
        self.is_branch_to_register
    }

    /// Returns true if this is a conditional branch.
    #[inline]
    pub const fn is_conditional_branch(&self) -> bool {
        self.is_conditional_branch
    }

    /// Returns true if this is a bit manipulation instruction.
    #[inline]
    pub const fn is_bit_manipulation(&self) -> bool {
        self.inst_type.is_bit_manipulation()
    }

    /// Returns the data size in bytes of a load, zero for a non-load.
    #[inline]
    pub const fn load_size(&self) -> u32 {
        self.load_size
    }

    /// Returns the data size in bytes of a store, zero for a non-store.
    #[inline]
    pub const fn store_size(&self) -> u32 {
        self.store_size
    }

    /// Checks the record's encoding and shape invariants.
    ///
    /// # Errors
    ///
    /// Returns the first violated invariant:
    /// - code bits outside the code mask,
    /// - an empty populated operand, or one overlapping the code mask,
    /// - RV32-reserved bits outside the operand specifiers,
    /// - transfer sizes that disagree with the instruction type.
    pub fn validate(&self) -> Result<(), EntryError> {
        if self.code & !self.code_mask != 0 {
            return Err(EntryError::CodeOutsideMask {
                name: self.name.clone(),
                code: self.code,
                mask: self.code_mask,
            });
        }

        for (index, operand) in self.operands().iter().enumerate() {
            if operand.operand_type() == OperandType::None
                || operand.mode() == OperandMode::None
                || operand.mask() == 0
            {
                return Err(EntryError::EmptyOperand {
                    name: self.name.clone(),
                    index,
                });
            }
            if operand.mask() & self.code_mask != 0 {
                return Err(EntryError::OperandOverlapsCode {
                    name: self.name.clone(),
                    index,
                    operand_mask: operand.mask(),
                    code_mask: self.code_mask,
                });
            }
        }

        let operand_bits = self.operands().iter().fold(0, |bits, operand| bits | operand.mask());
        if self.rv32_reserved & !operand_bits != 0 {
            return Err(EntryError::ReservedOutsideOperands {
                name: self.name.clone(),
                reserved: self.rv32_reserved,
                operand_bits,
            });
        }

        let sizes_ok = match self.inst_type {
            InstType::Load => self.load_size != 0 && self.store_size == 0,
            InstType::Store => self.store_size != 0 && self.load_size == 0,
            _ => self.load_size == 0 && self.store_size == 0,
        };
        if !sizes_ok {
            return Err(EntryError::TransferSize {
                name: self.name.clone(),
                inst_type: self.inst_type,
                load_size: self.load_size,
                store_size: self.store_size,
            });
        }

        Ok(())
    }
}

/// Build-time companion of `InstEntry`.
///
/// Collects the encoding, operands and flags of one record, then
/// [`InstEntryBuilder::build`] validates and freezes it.
///
/// ```
/// use rvsim_isa::isa::entry::{InstEntryBuilder, InstType, OperandMode, OperandType};
/// use rvsim_isa::InstId;
///
/// let add = InstEntryBuilder::new("add", InstId::Add, 0x0000_0033, 0xfe00_707f, InstType::Int)
///     .operand(OperandType::IntReg, OperandMode::Write, 0x0000_0f80)
///     .operand(OperandType::IntReg, OperandMode::Read, 0x000f_8000)
///     .operand(OperandType::IntReg, OperandMode::Read, 0x01f0_0000)
///     .build()
///     .unwrap();
/// assert_eq!(add.operand_count(), 3);
/// ```
#[derive(Clone, Debug)]
pub struct InstEntryBuilder {
    name: String,
    id: InstId,
    code: u32,
    code_mask: u32,
    inst_type: InstType,
    operands: Vec<Operand>,
    extension: Extension,
    xlen_support: XlenSupport,
    rv32_reserved: u32,
    load_size: u32,
    store_size: u32,
    is_unsigned: bool,
    is_conditional_branch: bool,
    is_branch_to_register: bool,
}

impl InstEntryBuilder {
    /// Starts a record with its encoding and classification.
    ///
    /// The record defaults to the base extension `I` in both register widths.
    pub fn new(
        name: impl Into<String>,
        id: InstId,
        code: u32,
        code_mask: u32,
        inst_type: InstType,
    ) -> Self {
        Self {
            name: name.into(),
            id,
            code,
            code_mask,
            inst_type,
            operands: Vec::with_capacity(MAX_OPERANDS),
            extension: Extension::I,
            xlen_support: XlenSupport::Both,
            rv32_reserved: 0,
            load_size: 0,
            store_size: 0,
            is_unsigned: false,
            is_conditional_branch: false,
            is_branch_to_register: false,
        }
    }

    /// Appends the next operand.
    #[must_use]
    pub fn operand(mut self, operand_type: OperandType, mode: OperandMode, mask: u32) -> Self {
        self.operands.push(Operand::new(operand_type, mode, mask));
        self
    }

    /// Sets the extension the instruction belongs to.
    #[must_use]
    pub fn extension(mut self, extension: Extension) -> Self {
        self.extension = extension;
        self
    }

    /// Sets the register widths in which the instruction exists.
    #[must_use]
    pub fn xlen(mut self, support: XlenSupport) -> Self {
        self.xlen_support = support;
        self
    }

    /// Marks operand bits that are reserved (must be zero) in RV32.
    #[must_use]
    pub fn rv32_reserved(mut self, bits: u32) -> Self {
        self.rv32_reserved = bits;
        self
    }

    /// Sets the size in bytes of a load.
    #[must_use]
    pub fn load_size(mut self, bytes: u32) -> Self {
        self.load_size = bytes;
        self
    }

    /// Sets the size in bytes of a store.
    #[must_use]
    pub fn store_size(mut self, bytes: u32) -> Self {
        self.store_size = bytes;
        self
    }

    /// Marks the instruction as having unsigned source operands.
    #[must_use]
    pub fn unsigned(mut self) -> Self {
        self.is_unsigned = true;
        self
    }

    /// Marks the instruction as a conditional branch.
    #[must_use]
    pub fn conditional_branch(mut self) -> Self {
        self.is_conditional_branch = true;
        self
    }

    /// Marks the instruction as a branch to a register-held address.
    #[must_use]
    pub fn branch_to_register(mut self) -> Self {
        self.is_branch_to_register = true;
        self
    }

    /// Returns the mnemonic being built.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the identifier being built.
    pub const fn id(&self) -> InstId {
        self.id
    }

    /// Returns the extension of the record being built.
    pub const fn extension_of(&self) -> Extension {
        self.extension
    }

    /// Validates the collected data and yields the immutable record.
    ///
    /// # Errors
    ///
    /// Returns [`EntryError::TooManyOperands`] for more than [`MAX_OPERANDS`]
    /// operands, or any error reported by [`InstEntry::validate`].
    pub fn build(self) -> Result<InstEntry, EntryError> {
        let count = self.operands.len();
        if count > MAX_OPERANDS {
            return Err(EntryError::TooManyOperands {
                name: self.name,
                count,
                max: MAX_OPERANDS,
            });
        }

        let mut operands = [Operand::NONE; MAX_OPERANDS];
        operands[..count].copy_from_slice(&self.operands);

        let entry = InstEntry {
            name: self.name,
            id: self.id,
            code: self.code,
            code_mask: self.code_mask,
            operands,
            operand_count: count,
            inst_type: self.inst_type,
            extension: self.extension,
            xlen_support: self.xlen_support,
            rv32_reserved: self.rv32_reserved,
            load_size: self.load_size,
            store_size: self.store_size,
            is_unsigned: self.is_unsigned,
            is_conditional_branch: self.is_conditional_branch,
            is_branch_to_register: self.is_branch_to_register,
        };
        entry.validate()?;
        Ok(entry)
    }
}
