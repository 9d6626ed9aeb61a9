//! RISC-V Major Opcodes and Field Positions.
//!
//! Defines the major opcodes (bits 6-0) of the 32-bit encoding space, the
//! in-place masks of the operand specifier fields, and the code masks of the
//! standard instruction formats. The population tables compose records from
//! these rather than spelling out raw hex.

/// Load instructions (LB, LH, LW, LD, etc.).
pub const OP_LOAD: u32 = 0b0000011;
/// Floating-point loads (FLW, FLD).
pub const OP_LOAD_FP: u32 = 0b0000111;
/// Memory ordering instructions (FENCE, FENCE.I).
pub const OP_MISC_MEM: u32 = 0b0001111;
/// Immediate arithmetic instructions (ADDI, ANDI, SLLI, etc.).
pub const OP_IMM: u32 = 0b0010011;
/// Add Upper Immediate to PC (AUIPC).
pub const OP_AUIPC: u32 = 0b0010111;
/// 32-bit Immediate arithmetic (ADDIW, SLLIW, etc.) - RV64 only.
pub const OP_IMM_32: u32 = 0b0011011;
/// Store instructions (SB, SH, SW, SD).
pub const OP_STORE: u32 = 0b0100011;
/// Floating-point stores (FSW, FSD).
pub const OP_STORE_FP: u32 = 0b0100111;
/// Atomic memory operations (LR, SC, AMO*).
pub const OP_AMO: u32 = 0b0101111;
/// Register-Register arithmetic (ADD, SUB, SLL, etc.).
pub const OP_REG: u32 = 0b0110011;
/// Load Upper Immediate (LUI).
pub const OP_LUI: u32 = 0b0110111;
/// 32-bit Register-Register arithmetic (ADDW, SUBW, etc.) - RV64 only.
pub const OP_REG_32: u32 = 0b0111011;
/// Fused multiply-add.
pub const OP_FMADD: u32 = 0b1000011;
/// Fused multiply-subtract.
pub const OP_FMSUB: u32 = 0b1000111;
/// Negated fused multiply-subtract.
pub const OP_FNMSUB: u32 = 0b1001011;
/// Negated fused multiply-add.
pub const OP_FNMADD: u32 = 0b1001111;
/// Floating-point arithmetic, conversion and moves.
pub const OP_FP: u32 = 0b1010011;
/// Conditional Branch instructions (BEQ, BNE, etc.).
pub const OP_BRANCH: u32 = 0b1100011;
/// Jump and Link Register (JALR).
pub const OP_JALR: u32 = 0b1100111;
/// Jump and Link (JAL).
pub const OP_JAL: u32 = 0b1101111;
/// System instructions (ECALL, EBREAK, CSR*, xRET, WFI, SFENCE.VMA).
pub const OP_SYSTEM: u32 = 0b1110011;

/// Destination register specifier (bits 7-11).
pub const RD_FIELD: u32 = 0x0000_0F80;
/// First source register specifier (bits 15-19).
pub const RS1_FIELD: u32 = 0x000F_8000;
/// Second source register specifier (bits 20-24).
pub const RS2_FIELD: u32 = 0x01F0_0000;
/// Third source register specifier (bits 27-31).
pub const RS3_FIELD: u32 = 0xF800_0000;
/// I-type immediate (bits 20-31).
pub const I_IMM_FIELD: u32 = 0xFFF0_0000;
/// S-type and B-type immediate (bits 7-11 and 25-31).
pub const S_IMM_FIELD: u32 = 0xFE00_0F80;
/// U-type and J-type immediate (bits 12-31).
pub const U_IMM_FIELD: u32 = 0xFFFF_F000;
/// CSR address (bits 20-31).
pub const CSR_FIELD: u32 = 0xFFF0_0000;
/// 6-bit shift amount (bits 20-25).
pub const SHAMT6_FIELD: u32 = 0x03F0_0000;
/// 5-bit shift amount (bits 20-24).
pub const SHAMT5_FIELD: u32 = 0x01F0_0000;
/// FENCE predecessor set (bits 24-27).
pub const FENCE_PRED_FIELD: u32 = 0x0F00_0000;
/// FENCE successor set (bits 20-23).
pub const FENCE_SUCC_FIELD: u32 = 0x00F0_0000;

/// Opcode only (U-type, J-type).
pub const OPCODE_ONLY: u32 = 0x0000_007F;
/// Opcode and funct3 (I-type, S-type, B-type).
pub const FUNCT3_FORMAT: u32 = 0x0000_707F;
/// Opcode, funct3 and funct7 (R-type).
pub const FUNCT7_FORMAT: u32 = 0xFE00_707F;
/// Opcode, funct3 and funct6 (RV64 immediate shifts).
pub const FUNCT6_FORMAT: u32 = 0xFC00_707F;
/// Opcode, funct3, funct7 and a fixed rs2 (unary R-type).
pub const UNARY_FORMAT: u32 = 0xFFF0_707F;
/// Every bit fixed.
pub const ALL_BITS: u32 = 0xFFFF_FFFF;

/// Compressed destination/first source register specifier (bits 7-11).
pub const C_RD_FIELD: u32 = 0x0F80;
/// Compressed second source register specifier (bits 2-6).
pub const C_RS2_FIELD: u32 = 0x007C;
/// Compressed 3-bit first source register specifier (bits 7-9).
pub const C_RS1_PRIME_FIELD: u32 = 0x0380;
/// Compressed 3-bit destination/second source register specifier (bits 2-4).
pub const C_RD_PRIME_FIELD: u32 = 0x001C;
/// Compressed quadrant and funct3 (bits 0-1 and 13-15).
pub const C_FUNCT3_FORMAT: u32 = 0xE003;
