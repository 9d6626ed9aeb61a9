//! Instruction Identifiers.
//!
//! `InstId` is a closed enumeration with one tag per distinct instruction
//! variant. Tags are dense small integers starting at zero (`Illegal`), so the
//! registry indexes its records directly by identifier.
//!
//! Two variants may share a bit pattern (`CFlw`/`CLd`, `CJal`/`CAddiw`) or a
//! mnemonic (`ZextHRv32`/`ZextHRv64`); the identifier is what tells them apart.

/// Declares `InstId` together with its dense index tables.
macro_rules! inst_ids {
    ($($(#[$doc:meta])* $variant:ident),* $(,)?) => {
        /// Identifier of one instruction variant.
        ///
        /// Variant names are the instruction mnemonics in camel case.
        #[allow(missing_docs)]
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[repr(u16)]
        pub enum InstId {
            $($(#[$doc])* $variant),*
        }

        impl InstId {
            /// Every identifier, in index order.
            pub const ALL: &'static [Self] = &[$(Self::$variant),*];
        }
    };
}

inst_ids! {
    /// Illegal or unrecognized instruction (the sentinel record).
    Illegal,

    // RV32I / RV64I
    Lui, Auipc, Jal, Jalr,
    Beq, Bne, Blt, Bge, Bltu, Bgeu,
    Lb, Lh, Lw, Lbu, Lhu, Lwu, Ld,
    Sb, Sh, Sw, Sd,
    Addi, Slti, Sltiu, Xori, Ori, Andi, Slli, Srli, Srai,
    Add, Sub, Sll, Slt, Sltu, Xor, Srl, Sra, Or, And,
    Fence, Ecall, Ebreak,
    Addiw, Slliw, Srliw, Sraiw, Addw, Subw, Sllw, Srlw, Sraw,

    // Privileged
    Mret, Sret, Wfi, SfenceVma,

    // Zifencei
    FenceI,

    // Zicsr
    Csrrw, Csrrs, Csrrc, Csrrwi, Csrrsi, Csrrci,

    // M
    Mul, Mulh, Mulhsu, Mulhu, Div, Divu, Rem, Remu,
    Mulw, Divw, Divuw, Remw, Remuw,

    // A
    LrW, ScW, AmoswapW, AmoaddW, AmoxorW, AmoandW, AmoorW,
    AmominW, AmomaxW, AmominuW, AmomaxuW,
    LrD, ScD, AmoswapD, AmoaddD, AmoxorD, AmoandD, AmoorD,
    AmominD, AmomaxD, AmominuD, AmomaxuD,

    // F
    Flw, Fsw, FmaddS, FmsubS, FnmsubS, FnmaddS,
    FaddS, FsubS, FmulS, FdivS, FsqrtS,
    FsgnjS, FsgnjnS, FsgnjxS, FminS, FmaxS,
    FcvtWS, FcvtWuS, FmvXW, FeqS, FltS, FleS, FclassS,
    FcvtSW, FcvtSWu, FmvWX,
    FcvtLS, FcvtLuS, FcvtSL, FcvtSLu,

    // D
    Fld, Fsd, FmaddD, FmsubD, FnmsubD, FnmaddD,
    FaddD, FsubD, FmulD, FdivD, FsqrtD,
    FsgnjD, FsgnjnD, FsgnjxD, FminD, FmaxD,
    FcvtSD, FcvtDS, FeqD, FltD, FleD, FclassD,
    FcvtWD, FcvtWuD, FcvtDW, FcvtDWu,
    FcvtLD, FcvtLuD, FmvXD, FcvtDL, FcvtDLu, FmvDX,

    // C, quadrant 0
    CAddi4spn, CFld, CLw, CFlw, CLd, CFsd, CSw, CFsw, CSd,
    // C, quadrant 1
    CAddi, CJal, CAddiw, CLi, CAddi16sp, CLui,
    CSrli, CSrai, CAndi, CSub, CXor, COr, CAnd, CSubw, CAddw,
    CJ, CBeqz, CBnez,
    // C, quadrant 2
    CSlli, CFldsp, CLwsp, CFlwsp, CLdsp,
    CJr, CMv, CEbreak, CJalr, CAdd,
    CFsdsp, CSwsp, CFswsp, CSdsp,

    // Zba
    Sh1add, Sh2add, Sh3add, AddUw, Sh1addUw, Sh2addUw, Sh3addUw, SlliUw,

    // Zbb
    Andn, Orn, Xnor, Clz, Ctz, Cpop, Clzw, Ctzw, Cpopw,
    Max, Maxu, Min, Minu, SextB, SextH, ZextHRv32, ZextHRv64,
    Rol, Ror, Rori, Rolw, Rorw, Roriw, OrcB, Rev8Rv32, Rev8Rv64,

    // Zbc
    Clmul, Clmulr, Clmulh,

    // Zbs
    Bclr, Bclri, Bext, Bexti, Binv, Binvi, Bset, Bseti,
}

impl InstId {
    /// Number of distinct identifiers, including `Illegal`.
    pub const COUNT: usize = Self::ALL.len();

    /// Returns the dense index of this identifier.
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Returns the identifier with the given dense index, if any.
    #[inline]
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }
}
