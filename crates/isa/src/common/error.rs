//! Construction-time error definitions.
//!
//! This module defines the errors reported while assembling the instruction table:
//! 1. **Record Errors:** A builder whose encoding or operand shape is inconsistent.
//! 2. **Table Errors:** Identifier clashes while registering records.
//! 3. **Configuration Errors:** Unparseable JSON or an inconsistent extension set.
//!
//! Lookups never produce these; a lookup miss is answered with the sentinel record.

use thiserror::Error;

use crate::config::Extension;
use crate::isa::entry::InstType;
use crate::isa::inst_id::InstId;

/// A record builder failed validation at finalize time.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum EntryError {
    /// The fixed code has bits set outside the code mask.
    #[error("{name}: code {code:#010x} has bits outside code mask {mask:#010x}")]
    CodeOutsideMask {
        /// Mnemonic of the offending record.
        name: String,
        /// Fixed code bits.
        code: u32,
        /// Code mask.
        mask: u32,
    },

    /// An operand specifier overlaps the fixed opcode bits.
    #[error("{name}: operand {index} mask {operand_mask:#010x} overlaps code mask {code_mask:#010x}")]
    OperandOverlapsCode {
        /// Mnemonic of the offending record.
        name: String,
        /// Zero-based operand slot.
        index: usize,
        /// Operand specifier mask.
        operand_mask: u32,
        /// Code mask.
        code_mask: u32,
    },

    /// More operands were supplied than a record can hold.
    #[error("{name}: {count} operands given, at most {max} allowed")]
    TooManyOperands {
        /// Mnemonic of the offending record.
        name: String,
        /// Number of operands supplied.
        count: usize,
        /// Slot capacity.
        max: usize,
    },

    /// An operand slot was populated with an absent type, mode or mask.
    #[error("{name}: operand {index} has no type, mode or mask")]
    EmptyOperand {
        /// Mnemonic of the offending record.
        name: String,
        /// Zero-based operand slot.
        index: usize,
    },

    /// RV32-reserved bits fall outside every operand specifier.
    #[error("{name}: RV32-reserved bits {reserved:#010x} outside operand bits {operand_bits:#010x}")]
    ReservedOutsideOperands {
        /// Mnemonic of the offending record.
        name: String,
        /// RV32-reserved bits.
        reserved: u32,
        /// Union of the operand specifier masks.
        operand_bits: u32,
    },

    /// Load/store transfer sizes disagree with the instruction type.
    #[error("{name}: load size {load_size} / store size {store_size} invalid for {inst_type:?}")]
    TransferSize {
        /// Mnemonic of the offending record.
        name: String,
        /// Instruction classification.
        inst_type: InstType,
        /// Load size in bytes.
        load_size: u32,
        /// Store size in bytes.
        store_size: u32,
    },
}

/// Registering a record in the table failed.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum TableError {
    /// Two records were registered under the same identifier.
    #[error("duplicate instruction id {id:?} (registering {name})")]
    DuplicateId {
        /// The clashing identifier.
        id: InstId,
        /// Mnemonic of the rejected record.
        name: String,
    },

    /// A record claimed the identifier reserved for the sentinel.
    #[error("{name}: id {id:?} is reserved for the illegal-instruction record", id = InstId::Illegal)]
    ReservedId {
        /// Mnemonic of the rejected record.
        name: String,
    },

    /// A record failed validation.
    #[error(transparent)]
    Entry(#[from] EntryError),
}

/// Loading or validating a table configuration failed.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The JSON document could not be deserialized.
    #[error("invalid table configuration: {0}")]
    Parse(#[from] serde_json::Error),

    /// The base integer extension is not enabled.
    #[error("the base integer extension I must be enabled")]
    MissingBase,

    /// An enabled extension depends on one that is not enabled.
    #[error("extension {extension} requires {requires}")]
    MissingDependency {
        /// The extension with an unmet dependency.
        extension: Extension,
        /// The extension it depends on.
        requires: Extension,
    },
}
