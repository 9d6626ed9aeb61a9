//! Instruction Set Architecture (ISA) Definitions.
//!
//! Contains the encoding conventions, the instruction identifiers, the instruction
//! records and the registry that maps identifiers, mnemonics and encodings to them.
//!
//! # Layers
//!
//! * `instruction`: Size conventions and field extraction on raw instruction words.
//! * `opcodes`: Major opcodes and field positions shared by the population tables.
//! * `inst_id`: Closed enumeration of every instruction variant.
//! * `entry`: Immutable instruction records and their builder.
//! * `populate`: Per-extension record tables.
//! * `table`: The instruction registry.

/// Instruction record types (operands, classification, record, builder).
pub mod entry;

/// Closed enumeration of instruction identifiers.
pub mod inst_id;

/// Instruction size conventions and bit extraction utilities.
pub mod instruction;

/// Major opcodes and operand field positions.
pub mod opcodes;

/// Per-extension instruction record tables.
mod populate;

/// Instruction registry (lookup by id, name and encoding).
pub mod table;
