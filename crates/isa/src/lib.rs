//! RISC-V instruction table library.
//!
//! This crate holds the instruction-encoding metadata the rvsim decoder consults
//! to turn a raw 16/32-bit instruction word into a structured operation:
//! 1. **Encoding:** Size conventions and field extraction for raw instruction words.
//! 2. **Records:** Immutable per-variant records (fixed bits, operand shape, classification).
//! 3. **Population:** Per-extension tables for RV32/RV64 I, M, A, F, D, C, Zicsr, Zifencei,
//!    privileged and the Zba/Zbb/Zbc/Zbs bit-manipulation extensions.
//! 4. **Registry:** Lookup by identifier, mnemonic or encoding, falling back to the
//!    illegal-instruction sentinel on every miss.
//!
//! # Sentinel on miss
//!
//! No lookup returns an error. A miss yields the table's single illegal-instruction
//! record, and callers detect the miss through [`InstTable::is_illegal`] (or by
//! comparing [`InstEntry::inst_id`] against [`InstId::Illegal`]). The decode stage
//! turns that record into an illegal-instruction trap.

/// Common types (construction-time errors).
pub mod common;
/// Instruction table configuration (XLEN, enabled extensions).
pub mod config;
/// Instruction set (encoding helpers, identifiers, records, population, registry).
pub mod isa;

/// Table configuration; use `TableConfig::default()` or load it from JSON.
pub use crate::config::TableConfig;
/// Instruction record and its build-time companion.
pub use crate::isa::entry::{InstEntry, InstEntryBuilder};
/// Closed enumeration of instruction identifiers.
pub use crate::isa::inst_id::InstId;
/// Instruction registry; construct with `InstTable::new`.
pub use crate::isa::table::InstTable;
