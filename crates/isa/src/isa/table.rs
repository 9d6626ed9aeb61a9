//! Instruction registry.
//!
//! `InstTable` owns every record of one ISA profile and answers three kinds of
//! lookup:
//! 1. **By identifier:** direct indexing through a dense `InstId` index.
//! 2. **By mnemonic:** a one-to-many name relation; shared mnemonics resolve
//!    to the first record available in the table's XLEN.
//! 3. **By encoding:** candidate buckets keyed by the major opcode (32-bit
//!    words) or by quadrant and funct3 (16-bit parcels), each sorted so that
//!    the most specific encoding is tried first.
//!
//! Every miss answers with the sentinel record stored at position 0.

use std::cmp::Reverse;
use std::collections::HashMap;
use std::fmt;
use std::iter::Skip;
use std::slice;

use crate::common::error::{EntryError, TableError};
use crate::config::{TableConfig, Xlen};
use crate::isa::entry::{InstEntry, InstEntryBuilder};
use crate::isa::inst_id::InstId;
use crate::isa::instruction::{is_compressed_inst, InstructionBits};
use crate::isa::populate;

/// Position of the sentinel record in `entries`.
const SENTINEL: usize = 0;

/// Number of 32-bit buckets: one per 7-bit major opcode.
const FULL_BUCKETS: usize = 1 << 7;

/// Number of 16-bit buckets: funct3 (3 bits) above quadrant (2 bits).
const COMPRESSED_BUCKETS: usize = 1 << 5;

/// Low half-word of a compressed instruction.
const PARCEL_MASK: u32 = 0xFFFF;

/// Records sharing one mnemonic.
#[derive(Debug)]
struct Aliases {
    /// Position of the record a name lookup returns.
    default: usize,
    /// Every identifier registered under the name, in registration order.
    ids: Vec<InstId>,
}

/// Registry of instruction records for one ISA profile.
///
/// Built once, then read-only; lookups borrow records from the table.
pub struct InstTable {
    xlen: Xlen,
    entries: Vec<InstEntry>,
    by_id: Vec<usize>,
    by_name: HashMap<String, Aliases>,
    full_buckets: Vec<Vec<usize>>,
    compressed_buckets: Vec<Vec<usize>>,
}

impl InstTable {
    /// Builds the table of every instruction in the enabled extensions.
    ///
    /// Records are registered for both register widths; `config.xlen` only
    /// decides which of two aliased records a name or encoding lookup sees.
    pub fn new(config: &TableConfig) -> Self {
        if let Err(err) = config.validate() {
            tracing::warn!(%err, "building instruction table from an inconsistent configuration");
        }

        let mut table = Self::empty(config.xlen);
        for builder in populate::builders(config) {
            let name = builder.name().to_owned();
            match builder.build() {
                Ok(entry) => {
                    if let Err(err) = table.register(entry) {
                        tracing::warn!(%err, name = %name, "skipping instruction record");
                    }
                }
                Err(err) => tracing::error!(%err, name = %name, "malformed instruction record"),
            }
        }
        table.index();

        tracing::debug!(
            xlen = config.xlen.bits(),
            records = table.len(),
            names = table.by_name.len(),
            "instruction table built"
        );
        table
    }

    /// Builds a table from caller-supplied records, in registration order.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::Entry`] for a record that fails validation,
    /// [`TableError::ReservedId`] for a record claiming `InstId::Illegal`, and
    /// [`TableError::DuplicateId`] when an identifier is registered twice.
    pub fn try_from_entries<I>(xlen: Xlen, builders: I) -> Result<Self, TableError>
    where
        I: IntoIterator<Item = InstEntryBuilder>,
    {
        let mut table = Self::empty(xlen);
        for builder in builders {
            table.register(builder.build()?)?;
        }
        table.index();
        Ok(table)
    }

    fn empty(xlen: Xlen) -> Self {
        Self {
            xlen,
            entries: vec![InstEntry::illegal()],
            by_id: vec![SENTINEL; InstId::COUNT],
            by_name: HashMap::new(),
            full_buckets: vec![Vec::new(); FULL_BUCKETS],
            compressed_buckets: vec![Vec::new(); COMPRESSED_BUCKETS],
        }
    }

    fn register(&mut self, entry: InstEntry) -> Result<(), TableError> {
        let id = entry.inst_id();
        if id == InstId::Illegal {
            return Err(TableError::ReservedId {
                name: entry.name().to_owned(),
            });
        }
        if self.by_id[id.index()] != SENTINEL {
            return Err(TableError::DuplicateId {
                id,
                name: entry.name().to_owned(),
            });
        }

        let position = self.entries.len();
        self.by_id[id.index()] = position;
        self.by_name
            .entry(entry.name().to_owned())
            .or_insert_with(|| Aliases {
                default: position,
                ids: Vec::new(),
            })
            .ids
            .push(id);
        self.entries.push(entry);
        Ok(())
    }

    /// Resolves name defaults and fills the encoding buckets.
    fn index(&mut self) {
        let (by_id, entries, xlen) = (&self.by_id, &self.entries, self.xlen);
        for aliases in self.by_name.values_mut() {
            let available = aliases
                .ids
                .iter()
                .map(|id| by_id[id.index()])
                .find(|&position| entries[position].xlen_support().supports(xlen));
            if let Some(position) = available {
                aliases.default = position;
            }
        }

        for (position, entry) in self.entries.iter().enumerate().skip(1) {
            if entry.is_compressed() {
                for key in 0..COMPRESSED_BUCKETS {
                    if key_reaches(entry, key) {
                        self.compressed_buckets[key].push(position);
                    }
                }
            } else {
                let opcode_mask = entry.code_mask() & 0x7F;
                for key in 0..FULL_BUCKETS {
                    if key as u32 & opcode_mask == entry.code() & opcode_mask {
                        self.full_buckets[key].push(position);
                    }
                }
            }
        }

        let entries = &self.entries;
        for bucket in self
            .full_buckets
            .iter_mut()
            .chain(self.compressed_buckets.iter_mut())
        {
            bucket.sort_by_key(|&position| Reverse(entries[position].code_mask().count_ones()));
        }
    }

    /// Returns the record of the given identifier, or the sentinel if the
    /// identifier is not populated.
    #[inline]
    pub fn get_entry(&self, id: InstId) -> &InstEntry {
        &self.entries[self.by_id[id.index()]]
    }

    /// Returns the record of the given mnemonic, or the sentinel if no record
    /// has that name.
    ///
    /// When several records share the mnemonic, the first one registered for
    /// the table's XLEN is returned.
    pub fn get_entry_by_name(&self, name: &str) -> &InstEntry {
        self.by_name.get(name).map_or_else(
            || {
                tracing::trace!(name, "no instruction with this name");
                self.illegal()
            },
            |aliases| &self.entries[aliases.default],
        )
    }

    /// Returns true if the identifier has a record of its own.
    pub fn has_info(&self, id: InstId) -> bool {
        self.by_id[id.index()] != SENTINEL
    }

    /// Returns true if some record has the given mnemonic.
    pub fn has_info_by_name(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    /// Returns every identifier registered under `name`, in registration order.
    pub fn aliases(&self, name: &str) -> &[InstId] {
        self.by_name
            .get(name)
            .map_or(&[][..], |aliases| aliases.ids.as_slice())
    }

    /// Returns the record matching the encoded instruction, or the sentinel.
    ///
    /// Compressed words are matched on their low 16 bits against compressed
    /// records only; full-size words against 32-bit records only. Records
    /// absent from the table's XLEN are skipped, and RV32 rejects encodings that
    /// set a record's RV32-reserved bits. Among the remaining matches
    /// the one fixing the most bits wins, then the one registered first.
    pub fn decode(&self, word: u32) -> &InstEntry {
        let candidates = if is_compressed_inst(word) {
            let parcel = word & PARCEL_MASK;
            if parcel == 0 {
                return self.illegal();
            }
            &self.compressed_buckets[compressed_key(parcel)]
        } else {
            &self.full_buckets[word.opcode() as usize]
        };

        candidates
            .iter()
            .map(|&position| &self.entries[position])
            .find(|entry| {
                entry.xlen_support().supports(self.xlen) && entry.matches_xlen(word, self.xlen)
            })
            .unwrap_or_else(|| {
                tracing::trace!(word = %format_args!("{word:#010x}"), "no instruction matches");
                self.illegal()
            })
    }

    /// Returns the sentinel record that answers every lookup miss.
    #[inline]
    pub fn illegal(&self) -> &InstEntry {
        &self.entries[SENTINEL]
    }

    /// Returns true if `entry` is the sentinel record.
    ///
    /// Registration rejects `InstId::Illegal`, so the identifier alone tells
    /// the sentinel apart.
    #[inline]
    pub fn is_illegal(&self, entry: &InstEntry) -> bool {
        entry.inst_id() == self.illegal().inst_id()
    }

    /// Returns the number of registered records, not counting the sentinel.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len() - 1
    }

    /// Returns true if no record is registered.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterates over the registered records in registration order.
    pub fn iter(&self) -> Skip<slice::Iter<'_, InstEntry>> {
        self.entries.iter().skip(1)
    }

    /// Returns the base register width the table resolves aliases for.
    #[inline]
    pub const fn xlen(&self) -> Xlen {
        self.xlen
    }

    /// Re-checks the invariants of every registered record.
    ///
    /// # Errors
    ///
    /// Returns the first record error found.
    pub fn validate(&self) -> Result<(), EntryError> {
        self.iter().try_for_each(InstEntry::validate)
    }
}

impl Default for InstTable {
    /// RV64 with every supported extension.
    fn default() -> Self {
        Self::new(&TableConfig::default())
    }
}

impl fmt::Debug for InstTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InstTable")
            .field("xlen", &self.xlen)
            .field("records", &self.len())
            .finish_non_exhaustive()
    }
}

impl<'a> IntoIterator for &'a InstTable {
    type Item = &'a InstEntry;
    type IntoIter = Skip<slice::Iter<'a, InstEntry>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Bucket of a 16-bit parcel: funct3 (bits 15-13) above the quadrant (bits 1-0).
fn compressed_key(parcel: u32) -> usize {
    ((parcel.c_funct3() << 2) | parcel.quadrant()) as usize
}

/// The quadrant and funct3 bits a compressed bucket stands for.
const fn compressed_key_bits(key: usize) -> u32 {
    let key = key as u32;
    ((key >> 2) << 13) | (key & 0x3)
}

/// Returns true if a parcel in bucket `key` can match the record, judged on
/// the quadrant and funct3 bits alone.
const fn key_reaches(entry: &InstEntry, key: usize) -> bool {
    const KEY_BITS: u32 = 0xE003;
    let mask = entry.code_mask() & KEY_BITS;
    compressed_key_bits(key) & mask == entry.code() & mask
}
