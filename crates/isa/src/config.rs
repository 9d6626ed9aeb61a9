//! Configuration for the instruction table.
//!
//! This module defines the ISA profile an `InstTable` is built for:
//! 1. **XLEN:** The base register width, which decides how mode-dependent aliases resolve.
//! 2. **Extensions:** The set of extensions whose instructions are populated.
//!
//! Configuration is supplied as JSON (`TableConfig::from_json`) or use
//! `TableConfig::default()` for the full RV64 profile.

use std::fmt;

use serde::Deserialize;

use crate::common::error::ConfigError;

/// Default configuration constants for the instruction table.
mod defaults {
    use super::{Extension, Xlen};

    /// Base register width (64-bit).
    pub const XLEN: Xlen = Xlen::Rv64;

    /// Every extension the table knows how to populate.
    pub const EXTENSIONS: [Extension; 12] = Extension::ALL;
}

/// Base integer register width.
///
/// Several encodings name different instructions in RV32 and RV64 (for example
/// `c.flw` and `c.ld`); the table's XLEN selects which identity a lookup sees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Xlen {
    /// 32-bit base (RV32).
    #[serde(alias = "Rv32", alias = "rv32")]
    Rv32,
    /// 64-bit base (RV64).
    #[default]
    #[serde(alias = "Rv64", alias = "rv64")]
    Rv64,
}

impl Xlen {
    /// Returns the register width in bits.
    pub const fn bits(self) -> u32 {
        match self {
            Self::Rv32 => 32,
            Self::Rv64 => 64,
        }
    }
}

/// RISC-V standard extensions the table can populate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
pub enum Extension {
    /// Base integer instruction set (including privileged instructions).
    I,
    /// Integer multiplication and division.
    M,
    /// Atomic memory operations.
    A,
    /// Single-precision floating point.
    F,
    /// Double-precision floating point.
    D,
    /// Compressed 16-bit instructions.
    C,
    /// Control and status register instructions.
    #[serde(alias = "ZICSR")]
    Zicsr,
    /// Instruction-fetch fence.
    #[serde(alias = "ZIFENCEI")]
    Zifencei,
    /// Address generation bit manipulation.
    #[serde(alias = "ZBA")]
    Zba,
    /// Basic bit manipulation.
    #[serde(alias = "ZBB")]
    Zbb,
    /// Carry-less multiplication.
    #[serde(alias = "ZBC")]
    Zbc,
    /// Single-bit instructions.
    #[serde(alias = "ZBS")]
    Zbs,
}

impl Extension {
    /// Every supported extension, in canonical ISA-string order.
    pub const ALL: [Self; 12] = [
        Self::I,
        Self::M,
        Self::A,
        Self::F,
        Self::D,
        Self::C,
        Self::Zicsr,
        Self::Zifencei,
        Self::Zba,
        Self::Zbb,
        Self::Zbc,
        Self::Zbs,
    ];

    /// Returns the extension name as written in an ISA string.
    pub const fn name(self) -> &'static str {
        match self {
            Self::I => "I",
            Self::M => "M",
            Self::A => "A",
            Self::F => "F",
            Self::D => "D",
            Self::C => "C",
            Self::Zicsr => "Zicsr",
            Self::Zifencei => "Zifencei",
            Self::Zba => "Zba",
            Self::Zbb => "Zbb",
            Self::Zbc => "Zbc",
            Self::Zbs => "Zbs",
        }
    }

    /// Returns the extension this one cannot be enabled without, if any.
    pub const fn requires(self) -> Option<Self> {
        match self {
            Self::F => Some(Self::Zicsr),
            Self::D => Some(Self::F),
            _ => None,
        }
    }
}

impl fmt::Display for Extension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// ISA profile an instruction table is built for.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TableConfig {
    /// Base register width used to resolve mode-dependent aliases.
    #[serde(default = "TableConfig::default_xlen")]
    pub xlen: Xlen,

    /// Extensions whose instructions are populated.
    #[serde(default = "TableConfig::default_extensions")]
    pub extensions: Vec<Extension>,
}

impl TableConfig {
    /// Returns the default base register width.
    fn default_xlen() -> Xlen {
        defaults::XLEN
    }

    /// Returns the default extension set (everything supported).
    fn default_extensions() -> Vec<Extension> {
        defaults::EXTENSIONS.to_vec()
    }

    /// Parses and validates a configuration from a JSON document.
    ///
    /// Missing fields take their defaults, so `{}` yields the full RV64 profile.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON, or the validation error
    /// reported by [`TableConfig::validate`].
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that the extension set is self-consistent.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingBase`] when `I` is absent and
    /// [`ConfigError::MissingDependency`] when an extension's prerequisite is absent.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.is_enabled(Extension::I) {
            return Err(ConfigError::MissingBase);
        }
        for &extension in &self.extensions {
            if let Some(requires) = extension.requires() {
                if !self.is_enabled(requires) {
                    return Err(ConfigError::MissingDependency {
                        extension,
                        requires,
                    });
                }
            }
        }
        Ok(())
    }

    /// Returns true if the given extension is enabled.
    pub fn is_enabled(&self, extension: Extension) -> bool {
        self.extensions.contains(&extension)
    }

    /// Returns this configuration with a different base register width.
    #[must_use]
    pub fn with_xlen(mut self, xlen: Xlen) -> Self {
        self.xlen = xlen;
        self
    }

    /// Returns this configuration with the given extension set.
    #[must_use]
    pub fn with_extensions(mut self, extensions: &[Extension]) -> Self {
        self.extensions = extensions.to_vec();
        self
    }
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            xlen: defaults::XLEN,
            extensions: defaults::EXTENSIONS.to_vec(),
        }
    }
}
