//! Lowering configuration.
//!
//! The only platform-dependent decision in type lowering is the width of
//! the machine word, which fixes `int`, `uint` and `uintptr`. Slice and
//! string length fields are 64-bit on every target; pointer size follows
//! the word only in layout queries.

use crate::ConfigError;

/// Width of the target machine word.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum WordSize {
    W32,
    #[default]
    W64,
}

impl WordSize {
    /// Word width in bits.
    #[inline]
    pub const fn bits(self) -> u32 {
        match self {
            Self::W32 => 32,
            Self::W64 => 64,
        }
    }

    /// Word width in bytes.
    #[inline]
    pub const fn bytes(self) -> u64 {
        match self {
            Self::W32 => 4,
            Self::W64 => 8,
        }
    }
}

/// Configuration for a [`TypeLowerer`](crate::TypeLowerer).
///
/// # Example
///
/// ```
/// use gil_lower::{LowerConfig, WordSize};
///
/// let config = LowerConfig::from_triple("wasm32-unknown-unknown");
/// assert_eq!(config.map(|c| c.word_size()), Ok(WordSize::W32));
/// assert_eq!(LowerConfig::default().word_size(), WordSize::W64);
/// ```
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct LowerConfig {
    word: WordSize,
}

impl LowerConfig {
    /// Default configuration: 64-bit words.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Derive the configuration from a target triple
    /// (`<arch>-<vendor>-<os>[-<env>]`).
    ///
    /// # Errors
    ///
    /// Returns an error if the triple has fewer than three components or
    /// names an architecture with an unknown word size.
    pub fn from_triple(triple: &str) -> Result<Self, ConfigError> {
        let parts: Vec<&str> = triple.split('-').collect();
        if parts.len() < 3 || parts.iter().any(|part| part.is_empty()) {
            return Err(ConfigError::InvalidTriple {
                triple: triple.to_string(),
                reason: "expected at least 3 components: <arch>-<vendor>-<os>".to_string(),
            });
        }

        let word = match parts[0] {
            "wasm32" | "i686" | "i386" | "arm" | "armv7" | "thumbv7em" | "riscv32" => {
                WordSize::W32
            }
            "x86_64" | "aarch64" | "arm64" | "wasm64" | "riscv64" | "powerpc64"
            | "powerpc64le" | "s390x" | "mips64" => WordSize::W64,
            arch => {
                return Err(ConfigError::UnsupportedArch {
                    arch: arch.to_string(),
                })
            }
        };
        Ok(Self { word })
    }

    /// Override the word size.
    #[must_use]
    pub fn with_word_size(mut self, word: WordSize) -> Self {
        self.word = word;
        self
    }

    /// Configured word size.
    #[inline]
    pub fn word_size(&self) -> WordSize {
        self.word
    }
}

#[cfg(test)]
mod tests;
