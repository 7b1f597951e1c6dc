use pretty_assertions::assert_eq;

use super::*;

#[test]
fn default_is_64_bit() {
    let config = LowerConfig::new();
    assert_eq!(config.word_size(), WordSize::W64);
    assert_eq!(config.word_size().bits(), 64);
    assert_eq!(config.word_size().bytes(), 8);
}

#[test]
fn with_word_size_overrides() {
    let config = LowerConfig::new().with_word_size(WordSize::W32);
    assert_eq!(config.word_size(), WordSize::W32);
    assert_eq!(config.word_size().bits(), 32);
}

#[test]
fn from_triple_32_bit_arches() {
    for triple in [
        "wasm32-unknown-unknown",
        "i686-unknown-linux-gnu",
        "i386-pc-windows-msvc",
        "arm-unknown-linux-gnueabihf",
    ] {
        let config = LowerConfig::from_triple(triple);
        assert_eq!(config.map(|c| c.word_size()), Ok(WordSize::W32), "{triple}");
    }
}

#[test]
fn from_triple_64_bit_arches() {
    for triple in [
        "x86_64-unknown-linux-gnu",
        "aarch64-apple-darwin",
        "wasm64-unknown-unknown",
    ] {
        let config = LowerConfig::from_triple(triple);
        assert_eq!(config.map(|c| c.word_size()), Ok(WordSize::W64), "{triple}");
    }
}

#[test]
fn from_triple_rejects_short_triple() {
    let err = LowerConfig::from_triple("x86_64-linux");
    assert!(matches!(err, Err(ConfigError::InvalidTriple { .. })));

    let err = LowerConfig::from_triple("x86_64--linux");
    assert!(matches!(err, Err(ConfigError::InvalidTriple { .. })));
}

#[test]
fn from_triple_rejects_unknown_arch() {
    let err = LowerConfig::from_triple("z80-unknown-none");
    assert_eq!(
        err,
        Err(ConfigError::UnsupportedArch {
            arch: "z80".to_string()
        })
    );
}
