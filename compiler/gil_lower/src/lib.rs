//! Type lowering for the gil backend.
//!
//! Converts source types from the frontend's [`Pool`](gil_types::Pool) into
//! target IR types ([`TargetType`](gil_ir::TargetType)), making the ABI
//! decisions for every source construct along the way:
//!
//! | Source | Target |
//! |---|---|
//! | `int`, `uint`, `uintptr` | `iW` |
//! | `string` | `{ i8*, i64 }` |
//! | `[]T` | `{ T*, i64, i64 }` |
//! | `map`, `chan` | `{}*` |
//! | `interface` | `{ {}*, {}* }` |
//! | `func(P) R` | `{ R ({}*, P)*, {}* }` |
//! | named struct / func | `%Name.N` record in the module |
//!
//! `iW` is the machine word from [`LowerConfig`].
//!
//! # Key Types
//!
//! - [`TypeLowerer`]: the engine, with its translation cache
//! - [`Classifier`]: type predicates for code generation
//! - [`NamedTypeRegistry`]: unique labels for named records
//!
//! # Debug Environment Variables
//!
//! - `RUST_LOG=gil_lower=debug`: log record registration and declarations.
//! - `RUST_LOG=gil_lower=trace`: also log every cache hit.

mod basic;
mod classify;
mod config;
pub mod declare;
mod error;
pub mod layout;
mod lower;
mod registry;

use std::sync::Once;

pub use basic::lower_basic;
pub use classify::Classifier;
pub use config::{LowerConfig, WordSize};
pub use error::{ConfigError, LayoutError, LowerError};
pub use lower::TypeLowerer;
pub use registry::NamedTypeRegistry;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing subscriber for debug output.
///
/// Call this once at startup. Safe to call multiple times.
/// Enable with `RUST_LOG=gil_lower=debug` or `RUST_LOG=gil_lower=trace`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .init();
        }
    });
}
