// crates/bigdec-core/src/lib.rs

#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]

pub mod arith;
pub mod decimal;
pub mod fmt;
pub mod limit;

// ---- Re-exports for workspace compatibility ----
pub use arith::*;
pub use decimal::*;
pub use limit::*;

/// One decimal limb holds nine digits: base `10⁹`.
pub const DEC_BASE: u32 = 1_000_000_000;

/// Decimal digits per limb.
pub const FIGS_PER_LIMB: usize = 9;

/// Smallest limb count at which `mult` hands the limb product to the
/// three-prime NTT kernel instead of schoolbook.
pub const NTT_MUL_THRESHOLD: usize = 64;
