//! Region source implementations

/// Shared utilities used by source implementations.
pub mod common;

#[cfg(feature = "memory")]
mod memory;
#[cfg(feature = "rest")]
mod rest;

#[cfg(feature = "memory")]
pub use memory::MemoryRegionSource;
#[cfg(feature = "rest")]
pub use rest::RestRegionSource;
