//! Embedded word pools
//!
//! Word pools compiled into the binary at build time.

// Include generated word pools from build script
include!(concat!(env!("OUT_DIR"), "/pools.rs"));
