//! Command implementations for the skillpatch CLI

pub mod patch;
