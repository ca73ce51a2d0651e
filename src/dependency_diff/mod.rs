//! Dependency tree comparison core.
//!
//! Pure, synchronous logic with no I/O: text goes in, a [`domain::DiffReport`]
//! comes out. Parsing, noise filtering and tree building are shared by every
//! diff strategy.
pub mod domain;
pub mod policies;
pub mod services;
