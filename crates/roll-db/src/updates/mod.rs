//! Update builder types for entity mutations.
//!
//! Each builder produces an update struct with `Option` fields. Only `Some`
//! fields replace stored values; the merged row is validated before it is
//! written.

pub mod class;
