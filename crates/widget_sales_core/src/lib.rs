//! Widget sales submission primitives.
//!
//! This crate owns the event lookup, the confirmation template, and the
//! response contract. It intentionally excludes AWS SDK and Lambda runtime
//! concerns.

pub mod contract;
