//! Assorted types, not tied to a particular module.

pub mod err;
