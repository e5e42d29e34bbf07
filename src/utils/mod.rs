//! Shared helpers: input limits and residue validation.

pub mod validation;
