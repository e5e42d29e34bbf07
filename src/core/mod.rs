//! Core data types shared by alignment and annotation.
//!
//! - [`Sequence`]: a named, normalized residue string
//! - [`SequenceValidator`]: turns raw `(name, sequence)` input into a [`Sequence`]
//! - [`RegionKind`], [`ColumnKind`]: result classification types
//!
//! ## Normalization
//!
//! Raw input is uppercased and stripped of whitespace. Validation is permissive
//! by default, so any other character survives into the residue string; the
//! strict validator restricts residues to the IUPAC alphabet.
//!
//! [`Sequence`]: sequence::Sequence
//! [`SequenceValidator`]: sequence::SequenceValidator
//! [`RegionKind`]: types::RegionKind
//! [`ColumnKind`]: types::ColumnKind

pub mod sequence;
pub mod types;
