//! Numbering scheme catalog.
//!
//! Each supported scheme is a variant of the closed [`SchemeKind`] enum and
//! carries a static table of region boundaries. Boundaries are half-open
//! `[start, end)` intervals on a reference numbering; the final framework
//! region is open-ended and runs to the end of the annotated sequence.
//!
//! | Scheme   | FR1  | CDR1  | FR2   | CDR2  | FR3   | CDR3   | FR4    |
//! |----------|------|-------|-------|-------|-------|--------|--------|
//! | Kabat    | 0-23 | 23-31 | 31-48 | 48-56 | 56-71 | 71-88  | 88-    |
//! | IMGT     | 0-26 | 26-34 | 34-54 | 54-61 | 61-85 | 85-100 | 100-   |
//! | Chothia  | 0-24 | 24-32 | 32-53 | 53-61 | 61-82 | 82-98  | 98-    |
//! | Honegger | 0-25 | 25-33 | 33-55 | 55-65 | 65-75 | 75-87  | 87-    |
//!
//! These are fixed positional tables, not germline-anchored numbering.
//!
//! ## Example
//!
//! ```rust
//! use abseq::catalog::store::SchemeRegistry;
//!
//! let registry = SchemeRegistry::builtin();
//! let kabat = registry.get("Kabat").unwrap();
//! assert_eq!(kabat.regions[1].name, "CDR1");
//! assert!(registry.get("unknown").is_err());
//! ```
//!
//! [`SchemeKind`]: schemes::SchemeKind

pub mod schemes;
pub mod store;
