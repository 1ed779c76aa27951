//! # Somali ID Core
//!
//! Core data structures and types for the Somali national ID validator.
//!
//! This crate provides the vocabulary shared by the validation engine, the
//! file loaders and the command-line tool. It has no validation behavior of
//! its own.
//!
//! ## Key Concepts
//!
//! - **Rule**: configuration controlling id format, name constraints and date policy
//! - **RawRecord**: untrusted input, one string per field
//! - **ValidatedRecord**: the normalized output of a successful validation
//! - **ValidationError**: a typed failure with a closed-set code and
//!   messages in English, Somali and Arabic
//! - **BatchResult**: per-record outcomes plus aggregate statistics
//!
//! ## Example
//!
//! ```rust
//! use somalid_core::{ErrorCode, Language, RawRecord, ValidationError};
//!
//! let record = RawRecord::new(
//!     "934265782412",
//!     "Ahmed Hassan Mohamed",
//!     "Male",
//!     "15-03-1990",
//!     "01-01-2020",
//!     "01-01-2030",
//! );
//! assert_eq!(record.dates().birth, "15-03-1990");
//!
//! let err = ValidationError::invalid_sex("Sex must be Male/Female");
//! assert_eq!(err.code(), ErrorCode::InvalidSex);
//! assert!(err.message_in(Language::Somali).contains("Jinsiga"));
//! ```

pub mod builder;
pub mod error;
pub mod input;
pub mod locale;
pub mod record;
pub mod report;
pub mod rule;

pub use builder::*;
pub use error::*;
pub use input::*;
pub use locale::*;
pub use record::*;
pub use report::*;
pub use rule::*;
