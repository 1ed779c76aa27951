//! # Somali ID Validator
//!
//! Validation engine for Somali national identity records. This crate
//! checks untrusted records against a [`Rule`](somalid_core::Rule) and
//! normalizes them, including:
//!
//! - Id number checks (digits only, length, prefix, separator stripping)
//! - Name checks (character set, length, whitespace normalization)
//! - Sex normalization
//! - Date parsing in four formats, calendar validation and ordering checks
//! - Batch validation with aggregate statistics
//! - Masking and redaction for logs and exports
//!
//! ## Example
//!
//! ```rust
//! use somalid_core::{ErrorCode, RawRecord, Rule};
//! use somalid_validator::{IdValidator, MaskSpec, mask_id};
//!
//! let validator = IdValidator::new();
//! let record = RawRecord::new(
//!     "9342-6578-2412",
//!     "  Ahmed   Hassan Mohamed ",
//!     "m",
//!     "15-03-1990",
//!     "01/01/2020",
//!     "2099-01-01",
//! );
//!
//! match validator.validate_record(&record, &Rule::default()) {
//!     Ok(valid) => {
//!         assert_eq!(valid.name, "Ahmed Hassan Mohamed");
//!         assert_eq!(mask_id(&valid.id_number, MaskSpec::default()), "93*******412");
//!     }
//!     Err(err) => panic!("unexpected {}: {}", err.code(), err),
//! }
//!
//! let mut bad = record.clone();
//! bad.date_of_issue = "31-04-2020".to_string();
//! let err = validator.validate_record(&bad, &Rule::default()).unwrap_err();
//! assert_eq!(err.code(), ErrorCode::InvalidDate);
//! ```

mod batch;
mod checksum;
mod dates;
mod engine;
mod fields;
mod guard;
mod privacy;

pub use batch::*;
pub use checksum::*;
pub use dates::*;
pub use engine::*;
pub use fields::*;
pub use guard::*;
pub use privacy::*;
