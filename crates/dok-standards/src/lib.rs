#![deny(unsafe_code)]

//! Standards loading: subject CSV files in, grade-indexed JSON out.
//!
//! The loader reads one CSV per subject (`subject, grade_or_band, code,
//! statement`), groups the formatted standards by grade band, orders the
//! bands with [`grade_sort_key`], and writes `{"grades": {...}}` JSON.

pub mod config;
pub mod csv;
pub mod error;
pub mod grades;
pub mod seed;

pub use crate::config::{SeedConfig, SeedLayout, SubjectFile};
pub use crate::csv::{StandardRow, read_standard_rows};
pub use crate::error::StandardsError;
pub use crate::grades::{GradeIndex, format_standard, grade_sort_key};
pub use crate::seed::{SeedMode, SeedReport, SeedStatus, SubjectReport, render_subject, seed};
