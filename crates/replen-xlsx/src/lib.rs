//! # replen-xlsx
//!
//! XLSX (Office Open XML) writer for replen. Write-only: nothing in the
//! system reads spreadsheets back, so there is no reader here.

mod error;
mod writer;

pub use error::{XlsxError, XlsxResult};
pub use writer::{XlsxWriter, DEFAULT_EXPORT_FILENAME, XLSX_MIME_TYPE};
