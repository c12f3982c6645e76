// ABOUTME: Output collaborators: client report, spreadsheet CSV, and messaging templates
// ABOUTME: Shared file-writing helpers for UTF-8 outputs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 fitform contributors

//! # Exports
//!
//! Everything produced for people outside the tool: the Markdown client
//! report, CSV and XLSX dumps of stored leads, and the lead-to-booking
//! message sequence.

/// Leads and assessments as CSV
pub mod csv;
/// Lead-to-booking message sequence
pub mod messaging;
/// Markdown client report
pub mod report;
/// Leads and assessments as a two-sheet workbook
pub mod xlsx;

pub use messaging::{build_drip_template, write_drip_template};
pub use report::{render_report, write_report, AssessmentBundle};
pub use xlsx::write_workbook;

use fitform_core::errors::{AppError, AppResult};
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

/// UTF-8 byte order mark, so spreadsheet tools detect the encoding
pub const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Create `path` for writing, creating missing parent directories
///
/// # Errors
///
/// Returns `ExportError` if the directory or file cannot be created
pub(crate) fn create_output(path: &Path) -> AppResult<BufWriter<File>> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| {
            AppError::export(format!("Failed to create {}: {e}", parent.display()))
        })?;
    }
    let file = File::create(path)
        .map_err(|e| AppError::export(format!("Failed to create {}: {e}", path.display())))?;
    Ok(BufWriter::new(file))
}

/// Write text to `path`, optionally prefixed with a UTF-8 BOM
///
/// # Errors
///
/// Returns `ExportError` if the file cannot be written
pub(crate) fn write_text(path: &Path, text: &str, with_bom: bool) -> AppResult<()> {
    let mut out = create_output(path)?;
    if with_bom {
        out.write_all(UTF8_BOM)?;
    }
    out.write_all(text.as_bytes())?;
    out.flush()?;
    Ok(())
}
