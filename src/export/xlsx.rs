// ABOUTME: XLSX export of stored leads and assessments as one two-sheet workbook
// ABOUTME: Same columns as the CSV export, with numeric cells kept numeric
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 fitform contributors

use super::create_output;
use super::csv::{AssessmentRow, LeadRow, ASSESSMENT_HEADERS, LEAD_HEADERS};
use crate::database::{Lead, StoredAssessment};
use crate::logging::AppLogger;
use fitform_core::errors::AppResult;
use rust_xlsxwriter::{Format, Workbook, Worksheet};
use std::io::Write;
use std::path::Path;

/// Sheet holding one row per lead
pub const LEADS_SHEET: &str = "Leads";
/// Sheet holding one row per assessment
pub const ASSESSMENTS_SHEET: &str = "Assessments";

enum Cell<'a> {
    Text(&'a str),
    Number(f64),
}

impl LeadRow<'_> {
    fn cells(&self) -> [Cell<'_>; 13] {
        [
            Cell::Number(self.id as f64),
            Cell::Text(self.name),
            Cell::Text(self.email),
            Cell::Text(self.phone),
            Cell::Number(f64::from(self.age)),
            Cell::Text(self.gender),
            Cell::Number(self.height_cm),
            Cell::Number(self.weight_kg),
            Cell::Text(self.activity_level),
            Cell::Text(self.goal),
            Cell::Text(self.dietary_prefs),
            Cell::Text(self.allergies),
            Cell::Text(&self.created_at),
        ]
    }
}

impl AssessmentRow<'_> {
    fn cells(&self) -> [Cell<'_>; 13] {
        [
            Cell::Number(self.id as f64),
            Cell::Number(self.lead_id as f64),
            Cell::Text(self.lead_name),
            Cell::Number(self.bmi),
            Cell::Number(self.bmr),
            Cell::Number(self.tdee),
            Cell::Number(self.target_calories),
            Cell::Number(self.protein_g),
            Cell::Number(self.fat_g),
            Cell::Number(self.carbs_g),
            Cell::Text(self.notes),
            Cell::Text(self.posture_findings),
            Cell::Text(&self.created_at),
        ]
    }
}

fn write_sheet<'r, const N: usize>(
    sheet: &mut Worksheet,
    name: &str,
    headers: &[&str; N],
    rows: impl Iterator<Item = [Cell<'r>; N]>,
) -> AppResult<usize> {
    let bold = Format::new().set_bold();
    sheet.set_name(name)?;
    for (col, header) in (0u16..).zip(headers) {
        sheet.write_string_with_format(0, col, *header, &bold)?;
    }
    sheet.set_freeze_panes(1, 0)?;

    let mut count = 0;
    for (row, cells) in (1u32..).zip(rows) {
        for (col, cell) in (0u16..).zip(cells) {
            match cell {
                Cell::Text(text) => sheet.write_string(row, col, text)?,
                Cell::Number(value) => sheet.write_number(row, col, value)?,
            };
        }
        count += 1;
    }
    Ok(count)
}

/// Write leads and assessments to one workbook at `path`
///
/// Returns the number of (lead, assessment) data rows written.
///
/// # Errors
///
/// Returns `ExportError` if the workbook cannot be built or saved
pub fn write_workbook(
    path: &Path,
    leads: &[Lead],
    assessments: &[StoredAssessment],
) -> AppResult<(usize, usize)> {
    let mut workbook = Workbook::new();

    let lead_rows: Vec<LeadRow<'_>> = leads.iter().map(LeadRow::from).collect();
    let lead_count = write_sheet(
        workbook.add_worksheet(),
        LEADS_SHEET,
        &LEAD_HEADERS,
        lead_rows.iter().map(LeadRow::cells),
    )?;

    let assessment_rows: Vec<AssessmentRow<'_>> =
        assessments.iter().map(AssessmentRow::from).collect();
    let assessment_count = write_sheet(
        workbook.add_worksheet(),
        ASSESSMENTS_SHEET,
        &ASSESSMENT_HEADERS,
        assessment_rows.iter().map(AssessmentRow::cells),
    )?;

    let buffer = workbook.save_to_buffer()?;
    let mut out = create_output(path)?;
    out.write_all(&buffer)?;
    out.flush()?;

    AppLogger::log_export(
        "workbook_xlsx",
        &path.display().to_string(),
        lead_count + assessment_count,
    );
    Ok((lead_count, assessment_count))
}
