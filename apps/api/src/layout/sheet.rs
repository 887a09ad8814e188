//! Print-sheet layout constants.
//!
//! Heights are approximate rendered heights in CSS pixels on a US Letter
//! sheet (8.5" × 11") at 96dpi, with margins applied by the print surface.
//! These are coarse estimates tuned against real print output, not measured
//! glyph metrics — the budget check only needs to be right about where page
//! breaks land, and a question never gets split across sheets anyway.

use serde::{Deserialize, Serialize};

/// Tunable layout parameters for a single printable worksheet sheet.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SheetConfig {
    /// Usable content height per sheet.
    pub page_height: u32,
    /// Title block (quiz name, breadcrumb, difficulty). Drawn once, on the
    /// first sheet only, and charged only against that sheet's budget.
    pub header_height: u32,
    /// Question stem: number, text, surrounding spacing.
    pub question_base_height: u32,
    /// One answer-choice row.
    pub option_height: u32,
    /// The write-in line shown when answer choices are suppressed. Sized
    /// separately from the option rows; see print.css before retuning.
    pub blank_answer_height: u32,
}

/// Default config for US Letter worksheets.
pub fn default_sheet_config() -> SheetConfig {
    SheetConfig {
        page_height: 1400,
        header_height: 200,
        question_base_height: 60,
        option_height: 25,
        blank_answer_height: 40,
    }
}
