//! Spreadsheet output.
//!
//! `TableExporter` writes a batch into a single worksheet: a bold, highlighted
//! header row followed by one row per record, every column set to the same width.

use std::path::Path;

use log::info;
use rust_xlsxwriter::{Color, Format, Workbook, Worksheet, XlsxError};
use strum::IntoEnumIterator;

use crate::error::SheetError;
use crate::quote::{Cell, Column, QuoteRecord};

/// Worksheet name used for the export.
pub const SHEET_NAME: &str = "Sheet1";
/// Header background color (light green).
pub const HEADER_COLOR: u32 = 0xC6EFCE;
/// Width applied to every column.
pub const COLUMN_WIDTH: f64 = 18.0;

/// Writes quote batches to `.xlsx` files.
#[derive(Debug, Clone, PartialEq)]
pub struct TableExporter {
    sheet_name: String,
    header_color: u32,
    column_width: f64,
}

impl Default for TableExporter {
    fn default() -> Self {
        Self {
            sheet_name: SHEET_NAME.to_string(),
            header_color: HEADER_COLOR,
            column_width: COLUMN_WIDTH,
        }
    }
}

impl TableExporter {
    /// Writes `batch` to `path`, replacing any existing file.
    ///
    /// Fails with [`SheetError::Output`] if the file cannot be written.
    pub fn export(&self, batch: &[QuoteRecord], path: &Path) -> Result<(), SheetError> {
        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();
        self.fill(worksheet, batch)?;
        workbook.save(path)?;

        info!("Wrote {} row(s) to {}", batch.len(), path.display());
        Ok(())
    }

    fn fill(&self, worksheet: &mut Worksheet, batch: &[QuoteRecord]) -> Result<(), XlsxError> {
        worksheet.set_name(&self.sheet_name)?;

        let header_format = Format::new()
            .set_bold()
            .set_background_color(Color::RGB(self.header_color));

        for (col, column) in Column::iter().enumerate() {
            let col = col as u16;
            worksheet.write_string_with_format(0, col, column.to_string(), &header_format)?;
            worksheet.set_column_width(col, self.column_width)?;
        }

        for (index, record) in batch.iter().enumerate() {
            let row = index as u32 + 1;
            for (col, column) in Column::iter().enumerate() {
                let col = col as u16;
                match record.cell(column) {
                    Cell::Text(text) => worksheet.write_string(row, col, text)?,
                    Cell::Number(value) => worksheet.write_number(row, col, value)?,
                };
            }
        }
        Ok(())
    }
}
