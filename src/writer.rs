//! Output adapters for the cleaned material table.
//!
//! All three formats are produced from the same cleaned table. CSV and
//! NDJSON go through a polars `DataFrame` of string columns; the
//! spreadsheet writer emits cells directly. The output file is only created
//! once the table is fully cleaned, so a failed run leaves no partial
//! output behind.

use std::fs::{self, File};
use std::path::PathBuf;

use polars::prelude::{Column, CsvWriter, DataFrame, JsonFormat, JsonWriter, SerWriter};
use tracing::{debug, info};

use crate::config::OutputFormat;
use crate::constants::{output_filename, RESULT_SHEET};
use crate::error::Result;
use crate::models::MaterialTable;

/// Writer for the cleaned table, parameterized by output format
#[derive(Debug)]
pub struct OutputWriter {
    output_dir: PathBuf,
    format: OutputFormat,
}

impl OutputWriter {
    /// Create a writer targeting `output_dir/output.<ext>`
    pub fn new(output_dir: impl Into<PathBuf>, format: OutputFormat) -> Self {
        Self {
            output_dir: output_dir.into(),
            format,
        }
    }

    /// Serialize the table, creating the output directory if needed.
    ///
    /// Returns the path written.
    pub fn write(&self, table: &MaterialTable) -> Result<PathBuf> {
        fs::create_dir_all(&self.output_dir)?;
        let path = self
            .output_dir
            .join(output_filename(self.format.extension()));

        match self.format {
            OutputFormat::Csv => self.write_csv(table, &path)?,
            OutputFormat::Json => self.write_ndjson(table, &path)?,
            OutputFormat::Xlsx => self.write_xlsx(table, &path)?,
        }

        info!("Wrote {} records to {}", table.row_count(), path.display());
        Ok(path)
    }

    /// Comma-separated values with a header row, no index column
    fn write_csv(&self, table: &MaterialTable, path: &PathBuf) -> Result<()> {
        let mut df = to_dataframe(table)?;
        let mut file = File::create(path)?;
        CsvWriter::new(&mut file)
            .include_header(true)
            .finish(&mut df)?;
        Ok(())
    }

    /// Line-delimited JSON: one object per record, canonical column name to
    /// cleaned value
    fn write_ndjson(&self, table: &MaterialTable, path: &PathBuf) -> Result<()> {
        let mut df = to_dataframe(table)?;
        let mut file = File::create(path)?;
        JsonWriter::new(&mut file)
            .with_json_format(JsonFormat::JsonLines)
            .finish(&mut df)?;
        Ok(())
    }

    /// Spreadsheet with one worksheet named after the result schema sheet
    fn write_xlsx(&self, table: &MaterialTable, path: &PathBuf) -> Result<()> {
        let mut workbook = rust_xlsxwriter::Workbook::new();
        let worksheet = workbook.add_worksheet();
        worksheet.set_name(RESULT_SHEET)?;

        for (col, name) in table.columns().iter().enumerate() {
            worksheet.write_string(0, col as u16, name)?;
        }
        for (row, record) in table.rows().iter().enumerate() {
            for (col, cell) in record.iter().enumerate() {
                worksheet.write_string((row + 1) as u32, col as u16, cell)?;
            }
        }

        workbook.save(path)?;
        Ok(())
    }
}

/// Build a string-column DataFrame from the cleaned table
fn to_dataframe(table: &MaterialTable) -> Result<DataFrame> {
    let columns = table
        .columns()
        .iter()
        .enumerate()
        .map(|(index, name)| {
            let values: Vec<&str> = table.rows().iter().map(|row| row[index].as_str()).collect();
            Column::new(name.as_str().into(), values)
        })
        .collect();

    let df = DataFrame::new(columns)?;
    debug!("Built output frame: {} x {}", df.height(), df.width());
    Ok(df)
}
