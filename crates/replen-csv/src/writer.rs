//! CSV writer

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::error::CsvResult;
use crate::options::{CsvWriteOptions, LineTerminator};
use replen_core::Sheet;

/// CSV file writer
pub struct CsvWriter;

impl CsvWriter {
    /// Write a sheet to a CSV file
    pub fn write_file<P: AsRef<Path>>(
        sheet: &Sheet,
        path: P,
        options: &CsvWriteOptions,
    ) -> CsvResult<()> {
        let file = File::create(path)?;
        Self::write(sheet, file, options)
    }

    /// Write a sheet to a writer
    pub fn write<W: Write>(sheet: &Sheet, writer: W, options: &CsvWriteOptions) -> CsvResult<()> {
        let terminator = match options.line_terminator {
            LineTerminator::LF => csv::Terminator::Any(b'\n'),
            LineTerminator::CRLF => csv::Terminator::CRLF,
            LineTerminator::CR => csv::Terminator::Any(b'\r'),
        };

        let mut csv_writer = csv::WriterBuilder::new()
            .delimiter(options.delimiter)
            .quote(options.quote)
            .terminator(terminator)
            .from_writer(writer);

        if options.write_header {
            csv_writer.write_record(sheet.columns())?;
        }

        for row in sheet.rows() {
            let record: Vec<String> = row.iter().map(|value| value.to_string()).collect();
            csv_writer.write_record(&record)?;
        }

        csv_writer.flush()?;
        Ok(())
    }
}
