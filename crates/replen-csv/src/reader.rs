//! CSV reader

use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::error::CsvResult;
use crate::options::CsvReadOptions;
use replen_core::{CellValue, Sheet};

/// CSV file reader
pub struct CsvReader;

impl CsvReader {
    /// Read a CSV file into a sheet
    pub fn read_file<P: AsRef<Path>>(path: P, options: &CsvReadOptions) -> CsvResult<Sheet> {
        let file = File::open(path)?;
        Self::read(file, options)
    }

    /// Read CSV from a reader into a sheet.
    ///
    /// With `has_header` the first row becomes the sheet's column headers;
    /// otherwise columns get positional names (`1`, `2`, ...) sized to the
    /// first record. Invalid UTF-8 anywhere aborts the whole read.
    pub fn read<R: Read>(reader: R, options: &CsvReadOptions) -> CsvResult<Sheet> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .delimiter(options.delimiter)
            .quote(options.quote)
            .has_headers(options.has_header)
            .flexible(true)
            .from_reader(reader);

        let mut sheet = Sheet::new("Sheet1");

        if options.has_header {
            let headers = csv_reader.headers()?.clone();
            sheet.set_columns(headers.iter());
        }

        for result in csv_reader.records() {
            let record = result?;

            if sheet.column_count() == 0 {
                sheet.set_columns((1..=record.len()).map(|i| i.to_string()));
            }

            let row = record
                .iter()
                .map(|field| {
                    if options.auto_detect_types {
                        Self::detect_type(field)
                    } else {
                        CellValue::string(field)
                    }
                })
                .collect();

            sheet.push_row(row);
        }

        Ok(sheet)
    }

    /// Detect the type of a field value.
    ///
    /// "1" and "0" stay numeric here; item codes and quantities must never
    /// be coerced to booleans.
    fn detect_type(field: &str) -> CellValue {
        let field = field.trim();

        if field.is_empty() {
            return CellValue::Empty;
        }

        match field {
            "true" | "TRUE" => return CellValue::Boolean(true),
            "false" | "FALSE" => return CellValue::Boolean(false),
            _ => {}
        }

        if let Ok(n) = field.parse::<f64>() {
            return CellValue::Number(n);
        }

        CellValue::string(field)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CsvError;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_read_with_header() {
        let data = "商品编码,销售数量\n10001,100\n10002,abc\n";
        let sheet = CsvReader::read(data.as_bytes(), &CsvReadOptions::default()).unwrap();

        assert_eq!(sheet.columns(), &["商品编码", "销售数量"]);
        assert_eq!(sheet.row_count(), 2);
        assert_eq!(sheet.value_at(0, 0), CellValue::Number(10001.0));
        assert_eq!(sheet.value_at(0, 1), CellValue::Number(100.0));
        assert_eq!(sheet.value_at(1, 1), CellValue::string("abc"));
    }

    #[test]
    fn test_read_without_header() {
        let options = CsvReadOptions {
            has_header: false,
            ..CsvReadOptions::default()
        };
        let sheet = CsvReader::read("a,b\nc,d\n".as_bytes(), &options).unwrap();

        assert_eq!(sheet.columns(), &["1", "2"]);
        assert_eq!(sheet.row_count(), 2);
    }

    #[test]
    fn test_read_without_type_detection() {
        let options = CsvReadOptions {
            auto_detect_types: false,
            ..CsvReadOptions::default()
        };
        let sheet = CsvReader::read("code\n10001\n".as_bytes(), &options).unwrap();
        assert_eq!(sheet.value_at(0, 0), CellValue::string("10001"));
    }

    #[test]
    fn test_detect_type() {
        assert_eq!(CsvReader::detect_type(""), CellValue::Empty);
        assert_eq!(CsvReader::detect_type(" 42 "), CellValue::Number(42.0));
        assert_eq!(CsvReader::detect_type("-1.5"), CellValue::Number(-1.5));
        assert_eq!(CsvReader::detect_type("1"), CellValue::Number(1.0));
        assert_eq!(CsvReader::detect_type("0"), CellValue::Number(0.0));
        assert_eq!(CsvReader::detect_type("true"), CellValue::Boolean(true));
        assert_eq!(CsvReader::detect_type("缺货"), CellValue::string("缺货"));
    }

    #[test]
    fn test_invalid_utf8_aborts_read() {
        let mut data = b"code,qty\n".to_vec();
        data.extend_from_slice(&[0xff, 0xfe, b',', b'1', b'\n']);

        let err = CsvReader::read(data.as_slice(), &CsvReadOptions::default()).unwrap_err();
        assert!(matches!(err, CsvError::Encoding { .. }));
    }
}
