//! # replen
//!
//! Store replenishment quantity calculator.
//!
//! Reads a sales/inventory CSV table, computes per-item replenishment
//! ("demand") quantities, and exports the result as a single-sheet XLSX
//! workbook or a CSV file.
//!
//! ## Example
//!
//! ```rust
//! use replen::prelude::*;
//!
//! let csv = "商品编码,销售数量,门店库存,中包装数\n10001,100,10,7\n";
//! let input = CsvReader::read(csv.as_bytes(), &CsvReadOptions::default()).unwrap();
//!
//! let output = demand_sheet(&input).unwrap();
//! assert_eq!(output.value_at(0, 1), CellValue::Number(42.0));
//!
//! // output.save("需求数量计算结果.xlsx").unwrap();
//! ```

pub mod prelude;

// Re-export core types
pub use replen_core::{
    compute_demand, demand_sheet, extract_records, round_to_pack, CellValue, DemandRow, Error,
    ItemRecord, Result, Sheet, COL_DEMAND_QTY, COL_ITEM_CODE, COL_PACK_SIZE, COL_SALES_QTY,
    COL_STOCK_QTY, OUTPUT_SHEET_NAME, REQUIRED_COLUMNS,
};

// Re-export I/O types
pub use replen_csv::{CsvError, CsvReadOptions, CsvReader, CsvWriteOptions, CsvWriter};
pub use replen_xlsx::{XlsxError, XlsxWriter, DEFAULT_EXPORT_FILENAME, XLSX_MIME_TYPE};

use std::path::Path;

/// Extension trait for [`Sheet`] to add file I/O
pub trait SheetExt: Sized {
    /// Open a table from a CSV file
    fn open<P: AsRef<Path>>(path: P) -> Result<Self>;

    /// Save the sheet to a file; the extension picks the format
    fn save<P: AsRef<Path>>(&self, path: P) -> Result<()>;
}

impl SheetExt for Sheet {
    fn open<P: AsRef<Path>>(path: P) -> Result<Sheet> {
        let path = path.as_ref();
        match extension_of(path).as_deref() {
            Some("csv") => CsvReader::read_file(path, &CsvReadOptions::default())
                .map_err(|e| Error::other(e.to_string())),
            _ => Err(Error::other(format!(
                "Unsupported input format: {}",
                path.display()
            ))),
        }
    }

    fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        match extension_of(path).as_deref() {
            Some("xlsx") => {
                XlsxWriter::write_file(self, path).map_err(|e| Error::other(e.to_string()))
            }
            Some("csv") => CsvWriter::write_file(self, path, &CsvWriteOptions::default())
                .map_err(|e| Error::other(e.to_string())),
            _ => Err(Error::other(format!(
                "Unsupported output format: {}",
                path.display()
            ))),
        }
    }
}

fn extension_of(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase())
}
