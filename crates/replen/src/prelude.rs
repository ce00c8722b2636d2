//! Prelude module - common imports for replen users
//!
//! ```rust
//! use replen::prelude::*;
//! ```

pub use crate::{
    // Calculator
    compute_demand,
    demand_sheet,
    round_to_pack,

    // Cell types
    CellValue,

    CsvError,
    CsvReadOptions,
    // I/O types
    CsvReader,
    CsvWriteOptions,
    CsvWriter,

    DemandRow,

    // Error types
    Error,
    ItemRecord,
    Result,

    // Main types
    Sheet,
    // Extension traits
    SheetExt,
    XlsxError,
    XlsxWriter,

    // Column constants
    COL_DEMAND_QTY,
    COL_ITEM_CODE,
    COL_PACK_SIZE,
    COL_SALES_QTY,
    COL_STOCK_QTY,
    DEFAULT_EXPORT_FILENAME,
    OUTPUT_SHEET_NAME,
    REQUIRED_COLUMNS,
};
