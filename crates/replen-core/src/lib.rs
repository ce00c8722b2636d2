//! # replen-core
//!
//! Core data structures and the demand calculator for replen:
//! - [`CellValue`] - Represents table cell values (numbers, strings, booleans)
//! - [`Sheet`] - A named table with a header row and dense data rows
//! - [`compute_demand`] / [`demand_sheet`] - The replenishment calculation
//!
//! ## Example
//!
//! ```rust
//! use replen_core::{demand_sheet, CellValue, Sheet};
//!
//! let mut input = Sheet::new("Sheet1");
//! input.set_columns(["商品编码", "销售数量", "门店库存", "中包装数"]);
//! input.push_row(vec![
//!     CellValue::string("10001"),
//!     CellValue::Number(100.0),
//!     CellValue::Number(10.0),
//!     CellValue::Number(7.0),
//! ]);
//!
//! let output = demand_sheet(&input).unwrap();
//! assert_eq!(output.value_at(0, 1), CellValue::Number(42.0));
//! ```

pub mod demand;
pub mod error;
pub mod sheet;
pub mod value;

// Re-exports for convenience
pub use demand::{
    compute_demand, demand_sheet, extract_records, round_to_pack, DemandRow, ItemRecord,
    COL_DEMAND_QTY, COL_ITEM_CODE, COL_PACK_SIZE, COL_SALES_QTY, COL_STOCK_QTY,
    OUTPUT_SHEET_NAME, REQUIRED_COLUMNS,
};
pub use error::{Error, Result};
pub use sheet::Sheet;
pub use value::CellValue;
