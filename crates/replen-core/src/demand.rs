//! Replenishment demand calculator
//!
//! Takes one sales/inventory table and produces the per-item replenishment
//! quantities: filter out zero-sales rows, compute `sales * 0.5 - stock`,
//! round up to the item's pack size, and keep the strictly positive results.

use crate::error::{Error, Result};
use crate::sheet::Sheet;
use crate::value::CellValue;

/// Sales quantity column header
pub const COL_SALES_QTY: &str = "销售数量";
/// Store inventory column header
pub const COL_STOCK_QTY: &str = "门店库存";
/// Pack size column header
pub const COL_PACK_SIZE: &str = "中包装数";
/// Item code column header
pub const COL_ITEM_CODE: &str = "商品编码";
/// Demand quantity column header (output only)
pub const COL_DEMAND_QTY: &str = "需求数量";

/// Columns an input table must provide, in the order the calculator reads them
pub const REQUIRED_COLUMNS: [&str; 4] =
    [COL_SALES_QTY, COL_STOCK_QTY, COL_PACK_SIZE, COL_ITEM_CODE];

/// Sheet name of the result table
pub const OUTPUT_SHEET_NAME: &str = "需求数量";

/// One item-location record from the input table
#[derive(Debug, Clone, PartialEq)]
pub struct ItemRecord {
    /// Opaque item identifier
    pub item_code: String,
    /// Recent sales quantity (signed)
    pub sales_qty: f64,
    /// Current store inventory
    pub stock_qty: f64,
    /// Pack size; restock quantities must be multiples of it (expected > 0)
    pub pack_size: f64,
}

/// One computed result row
#[derive(Debug, Clone, PartialEq)]
pub struct DemandRow {
    /// Opaque item identifier
    pub item_code: String,
    /// Replenishment quantity; integral whenever the pack size was positive
    pub demand_qty: f64,
}

/// Round `value` up to the nearest multiple of `pack`, truncated to an
/// integer.
///
/// A non-positive `pack` disables rounding entirely: the raw value is
/// returned unmodified, not even truncated.
pub fn round_to_pack(value: f64, pack: f64) -> f64 {
    if pack <= 0.0 {
        return value;
    }
    ((value / pack).ceil() * pack).trunc()
}

/// Compute replenishment demand for a batch of records.
///
/// Pure single pass, preserving the relative order of input rows:
///
/// 1. Rows with `sales_qty == 0` are discarded.
/// 2. `base_demand = sales_qty * 0.5 - stock_qty` (target stock is half of
///    recent sales).
/// 3. When `sales_qty > stock_qty` the base demand is rounded up to the
///    item's pack size via [`round_to_pack`]; otherwise demand is 0.
/// 4. Only rows with demand strictly greater than 0 are emitted.
pub fn compute_demand(records: &[ItemRecord]) -> Vec<DemandRow> {
    let mut out = Vec::new();

    for record in records {
        if record.sales_qty == 0.0 {
            continue;
        }

        let base_demand = record.sales_qty * 0.5 - record.stock_qty;
        let demand_qty = if record.sales_qty > record.stock_qty {
            round_to_pack(base_demand, record.pack_size)
        } else {
            0.0
        };

        if demand_qty > 0.0 {
            out.push(DemandRow {
                item_code: record.item_code.clone(),
                demand_qty,
            });
        }
    }

    out
}

/// Extract [`ItemRecord`]s from a sheet.
///
/// Validates that all [`REQUIRED_COLUMNS`] are present, then parses every
/// data row. Numeric fields accept `Number` cells and strings that parse as
/// a number; anything else fails with [`Error::InvalidNumber`]. Item codes
/// are taken as-is via their display form, so purely numeric codes keep
/// their original digits.
pub fn extract_records(sheet: &Sheet) -> Result<Vec<ItemRecord>> {
    let indexes = sheet.require_columns(&REQUIRED_COLUMNS)?;
    let (sales_idx, stock_idx, pack_idx, code_idx) =
        (indexes[0], indexes[1], indexes[2], indexes[3]);

    let mut records = Vec::with_capacity(sheet.row_count());
    for row in 0..sheet.row_count() {
        records.push(ItemRecord {
            item_code: sheet.value_at(row, code_idx).to_string(),
            sales_qty: numeric_field(sheet, row, sales_idx, COL_SALES_QTY)?,
            stock_qty: numeric_field(sheet, row, stock_idx, COL_STOCK_QTY)?,
            pack_size: numeric_field(sheet, row, pack_idx, COL_PACK_SIZE)?,
        });
    }

    Ok(records)
}

/// Run the full table-to-table computation.
///
/// Validates the input schema, computes demand, and returns the result as a
/// new sheet named [`OUTPUT_SHEET_NAME`] with columns [`COL_ITEM_CODE`] and
/// [`COL_DEMAND_QTY`]. The input sheet is not modified. Any error is
/// terminal: no partial output is produced.
pub fn demand_sheet(input: &Sheet) -> Result<Sheet> {
    let records = extract_records(input)?;
    let rows = compute_demand(&records);

    let mut output = Sheet::new(OUTPUT_SHEET_NAME);
    output.set_columns([COL_ITEM_CODE, COL_DEMAND_QTY]);
    for row in rows {
        output.push_row(vec![
            CellValue::string(row.item_code),
            CellValue::Number(row.demand_qty),
        ]);
    }

    Ok(output)
}

fn numeric_field(sheet: &Sheet, row: usize, col: usize, column: &str) -> Result<f64> {
    let value = sheet.value_at(row, col);
    match &value {
        CellValue::Number(n) => Ok(*n),
        CellValue::String(s) => s.trim().parse().map_err(|_| Error::InvalidNumber {
            row,
            column: column.to_string(),
            value: value.to_string(),
        }),
        _ => Err(Error::InvalidNumber {
            row,
            column: column.to_string(),
            value: value.to_string(),
        }),
    }
}
