//! End-to-end tests for the demand pipeline (CSV -> compute -> export)

use pretty_assertions::assert_eq;
use replen::prelude::*;
use std::io::{Cursor, Read};

fn read_csv(data: &str) -> Sheet {
    CsvReader::read(data.as_bytes(), &CsvReadOptions::default()).unwrap()
}

/// The worked scenarios, run through the whole pipeline at once
#[test]
fn test_compute_scenarios() {
    let input = read_csv(
        "商品编码,销售数量,门店库存,中包装数\n\
         A,100,10,5\n\
         B,100,10,7\n\
         C,10,20,5\n\
         D,0,999,5\n\
         E,5,0,0\n",
    );

    let output = demand_sheet(&input).unwrap();

    assert_eq!(output.name(), OUTPUT_SHEET_NAME);
    assert_eq!(output.columns(), &[COL_ITEM_CODE, COL_DEMAND_QTY]);

    // A: base 40, already a multiple of 5
    // B: base 40, rounded up to 42
    // C: stock covers sales, dropped
    // D: zero sales, dropped
    // E: pack size 0, raw 2.5 passes through unrounded
    assert_eq!(output.row_count(), 3);
    assert_eq!(output.value_at(0, 0), CellValue::string("A"));
    assert_eq!(output.value_at(0, 1), CellValue::Number(40.0));
    assert_eq!(output.value_at(1, 0), CellValue::string("B"));
    assert_eq!(output.value_at(1, 1), CellValue::Number(42.0));
    assert_eq!(output.value_at(2, 0), CellValue::string("E"));
    assert_eq!(output.value_at(2, 1), CellValue::Number(2.5));
}

#[test]
fn test_csv_to_xlsx() {
    let input = read_csv("商品编码,销售数量,门店库存,中包装数\n10001,100,10,7\n");
    let output = demand_sheet(&input).unwrap();

    let mut buf = Vec::new();
    XlsxWriter::write(&output, Cursor::new(&mut buf)).unwrap();

    // Reopen the package and check the worksheet XML directly
    let mut archive = zip::ZipArchive::new(Cursor::new(buf.as_slice())).unwrap();
    let mut ws = String::new();
    archive
        .by_name("xl/worksheets/sheet1.xml")
        .unwrap()
        .read_to_string(&mut ws)
        .unwrap();

    assert!(ws.contains("<t>商品编码</t>"));
    assert!(ws.contains("<t>需求数量</t>"));
    assert!(ws.contains("<t>10001</t>"));
    assert!(ws.contains("<v>42</v>"));

    let mut wb = String::new();
    archive
        .by_name("xl/workbook.xml")
        .unwrap()
        .read_to_string(&mut wb)
        .unwrap();
    assert!(wb.contains(r#"name="需求数量""#));
}

#[test]
fn test_save_and_reopen_via_extension_dispatch() {
    let dir = tempfile::tempdir().unwrap();

    let input = read_csv(
        "商品编码,销售数量,门店库存,中包装数\n\
         10001,100,10,5\n\
         10002,100,10,7\n",
    );
    let output = demand_sheet(&input).unwrap();

    // XLSX by extension
    let xlsx_path = dir.path().join(DEFAULT_EXPORT_FILENAME);
    output.save(&xlsx_path).unwrap();
    assert!(xlsx_path.exists());

    // CSV by extension, then read back through the open dispatch
    let csv_path = dir.path().join("result.csv");
    output.save(&csv_path).unwrap();
    let reopened = Sheet::open(&csv_path).unwrap();

    assert_eq!(reopened.columns(), &[COL_ITEM_CODE, COL_DEMAND_QTY]);
    assert_eq!(reopened.row_count(), 2);
    assert_eq!(reopened.value_at(0, 1), CellValue::Number(40.0));
    assert_eq!(reopened.value_at(1, 1), CellValue::Number(42.0));
}

#[test]
fn test_unsupported_extension_is_rejected() {
    let sheet = Sheet::new("需求数量");
    let err = sheet.save("out.parquet").unwrap_err();
    assert!(err.to_string().contains("Unsupported output format"));

    let err = Sheet::open("in.xlsx").unwrap_err();
    assert!(err.to_string().contains("Unsupported input format"));
}

#[test]
fn test_missing_columns_reported_together() {
    let input = read_csv("商品编码,销售数量\n10001,100\n");
    let err = demand_sheet(&input).unwrap_err();

    let message = err.to_string();
    assert!(message.contains(COL_STOCK_QTY));
    assert!(message.contains(COL_PACK_SIZE));
}

#[test]
fn test_non_numeric_field_aborts_whole_request() {
    let input = read_csv(
        "商品编码,销售数量,门店库存,中包装数\n\
         10001,100,10,5\n\
         10002,缺货,10,5\n",
    );

    // One bad row poisons the request; no partial output
    let err = demand_sheet(&input).unwrap_err();
    assert!(err.to_string().contains(COL_SALES_QTY));
    assert!(err.to_string().contains("缺货"));
}

#[test]
fn test_invalid_utf8_upload_is_rejected() {
    let mut data = "商品编码,销售数量,门店库存,中包装数\n".as_bytes().to_vec();
    data.extend_from_slice(&[0x31, 0x2c, 0xff, 0xfe, 0x2c, 0x31, 0x2c, 0x31, 0x0a]);

    let err = CsvReader::read(data.as_slice(), &CsvReadOptions::default()).unwrap_err();
    assert!(matches!(err, CsvError::Encoding { .. }));
}

#[test]
fn test_empty_result_still_exports() {
    // Every row filtered out: the export carries just the header
    let input = read_csv("商品编码,销售数量,门店库存,中包装数\n10001,10,20,5\n");
    let output = demand_sheet(&input).unwrap();
    assert!(output.is_empty());

    let mut buf = Vec::new();
    XlsxWriter::write(&output, Cursor::new(&mut buf)).unwrap();
    assert!(!buf.is_empty());
}
