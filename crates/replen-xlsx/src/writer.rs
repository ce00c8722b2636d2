//! XLSX writer
//!
//! Serializes one [`Sheet`] into a minimal valid Office Open XML package:
//! content types, relationships, workbook part, a fixed default style
//! table, and a single worksheet part with inline strings.

use std::fs::File;
use std::io::{Seek, Write};
use std::path::Path;

use crate::error::XlsxResult;
use replen_core::{CellValue, Sheet};

/// Conventional filename for the exported result workbook
pub const DEFAULT_EXPORT_FILENAME: &str = "需求数量计算结果.xlsx";

/// MIME type of an Office Open XML spreadsheet
pub const XLSX_MIME_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

/// XLSX file writer
pub struct XlsxWriter;

impl XlsxWriter {
    /// Write a sheet to a file path
    pub fn write_file<P: AsRef<Path>>(sheet: &Sheet, path: P) -> XlsxResult<()> {
        let file = File::create(path)?;
        Self::write(sheet, file)
    }

    /// Write a sheet to a writer as a single-sheet workbook
    pub fn write<W: Write + Seek>(sheet: &Sheet, writer: W) -> XlsxResult<()> {
        let mut zip = zip::ZipWriter::new(writer);

        Self::write_content_types(&mut zip)?;
        Self::write_root_rels(&mut zip)?;
        Self::write_workbook_xml(&mut zip, sheet)?;
        Self::write_workbook_rels(&mut zip)?;
        Self::write_styles_xml(&mut zip)?;
        Self::write_worksheet(&mut zip, sheet)?;

        zip.finish()?;
        log::debug!(
            "wrote workbook '{}' ({} rows)",
            sheet.name(),
            sheet.row_count()
        );
        Ok(())
    }

    fn write_content_types<W: Write + Seek>(zip: &mut zip::ZipWriter<W>) -> XlsxResult<()> {
        let options = zip::write::SimpleFileOptions::default();
        zip.start_file("[Content_Types].xml", options)?;

        let content = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types">
    <Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/>
    <Default Extension="xml" ContentType="application/xml"/>
    <Override PartName="/xl/workbook.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.sheet.main+xml"/>
    <Override PartName="/xl/styles.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.styles+xml"/>
    <Override PartName="/xl/worksheets/sheet1.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.worksheet+xml"/>
</Types>"#;

        zip.write_all(content.as_bytes())?;
        Ok(())
    }

    fn write_root_rels<W: Write + Seek>(zip: &mut zip::ZipWriter<W>) -> XlsxResult<()> {
        let options = zip::write::SimpleFileOptions::default();
        zip.start_file("_rels/.rels", options)?;

        let content = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
    <Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="xl/workbook.xml"/>
</Relationships>"#;

        zip.write_all(content.as_bytes())?;
        Ok(())
    }

    fn write_workbook_xml<W: Write + Seek>(
        zip: &mut zip::ZipWriter<W>,
        sheet: &Sheet,
    ) -> XlsxResult<()> {
        let options = zip::write::SimpleFileOptions::default();
        zip.start_file("xl/workbook.xml", options)?;

        let content = format!(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<workbook xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships">
    <sheets>
        <sheet name="{}" sheetId="1" r:id="rId1"/>
    </sheets>
</workbook>"#,
            Self::escape_xml(sheet.name())
        );

        zip.write_all(content.as_bytes())?;
        Ok(())
    }

    fn write_workbook_rels<W: Write + Seek>(zip: &mut zip::ZipWriter<W>) -> XlsxResult<()> {
        let options = zip::write::SimpleFileOptions::default();
        zip.start_file("xl/_rels/workbook.xml.rels", options)?;

        let content = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
    <Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/worksheet" Target="worksheets/sheet1.xml"/>
    <Relationship Id="rId2" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/styles" Target="styles.xml"/>
</Relationships>"#;

        zip.write_all(content.as_bytes())?;
        Ok(())
    }

    fn write_styles_xml<W: Write + Seek>(zip: &mut zip::ZipWriter<W>) -> XlsxResult<()> {
        let options = zip::write::SimpleFileOptions::default();
        zip.start_file("xl/styles.xml", options)?;

        // Fixed default style table; nothing in the export is styled.
        let content = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<styleSheet xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main">
    <fonts count="1"><font><sz val="11"/><name val="Calibri"/></font></fonts>
    <fills count="1"><fill><patternFill patternType="none"/></fill></fills>
    <borders count="1"><border><left/><right/><top/><bottom/><diagonal/></border></borders>
    <cellStyleXfs count="1"><xf numFmtId="0" fontId="0" fillId="0" borderId="0"/></cellStyleXfs>
    <cellXfs count="1"><xf numFmtId="0" fontId="0" fillId="0" borderId="0" xfId="0"/></cellXfs>
</styleSheet>"#;

        zip.write_all(content.as_bytes())?;
        Ok(())
    }

    fn write_worksheet<W: Write + Seek>(
        zip: &mut zip::ZipWriter<W>,
        sheet: &Sheet,
    ) -> XlsxResult<()> {
        let options = zip::write::SimpleFileOptions::default();
        zip.start_file("xl/worksheets/sheet1.xml", options)?;

        let mut content = String::from(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<worksheet xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main">
    <sheetData>"#,
        );

        // Header row first, then data rows (all rows are 1-based in the file)
        Self::push_row(
            &mut content,
            0,
            sheet.columns().iter().map(|h| CellValue::string(h.clone())),
        );
        for (i, row) in sheet.rows().enumerate() {
            Self::push_row(&mut content, (i + 1) as u32, row.iter().cloned());
        }

        content.push_str("\n    </sheetData>\n</worksheet>");

        zip.write_all(content.as_bytes())?;
        Ok(())
    }

    fn push_row<I>(content: &mut String, row: u32, cells: I)
    where
        I: Iterator<Item = CellValue>,
    {
        content.push_str(&format!("\n        <row r=\"{}\">", row + 1));

        for (col, value) in cells.enumerate() {
            let cell_ref = format!("{}{}", column_letters(col), row + 1);
            match &value {
                CellValue::Number(n) => {
                    content.push_str(&format!(
                        "\n            <c r=\"{}\"><v>{}</v></c>",
                        cell_ref, n
                    ));
                }
                CellValue::String(s) => {
                    content.push_str(&format!(
                        "\n            <c r=\"{}\" t=\"inlineStr\"><is><t>{}</t></is></c>",
                        cell_ref,
                        Self::escape_xml(s)
                    ));
                }
                CellValue::Boolean(b) => {
                    content.push_str(&format!(
                        "\n            <c r=\"{}\" t=\"b\"><v>{}</v></c>",
                        cell_ref,
                        if *b { 1 } else { 0 }
                    ));
                }
                CellValue::Empty => {}
            }
        }

        content.push_str("\n        </row>");
    }

    fn escape_xml(s: &str) -> String {
        s.replace('&', "&amp;")
            .replace('<', "&lt;")
            .replace('>', "&gt;")
            .replace('"', "&quot;")
            .replace('\'', "&apos;")
    }
}

/// Convert a 0-based column index to A1-style column letters
fn column_letters(col: usize) -> String {
    let mut letters = String::new();
    let mut n = col + 1;
    while n > 0 {
        let rem = (n - 1) % 26;
        letters.insert(0, (b'A' + rem as u8) as char);
        n = (n - 1) / 26;
    }
    letters
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::{Cursor, Read};

    fn result_sheet() -> Sheet {
        let mut sheet = Sheet::new("需求数量");
        sheet.set_columns(["商品编码", "需求数量"]);
        sheet.push_row(vec![CellValue::string("10001"), CellValue::Number(40.0)]);
        sheet.push_row(vec![CellValue::string("A<B&C"), CellValue::Number(2.5)]);
        sheet
    }

    fn part(buf: &[u8], name: &str) -> String {
        let mut archive = zip::ZipArchive::new(Cursor::new(buf)).unwrap();
        let mut file = archive.by_name(name).unwrap();
        let mut content = String::new();
        file.read_to_string(&mut content).unwrap();
        content
    }

    #[test]
    fn test_package_has_all_parts() {
        let mut buf = Vec::new();
        XlsxWriter::write(&result_sheet(), Cursor::new(&mut buf)).unwrap();

        let mut archive = zip::ZipArchive::new(Cursor::new(buf.as_slice())).unwrap();
        for name in [
            "[Content_Types].xml",
            "_rels/.rels",
            "xl/workbook.xml",
            "xl/_rels/workbook.xml.rels",
            "xl/styles.xml",
            "xl/worksheets/sheet1.xml",
        ] {
            assert!(archive.by_name(name).is_ok(), "missing part {name}");
        }
    }

    #[test]
    fn test_workbook_carries_sheet_name() {
        let mut buf = Vec::new();
        XlsxWriter::write(&result_sheet(), Cursor::new(&mut buf)).unwrap();

        let workbook = part(&buf, "xl/workbook.xml");
        assert!(workbook.contains(r#"<sheet name="需求数量" sheetId="1" r:id="rId1"/>"#));
    }

    #[test]
    fn test_worksheet_cells() {
        let mut buf = Vec::new();
        XlsxWriter::write(&result_sheet(), Cursor::new(&mut buf)).unwrap();

        let ws = part(&buf, "xl/worksheets/sheet1.xml");
        // Header row
        assert!(ws.contains(r#"<c r="A1" t="inlineStr"><is><t>商品编码</t></is></c>"#));
        assert!(ws.contains(r#"<c r="B1" t="inlineStr"><is><t>需求数量</t></is></c>"#));
        // Data rows: strings inline, numbers as plain values
        assert!(ws.contains(r#"<c r="A2" t="inlineStr"><is><t>10001</t></is></c>"#));
        assert!(ws.contains(r#"<c r="B2"><v>40</v></c>"#));
        assert!(ws.contains(r#"<c r="B3"><v>2.5</v></c>"#));
        // XML entities are escaped
        assert!(ws.contains("A&lt;B&amp;C"));
    }

    #[test]
    fn test_write_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(DEFAULT_EXPORT_FILENAME);

        XlsxWriter::write_file(&result_sheet(), &path).unwrap();
        assert!(path.exists());

        let buf = std::fs::read(&path).unwrap();
        // ZIP local file header magic
        assert_eq!(&buf[..2], b"PK");
    }

    #[test]
    fn test_column_letters() {
        assert_eq!(column_letters(0), "A");
        assert_eq!(column_letters(1), "B");
        assert_eq!(column_letters(25), "Z");
        assert_eq!(column_letters(26), "AA");
        assert_eq!(column_letters(701), "ZZ");
        assert_eq!(column_letters(702), "AAA");
    }
}
