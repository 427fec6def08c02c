use std::io::Cursor;

use calamine::{Data, Reader};

use crate::error::TenderError;

/// Read the first sheet of an xlsx/xls workbook into rows of cell strings.
///
/// Rows and columns count from A1, so leading blank rows and columns come
/// back as empty strings. Blank cells inside the sheet do too.
pub fn extract_rows(bytes: &[u8]) -> Result<Vec<Vec<String>>, TenderError> {
    let mut workbook = calamine::open_workbook_auto_from_rs(Cursor::new(bytes))
        .map_err(|e| TenderError::Spreadsheet(format!("failed to open workbook: {e}")))?;

    let sheet = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| TenderError::Spreadsheet("workbook has no sheets".into()))?
        .map_err(|e| TenderError::Spreadsheet(format!("failed to read first sheet: {e}")))?;

    // calamine's range starts at the first used cell, not at A1
    let Some((start_row, start_col)) = sheet.start() else {
        return Ok(Vec::new());
    };
    let lead = start_col as usize;
    let width = lead + sheet.width();

    let mut rows: Vec<Vec<String>> = (0..start_row).map(|_| vec![String::new(); width]).collect();
    rows.extend(sheet.rows().map(|row| {
        std::iter::repeat(String::new())
            .take(lead)
            .chain(row.iter().map(cell_as_string))
            .collect::<Vec<_>>()
    }));
    Ok(rows)
}

fn cell_as_string(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.clone(),
        Data::DateTime(dt) => dt
            .as_datetime()
            .map(|d| d.format("%Y-%m-%d %H:%M:%S").to_string())
            .unwrap_or_else(|| cell.to_string()),
        _ => cell.to_string(),
    }
}

/// Flatten the leading `limit` rows into text: cells joined by `", "`, rows by newlines.
pub fn flatten_rows(rows: &[Vec<String>], limit: usize) -> String {
    rows.iter()
        .take(limit)
        .map(|row| row.join(", "))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use zip::write::{FileOptions, ZipWriter};

    /// Smallest xlsx package calamine accepts: workbook, its rels and one sheet.
    fn xlsx_with_sheet(sheet_data: &str) -> Vec<u8> {
        xlsx_with_styles(sheet_data, None)
    }

    fn xlsx_with_styles(sheet_data: &str, styles: Option<&str>) -> Vec<u8> {
        let workbook = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<workbook xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships"><sheets><sheet name="Sheet1" sheetId="1" r:id="rId1"/></sheets></workbook>"#;
        let rels = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships"><Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/worksheet" Target="worksheets/sheet1.xml"/></Relationships>"#;
        let content_types = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types"><Default Extension="xml" ContentType="application/xml"/><Override PartName="/xl/workbook.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.sheet.main+xml"/><Override PartName="/xl/worksheets/sheet1.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.worksheet+xml"/></Types>"#;
        let sheet = format!(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<worksheet xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main"><sheetData>{sheet_data}</sheetData></worksheet>"#
        );

        let mut buf = Vec::new();
        {
            let mut zip = ZipWriter::new(Cursor::new(&mut buf));
            for (name, body) in [
                ("[Content_Types].xml", content_types),
                ("xl/workbook.xml", workbook),
                ("xl/_rels/workbook.xml.rels", rels),
                ("xl/worksheets/sheet1.xml", sheet.as_str()),
            ] {
                zip.start_file(name, FileOptions::default()).unwrap();
                zip.write_all(body.as_bytes()).unwrap();
            }
            if let Some(styles) = styles {
                zip.start_file("xl/styles.xml", FileOptions::default()).unwrap();
                zip.write_all(styles.as_bytes()).unwrap();
            }
            zip.finish().unwrap();
        }
        buf
    }

    #[test]
    fn test_extract_rows_in_sheet_order() {
        let bytes = xlsx_with_sheet(
            r#"<row r="1"><c r="A1" t="inlineStr"><is><t>Item</t></is></c><c r="B1" t="inlineStr"><is><t>EMD</t></is></c></row><row r="2"><c r="A2" t="inlineStr"><is><t>Pipes</t></is></c><c r="B2"><v>2500</v></c></row>"#,
        );
        let rows = extract_rows(&bytes).unwrap();
        assert_eq!(
            rows,
            vec![
                vec!["Item".to_string(), "EMD".to_string()],
                vec!["Pipes".to_string(), "2500".to_string()],
            ]
        );
    }

    #[test]
    fn test_blank_cells_become_empty_strings() {
        let bytes = xlsx_with_sheet(
            r#"<row r="1"><c r="A1" t="inlineStr"><is><t>a</t></is></c><c r="C1" t="inlineStr"><is><t>c</t></is></c></row>"#,
        );
        let rows = extract_rows(&bytes).unwrap();
        assert_eq!(rows, vec![vec!["a".to_string(), String::new(), "c".to_string()]]);
    }

    #[test]
    fn test_leading_blank_rows_and_columns_kept() {
        let bytes = xlsx_with_sheet(
            r#"<row r="2"><c r="B2" t="inlineStr"><is><t>EMD</t></is></c><c r="C2" t="inlineStr"><is><t>Rs 500</t></is></c></row>"#,
        );
        let rows = extract_rows(&bytes).unwrap();
        assert_eq!(
            rows,
            vec![
                vec![String::new(), String::new(), String::new()],
                vec![String::new(), "EMD".to_string(), "Rs 500".to_string()],
            ]
        );
    }

    #[test]
    fn test_date_formatted_cell_rendered_as_datetime() {
        // numFmtId 14 is the built-in short date format
        let styles = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<styleSheet xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main"><cellXfs count="2"><xf numFmtId="0"/><xf numFmtId="14" applyNumberFormat="1"/></cellXfs></styleSheet>"#;
        let bytes = xlsx_with_styles(
            r#"<row r="1"><c r="A1" t="inlineStr"><is><t>Due date</t></is></c><c r="B1" s="1"><v>45424</v></c></row>"#,
            Some(styles),
        );
        let rows = extract_rows(&bytes).unwrap();
        assert_eq!(
            rows,
            vec![vec!["Due date".to_string(), "2024-05-12 00:00:00".to_string()]]
        );
    }

    #[test]
    fn test_garbage_bytes_are_an_error() {
        assert!(matches!(
            extract_rows(b"definitely not a workbook").unwrap_err(),
            TenderError::Spreadsheet(_)
        ));
    }

    #[test]
    fn test_flatten_rows_limits_and_joins() {
        let rows: Vec<Vec<String>> = (1..=7)
            .map(|i| vec![format!("r{i}"), "x".to_string()])
            .collect();
        let flat = flatten_rows(&rows, 5);
        assert_eq!(flat, "r1, x\nr2, x\nr3, x\nr4, x\nr5, x");
        assert_eq!(flatten_rows(&[], 5), "");
    }
}
