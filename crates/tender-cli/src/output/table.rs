use std::fmt::Write;

use tender_core::model::{Analysis, Tender};

const EMPTY_FIELD: &str = "—";
const PREVIEW_ROWS: usize = 10;
const PREVIEW_CELLS: usize = 10;

fn or_dash(value: &str) -> &str {
    if value.is_empty() {
        EMPTY_FIELD
    } else {
        value
    }
}

/// Dashboard listing: one numbered row per tender, newest first.
pub fn format_list(tenders: &[&Tender]) -> String {
    if tenders.is_empty() {
        return "No tenders uploaded yet. Use `tender ingest <FILE>...` to add some.".into();
    }

    let name_width = tenders
        .iter()
        .map(|t| t.filename.chars().count())
        .max()
        .unwrap_or(8)
        .max("Filename".len());
    let emd_width = tenders
        .iter()
        .map(|t| or_dash(&t.deposit_amount).chars().count())
        .max()
        .unwrap_or(3)
        .max("EMD".len());

    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:>3}  {:<36}  {:<nw$}  {:<ew$}  {:<10}  Summary",
        "#",
        "Id",
        "Filename",
        "EMD",
        "Due Date",
        nw = name_width,
        ew = emd_width
    );
    let _ = writeln!(
        out,
        "{}",
        "-".repeat(3 + 2 + 36 + 2 + name_width + 2 + emd_width + 2 + 10 + 2 + 7)
    );

    for (i, t) in tenders.iter().enumerate() {
        let summary = if t.summary.is_empty() {
            "No summary"
        } else {
            t.summary.as_str()
        };
        let _ = writeln!(
            out,
            "{:>3}  {:<36}  {:<nw$}  {:<ew$}  {:<10}  {}",
            i + 1,
            t.id,
            t.filename,
            or_dash(&t.deposit_amount),
            or_dash(&t.due_date),
            summary,
            nw = name_width,
            ew = emd_width
        );
    }

    out.trim_end().to_string()
}

/// Detail view for a single tender.
pub fn format_detail(tender: &Tender) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "=== {} ===\n", tender.filename);
    let _ = writeln!(out, "  Id:          {}", tender.id);
    let _ = writeln!(out, "  Uploaded at: {}", tender.uploaded_at.to_rfc3339());
    let _ = writeln!(out, "  Stored at:   {}", tender.stored_path.display());
    out.push_str(&format_fields(
        &tender.deposit_amount,
        &tender.due_date,
        &tender.eligibility_excerpt,
        &tender.summary,
    ));
    out.push_str(&format_rows(&tender.table_rows));
    let _ = writeln!(out, "\nFull text:\n{}", tender.full_text);
    out.trim_end().to_string()
}

/// Pipeline output for a file that was parsed but not stored.
pub fn format_analysis(filename: &str, analysis: &Analysis) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "=== {} ===", filename);
    out.push_str(&format_fields(
        &analysis.fields.deposit_amount,
        &analysis.fields.due_date,
        &analysis.fields.eligibility_excerpt,
        &analysis.summary,
    ));
    out.push_str(&format_rows(&analysis.table_rows));
    out.trim_end().to_string()
}

fn format_fields(emd: &str, due_date: &str, eligibility: &str, summary: &str) -> String {
    let summary = if summary.is_empty() {
        "No summary available for this tender."
    } else {
        summary
    };
    format!(
        "  EMD:         {}\n  Due date:    {}\n  Eligibility (excerpt): {}\n\nSummary:\n  {}\n",
        or_dash(emd),
        or_dash(due_date),
        or_dash(eligibility),
        summary
    )
}

/// First rows and cells of the sheet, column-aligned.
fn format_rows(rows: &[Vec<String>]) -> String {
    if rows.is_empty() {
        return String::new();
    }

    let preview: Vec<&[String]> = rows
        .iter()
        .take(PREVIEW_ROWS)
        .map(|r| &r[..r.len().min(PREVIEW_CELLS)])
        .collect();
    let columns = preview.iter().map(|r| r.len()).max().unwrap_or(0);
    let widths: Vec<usize> = (0..columns)
        .map(|c| {
            preview
                .iter()
                .filter_map(|r| r.get(c))
                .map(|cell| cell.chars().count())
                .max()
                .unwrap_or(0)
        })
        .collect();

    let mut out = format!("\nTable data (first {} rows):\n", PREVIEW_ROWS);
    for row in &preview {
        let cells: Vec<String> = row
            .iter()
            .zip(&widths)
            .map(|(cell, w)| format!("{:<w$}", cell, w = *w))
            .collect();
        let _ = writeln!(out, "  {}", cells.join(" | ").trim_end());
    }
    out
}
