use crate::domain::model::{ReportRow, REPORT_HEADERS};
use crate::utils::error::{PapersError, Result};

/// 產生 CSV 報表；即使沒有資料列也會寫出表頭
pub fn render_csv(rows: &[ReportRow]) -> Result<Vec<u8>> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(Vec::new());

    writer.write_record(REPORT_HEADERS)?;
    for row in rows {
        writer.serialize(row)?;
    }

    writer
        .into_inner()
        .map_err(|e| PapersError::IoError(e.into_error()))
}

/// Console output: one JSON object per row, keyed by the report column names.
pub fn render_console(rows: &[ReportRow]) -> Result<String> {
    let mut output = String::new();
    for row in rows {
        output.push_str(&serde_json::to_string(row)?);
        output.push('\n');
    }
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(pmid: &str, title: Option<&str>, authors: &str, affiliations: &str) -> ReportRow {
        ReportRow {
            pmid: pmid.to_string(),
            title: title.map(str::to_string),
            publication_date: "2024".to_string(),
            non_academic_authors: authors.to_string(),
            company_affiliations: affiliations.to_string(),
            corresponding_author_email: "N/A".to_string(),
        }
    }

    #[test]
    fn test_csv_header_and_rows() {
        let rows = vec![
            row("1", Some("First"), "A", "Acme Corp"),
            row("2", Some("Second"), "B", "Globex"),
        ];

        let output = String::from_utf8(render_csv(&rows).unwrap()).unwrap();
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines.len(), 3);
        assert_eq!(
            lines[0],
            "PubmedID,Title,Publication Date,Non-academic Author(s),Company Affiliation(s),Corresponding Author Email"
        );
        assert_eq!(lines[1], "1,First,2024,A,Acme Corp,N/A");
    }

    #[test]
    fn test_csv_quotes_fields_with_delimiters() {
        let rows = vec![row(
            "9",
            Some("Cells, \"genes\" and drugs"),
            "A, B",
            "Acme Corp, Boston",
        )];

        let output = String::from_utf8(render_csv(&rows).unwrap()).unwrap();
        let mut reader = csv::Reader::from_reader(output.as_bytes());
        let record = reader.records().next().unwrap().unwrap();

        assert!(output.contains("\"Cells, \"\"genes\"\" and drugs\""));
        assert_eq!(&record[1], "Cells, \"genes\" and drugs");
        assert_eq!(&record[3], "A, B");
        assert_eq!(&record[4], "Acme Corp, Boston");
    }

    #[test]
    fn test_csv_without_rows_has_header_only() {
        let output = String::from_utf8(render_csv(&[]).unwrap()).unwrap();
        assert_eq!(output.lines().count(), 1);
        assert!(output.starts_with("PubmedID,"));
    }

    #[test]
    fn test_missing_title_is_an_empty_field() {
        let output = String::from_utf8(render_csv(&[row("3", None, "A", "Acme")]).unwrap()).unwrap();
        assert_eq!(output.lines().nth(1).unwrap(), "3,,2024,A,Acme,N/A");
    }

    #[test]
    fn test_console_prints_one_object_per_row() {
        let rows = vec![row("1", Some("First"), "A", "Acme"), row("2", None, "B", "Globex")];

        let output = render_console(&rows).unwrap();
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines.len(), 2);
        let first: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(first["PubmedID"], "1");
        assert_eq!(first["Non-academic Author(s)"], "A");
        assert_eq!(first["Corresponding Author Email"], "N/A");
        let second: serde_json::Value = serde_json::from_str(lines[1]).unwrap();
        assert!(second["Title"].is_null());
    }

    #[test]
    fn test_console_without_rows_is_empty() {
        assert_eq!(render_console(&[]).unwrap(), "");
    }
}
