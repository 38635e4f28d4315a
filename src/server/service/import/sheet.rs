//! Tabular upload parsing for bulk imports.
//!
//! Both `.xlsx` workbooks (first worksheet) and `.csv` text are read into a [`Sheet`]:
//! a normalized header row plus data rows tagged with their 1-based row number.

use calamine::{open_workbook_from_rs, Data, Reader, Xlsx};
use std::{collections::HashMap, io::Cursor};

use crate::server::error::import::ImportError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    Xlsx,
    Csv,
}

impl FileKind {
    /// Picks the parser from the uploaded file name's extension.
    pub fn from_filename(filename: &str) -> Result<Self, ImportError> {
        let extension = filename
            .rsplit_once('.')
            .map(|(_, ext)| ext.to_ascii_lowercase())
            .unwrap_or_default();

        match extension.as_str() {
            "xlsx" => Ok(Self::Xlsx),
            "csv" => Ok(Self::Csv),
            _ => Err(ImportError::UnsupportedFileType(filename.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Sheet {
    columns: HashMap<String, usize>,
    rows: Vec<(usize, Vec<String>)>,
}

/// One data row with lookups by normalized column name.
pub struct SheetRow<'a> {
    pub number: usize,
    columns: &'a HashMap<String, usize>,
    cells: &'a [String],
}

impl<'a> SheetRow<'a> {
    /// Trimmed cell value; blank cells and missing columns are `None`.
    pub fn get(&self, column: &str) -> Option<&'a str> {
        let index = *self.columns.get(column)?;
        let cell = self.cells.get(index)?.trim();

        (!cell.is_empty()).then_some(cell)
    }

    /// Like [`get`](Self::get) but reports a blank value as a row error.
    pub fn required(&self, column: &str) -> Result<&'a str, String> {
        self.get(column)
            .ok_or_else(|| format!("Column '{}' is empty", column))
    }
}

impl Sheet {
    /// Parses an uploaded file.
    ///
    /// # Returns
    /// - `Ok(Sheet)` - Parsed header and rows
    /// - `Err(ImportError)` - Unknown file type, unreadable content or no header row
    pub fn parse(filename: &str, bytes: Vec<u8>) -> Result<Self, ImportError> {
        let rows = match FileKind::from_filename(filename)? {
            FileKind::Xlsx => read_xlsx(bytes)?,
            FileKind::Csv => read_csv(&String::from_utf8(bytes)?)?,
        };

        Self::from_rows(rows)
    }

    fn from_rows(mut rows: Vec<(usize, Vec<String>)>) -> Result<Self, ImportError> {
        if rows.is_empty() {
            return Err(ImportError::EmptyFile);
        }
        let (_, header) = rows.remove(0);

        let columns = header
            .iter()
            .enumerate()
            .map(|(index, name)| (normalize_header(name), index))
            .filter(|(name, _)| !name.is_empty())
            .collect();

        Ok(Self { columns, rows })
    }

    /// Fails unless every listed column is present in the header.
    pub fn require_columns(&self, required: &[&str]) -> Result<(), ImportError> {
        let missing: Vec<String> = required
            .iter()
            .filter(|column| !self.columns.contains_key(**column))
            .map(|column| column.to_string())
            .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(ImportError::MissingColumns(missing))
        }
    }

    /// Iterates the data rows, skipping rows whose cells are all blank.
    pub fn rows(&self) -> impl Iterator<Item = SheetRow<'_>> {
        self.rows
            .iter()
            .filter(|(_, cells)| cells.iter().any(|c| !c.trim().is_empty()))
            .map(|(number, cells)| SheetRow {
                number: *number,
                columns: &self.columns,
                cells,
            })
    }
}

/// Trims, lower-cases and replaces spaces with underscores, so "Mentor Username"
/// becomes "mentor_username".
pub fn normalize_header(header: &str) -> String {
    header
        .trim_start_matches('\u{feff}')
        .trim()
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("_")
}

fn read_xlsx(bytes: Vec<u8>) -> Result<Vec<(usize, Vec<String>)>, ImportError> {
    let mut workbook: Xlsx<_> = open_workbook_from_rs(Cursor::new(bytes))?;
    let range = workbook
        .worksheet_range_at(0)
        .ok_or(ImportError::EmptyFile)??;

    let (start_row, _) = range.start().unwrap_or((0, 0));

    Ok(range
        .rows()
        .enumerate()
        .map(|(offset, row)| {
            let number = start_row as usize + offset + 1;
            (number, row.iter().map(cell_text).collect())
        })
        .collect())
}

fn cell_text(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.clone(),
        // Whole numbers come back as floats; "5.0" should read as semester 5.
        Data::Float(f) if f.fract() == 0.0 && f.abs() < i64::MAX as f64 => {
            (*f as i64).to_string()
        }
        other => other.to_string(),
    }
}

/// Reads every CSV record with the line it starts on. Quoted fields may span lines,
/// and rows may have differing widths.
fn read_csv(text: &str) -> Result<Vec<(usize, Vec<String>)>, ImportError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(text.as_bytes());

    let mut lines = LineCounter::new(text);
    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        let number = match record.position() {
            Some(position) => lines.line_at(position.byte() as usize),
            None => rows.len() + 1,
        };

        if record.iter().all(|field| field.trim().is_empty()) {
            continue;
        }
        rows.push((number, record.iter().map(str::to_string).collect()));
    }

    Ok(rows)
}

/// Maps record byte offsets to 1-based line numbers in a single forward pass.
///
/// A record's position may sit on the blank lines the reader skipped before it, so
/// leading line breaks are stepped over first.
struct LineCounter<'a> {
    text: &'a str,
    offset: usize,
    line: usize,
}

impl<'a> LineCounter<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            text,
            offset: 0,
            line: 1,
        }
    }

    fn line_at(&mut self, offset: usize) -> usize {
        let rest = self.text.get(offset..).unwrap_or_default();
        let start = offset + rest.len() - rest.trim_start_matches(['\r', '\n']).len();

        if start > self.offset {
            let skipped = self.text.get(self.offset..start).unwrap_or_default();
            self.line += skipped.matches('\n').count();
            self.offset = start;
        }

        self.line
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_file_kind_by_extension() {
        assert_eq!(FileKind::from_filename("Mentees.XLSX").unwrap(), FileKind::Xlsx);
        assert_eq!(FileKind::from_filename("mentors.csv").unwrap(), FileKind::Csv);
        assert!(matches!(
            FileKind::from_filename("mentees.xls"),
            Err(ImportError::UnsupportedFileType(_))
        ));
        assert!(FileKind::from_filename("noextension").is_err());
    }

    #[test]
    fn normalizes_headers() {
        assert_eq!(normalize_header("  Mentor  Username "), "mentor_username");
        assert_eq!(normalize_header("\u{feff}USN"), "usn");
    }

    #[test]
    fn parses_quoted_csv_fields() {
        let csv = "usn,name,note,semester\n\
                   1AB21CS001,\"Rao, Priya\",\"She said \"\"hi\"\"\",5\n";
        let sheet = Sheet::parse("m.csv", csv.as_bytes().to_vec()).unwrap();
        let row = sheet.rows().next().unwrap();

        assert_eq!(row.get("name"), Some("Rao, Priya"));
        assert_eq!(row.get("note"), Some(r#"She said "hi""#));
        assert_eq!(row.get("semester"), Some("5"));
    }

    #[test]
    fn quoted_newlines_stay_in_one_row() {
        let csv = "usn,name,semester\n1AB21CS001,\"Rao\nPriya\",5\n1AB21CS002,Arjun,3\n";
        let sheet = Sheet::parse("mentees.csv", csv.as_bytes().to_vec()).unwrap();

        let rows: Vec<_> = sheet.rows().collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].number, 2);
        assert_eq!(rows[0].get("name"), Some("Rao\nPriya"));
        assert_eq!(rows[0].get("semester"), Some("5"));
        // the quoted break pushes the next record to line 4
        assert_eq!(rows[1].number, 4);
        assert_eq!(rows[1].get("usn"), Some("1AB21CS002"));
    }

    #[test]
    fn short_rows_are_accepted() {
        let csv = b"usn,name,section\n1AB21CS001,Priya\n".to_vec();
        let sheet = Sheet::parse("m.csv", csv).unwrap();
        let row = sheet.rows().next().unwrap();

        assert_eq!(row.get("name"), Some("Priya"));
        assert_eq!(row.get("section"), None);
    }

    #[test]
    fn reads_csv_rows_with_line_numbers() {
        let csv = "USN,Name,Semester\r\n1ab21cs001,Priya,5\r\n\r\n1AB21CS002,Arjun,3\r\n";
        let sheet = Sheet::parse("mentees.csv", csv.as_bytes().to_vec()).unwrap();

        sheet.require_columns(&["usn", "name", "semester"]).unwrap();
        let rows: Vec<_> = sheet.rows().collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].number, 2);
        assert_eq!(rows[0].get("name"), Some("Priya"));
        assert_eq!(rows[1].number, 4);
        assert_eq!(rows[1].get("section"), None);
    }

    #[test]
    fn reports_missing_columns_and_empty_files() {
        let sheet = Sheet::parse("m.csv", b"usn,name\n".to_vec()).unwrap();
        assert!(matches!(
            sheet.require_columns(&["usn", "name", "semester"]),
            Err(ImportError::MissingColumns(cols)) if cols == vec!["semester".to_string()]
        ));

        assert!(matches!(
            Sheet::parse("m.csv", b"\n\n".to_vec()),
            Err(ImportError::EmptyFile)
        ));
    }

    #[test]
    fn blank_cells_are_required_errors() {
        let sheet = Sheet::parse("m.csv", b"usn,name\n1AB21CS001,  \n".to_vec()).unwrap();
        let row = sheet.rows().next().unwrap();

        assert_eq!(row.required("usn").unwrap(), "1AB21CS001");
        assert_eq!(row.required("name").unwrap_err(), "Column 'name' is empty");
    }

    #[test]
    fn rejects_invalid_utf8_csv() {
        assert!(matches!(
            Sheet::parse("m.csv", vec![0xff, 0xfe, 0x00]),
            Err(ImportError::InvalidEncoding(_))
        ));
    }

    #[test]
    fn whole_floats_read_as_integers() {
        assert_eq!(cell_text(&Data::Float(5.0)), "5");
        assert_eq!(cell_text(&Data::String("A".to_string())), "A");
        assert_eq!(cell_text(&Data::Empty), "");
    }
}
