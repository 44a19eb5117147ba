/*!
 * Tests for the CSV-backed table model
 */

use colingo::errors::TableError;
use colingo::table::{Table, output_column_name};

const SAMPLE_CSV: &str = "id,title,notes\n1,Hello,first\n2,World,second\n";

#[test]
fn test_fromReader_withSimpleCsv_shouldParseHeadersAndRows() {
    let table = Table::from_reader(SAMPLE_CSV.as_bytes()).unwrap();
    assert_eq!(table.headers(), ["id", "title", "notes"]);
    assert_eq!(table.row_count(), 2);

    let title = table.column("title").unwrap();
    assert_eq!(title.values, vec!["Hello", "World"]);
}

#[test]
fn test_fromReader_withRaggedRows_shouldPadMissingCells() {
    let csv = "a,b,c\n1,2\n3,4,5,6\n";
    let table = Table::from_reader(csv.as_bytes()).unwrap();
    assert_eq!(table.row_count(), 2);

    let c = table.column("c").unwrap();
    // Short row padded with "", long row truncated to the header width
    assert_eq!(c.values, vec!["", "5"]);
}

#[test]
fn test_selectColumns_withUnknownName_shouldReturnColumnNotFound() {
    let table = Table::from_reader(SAMPLE_CSV.as_bytes()).unwrap();
    let result = table.select_columns(&["title".to_string(), "missing".to_string()]);
    assert!(matches!(result, Err(TableError::ColumnNotFound(name)) if name == "missing"));
}

#[test]
fn test_selectColumns_shouldPreserveSelectionOrder() {
    let table = Table::from_reader(SAMPLE_CSV.as_bytes()).unwrap();
    let columns = table
        .select_columns(&["notes".to_string(), "id".to_string()])
        .unwrap();
    assert_eq!(columns[0].name, "notes");
    assert_eq!(columns[1].name, "id");
}

#[test]
fn test_appendColumn_withMatchingLength_shouldRoundTripThroughCsv() {
    let mut table = Table::from_reader(SAMPLE_CSV.as_bytes()).unwrap();
    table
        .append_column("title_JA", vec!["こんにちは".to_string(), "世界".to_string()])
        .unwrap();

    let mut buffer = Vec::new();
    table.write_csv(&mut buffer).unwrap();
    let written = String::from_utf8(buffer).unwrap();

    let reparsed = Table::from_reader(written.as_bytes()).unwrap();
    assert_eq!(reparsed.headers(), ["id", "title", "notes", "title_JA"]);
    let translated = reparsed.column("title_JA").unwrap();
    assert_eq!(translated.values, vec!["こんにちは", "世界"]);
}

#[test]
fn test_appendColumn_withWrongLength_shouldReturnLengthMismatch() {
    let mut table = Table::from_reader(SAMPLE_CSV.as_bytes()).unwrap();
    let result = table.append_column("extra", vec!["only one".to_string()]);
    assert!(matches!(
        result,
        Err(TableError::LengthMismatch {
            expected: 2,
            got: 1
        })
    ));
}

#[test]
fn test_appendColumn_withExistingName_shouldReturnDuplicateColumn() {
    let mut table = Table::from_reader(SAMPLE_CSV.as_bytes()).unwrap();
    let result = table.append_column("title", vec!["x".to_string(), "y".to_string()]);
    assert!(matches!(result, Err(TableError::DuplicateColumn(name)) if name == "title"));
}

#[test]
fn test_outputColumnName_shouldUppercaseLanguageSuffix() {
    assert_eq!(output_column_name("title", "ja"), "title_JA");
    assert_eq!(output_column_name("notes", "fr"), "notes_FR");
}
