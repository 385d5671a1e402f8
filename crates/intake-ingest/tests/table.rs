use intake_ingest::{detect_delimiter, parse_table, parse_table_with};
use intake_model::Delimiter;
use proptest::prelude::{ProptestConfig, Strategy, prop, prop_assert_eq, proptest};

#[test]
fn quoted_cells_may_contain_the_delimiter_and_escaped_quotes() {
    let text = concat!(
        "Contact Info,Details\n",
        "\"Smith, Jane\",\"jane@company.com | Mobile: +1-555-0123\"\n",
        "\"Acme \"\"The Best\"\" Corp\",info@acme.com\n",
    );
    let table = parse_table(text);
    assert_eq!(table.delimiter, Delimiter::Comma);
    assert!(table.has_headers);
    assert_eq!(table.columns, vec!["Contact Info", "Details"]);
    assert_eq!(table.rows[0][0], "Smith, Jane");
    assert_eq!(table.rows[1][0], "Acme \"The Best\" Corp");
}

#[test]
fn blank_rows_are_dropped() {
    let text = "Name,Email\n,\nJohn Doe,john@example.com\n  ,  \n";
    let table = parse_table(text);
    assert_eq!(table.row_count(), 1);
}

#[test]
fn headerless_tables_synthesize_positional_columns() {
    let text = "John Doe|john@example.com|555-123-4567|Acme Corp\n\
                Jane Smith|jane@test.org|555-987-6543|Tech Inc\n";
    let table = parse_table(text);
    assert_eq!(table.delimiter, Delimiter::Pipe);
    assert!(!table.has_headers);
    assert_eq!(
        table.columns,
        vec!["column_0", "column_1", "column_2", "column_3"]
    );
    assert_eq!(table.row_count(), 2);
}

#[test]
fn spanish_headers_are_recognized() {
    let text = "Nombre;Apellidos;Correo\nLuis;García;luis@empresa.es\n";
    let table = parse_table(text);
    assert_eq!(table.delimiter, Delimiter::Semicolon);
    assert!(table.has_headers);
    assert_eq!(table.row_count(), 1);
}

#[test]
fn tab_separated_rows_parse() {
    let text = "Name\tEmail\nJohn Doe\tjohn@example.com\n";
    let table = parse_table(text);
    assert_eq!(table.delimiter, Delimiter::Tab);
    assert_eq!(table.rows[0], vec!["John Doe", "john@example.com"]);
}

#[test]
fn explicit_delimiter_overrides_detection() {
    let text = "a;b,c\nd;e,f\n";
    let table = parse_table_with(text, ';').expect("semicolon is supported");
    assert_eq!(table.delimiter, Delimiter::Semicolon);
    assert_eq!(table.rows[0], vec!["d", "e,f"]);
}

fn serialize(rows: &[Vec<String>], delimiter: Delimiter) -> String {
    rows.iter()
        .map(|row| row.join(&delimiter.as_char().to_string()))
        .collect::<Vec<_>>()
        .join("\n")
}

fn delimiter_strategy() -> impl Strategy<Value = Delimiter> {
    prop::sample::select(Delimiter::CANDIDATES.to_vec())
}

fn rows_strategy() -> impl Strategy<Value = Vec<Vec<String>>> {
    (2usize..6).prop_flat_map(|width| {
        prop::collection::vec(
            prop::collection::vec("[a-z]{1,8}", width..=width),
            2usize..6,
        )
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    // Re-serializing parsed rows with the detected delimiter and
    // re-parsing yields the same delimiter and an identical row count.
    #[test]
    fn delimiter_detection_is_stable(
        delimiter in delimiter_strategy(),
        rows in rows_strategy(),
    ) {
        let text = serialize(&rows, delimiter);
        prop_assert_eq!(detect_delimiter(&text), delimiter);

        let table = parse_table(&text);
        prop_assert_eq!(table.delimiter, delimiter);

        let mut all_rows = Vec::new();
        if table.has_headers {
            all_rows.push(table.columns.clone());
        }
        all_rows.extend(table.rows.iter().cloned());
        let round = serialize(&all_rows, table.delimiter);
        let reparsed = parse_table(&round);
        prop_assert_eq!(reparsed.delimiter, table.delimiter);
        prop_assert_eq!(
            reparsed.row_count() + usize::from(reparsed.has_headers),
            table.row_count() + usize::from(table.has_headers)
        );
    }
}
