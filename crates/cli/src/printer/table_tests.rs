use super::*;

fn render(table: &Table) -> String {
    let mut out = Vec::new();
    table.write(&mut out).expect("write table");
    String::from_utf8(out).expect("utf8")
}

fn row(cells: &[&str]) -> Vec<Cell> {
    cells.iter().map(|c| Cell::new((*c).to_owned())).collect()
}

#[test]
fn columns_pad_to_widest_cell_plus_one() {
    let mut table = Table::new();
    table.push_row(row(&["2.0 KiB", "big"]));
    table.push_row(row(&["10 B", "small"]));

    assert_eq!(render(&table), "2.0 KiB big\n10 B    small\n");
}

#[test]
fn last_column_is_not_padded() {
    let mut table = Table::new();
    table.push_row(row(&["a", "short"]));
    table.push_row(row(&["b", "much longer"]));

    for line in render(&table).lines() {
        assert!(!line.ends_with(' '), "trailing space in {line:?}");
    }
}

#[test]
fn empty_cells_still_take_one_column() {
    let mut table = Table::new();
    table.push_row(row(&["x", "", "y"]));
    table.push_row(row(&["x", "", "z"]));

    assert_eq!(render(&table), "x  y\nx  z\n");
}

#[test]
fn painted_cells_align_by_plain_width() {
    let mut table = Table::new();
    table.push_row(vec![
        Cell::painted("\x1b[1mab\x1b[0m".to_owned(), "ab"),
        Cell::new("1".to_owned()),
    ]);
    table.push_row(row(&["abcd", "2"]));

    assert_eq!(render(&table), "\x1b[1mab\x1b[0m   1\nabcd 2\n");
}

#[test]
fn wide_characters_count_double() {
    let cell = Cell::new("日本".to_owned());
    assert_eq!(cell.width(), 4);
    assert_eq!(cell.text(), "日本");
}

#[test]
fn empty_table_writes_nothing() {
    assert_eq!(render(&Table::new()), "");
}
