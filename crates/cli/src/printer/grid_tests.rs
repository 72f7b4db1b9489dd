use super::*;

fn grid(names: &[&str]) -> Grid {
    Grid::new(names.iter().map(|n| Cell::new((*n).to_owned())).collect(), 2)
}

fn render(g: &Grid, width: usize) -> String {
    let mut out = Vec::new();
    g.write(&mut out, width).expect("write grid");
    String::from_utf8(out).expect("utf8")
}

#[test]
fn fills_rows_left_to_right() {
    let g = grid(&["a", "bb", "ccc", "dddd"]);

    // Column width is 4 + 2; two columns fit in 14.
    assert_eq!(g.columns(14), 2);
    assert_eq!(render(&g, 14), "a     bb\nccc   dddd\n");
}

#[test]
fn everything_on_one_line_when_it_fits() {
    let g = grid(&["x", "y/", "z*"]);
    assert_eq!(render(&g, 80), "x   y/  z*\n");
}

#[test]
fn narrow_width_falls_back_to_one_column() {
    let g = grid(&["longer_name", "b"]);

    assert_eq!(g.columns(3), 1);
    assert_eq!(render(&g, 3), "longer_name\nb\n");
}

#[test]
fn column_count_cases() {
    let g = grid(&["abc", "de", "f", "gh", "ijk"]);

    let cases: &[(usize, usize)] = &[(0, 1), (4, 1), (5, 1), (10, 2), (15, 3), (25, 5), (200, 5)];
    for (width, expected) in cases {
        assert_eq!(g.columns(*width), *expected, "width {}", width);
    }
}

#[test]
fn painted_names_pad_by_plain_width() {
    let cells = vec![
        Cell::painted("\x1b[1;34msrc\x1b[0m/".to_owned(), "src/"),
        Cell::new("a".to_owned()),
    ];
    let g = Grid::new(cells, 2);

    assert_eq!(render(&g, 80), "\x1b[1;34msrc\x1b[0m/  a\n");
}
