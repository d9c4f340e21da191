use batalha_naval::{board_view, Board, Grid, FLEET, NUM_SHIPS, SHIP_LENGTH};

/// The board rows alone: the legend line also contains one `" ~ "` and one
/// `" X "`, so glyph counts must stop before it.
fn board_rows(out: &str) -> &str {
    out.split("\nLegenda").next().unwrap()
}

#[test]
fn test_empty_board_render() {
    let grid = Grid::new();
    let out = format!("{}", board_view(&grid));

    assert!(out.contains("=== TABULEIRO DE BATALHA NAVAL ==="));
    assert!(out.contains("    0  1  2  3  4  5  6  7  8  9 \n"));
    assert!(out.contains("Legenda: ~ = Água, X = Navio"));
    let rows = board_rows(&out);
    assert_eq!(rows.matches(" ~ ").count(), 100);
    assert_eq!(rows.matches(" X ").count(), 0);
}

#[test]
fn test_fleet_board_render() {
    let mut board = Board::new();
    for ship in FLEET.iter() {
        board.place(ship).unwrap();
    }
    let out = format!("{}", board_view(board.grid()));

    let rows = board_rows(&out);
    assert_eq!(rows.matches(" X ").count(), NUM_SHIPS * SHIP_LENGTH);
    assert_eq!(rows.matches(" ~ ").count(), 100 - NUM_SHIPS * SHIP_LENGTH);

    // Row 2 holds the horizontal ship (cols 1..=3) plus the second cell of
    // the descending diagonal at col 7.
    assert!(out.contains(" 2  ~  X  X  X  ~  ~  ~  X  ~  ~ \n"));
    // Row 0 is untouched.
    assert!(out.contains(" 0  ~  ~  ~  ~  ~  ~  ~  ~  ~  ~ \n"));
    // Row 9 holds the last cell of the ascending diagonal at col 6.
    assert!(out.contains(" 9  ~  ~  ~  ~  ~  ~  X  ~  ~  ~ \n"));
}
