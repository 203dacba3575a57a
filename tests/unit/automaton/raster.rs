use super::*;

#[test]
fn row_zero_lands_at_the_bottom() {
    let grid = Grid::from_rows(&["#.", ".."]).unwrap();
    let img = to_image(&grid, 2, PINK, BLACK).unwrap();
    assert_eq!(img.dimensions(), (4, 4));
    assert_eq!(img.get_pixel(0, 3).0, PINK);
    assert_eq!(img.get_pixel(1, 2).0, PINK);
    assert_eq!(img.get_pixel(0, 0).0, BLACK);
    assert_eq!(img.get_pixel(3, 3).0, BLACK);
}

#[test]
fn non_square_grids_keep_their_aspect() {
    let grid = Grid::new(2, 5).unwrap();
    let img = to_image(&grid, 3, PINK, BLACK).unwrap();
    assert_eq!(img.dimensions(), (15, 6));
    assert!(img.pixels().all(|p| p.0 == BLACK));
}

#[test]
fn zero_cell_size_is_rejected() {
    let grid = Grid::new(2, 2).unwrap();
    assert!(to_image(&grid, 0, PINK, BLACK).is_err());
}
