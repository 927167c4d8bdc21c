// src/term/screen/tests.rs

use super::*;
use crate::cell::CellFlags;
use std::sync::Arc;
use std::thread;

fn screen(w: usize, h: usize) -> Screen {
    Screen::new(w, h, ColorMode::Sixteen)
}

// --- Construction ---

#[test_log::test]
fn test_new_screen_is_blank() {
    let s = screen(5, 3);
    assert_eq!(s.width(), 5);
    assert_eq!(s.height(), 3);
    assert_eq!(s.color_mode(), ColorMode::Sixteen);
    for y in 0..3 {
        for x in 0..5 {
            assert_eq!(s.get_cell(x, y).unwrap(), BLANK_CELL);
        }
    }
}

// --- Cell access ---

#[test_log::test]
fn test_set_then_get_round_trips() {
    let s = screen(10, 4);
    let cell = Cell::new('Q', 9).with_bg(3).with_highlight(true);
    s.set_cell(9, 3, cell).unwrap();
    assert_eq!(s.get_cell(9, 3).unwrap(), cell);
    // Neighbours untouched.
    assert_eq!(s.get_cell(8, 3).unwrap(), BLANK_CELL);
    assert_eq!(s.get_cell(9, 2).unwrap(), BLANK_CELL);
}

#[test_log::test]
fn test_out_of_bounds_access_fails() {
    let s = screen(10, 4);
    let expected = |x, y| ScreenError::OutOfBounds { x, y, width: 10, height: 4 };

    assert_eq!(s.get_cell(10, 0), Err(expected(10, 0)));
    assert_eq!(s.get_cell(0, 4), Err(expected(0, 4)));
    assert_eq!(s.set_cell(10, 0, Cell::new('x', 1)), Err(expected(10, 0)));
    assert_eq!(s.set_cell(usize::MAX, usize::MAX, Cell::new('x', 1)), Err(expected(usize::MAX, usize::MAX)));

    // A rejected write has no effect.
    assert!(s.snapshot().cells.iter().all(|c| *c == BLANK_CELL));
}

#[test_log::test]
fn test_row_major_layout_does_not_alias() {
    // (4, 0) and (0, 1) would share an index if the stride were wrong.
    let s = screen(4, 2);
    assert!(s.set_cell(4, 0, Cell::new('a', 1)).is_err());
    s.set_cell(3, 0, Cell::new('b', 1)).unwrap();
    s.set_cell(0, 1, Cell::new('c', 1)).unwrap();
    assert_eq!(s.get_cell(3, 0).unwrap().c, 'b');
    assert_eq!(s.get_cell(0, 1).unwrap().c, 'c');
}

// --- Bulk operations ---

#[test_log::test]
fn test_fill_and_clear() {
    let s = screen(3, 3);
    s.fill(Cell::filled('#', 2));
    assert!(s.snapshot().cells.iter().all(|c| *c == Cell::filled('#', 2)));

    s.clear();
    assert!(s.snapshot().cells.iter().all(|c| *c == BLANK_CELL));
}

#[test_log::test]
fn test_snapshot_is_independent_copy() {
    let s = screen(3, 2);
    s.set_cell(0, 0, Cell::new('a', 1)).unwrap();
    let snap = s.snapshot();
    s.set_cell(0, 0, Cell::new('z', 1)).unwrap();

    assert_eq!(snap.cell(0, 0).unwrap().c, 'a');
    assert_eq!(snap.cell(3, 0), None);
    assert_eq!(snap.row_text(0).as_deref(), Some("a  "));
    assert_eq!(snap.row_text(2), None);
    assert_eq!(snap.rows().count(), 2);
}

#[test_log::test]
fn test_snapshot_with_missing_cells_returns_none() {
    let json = r#"{"width":3,"height":2,"color_mode":"Monochrome","cells":[]}"#;
    let snap: ScreenSnapshot = serde_json::from_str(json).unwrap();
    assert_eq!(snap.cell(0, 0), None);
    assert_eq!(snap.row_text(0), None);

    let short = ScreenSnapshot {
        width: 3,
        height: 2,
        color_mode: ColorMode::Monochrome,
        cells: vec![Cell::new('a', 1); 4],
    };
    assert_eq!(short.row_text(0).as_deref(), Some("aaa"));
    assert_eq!(short.row_text(1), None);
}

// --- Concurrency ---

#[test_log::test]
fn test_concurrent_writers_on_distinct_cells() {
    let s = Arc::new(screen(16, 16));
    thread::scope(|scope| {
        for y in 0..16 {
            let s = Arc::clone(&s);
            scope.spawn(move || {
                for x in 0..16 {
                    s.set_cell(x, y, Cell::new('w', y as u8)).unwrap();
                }
            });
        }
    });
    for y in 0..16 {
        for x in 0..16 {
            assert_eq!(s.get_cell(x, y).unwrap(), Cell::new('w', y as u8));
        }
    }
}

#[test_log::test]
fn test_readers_never_see_torn_cells() {
    let s = Arc::new(screen(1, 1));
    let a = Cell { c: 'a', fg: 1, bg: 1, flags: CellFlags::empty() };
    let b = Cell { c: 'b', fg: 2, bg: 2, flags: CellFlags::HIGHLIGHT };
    s.set_cell(0, 0, a).unwrap();

    thread::scope(|scope| {
        scope.spawn(|| {
            for i in 0..2_000 {
                s.set_cell(0, 0, if i % 2 == 0 { b } else { a }).unwrap();
            }
        });
        for _ in 0..4 {
            scope.spawn(|| {
                for _ in 0..2_000 {
                    let seen = s.get_cell(0, 0).unwrap();
                    assert!(seen == a || seen == b, "torn cell: {:?}", seen);
                }
            });
        }
    });
}
