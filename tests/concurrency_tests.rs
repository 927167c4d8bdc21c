//! Concurrency tests: many threads sharing one dispatcher, manager and screen.

mod support;

use std::sync::Arc;
use std::thread;

use term_screen::{Cell, CellFlags, Dispatcher, ScreenError, ScreenManager};
use support::stream_harness::StreamHarness;

#[test]
fn test_parallel_dispatch_to_distinct_rows() {
    let harness = StreamHarness::new();
    harness.setup(32, 16, 0x02).unwrap();

    thread::scope(|scope| {
        for y in 0..16u8 {
            let dispatcher = &harness.dispatcher;
            scope.spawn(move || {
                for x in 0..32u8 {
                    let frame = [0x02, 0x04, x, y, y, b'a' + (y % 26)];
                    dispatcher.handle(&term_screen::decode(&frame).unwrap()).unwrap();
                }
            });
        }
    });

    let snapshot = harness.snapshot().unwrap();
    for y in 0..16usize {
        for x in 0..32usize {
            let expected = Cell::new((b'a' + (y as u8 % 26)) as char, y as u8);
            assert_eq!(snapshot.cell(x, y), Some(expected), "cell ({}, {})", x, y);
        }
    }
}

#[test]
fn test_concurrent_lines_never_touch_other_rows() {
    let harness = StreamHarness::new();
    harness.setup(50, 10, 0x01).unwrap();
    let screen = harness.dispatcher.manager().current().unwrap();
    let sentinel = Cell::new('S', 9).with_highlight(true);
    screen.set_cell(0, 9, sentinel).unwrap();

    thread::scope(|scope| {
        for y in 0..9u8 {
            let harness = &harness;
            scope.spawn(move || {
                for _ in 0..20 {
                    harness.send(&[0x03, 0x06, 0, y, 49, y, 1, b'-']).unwrap();
                }
            });
        }
    });

    assert_eq!(screen.get_cell(0, 9).unwrap(), sentinel);
    for y in 0..9 {
        assert_eq!(harness.row(y), "-".repeat(50));
    }
}

#[test]
fn test_readers_observe_whole_cells_during_writes() {
    let manager = Arc::new(ScreenManager::new());
    let screen = manager.setup(&[1, 1, 0x01], None).unwrap();
    let a = Cell { c: 'a', fg: 1, bg: 1, flags: CellFlags::empty() };
    let b = Cell { c: 'b', fg: 2, bg: 2, flags: CellFlags::HIGHLIGHT };
    screen.set_cell(0, 0, a).unwrap();

    thread::scope(|scope| {
        for w in 0..2 {
            let screen = Arc::clone(&screen);
            scope.spawn(move || {
                for i in 0..5_000 {
                    let cell = if (i + w) % 2 == 0 { a } else { b };
                    screen.set_cell(0, 0, cell).unwrap();
                }
            });
        }
        for _ in 0..4 {
            let screen = Arc::clone(&screen);
            scope.spawn(move || {
                for _ in 0..5_000 {
                    let seen = screen.get_cell(0, 0).unwrap();
                    assert!(seen == a || seen == b, "torn cell: {:?}", seen);
                    assert_eq!(screen.width(), 1);
                }
            });
        }
    });
}

#[test]
fn test_setup_while_old_screen_is_read() {
    let manager = Arc::new(ScreenManager::new());
    let dispatcher = Dispatcher::new(Arc::clone(&manager));
    dispatcher.handle(&term_screen::decode(&[0x01, 0x03, 8, 8, 0x00]).unwrap()).unwrap();
    let old = manager.current().unwrap();

    thread::scope(|scope| {
        scope.spawn(|| {
            for i in 0..50u8 {
                let width = 1 + (i % 20);
                dispatcher
                    .handle(&term_screen::decode(&[0x01, 0x03, width, 4, 0x01]).unwrap())
                    .unwrap();
            }
        });
        scope.spawn(|| {
            for _ in 0..1_000 {
                // The captured reference keeps observing the original grid.
                assert_eq!(old.width(), 8);
                assert_eq!(old.get_cell(7, 7).unwrap().c, ' ');
            }
        });
        scope.spawn(|| {
            for _ in 0..1_000 {
                let current = manager.current().unwrap();
                assert_eq!(current.snapshot().cells.len(), current.width() * current.height());
            }
        });
    });

    assert_eq!(manager.current().unwrap().width(), 1 + (49 % 20));
}

#[test]
fn test_concurrent_draws_without_screen_all_fail_cleanly() {
    let harness = StreamHarness::new();
    thread::scope(|scope| {
        for _ in 0..4 {
            scope.spawn(|| {
                assert_eq!(
                    harness.send(&[0x02, 0x04, 0, 0, 1, b'x']),
                    Err(ScreenError::NoScreenInitialized)
                );
            });
        }
    });
    assert!(harness.snapshot().is_none());
}
