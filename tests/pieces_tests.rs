//! Piece and kick tests - shapes, rotation transforms and SRS kick resolution

use blockfall::core::kicks::{kick_offsets, I_KICKS_CCW, I_KICKS_CW, KICK_COUNT};
use blockfall::core::{try_rotate, Board, Piece, Shape};
use blockfall::types::{PieceKind, Rotation};

fn minos(shape: &Shape) -> Vec<(i8, i8)> {
    shape.minos().collect()
}

#[test]
fn test_spawn_shapes() {
    let cases: [(PieceKind, &[(i8, i8)]); 7] = [
        (PieceKind::O, &[(0, 0), (1, 0), (0, 1), (1, 1)]),
        (PieceKind::I, &[(0, 1), (1, 1), (2, 1), (3, 1)]),
        (PieceKind::S, &[(1, 0), (2, 0), (0, 1), (1, 1)]),
        (PieceKind::Z, &[(0, 0), (1, 0), (1, 1), (2, 1)]),
        (PieceKind::L, &[(2, 0), (0, 1), (1, 1), (2, 1)]),
        (PieceKind::J, &[(0, 0), (0, 1), (1, 1), (2, 1)]),
        (PieceKind::T, &[(1, 0), (0, 1), (1, 1), (2, 1)]),
    ];
    for (kind, expected) in cases {
        assert_eq!(minos(&Shape::spawn(kind)), expected, "{kind:?}");
    }
}

#[test]
fn test_shape_sides() {
    assert_eq!(Shape::spawn(PieceKind::O).side(), 2);
    assert_eq!(Shape::spawn(PieceKind::I).side(), 4);
    for kind in [PieceKind::S, PieceKind::Z, PieceKind::L, PieceKind::J, PieceKind::T] {
        assert_eq!(Shape::spawn(kind).side(), 3);
    }
}

#[test]
fn test_every_orientation_has_four_minos_inside_box() {
    for kind in PieceKind::ALL {
        let mut shape = Shape::spawn(kind);
        for _ in 0..4 {
            let cells = minos(&shape);
            assert_eq!(cells.len(), 4, "{kind:?}");
            let side = shape.side() as i8;
            assert!(cells.iter().all(|&(c, r)| (0..side).contains(&c) && (0..side).contains(&r)));
            shape = shape.rotated_cw();
        }
    }
}

#[test]
fn test_rotation_is_cyclic() {
    for kind in PieceKind::ALL {
        let spawned = Piece::spawned(kind);

        let mut cw = spawned;
        let mut ccw = spawned;
        for _ in 0..4 {
            cw = cw.rotated_cw();
            ccw = ccw.rotated_ccw();
        }
        assert_eq!(cw, spawned, "{kind:?} cw");
        assert_eq!(ccw, spawned, "{kind:?} ccw");
        assert_eq!(spawned.rotated_cw().rotated_ccw(), spawned);
    }
}

#[test]
fn test_rotation_index_follows_transform() {
    let t = Piece::spawned(PieceKind::T);
    assert_eq!(t.rotated_cw().rotation, Rotation::East);
    assert_eq!(t.rotated_cw().rotated_cw().rotation, Rotation::South);
    assert_eq!(t.rotated_ccw().rotation, Rotation::West);
}

#[test]
fn test_rotation_returns_new_value() {
    let t = Piece::spawned(PieceKind::T);
    let rotated = t.rotated_cw();

    assert_eq!(t.rotation, Rotation::North);
    assert_eq!((rotated.x, rotated.y), (t.x, t.y));
    assert_ne!(rotated.shape, t.shape);
}

#[test]
fn test_spawn_positions() {
    for kind in PieceKind::ALL {
        let piece = Piece::spawned(kind);
        let expected_x = (10 - kind.side() as i8) / 2;
        let expected_y = if kind == PieceKind::I { -1 } else { 0 };
        assert_eq!((piece.x, piece.y), (expected_x, expected_y), "{kind:?}");
    }
}

#[test]
fn test_t_rotation_success_without_kick() {
    let board = Board::new();
    let t = Piece::spawned(PieceKind::T).translated(0, 5);

    let placed = try_rotate(&board, &t, &t.rotated_cw()).expect("open space");
    assert_eq!((placed.x, placed.y), (t.x, t.y));

    let back = try_rotate(&board, &placed, &placed.rotated_ccw()).expect("open space");
    assert_eq!(back, t);
}

#[test]
fn test_t_rotation_with_wall_kick() {
    let board = Board::new();
    // East-facing T with its stem in column 0.
    let t = Piece {
        x: -1,
        y: 5,
        ..Piece::spawned(PieceKind::T).rotated_cw()
    };
    assert!(board.is_valid_position(&t, 0, 0));

    // North needs three columns, so the piece is pushed right.
    let placed = try_rotate(&board, &t, &t.rotated_ccw()).expect("kick available");
    assert_eq!(placed.rotation, Rotation::North);
    assert_eq!((placed.x, placed.y), (0, 5));
    assert!(board.is_valid_position(&placed, 0, 0));
}

#[test]
fn test_t_rotation_failure() {
    let mut board = Board::new();
    for y in 0..20 {
        board.fill_row_except(y, &[4], PieceKind::Z);
    }
    // No T orientation fits a one-column well.
    let t = Piece {
        x: 3,
        y: 10,
        ..Piece::spawned(PieceKind::T).rotated_cw()
    };
    assert!(try_rotate(&board, &t, &t.rotated_cw()).is_none());
    assert!(try_rotate(&board, &t, &t.rotated_ccw()).is_none());
}

#[test]
fn test_i_rotation_uses_direct_table() {
    assert_eq!(kick_offsets(PieceKind::I, 0, 1), I_KICKS_CW[0]);
    assert_eq!(kick_offsets(PieceKind::I, 2, 3), I_KICKS_CW[2]);
    assert_eq!(kick_offsets(PieceKind::I, 0, 3), I_KICKS_CCW[0]);
    assert_eq!(kick_offsets(PieceKind::I, 1, 0), I_KICKS_CCW[1]);
}

#[test]
fn test_i_kick_off_right_wall() {
    let board = Board::new();
    // Vertical I hugging the right wall.
    let i = Piece {
        x: 7,
        y: 5,
        ..Piece::spawned(PieceKind::I).rotated_cw()
    };
    assert!(board.is_valid_position(&i, 0, 0));

    let placed = try_rotate(&board, &i, &i.rotated_cw()).expect("kick available");
    assert_eq!(placed.rotation, Rotation::South);
    assert!(placed.cells().all(|(x, _)| (0..10).contains(&x)));
    assert!(board.is_valid_position(&placed, 0, 0));
}

#[test]
fn test_kick_table_shape() {
    for kind in PieceKind::ALL {
        for from in 0..4 {
            for to in [(from + 1) % 4, (from + 3) % 4] {
                let kicks = kick_offsets(kind, from, to);
                assert_eq!(kicks.len(), KICK_COUNT);
                assert_eq!(kicks[0], (0, 0));
            }
        }
    }
}

#[test]
fn test_cw_then_ccw_restores_position() {
    let board = Board::new();
    for kind in PieceKind::ALL {
        let start = Piece::spawned(kind).translated(0, 8);
        let cw = try_rotate(&board, &start, &start.rotated_cw()).expect("open space");
        let back = try_rotate(&board, &cw, &cw.rotated_ccw()).expect("open space");
        assert_eq!(back, start, "{kind:?}");
    }
}
