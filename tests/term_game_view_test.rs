use blockfall::core::{GameState, Piece};
use blockfall::term::{FrameBuffer, GameView, Viewport};
use blockfall::types::{GameEvent, PieceKind};

fn screen_text(fb: &FrameBuffer) -> String {
    (0..fb.height())
        .map(|y| fb.row_text(y))
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn term_view_renders_border_corners() {
    let snap = GameState::with_seed(1).snapshot();
    let view = GameView::default();

    // 10x20 cells at 2x1 chars plus the border => 22x22.
    let fb = view.render(&snap, None, Viewport::new(22, 22));

    assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
    assert_eq!(fb.get(21, 0).unwrap().ch, '┐');
    assert_eq!(fb.get(0, 21).unwrap().ch, '└');
    assert_eq!(fb.get(21, 21).unwrap().ch, '┘');
}

#[test]
fn term_view_renders_locked_cell_as_two_chars_wide() {
    let mut snap = GameState::with_seed(1).snapshot();
    snap.board[19][0] = Some(PieceKind::I);

    let fb = GameView::default().render(&snap, None, Viewport::new(22, 22));

    // Inside the border the origin is (1, 1).
    assert_eq!(fb.get(1, 20).unwrap().ch, '█');
    assert_eq!(fb.get(2, 20).unwrap().ch, '█');
    assert_eq!(fb.get(3, 20).unwrap().ch, '·');
}

#[test]
fn term_view_draws_ghost_below_active_piece() {
    let mut snap = GameState::with_seed(1).snapshot();
    snap.active = Piece::spawned(PieceKind::O);
    snap.ghost = snap.active.translated(0, 18);

    let fb = GameView::default().render(&snap, None, Viewport::new(22, 22));

    // O occupies board columns 4-5 => chars 9..=12.
    for x in 9..=12 {
        assert_eq!(fb.get(x, 1).unwrap().ch, '█');
        assert_eq!(fb.get(x, 19).unwrap().ch, '░');
        assert_eq!(fb.get(x, 20).unwrap().ch, '░');
    }
    assert_eq!(fb.get(9, 10).unwrap().ch, '·');
}

#[test]
fn term_view_draws_side_panel_when_wide_enough() {
    let mut snap = GameState::with_seed(1).snapshot();
    snap.score = 1234;
    snap.level = 3;
    snap.hold = Some(Piece::spawned(PieceKind::T));
    snap.next = PieceKind::Z;

    let fb = GameView::default().render(
        &snap,
        Some(GameEvent::HoldRejected),
        Viewport::new(60, 22),
    );
    let text = screen_text(&fb);

    assert!(text.contains("SCORE"));
    assert!(text.contains("1234"));
    assert!(text.contains("LEVEL"));
    assert!(text.contains("HOLD T"));
    assert!(text.contains("NEXT Z"));
    assert!(text.contains("HOLD USED"));
    assert!(!text.contains("RESETS"));
}

#[test]
fn term_view_shows_top_out_count() {
    let mut snap = GameState::with_seed(1).snapshot();
    snap.top_outs = 2;

    let fb = GameView::default().render(&snap, None, Viewport::new(60, 22));
    assert!(screen_text(&fb).contains("RESETS 2"));
}

#[test]
fn term_view_skips_side_panel_when_narrow() {
    let snap = GameState::with_seed(1).snapshot();
    let fb = GameView::default().render(&snap, None, Viewport::new(30, 22));
    assert!(!screen_text(&fb).contains("SCORE"));
}

#[test]
fn term_view_survives_tiny_viewport() {
    let snap = GameState::with_seed(1).snapshot();
    let view = GameView::default();

    let mut fb = FrameBuffer::new(0, 0);
    view.render_into(&snap, None, Viewport::new(5, 3), &mut fb);
    assert_eq!((fb.width(), fb.height()), (5, 3));

    view.render_into(&snap, None, Viewport::new(0, 0), &mut fb);
    assert_eq!(fb.glyphs().len(), 0);
}

#[test]
fn term_view_is_centered_in_large_viewport() {
    let snap = GameState::with_seed(1).snapshot();
    let fb = GameView::default().render(&snap, None, Viewport::new(80, 24));

    assert_eq!(fb.get(29, 1).unwrap().ch, '┌');
    assert_eq!(fb.get(50, 22).unwrap().ch, '┘');
}
