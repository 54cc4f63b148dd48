use guff::core::Game;
use guff::term::{AnchorY, FrameBuffer, GameView, Viewport};
use guff::types::{Action, GridPos};

fn row_text(fb: &FrameBuffer, y: u16) -> String {
    (0..fb.width()).map(|x| fb.get(x, y).unwrap().ch).collect()
}

fn all_text(fb: &FrameBuffer) -> String {
    (0..fb.height()).map(|y| row_text(fb, y)).collect::<Vec<_>>().join("\n")
}

#[test]
fn term_view_renders_border_corners() {
    let snap = Game::new().snapshot();
    let view = GameView::default();

    // 15 tiles * 4 cols by 10 tiles * 2 rows, plus border => 62x22
    let fb = view.render(&snap, Viewport::new(62, 22));

    assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
    assert_eq!(fb.get(61, 0).unwrap().ch, '┐');
    assert_eq!(fb.get(0, 21).unwrap().ch, '└');
    assert_eq!(fb.get(61, 21).unwrap().ch, '┘');
}

#[test]
fn term_view_draws_avatar_over_its_cell() {
    let snap = Game::new().snapshot();
    let view = GameView::default().with_anchor_y(AnchorY::Top);
    let vp = Viewport::new(62, 22);
    let fb = view.render(&snap, vp);

    let (x, y) = view
        .cell_origin(view.frame_origin(vp), GridPos::new(2, 2))
        .unwrap();
    for dy in 0..2 {
        for dx in 0..4 {
            assert_eq!(fb.get(x + dx, y + dy).unwrap().ch, '@');
        }
    }
    // Column 2 is the third tile from the bottom.
    assert_eq!((x, y), (9, 15));
}

#[test]
fn term_view_walls_differ_from_floor() {
    let snap = Game::new().snapshot();
    let view = GameView::default();
    let vp = Viewport::new(62, 22);
    let fb = view.render(&snap, vp);
    let frame = view.frame_origin(vp);

    let (wx, wy) = view.cell_origin(frame, GridPos::new(0, 0)).unwrap();
    let (fx, fy) = view.cell_origin(frame, GridPos::new(7, 3)).unwrap();
    assert_ne!(
        fb.get(wx, wy).unwrap().style.bg,
        fb.get(fx, fy).unwrap().style.bg
    );
}

#[test]
fn term_view_dims_faded_tiles() {
    let mut game = Game::new();
    game.update(16, &[Action::Fade]);
    let snap = game.snapshot();

    let view = GameView::default();
    let vp = Viewport::new(62, 22);
    let fb = view.render(&snap, vp);
    let frame = view.frame_origin(vp);

    // (3,3) is under the avatar's top-right corner but not covered by its glyphs.
    let (x, y) = view.cell_origin(frame, GridPos::new(3, 3)).unwrap();
    assert!(fb.get(x + 1, y).unwrap().style.dim);

    let (x, y) = view.cell_origin(frame, GridPos::new(8, 6)).unwrap();
    assert!(!fb.get(x + 1, y).unwrap().style.dim);
}

#[test]
fn term_view_draws_decoration() {
    let snap = Game::new().snapshot();
    let view = GameView::default();
    let vp = Viewport::new(62, 22);
    let fb = view.render(&snap, vp);

    let (x, y) = view
        .cell_origin(view.frame_origin(vp), GridPos::new(5, 5))
        .unwrap();
    assert_eq!(fb.get(x, y).unwrap().ch, '*');
}

#[test]
fn term_view_draws_side_panel_when_wide_enough() {
    let mut game = Game::new();
    game.update(16, &[Action::Right, Action::PlantTree]);
    let snap = game.snapshot();

    let view = GameView::default();
    let fb = view.render(&snap, Viewport::new(100, 24));
    let text = all_text(&fb);

    assert!(text.contains("CELL"), "panel missing:\n{}", text);
    assert!(text.contains("2, 2"));
    assert!(text.contains("right t"));
    assert!(text.contains("quit"));

    let narrow = view.render(&snap, Viewport::new(62, 22));
    assert!(!all_text(&narrow).contains("CELL"));
}
