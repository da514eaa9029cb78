use tiny_adventure::core::{Game, World};
use tiny_adventure::term::{Anchor, GameView, Tone, Viewport};
use tiny_adventure::types::{Key, STATUS_HELP, WON_LINES};

fn screen_text(fb: &tiny_adventure::term::FrameBuffer) -> Vec<String> {
    (0..fb.height()).map(|y| fb.line(y)).collect()
}

#[test]
fn term_view_draws_game_screens() {
    let mut game = Game::new(World::shipped().unwrap());
    let view = GameView::default();
    let vp = Viewport::new(60, 8);

    let title = screen_text(&view.render(&game.screen(), vp));
    assert_eq!(title[0], "Welcome to the Tiny Adventure!");

    game.handle_key(Key::Other);
    let map = screen_text(&view.render(&game.screen(), vp));
    assert_eq!(
        &map[..6],
        &[
            "###########",
            "#.........#",
            "#....@....#",
            "#....$....#",
            "###########",
            STATUS_HELP,
        ]
    );

    game.handle_key(Key::Char('s'));
    let won = screen_text(&view.render(&game.screen(), vp));
    assert_eq!(&won[..3], &WON_LINES);
}

#[test]
fn term_view_marks_player_on_treasure_as_player() {
    let mut game = Game::new(World::from_rows(&["#####", "#@$.#", "#####"]).unwrap());
    game.handle_key(Key::Other);
    game.handle_key(Key::Right);
    // Treasure reached: the world still shows the player on top of it.
    let fb = GameView::default().render(
        &tiny_adventure::core::Screen::Map {
            world: game.world(),
            status: "",
        },
        Viewport::new(5, 4),
    );
    assert_eq!(fb.line(1), "#.@.#");
    assert_eq!(fb.get(2, 1).unwrap().style.fg, Tone::Yellow);
}

#[test]
fn term_view_centers_when_asked() {
    let world = World::from_rows(&["@"]).unwrap();
    let view = GameView::default().with_anchor(Anchor::Center);
    let fb = view.render(
        &tiny_adventure::core::Screen::Map {
            world: &world,
            status: "",
        },
        Viewport::new(5, 4),
    );
    // 1x1 map plus a status row: block is 1 wide, 2 high.
    assert_eq!(fb.get(2, 1).unwrap().ch, '@');
}

#[test]
fn term_view_survives_tiny_viewport() {
    let world = World::shipped().unwrap();
    let fb = GameView::default().render(
        &tiny_adventure::core::Screen::Map {
            world: &world,
            status: STATUS_HELP,
        },
        Viewport::new(3, 2),
    );
    assert_eq!(fb.line(0), "###");
    assert_eq!(fb.line(1), "#..");
}
