//! Play scripted games without a window and check the rules.

use pixel_snake::{
    Canvas, Cell, CellRng, Direction, DirectionalInput, Flow, GameLoop, GameState, Snake, Surface,
    TickOutcome, RGB8,
};

/// Draw call made on a [`Recorder`].
#[derive(Debug, Clone, PartialEq, Eq)]
enum DrawCall {
    SetColor(RGB8),
    Clear,
    FillRect(i32, i32, i32, i32),
    Present,
}

/// Surface remembering all draw calls.
#[derive(Debug, Default)]
struct Recorder(Vec<DrawCall>);

impl Surface for Recorder {
    fn set_color(&mut self, color: RGB8) {
        self.0.push(DrawCall::SetColor(color));
    }

    fn clear(&mut self) {
        self.0.push(DrawCall::Clear);
    }

    fn fill_rect(&mut self, x: i32, y: i32, width: i32, height: i32) {
        self.0.push(DrawCall::FillRect(x, y, width, height));
    }

    fn present(&mut self) {
        self.0.push(DrawCall::Present);
    }
}

/// Holds a fixed set of keys.
struct Keys<'a>(&'a [Direction]);

impl DirectionalInput for Keys<'_> {
    fn held(&self, direction: Direction) -> bool {
        self.0.contains(&direction)
    }
}

const NO_KEYS: Keys<'static> = Keys(&[]);

/// Returns the queued values in order, panics when more are requested.
struct Scripted(Vec<i32>);

impl CellRng for Scripted {
    fn range_inclusive(&mut self, min: i32, max: i32) -> i32 {
        let value = self.0.remove(0);
        assert!((min..=max).contains(&value), "scripted value out of range");

        value
    }
}

fn game(cells: &[(i32, i32)], direction: Direction, food: (i32, i32)) -> GameState {
    let snake = Snake::from_cells(cells.iter().copied().map(Cell::from)).expect("not empty");

    GameState::with_parts(snake, direction, food.into())
}

fn cells(state: &GameState) -> Vec<(i32, i32)> {
    state.snake().cells().map(|cell| (cell.x, cell.y)).collect()
}

#[test]
fn single_step_right() {
    let mut state = game(&[(5, 5)], Direction::Right, (10, 10));

    let outcome = state.tick(&NO_KEYS, &mut Scripted(Vec::new()));

    assert_eq!(outcome, TickOutcome::Moved);
    assert_eq!(cells(&state), [(6, 5)]);
    assert_eq!(state.score(), 0);
    assert!(!state.is_over());
}

#[test]
fn reverse_is_rejected() {
    // Travelling left, the neck is on the right of the head
    let mut state = game(&[(4, 5), (5, 5)], Direction::Left, (10, 10));

    let outcome = state.tick(&Keys(&[Direction::Right]), &mut Scripted(Vec::new()));

    assert_eq!(outcome, TickOutcome::Moved);
    assert_eq!(state.direction(), Direction::Left);
    assert_eq!(cells(&state), [(3, 5), (4, 5)]);
}

#[test]
fn every_turn_is_accepted() {
    for current in Direction::ALL {
        for requested in Direction::ALL {
            if requested == current.reverse() {
                continue;
            }

            let mut state = game(&[(20, 15)], current, (0, 0));

            state.tick(
                &Keys(std::slice::from_ref(&requested)),
                &mut Scripted(Vec::new()),
            );

            assert_eq!(state.direction(), requested);
            assert_eq!(state.snake().head(), Cell::new(20, 15).offset(requested));
        }
    }
}

#[test]
fn wall_collision_does_not_move() {
    let mut state = game(&[(39, 5), (38, 5)], Direction::Right, (10, 10));
    let before = cells(&state);

    let outcome = state.tick(&NO_KEYS, &mut Scripted(Vec::new()));

    assert_eq!(outcome, TickOutcome::HitWall);
    assert!(state.is_over());
    assert_eq!(cells(&state), before);
}

#[test]
fn every_wall_collides() {
    let edges = [
        ((0, 10), Direction::Left),
        ((39, 10), Direction::Right),
        ((10, 0), Direction::Up),
        ((10, 29), Direction::Down),
    ];

    for ((x, y), direction) in edges {
        let mut state = game(&[(x, y)], direction, (20, 20));

        assert_eq!(
            state.tick(&NO_KEYS, &mut Scripted(Vec::new())),
            TickOutcome::HitWall,
            "moving {direction:?} from ({x}, {y})"
        );
    }
}

#[test]
fn self_collision_does_not_move() {
    // Hook shape travelling up, turning left moves the head onto the body
    let mut state = game(
        &[(5, 5), (5, 6), (4, 6), (4, 5), (4, 4)],
        Direction::Up,
        (20, 20),
    );
    let before = cells(&state);

    let outcome = state.tick(&Keys(&[Direction::Left]), &mut Scripted(Vec::new()));

    assert_eq!(outcome, TickOutcome::HitSelf);
    assert!(state.is_over());
    assert_eq!(cells(&state), before);
    assert_eq!(state.score(), 0);
}

#[test]
fn closed_loop_collides_with_own_body() {
    // Square loop travelling left, the head lands on the second segment
    let mut state = game(&[(5, 5), (4, 5), (4, 4), (5, 4)], Direction::Left, (10, 10));
    let before = cells(&state);

    let outcome = state.tick(&NO_KEYS, &mut Scripted(Vec::new()));

    assert_eq!(outcome, TickOutcome::HitSelf);
    assert!(state.is_over());
    assert_eq!(cells(&state), before);
    assert_eq!(state.score(), 0);
}

#[test]
fn eating_grows_and_relocates_food() {
    let mut state = game(&[(9, 10), (8, 10)], Direction::Right, (10, 10));

    let outcome = state.tick(&NO_KEYS, &mut Scripted(vec![39, 29]));

    assert_eq!(outcome, TickOutcome::Ate);
    assert_eq!(cells(&state), [(10, 10), (9, 10), (8, 10)]);
    assert_eq!(state.score(), 1);
    assert_eq!(state.food(), Cell::new(39, 29));
}

#[test]
fn food_may_land_on_the_snake() {
    let mut state = game(&[(9, 10), (8, 10)], Direction::Right, (10, 10));

    state.tick(&NO_KEYS, &mut Scripted(vec![8, 10]));

    assert!(state.snake().contains(state.food()));
}

#[test]
fn segments_follow_the_head() {
    let mut rng = fastrand::Rng::with_seed(99);
    let mut state = game(&[(10, 10), (9, 10), (8, 10), (7, 10)], Direction::Right, (0, 29));
    let script: [&[Direction]; 6] = [
        &[],
        &[Direction::Down],
        &[],
        &[Direction::Left],
        &[Direction::Left, Direction::Up],
        &[],
    ];

    for keys in script {
        let before = cells(&state);
        let length_before = state.snake().len();
        let score_before = state.score();

        let outcome = state.tick(&Keys(keys), &mut rng);
        assert!(!outcome.is_collision());

        let after = cells(&state);
        let (dx, dy) = state.direction().offset();
        assert_eq!(after[0], (before[0].0 + dx, before[0].1 + dy));

        // Every surviving segment took the place of the one in front of it
        for index in 1..after.len() {
            assert_eq!(after[index], before[index - 1]);
        }

        if outcome == TickOutcome::Ate {
            assert_eq!(state.snake().len(), length_before + 1);
            assert_eq!(state.score(), score_before + 1);
        } else {
            assert_eq!(state.snake().len(), length_before);
        }
    }
}

#[test]
fn food_is_always_on_the_grid() {
    let mut rng = fastrand::Rng::with_seed(5);

    for _ in 0..1000 {
        let mut state = game(&[(9, 10)], Direction::Right, (10, 10));

        assert_eq!(state.tick(&NO_KEYS, &mut rng), TickOutcome::Ate);
        assert!(state.food().in_bounds());
    }
}

#[test]
fn render_draw_calls() {
    let mut game_loop = GameLoop::with_state(
        game(&[(5, 5)], Direction::Right, (10, 10)),
        Scripted(Vec::new()),
    );
    let mut recorder = Recorder::default();

    assert_eq!(game_loop.frame(true, &NO_KEYS, &mut recorder), Flow::Continue);

    assert_eq!(
        recorder.0,
        [
            DrawCall::SetColor(RGB8::new(0, 0, 0)),
            DrawCall::Clear,
            DrawCall::SetColor(RGB8::new(0, 255, 0)),
            DrawCall::FillRect(120, 100, 20, 20),
            DrawCall::SetColor(RGB8::new(255, 0, 0)),
            DrawCall::FillRect(200, 200, 20, 20),
            DrawCall::Present,
        ]
    );
}

#[test]
fn rendering_is_idempotent() {
    let state = game(&[(5, 5), (4, 5), (3, 5)], Direction::Right, (10, 10));
    let mut first = Recorder::default();
    let mut second = Recorder::default();

    pixel_snake::render::render(&state, &mut first);
    pixel_snake::render::render(&state, &mut second);

    assert_eq!(first.0, second.0);
}

#[test]
fn collision_ends_with_closing_frame() {
    let mut game_loop = GameLoop::with_state(
        game(&[(39, 5)], Direction::Right, (10, 10)),
        Scripted(Vec::new()),
    );
    let mut recorder = Recorder::default();

    assert_eq!(game_loop.frame(true, &NO_KEYS, &mut recorder), Flow::Finished);

    // No frame of the collision itself, only the black closing frame
    assert_eq!(
        recorder.0,
        [
            DrawCall::SetColor(RGB8::new(0, 0, 0)),
            DrawCall::Clear,
            DrawCall::Present,
        ]
    );
}

#[test]
fn closing_the_window_stops_the_game() {
    let mut game_loop = GameLoop::new(fastrand::Rng::with_seed(1));
    let mut canvas = Canvas::new(800, 600);

    assert_eq!(game_loop.frame(true, &NO_KEYS, &mut canvas), Flow::Continue);
    assert_eq!(game_loop.frame(false, &NO_KEYS, &mut canvas), Flow::Finished);

    // The game itself isn't over, it just stopped
    assert!(!game_loop.state().is_over());
    assert_eq!(game_loop.state().snake().head(), Cell::new(6, 5));
    assert_eq!(canvas.frames_presented(), 2);
}

#[test]
fn steering_into_the_food() {
    let mut game_loop = GameLoop::new(Scripted(vec![0, 0]));
    let mut canvas = Canvas::new(800, 600);

    // From (5, 5) to (10, 5) then down to (10, 10) where the food starts
    for _ in 0..5 {
        assert_eq!(game_loop.frame(true, &NO_KEYS, &mut canvas), Flow::Continue);
    }
    for _ in 0..5 {
        assert_eq!(
            game_loop.frame(true, &Keys(&[Direction::Down]), &mut canvas),
            Flow::Continue
        );
    }

    let state = game_loop.state();
    assert_eq!(state.snake().head(), Cell::new(10, 10));
    assert_eq!(state.score(), 1);
    assert_eq!(state.snake().len(), 2);
    assert_eq!(state.food(), Cell::new(0, 0));
}
