//! Draw the game state on a surface.

use rgb::RGB8;

use crate::{canvas::Surface, game::GameState, grid::Cell};

/// Color of the empty grid.
pub const BACKGROUND_COLOR: RGB8 = RGB8 { r: 0, g: 0, b: 0 };
/// Color of every snake segment.
pub const SNAKE_COLOR: RGB8 = RGB8 { r: 0, g: 255, b: 0 };
/// Color of the food.
pub const FOOD_COLOR: RGB8 = RGB8 { r: 255, g: 0, b: 0 };

/// Draw a single frame of the game and present it.
///
/// The draw calls only depend on the snake and the food, drawing the same state twice results in the same frame.
pub fn render(state: &GameState, surface: &mut impl Surface) {
    profiling::scope!("Render game");

    surface.set_color(BACKGROUND_COLOR);
    surface.clear();

    surface.set_color(SNAKE_COLOR);
    state
        .snake()
        .cells()
        .for_each(|segment| fill_cell(surface, segment));

    // Food is drawn last so it's visible when it's on the head
    surface.set_color(FOOD_COLOR);
    fill_cell(surface, state.food());

    surface.present();
}

/// Draw the frame shown after the game has ended.
pub fn render_closing(surface: &mut impl Surface) {
    surface.set_color(BACKGROUND_COLOR);
    surface.clear();
    surface.present();
}

/// Fill a grid cell with the active color.
fn fill_cell(surface: &mut impl Surface, cell: Cell) {
    let (x, y, width, height) = cell.to_pixel_rect();

    surface.fill_rect(x, y, width, height);
}
