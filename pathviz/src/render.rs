//! Projection of the search grid onto terminal cells.

use pathviz_core::{Cell, Color, Point, Screen, Style};
use pathviz_search::{Grid, Role, VisitState};

/// Terminal columns per node, so nodes look roughly square.
pub const CELL_WIDTH: i32 = 2;
/// Lines below the board: status, then key help.
pub const FOOTER_LINES: i32 = 2;
const MIN_WIDTH: i32 = 72;

pub const ORANGE: Color = Color::from_rgb(255, 165, 0);
pub const TURQUOISE: Color = Color::from_rgb(64, 224, 208);
pub const BLACK: Color = Color::BLACK;
pub const GREEN: Color = Color::from_rgb(0, 200, 0);
pub const RED: Color = Color::from_rgb(220, 0, 0);
pub const PURPLE: Color = Color::from_rgb(128, 0, 128);
pub const PINK: Color = Color::from_rgb(255, 105, 180);
pub const WHITE: Color = Color::from_rgb(255, 255, 255);
const GREY: Color = Color::from_rgb(128, 128, 128);

/// Background colour of a node. Roles take precedence over visit states.
pub fn node_color(role: Role, state: VisitState) -> Color {
    match (role, state) {
        (Role::Start, _) => ORANGE,
        (Role::End, _) => TURQUOISE,
        (Role::Barrier, _) => BLACK,
        (Role::None, VisitState::Unvisited) => WHITE,
        (Role::None, VisitState::Open) => GREEN,
        (Role::None, VisitState::Closed) => RED,
        (Role::None, VisitState::Path) => PURPLE,
        (Role::None, VisitState::DeadEnd) => PINK,
    }
}

/// Terminal size needed for a board of `size` nodes per side.
pub fn screen_size(size: i32) -> (i32, i32) {
    ((size * CELL_WIDTH).max(MIN_WIDTH), size + FOOTER_LINES)
}

/// The node under screen cell `p`, if it lies on the board.
pub fn screen_to_node(p: Point, size: i32) -> Option<Point> {
    let q = Point::new(p.x.div_euclid(CELL_WIDTH), p.y);
    (p.x >= 0 && p.y >= 0 && q.x < size && q.y < size).then_some(q)
}

/// Paint `grid` with visit states taken from `states` (row-major, one per
/// node) rather than from the grid itself, so a recorded frame can be shown
/// over the current roles.
pub fn draw_board(grid: &Grid, states: &[VisitState], screen: &mut Screen) {
    for (node, &state) in grid.nodes().zip(states) {
        let cell = Cell::filled(node_color(node.role(), state));
        let p = node.pos();
        for dx in 0..CELL_WIDTH {
            screen.set(Point::new(p.x * CELL_WIDTH + dx, p.y), cell);
        }
    }
}

pub fn draw_footer(size: i32, status: &str, help: &str, screen: &mut Screen) {
    screen.print(Point::new(0, size), status, Style::PLAIN.with_bold(true));
    screen.print(Point::new(0, size + 1), help, Style::PLAIN.with_fg(GREY));
}
