//! Board topology: four edge grids over a padded lattice.
//!
//! Every undirected edge of the lattice is stored exactly once, at the
//! vertex it starts from when walked in one of four canonical directions:
//!
//! | Grid | Edge stored at `(x, y)` |
//! |---|---|
//! | `Horizontal` | `(x, y)` to `(x + 1, y)` |
//! | `Vertical` | `(x, y)` to `(x, y + 1)` |
//! | `DiagonalNe` | `(x, y)` to `(x + 1, y + 1)` |
//! | `DiagonalNw` | `(x, y)` to `(x - 1, y + 1)` |
//!
//! The other four directions address the same slot from the far endpoint,
//! so an edge looks the same from both ends.
//!
//! ## Lattice layout
//!
//! For a `width` x `height` field the lattice has `width + 3` columns and
//! `height + 6` rows. The field spans columns `1..=width + 1` and rows
//! `3..=height + 3`; the goal lines are rows `2` (south) and `height + 4`
//! (north). Every edge that is not playable is marked occupied at
//! construction, so walls, posts and padding need no bounds checks later.

use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

use super::config::BoardConfig;
use super::direction::{Direction, Point};

/// Extra lattice columns around the field.
const COLUMN_PADDING: u32 = 3;
/// Extra lattice rows around the field, including both goal lines.
const ROW_PADDING: u32 = 6;
/// Row of the south goal line.
const SOUTH_GOAL_ROW: i32 = 2;
/// Row of the south end line of the field.
const FIELD_BOTTOM: i32 = 3;
/// Leftmost field column.
const FIELD_LEFT: i32 = 1;

/// One of the four edge grids.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Line {
    Horizontal,
    Vertical,
    DiagonalNe,
    DiagonalNw,
}

impl Line {
    pub const ALL: [Line; 4] = [
        Line::Horizontal,
        Line::Vertical,
        Line::DiagonalNe,
        Line::DiagonalNw,
    ];

    /// Canonical direction of edges stored in this grid.
    #[must_use]
    pub const fn direction(self) -> Direction {
        match self {
            Line::Horizontal => Direction::East,
            Line::Vertical => Direction::North,
            Line::DiagonalNe => Direction::NorthEast,
            Line::DiagonalNw => Direction::NorthWest,
        }
    }

    /// Grid holding the edge walked in `direction`, and whether the edge is
    /// stored at the far endpoint.
    const fn of(direction: Direction) -> (Line, bool) {
        match direction {
            Direction::East => (Line::Horizontal, false),
            Direction::West => (Line::Horizontal, true),
            Direction::North => (Line::Vertical, false),
            Direction::South => (Line::Vertical, true),
            Direction::NorthEast => (Line::DiagonalNe, false),
            Direction::SouthWest => (Line::DiagonalNe, true),
            Direction::NorthWest => (Line::DiagonalNw, false),
            Direction::SouthEast => (Line::DiagonalNw, true),
        }
    }
}

/// Edge occupancy for one board.
///
/// `true` means the edge has been drawn, either during play or as a
/// permanent wall.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    config: BoardConfig,
    columns: usize,
    rows: usize,
    horizontal: Vec<bool>,
    vertical: Vec<bool>,
    diagonal_ne: Vec<bool>,
    diagonal_nw: Vec<bool>,
}

impl Board {
    /// Build an empty board with its walls drawn.
    ///
    /// `config` must already be validated.
    pub(crate) fn new(config: BoardConfig) -> Self {
        let columns = (config.width + COLUMN_PADDING) as usize;
        let rows = (config.height + ROW_PADDING) as usize;
        let cells = columns * rows;

        let mut board = Self {
            config,
            columns,
            rows,
            horizontal: vec![false; cells],
            vertical: vec![false; cells],
            diagonal_ne: vec![false; cells],
            diagonal_nw: vec![false; cells],
        };
        board.draw_walls();
        board
    }

    /// Mark every non-playable edge of the lattice as occupied.
    fn draw_walls(&mut self) {
        for line in Line::ALL {
            for y in 0..self.rows as i32 {
                for x in 0..self.columns as i32 {
                    let from = Point::new(x, y);
                    let to = from.step(line.direction());
                    if !self.is_playable(from, to) {
                        let index = self.index(from);
                        self.grid_mut(line)[index] = true;
                    }
                }
            }
        }
    }

    /// Check if the edge `a`-`b` may ever be drawn during play.
    fn is_playable(&self, a: Point, b: Point) -> bool {
        if !self.in_play_area(a) || !self.in_play_area(b) {
            return false;
        }

        // Side lines.
        let right = self.field_right();
        if a.x == b.x && (a.x == FIELD_LEFT || a.x == right) {
            return false;
        }

        let mouth = self.goal_mouth();
        let within_mouth = mouth.contains(&a.x) && mouth.contains(&b.x);

        if a.y == b.y {
            // Goal back lines.
            if self.is_goal_line(a) {
                return false;
            }
            // End lines, open only across the goal mouth.
            if (a.y == FIELD_BOTTOM || a.y == self.field_top()) && !within_mouth {
                return false;
            }
        }

        if self.is_goal_line(a) || self.is_goal_line(b) {
            // Into the goal only through the mouth, and never along a post.
            if !within_mouth {
                return false;
            }
            if a.x == b.x && (a.x == *mouth.start() || a.x == *mouth.end()) {
                return false;
            }
        }

        true
    }

    /// The dimensions this board was built with.
    #[must_use]
    pub fn config(&self) -> BoardConfig {
        self.config
    }

    /// Lattice width including padding.
    #[must_use]
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Lattice height including padding.
    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Raw occupancy of one grid, row-major.
    #[must_use]
    pub fn grid(&self, line: Line) -> &[bool] {
        match line {
            Line::Horizontal => &self.horizontal,
            Line::Vertical => &self.vertical,
            Line::DiagonalNe => &self.diagonal_ne,
            Line::DiagonalNw => &self.diagonal_nw,
        }
    }

    fn grid_mut(&mut self, line: Line) -> &mut Vec<bool> {
        match line {
            Line::Horizontal => &mut self.horizontal,
            Line::Vertical => &mut self.vertical,
            Line::DiagonalNe => &mut self.diagonal_ne,
            Line::DiagonalNw => &mut self.diagonal_nw,
        }
    }

    fn index(&self, p: Point) -> usize {
        debug_assert!(
            p.x >= 0 && p.y >= 0 && (p.x as usize) < self.columns && (p.y as usize) < self.rows,
            "vertex {p} outside the lattice"
        );
        p.y as usize * self.columns + p.x as usize
    }

    /// Grid and slot of the edge leaving `from` in `direction`.
    fn slot(&self, from: Point, direction: Direction) -> (Line, usize) {
        let (line, far_end) = Line::of(direction);
        let anchor = if far_end { from.step(direction) } else { from };
        (line, self.index(anchor))
    }

    /// Check if the edge leaving `from` in `direction` is drawn.
    #[must_use]
    pub fn is_occupied(&self, from: Point, direction: Direction) -> bool {
        let (line, index) = self.slot(from, direction);
        self.grid(line)[index]
    }

    /// Draw or erase the edge leaving `from` in `direction`.
    pub(crate) fn set(&mut self, from: Point, direction: Direction, value: bool) {
        let (line, index) = self.slot(from, direction);
        self.grid_mut(line)[index] = value;
    }

    /// Number of drawn edges touching `p`.
    #[must_use]
    pub fn occupied_count(&self, p: Point) -> usize {
        Direction::ALL
            .into_iter()
            .filter(|&d| self.is_occupied(p, d))
            .count()
    }

    /// Check if landing on `p` forces a bounce (any touching edge drawn).
    #[must_use]
    pub fn is_bounce(&self, p: Point) -> bool {
        Direction::ALL.into_iter().any(|d| self.is_occupied(p, d))
    }

    /// Directions whose edge from `p` is still free, in compass order.
    pub fn free_directions(&self, p: Point) -> impl Iterator<Item = Direction> + '_ {
        Direction::ALL
            .into_iter()
            .filter(move |&d| !self.is_occupied(p, d))
    }

    /// Row of the south goal line (North scores here).
    #[must_use]
    pub fn south_goal_row(&self) -> i32 {
        SOUTH_GOAL_ROW
    }

    /// Row of the north goal line (South scores here).
    #[must_use]
    pub fn north_goal_row(&self) -> i32 {
        self.config.height as i32 + 4
    }

    /// Check if `p` lies on either goal line. Only the row is compared.
    #[must_use]
    pub fn is_goal_line(&self, p: Point) -> bool {
        p.y == self.south_goal_row() || p.y == self.north_goal_row()
    }

    /// Columns of the goal mouth, posts included.
    #[must_use]
    pub fn goal_mouth(&self) -> RangeInclusive<i32> {
        let start = (self.config.width - self.config.goal_width) as i32 / 2 + FIELD_LEFT;
        start..=start + self.config.goal_width as i32
    }

    /// Starting vertex of the ball.
    #[must_use]
    pub fn center(&self) -> Point {
        Point::new(
            self.config.width as i32 / 2 + FIELD_LEFT,
            self.config.height as i32 / 2 + FIELD_BOTTOM,
        )
    }

    fn field_right(&self) -> i32 {
        self.config.width as i32 + FIELD_LEFT
    }

    fn field_top(&self) -> i32 {
        self.config.height as i32 + FIELD_BOTTOM
    }

    /// Check if `p` is a field vertex.
    #[must_use]
    pub fn in_field(&self, p: Point) -> bool {
        (FIELD_LEFT..=self.field_right()).contains(&p.x)
            && (FIELD_BOTTOM..=self.field_top()).contains(&p.y)
    }

    /// Check if `p` is a field vertex or a vertex inside a goal.
    #[must_use]
    pub fn in_play_area(&self, p: Point) -> bool {
        self.in_field(p) || (self.is_goal_line(p) && self.goal_mouth().contains(&p.x))
    }
}

/// ASCII sketch of vertex occupancy, north at the top.
///
/// `o` is the ball, `*` a vertex with a drawn edge, `.` a free vertex.
pub struct BoardView<'a> {
    pub board: &'a Board,
    pub ball: Point,
}

impl std::fmt::Display for BoardView<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let board = self.board;
        for y in (board.south_goal_row()..=board.north_goal_row()).rev() {
            for x in 0..board.columns() as i32 {
                let p = Point::new(x, y);
                let c = if p == self.ball {
                    'o'
                } else if !board.in_play_area(p) {
                    ' '
                } else if board.is_bounce(p) {
                    '*'
                } else {
                    '.'
                };
                write!(f, "{c}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(width: u32, height: u32, goal: u32) -> Board {
        Board::new(BoardConfig::new(width, height, goal))
    }

    #[test]
    fn test_dimensions() {
        let b = board(6, 8, 2);
        assert_eq!(b.columns(), 9);
        assert_eq!(b.rows(), 14);
        assert_eq!(b.south_goal_row(), 2);
        assert_eq!(b.north_goal_row(), 12);
        assert_eq!(b.goal_mouth(), 3..=5);
        assert_eq!(b.center(), Point::new(4, 7));
    }

    #[test]
    fn test_edge_is_shared_by_both_endpoints() {
        let mut b = board(6, 8, 2);
        let p = Point::new(4, 7);
        for d in Direction::ALL {
            let q = p.step(d);
            assert!(!b.is_occupied(q, d.opposite()));
            b.set(p, d, true);
            assert!(b.is_occupied(q, d.opposite()));
            b.set(q, d.opposite(), false);
            assert!(!b.is_occupied(p, d));
        }
    }

    #[test]
    fn test_interior_vertices_free() {
        let b = board(6, 8, 2);
        for x in 2..=6 {
            for y in 4..=10 {
                assert!(!b.is_bounce(Point::new(x, y)), "({x}, {y}) should be free");
            }
        }
    }

    #[test]
    fn test_side_line_is_wall() {
        let b = board(6, 8, 2);
        let p = Point::new(1, 6);
        assert!(b.is_bounce(p));
        assert!(b.is_occupied(p, Direction::North));
        assert!(b.is_occupied(p, Direction::South));
        assert!(b.is_occupied(p, Direction::West));
        assert!(!b.is_occupied(p, Direction::East));
        assert!(!b.is_occupied(p, Direction::NorthEast));
        assert_eq!(b.free_directions(p).count(), 3);
    }

    #[test]
    fn test_corner_has_one_exit() {
        let b = board(6, 8, 2);
        let corner = Point::new(1, 3);
        let exits: Vec<_> = b.free_directions(corner).collect();
        assert_eq!(exits, vec![Direction::NorthEast]);
    }

    #[test]
    fn test_goal_mouth_is_open() {
        let b = board(6, 8, 2);
        // Middle of the south goal mouth.
        let p = Point::new(4, 3);
        assert!(!b.is_bounce(p));
        assert_eq!(b.free_directions(p).count(), 8);

        // Posts bounce but lead into the goal diagonally.
        let post = Point::new(3, 3);
        assert!(b.is_bounce(post));
        assert!(b.is_occupied(post, Direction::South));
        assert!(b.is_occupied(post, Direction::West));
        assert!(b.is_occupied(post, Direction::SouthWest));
        assert!(!b.is_occupied(post, Direction::SouthEast));
        assert!(!b.is_occupied(post, Direction::East));
    }

    #[test]
    fn test_end_line_outside_mouth_is_wall() {
        let b = board(6, 8, 2);
        let p = Point::new(2, 11);
        assert!(b.is_occupied(p, Direction::East));
        assert!(b.is_occupied(p, Direction::West));
        assert!(b.is_occupied(p, Direction::North));
        assert!(!b.is_occupied(p, Direction::South));
    }

    #[test]
    fn test_goal_line_is_row_only() {
        let b = board(6, 8, 2);
        assert!(b.is_goal_line(Point::new(4, 2)));
        assert!(b.is_goal_line(Point::new(0, 12)));
        assert!(!b.is_goal_line(Point::new(4, 3)));
    }

    #[test]
    fn test_padding_is_walled() {
        let b = board(4, 4, 2);
        for line in Line::ALL {
            for x in 0..b.columns() as i32 {
                let p = Point::new(x, 0);
                assert!(b.grid(line)[b.index(p)]);
            }
        }
    }

    #[test]
    fn test_full_width_goal() {
        let b = board(4, 4, 4);
        assert_eq!(b.goal_mouth(), 1..=5);
        // Corner of the field is a post: the line along the side wall is closed.
        let post = Point::new(1, 3);
        assert!(b.is_occupied(post, Direction::South));
        assert!(b.is_occupied(post, Direction::North));
        assert!(!b.is_occupied(post, Direction::East));
        assert!(!b.is_occupied(post, Direction::SouthEast));
    }

    #[test]
    fn test_view_marks_ball() {
        let b = board(2, 2, 2);
        let text = BoardView { board: &b, ball: b.center() }.to_string();
        assert_eq!(text.lines().count(), 5);
        assert_eq!(text.matches('o').count(), 1);
    }
}
