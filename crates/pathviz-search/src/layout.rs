//! Plain-text grid layouts.
//!
//! One line per row. Roles: `.` empty, `#` barrier, `S` start, `E` end.
//! Visit states on empty nodes: `o` open, `x` closed, `*` path, `!` dead end.
//! Blank lines and surrounding whitespace are ignored.

use std::fmt;
use std::str::FromStr;

use pathviz_core::Point;
use thiserror::Error;

use crate::Grid;
use crate::node::{Node, Role, VisitState};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LayoutError {
    #[error("layout is empty")]
    Empty,
    #[error("row {row} has {len} cells, expected {expected} (layouts are square)")]
    NotSquare { row: usize, len: usize, expected: usize },
    #[error("unknown cell {ch:?} at row {row}, column {col}")]
    UnknownCell { ch: char, row: usize, col: usize },
    #[error("second {ch:?} at row {row}, column {col}")]
    Duplicate { ch: char, row: usize, col: usize },
}

fn decode(ch: char) -> Option<(Role, VisitState)> {
    Some(match ch {
        '.' => (Role::None, VisitState::Unvisited),
        '#' => (Role::Barrier, VisitState::Unvisited),
        'S' => (Role::Start, VisitState::Unvisited),
        'E' => (Role::End, VisitState::Unvisited),
        'o' => (Role::None, VisitState::Open),
        'x' => (Role::None, VisitState::Closed),
        '*' => (Role::None, VisitState::Path),
        '!' => (Role::None, VisitState::DeadEnd),
        _ => return None,
    })
}

fn encode(node: &Node) -> char {
    match node.role() {
        Role::Start => 'S',
        Role::End => 'E',
        Role::Barrier => '#',
        Role::None => match node.state() {
            VisitState::Unvisited => '.',
            VisitState::Open => 'o',
            VisitState::Closed => 'x',
            VisitState::Path => '*',
            VisitState::DeadEnd => '!',
        },
    }
}

impl FromStr for Grid {
    type Err = LayoutError;

    /// Parse a layout. Adjacency is left empty; call
    /// [`Grid::update_neighbors`] before searching.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows: Vec<Vec<char>> = s
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .map(|l| l.chars().collect())
            .collect();
        let n = rows.len();
        if n == 0 {
            return Err(LayoutError::Empty);
        }

        let mut grid = Grid::new(n as i32);
        let mut seen_start = false;
        let mut seen_end = false;
        for (row, cells) in rows.iter().enumerate() {
            if cells.len() != n {
                return Err(LayoutError::NotSquare {
                    row,
                    len: cells.len(),
                    expected: n,
                });
            }
            for (col, &ch) in cells.iter().enumerate() {
                let (role, state) = decode(ch).ok_or(LayoutError::UnknownCell { ch, row, col })?;
                let seen = match role {
                    Role::Start => Some(&mut seen_start),
                    Role::End => Some(&mut seen_end),
                    _ => None,
                };
                if let Some(seen) = seen {
                    if *seen {
                        return Err(LayoutError::Duplicate { ch, row, col });
                    }
                    *seen = true;
                }
                let p = Point::new(col as i32, row as i32);
                grid.set_role(p, role);
                grid.set_state(p, state);
            }
        }
        Ok(grid)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let n = self.size().max(0) as usize;
        for (i, node) in self.nodes().enumerate() {
            write!(f, "{}", encode(node))?;
            if (i + 1) % n == 0 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
