//! Input delivered to a [`Model`](crate::Model).

use std::time::Instant;

use crate::geom::Point;

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Key {
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    Enter,
    Escape,
    Backspace,
    Space,
    Char(char),
}

/// What the mouse did. Drags carry the held button.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MouseAction {
    /// Left button down.
    Main,
    /// Middle button down.
    Auxiliary,
    /// Right button down.
    Secondary,
    Release,
    Move,
    DragMain,
    DragSecondary,
}

#[derive(Clone, Debug)]
pub enum Msg {
    /// First message of every run.
    Init,
    KeyDown {
        key: Key,
        time: Instant,
    },
    /// `pos` is in screen cells.
    Mouse {
        action: MouseAction,
        pos: Point,
        time: Instant,
    },
    /// The terminal now has this many cells.
    Screen {
        width: i32,
        height: i32,
        time: Instant,
    },
    /// The driver's tick interval elapsed.
    Tick {
        time: Instant,
    },
    /// The user asked to leave (e.g. Ctrl+C).
    Quit,
}

impl Msg {
    pub fn key(key: Key) -> Self {
        Self::KeyDown {
            key,
            time: Instant::now(),
        }
    }

    pub fn mouse(action: MouseAction, pos: Point) -> Self {
        Self::Mouse {
            action,
            pos,
            time: Instant::now(),
        }
    }

    pub fn tick() -> Self {
        Self::Tick { time: Instant::now() }
    }

    /// When the underlying event happened, if it carries a timestamp.
    pub fn time(&self) -> Option<Instant> {
        match self {
            Self::KeyDown { time, .. }
            | Self::Mouse { time, .. }
            | Self::Screen { time, .. }
            | Self::Tick { time } => Some(*time),
            Self::Init | Self::Quit => None,
        }
    }
}
