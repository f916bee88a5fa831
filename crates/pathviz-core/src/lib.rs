//! **pathviz-core**: the pieces shared by the terminal driver and the
//! visualizer.
//!
//! Cell coordinates, styled cells, an off-screen [`Screen`] that diffs into
//! [`Frame`]s, input [`Msg`]s, and the [`App`] loop that connects a
//! [`Model`] to a [`Driver`].

pub mod app;
pub mod cell;
pub mod geom;
pub mod messages;
pub mod screen;

pub use app::{App, AppConfig, AppResult, Context, Driver, Effect, Model};
pub use cell::{Cell, Color, Style};
pub use geom::{Point, Range};
pub use messages::{Key, MouseAction, Msg};
pub use screen::{Frame, Screen};
