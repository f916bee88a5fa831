//! Crossterm terminal driver for pathviz.
//!
//! Provides a [`CrosstermDriver`] that implements [`pathviz_core::Driver`]:
//! terminal input becomes [`Msg`]s, diffed frames are written with queued
//! crossterm commands, and a [`Msg::Tick`] is emitted every tick interval so
//! the model can animate without input.

use std::io::{self, Write};
use std::sync::mpsc::Sender;
use std::time::{Duration, Instant};

use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEventKind},
    execute, queue,
    style::{Attribute, Color as CtColor, Print, SetAttribute, SetBackgroundColor, SetForegroundColor},
    terminal::{self, ClearType},
};

use pathviz_core::{AppResult, Color, Context, Driver, Frame, Key, MouseAction, Msg, Point};

const DEFAULT_TICK: Duration = Duration::from_millis(16);

/// Maps a [`pathviz_core::Color`] to a [`crossterm::style::Color`].
fn to_ct_color(c: Color) -> CtColor {
    if c == Color::DEFAULT {
        CtColor::Reset
    } else {
        let (r, g, b) = (c.r(), c.g(), c.b());
        CtColor::Rgb { r, g, b }
    }
}

/// Maps a crossterm [`KeyCode`] to a pathviz [`Key`].
fn to_key(code: KeyCode) -> Option<Key> {
    match code {
        KeyCode::Char(' ') => Some(Key::Space),
        KeyCode::Char(c) => Some(Key::Char(c)),
        KeyCode::Enter => Some(Key::Enter),
        KeyCode::Esc => Some(Key::Escape),
        KeyCode::Backspace => Some(Key::Backspace),
        KeyCode::Up => Some(Key::ArrowUp),
        KeyCode::Down => Some(Key::ArrowDown),
        KeyCode::Left => Some(Key::ArrowLeft),
        KeyCode::Right => Some(Key::ArrowRight),
        _ => None,
    }
}

fn to_mouse_action(kind: MouseEventKind) -> Option<MouseAction> {
    Some(match kind {
        MouseEventKind::Down(MouseButton::Left) => MouseAction::Main,
        MouseEventKind::Down(MouseButton::Right) => MouseAction::Secondary,
        MouseEventKind::Down(MouseButton::Middle) => MouseAction::Auxiliary,
        MouseEventKind::Up(_) => MouseAction::Release,
        MouseEventKind::Drag(MouseButton::Left) => MouseAction::DragMain,
        MouseEventKind::Drag(MouseButton::Right) => MouseAction::DragSecondary,
        MouseEventKind::Drag(MouseButton::Middle) | MouseEventKind::Moved => MouseAction::Move,
        _ => return None,
    })
}

fn to_msg(ev: Event) -> Option<Msg> {
    let time = Instant::now();
    match ev {
        // Release and repeat events are reported on some platforms only.
        Event::Key(KeyEvent {
            code: KeyCode::Char('c'),
            modifiers,
            kind: KeyEventKind::Press,
            ..
        }) if modifiers.contains(KeyModifiers::CONTROL) => Some(Msg::Quit),
        Event::Key(KeyEvent {
            code,
            kind: KeyEventKind::Press,
            ..
        }) => to_key(code).map(|key| Msg::KeyDown { key, time }),
        Event::Mouse(me) => to_mouse_action(me.kind).map(|action| Msg::Mouse {
            action,
            pos: Point::new(me.column as i32, me.row as i32),
            time,
        }),
        Event::Resize(w, h) => Some(Msg::Screen {
            width: w as i32,
            height: h as i32,
            time,
        }),
        _ => None,
    }
}

/// A terminal back-end using crossterm.
pub struct CrosstermDriver {
    mouse_enabled: bool,
    tick: Duration,
    last_tick: Instant,
}

impl CrosstermDriver {
    /// Create a new driver ticking every 16ms.
    pub fn new() -> Self {
        Self {
            mouse_enabled: true,
            tick: DEFAULT_TICK,
            last_tick: Instant::now(),
        }
    }

    /// Configure whether mouse events are captured.
    pub fn with_mouse(mut self, enabled: bool) -> Self {
        self.mouse_enabled = enabled;
        self
    }

    /// Set the interval between [`Msg::Tick`]s. Zero is bumped to 1ms.
    pub fn with_tick(mut self, tick: Duration) -> Self {
        self.tick = tick.max(Duration::from_millis(1));
        self
    }
}

impl Default for CrosstermDriver {
    fn default() -> Self {
        Self::new()
    }
}

impl Driver for CrosstermDriver {
    fn init(&mut self) -> AppResult {
        terminal::enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(
            stdout,
            terminal::EnterAlternateScreen,
            cursor::Hide,
            terminal::Clear(ClearType::All)
        )?;
        if self.mouse_enabled {
            execute!(stdout, event::EnableMouseCapture)?;
        }
        self.last_tick = Instant::now();
        log::debug!("terminal initialised (tick {:?})", self.tick);
        Ok(())
    }

    fn poll_msgs(&mut self, ctx: &Context, tx: &Sender<Msg>) -> AppResult {
        let timeout = self.tick.saturating_sub(self.last_tick.elapsed());
        if event::poll(timeout)? {
            while event::poll(Duration::ZERO)? {
                if ctx.is_done() {
                    return Ok(());
                }
                if let Some(m) = to_msg(event::read()?) {
                    tx.send(m).ok();
                }
            }
        }

        if self.last_tick.elapsed() >= self.tick {
            self.last_tick = Instant::now();
            tx.send(Msg::Tick {
                time: self.last_tick,
            })
            .ok();
        }

        Ok(())
    }

    fn flush(&mut self, frame: Frame) -> AppResult {
        let mut stdout = io::stdout().lock();

        for (p, cell) in frame.changes {
            queue!(
                stdout,
                cursor::MoveTo(p.x as u16, p.y as u16),
                SetForegroundColor(to_ct_color(cell.style.fg)),
                SetBackgroundColor(to_ct_color(cell.style.bg))
            )?;
            if cell.style.bold {
                queue!(stdout, SetAttribute(Attribute::Bold))?;
            }
            queue!(stdout, Print(cell.ch))?;
            if cell.style.bold {
                queue!(stdout, SetAttribute(Attribute::Reset))?;
            }
        }

        stdout.flush()?;
        Ok(())
    }

    fn close(&mut self) {
        let mut stdout = io::stdout();
        if self.mouse_enabled {
            let _ = execute!(stdout, event::DisableMouseCapture);
        }
        let _ = execute!(stdout, cursor::Show, terminal::LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEventState, MouseEvent};

    #[test]
    fn space_is_its_own_key() {
        assert_eq!(to_key(KeyCode::Char(' ')), Some(Key::Space));
        assert_eq!(to_key(KeyCode::Char('b')), Some(Key::Char('b')));
        assert_eq!(to_key(KeyCode::Tab), None);
    }

    #[test]
    fn drags_keep_their_button() {
        assert_eq!(
            to_mouse_action(MouseEventKind::Drag(MouseButton::Left)),
            Some(MouseAction::DragMain)
        );
        assert_eq!(
            to_mouse_action(MouseEventKind::Drag(MouseButton::Right)),
            Some(MouseAction::DragSecondary)
        );
        assert_eq!(to_mouse_action(MouseEventKind::ScrollUp), None);
    }

    #[test]
    fn ctrl_c_quits() {
        let ev = Event::Key(KeyEvent {
            code: KeyCode::Char('c'),
            modifiers: KeyModifiers::CONTROL,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        });
        assert!(matches!(to_msg(ev), Some(Msg::Quit)));
    }

    #[test]
    fn key_release_is_ignored() {
        let release = Event::Key(KeyEvent {
            code: KeyCode::Char('q'),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        });
        assert!(to_msg(release).is_none());
    }

    #[test]
    fn mouse_position_is_column_row() {
        let ev = Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: 7,
            row: 3,
            modifiers: KeyModifiers::NONE,
        });
        match to_msg(ev) {
            Some(Msg::Mouse { action, pos, .. }) => {
                assert_eq!(action, MouseAction::Main);
                assert_eq!(pos, Point::new(7, 3));
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn default_color_resets() {
        assert_eq!(to_ct_color(Color::DEFAULT), CtColor::Reset);
        assert_eq!(
            to_ct_color(Color::from_rgb(1, 2, 3)),
            CtColor::Rgb { r: 1, g: 2, b: 3 }
        );
    }
}
