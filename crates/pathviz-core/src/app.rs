//! Model / driver plumbing: a [`Driver`] produces [`Msg`]s, the [`Model`]
//! reacts and draws into a [`Screen`], and [`App`] diffs successive screens
//! into [`Frame`]s for the driver to paint.

use std::error::Error;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, Receiver, Sender};

use crate::messages::Msg;
use crate::screen::{Frame, Screen};

pub type AppResult = Result<(), Box<dyn Error>>;

/// Shared stop flag. Cloning shares the flag.
#[derive(Clone, Debug, Default)]
pub struct Context {
    done: Arc<AtomicBool>,
}

impl Context {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn is_done(&self) -> bool {
        self.done.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn cancel(&self) {
        self.done.store(true, Ordering::Relaxed);
    }
}

/// Returned by [`Model::update`] to steer the loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Stop after this message; the driver is closed.
    End,
}

pub trait Model {
    fn update(&mut self, msg: Msg) -> Option<Effect>;

    /// Paint the whole state. The screen is not cleared beforehand.
    fn draw(&self, screen: &mut Screen);
}

pub trait Driver {
    fn init(&mut self) -> AppResult;

    /// Queue the pending input on `tx`.
    ///
    /// Must come back within one tick interval so the loop can redraw and
    /// observe `ctx.is_done()`.
    fn poll_msgs(&mut self, ctx: &Context, tx: &Sender<Msg>) -> AppResult;

    fn flush(&mut self, frame: Frame) -> AppResult;

    /// Restore the terminal. Called even when the loop failed.
    fn close(&mut self);
}

pub struct AppConfig<M: Model, D: Driver> {
    pub model: M,
    pub driver: D,
    pub width: i32,
    pub height: i32,
}

pub struct App<M: Model, D: Driver> {
    model: M,
    driver: D,
    shown: Screen,
    next: Screen,
}

impl<M: Model, D: Driver> App<M, D> {
    pub fn new(config: AppConfig<M, D>) -> Self {
        Self {
            model: config.model,
            driver: config.driver,
            // Size mismatch forces a full first paint.
            shown: Screen::new(0, 0),
            next: Screen::new(config.width, config.height),
        }
    }

    pub fn model(&self) -> &M {
        &self.model
    }

    /// Run until the model returns [`Effect::End`] or the driver fails.
    pub fn run(&mut self) -> AppResult {
        self.driver.init()?;
        let result = self.event_loop();
        self.driver.close();
        result
    }

    fn event_loop(&mut self) -> AppResult {
        let ctx = Context::new();
        let (tx, rx) = mpsc::channel();
        tx.send(Msg::Init)?;

        loop {
            if self.dispatch(&rx)? {
                ctx.cancel();
                return Ok(());
            }
            self.driver.poll_msgs(&ctx, &tx)?;
            if ctx.is_done() {
                return Ok(());
            }
        }
    }

    /// Feed queued messages to the model, then repaint if any arrived.
    /// Returns true when the model asked to stop.
    fn dispatch(&mut self, rx: &Receiver<Msg>) -> Result<bool, Box<dyn Error>> {
        let mut dirty = false;
        for msg in rx.try_iter() {
            dirty = true;
            if self.model.update(msg) == Some(Effect::End) {
                return Ok(true);
            }
        }
        if dirty {
            self.model.draw(&mut self.next);
            let frame = self.next.diff(&self.shown);
            if !frame.is_empty() {
                self.driver.flush(frame)?;
            }
            self.shown.clone_from(&self.next);
        }
        Ok(false)
    }
}
