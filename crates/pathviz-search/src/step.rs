use crate::Grid;

/// What a [`Stepper`] wants the running search to do next.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Control {
    Continue,
    /// Stop now. The search returns [`SearchResult::Cancelled`](crate::SearchResult::Cancelled)
    /// without touching the grid again.
    Cancel,
}

/// Step callback, invoked synchronously after every state-changing step.
///
/// It receives the grid read-only so a view can project it, and it is the
/// only cancellation checkpoint of a search.
pub trait Stepper {
    fn step(&mut self, grid: &Grid) -> Control;
}

impl<F> Stepper for F
where
    F: FnMut(&Grid) -> Control,
{
    #[inline]
    fn step(&mut self, grid: &Grid) -> Control {
        self(grid)
    }
}

/// Returned through `?` when a stepper answered [`Control::Cancel`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) struct Cancelled;

#[inline]
pub(crate) fn checkpoint<S: Stepper + ?Sized>(stepper: &mut S, grid: &Grid) -> Result<(), Cancelled> {
    match stepper.step(grid) {
        Control::Continue => Ok(()),
        Control::Cancel => Err(Cancelled),
    }
}

/// Counts the steps it forwards to the wrapped stepper.
pub(crate) struct Counted<'a, S: ?Sized> {
    inner: &'a mut S,
    pub(crate) steps: usize,
}

impl<'a, S: Stepper + ?Sized> Counted<'a, S> {
    pub(crate) fn new(inner: &'a mut S) -> Self {
        Self { inner, steps: 0 }
    }
}

impl<S: Stepper + ?Sized> Stepper for Counted<'_, S> {
    fn step(&mut self, grid: &Grid) -> Control {
        self.steps += 1;
        self.inner.step(grid)
    }
}
