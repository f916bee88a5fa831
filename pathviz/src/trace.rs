//! Recording a search for later playback.

use pathviz_search::{Control, Grid, Stepper, VisitState};

/// Visit states that changed during one step, as `(row-major index, state)`.
pub type Delta = Vec<(usize, VisitState)>;

/// A recorded search: the board before the first step and one [`Delta`] per
/// step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trace {
    pub base: Vec<VisitState>,
    pub deltas: Vec<Delta>,
}

impl Trace {
    /// The states shown after every recorded step.
    pub fn replay(&self) -> Vec<VisitState> {
        let mut states = self.base.clone();
        for delta in &self.deltas {
            apply(&mut states, delta);
        }
        states
    }
}

pub fn apply(states: &mut [VisitState], delta: &[(usize, VisitState)]) {
    for &(i, state) in delta {
        if let Some(s) = states.get_mut(i) {
            *s = state;
        }
    }
}

/// A [`Stepper`] that records what each step changed, read from the grid's
/// write log, and cancels a step that arrives once `max_steps` are recorded.
#[derive(Debug)]
pub struct Recorder {
    trace: Trace,
    seen: usize,
    max_steps: usize,
    hit_limit: bool,
}

impl Recorder {
    /// Start recording from the current state of `grid`.
    pub fn new(grid: &Grid, max_steps: usize) -> Self {
        Self {
            trace: Trace {
                base: grid.states(),
                deltas: Vec::new(),
            },
            seen: grid.writes().len(),
            max_steps,
            hit_limit: false,
        }
    }

    pub fn len(&self) -> usize {
        self.trace.deltas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trace.deltas.is_empty()
    }

    /// Whether the step budget cut the search short.
    pub fn hit_limit(&self) -> bool {
        self.hit_limit
    }

    pub fn into_trace(self) -> Trace {
        self.trace
    }
}

impl Stepper for Recorder {
    fn step(&mut self, grid: &Grid) -> Control {
        if self.trace.deltas.len() >= self.max_steps {
            self.hit_limit = true;
            log::info!("step budget of {} exceeded, cancelling", self.max_steps);
            return Control::Cancel;
        }
        let rng = grid.range();
        let writes = grid.writes().get(self.seen..).unwrap_or(&[]);
        let delta = writes
            .iter()
            .filter_map(|&p| rng.index(p).map(|i| (i, grid.state(p))))
            .collect();
        self.seen = grid.writes().len();
        self.trace.deltas.push(delta);
        Control::Continue
    }
}
