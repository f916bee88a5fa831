//! The visualizer: board editing, search dispatch and step playback.

use pathviz_core::{Cell, Effect, Key, Model, MouseAction, Msg, Point, Screen};
use pathviz_search::{Algorithm, Grid, Role, SearchResult, VisitState};
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::config::Config;
use crate::maze;
use crate::render;
use crate::trace::{self, Delta, Recorder, Trace};

const HELP: &str = "a A*  d DFS  b BFS  k Dijkstra  enter default  c clear  r reset  m maze  space skip  q quit";
const EDIT_HINT: &str = "left click: start, end, barriers   right click: erase";

/// Outcome of the last search, for the status line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub algorithm: Algorithm,
    pub result: SearchResult,
    pub steps: usize,
    /// The step budget cancelled the search.
    pub cut_short: bool,
}

impl RunSummary {
    fn status(&self) -> String {
        let mut s = match self.result.path() {
            Some(path) => format!(
                "{}: path of length {} in {} steps",
                self.algorithm,
                path.len(),
                self.steps
            ),
            None => format!("{}: {} after {} steps", self.algorithm, self.result.label(), self.steps),
        };
        if self.cut_short {
            s.push_str(" (step budget reached)");
        }
        s
    }
}

/// A recorded search being replayed one step per tick.
#[derive(Debug)]
struct Playback {
    shown: Vec<VisitState>,
    deltas: Vec<Delta>,
    next: usize,
}

impl Playback {
    fn new(trace: Trace) -> Self {
        Self {
            shown: trace.base,
            deltas: trace.deltas,
            next: 0,
        }
    }

    /// Show the next step. Returns false once every step was shown.
    fn advance(&mut self) -> bool {
        match self.deltas.get(self.next) {
            Some(delta) => {
                trace::apply(&mut self.shown, delta);
                self.next += 1;
                true
            }
            None => false,
        }
    }
}

pub struct Visualizer {
    grid: Grid,
    start: Option<Point>,
    end: Option<Point>,
    config: Config,
    rng: StdRng,
    playback: Option<Playback>,
    last_run: Option<RunSummary>,
}

impl Visualizer {
    /// An empty board of `config.size` nodes per side.
    pub fn new(config: Config) -> Self {
        let grid = Grid::new(config.size);
        Self::with_grid(grid, config)
    }

    /// Start from an existing board, e.g. a parsed layout. Its size wins
    /// over `config.size`.
    pub fn with_grid(grid: Grid, mut config: Config) -> Self {
        config.size = grid.size();
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_rng(&mut rand::rng()),
        };
        Self {
            start: grid.start(),
            end: grid.end(),
            grid,
            config,
            rng,
            playback: None,
            last_run: None,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn start(&self) -> Option<Point> {
        self.start
    }

    pub fn end(&self) -> Option<Point> {
        self.end
    }

    pub fn is_playing(&self) -> bool {
        self.playback.is_some()
    }

    pub fn last_run(&self) -> Option<&RunSummary> {
        self.last_run.as_ref()
    }

    /// Left click: Start first, then End, then barriers.
    fn place(&mut self, p: Point) {
        if self.start.is_none() && self.end != Some(p) {
            self.grid.set_role(p, Role::Start);
            self.start = Some(p);
        } else if self.end.is_none() && self.start != Some(p) {
            self.grid.set_role(p, Role::End);
            self.end = Some(p);
        } else if self.start != Some(p) && self.end != Some(p) {
            self.grid.set_role(p, Role::Barrier);
        }
    }

    /// Right click: back to an empty node.
    fn erase(&mut self, p: Point) {
        self.grid.reset(p);
        if self.start == Some(p) {
            self.start = None;
        }
        if self.end == Some(p) {
            self.end = None;
        }
    }

    fn run(&mut self, algorithm: Algorithm) {
        let (Some(start), Some(end)) = (self.start, self.end) else {
            log::debug!("{algorithm}: start and end must both be placed");
            return;
        };
        self.grid.clear_search();
        self.grid.update_neighbors();

        let mut recorder = Recorder::new(&self.grid, self.config.step_budget());
        let result = algorithm.run(&mut self.grid, start, end, &mut recorder);
        let summary = RunSummary {
            algorithm,
            result,
            steps: recorder.len(),
            cut_short: recorder.hit_limit(),
        };
        log::info!("{}", summary.status());
        self.last_run = Some(summary);

        let trace = recorder.into_trace();
        if !trace.deltas.is_empty() {
            self.playback = Some(Playback::new(trace));
        }
    }

    fn scatter(&mut self) {
        let added = maze::scatter_barriers(&mut self.grid, self.config.barrier_density, &mut self.rng);
        log::debug!("added {added} random barriers");
    }

    fn reset_board(&mut self) {
        self.grid.rebuild();
        self.start = None;
        self.end = None;
        self.last_run = None;
    }

    fn update_key(&mut self, key: Key) -> Option<Effect> {
        if matches!(key, Key::Char('q') | Key::Escape) {
            return Some(Effect::End);
        }
        if self.playback.is_some() {
            if key == Key::Space {
                self.playback = None;
            }
            return None;
        }
        match key {
            Key::Char('a') => self.run(Algorithm::AStar),
            Key::Char('d') => self.run(Algorithm::Dfs),
            Key::Char('b') => self.run(Algorithm::Bfs),
            Key::Char('k') => self.run(Algorithm::Dijkstra),
            Key::Enter => self.run(self.config.algorithm),
            Key::Char('c') => {
                self.grid.clear_search();
                self.last_run = None;
            }
            Key::Char('r') => self.reset_board(),
            Key::Char('m') => self.scatter(),
            _ => {}
        }
        None
    }

    fn update_mouse(&mut self, action: MouseAction, pos: Point) {
        if self.playback.is_some() {
            return;
        }
        let Some(p) = render::screen_to_node(pos, self.grid.size()) else {
            return;
        };
        match action {
            MouseAction::Main | MouseAction::DragMain => self.place(p),
            MouseAction::Secondary | MouseAction::DragSecondary => self.erase(p),
            _ => {}
        }
    }

    fn status(&self) -> String {
        match (&self.playback, &self.last_run) {
            (Some(pb), Some(run)) => format!("{}: step {}/{}", run.algorithm, pb.next, pb.deltas.len()),
            (None, Some(run)) => run.status(),
            _ => EDIT_HINT.to_string(),
        }
    }
}

impl Model for Visualizer {
    fn update(&mut self, msg: Msg) -> Option<Effect> {
        match msg {
            Msg::Init => {
                log::info!("board of {n}x{n} nodes", n = self.grid.size());
                None
            }
            Msg::KeyDown { key, .. } => self.update_key(key),
            Msg::Mouse { action, pos, .. } => {
                self.update_mouse(action, pos);
                None
            }
            Msg::Tick { .. } => {
                if let Some(pb) = &mut self.playback {
                    if !pb.advance() {
                        self.playback = None;
                    }
                }
                None
            }
            Msg::Quit => Some(Effect::End),
            Msg::Screen { .. } => None,
        }
    }

    fn draw(&self, screen: &mut Screen) {
        screen.fill(Cell::default());
        match &self.playback {
            Some(pb) => render::draw_board(&self.grid, &pb.shown, screen),
            None => render::draw_board(&self.grid, &self.grid.states(), screen),
        }
        render::draw_footer(self.grid.size(), &self.status(), HELP, screen);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MAX_SIZE;

    fn small() -> Visualizer {
        Visualizer::new(Config {
            size: 5,
            seed: Some(9),
            ..Config::default()
        })
    }

    fn click(v: &mut Visualizer, action: MouseAction, col: i32, row: i32) {
        v.update(Msg::mouse(action, Point::new(col * render::CELL_WIDTH, row)));
    }

    fn press(v: &mut Visualizer, ch: char) -> Option<Effect> {
        v.update(Msg::key(Key::Char(ch)))
    }

    fn play_out(v: &mut Visualizer) -> usize {
        let mut ticks = 0;
        while v.is_playing() {
            v.update(Msg::tick());
            ticks += 1;
        }
        ticks
    }

    #[test]
    fn clicks_place_start_end_then_barriers() {
        let mut v = small();
        click(&mut v, MouseAction::Main, 0, 0);
        click(&mut v, MouseAction::Main, 4, 4);
        click(&mut v, MouseAction::Main, 2, 2);
        click(&mut v, MouseAction::Main, 0, 0);
        assert_eq!(v.start(), Some(Point::new(0, 0)));
        assert_eq!(v.end(), Some(Point::new(4, 4)));
        assert_eq!(v.grid().role(Point::new(2, 2)), Role::Barrier);
        assert_eq!(v.grid().role(Point::new(0, 0)), Role::Start);
    }

    #[test]
    fn erasing_start_frees_the_slot() {
        let mut v = small();
        click(&mut v, MouseAction::Main, 0, 0);
        click(&mut v, MouseAction::Main, 4, 4);
        click(&mut v, MouseAction::Secondary, 0, 0);
        assert_eq!(v.start(), None);
        // The next click becomes Start again, not a barrier.
        click(&mut v, MouseAction::Main, 1, 1);
        assert_eq!(v.start(), Some(Point::new(1, 1)));
        assert_eq!(v.grid().role(Point::new(0, 0)), Role::None);
    }

    #[test]
    fn clicks_off_the_board_are_ignored() {
        let mut v = small();
        v.update(Msg::mouse(MouseAction::Main, Point::new(10, 0)));
        v.update(Msg::mouse(MouseAction::Main, Point::new(0, 5)));
        assert_eq!(v.start(), None);
    }

    #[test]
    fn search_needs_both_endpoints() {
        let mut v = small();
        click(&mut v, MouseAction::Main, 0, 0);
        press(&mut v, 'b');
        assert!(!v.is_playing());
        assert!(v.last_run().is_none());
    }

    #[test]
    fn search_plays_back_one_frame_per_tick() {
        let mut v = small();
        click(&mut v, MouseAction::Main, 0, 0);
        click(&mut v, MouseAction::Main, 4, 4);
        press(&mut v, 'a');
        let run = v.last_run().cloned().unwrap();
        assert_eq!(run.algorithm, Algorithm::AStar);
        assert_eq!(run.result.path().map(|p| p.len()), Some(8));
        assert!(v.is_playing());
        // Editing is locked during playback.
        click(&mut v, MouseAction::Main, 2, 2);
        assert_eq!(v.grid().role(Point::new(2, 2)), Role::None);
        let ticks = play_out(&mut v);
        assert_eq!(ticks, run.steps + 1);
        assert_eq!(v.grid().count_state(VisitState::Path), 7);
    }

    #[test]
    fn space_skips_playback() {
        let mut v = small();
        click(&mut v, MouseAction::Main, 0, 0);
        click(&mut v, MouseAction::Main, 4, 4);
        press(&mut v, 'd');
        assert!(v.is_playing());
        v.update(Msg::key(Key::Space));
        assert!(!v.is_playing());
    }

    #[test]
    fn rerun_clears_previous_trace() {
        let mut v = small();
        click(&mut v, MouseAction::Main, 0, 0);
        click(&mut v, MouseAction::Main, 4, 4);
        press(&mut v, 'd');
        play_out(&mut v);
        press(&mut v, 'k');
        play_out(&mut v);
        assert_eq!(v.last_run().unwrap().algorithm, Algorithm::Dijkstra);
        assert_eq!(v.grid().count_state(VisitState::Path), 7);
    }

    #[test]
    fn budget_is_reported() {
        let summary = RunSummary {
            algorithm: Algorithm::Bfs,
            result: SearchResult::Cancelled,
            steps: 2,
            cut_short: true,
        };
        assert_eq!(summary.status(), "BFS: cancelled after 2 steps (step budget reached)");
    }

    #[test]
    fn largest_board_finishes_with_default_budget() {
        let mut v = Visualizer::new(Config {
            size: MAX_SIZE,
            ..Config::default()
        });
        let last = MAX_SIZE - 1;
        click(&mut v, MouseAction::Main, 0, 0);
        click(&mut v, MouseAction::Main, last, last);
        press(&mut v, 'b');
        let run = v.last_run().cloned().unwrap();
        assert!(!run.cut_short);
        assert_eq!(run.result.path().map(|p| p.len()), Some(2 * last as usize));
        // Steps store only what changed: a few writes per node at most.
        let pb = v.playback.as_ref().unwrap();
        let stored: usize = pb.deltas.iter().map(Vec::len).sum();
        assert!(stored <= 3 * (MAX_SIZE * MAX_SIZE) as usize, "{stored}");
    }

    #[test]
    fn clear_and_reset() {
        let mut v = small();
        click(&mut v, MouseAction::Main, 0, 0);
        click(&mut v, MouseAction::Main, 4, 4);
        press(&mut v, 'b');
        play_out(&mut v);
        press(&mut v, 'c');
        assert_eq!(v.grid().count_state(VisitState::Unvisited), 25);
        assert_eq!(v.start(), Some(Point::new(0, 0)));
        press(&mut v, 'r');
        assert_eq!(v.start(), None);
        assert_eq!(v.grid().count_role(Role::None), 25);
    }

    #[test]
    fn maze_key_is_seeded() {
        let mut a = small();
        let mut b = small();
        press(&mut a, 'm');
        press(&mut b, 'm');
        assert_eq!(a.grid(), b.grid());
        assert!(a.grid().count_role(Role::Barrier) > 0);
    }

    #[test]
    fn quit_ends_even_during_playback() {
        let mut v = small();
        click(&mut v, MouseAction::Main, 0, 0);
        click(&mut v, MouseAction::Main, 4, 4);
        press(&mut v, 'b');
        assert!(matches!(press(&mut v, 'q'), Some(Effect::End)));
        assert!(matches!(v.update(Msg::key(Key::Escape)), Some(Effect::End)));
    }

    #[test]
    fn draw_shows_recorded_frame() {
        let mut v = small();
        click(&mut v, MouseAction::Main, 0, 0);
        click(&mut v, MouseAction::Main, 4, 4);
        press(&mut v, 'b');
        let (w, h) = render::screen_size(5);
        let mut screen = Screen::new(w, h);

        // Nothing shown yet: the first tick reveals the first step.
        v.draw(&mut screen);
        assert_eq!(screen.at(Point::new(8, 4)).style.bg, render::TURQUOISE);
        assert_eq!(screen.at(Point::new(2, 0)).style.bg, render::WHITE);
        v.update(Msg::tick());
        v.draw(&mut screen);
        // BFS opened (1, 0) on its first step.
        assert_eq!(screen.at(Point::new(2, 0)).style.bg, render::GREEN);
        assert!(screen.row_text(5).starts_with("BFS: step 1/"));
    }
}
