use pathviz_core::Point;
use pathviz_search::{Algorithm, Control, Grid, SearchResult, VisitState};

fn prepare(layout: &str) -> (Grid, Point, Point) {
    let mut grid: Grid = layout.parse().expect("layout");
    grid.update_neighbors();
    let start = grid.start().expect("start");
    let end = grid.end().expect("end");
    (grid, start, end)
}

/// Run `algo` to completion, returning the final grid, the result and the
/// number of steps it took.
fn solve(algo: Algorithm, layout: &str) -> (Grid, SearchResult, usize) {
    let (mut grid, start, end) = prepare(layout);
    let mut steps = 0;
    let result = algo.run(&mut grid, start, end, &mut |_: &Grid| {
        steps += 1;
        Control::Continue
    });
    (grid, result, steps)
}

const OPEN_5: &str = "\
    S....\n\
    .....\n\
    .....\n\
    .....\n\
    ....E";

#[test]
fn open_field_shortest_is_eight() {
    for algo in Algorithm::ALL {
        let (grid, result, _) = solve(algo, OPEN_5);
        let path = result.path().unwrap_or_else(|| panic!("{algo}: no path"));
        assert!(path.is_contiguous(), "{algo}");
        assert_eq!(path.first(), Some(Point::new(0, 0)), "{algo}");
        assert_eq!(path.last(), Some(Point::new(4, 4)), "{algo}");
        if algo.is_optimal() {
            assert_eq!(path.len(), 8, "{algo}");
        } else {
            assert!(path.len() >= 8, "{algo}");
        }
        assert_eq!(grid.state(Point::new(4, 4)), VisitState::Unvisited, "{algo}");
    }
}

#[test]
fn wall_with_single_gap_forces_detour() {
    let layout = "\
        ..S..\n\
        .....\n\
        ###.#\n\
        .....\n\
        ..E..";
    for algo in Algorithm::ALL {
        let (_, result, _) = solve(algo, layout);
        let path = result.path().unwrap_or_else(|| panic!("{algo}: no path"));
        assert!(path.points().contains(&Point::new(3, 2)), "{algo}");
        if algo.is_optimal() {
            assert_eq!(path.len(), 6, "{algo}");
        }
    }
}

#[test]
fn walled_off_end_is_not_found() {
    let layout = "\
        S....\n\
        .....\n\
        .....\n\
        ...##\n\
        ...#E";
    for algo in Algorithm::ALL {
        let (grid, result, _) = solve(algo, layout);
        assert_eq!(result, SearchResult::NotFound, "{algo}");
        assert_eq!(grid.count_state(VisitState::Path), 0, "{algo}");
        assert_eq!(grid.count_state(VisitState::DeadEnd), 0, "{algo}");
        assert!(grid.count_state(VisitState::Closed) > 0, "{algo}");
        assert_eq!(grid.state(Point::new(4, 4)), VisitState::Unvisited, "{algo}");
    }
}

#[test]
fn adjacent_end_takes_constant_steps() {
    for layout in ["SE\n..", "S.\nE.", "...\n.ES\n..."] {
        for algo in Algorithm::ALL {
            let (_, result, steps) = solve(algo, layout);
            assert_eq!(result.path().map(|p| p.len()), Some(1), "{algo} on {layout:?}");
            assert!(steps <= 2, "{algo} took {steps} steps on {layout:?}");
        }
    }
}

#[test]
fn cancel_stops_every_algorithm() {
    for algo in Algorithm::ALL {
        let (mut grid, start, end) = prepare(OPEN_5);
        let mut calls = 0;
        let mut last = None;
        let result = algo.run(&mut grid, start, end, &mut |g: &Grid| {
            calls += 1;
            last = Some(g.clone());
            if calls == 3 { Control::Cancel } else { Control::Continue }
        });
        assert!(result.cancelled(), "{algo}");
        assert_eq!(calls, 3, "{algo}");
        // Nothing was written after the cancelling step.
        assert_eq!(last.as_ref(), Some(&grid), "{algo}");
    }
}

#[test]
fn barriers_need_neighbor_refresh() {
    let (mut grid, start, end) = prepare("S.E\n...\n...");
    // Added after the adjacency pass: still walkable until the next refresh.
    grid.set_role(Point::new(1, 0), pathviz_search::Role::Barrier);
    let stale = Algorithm::Bfs.run(&mut grid, start, end, &mut |_: &Grid| Control::Continue);
    assert_eq!(stale.path().map(|p| p.len()), Some(2));

    grid.clear_search();
    grid.update_neighbors();
    let fresh = Algorithm::Bfs.run(&mut grid, start, end, &mut |_: &Grid| Control::Continue);
    assert_eq!(fresh.path().map(|p| p.len()), Some(4));
}

#[test]
fn cleared_grid_can_be_searched_again() {
    let (mut grid, start, end) = prepare(OPEN_5);
    let mut first = 0;
    Algorithm::AStar.run(&mut grid, start, end, &mut |_: &Grid| {
        first += 1;
        Control::Continue
    });
    assert!(grid.clear_search() > 0);
    let mut second = 0;
    let result = Algorithm::AStar.run(&mut grid, start, end, &mut |_: &Grid| {
        second += 1;
        Control::Continue
    });
    assert_eq!(result.path().map(|p| p.len()), Some(8));
    assert_eq!(first, second);
}
