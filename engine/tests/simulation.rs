use game_of_life_core::{Cell, GridDimensions, Tick};
use game_of_life_engine::{query, Advance, Simulation};

fn dims(rows: u32, cols: u32) -> GridDimensions {
    GridDimensions::new(rows, cols).expect("valid dimensions")
}

fn seed(sim: &mut Simulation, cells: &[(u32, u32)]) {
    for &(row, col) in cells {
        sim.set_cell(row, col, Cell::Alive).expect("seed editable");
    }
}

fn alive_cells(sim: &Simulation, tick: Tick) -> Vec<(u32, u32)> {
    let view = query::generation(sim, tick).expect("tick computed");
    let grid = view.dimensions();
    let mut alive = Vec::new();
    for row in 0..grid.rows() {
        for col in 0..grid.cols() {
            if view.cell(row, col).expect("in bounds").is_alive() {
                alive.push((row, col));
            }
        }
    }
    alive
}

fn advance_tick(sim: &mut Simulation) -> Tick {
    match sim.advance() {
        Advance::Advanced(tick) => tick,
        Advance::AtCeiling(tick) => panic!("unexpected ceiling at tick {tick}"),
    }
}

#[test]
fn block_is_a_fixed_point() {
    let mut sim = Simulation::new(dims(6, 6), None);
    let block = [(2, 2), (2, 3), (3, 2), (3, 3)];
    seed(&mut sim, &block);

    for step in 1..=5u32 {
        let tick = advance_tick(&mut sim);
        assert_eq!(tick, Tick::new(step));
        assert_eq!(alive_cells(&sim, tick), block.to_vec());
    }
}

#[test]
fn blinker_oscillates_with_period_two() {
    let mut sim = Simulation::new(dims(5, 5), None);
    let horizontal = [(2, 1), (2, 2), (2, 3)];
    let vertical = [(1, 2), (2, 2), (3, 2)];
    seed(&mut sim, &horizontal);

    let first = advance_tick(&mut sim);
    assert_eq!(alive_cells(&sim, first), vertical.to_vec());

    let second = advance_tick(&mut sim);
    assert_eq!(alive_cells(&sim, second), horizontal.to_vec());

    let stats = query::statistics(&sim, second).expect("tick computed");
    assert_eq!(stats.alive, 3);
    assert_eq!(stats.dead, 22);
}

#[test]
fn lone_corner_cell_dies_despite_wrapped_visibility() {
    // (0, 0) is a wrapped neighbor of all of (2, 2), (1, 1), (0, 1) and
    // (1, 0) on a 3x3 torus, but a single live cell has no support and dies.
    let mut sim = Simulation::new(dims(3, 3), None);
    seed(&mut sim, &[(0, 0)]);

    let tick = advance_tick(&mut sim);
    assert!(alive_cells(&sim, tick).is_empty());
}

#[test]
fn glider_wraps_around_the_torus_edges() {
    // A glider travels one cell diagonally every four generations; on a
    // 8x8 torus it must re-enter on the opposite side instead of leaving.
    let mut sim = Simulation::new(dims(8, 8), None);
    let glider = [(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)];
    seed(&mut sim, &glider);

    let mut last = Tick::ZERO;
    for _ in 0..32 {
        last = advance_tick(&mut sim);
        let stats = query::statistics(&sim, last).expect("tick computed");
        assert_eq!(stats.alive, 5, "glider must survive the edge crossing");
    }
    // 32 generations translate the glider by (8, 8), a full torus lap.
    assert_eq!(alive_cells(&sim, last), glider.to_vec());
}

#[test]
fn statistics_counts_always_cover_the_board() {
    let mut sim = Simulation::new(dims(7, 9), None);
    seed(&mut sim, &[(0, 0), (3, 4), (6, 8), (2, 2)]);

    let initial = query::statistics(&sim, Tick::ZERO).expect("seed exists");
    assert_eq!(initial.alive + initial.dead, 63);

    for _ in 0..10 {
        let tick = advance_tick(&mut sim);
        let stats = query::statistics(&sim, tick).expect("tick computed");
        assert_eq!(stats.alive + stats.dead, 63);
        assert_eq!(stats.total(), 63);
    }
}

#[test]
fn advance_then_rewind_restores_the_previous_observation() {
    let mut sim = Simulation::new(dims(5, 5), None);
    seed(&mut sim, &[(2, 1), (2, 2), (2, 3)]);
    let before = alive_cells(&sim, Tick::ZERO);

    let advanced = advance_tick(&mut sim);
    assert_eq!(advanced, Tick::new(1));
    let rewound = sim.rewind().expect("cursor above genesis");
    assert_eq!(rewound, Tick::ZERO);
    assert_eq!(query::cursor(&sim), Tick::ZERO);
    assert_eq!(alive_cells(&sim, Tick::ZERO), before);
}

#[test]
fn re_advancing_replays_the_cached_generation() {
    let mut sim = Simulation::new(dims(5, 5), None);
    seed(&mut sim, &[(2, 1), (2, 2), (2, 3)]);

    let first = advance_tick(&mut sim);
    let computed = alive_cells(&sim, first);
    let highest = query::highest_tick(&sim);

    let _ = sim.rewind().expect("cursor above genesis");
    let replayed = advance_tick(&mut sim);

    assert_eq!(replayed, first);
    assert_eq!(alive_cells(&sim, replayed), computed);
    assert_eq!(
        query::highest_tick(&sim),
        highest,
        "replay must not extend the history"
    );
}

#[test]
fn rewound_cursor_reads_do_not_disturb_later_generations() {
    let mut sim = Simulation::new(dims(5, 5), None);
    seed(&mut sim, &[(2, 1), (2, 2), (2, 3)]);

    for _ in 0..4 {
        let _ = advance_tick(&mut sim);
    }
    let fourth = alive_cells(&sim, Tick::new(4));

    while query::cursor(&sim) > Tick::ZERO {
        let _ = sim.rewind().expect("cursor above genesis");
    }
    for _ in 0..4 {
        let _ = advance_tick(&mut sim);
    }
    assert_eq!(alive_cells(&sim, Tick::new(4)), fourth);
}
