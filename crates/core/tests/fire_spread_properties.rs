//! Property suite for the fire-spread automaton
//!
//! Validates the observable guarantees of the rule evaluator through the
//! public simulation API: quiescence away from fire, one-step immediate
//! transitions, dimension stability, and deterministic replay.
//!
//! Run with: cargo test --test `fire_spread_properties`

use fire_grid_core::{
    CellState, FireSimulation, IgnitionMode, MapLayout, RuleSet, SimulationConfig,
};

fn uniform_config(width: usize, height: usize, state: CellState) -> SimulationConfig {
    SimulationConfig {
        width,
        height,
        layout: MapLayout::Uniform(state),
        seed: Some(1),
        ..SimulationConfig::default()
    }
}

#[test]
fn cells_without_fire_nearby_are_stable() {
    let mut sim = FireSimulation::new(&uniform_config(7, 7, CellState::Flamable)).unwrap();
    sim.set_cell(0, 0, CellState::Burning).unwrap();

    sim.step();

    // Everything outside the corner's Moore neighborhood must be untouched
    for (x, y, cell) in sim.grid().iter() {
        if x > 1 || y > 1 {
            assert_eq!(
                cell.state,
                CellState::Flamable,
                "cell ({x}, {y}) changed with no fire nearby"
            );
        }
    }
}

#[test]
fn crowded_flamable_cell_ignites_in_one_step() {
    let mut sim = FireSimulation::new(&uniform_config(3, 3, CellState::Inflamable)).unwrap();
    sim.set_cell(1, 1, CellState::Flamable).unwrap();
    for (x, y) in [(0, 0), (1, 0), (2, 0), (0, 1)] {
        sim.set_cell(x, y, CellState::Burning).unwrap();
    }

    assert_eq!(sim.grid().get(1, 1).unwrap(), CellState::Flamable);
    sim.step();
    assert_eq!(sim.grid().get(1, 1).unwrap(), CellState::Burning);
}

#[test]
fn three_burning_neighbors_do_not_ignite_immediately() {
    // At the default threshold, immediate ignition needs strictly more than 3
    let mut sim = FireSimulation::new(&uniform_config(3, 3, CellState::Inflamable)).unwrap();
    sim.set_cell(1, 1, CellState::Flamable).unwrap();
    for (x, y) in [(0, 0), (1, 0), (2, 0)] {
        sim.set_cell(x, y, CellState::Burning).unwrap();
    }

    sim.step();
    assert_eq!(sim.grid().get(1, 1).unwrap(), CellState::Flamable);
    assert_eq!(sim.grid().cell(1, 1).unwrap().ignite_ticks, 1);
}

#[test]
fn burnt_crowded_burning_cell_collapses_in_one_step() {
    let mut sim = FireSimulation::new(&uniform_config(3, 3, CellState::Inflamable)).unwrap();
    sim.set_cell(1, 1, CellState::Burning).unwrap();
    sim.set_cell(0, 1, CellState::Burnt).unwrap();
    sim.set_cell(2, 1, CellState::Burnt).unwrap();

    sim.step();
    assert_eq!(sim.grid().get(1, 1).unwrap(), CellState::Burnt);
}

#[test]
fn dimensions_preserved_over_long_runs() {
    let config = SimulationConfig {
        width: 48,
        height: 32,
        layout: MapLayout::RandomFill { fill_percent: 55.0 },
        seed: Some(99),
        ..SimulationConfig::default()
    };
    let mut sim = FireSimulation::new(&config).unwrap();
    sim.ignite(24, 16).unwrap();
    sim.run(100);

    assert_eq!(sim.grid().dimensions(), (48, 32));
    assert_eq!(sim.counts().total(), 48 * 32);
}

#[test]
fn delayed_fire_spreads_outward() {
    let config = SimulationConfig {
        rules: RuleSet {
            ignite_delay: 1,
            ..RuleSet::default()
        },
        ..uniform_config(9, 9, CellState::Flamable)
    };
    let mut sim = FireSimulation::new(&config).unwrap();
    sim.ignite(4, 4).unwrap();

    sim.run(10);

    let counts = sim.counts();
    assert!(
        counts.burning > 1,
        "fire failed to spread: {} burning",
        counts.burning
    );
    assert!(counts.flamable < 80, "no fuel was consumed");
}

#[test]
fn stochastic_replay_is_deterministic() {
    let config = SimulationConfig {
        width: 32,
        height: 32,
        rules: RuleSet {
            ignition: IgnitionMode::Stochastic,
            ..RuleSet::default()
        },
        layout: MapLayout::RandomFill { fill_percent: 65.0 },
        seed: Some(2024),
        ..SimulationConfig::default()
    };

    let mut a = FireSimulation::new(&config).unwrap();
    let mut b = FireSimulation::new(&config).unwrap();

    for sim in [&mut a, &mut b] {
        sim.set_cell(16, 16, CellState::Burning).unwrap();
        sim.run(40);
    }

    assert_eq!(a.grid(), b.grid());
    assert_eq!(a.counts(), b.counts());
}

#[test]
fn different_seeds_produce_different_runs() {
    let base = SimulationConfig {
        width: 32,
        height: 32,
        layout: MapLayout::RandomFill { fill_percent: 60.0 },
        seed: Some(1),
        ..SimulationConfig::default()
    };
    let other = SimulationConfig {
        seed: Some(2),
        ..base.clone()
    };

    let a = FireSimulation::new(&base).unwrap();
    let b = FireSimulation::new(&other).unwrap();
    assert_ne!(a.grid(), b.grid());
}

#[test]
fn queued_actions_survive_replay() {
    let config = uniform_config(10, 10, CellState::Flamable);

    let run = |mut sim: FireSimulation| {
        sim.ignite(3, 3).unwrap();
        sim.ignite(6, 6).unwrap();
        sim.step();
        sim.extinguish(3, 3).unwrap();
        sim.run(20);
        sim
    };

    let a = run(FireSimulation::new(&config).unwrap());
    let b = run(FireSimulation::new(&config).unwrap());

    assert_eq!(a.grid(), b.grid());
    assert_eq!(a.action_history(), b.action_history());
}
