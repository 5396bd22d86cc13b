//! Interactive Fire Grid Demo
//!
//! A terminal-based interactive debugger for the fire-spread automaton.
//! Allows stepping through the simulation, igniting and extinguishing
//! cells, and inspecting per-cell state and counters.
//!
//! # Usage
//!
//! ```bash
//! cargo run --package demo-interactive
//! ```
//!
//! # Commands
//!
//! - `step [n]` - Advance simulation by n steps (default 1)
//! - `status` - Show step count, seed, and per-state tallies
//! - `show` - Render the grid as ASCII
//! - `cell <x> <y>` - Show one cell's state and counters
//! - `ignite <x> <y>` - Queue an ignite action for the next step
//! - `extinguish <x> <y>` - Queue an extinguish action for the next step
//! - `changes` - List transitions from the last step
//! - `reset [width height] [fill]` - Rebuild the grid (optional random fill %)
//! - `save <path>` / `load <path>` - Snapshot the run to/from JSON
//! - `help` - Show available commands
//! - `quit` - Exit

use fire_grid_core::{
    CellState, FireSimulation, GridSnapshot, MapLayout, SimulationConfig,
};
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use std::io::{self, Write};
use tracing_subscriber::EnvFilter;

/// Default grid dimensions
const DEFAULT_WIDTH: usize = 64;
const DEFAULT_HEIGHT: usize = 40;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("╔═══════════════════════════════════════════════════════╗");
    println!("║        Fire Grid Automaton - Interactive Debugger     ║");
    println!("╚═══════════════════════════════════════════════════════╝");
    println!();

    let (width, height) = prompt_grid_dimensions();

    let mut sim = match build_simulation(width, height, None) {
        Ok(sim) => sim,
        Err(e) => {
            eprintln!("Failed to create simulation: {e}");
            return;
        }
    };
    println!(
        "Created {}x{} grid (seed {}). All cells start flamable.",
        width,
        height,
        sim.seed()
    );
    println!("Use 'ignite <x> <y>' to start a fire.");

    let mut rl = match DefaultEditor::new() {
        Ok(rl) => rl,
        Err(e) => {
            eprintln!("Failed to create readline: {e}");
            return;
        }
    };

    println!("\nType 'help' for available commands.\n");

    loop {
        let readline = rl.readline("fire> ");
        match readline {
            Ok(line) => {
                let _ = rl.add_history_entry(&line);
                let parts: Vec<&str> = line.split_whitespace().collect();

                if parts.is_empty() {
                    continue;
                }

                match parts[0].to_lowercase().as_str() {
                    "step" | "s" => {
                        let count = parts.get(1).and_then(|s| s.parse().ok()).unwrap_or(1);
                        step_simulation(&mut sim, count);
                    }
                    "status" | "st" => show_status(&sim),
                    "show" | "m" => show_grid(&sim),
                    "cell" | "c" => {
                        if let (Some(x), Some(y)) = parse_coords(&parts) {
                            show_cell(&sim, x, y);
                        } else {
                            println!("Usage: cell <x> <y>");
                        }
                    }
                    "ignite" | "i" => {
                        if let (Some(x), Some(y)) = parse_coords(&parts) {
                            match sim.ignite(x, y) {
                                Ok(()) => println!("Queued ignite at ({x}, {y}) for next step"),
                                Err(e) => println!("{e}"),
                            }
                        } else {
                            println!("Usage: ignite <x> <y>");
                        }
                    }
                    "extinguish" | "e" => {
                        if let (Some(x), Some(y)) = parse_coords(&parts) {
                            match sim.extinguish(x, y) {
                                Ok(()) => {
                                    println!("Queued extinguish at ({x}, {y}) for next step");
                                }
                                Err(e) => println!("{e}"),
                            }
                        } else {
                            println!("Usage: extinguish <x> <y>");
                        }
                    }
                    "changes" | "ch" => show_changes(&sim),
                    "reset" | "r" => {
                        let (w, h) = sim.grid().dimensions();
                        let new_width = parts.get(1).and_then(|s| s.parse().ok()).unwrap_or(w);
                        let new_height = parts.get(2).and_then(|s| s.parse().ok()).unwrap_or(h);
                        let fill = parts.get(3).and_then(|s| s.parse::<f32>().ok());

                        match build_simulation(new_width, new_height, fill) {
                            Ok(new_sim) => {
                                sim = new_sim;
                                println!(
                                    "Simulation reset: {}x{} grid (seed {})",
                                    new_width,
                                    new_height,
                                    sim.seed()
                                );
                            }
                            Err(e) => println!("Reset failed: {e}"),
                        }
                    }
                    "save" => {
                        if let Some(path) = parts.get(1) {
                            match sim.snapshot().save(path) {
                                Ok(()) => println!("Saved snapshot to {path}"),
                                Err(e) => println!("{e}"),
                            }
                        } else {
                            println!("Usage: save <path>");
                        }
                    }
                    "load" => {
                        if let Some(path) = parts.get(1) {
                            match GridSnapshot::load(path)
                                .and_then(FireSimulation::from_snapshot)
                            {
                                Ok(loaded) => {
                                    sim = loaded;
                                    println!(
                                        "Loaded snapshot: {}x{} grid at step {}",
                                        sim.grid().width(),
                                        sim.grid().height(),
                                        sim.steps()
                                    );
                                }
                                Err(e) => println!("{e}"),
                            }
                        } else {
                            println!("Usage: load <path>");
                        }
                    }
                    "help" | "?" => show_help(),
                    "quit" | "q" | "exit" => {
                        println!("Goodbye!");
                        break;
                    }
                    _ => println!(
                        "Unknown command: {}. Type 'help' for available commands.",
                        parts[0]
                    ),
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("^C");
                break;
            }
            Err(ReadlineError::Eof) => {
                println!("^D");
                break;
            }
            Err(err) => {
                eprintln!("Error: {err:?}");
                break;
            }
        }
    }
}

/// Prompt user for grid dimensions at startup
fn prompt_grid_dimensions() -> (usize, usize) {
    println!("Enter grid dimensions (or press Enter for defaults):");

    let width = prompt_number("  Width in cells", DEFAULT_WIDTH);
    let height = prompt_number("  Height in cells", DEFAULT_HEIGHT);

    (width.clamp(1, 512), height.clamp(1, 512))
}

fn prompt_number(label: &str, default: usize) -> usize {
    print!("{label} [{default}]: ");
    let _ = io::stdout().flush();
    let mut buf = String::new();
    if io::stdin().read_line(&mut buf).is_err() {
        return default;
    }
    buf.trim().parse().unwrap_or(default)
}

fn build_simulation(
    width: usize,
    height: usize,
    fill: Option<f32>,
) -> Result<FireSimulation, fire_grid_core::ConfigError> {
    let layout = match fill {
        Some(fill_percent) => MapLayout::RandomFill { fill_percent },
        None => MapLayout::Uniform(CellState::Flamable),
    };
    FireSimulation::new(&SimulationConfig {
        width,
        height,
        layout,
        ..SimulationConfig::default()
    })
}

fn parse_coords(parts: &[&str]) -> (Option<usize>, Option<usize>) {
    (
        parts.get(1).and_then(|s| s.parse().ok()),
        parts.get(2).and_then(|s| s.parse().ok()),
    )
}

fn step_simulation(sim: &mut FireSimulation, count: u64) {
    sim.run(count);
    let counts = sim.counts();
    println!(
        "Advanced to step {} ({} transitions last step): {} flamable, {} burning, {} burnt",
        sim.steps(),
        sim.last_changes().len(),
        counts.flamable,
        counts.burning,
        counts.burnt
    );
}

fn show_status(sim: &FireSimulation) {
    let (width, height) = sim.grid().dimensions();
    let counts = sim.counts();
    println!("Grid: {width}x{height}, step {}, seed {}", sim.steps(), sim.seed());
    println!(
        "  inflamable: {:5}\n  flamable:   {:5}\n  burning:    {:5}\n  burnt:      {:5}",
        counts.inflamable, counts.flamable, counts.burning, counts.burnt
    );
    println!("  applied actions: {}", sim.action_history().len());
}

fn show_grid(sim: &FireSimulation) {
    let grid = sim.grid();
    println!("'.' bare, ',' fuel, '#' burning, 'x' burnt");
    for y in 0..grid.height() {
        let row: String = (0..grid.width())
            .map(|x| grid.get(x, y).map_or('?', CellState::glyph))
            .collect();
        println!("{row}");
    }
}

fn show_cell(sim: &FireSimulation, x: usize, y: usize) {
    match sim.grid().cell(x, y) {
        Ok(cell) => {
            println!("Cell ({x}, {y}): {}", cell.state);
            println!("  ignite ticks:  {}", cell.ignite_ticks);
            println!("  burnout ticks: {}", cell.burnout_ticks);
        }
        Err(e) => println!("{e}"),
    }
}

fn show_changes(sim: &FireSimulation) {
    let changes = sim.last_changes();
    if changes.is_empty() {
        println!("No transitions in the last step.");
        return;
    }
    println!("{} transition(s) in the last step:", changes.len());
    for change in changes {
        println!(
            "  ({}, {}): {} -> {}",
            change.x, change.y, change.from, change.to
        );
    }
}

fn show_help() {
    println!("Available commands:");
    println!("  step [n]              - advance by n steps (default 1)");
    println!("  status                - step count, seed, per-state tallies");
    println!("  show                  - render the grid as ASCII");
    println!("  cell <x> <y>          - one cell's state and counters");
    println!("  ignite <x> <y>        - queue an ignite action");
    println!("  extinguish <x> <y>    - queue an extinguish action");
    println!("  changes               - transitions from the last step");
    println!("  reset [w h] [fill%]   - rebuild the grid");
    println!("  save <path>           - write a JSON snapshot");
    println!("  load <path>           - resume from a JSON snapshot");
    println!("  quit                  - exit");
}
