use clap::Parser;
use fire_grid_core::{
    CellState, FireSimulation, IgnitionMode, MapLayout, RuleSet, SimulationConfig,
};

/// Fire-spread automaton demo with configurable parameters
#[derive(Parser, Debug)]
#[command(name = "fire-grid-demo")]
#[command(about = "Headless fire-spread cellular automaton demo", long_about = None)]
struct Args {
    /// Grid width in cells
    #[arg(long, default_value_t = 64)]
    width: usize,

    /// Grid height in cells
    #[arg(long, default_value_t = 40)]
    height: usize,

    /// Maximum number of steps to run
    #[arg(short, long, default_value_t = 200)]
    steps: u64,

    /// Random fuel coverage in percent (omit for a fully flamable field)
    #[arg(short, long)]
    fill: Option<f32>,

    /// RNG seed (omit for a random one)
    #[arg(long)]
    seed: Option<u64>,

    /// Use probabilistic ignition instead of the ignite counter
    #[arg(long)]
    stochastic: bool,

    /// Steps a flamable cell smolders next to fire before igniting
    #[arg(long, default_value_t = 10)]
    ignite_delay: u32,

    /// Steps a crowded burning cell persists before burning out
    #[arg(long, default_value_t = 10)]
    burnout_delay: u32,

    /// Report interval in steps
    #[arg(short, long, default_value_t = 10)]
    report_interval: u64,

    /// Print the final grid as ASCII
    #[arg(long)]
    render: bool,
}

fn main() {
    let args = Args::parse();
    if let Err(e) = run(&args) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Fire Grid Demo ===\n");

    let layout = match args.fill {
        Some(fill_percent) => MapLayout::RandomFill { fill_percent },
        None => MapLayout::Uniform(CellState::Flamable),
    };
    let config = SimulationConfig {
        width: args.width,
        height: args.height,
        rules: RuleSet {
            ignition: if args.stochastic {
                IgnitionMode::Stochastic
            } else {
                IgnitionMode::Delayed
            },
            ignite_delay: args.ignite_delay,
            burnout_delay: args.burnout_delay,
            ..RuleSet::default()
        },
        layout,
        seed: args.seed,
    };

    let mut sim = FireSimulation::new(&config)?;
    println!(
        "Created {}x{} grid (seed {})",
        args.width,
        args.height,
        sim.seed()
    );

    // Light the center and its right-hand neighbor; a lone burning cell on a
    // sparse map can smolder out before anything catches
    let (cx, cy) = (args.width / 2, args.height / 2);
    for x in [cx, (cx + 1).min(args.width - 1)] {
        if sim.ignite(x, cy).is_ok() {
            println!("Igniting cell ({x}, {cy})");
        }
    }

    println!("\nRunning simulation...\n");
    println!("   Step | Flamable | Burning | Burnt | Changes");
    println!("--------|----------|---------|-------|--------");

    let mut step = 0;
    while step < args.steps {
        sim.step();
        step += 1;

        let counts = sim.counts();
        if step % args.report_interval == 0 || counts.burning == 0 {
            println!(
                "{:7} | {:8} | {:7} | {:5} | {:7}",
                step,
                counts.flamable,
                counts.burning,
                counts.burnt,
                sim.last_changes().len()
            );
        }
        if counts.burning == 0 && step > 1 {
            break;
        }
    }

    let counts = sim.counts();
    println!("\n=== Simulation Complete ===");
    println!("Final step: {}", sim.steps());
    println!("Cells burnt: {}", counts.burnt);
    println!("Cells still burning: {}", counts.burning);
    println!("Fuel remaining: {}", counts.flamable);

    if args.render {
        println!("\nFinal grid ('.' bare, ',' fuel, '#' burning, 'x' burnt):");
        print_grid(&sim);
    }

    Ok(())
}

fn print_grid(sim: &FireSimulation) {
    let grid = sim.grid();
    for y in 0..grid.height() {
        let row: String = (0..grid.width())
            .map(|x| grid.get(x, y).map_or('?', CellState::glyph))
            .collect();
        println!("{row}");
    }
}
