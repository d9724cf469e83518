use anyhow::{Result, ensure};
use clap::Parser;
use tco::{core::Calculator, prelude::instrument, quantity::Kilometres};

use crate::{
    cli::scenario::{ReferenceArgs, ScenarioArgs},
    tables::build_sweep_table,
};

#[derive(Parser)]
pub struct SweepArgs {
    #[clap(flatten)]
    pub reference: ReferenceArgs,

    /// Daily distances to compare, in kilometres.
    #[clap(
        long = "distances",
        env = "TCO_DISTANCES",
        value_delimiter = ',',
        num_args = 1..,
        required = true,
    )]
    pub distances: Vec<Kilometres>,

    #[clap(flatten)]
    pub scenario: ScenarioArgs,

    /// Print the results as JSON instead of the table.
    #[clap(long)]
    pub json: bool,
}

#[instrument(skip_all)]
pub fn sweep(args: &SweepArgs) -> Result<()> {
    ensure!(!args.distances.is_empty(), "at least one distance is required");
    let snapshot = args.reference.load()?;
    let scenario = args.scenario.scenario(args.distances[0])?;
    let results = Calculator::new(&snapshot).sweep(&scenario, &args.distances)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&results)?);
    } else {
        println!("{}", build_sweep_table(&results));
    }
    Ok(())
}
