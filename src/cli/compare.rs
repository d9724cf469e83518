use anyhow::Result;
use clap::Parser;
use tco::{core::Calculator, prelude::instrument, quantity::Kilometres};

use crate::{
    cli::scenario::{ReferenceArgs, ScenarioArgs},
    tables::{build_incentives_table, build_savings_table, build_summary_table, build_yearly_table},
};

#[derive(Parser)]
pub struct CompareArgs {
    #[clap(flatten)]
    pub reference: ReferenceArgs,

    #[clap(long = "daily-distance-km", env = "TCO_DAILY_DISTANCE_KM")]
    pub daily_distance: Kilometres,

    #[clap(flatten)]
    pub scenario: ScenarioArgs,

    /// Print the full result as JSON instead of the tables.
    #[clap(long)]
    pub json: bool,
}

#[instrument(skip_all)]
pub fn compare(args: &CompareArgs) -> Result<()> {
    let snapshot = args.reference.load()?;
    let scenario = args.scenario.scenario(args.daily_distance)?;
    let result = Calculator::new(&snapshot).calculate(&scenario)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }
    for results in [&result.ev_results, &result.ice_results] {
        println!("{} ({})", results.vehicle_name, results.powertrain);
        println!("{}", build_yearly_table(results));
    }
    if !result.ev_results.incentives.is_empty() {
        println!("{}", build_incentives_table(&result.ev_results.incentives));
    }
    println!("{}", build_summary_table(&result));
    println!("{}", build_savings_table(&result));
    Ok(())
}
