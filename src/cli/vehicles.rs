use anyhow::Result;
use clap::Parser;

use crate::{cli::scenario::ReferenceArgs, tables::build_vehicles_table};

#[derive(Parser)]
pub struct VehiclesArgs {
    #[clap(flatten)]
    pub reference: ReferenceArgs,
}

pub fn vehicles(args: &VehiclesArgs) -> Result<()> {
    let snapshot = args.reference.load()?;
    println!("{}", build_vehicles_table(&snapshot));
    Ok(())
}
