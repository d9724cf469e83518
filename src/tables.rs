use comfy_table::{Attribute, Cell, CellAlignment, Color, Table, modifiers, presets};
use itertools::Itertools;
use tco::{
    core::{Caveat, Incentives, Powertrain, TcoResult, VehicleTcoResult},
    quantity::Dollars,
    reference::{Drive, Snapshot},
};

use crate::fmt::{FormattedPercentage, FormattedYear};

fn new_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(presets::UTF8_FULL_CONDENSED)
        .apply_modifier(modifiers::UTF8_ROUND_CORNERS)
        .enforce_styling();
    table
}

/// Right-aligned amount, dimmed when below a cent and green when it is a credit.
fn amount_cell(amount: Dollars) -> Cell {
    let amount = amount.round_to_cents();
    if amount.abs() < Dollars::ONE_CENT {
        return Cell::new(Dollars::ZERO)
            .set_alignment(CellAlignment::Right)
            .add_attribute(Attribute::Dim);
    }
    let cell = Cell::new(amount).set_alignment(CellAlignment::Right);
    if amount < Dollars::ZERO {
        cell.fg(Color::Green)
    } else {
        cell
    }
}

pub fn build_yearly_table(results: &VehicleTcoResult) -> Table {
    let mut table = new_table();
    table.set_header(vec![
        "Year",
        "Purchase",
        "Loan",
        "Energy",
        "Maintenance",
        "Insurance",
        "Carbon tax",
        "Charger",
        "Charger upkeep",
        "Rebates",
        "Credits",
        "Residual",
        "Total",
        "Discounted",
        "Cumulative",
    ]);
    for (line, cumulative) in results.lines.iter().zip(&results.cumulative) {
        table.add_row(vec![
            Cell::new(line.year),
            amount_cell(line.purchase),
            amount_cell(line.loan_payments),
            amount_cell(line.energy),
            amount_cell(line.maintenance),
            amount_cell(line.insurance),
            amount_cell(line.carbon_tax),
            amount_cell(line.infrastructure),
            amount_cell(line.infrastructure_maintenance),
            amount_cell(line.rebates),
            amount_cell(line.credits),
            amount_cell(line.residual),
            amount_cell(line.total()).add_attribute(Attribute::Bold),
            amount_cell(line.discounted_total()),
            Cell::new(cumulative)
                .set_alignment(CellAlignment::Right)
                .add_attribute(Attribute::Dim),
        ]);
    }
    table
}

pub fn build_incentives_table(incentives: &Incentives) -> Table {
    let mut table = new_table();
    table.set_header(vec!["Program", "Kind", "Amount"]);
    for incentive in &incentives.applied {
        table.add_row(vec![
            Cell::new(&incentive.program),
            Cell::new(format!("{:?}", incentive.kind)),
            amount_cell(-incentive.amount),
        ]);
    }
    for credit in &incentives.credits {
        table.add_row(vec![
            Cell::new(&credit.program),
            Cell::new(match credit.last_year {
                Some(last_year) => format!("Recurring, years 1–{last_year}"),
                None => "Recurring".to_string(),
            }),
            Cell::new(format!("{} decline", FormattedPercentage(credit.decline_rate)))
                .set_alignment(CellAlignment::Right)
                .add_attribute(Attribute::Dim),
        ]);
    }
    table
}

pub fn build_summary_table(result: &TcoResult) -> Table {
    let mut table = new_table();
    table.set_header(vec![
        "Vehicle",
        "Powertrain",
        "List price",
        "Effective price",
        "Nominal cost",
        "Net present cost",
    ]);
    let cheaper = if result.total_savings >= Dollars::ZERO {
        Powertrain::Electric
    } else {
        Powertrain::Combustion
    };
    for results in [&result.ev_results, &result.ice_results] {
        table.add_row(vec![
            Cell::new(&results.vehicle_name),
            Cell::new(results.powertrain),
            amount_cell(results.list_price),
            amount_cell(results.purchase_price_effective),
            amount_cell(results.nominal_cost),
            Cell::new(results.total_cost).set_alignment(CellAlignment::Right).fg(
                if results.powertrain == cheaper { Color::Green } else { Color::Red },
            ),
        ]);
    }
    table
}

pub fn build_savings_table(result: &TcoResult) -> Table {
    let mut table = new_table();
    table.set_header(vec!["Discount rate", "Savings", "Nominal savings", "Breakeven", "Caveats"]);
    let caveats = result
        .caveats
        .iter()
        .map(|caveat| match caveat {
            Caveat::NoIncentives { vehicle } => format!("no incentives for {vehicle}"),
            Caveat::PayloadExceedsCapacity { vehicle, capacity } => {
                format!("{vehicle} carries at most {capacity}")
            }
            Caveat::LoanOutlivesHorizon { term_years, years } => {
                format!("{term_years}-year loan outlives the {years}-year horizon")
            }
        })
        .join("\n");
    table.add_row(vec![
        Cell::new(FormattedPercentage(result.scenario.discount_rate)),
        Cell::new(result.total_savings)
            .set_alignment(CellAlignment::Right)
            .add_attribute(Attribute::Bold)
            .fg(if result.total_savings >= Dollars::ZERO { Color::Green } else { Color::Red }),
        amount_cell(result.nominal_savings),
        Cell::new(FormattedYear(result.breakeven_year)),
        Cell::new(caveats).fg(Color::DarkYellow),
    ]);
    table
}

pub fn build_sweep_table(results: &[TcoResult]) -> Table {
    let mut table = new_table();
    table.set_header(vec!["Daily distance", "EV", "ICE", "Savings", "Breakeven"]);
    for result in results {
        table.add_row(vec![
            Cell::new(result.scenario.daily_distance).set_alignment(CellAlignment::Right),
            Cell::new(result.ev_results.total_cost).set_alignment(CellAlignment::Right),
            Cell::new(result.ice_results.total_cost).set_alignment(CellAlignment::Right),
            Cell::new(result.total_savings)
                .set_alignment(CellAlignment::Right)
                .fg(if result.total_savings >= Dollars::ZERO { Color::Green } else { Color::Red }),
            Cell::new(FormattedYear(result.breakeven_year)),
        ]);
    }
    table
}

pub fn build_vehicles_table(snapshot: &Snapshot) -> Table {
    let mut table = new_table();
    table.set_header(vec![
        "Name",
        "Powertrain",
        "Category",
        "Class",
        "List price",
        "Consumption",
        "Payload",
        "Charger",
    ]);
    for vehicle in &snapshot.vehicles {
        let (consumption, charger) = match &vehicle.drive {
            Drive::Electric { consumption, charger, .. } => {
                (consumption.to_string(), charger.clone().unwrap_or_default())
            }
            Drive::Combustion { consumption, fuel } => {
                (format!("{consumption} ({fuel:?})"), String::new())
            }
        };
        table.add_row(vec![
            Cell::new(&vehicle.name),
            Cell::new(vehicle.powertrain()),
            Cell::new(vehicle.category),
            Cell::new(vehicle.fhwa_class.as_deref().unwrap_or_default()),
            amount_cell(vehicle.list_price),
            Cell::new(consumption).set_alignment(CellAlignment::Right),
            Cell::new(
                vehicle.payload_capacity.map(|capacity| capacity.to_string()).unwrap_or_default(),
            )
            .set_alignment(CellAlignment::Right),
            Cell::new(charger).add_attribute(Attribute::Dim),
        ]);
    }
    table
}
