//! The calculation engine: scenario in, yearly cost projections and their comparison out.

mod calculator;
mod category;
mod discount;
mod escalation;
mod financing;
mod incentives;
mod powertrain;
mod projector;
mod province;
mod result;
mod scenario;

pub use self::{
    calculator::Calculator,
    category::Category,
    discount::DiscountSchedule,
    escalation::Escalation,
    financing::Loan,
    incentives::{AppliedIncentive, IncentiveResolver, Incentives, RecurringCredit, Usage},
    powertrain::{FuelKind, Powertrain},
    projector::Projector,
    province::Province,
    result::{Caveat, TcoResult, VehicleTcoResult, YearlyCostLine},
    scenario::{Acquisition, Overrides, Scenario},
};
