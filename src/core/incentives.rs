use serde::Serialize;

use crate::{
    prelude::*,
    quantity::{Dollars, KilowattHours, Kilometres},
    reference::{
        Applicant,
        CreditBasis,
        CreditProgram,
        IncentiveProgram,
        ProgramKind,
        ReferenceData,
    },
};

/// One-time program that matched, with its capped contribution.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct AppliedIncentive {
    pub program: String,
    pub kind: ProgramKind,
    pub amount: Dollars,
}

/// Recurring credit program that matched.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RecurringCredit {
    pub program: String,
    pub basis: CreditBasis,
    pub decline_rate: f64,

    /// Last 1-based projection year that still earns the credit, `None` for open-ended programs.
    pub last_year: Option<u32>,
}

impl RecurringCredit {
    pub fn amount(&self, year: u32, usage: Usage) -> Dollars {
        if year == 0 || self.last_year.is_some_and(|last_year| year > last_year) {
            return Dollars::ZERO;
        }
        let base = match self.basis {
            CreditBasis::PerKilometre(rate) => usage.distance * rate,
            CreditBasis::PerKilowattHour(rate) => usage.energy * rate,
        };
        base * (1.0 - self.decline_rate).powi(year.cast_signed() - 1)
    }
}

/// Yearly usage the recurring credits are earned on.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Usage {
    pub distance: Kilometres,

    /// Energy dispensed to the vehicle, zero for combustion vehicles.
    pub energy: KilowattHours,
}

/// Everything a single vehicle is entitled to.
#[must_use]
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Incentives {
    pub applied: Vec<AppliedIncentive>,

    /// Purchase rebates after the aggregate cap.
    pub purchase_total: Dollars,

    pub charger_total: Dollars,

    pub credits: Vec<RecurringCredit>,
}

impl Incentives {
    /// One-time total booked against the first year.
    pub fn one_time_total(&self) -> Dollars {
        self.purchase_total + self.charger_total
    }

    /// Sum of the recurring credits earned in the year.
    pub fn credit(&self, year: u32, usage: Usage) -> Dollars {
        self.credits.iter().map(|credit| credit.amount(year, usage)).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.applied.is_empty() && self.credits.is_empty()
    }
}

/// Matches the incentive catalog against a vehicle.
pub struct IncentiveResolver<'a, D: ?Sized> {
    reference: &'a D,
}

impl<'a, D: ReferenceData + ?Sized> IncentiveResolver<'a, D> {
    /// Breakdown entry that takes back purchase rebates above the aggregate cap.
    pub const AGGREGATE_CAP: &'static str = "Aggregate rebate cap";

    pub const fn new(reference: &'a D) -> Self {
        Self { reference }
    }

    /// Resolve the programs for the applicant.
    ///
    /// Programs stack in catalog order, except that a program conflicting with an already applied
    /// one is skipped. Purchase rebates are capped in aggregate at a share of the vehicle price,
    /// while charger rebates are based on the charger cost attributed to the vehicle.
    ///
    /// The applied amounts always add up to [`Incentives::one_time_total`].
    #[instrument(skip_all, fields(powertrain = %applicant.powertrain))]
    pub fn resolve(
        &self,
        applicant: &Applicant<'_>,
        price: Dollars,
        charger_cost: Option<Dollars>,
    ) -> Incentives {
        let mut applied_programs: Vec<&IncentiveProgram> = Vec::new();
        let mut applied = Vec::new();
        let mut purchase_total = Dollars::ZERO;
        let mut charger_total = Dollars::ZERO;

        for program in self.reference.incentives() {
            if !program.eligibility.matches(applicant) {
                continue;
            }
            if let Some(conflict) = applied_programs.iter().find(|it| it.conflicts_with(program)) {
                debug!(
                    program = %program.name,
                    conflict = %conflict.name,
                    "skipped mutually exclusive program",
                );
                continue;
            }
            let base = match program.kind {
                ProgramKind::Purchase => price,
                ProgramKind::Charger => match charger_cost {
                    Some(cost) => cost,
                    None => continue,
                },
            };
            let Some(amount) = program.amount(base, applicant.class) else {
                continue;
            };
            debug!(program = %program.name, ?amount, "applied");
            match program.kind {
                ProgramKind::Purchase => purchase_total += amount,
                ProgramKind::Charger => charger_total += amount,
            }
            applied_programs.push(program);
            applied.push(AppliedIncentive {
                program: program.name.clone(),
                kind: program.kind,
                amount,
            });
        }

        let purchase_cap = price * self.reference.assumptions().max_rebate_share;
        if purchase_total > purchase_cap {
            debug!(?purchase_total, ?purchase_cap, "capped purchase rebates");
            applied.push(AppliedIncentive {
                program: Self::AGGREGATE_CAP.to_string(),
                kind: ProgramKind::Purchase,
                amount: purchase_cap - purchase_total,
            });
            purchase_total = purchase_cap;
        }

        let credits = self
            .reference
            .credits()
            .iter()
            .filter(|program| program.eligibility.matches(applicant))
            .map(|program| self.recurring_credit(program))
            .collect();

        Incentives { applied, purchase_total, charger_total, credits }
    }

    fn recurring_credit(&self, program: &CreditProgram) -> RecurringCredit {
        let base_year = self.reference.assumptions().base_year;

        // Earned while `year < end_year - base_year`.
        let last_year =
            program.end_year.map(|end_year| (end_year - base_year - 1).max(0).cast_unsigned());

        RecurringCredit {
            program: program.name.clone(),
            basis: program.rate,
            decline_rate: program.decline_rate,
            last_year,
        }
    }
}
