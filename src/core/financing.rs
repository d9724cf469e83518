use crate::quantity::Dollars;

/// Amortized loan with monthly payments.
#[must_use]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Loan {
    pub principal: Dollars,
    pub annual_interest_rate: f64,
    pub term_years: u32,
}

impl Loan {
    const MONTHS_PER_YEAR: u32 = 12;

    /// Level monthly payment, the spreadsheet `PMT(rate / 12, 12 × term, -principal)`.
    pub fn monthly_payment(&self) -> Dollars {
        let n_payments = f64::from(self.term_years * Self::MONTHS_PER_YEAR);
        let monthly_rate = self.annual_interest_rate / f64::from(Self::MONTHS_PER_YEAR);
        if monthly_rate == 0.0 {
            return self.principal / n_payments;
        }
        self.principal * monthly_rate / (1.0 - (1.0 + monthly_rate).powf(-n_payments))
    }

    /// Payments made during the 1-based year.
    pub fn payments_in(&self, year: u32) -> Dollars {
        if (1..=self.term_years).contains(&year) {
            self.monthly_payment() * f64::from(Self::MONTHS_PER_YEAR)
        } else {
            Dollars::ZERO
        }
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn test_monthly_payment() {
        // PMT(0.06 / 12, 60, -50000)
        let loan =
            Loan { principal: Dollars(50_000.0), annual_interest_rate: 0.06, term_years: 5 };
        assert_abs_diff_eq!(loan.monthly_payment().0, 966.64, epsilon = 0.01);
        assert_abs_diff_eq!(loan.payments_in(5).0, 12.0 * loan.monthly_payment().0);
        assert_eq!(loan.payments_in(6), Dollars::ZERO);
    }

    #[test]
    fn test_interest_free() {
        let loan = Loan { principal: Dollars(12_000.0), annual_interest_rate: 0.0, term_years: 2 };
        assert_abs_diff_eq!(loan.monthly_payment().0, 500.0);
        let total_paid: Dollars = (1..=2).map(|year| loan.payments_in(year)).sum();
        assert_abs_diff_eq!(total_paid.0, 12_000.0, epsilon = 1e-9);
    }

    #[test]
    fn test_interest_is_paid() {
        let loan =
            Loan { principal: Dollars(10_000.0), annual_interest_rate: 0.08, term_years: 3 };
        let total_paid: Dollars = (1..=3).map(|year| loan.payments_in(year)).sum();
        assert!(total_paid > loan.principal);
    }
}
