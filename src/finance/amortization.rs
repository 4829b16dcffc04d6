//! Level-payment mortgage amortization
//!
//! A loan is either accruing interest on an outstanding balance or paid off.
//! The only transition is Accruing -> PaidOff, taken once the balance falls
//! to `PAYOFF_EPSILON` or below.

use serde::{Deserialize, Serialize};

use crate::error::{ModelError, Result};

/// Balance at or below which the loan counts as repaid
pub const PAYOFF_EPSILON: f64 = 1e-6;

/// Loan state between monthly steps
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum LoanState {
    Accruing { balance: f64 },
    PaidOff,
}

impl LoanState {
    pub fn new(principal: f64) -> Self {
        if principal <= PAYOFF_EPSILON {
            LoanState::PaidOff
        } else {
            LoanState::Accruing { balance: principal }
        }
    }

    /// Outstanding balance; zero once paid off
    pub fn balance(&self) -> f64 {
        match *self {
            LoanState::Accruing { balance } => balance,
            LoanState::PaidOff => 0.0,
        }
    }

    pub fn is_paid_off(&self) -> bool {
        matches!(self, LoanState::PaidOff)
    }
}

/// Split of one monthly payment
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonthlyPayment {
    pub interest: f64,
    pub principal: f64,
}

impl MonthlyPayment {
    pub fn total(&self) -> f64 {
        self.interest + self.principal
    }
}

/// Totals for one year of payments
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LoanYear {
    pub interest_paid: f64,
    pub principal_paid: f64,
    /// Number of payments actually made (fewer than 12 in the payoff year)
    pub payments_made: u32,
    /// State at the end of the year
    pub closing: LoanState,
}

/// Level monthly payment for a loan
///
/// Uses the annuity formula `P*r / (1 - (1+r)^-n)`; a zero rate falls back to
/// straight-line `P/n`.
pub fn level_payment(principal: f64, annual_rate: f64, term_years: u32) -> f64 {
    let r = annual_rate / 12.0;
    let n = (term_years * 12) as f64;
    if r == 0.0 {
        return principal / n;
    }
    principal * r / (1.0 - (1.0 + r).powf(-n))
}

/// Fixed-payment schedule for one loan
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AmortizationSchedule {
    monthly_payment: f64,
    monthly_rate: f64,
}

impl AmortizationSchedule {
    pub fn new(principal: f64, annual_rate: f64, term_years: u32) -> Result<Self> {
        if term_years == 0 {
            return Err(ModelError::invalid("mortgage_years", "loan term must be at least one year"));
        }
        Ok(Self {
            monthly_payment: level_payment(principal, annual_rate, term_years),
            monthly_rate: annual_rate / 12.0,
        })
    }

    pub fn monthly_payment(&self) -> f64 {
        self.monthly_payment
    }

    pub fn monthly_rate(&self) -> f64 {
        self.monthly_rate
    }

    /// Make one monthly payment. Returns the new state and the payment split,
    /// or `None` when the loan was already paid off.
    pub fn advance_month(&self, state: LoanState) -> (LoanState, Option<MonthlyPayment>) {
        match state {
            LoanState::PaidOff => (LoanState::PaidOff, None),
            LoanState::Accruing { balance } => {
                let interest = balance * self.monthly_rate;
                let principal = (self.monthly_payment - interest).min(balance);
                let remaining = balance - principal;
                let next = if remaining <= PAYOFF_EPSILON {
                    LoanState::PaidOff
                } else {
                    LoanState::Accruing { balance: remaining }
                };
                (next, Some(MonthlyPayment { interest, principal }))
            }
        }
    }

    /// Run up to twelve monthly payments starting from `state`
    pub fn advance_year(&self, state: LoanState) -> LoanYear {
        let mut year = LoanYear {
            interest_paid: 0.0,
            principal_paid: 0.0,
            payments_made: 0,
            closing: state,
        };

        for _month in 0..12 {
            let (next, payment) = self.advance_month(year.closing);
            let Some(payment) = payment else { break };
            year.interest_paid += payment.interest;
            year.principal_paid += payment.principal;
            year.payments_made += 1;
            year.closing = next;
        }

        year
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    #[test]
    fn test_standard_payment() {
        // 300k at 6% over 30 years: well-known payment of ~1798.65
        let payment = level_payment(300_000.0, 0.06, 30);
        assert_abs_diff_eq!(payment, 1798.65, epsilon = 0.01);
    }

    #[test]
    fn test_zero_rate_is_straight_line() {
        let payment = level_payment(120_000.0, 0.0, 10);
        assert_eq!(payment, 1_000.0);

        let schedule = AmortizationSchedule::new(120_000.0, 0.0, 10).unwrap();
        let year = schedule.advance_year(LoanState::new(120_000.0));
        assert_eq!(year.interest_paid, 0.0);
        assert_abs_diff_eq!(year.principal_paid, 12_000.0, epsilon = 1e-9);
    }

    #[test]
    fn test_zero_term_rejected() {
        assert!(AmortizationSchedule::new(100_000.0, 0.05, 0).is_err());
    }

    #[test]
    fn test_payment_splits_sum_to_payment() {
        let schedule = AmortizationSchedule::new(250_000.0, 0.065, 15).unwrap();
        let mut state = LoanState::new(250_000.0);
        let mut months = 0;

        while let (next, Some(payment)) = schedule.advance_month(state) {
            months += 1;
            if !next.is_paid_off() {
                assert_relative_eq!(payment.total(), schedule.monthly_payment(), max_relative = 1e-12);
            } else {
                assert!(payment.total() <= schedule.monthly_payment() + 1e-9);
            }
            state = next;
        }

        assert!(state.is_paid_off());
        assert!((179..=180).contains(&months), "paid off after {} months", months);
    }

    #[test]
    fn test_balance_non_increasing_and_repaid_at_term() {
        let schedule = AmortizationSchedule::new(89_000.0, 0.065, 30).unwrap();
        let mut state = LoanState::new(89_000.0);
        let mut previous = state.balance();

        for _year in 0..30 {
            let year = schedule.advance_year(state);
            assert!(year.closing.balance() <= previous);
            assert!(year.closing.balance() >= 0.0);
            previous = year.closing.balance();
            state = year.closing;
        }

        assert!(state.balance() <= PAYOFF_EPSILON);
    }

    #[test]
    fn test_paid_off_accrues_nothing() {
        let schedule = AmortizationSchedule::new(10_000.0, 0.05, 1).unwrap();
        let first = schedule.advance_year(LoanState::new(10_000.0));
        assert!(first.closing.is_paid_off());
        assert_eq!(first.payments_made, 12);

        let second = schedule.advance_year(first.closing);
        assert_eq!(second.interest_paid, 0.0);
        assert_eq!(second.principal_paid, 0.0);
        assert_eq!(second.payments_made, 0);
    }

    #[test]
    fn test_payoff_mid_year_stops_early() {
        // Balance well below one payment: repaid in the first month
        let schedule = AmortizationSchedule::new(100_000.0, 0.06, 10).unwrap();
        let year = schedule.advance_year(LoanState::new(500.0));

        assert_eq!(year.payments_made, 1);
        assert!(year.closing.is_paid_off());
        assert_abs_diff_eq!(year.principal_paid, 500.0, epsilon = 1e-9);
        assert_abs_diff_eq!(year.interest_paid, 2.5, epsilon = 1e-9);
    }

    #[test]
    fn test_tiny_principal_starts_paid_off() {
        assert!(LoanState::new(0.0).is_paid_off());
        assert!(LoanState::new(1e-7).is_paid_off());
        assert_eq!(LoanState::new(0.0).balance(), 0.0);
    }
}
