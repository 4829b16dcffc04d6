//! Financial building blocks: sale proceeds, loan amortization, discounting

mod proceeds;
mod amortization;
mod discount;

pub use proceeds::SaleProceeds;
pub use amortization::{
    level_payment, AmortizationSchedule, LoanState, LoanYear, MonthlyPayment, PAYOFF_EPSILON,
};
pub use discount::{discount_factor, npv};
