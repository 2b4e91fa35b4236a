use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MortgageTerms {
    pub down_payment: f64,
    /// Annual interest rate in percent, e.g. `6.5`.
    #[serde(rename = "rate")]
    pub annual_rate_pct: f64,
    #[serde(rename = "years")]
    pub term_years: u32,
}

/// Whole-currency-unit figures for a fixed-rate loan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MortgageEstimate {
    pub monthly_payment: i64,
    pub total_payment: i64,
    pub total_interest: i64,
}

/// Longest loan term accepted, in years.
pub const MAX_TERM_YEARS: u32 = 50;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MortgageError {
    #[error("down payment must be between 0 and the listing price")]
    DownPayment,
    #[error("interest rate must be a non-negative percentage")]
    Rate,
    #[error("loan term must be between 1 and {} years", MAX_TERM_YEARS)]
    Term,
}

pub fn estimate(price: f64, terms: MortgageTerms) -> Result<MortgageEstimate, MortgageError> {
    let MortgageTerms {
        down_payment,
        annual_rate_pct,
        term_years,
    } = terms;

    if !down_payment.is_finite() || down_payment < 0.0 || down_payment > price {
        return Err(MortgageError::DownPayment);
    }
    if !annual_rate_pct.is_finite() || annual_rate_pct < 0.0 {
        return Err(MortgageError::Rate);
    }
    if term_years == 0 || term_years > MAX_TERM_YEARS {
        return Err(MortgageError::Term);
    }

    let principal = price - down_payment;
    let payments = f64::from(term_years) * 12.0;
    let monthly_rate = annual_rate_pct / 100.0 / 12.0;

    let monthly = if monthly_rate == 0.0 {
        principal / payments
    } else {
        let growth = (1.0 + monthly_rate).powf(payments);
        principal * monthly_rate * growth / (growth - 1.0)
    };
    let total = monthly * payments + down_payment;

    Ok(MortgageEstimate {
        monthly_payment: monthly.round() as i64,
        total_payment: total.round() as i64,
        total_interest: (total - price).round() as i64,
    })
}
