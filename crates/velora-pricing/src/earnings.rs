//! Creator earnings from credit prices.
//!
//! A credit has a fixed dollar value. On every paid interaction the value
//! splits between the creator and the platform; the creator's share is what
//! the settings screens display next to each rate. All arithmetic is in
//! integer micro-USD with the division remainder awarded to the creator.

use velora_types::{Credits, MicroUsd};

use crate::policy::PricingPolicy;
use crate::{PricingError, Result};

/// Gross dollar value of a credit price, in micro-USD.
///
/// # Errors
///
/// [`PricingError::Overflow`] if the multiplication overflows.
pub fn credit_value_micro_usd(policy: &PricingPolicy, credits: Credits) -> Result<MicroUsd> {
    credits
        .checked_mul(policy.micro_usd_per_credit)
        .ok_or(PricingError::Overflow)
}

/// Split a credit price's dollar value into `(creator, platform)` micro-USD.
///
/// The platform share is computed by truncating division; the creator is
/// awarded the remainder, so the two always sum to the gross value.
pub fn split_credit_value(
    policy: &PricingPolicy,
    credits: Credits,
) -> Result<(MicroUsd, MicroUsd)> {
    let gross = credit_value_micro_usd(policy, credits)?;
    let platform = gross
        .checked_mul(policy.platform_share_pct() as u64)
        .ok_or(PricingError::Overflow)?
        / 100;
    let creator = gross - platform;
    Ok((creator, platform))
}

/// The creator's dollar earning for a credit price, in micro-USD.
pub fn creator_earnings_micro_usd(policy: &PricingPolicy, credits: Credits) -> Result<MicroUsd> {
    Ok(split_credit_value(policy, credits)?.0)
}

/// Format a micro-USD amount as a display currency string, truncated to
/// cents (e.g. `"$35.00"`).
pub fn format_usd(micro_usd: MicroUsd) -> String {
    let cents = micro_usd / 10_000;
    format!("${}.{:02}", cents / 100, cents % 100)
}

/// The formatted creator earning for a credit price.
pub fn format_creator_earnings(policy: &PricingPolicy, credits: Credits) -> Result<String> {
    Ok(format_usd(creator_earnings_micro_usd(policy, credits)?))
}
