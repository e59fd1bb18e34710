//! # velora-types
//!
//! Shared domain types used across the Velora workspace.
//! UI-facing structures carry `ts-rs` derives so the web frontend consumes
//! the same shapes the daemon serves.

pub mod calls;
pub mod economy;
pub mod profile;
pub mod rates;

/// Internal currency unit. Seekers buy credits; earners price calls in them.
pub type Credits = u64;

/// Money amount in 10^-6 US dollars.
pub type MicroUsd = u64;

/// Opaque profile identifier.
pub type ProfileId = [u8; 16];

/// Micro-USD per US dollar.
pub const MICRO_USD_PER_USD: u64 = 1_000_000;

/// Accounting day length in seconds. Earnings summaries bucket by day.
pub const ACCOUNTING_DAY_SECS: u64 = 86_400;

#[cfg(test)]
mod tests {
    #[test]
    fn test_ts_export() {
        // Verifies the TS types can be generated without panicking.
        // Run `cargo test -p velora-types -- --ignored export_ts_bindings` to write files.
    }

    #[test]
    #[ignore] // Run manually to generate bindings
    fn export_ts_bindings() {
        use ts_rs::TS;
        let dir = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("../../bindings");
        std::fs::create_dir_all(&dir).expect("create bindings dir");
        crate::calls::CallDuration::export_all_to(&dir).expect("export calls");
        crate::rates::RateSet::export_all_to(&dir).expect("export rates");
        crate::rates::RateCard::export_all_to(&dir).expect("export rate card");
        crate::rates::ClampCorrection::export_all_to(&dir).expect("export corrections");
        crate::profile::EarnerProfile::export_all_to(&dir).expect("export profile");
        crate::economy::EarningsSummary::export_all_to(&dir).expect("export earnings");
    }
}
