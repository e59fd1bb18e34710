//! Integration test: economic correctness of the earnings ledger.
//!
//! Exercises the earning lifecycle:
//! 1. Create an earner profile and set its rates
//! 2. Record paid calls at the profile's video and derived audio prices
//! 3. Verify the creator share stored with each row matches the split
//! 4. Verify the summary aggregates and buckets by accounting day
//!
//! This test uses velora-pricing (earnings, derivation), velora-db
//! (profiles, transactions), and velora-types.

use velora_db::queries::{profiles, transactions};
use velora_pricing::derive::derive_audio_rate;
use velora_pricing::earnings::{creator_earnings_micro_usd, credit_value_micro_usd};
use velora_pricing::policy::DEFAULT_POLICY;
use velora_types::calls::CallDuration;
use velora_types::economy::{CreditTransaction, TxKind};
use velora_types::profile::EarnerProfile;

/// Base timestamp for test scenarios.
const BASE_TIME: u64 = 1_700_000_000;

const PROFILE_ID: [u8; 16] = [7u8; 16];

fn setup(conn: &rusqlite::Connection) -> EarnerProfile {
    let profile = EarnerProfile::new(PROFILE_ID, "Mara", BASE_TIME);
    profiles::insert_profile(conn, &profile).expect("profile insertion should succeed");
    profile
}

/// Helper: record a paid call, pricing the creator share through the
/// earnings calculator.
fn record_call(
    conn: &rusqlite::Connection,
    tx_id: u8,
    kind: TxKind,
    credits: u64,
    day: u64,
) -> CreditTransaction {
    let tx = CreditTransaction {
        tx_id: [tx_id; 16],
        profile_id: PROFILE_ID,
        kind,
        credits,
        creator_micro_usd: creator_earnings_micro_usd(&DEFAULT_POLICY, credits)
            .expect("earnings calculation should succeed"),
        counterparty: Some("seeker-01".to_string()),
        day,
        timestamp: BASE_TIME + u64::from(tx_id) * 100,
    };
    transactions::record(conn, &tx).expect("transaction recording should succeed");
    tx
}

#[test]
fn creator_share_matches_split_exactly() {
    let conn = velora_db::open_memory().expect("open DB");
    let profile = setup(&conn);

    // A 60-minute video call at the profile's stored rate.
    let video_rate = profile.rates.rate(CallDuration::Min60);
    let tx = record_call(&conn, 1, TxKind::VideoCall, video_rate, 100);

    // 500 credits = $50.00 gross, $35.00 creator, $15.00 platform.
    let gross = credit_value_micro_usd(&DEFAULT_POLICY, video_rate).expect("gross");
    assert_eq!(gross, 50_000_000);
    assert_eq!(tx.creator_micro_usd, 35_000_000);

    // The derived audio price earns 70% of its own credit value.
    let audio_rate = derive_audio_rate(&DEFAULT_POLICY, video_rate);
    let audio_tx = record_call(&conn, 2, TxKind::AudioCall, audio_rate, 100);
    assert_eq!(audio_rate, 350);
    assert_eq!(audio_tx.creator_micro_usd, 24_500_000);

    // Both rows round-trip through the ledger.
    let history = transactions::recent(&conn, &PROFILE_ID, 10).expect("history");
    assert_eq!(history.len(), 2);
    assert_eq!(history[0].kind, TxKind::AudioCall);
    assert_eq!(history[1].creator_micro_usd, 35_000_000);
}

#[test]
fn summary_aggregates_and_buckets_by_day() {
    let conn = velora_db::open_memory().expect("open DB");
    setup(&conn);

    // Yesterday: one video call. Today: an audio call and a gift.
    record_call(&conn, 1, TxKind::VideoCall, 500, 99);
    record_call(&conn, 2, TxKind::AudioCall, 350, 100);
    record_call(&conn, 3, TxKind::Gift, 150, 100);

    let summary = transactions::earnings_summary(&conn, &PROFILE_ID, 100).expect("summary");
    assert_eq!(summary.credits_all_time, 1000);
    assert_eq!(summary.credits_today, 500);

    // Creator micro-USD: 70% of $0.10/credit across the ledger.
    assert_eq!(summary.creator_micro_usd_all_time, 70_000_000);
    assert_eq!(summary.creator_micro_usd_today, 35_000_000);

    // A different profile sees nothing.
    let other = EarnerProfile::new([9u8; 16], "Iris", BASE_TIME);
    profiles::insert_profile(&conn, &other).expect("insert");
    let empty = transactions::earnings_summary(&conn, &[9u8; 16], 100).expect("summary");
    assert_eq!(empty.credits_all_time, 0);
}
