//! SQL schema definitions.

/// Complete schema for the Velora v1 database.
pub const SCHEMA_V1: &str = r#"
-- ============================================================
-- Earner profiles & rates
-- ============================================================

CREATE TABLE IF NOT EXISTS earner_profiles (
    profile_id BLOB PRIMARY KEY,
    display_name TEXT NOT NULL,
    availability TEXT NOT NULL DEFAULT 'offline',
    video_15min_rate INTEGER NOT NULL DEFAULT 200,
    video_30min_rate INTEGER NOT NULL DEFAULT 300,
    video_60min_rate INTEGER NOT NULL DEFAULT 500,
    video_90min_rate INTEGER NOT NULL DEFAULT 700,
    created_at INTEGER NOT NULL,
    updated_at INTEGER NOT NULL
);

-- Audit trail: one row per rate save, old and new vectors together.
CREATE TABLE IF NOT EXISTS rate_change_log (
    change_id INTEGER PRIMARY KEY AUTOINCREMENT,
    profile_id BLOB NOT NULL REFERENCES earner_profiles(profile_id) ON DELETE CASCADE,
    old_15 INTEGER NOT NULL,
    old_30 INTEGER NOT NULL,
    old_60 INTEGER NOT NULL,
    old_90 INTEGER NOT NULL,
    new_15 INTEGER NOT NULL,
    new_30 INTEGER NOT NULL,
    new_60 INTEGER NOT NULL,
    new_90 INTEGER NOT NULL,
    changed_at INTEGER NOT NULL
);

CREATE INDEX IF NOT EXISTS idx_rate_log_profile ON rate_change_log(profile_id);

-- ============================================================
-- Earnings ledger
-- ============================================================

CREATE TABLE IF NOT EXISTS credit_transactions (
    tx_id BLOB PRIMARY KEY,
    profile_id BLOB NOT NULL REFERENCES earner_profiles(profile_id) ON DELETE CASCADE,
    kind TEXT NOT NULL,
    credits INTEGER NOT NULL,
    creator_micro_usd INTEGER NOT NULL,
    counterparty TEXT,
    day INTEGER NOT NULL,
    timestamp INTEGER NOT NULL
);

CREATE INDEX IF NOT EXISTS idx_tx_profile ON credit_transactions(profile_id);
CREATE INDEX IF NOT EXISTS idx_tx_day ON credit_transactions(profile_id, day);

-- ============================================================
-- Settings & Misc
-- ============================================================

CREATE TABLE IF NOT EXISTS settings (
    key TEXT PRIMARY KEY,
    value TEXT NOT NULL
);
"#;
