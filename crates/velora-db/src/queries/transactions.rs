//! Earnings ledger query functions.

use rusqlite::Connection;

use velora_types::economy::{CreditTransaction, EarningsSummary, TxKind};
use velora_types::ProfileId;

use crate::{DbError, Result};

/// Record a transaction in the ledger.
pub fn record(conn: &Connection, tx: &CreditTransaction) -> Result<()> {
    conn.execute(
        "INSERT INTO credit_transactions
             (tx_id, profile_id, kind, credits, creator_micro_usd,
              counterparty, day, timestamp)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
        rusqlite::params![
            tx.tx_id.as_slice(),
            tx.profile_id.as_slice(),
            tx.kind.as_str(),
            tx.credits as i64,
            tx.creator_micro_usd as i64,
            tx.counterparty,
            tx.day as i64,
            tx.timestamp as i64,
        ],
    )?;
    Ok(())
}

/// List a profile's most recent transactions.
pub fn recent(conn: &Connection, profile_id: &ProfileId, limit: u32) -> Result<Vec<CreditTransaction>> {
    let mut stmt = conn.prepare(
        "SELECT tx_id, profile_id, kind, credits, creator_micro_usd,
                counterparty, day, timestamp
         FROM credit_transactions
         WHERE profile_id = ?1
         ORDER BY timestamp DESC LIMIT ?2",
    )?;

    let rows = stmt
        .query_map(
            rusqlite::params![profile_id.as_slice(), limit],
            |row| {
                Ok((
                    row.get::<_, Vec<u8>>(0)?,
                    row.get::<_, Vec<u8>>(1)?,
                    row.get::<_, String>(2)?,
                    row.get::<_, i64>(3)?,
                    row.get::<_, i64>(4)?,
                    row.get::<_, Option<String>>(5)?,
                    row.get::<_, i64>(6)?,
                    row.get::<_, i64>(7)?,
                ))
            },
        )?
        .collect::<std::result::Result<Vec<_>, _>>()?;

    rows.into_iter()
        .map(|(tx_id, profile_id, kind, credits, micro, counterparty, day, timestamp)| {
            Ok(CreditTransaction {
                tx_id: tx_id
                    .try_into()
                    .map_err(|_| DbError::Serialization("tx_id is not 16 bytes".to_string()))?,
                profile_id: profile_id
                    .try_into()
                    .map_err(|_| DbError::Serialization("profile_id is not 16 bytes".to_string()))?,
                kind: TxKind::parse(&kind).map_err(|e| DbError::Serialization(e.to_string()))?,
                credits: credits as u64,
                creator_micro_usd: micro as u64,
                counterparty,
                day: day as u64,
                timestamp: timestamp as u64,
            })
        })
        .collect()
}

/// Aggregate a profile's earnings, all-time and for the given accounting day.
pub fn earnings_summary(
    conn: &Connection,
    profile_id: &ProfileId,
    today: u64,
) -> Result<EarningsSummary> {
    conn.query_row(
        "SELECT COALESCE(SUM(credits), 0),
                COALESCE(SUM(CASE WHEN day = ?2 THEN credits ELSE 0 END), 0),
                COALESCE(SUM(creator_micro_usd), 0),
                COALESCE(SUM(CASE WHEN day = ?2 THEN creator_micro_usd ELSE 0 END), 0)
         FROM credit_transactions WHERE profile_id = ?1",
        rusqlite::params![profile_id.as_slice(), today as i64],
        |row| {
            Ok(EarningsSummary {
                credits_all_time: row.get::<_, i64>(0)? as u64,
                credits_today: row.get::<_, i64>(1)? as u64,
                creator_micro_usd_all_time: row.get::<_, i64>(2)? as u64,
                creator_micro_usd_today: row.get::<_, i64>(3)? as u64,
            })
        },
    )
    .map_err(DbError::Sqlite)
}
