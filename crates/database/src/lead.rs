//! Lead persistence operations.

use chrono::{SecondsFormat, Utc};
use sqlx::SqlitePool;

use crate::error::{DatabaseError, Result};
use crate::models::Lead;

/// Insert a captured lead and return its assigned id.
///
/// The timestamp is generated here, at persistence time, not at
/// conversation time. Not idempotent: two calls with identical arguments
/// insert two distinct rows.
pub async fn save_lead(
    pool: &SqlitePool,
    conv_id: &str,
    name: Option<&str>,
    email: Option<&str>,
) -> Result<i64> {
    let ts = Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true);

    let result = sqlx::query(
        r#"
        INSERT INTO leads (conv_id, name, email, ts)
        VALUES (?, ?, ?, ?)
        "#,
    )
    .bind(conv_id)
    .bind(name)
    .bind(email)
    .bind(&ts)
    .execute(pool)
    .await?;

    Ok(result.last_insert_rowid())
}

/// Get a lead by id.
pub async fn get_lead(pool: &SqlitePool, id: i64) -> Result<Lead> {
    sqlx::query_as::<_, Lead>(
        r#"
        SELECT id, conv_id, name, email, ts
        FROM leads
        WHERE id = ?
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?
    .ok_or_else(|| DatabaseError::NotFound {
        entity: "Lead",
        id: id.to_string(),
    })
}

/// List all leads, most recent first.
///
/// Rows with a null timestamp (written before the ts migration) sort last.
pub async fn list_leads(pool: &SqlitePool) -> Result<Vec<Lead>> {
    let leads = sqlx::query_as::<_, Lead>(
        r#"
        SELECT id, conv_id, name, email, ts
        FROM leads
        ORDER BY ts DESC
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(leads)
}

/// Count total leads.
pub async fn count_leads(pool: &SqlitePool) -> Result<i64> {
    let count = sqlx::query_scalar::<_, i64>(
        r#"
        SELECT COUNT(*) FROM leads
        "#,
    )
    .fetch_one(pool)
    .await?;

    Ok(count)
}

/// List leads captured within an inclusive ISO-8601 timestamp range,
/// most recent first.
pub async fn list_leads_between(pool: &SqlitePool, start: &str, end: &str) -> Result<Vec<Lead>> {
    let leads = sqlx::query_as::<_, Lead>(
        r#"
        SELECT id, conv_id, name, email, ts
        FROM leads
        WHERE ts BETWEEN ? AND ?
        ORDER BY ts DESC
        "#,
    )
    .bind(start)
    .bind(end)
    .fetch_all(pool)
    .await?;

    Ok(leads)
}
