use crate::domain::error::AnuvadError;
use crate::domain::model::{CacheEntry, TranslationRequest};
use std::path::Path;
use tokio_rusqlite::Connection;

pub async fn init_database(db_path: &Path) -> Result<Connection, AnuvadError> {
    let db = Connection::open(db_path.to_path_buf()).await?;
    apply_schema(&db).await?;
    Ok(db)
}

/// Create the translations table. The (source_text, source_lang,
/// target_lang, context) tuple is unique; uniqueness is enforced by the
/// select-then-write in `upsert` rather than a unique index, because a
/// NULL context must collide with a later NULL context.
pub async fn apply_schema(db: &Connection) -> Result<(), AnuvadError> {
    db.call(|conn| {
        conn.execute(
            "CREATE TABLE IF NOT EXISTS translations (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                source_text TEXT NOT NULL,
                source_lang TEXT NOT NULL,
                target_lang TEXT NOT NULL,
                context TEXT,
                translated_text TEXT NOT NULL,
                provider TEXT NOT NULL,
                hit_count INTEGER NOT NULL DEFAULT 1,
                created_at INTEGER NOT NULL,
                last_accessed INTEGER NOT NULL
            )",
            [],
        )?;

        conn.execute(
            "CREATE INDEX IF NOT EXISTS idx_translations_tuple
             ON translations(source_text, source_lang, target_lang)",
            [],
        )?;

        Ok(())
    })
    .await?;

    Ok(())
}

/// Exact-match lookup on the full cache tuple. `context IS ?` so that a
/// NULL context matches only rows stored without context.
pub async fn lookup(
    db: &Connection,
    request: &TranslationRequest,
) -> Result<Option<CacheEntry>, AnuvadError> {
    use rusqlite::OptionalExtension;
    use tokio_rusqlite::params;

    let req = request.clone();
    let entry = db
        .call(move |conn| {
            let row = conn
                .query_row(
                    "SELECT id, source_text, source_lang, target_lang, context,
                            translated_text, provider, hit_count, created_at, last_accessed
                     FROM translations
                     WHERE source_text = ? AND source_lang = ? AND target_lang = ?
                       AND context IS ?",
                    params![req.text, req.source_lang, req.target_lang, req.context],
                    |row| {
                        Ok(CacheEntry {
                            id: row.get(0)?,
                            source_text: row.get(1)?,
                            source_lang: row.get(2)?,
                            target_lang: row.get(3)?,
                            context: row.get(4)?,
                            translated_text: row.get(5)?,
                            provider: row.get(6)?,
                            hit_count: row.get(7)?,
                            created_at: row.get(8)?,
                            last_accessed: row.get(9)?,
                        })
                    },
                )
                .optional()?;
            Ok(row)
        })
        .await?;

    Ok(entry)
}

/// Hit-count bookkeeping for a cache hit. Callers treat failure as
/// non-fatal.
pub async fn record_hit(db: &Connection, id: i64) -> Result<(), AnuvadError> {
    use tokio_rusqlite::params;

    let now = chrono::Utc::now().timestamp();
    db.call(move |conn| {
        conn.execute(
            "UPDATE translations SET hit_count = hit_count + 1, last_accessed = ? WHERE id = ?",
            params![now, id],
        )?;
        Ok(())
    })
    .await?;

    Ok(())
}

/// Insert-or-update on the unique cache tuple. A fresh row starts with
/// hit_count = 1; an existing row keeps its count and gets the latest
/// translated text and provider.
pub async fn upsert(
    db: &Connection,
    request: &TranslationRequest,
    translated: &str,
    provider: &str,
) -> Result<(), AnuvadError> {
    use rusqlite::OptionalExtension;
    use tokio_rusqlite::params;

    let req = request.clone();
    let translated = translated.to_string();
    let provider = provider.to_string();
    let now = chrono::Utc::now().timestamp();

    db.call(move |conn| {
        let existing: Option<i64> = conn
            .query_row(
                "SELECT id FROM translations
                 WHERE source_text = ? AND source_lang = ? AND target_lang = ?
                   AND context IS ?",
                params![req.text, req.source_lang, req.target_lang, req.context],
                |row| row.get(0),
            )
            .optional()?;

        match existing {
            Some(id) => {
                conn.execute(
                    "UPDATE translations
                     SET translated_text = ?, provider = ?, last_accessed = ?
                     WHERE id = ?",
                    params![translated, provider, now, id],
                )?;
            }
            None => {
                conn.execute(
                    "INSERT INTO translations
                     (source_text, source_lang, target_lang, context,
                      translated_text, provider, hit_count, created_at, last_accessed)
                     VALUES (?, ?, ?, ?, ?, ?, 1, ?, ?)",
                    params![
                        req.text,
                        req.source_lang,
                        req.target_lang,
                        req.context,
                        translated,
                        provider,
                        now,
                        now
                    ],
                )?;
            }
        }

        Ok(())
    })
    .await?;

    Ok(())
}

pub async fn count_entries(db: &Connection) -> Result<usize, AnuvadError> {
    let count: i64 = db
        .call(|conn| {
            let n = conn.query_row("SELECT COUNT(*) FROM translations", [], |row| row.get(0))?;
            Ok(n)
        })
        .await?;

    Ok(count as usize)
}

/// Most-hit cache entries, for the status surface.
pub async fn top_entries(
    db: &Connection,
    limit: usize,
) -> Result<Vec<(String, String, i64)>, AnuvadError> {
    use tokio_rusqlite::params;

    let rows = db
        .call(move |conn| {
            let mut stmt = conn.prepare(
                "SELECT source_text, translated_text, hit_count
                 FROM translations
                 ORDER BY hit_count DESC, last_accessed DESC
                 LIMIT ?",
            )?;
            let rows = stmt
                .query_map(params![limit as i64], |row| {
                    Ok((row.get(0)?, row.get(1)?, row.get(2)?))
                })?
                .collect::<Result<Vec<_>, _>>()?;
            Ok(rows)
        })
        .await?;

    Ok(rows)
}
