//! Persistent cache store tests against an in-memory SQLite database

use anuvad::domain::model::TranslationRequest;
use anuvad::infrastructure::storage::db;
use tokio_rusqlite::Connection;

async fn memory_db() -> Connection {
    let conn = Connection::open_in_memory().await.unwrap();
    db::apply_schema(&conn).await.unwrap();
    conn
}

#[tokio::test]
async fn test_lookup_miss_on_empty_db() {
    let conn = memory_db().await;
    let req = TranslationRequest::new("Properties", "mr");
    assert!(db::lookup(&conn, &req).await.unwrap().is_none());
}

#[tokio::test]
async fn test_upsert_then_lookup() {
    let conn = memory_db().await;
    let req = TranslationRequest::new("Properties", "mr");

    db::upsert(&conn, &req, "मालमत्ता", "gemini").await.unwrap();

    let entry = db::lookup(&conn, &req).await.unwrap().unwrap();
    assert_eq!(entry.translated_text, "मालमत्ता");
    assert_eq!(entry.provider, "gemini");
    assert_eq!(entry.hit_count, 1);
    assert_eq!(entry.context, None);
}

#[tokio::test]
async fn test_double_upsert_keeps_one_row_with_latest_text() {
    let conn = memory_db().await;
    let req = TranslationRequest::new("Search", "mr");

    db::upsert(&conn, &req, "first", "gemini").await.unwrap();
    db::upsert(&conn, &req, "second", "gemini-pro").await.unwrap();

    assert_eq!(db::count_entries(&conn).await.unwrap(), 1);
    let entry = db::lookup(&conn, &req).await.unwrap().unwrap();
    assert_eq!(entry.translated_text, "second");
    assert_eq!(entry.provider, "gemini-pro");
}

#[tokio::test]
async fn test_context_is_part_of_the_key() {
    let conn = memory_db().await;
    let plain = TranslationRequest::new("Book", "mr");
    let action = TranslationRequest::new("Book", "mr").with_context("action");

    db::upsert(&conn, &plain, "पुस्तक", "gemini").await.unwrap();
    db::upsert(&conn, &action, "बुक करा", "gemini").await.unwrap();

    assert_eq!(db::count_entries(&conn).await.unwrap(), 2);
    assert_eq!(
        db::lookup(&conn, &plain).await.unwrap().unwrap().translated_text,
        "पुस्तक"
    );
    assert_eq!(
        db::lookup(&conn, &action).await.unwrap().unwrap().translated_text,
        "बुक करा"
    );

    // Empty-string context is yet another distinct key component
    let empty = TranslationRequest::new("Book", "mr").with_context("");
    assert!(db::lookup(&conn, &empty).await.unwrap().is_none());
}

#[tokio::test]
async fn test_lookup_is_exact_match() {
    let conn = memory_db().await;
    let req = TranslationRequest::new("Properties", "mr");
    db::upsert(&conn, &req, "मालमत्ता", "gemini").await.unwrap();

    // No normalization: case and whitespace variants miss
    let lower = TranslationRequest::new("properties", "mr");
    let padded = TranslationRequest::new("Properties ", "mr");
    assert!(db::lookup(&conn, &lower).await.unwrap().is_none());
    assert!(db::lookup(&conn, &padded).await.unwrap().is_none());

    // Other target language misses
    let hindi = TranslationRequest::new("Properties", "hi");
    assert!(db::lookup(&conn, &hindi).await.unwrap().is_none());
}

#[tokio::test]
async fn test_record_hit_increments_count() {
    let conn = memory_db().await;
    let req = TranslationRequest::new("Price", "mr");
    db::upsert(&conn, &req, "किंमत", "gemini").await.unwrap();

    let entry = db::lookup(&conn, &req).await.unwrap().unwrap();
    db::record_hit(&conn, entry.id).await.unwrap();
    db::record_hit(&conn, entry.id).await.unwrap();

    let entry = db::lookup(&conn, &req).await.unwrap().unwrap();
    assert_eq!(entry.hit_count, 3);
    assert!(entry.last_accessed >= entry.created_at);
}

#[tokio::test]
async fn test_top_entries_orders_by_hits() {
    let conn = memory_db().await;
    let a = TranslationRequest::new("Home", "mr");
    let b = TranslationRequest::new("Search", "mr");
    db::upsert(&conn, &a, "मुख्यपृष्ठ", "gemini").await.unwrap();
    db::upsert(&conn, &b, "शोधा", "gemini").await.unwrap();

    let entry_b = db::lookup(&conn, &b).await.unwrap().unwrap();
    db::record_hit(&conn, entry_b.id).await.unwrap();

    let top = db::top_entries(&conn, 5).await.unwrap();
    assert_eq!(top.len(), 2);
    assert_eq!(top[0].0, "Search");
    assert_eq!(top[0].2, 2);
}
