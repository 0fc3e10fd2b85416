use super::*;
use chrono::TimeZone;

fn at(secs: i64) -> DateTime<Utc> {
    Utc.timestamp_opt(secs, 0).single().unwrap()
}

#[test]
fn test_generated_ids_are_timestamp_prefixed_and_distinct() {
    let now = at(1_700_000_000);
    let a = EntityId::generate(now);
    let b = EntityId::generate(now);

    let prefix = now.timestamp_millis().to_string();
    assert!(a.as_str().starts_with(&prefix));
    assert_eq!(a.as_str().len(), prefix.len() + ID_SUFFIX_LEN);
    assert!(a.as_str()[prefix.len()..]
        .bytes()
        .all(|b| ID_ALPHABET.contains(&b)));
    assert_ne!(a, b);
}

#[test]
fn test_default_titles() {
    assert_eq!(Document::default_title(0), "Документ 1");
    assert_eq!(Document::default_title(4), "Документ 5");
    assert_eq!(TextBlock::default_title(0), "Блок 1");
    assert_eq!(TextBlock::default_title(2), "Блок 3");
}

#[test]
fn test_advance_timestamp_is_strictly_increasing() {
    let mut updated = at(100);
    advance_timestamp(&mut updated, at(200));
    assert_eq!(updated, at(200));

    advance_timestamp(&mut updated, at(200));
    assert!(updated > at(200));

    let before = updated;
    advance_timestamp(&mut updated, at(50));
    assert!(updated > before);
}

#[test]
fn test_document_serializes_camel_case_iso_timestamps() {
    let mut doc = Document::new("Документ 1", at(1_700_000_000));
    doc.id = EntityId::from("doc1");
    let json = serde_json::to_value(&doc).unwrap();

    assert_eq!(json["id"], "doc1");
    assert_eq!(json["createdAt"], "2023-11-14T22:13:20Z");
    assert_eq!(json["updatedAt"], "2023-11-14T22:13:20Z");
    assert_eq!(json["content"], DEFAULT_DOCUMENT_CONTENT);

    let back: Document = serde_json::from_value(json).unwrap();
    assert_eq!(back, doc);
}

#[test]
fn test_block_without_updated_at_falls_back_to_created_at() {
    let json = r#"{
        "id": "b1",
        "title": "Блок 1",
        "content": "<p>x</p>",
        "documentId": "d1",
        "createdAt": "2024-01-02T03:04:05.000Z"
    }"#;
    let block: TextBlock = serde_json::from_str(json).unwrap();

    assert_eq!(block.document_id, EntityId::from("d1"));
    assert_eq!(block.updated_at, block.created_at);
}

#[test]
fn test_block_serializes_document_id_field() {
    let block = TextBlock::new(EntityId::from("d1"), "Блок 1", at(10));
    let json = serde_json::to_value(&block).unwrap();
    assert_eq!(json["documentId"], "d1");
    assert_eq!(json["content"], DEFAULT_BLOCK_CONTENT);
}

#[test]
fn test_entity_ref_kind() {
    let r = EntityRef::Block(EntityId::from("b"));
    assert_eq!(r.kind(), EntityKind::Block);
    assert_eq!(r.id().as_str(), "b");
}
