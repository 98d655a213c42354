use super::*;

// =============================================================================
// bytes_to_hex
// =============================================================================

#[test]
fn bytes_to_hex_empty() {
    assert_eq!(bytes_to_hex(&[]), "");
}

#[test]
fn bytes_to_hex_leading_zero() {
    assert_eq!(bytes_to_hex(&[0x0a]), "0a");
}

#[test]
fn bytes_to_hex_multi_byte() {
    assert_eq!(bytes_to_hex(&[0xde, 0xad, 0xbe, 0xef]), "deadbeef");
}

// =============================================================================
// generate_token / token_digest
// =============================================================================

#[test]
fn generate_token_is_64_hex_chars() {
    let token = generate_token();
    assert_eq!(token.len(), 64);
    assert!(token.chars().all(|c| c.is_ascii_hexdigit()));
}

#[test]
fn generate_token_two_calls_differ() {
    assert_ne!(generate_token(), generate_token());
}

#[test]
fn token_digest_is_sha256() {
    assert_eq!(
        bytes_to_hex(&token_digest("abc")),
        "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
    );
}

// =============================================================================
// SessionStore
// =============================================================================

#[tokio::test]
async fn created_session_validates() {
    let store = SessionStore::new();
    let token = store.create().await;
    assert!(store.validate(&token).await);
    assert_eq!(store.count().await, 1);
}

#[tokio::test]
async fn unknown_or_empty_token_is_invalid() {
    let store = SessionStore::new();
    let _ = store.create().await;
    assert!(!store.validate("").await);
    assert!(!store.validate(&generate_token()).await);
}

#[tokio::test]
async fn revoke_removes_session() {
    let store = SessionStore::new();
    let token = store.create().await;
    assert!(store.revoke(&token).await);
    assert!(!store.validate(&token).await);
    assert!(!store.revoke(&token).await);
}

#[tokio::test]
async fn session_expires_after_ttl() {
    let store = SessionStore::new();
    let now = OffsetDateTime::now_utc();
    let token = store.create_at(now).await;
    assert!(store.validate_at(&token, now + SESSION_TTL - Duration::seconds(1)).await);
    assert!(!store.validate_at(&token, now + SESSION_TTL).await);
}

#[tokio::test]
async fn create_prunes_expired_sessions() {
    let store = SessionStore::new();
    let now = OffsetDateTime::now_utc();
    let _ = store.create_at(now).await;
    let _ = store.create_at(now + SESSION_TTL + Duration::seconds(1)).await;
    assert_eq!(store.count().await, 1);
}

#[tokio::test]
async fn clones_share_sessions() {
    let store = SessionStore::new();
    let other = store.clone();
    let token = store.create().await;
    assert!(other.validate(&token).await);
}
