use super::*;

fn user(name: &str) -> SessionUser {
    SessionUser { id: format!("id-{name}"), name: name.to_owned(), email: None }
}

#[test]
fn bytes_to_hex_pads_each_byte() {
    assert_eq!(bytes_to_hex(&[0x00, 0x0f, 0xab]), "000fab");
}

#[test]
fn generate_token_is_64_hex_chars_and_unique() {
    let a = generate_token();
    let b = generate_token();
    assert_eq!(a.len(), 64);
    assert!(a.chars().all(|c| c.is_ascii_hexdigit()));
    assert_ne!(a, b);
}

#[tokio::test]
async fn create_then_get_returns_user() {
    let store = SessionStore::new();
    let token = store.create(user("alice")).await;
    assert_eq!(store.get(&token).await, Some(user("alice")));
}

#[tokio::test]
async fn get_unknown_token_is_none() {
    let store = SessionStore::new();
    assert_eq!(store.get("nope").await, None);
}

#[tokio::test]
async fn remove_deletes_once() {
    let store = SessionStore::new();
    let token = store.create(user("bob")).await;
    assert!(store.remove(&token).await);
    assert!(!store.remove(&token).await);
    assert_eq!(store.get(&token).await, None);
}

#[tokio::test]
async fn clones_share_the_table() {
    let store = SessionStore::new();
    let other = store.clone();
    let token = other.create(user("carol")).await;
    assert!(store.get(&token).await.is_some());
}
