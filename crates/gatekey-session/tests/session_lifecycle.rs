//! Behavior tests for the session lifecycle, run against the in-process
//! store plus purpose-built doubles for the properties the real store can't
//! witness (call counts, injected failures).

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use gatekey_core::{SessionToken, UserId, UserRole};
use gatekey_db::{
    MemorySessionStore, MemoryUser, SessionRecord, SessionStore, SessionUserRow, StoreError,
};
use gatekey_session::{SessionError, SessionService, SESSION_LIFETIME_DAYS};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

fn user_u1() -> MemoryUser {
    MemoryUser {
        id: 7,
        email: "a@b.com".to_string(),
        first_name: "Ada".to_string(),
        last_name: "Byron".to_string(),
        role: "user".to_string(),
    }
}

fn seeded_service() -> SessionService<MemorySessionStore> {
    let store = MemorySessionStore::new();
    store.seed_user(user_u1());
    SessionService::new(store)
}

/// Store double that counts every call that reaches it.
struct CountingStore {
    inner: MemorySessionStore,
    calls: AtomicUsize,
}

impl CountingStore {
    fn new() -> Self {
        Self {
            inner: MemorySessionStore::new(),
            calls: AtomicUsize::new(0),
        }
    }

    fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SessionStore for CountingStore {
    async fn insert(&self, record: SessionRecord) -> Result<(), StoreError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.inner.insert(record).await
    }

    async fn find_user_for_live_session(
        &self,
        token: &str,
        now: DateTime<Utc>,
    ) -> Result<Option<SessionUserRow>, StoreError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.inner.find_user_for_live_session(token, now).await
    }

    async fn delete(&self, token: &str) -> Result<(), StoreError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.inner.delete(token).await
    }
}

/// Store double whose every operation fails, as an unreachable engine would.
struct UnreachableStore;

#[derive(Debug, thiserror::Error)]
#[error("engine unreachable")]
struct EngineUnreachable;

#[async_trait]
impl SessionStore for UnreachableStore {
    async fn insert(&self, _record: SessionRecord) -> Result<(), StoreError> {
        Err(StoreError::write(EngineUnreachable))
    }

    async fn find_user_for_live_session(
        &self,
        _token: &str,
        _now: DateTime<Utc>,
    ) -> Result<Option<SessionUserRow>, StoreError> {
        Err(StoreError::read(EngineUnreachable))
    }

    async fn delete(&self, _token: &str) -> Result<(), StoreError> {
        Err(StoreError::write(EngineUnreachable))
    }
}

#[tokio::test]
async fn fresh_session_resolves_to_owning_user() {
    let sessions = seeded_service();

    let issued = sessions.create_session(UserId::new(7)).await.unwrap();
    let user = sessions
        .get_session_user(Some(&issued.token))
        .await
        .unwrap()
        .expect("fresh session must resolve");

    assert_eq!(user.id, UserId::new(7));
    assert_eq!(user.email, "a@b.com");
    assert_eq!(user.first_name, "Ada");
    assert_eq!(user.last_name, "Byron");
    assert_eq!(user.role, UserRole::User);
}

#[tokio::test]
async fn issued_expiry_is_thirty_days_out() {
    let sessions = seeded_service();

    let before = Utc::now();
    let issued = sessions.create_session(UserId::new(7)).await.unwrap();
    let after = Utc::now();

    assert!(issued.expires_at >= before + Duration::days(SESSION_LIFETIME_DAYS));
    assert!(issued.expires_at <= after + Duration::days(SESSION_LIFETIME_DAYS));
}

#[tokio::test]
async fn issued_tokens_are_distinct() {
    let sessions = seeded_service();

    let a = sessions.create_session(UserId::new(7)).await.unwrap();
    let b = sessions.create_session(UserId::new(7)).await.unwrap();
    let c = sessions.create_session(UserId::new(7)).await.unwrap();

    assert_ne!(a.token, b.token);
    assert_ne!(b.token, c.token);
    assert_ne!(a.token, c.token);
}

#[tokio::test]
async fn expired_session_resolves_to_none() {
    let store = MemorySessionStore::new();
    store.seed_user(user_u1());
    store
        .insert(SessionRecord {
            id: "e".repeat(64),
            user_id: 7,
            expires_at: Utc::now() - Duration::seconds(1),
        })
        .await
        .unwrap();

    let sessions = SessionService::new(store);
    let token = SessionToken::new("e".repeat(64));

    assert!(sessions.get_session_user(Some(&token)).await.unwrap().is_none());
}

#[tokio::test]
async fn session_expiring_in_the_future_resolves() {
    let store = MemorySessionStore::new();
    store.seed_user(user_u1());
    store
        .insert(SessionRecord {
            id: "b".repeat(64),
            user_id: 7,
            expires_at: Utc::now() + Duration::seconds(1),
        })
        .await
        .unwrap();

    let sessions = SessionService::new(store);
    let token = SessionToken::new("b".repeat(64));

    assert!(sessions.get_session_user(Some(&token)).await.unwrap().is_some());
}

#[tokio::test]
async fn unknown_token_resolves_to_none() {
    let sessions = seeded_service();
    let token = SessionToken::new("0".repeat(64));

    assert!(sessions.get_session_user(Some(&token)).await.unwrap().is_none());
}

#[tokio::test]
async fn revoked_session_stays_gone_and_revocation_is_idempotent() {
    let sessions = seeded_service();
    let issued = sessions.create_session(UserId::new(7)).await.unwrap();

    sessions.delete_session(&issued.token).await.unwrap();
    assert!(sessions
        .get_session_user(Some(&issued.token))
        .await
        .unwrap()
        .is_none());

    // Deleting the now-absent token must not fail.
    sessions.delete_session(&issued.token).await.unwrap();
}

#[tokio::test]
async fn absent_token_short_circuits_without_store_access() {
    let store = Arc::new(CountingStore::new());
    let sessions = SessionService::new(Arc::clone(&store));

    let outcome = sessions.get_session_user(None).await.unwrap();
    assert!(outcome.is_none());
    assert_eq!(store.call_count(), 0);

    // A present token does reach the store, as a control.
    let token = SessionToken::new("0".repeat(64));
    sessions.get_session_user(Some(&token)).await.unwrap();
    assert_eq!(store.call_count(), 1);
}

#[tokio::test]
async fn out_of_set_role_surfaces_as_invalid_role() {
    let store = MemorySessionStore::new();
    store.seed_user(MemoryUser {
        role: "superadmin".to_string(),
        ..user_u1()
    });

    let sessions = SessionService::new(store);
    let issued = sessions.create_session(UserId::new(7)).await.unwrap();

    let err = sessions
        .get_session_user(Some(&issued.token))
        .await
        .unwrap_err();
    assert!(err.is_invalid_role());
}

#[tokio::test]
async fn orphaned_session_resolves_to_none() {
    let store = Arc::new(MemorySessionStore::new());
    store.seed_user(user_u1());

    let sessions = SessionService::new(Arc::clone(&store));
    let issued = sessions.create_session(UserId::new(7)).await.unwrap();

    store.remove_user(7);

    assert!(sessions
        .get_session_user(Some(&issued.token))
        .await
        .unwrap()
        .is_none());
}

#[tokio::test]
async fn store_failures_propagate_unmodified() {
    let sessions = SessionService::new(UnreachableStore);
    let token = SessionToken::new("0".repeat(64));

    let create_err = sessions.create_session(UserId::new(7)).await.unwrap_err();
    assert!(matches!(create_err, SessionError::Store(ref e) if e.is_write()));

    let resolve_err = sessions
        .get_session_user(Some(&token))
        .await
        .unwrap_err();
    assert!(matches!(resolve_err, SessionError::Store(ref e) if e.is_read()));

    let delete_err = sessions.delete_session(&token).await.unwrap_err();
    assert!(matches!(delete_err, SessionError::Store(ref e) if e.is_write()));
}

#[tokio::test]
async fn full_lifecycle_end_to_end() {
    let sessions = seeded_service();

    let issued = sessions.create_session(UserId::new(7)).await.unwrap();
    assert_eq!(issued.token.as_str().len(), 64);

    let user = sessions
        .get_session_user(Some(&issued.token))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(user.id, UserId::new(7));
    assert_eq!(user.email, "a@b.com");
    assert_eq!(user.role, UserRole::User);

    sessions.delete_session(&issued.token).await.unwrap();
    assert!(sessions
        .get_session_user(Some(&issued.token))
        .await
        .unwrap()
        .is_none());
}
