//! Integration tests for the session-token lifecycle at the repository
//! level:
//! - issuance and the validation join
//! - expiry and deactivated-user cutoff
//! - idempotent deletion and the lazy prune

use chrono::{Duration, Utc};
use sqlx::PgPool;

use fieldtrack_db::models::session::CreateSession;
use fieldtrack_db::models::user::{CreateUser, User};
use fieldtrack_db::repositories::{SessionRepo, UserRepo};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

async fn seed_user(pool: &PgPool, username: &str) -> User {
    let input = CreateUser {
        username: username.to_string(),
        email: format!("{username}@example.com"),
        role: "engineer".to_string(),
        profile_name: format!("{username} profile"),
        password_hash: "0".repeat(64),
    };
    UserRepo::create(pool, &input).await.unwrap()
}

fn session_for(user_id: i64, token: &str, ttl: Duration) -> CreateSession {
    CreateSession {
        user_id,
        session_token: token.to_string(),
        expires_at: Utc::now() + ttl,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_and_resolve_session(pool: PgPool) {
    let user = seed_user(&pool, "alice").await;
    let token = "a".repeat(64);

    let session = SessionRepo::create(&pool, &session_for(user.id, &token, Duration::hours(24)))
        .await
        .unwrap();
    assert_eq!(session.user_id, user.id);
    assert_eq!(session.session_token, token);
    assert!(session.expires_at > session.issued_at);

    let context = SessionRepo::find_user_context(&pool, &token)
        .await
        .unwrap()
        .expect("live session must resolve");
    assert_eq!(context.user_id, user.id);
    assert_eq!(context.username, "alice");
    assert_eq!(context.role, "engineer");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_expired_session_does_not_resolve(pool: PgPool) {
    let user = seed_user(&pool, "late").await;
    let token = "b".repeat(64);
    SessionRepo::create(&pool, &session_for(user.id, &token, Duration::seconds(-1)))
        .await
        .unwrap();

    let context = SessionRepo::find_user_context(&pool, &token).await.unwrap();
    assert!(context.is_none());

    // The raw row is still there until pruned.
    assert!(SessionRepo::find_by_token(&pool, &token).await.unwrap().is_some());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_deactivated_user_cuts_off_sessions(pool: PgPool) {
    let user = seed_user(&pool, "leaver").await;
    let token = "c".repeat(64);
    SessionRepo::create(&pool, &session_for(user.id, &token, Duration::hours(1)))
        .await
        .unwrap();

    sqlx::query("UPDATE users SET is_active = false WHERE id = $1")
        .bind(user.id)
        .execute(&pool)
        .await
        .unwrap();

    let context = SessionRepo::find_user_context(&pool, &token).await.unwrap();
    assert!(context.is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_delete_by_token_is_idempotent(pool: PgPool) {
    let user = seed_user(&pool, "gone").await;
    let token = "d".repeat(64);
    SessionRepo::create(&pool, &session_for(user.id, &token, Duration::hours(1)))
        .await
        .unwrap();

    assert_eq!(SessionRepo::delete_by_token(&pool, &token).await.unwrap(), 1);
    assert_eq!(SessionRepo::delete_by_token(&pool, &token).await.unwrap(), 0);
    assert!(SessionRepo::find_by_token(&pool, &token).await.unwrap().is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_prune_removes_only_expired_sessions(pool: PgPool) {
    let user = seed_user(&pool, "mixed").await;
    let live = "e".repeat(64);
    let stale = "f".repeat(64);
    SessionRepo::create(&pool, &session_for(user.id, &live, Duration::hours(1)))
        .await
        .unwrap();
    SessionRepo::create(&pool, &session_for(user.id, &stale, Duration::hours(-1)))
        .await
        .unwrap();

    let pruned = SessionRepo::prune_expired(&pool).await.unwrap();
    assert_eq!(pruned, 1);
    assert!(SessionRepo::find_by_token(&pool, &live).await.unwrap().is_some());
    assert!(SessionRepo::find_by_token(&pool, &stale).await.unwrap().is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_duplicate_token_rejected(pool: PgPool) {
    let user = seed_user(&pool, "dupe").await;
    let token = "9".repeat(64);
    SessionRepo::create(&pool, &session_for(user.id, &token, Duration::hours(1)))
        .await
        .unwrap();

    let err = SessionRepo::create(&pool, &session_for(user.id, &token, Duration::hours(2)))
        .await
        .unwrap_err();
    match err {
        sqlx::Error::Database(db_err) => assert!(db_err.is_unique_violation()),
        other => panic!("expected unique violation, got {other:?}"),
    }
}
