//! Integration tests for `DieselUserRepository` against a live PostgreSQL.
//!
//! Runs only when `USER_SERVICE_TEST_DATABASE_URL` points at a scratch
//! database; the `users` table there is truncated. Without the variable the
//! test logs a skip message and passes.

use diesel_async::RunQueryDsl;
use rstest::rstest;
use user_service::domain::ports::UserRepository;
use user_service::domain::{UserId, UserListing, UserName};
use user_service::outbound::persistence::{
    DbPool, DieselUserRepository, PoolConfig, run_pending_migrations,
};

const DATABASE_URL_VAR: &str = "USER_SERVICE_TEST_DATABASE_URL";

fn name(raw: &str) -> UserName {
    UserName::new(raw).expect("valid name")
}

async fn fresh_repository(database_url: &str) -> DieselUserRepository {
    run_pending_migrations(database_url)
        .await
        .expect("migrations apply");
    let pool = DbPool::new(PoolConfig::new(database_url).with_max_size(2))
        .await
        .expect("pool builds");
    {
        let mut conn = pool.get().await.expect("connection checkout");
        diesel::sql_query("TRUNCATE users RESTART IDENTITY")
            .execute(&mut conn)
            .await
            .expect("truncate users");
    }
    DieselUserRepository::new(pool)
}

#[rstest]
#[tokio::test]
async fn diesel_repository_honours_the_port_contract() {
    let Ok(database_url) = std::env::var(DATABASE_URL_VAR) else {
        eprintln!("SKIP-TEST-CLUSTER: {DATABASE_URL_VAR} is not set");
        return;
    };
    let repo = fresh_repository(&database_url).await;

    assert_eq!(repo.list().await.expect("list"), UserListing::Empty);

    let alice = repo.create(&name("Alice")).await.expect("create alice");
    let bob = repo.create(&name("bob")).await.expect("create bob");
    assert_eq!((alice.id().get(), bob.id().get()), (1, 2));

    let found = repo.find_by_id(alice.id()).await.expect("lookup");
    assert_eq!(found, Some(alice.clone()));

    assert!(repo.exists_by_name(&name("ALICE")).await.expect("exists"));
    assert!(!repo.exists_by_name(&name("carol")).await.expect("exists"));

    let UserListing::Found(users) = repo.list().await.expect("list") else {
        panic!("expected users");
    };
    let ids: Vec<i64> = users.iter().map(|user| user.id().get()).collect();
    assert_eq!(ids, vec![1, 2]);

    let missing = UserId::new(999).expect("positive id");
    assert!(!repo.update(missing, &name("x")).await.expect("update"));
    assert!(!repo.delete(missing).await.expect("delete"));

    assert!(repo.update(bob.id(), &name("Robert")).await.expect("update"));
    let renamed = repo
        .find_by_id(bob.id())
        .await
        .expect("lookup")
        .expect("bob exists");
    assert_eq!(renamed.name().as_ref(), "Robert");

    assert!(repo.delete(alice.id()).await.expect("delete"));
    assert!(repo.find_by_id(alice.id()).await.expect("lookup").is_none());
    assert_eq!(repo.list().await.expect("list").len(), 1);
}
