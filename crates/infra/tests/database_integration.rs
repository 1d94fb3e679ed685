//! End-to-end coverage for the SQLite repositories.
//!
//! Each test runs against an isolated database file with the bootstrap schema
//! applied, and drives the repositories through the core port traits.

mod support;

use std::sync::Arc;

use chrono::{TimeZone, Utc};
use support::{new_profile, TestDatabase};
use usersvc_core::{ProfileStore, ReferenceDataStore};
use usersvc_domain::UserServiceError;
use usersvc_infra::database::{SqliteProfileRepository, SqliteReferenceDataRepository};

fn profile_repo(db: &TestDatabase) -> SqliteProfileRepository {
    SqliteProfileRepository::new(Arc::clone(&db.manager))
}

#[tokio::test(flavor = "multi_thread")]
async fn stored_profile_reads_back_in_both_views() {
    let db = TestDatabase::new();
    let repo = profile_repo(&db);

    let mut profile = new_profile("ana");
    profile.bio = Some("old".into());
    profile.contact_number = Some("555".into());
    profile.date_of_birth = Some(Utc.with_ymd_and_hms(1990, 5, 17, 0, 0, 0).unwrap());
    repo.insert_profile(profile.clone()).await.expect("insert succeeds");

    assert!(repo.username_exists("ana").await.unwrap());
    assert!(!repo.username_exists("bob").await.unwrap());

    let full = repo.get_full_profile("ana").await.unwrap().expect("full profile present");
    assert_eq!(full, profile);

    let public = repo.get_public_profile("ana").await.unwrap().expect("public profile present");
    assert_eq!(public.username, "ana");
    assert_eq!(public.bio.as_deref(), Some("old"));
}

#[tokio::test(flavor = "multi_thread")]
async fn absent_username_reads_as_none() {
    let db = TestDatabase::new();
    let repo = profile_repo(&db);

    assert!(repo.get_public_profile("ghost").await.unwrap().is_none());
    assert!(repo.get_full_profile("ghost").await.unwrap().is_none());
}

#[tokio::test(flavor = "multi_thread")]
async fn update_bumps_version_and_supports_rename() {
    let db = TestDatabase::new();
    let repo = profile_repo(&db);
    repo.insert_profile(new_profile("ana")).await.unwrap();

    let mut updated = repo.get_full_profile("ana").await.unwrap().unwrap();
    updated.username = "ana2".into();
    updated.bio = Some("new".into());
    repo.update_profile("ana", updated).await.expect("update succeeds");

    assert!(repo.get_full_profile("ana").await.unwrap().is_none());
    let stored = repo.get_full_profile("ana2").await.unwrap().unwrap();
    assert_eq!(stored.bio.as_deref(), Some("new"));
    assert_eq!(stored.version, 2);
}

#[tokio::test(flavor = "multi_thread")]
async fn stale_version_is_a_conflict() {
    let db = TestDatabase::new();
    let repo = profile_repo(&db);
    repo.insert_profile(new_profile("ana")).await.unwrap();

    let first = repo.get_full_profile("ana").await.unwrap().unwrap();
    let second = first.clone();

    repo.update_profile("ana", first).await.expect("first writer wins");
    let err = repo.update_profile("ana", second).await.unwrap_err();

    assert!(matches!(err, UserServiceError::Conflict(_)), "got {err:?}");
}

#[tokio::test(flavor = "multi_thread")]
async fn rename_onto_existing_username_is_a_conflict() {
    let db = TestDatabase::new();
    let repo = profile_repo(&db);
    repo.insert_profile(new_profile("ana")).await.unwrap();
    repo.insert_profile(new_profile("bob")).await.unwrap();

    let mut renamed = repo.get_full_profile("ana").await.unwrap().unwrap();
    renamed.username = "bob".into();
    let err = repo.update_profile("ana", renamed).await.unwrap_err();

    assert!(matches!(err, UserServiceError::Conflict(_)), "got {err:?}");
}

#[tokio::test(flavor = "multi_thread")]
async fn update_and_delete_of_absent_row_are_not_found() {
    let db = TestDatabase::new();
    let repo = profile_repo(&db);

    let err = repo.update_profile("ghost", new_profile("ghost")).await.unwrap_err();
    assert!(err.is_not_found());

    let err = repo.delete_profile("ghost").await.unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test(flavor = "multi_thread")]
async fn delete_removes_the_row() {
    let db = TestDatabase::new();
    let repo = profile_repo(&db);
    repo.insert_profile(new_profile("ana")).await.unwrap();

    repo.delete_profile("ana").await.expect("delete succeeds");

    assert!(!repo.username_exists("ana").await.unwrap());
}

#[tokio::test(flavor = "multi_thread")]
async fn reference_data_is_seeded_by_the_schema() {
    let db = TestDatabase::new();
    let repo = SqliteReferenceDataRepository::new(Arc::clone(&db.manager));

    let categories = repo.list_categories().await.unwrap();
    let topics = repo.list_topics().await.unwrap();

    assert!(!categories.is_empty());
    assert!(!topics.is_empty());
    assert!(topics
        .iter()
        .all(|topic| categories.iter().any(|c| c.category == topic.category)));
}

#[tokio::test(flavor = "multi_thread")]
async fn empty_reference_tables_yield_empty_lists() {
    let db = TestDatabase::new();
    db.execute_batch("DELETE FROM topics; DELETE FROM categories;");
    let repo = SqliteReferenceDataRepository::new(Arc::clone(&db.manager));

    assert!(repo.list_topics().await.unwrap().is_empty());
    assert!(repo.list_categories().await.unwrap().is_empty());
}
