//! In-memory mock implementations of the core store ports

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use usersvc_core::{ProfileStore, ReferenceDataStore};
use usersvc_domain::{
    Category, FullProfile, PublicProfile, Result as DomainResult, Topic, UserServiceError,
};

/// In-memory `ProfileStore` keyed by username.
///
/// Enforces the same version check and username uniqueness as the SQLite
/// adapter, and can inject failures or a competing write.
#[derive(Default)]
pub struct InMemoryProfileStore {
    profiles: Mutex<HashMap<String, FullProfile>>,
    fail_full_fetch: AtomicBool,
    interleave_write: AtomicBool,
    updates: AtomicUsize,
}

impl InMemoryProfileStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the store with a profile.
    pub fn with_profile(self, profile: FullProfile) -> Self {
        self.profiles.lock().unwrap().insert(profile.username.clone(), profile);
        self
    }

    /// Make `get_full_profile` fail with a database error.
    pub fn failing_full_fetch(self) -> Self {
        self.fail_full_fetch.store(true, Ordering::SeqCst);
        self
    }

    /// Bump the stored version right after the next full fetch, as if another
    /// writer committed between our read and our write.
    pub fn with_interleaved_write(self) -> Self {
        self.interleave_write.store(true, Ordering::SeqCst);
        self
    }

    pub fn stored(&self, username: &str) -> Option<FullProfile> {
        self.profiles.lock().unwrap().get(username).cloned()
    }

    pub fn update_calls(&self) -> usize {
        self.updates.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ProfileStore for InMemoryProfileStore {
    async fn username_exists(&self, username: &str) -> DomainResult<bool> {
        Ok(self.profiles.lock().unwrap().contains_key(username))
    }

    async fn get_public_profile(&self, username: &str) -> DomainResult<Option<PublicProfile>> {
        Ok(self.profiles.lock().unwrap().get(username).map(PublicProfile::from))
    }

    async fn get_full_profile(&self, username: &str) -> DomainResult<Option<FullProfile>> {
        if self.fail_full_fetch.load(Ordering::SeqCst) {
            return Err(UserServiceError::Database("connection reset".into()));
        }

        let mut profiles = self.profiles.lock().unwrap();
        let found = profiles.get(username).cloned();

        if self.interleave_write.swap(false, Ordering::SeqCst) {
            if let Some(stored) = profiles.get_mut(username) {
                stored.version += 1;
            }
        }

        Ok(found)
    }

    async fn update_profile(&self, username: &str, profile: FullProfile) -> DomainResult<()> {
        self.updates.fetch_add(1, Ordering::SeqCst);
        let mut profiles = self.profiles.lock().unwrap();

        let stored_version = match profiles.get(username) {
            Some(stored) => stored.version,
            None => return Err(UserServiceError::user_not_found(username)),
        };
        if stored_version != profile.version {
            return Err(UserServiceError::Conflict(format!(
                "profile {username} was modified concurrently"
            )));
        }
        if profile.username != username && profiles.contains_key(&profile.username) {
            return Err(UserServiceError::Conflict("unique constraint violation".into()));
        }

        profiles.remove(username);
        let mut next = profile;
        next.version += 1;
        profiles.insert(next.username.clone(), next);
        Ok(())
    }

    async fn delete_profile(&self, username: &str) -> DomainResult<()> {
        self.profiles.lock().unwrap().remove(username);
        Ok(())
    }
}

/// In-memory `ReferenceDataStore` returning fixed data or a fixed error.
#[derive(Default)]
pub struct InMemoryReferenceStore {
    topics: Vec<Topic>,
    categories: Vec<Category>,
    error: Option<UserServiceError>,
}

impl InMemoryReferenceStore {
    pub fn new(topics: Vec<Topic>, categories: Vec<Category>) -> Self {
        Self { topics, categories, error: None }
    }

    pub fn failing(error: UserServiceError) -> Self {
        Self { error: Some(error), ..Self::default() }
    }
}

#[async_trait]
impl ReferenceDataStore for InMemoryReferenceStore {
    async fn list_topics(&self) -> DomainResult<Vec<Topic>> {
        match &self.error {
            Some(err) => Err(err.clone()),
            None => Ok(self.topics.clone()),
        }
    }

    async fn list_categories(&self) -> DomainResult<Vec<Category>> {
        match &self.error {
            Some(err) => Err(err.clone()),
            None => Ok(self.categories.clone()),
        }
    }
}

/// Profile fixture used across core tests.
pub fn profile(username: &str) -> FullProfile {
    FullProfile {
        account_id: format!("acc-{username}"),
        username: username.to_string(),
        first_name: "Ana".into(),
        last_name: "Lima".into(),
        bio: Some("old".into()),
        avatar_url: None,
        date_of_birth: None,
        address: Some("Rua 1".into()),
        contact_number: Some("555".into()),
        user_status: "active".into(),
        version: 1,
    }
}
