//! In-memory store backing all repository ports.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::{DomainError, ErrorCode, ProfileId, Timestamp, UserId};
use crate::domain::profile::Profile;
use crate::domain::subscription::Subscription;
use crate::domain::suggestion::MessageHistory;
use crate::domain::user::User;
use crate::ports::{
    MessageHistoryRepository, ProfileRepository, SubscriptionRepository, UserRepository,
};

#[derive(Debug, Default)]
struct Tables {
    users: HashMap<UserId, User>,
    subscriptions: HashMap<UserId, Subscription>,
    profiles: Vec<Profile>,
    history: Vec<MessageHistory>,
}

/// In-memory storage for users, subscriptions, profiles and history.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    tables: Arc<RwLock<Tables>>,
}

impl InMemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored users.
    pub async fn user_count(&self) -> usize {
        self.tables.read().await.users.len()
    }

    /// Number of stored history entries across all users.
    pub async fn history_count(&self) -> usize {
        self.tables.read().await.history.len()
    }
}

fn user_not_found() -> DomainError {
    DomainError::new(ErrorCode::UserNotFound, "User not found")
}

fn subscription_not_found() -> DomainError {
    DomainError::new(ErrorCode::SubscriptionNotFound, "Subscription not found")
}

fn profile_not_found() -> DomainError {
    DomainError::new(ErrorCode::ProfileNotFound, "Profile not found")
}

#[async_trait]
impl UserRepository for InMemoryStore {
    async fn create_with_subscription(
        &self,
        user: &User,
        subscription: &Subscription,
    ) -> Result<(), DomainError> {
        let mut tables = self.tables.write().await;
        if tables.users.contains_key(&user.id) {
            return Err(DomainError::database("duplicate user id"));
        }
        tables.users.insert(user.id, user.clone());
        tables
            .subscriptions
            .insert(subscription.user_id, subscription.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, DomainError> {
        Ok(self.tables.read().await.users.get(id).cloned())
    }
}

#[async_trait]
impl SubscriptionRepository for InMemoryStore {
    async fn save(&self, subscription: &Subscription) -> Result<(), DomainError> {
        let mut tables = self.tables.write().await;
        if !tables.users.contains_key(&subscription.user_id) {
            return Err(user_not_found());
        }
        if tables.subscriptions.contains_key(&subscription.user_id) {
            return Err(DomainError::database("subscription already exists"));
        }
        tables
            .subscriptions
            .insert(subscription.user_id, subscription.clone());
        Ok(())
    }

    async fn update_usage(&self, subscription: &Subscription) -> Result<(), DomainError> {
        let mut tables = self.tables.write().await;
        let existing = tables
            .subscriptions
            .get_mut(&subscription.user_id)
            .ok_or_else(subscription_not_found)?;
        existing.daily_usage_count = subscription.daily_usage_count;
        existing.last_reset_date = subscription.last_reset_date;
        existing.updated_at = subscription.updated_at;
        Ok(())
    }

    async fn update_plan(&self, subscription: &Subscription) -> Result<(), DomainError> {
        let mut tables = self.tables.write().await;
        let existing = tables
            .subscriptions
            .get_mut(&subscription.user_id)
            .ok_or_else(subscription_not_found)?;
        existing.is_premium = subscription.is_premium;
        existing.plan_type = subscription.plan_type;
        existing.expires_at = subscription.expires_at;
        existing.updated_at = subscription.updated_at;
        Ok(())
    }

    async fn record_lapse(
        &self,
        user_id: &UserId,
        expired_at: Timestamp,
        now: Timestamp,
    ) -> Result<bool, DomainError> {
        let mut tables = self.tables.write().await;
        match tables.subscriptions.get_mut(user_id) {
            Some(existing) if existing.is_premium && existing.expires_at == Some(expired_at) => {
                existing.is_premium = false;
                existing.plan_type = None;
                existing.expires_at = None;
                existing.updated_at = now;
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    async fn find_by_user_id(
        &self,
        user_id: &UserId,
    ) -> Result<Option<Subscription>, DomainError> {
        Ok(self.tables.read().await.subscriptions.get(user_id).cloned())
    }
}

#[async_trait]
impl ProfileRepository for InMemoryStore {
    async fn save(&self, profile: &Profile) -> Result<(), DomainError> {
        let mut tables = self.tables.write().await;
        if !tables.users.contains_key(&profile.user_id) {
            return Err(user_not_found());
        }
        tables.profiles.push(profile.clone());
        Ok(())
    }

    async fn update(&self, profile: &Profile) -> Result<(), DomainError> {
        let mut tables = self.tables.write().await;
        let existing = tables
            .profiles
            .iter_mut()
            .find(|p| p.id == profile.id)
            .ok_or_else(profile_not_found)?;
        *existing = profile.clone();
        Ok(())
    }

    async fn find_by_id(&self, id: &ProfileId) -> Result<Option<Profile>, DomainError> {
        let tables = self.tables.read().await;
        Ok(tables.profiles.iter().find(|p| &p.id == id).cloned())
    }

    async fn list_by_user(&self, user_id: &UserId) -> Result<Vec<Profile>, DomainError> {
        let tables = self.tables.read().await;
        let mut profiles: Vec<Profile> = tables
            .profiles
            .iter()
            .rev()
            .filter(|p| &p.user_id == user_id)
            .cloned()
            .collect();
        profiles.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(profiles)
    }

    async fn delete(&self, id: &ProfileId) -> Result<(), DomainError> {
        let mut tables = self.tables.write().await;
        let before = tables.profiles.len();
        tables.profiles.retain(|p| &p.id != id);
        if tables.profiles.len() == before {
            return Err(profile_not_found());
        }
        Ok(())
    }
}

#[async_trait]
impl MessageHistoryRepository for InMemoryStore {
    async fn append(&self, entry: &MessageHistory) -> Result<(), DomainError> {
        let mut tables = self.tables.write().await;
        if !tables.users.contains_key(&entry.user_id) {
            return Err(user_not_found());
        }
        tables.history.push(entry.clone());
        Ok(())
    }

    async fn list_recent(
        &self,
        user_id: &UserId,
        limit: u32,
    ) -> Result<Vec<MessageHistory>, DomainError> {
        let tables = self.tables.read().await;
        let mut entries: Vec<MessageHistory> = tables
            .history
            .iter()
            .rev()
            .filter(|h| &h.user_id == user_id)
            .cloned()
            .collect();
        entries.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        entries.truncate(limit as usize);
        Ok(entries)
    }
}
