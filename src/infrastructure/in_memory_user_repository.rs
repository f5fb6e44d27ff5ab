use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::{
    domain::{
        errors::DomainError,
        user::{NewUser, User},
    },
    infrastructure::UserRepository,
};

/// Directory entries live in insertion order. Names are not unique;
/// every lookup, update and delete touches the first match only.
#[derive(Default)]
pub struct InMemoryUserRepository {
    users: RwLock<Vec<User>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn add(&self, user: NewUser) -> Result<User, DomainError> {
        let created = User {
            name: user.name,
            age: user.age,
        };

        self.users.write().await.push(created.clone());
        Ok(created)
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<User>, DomainError> {
        Ok(self
            .users
            .read()
            .await
            .iter()
            .find(|user| user.name == name)
            .cloned())
    }

    async fn update_age(&self, name: &str, new_age: u32) -> Result<Option<User>, DomainError> {
        let mut users = self.users.write().await;
        let Some(user) = users.iter_mut().find(|user| user.name == name) else {
            return Ok(None);
        };

        user.age = new_age;
        Ok(Some(user.clone()))
    }

    async fn delete(&self, name: &str) -> Result<bool, DomainError> {
        let mut users = self.users.write().await;
        let Some(position) = users.iter().position(|user| user.name == name) else {
            return Ok(false);
        };

        users.remove(position);
        Ok(true)
    }
}
