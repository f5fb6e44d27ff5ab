use std::sync::Arc;

use crate::{
    application::dto::{RegisterUserRequest, UpdateUserAgeRequest, UserResponse},
    domain::{errors::DomainError, user::NewUser},
    infrastructure::UserRepository,
};

#[derive(Clone)]
pub struct UserService {
    repository: Arc<dyn UserRepository>,
}

impl UserService {
    pub fn new(repository: Arc<dyn UserRepository>) -> Self {
        Self { repository }
    }

    pub async fn register_user(
        &self,
        request: RegisterUserRequest,
    ) -> Result<UserResponse, DomainError> {
        request.validate()?;

        let created = self
            .repository
            .add(NewUser {
                name: request.name.trim().to_string(),
                age: request.age,
            })
            .await?;

        Ok(UserResponse::from(created))
    }

    pub async fn get_user(&self, name: &str) -> Result<UserResponse, DomainError> {
        let Some(user) = self.repository.find_by_name(name).await? else {
            return Err(DomainError::not_found("user not found"));
        };
        Ok(UserResponse::from(user))
    }

    pub async fn update_user_age(
        &self,
        name: &str,
        request: UpdateUserAgeRequest,
    ) -> Result<UserResponse, DomainError> {
        request.validate()?;

        let Some(updated) = self.repository.update_age(name, request.age).await? else {
            return Err(DomainError::not_found("user not found"));
        };

        Ok(UserResponse::from(updated))
    }

    /// Removing an absent user is a no-op, not an error.
    pub async fn delete_user(&self, name: &str) -> Result<(), DomainError> {
        self.repository.delete(name).await?;
        Ok(())
    }
}
