//! User service - Handles user-related business logic.

use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::{CreateUser, UpdateUser, User};
use crate::errors::{AppError, AppResult};
use crate::infra::UserRepository;
use crate::types::PaginationParams;

/// User service trait for dependency injection.
#[async_trait]
pub trait UserService: Send + Sync {
    /// Create a new user account
    async fn create_user(&self, data: CreateUser) -> AppResult<User>;

    /// Get user by ID
    async fn get_user(&self, id: Uuid) -> AppResult<User>;

    /// List users one page at a time, with the total count
    async fn list_users(&self, params: &PaginationParams) -> AppResult<(Vec<User>, u64)>;

    /// Update user details
    async fn update_user(&self, id: Uuid, data: UpdateUser) -> AppResult<User>;

    /// Delete user; refused while bookings or reviews reference the user
    async fn delete_user(&self, id: Uuid) -> AppResult<()>;
}

/// Concrete implementation of UserService using repository.
pub struct UserManager {
    repo: Arc<dyn UserRepository>,
}

impl UserManager {
    /// Create new user service instance with repository
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl UserService for UserManager {
    async fn create_user(&self, data: CreateUser) -> AppResult<User> {
        // Check if email already exists
        if self.repo.find_by_email(&data.email).await?.is_some() {
            return Err(AppError::conflict("A user with this email already exists"));
        }

        self.repo.create(data).await
    }

    async fn get_user(&self, id: Uuid) -> AppResult<User> {
        self.repo.find_by_id(id).await?.ok_or(AppError::NotFound)
    }

    async fn list_users(&self, params: &PaginationParams) -> AppResult<(Vec<User>, u64)> {
        self.repo.list_paginated(params).await
    }

    async fn update_user(&self, id: Uuid, data: UpdateUser) -> AppResult<User> {
        self.repo.update(id, data).await
    }

    async fn delete_user(&self, id: Uuid) -> AppResult<()> {
        self.repo.delete(id).await
    }
}
