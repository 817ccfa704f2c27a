//! Recruiters and candidates.

use skillcheck_core::error::CoreError;
use skillcheck_core::types::DbId;
use skillcheck_core::user::validate_role;
use skillcheck_core::validation::validate_input;
use skillcheck_db::models::user::{CreateUser, UpdateUser, User};
use skillcheck_db::store::{CompanyStore, UserStore};

use super::not_found;
use crate::error::{AppError, AppResult};

const ENTITY: &str = "User";

pub struct UserService<'a, S> {
    store: &'a S,
}

impl<'a, S: CompanyStore + UserStore> UserService<'a, S> {
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }

    pub async fn list_all(&self) -> AppResult<Vec<User>> {
        Ok(self.store.list_users().await?)
    }

    pub async fn get(&self, id: DbId) -> AppResult<User> {
        self.store
            .find_user(id)
            .await?
            .ok_or_else(|| not_found(ENTITY, id))
    }

    pub async fn get_by_email(&self, email: &str) -> AppResult<User> {
        self.store
            .find_user_by_email(email)
            .await?
            .ok_or_else(|| {
                AppError::Core(CoreError::NotFoundByKey {
                    entity: ENTITY,
                    field: "email",
                    value: email.to_string(),
                })
            })
    }

    pub async fn list_by_company(&self, company_id: DbId) -> AppResult<Vec<User>> {
        Ok(self.store.list_users_by_company(company_id).await?)
    }

    /// Create a user. A referenced company must exist.
    pub async fn create(&self, input: CreateUser) -> AppResult<User> {
        validate_input(&input)?;
        validate_role(&input.role)?;
        if let Some(company_id) = input.company_id {
            self.ensure_company_exists(company_id).await?;
        }
        self.ensure_email_free(&input.email, None).await?;

        let user = self.store.insert_user(&input).await?;
        tracing::info!(user_id = user.id, role = %user.role, "User created");
        Ok(user)
    }

    pub async fn update(&self, id: DbId, input: UpdateUser) -> AppResult<User> {
        validate_input(&input)?;
        if let Some(role) = &input.role {
            validate_role(role)?;
        }
        if let Some(company_id) = input.company_id {
            self.ensure_company_exists(company_id).await?;
        }
        if let Some(email) = &input.email {
            self.ensure_email_free(email, Some(id)).await?;
        }

        let user = self
            .store
            .update_user(id, &input)
            .await?
            .ok_or_else(|| not_found(ENTITY, id))?;
        tracing::info!(user_id = id, "User updated");
        Ok(user)
    }

    pub async fn delete(&self, id: DbId) -> AppResult<()> {
        if !self.store.delete_user(id).await? {
            return Err(not_found(ENTITY, id));
        }
        tracing::info!(user_id = id, "User deleted");
        Ok(())
    }

    async fn ensure_company_exists(&self, company_id: DbId) -> AppResult<()> {
        if self.store.find_company(company_id).await?.is_none() {
            return Err(AppError::Core(CoreError::Validation(format!(
                "Company {company_id} does not exist"
            ))));
        }
        Ok(())
    }

    async fn ensure_email_free(&self, email: &str, except: Option<DbId>) -> AppResult<()> {
        match self.store.find_user_by_email(email).await? {
            Some(existing) if Some(existing.id) != except => Err(AppError::Core(
                CoreError::Conflict(format!("Email '{email}' is already registered")),
            )),
            _ => Ok(()),
        }
    }
}
