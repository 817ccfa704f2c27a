//! Companies and the recruiters they own.
//!
//! Company numbers are unique. The check here gives callers a readable
//! conflict message; the store's unique constraint still backs it up when
//! two writes race.

use skillcheck_core::error::CoreError;
use skillcheck_core::types::DbId;
use skillcheck_core::validation::validate_input;
use skillcheck_db::models::company::{
    Company, CompanyWithRecruiters, CreateCompany, UpdateCompany,
};
use skillcheck_db::models::user::User;
use skillcheck_db::store::{CompanyStore, UserStore};

use super::not_found;
use crate::error::{AppError, AppResult};

const ENTITY: &str = "Company";

pub struct CompanyService<'a, S> {
    store: &'a S,
}

impl<'a, S: CompanyStore + UserStore> CompanyService<'a, S> {
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }

    /// All companies, without their recruiters.
    pub async fn list_all(&self) -> AppResult<Vec<Company>> {
        Ok(self.store.list_companies().await?)
    }

    pub async fn get(&self, id: DbId) -> AppResult<CompanyWithRecruiters> {
        let company = self
            .store
            .find_company(id)
            .await?
            .ok_or_else(|| not_found(ENTITY, id))?;
        self.with_recruiters(company).await
    }

    pub async fn get_by_number(&self, company_number: &str) -> AppResult<CompanyWithRecruiters> {
        let company = self
            .store
            .find_company_by_number(company_number)
            .await?
            .ok_or_else(|| {
                AppError::Core(CoreError::NotFoundByKey {
                    entity: ENTITY,
                    field: "companyNumber",
                    value: company_number.to_string(),
                })
            })?;
        self.with_recruiters(company).await
    }

    /// Users attached to company `id`, ordered by user id. This is exactly
    /// the set removed when the company is deleted.
    pub async fn list_recruiters(&self, id: DbId) -> AppResult<Vec<User>> {
        if self.store.find_company(id).await?.is_none() {
            return Err(not_found(ENTITY, id));
        }
        self.recruiters_of(id).await
    }

    pub async fn create(&self, input: CreateCompany) -> AppResult<Company> {
        validate_input(&input)?;
        self.ensure_number_free(&input.company_number, None).await?;

        let company = self.store.insert_company(&input).await?;
        tracing::info!(
            company_id = company.id,
            company_number = %company.company_number,
            "Company created"
        );
        Ok(company)
    }

    pub async fn update(&self, id: DbId, input: UpdateCompany) -> AppResult<Company> {
        validate_input(&input)?;
        if let Some(number) = &input.company_number {
            self.ensure_number_free(number, Some(id)).await?;
        }

        let company = self
            .store
            .update_company(id, &input)
            .await?
            .ok_or_else(|| not_found(ENTITY, id))?;
        tracing::info!(company_id = id, "Company updated");
        Ok(company)
    }

    /// Delete a company. Its recruiters are removed with it.
    pub async fn delete(&self, id: DbId) -> AppResult<()> {
        if !self.store.delete_company(id).await? {
            return Err(not_found(ENTITY, id));
        }
        tracing::info!(company_id = id, "Company deleted with its recruiters");
        Ok(())
    }

    async fn ensure_number_free(&self, number: &str, except: Option<DbId>) -> AppResult<()> {
        match self.store.find_company_by_number(number).await? {
            Some(existing) if Some(existing.id) != except => Err(AppError::Core(
                CoreError::Conflict(format!("Company number '{number}' is already registered")),
            )),
            _ => Ok(()),
        }
    }

    async fn recruiters_of(&self, id: DbId) -> AppResult<Vec<User>> {
        Ok(self.store.list_users_by_company(id).await?)
    }

    async fn with_recruiters(&self, company: Company) -> AppResult<CompanyWithRecruiters> {
        let recruiters = self.recruiters_of(company.id).await?;
        Ok(CompanyWithRecruiters {
            company,
            recruiters,
        })
    }
}
