//! Repositorio del directorio de usuarios
//!
//! Acceso de solo lectura a las tres colecciones de usuario. La
//! implementación de producción usa PostgreSQL; la versión en memoria sirve
//! para desarrollo local y tests.

use async_trait::async_trait;
use sqlx::PgPool;
use std::collections::HashMap;

use crate::models::user::{AccessRecord, AccountRecord, CompanyMemberRecord};
use crate::utils::errors::AppError;

#[async_trait]
pub trait UserDirectory: Send + Sync {
    async fn accounts(&self) -> Result<Vec<AccountRecord>, AppError>;
    async fn access_records(&self) -> Result<Vec<AccessRecord>, AppError>;
    async fn company_members(&self) -> Result<Vec<CompanyMemberRecord>, AppError>;

    async fn account(&self, uid: &str) -> Result<Option<AccountRecord>, AppError>;
    async fn access_record(&self, uid: &str) -> Result<Option<AccessRecord>, AppError>;
    async fn company_member(&self, uid: &str) -> Result<Option<CompanyMemberRecord>, AppError>;
}

pub struct PgUserDirectory {
    pool: PgPool,
}

impl PgUserDirectory {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserDirectory for PgUserDirectory {
    async fn accounts(&self) -> Result<Vec<AccountRecord>, AppError> {
        let result = sqlx::query_as::<_, AccountRecord>(
            r#"
            SELECT uid, email, first_name, last_name, phone_number, account_type, created_at
            FROM accounts
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(result)
    }

    async fn access_records(&self) -> Result<Vec<AccessRecord>, AppError> {
        let result = sqlx::query_as::<_, AccessRecord>(
            "SELECT uid, valid_access, last_login FROM account_access",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(result)
    }

    async fn company_members(&self) -> Result<Vec<CompanyMemberRecord>, AppError> {
        let result = sqlx::query_as::<_, CompanyMemberRecord>(
            "SELECT uid, company_id, role FROM company_members",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(result)
    }

    async fn account(&self, uid: &str) -> Result<Option<AccountRecord>, AppError> {
        let result = sqlx::query_as::<_, AccountRecord>(
            r#"
            SELECT uid, email, first_name, last_name, phone_number, account_type, created_at
            FROM accounts
            WHERE uid = $1
            "#,
        )
        .bind(uid)
        .fetch_optional(&self.pool)
        .await?;

        Ok(result)
    }

    async fn access_record(&self, uid: &str) -> Result<Option<AccessRecord>, AppError> {
        let result = sqlx::query_as::<_, AccessRecord>(
            "SELECT uid, valid_access, last_login FROM account_access WHERE uid = $1",
        )
        .bind(uid)
        .fetch_optional(&self.pool)
        .await?;

        Ok(result)
    }

    async fn company_member(&self, uid: &str) -> Result<Option<CompanyMemberRecord>, AppError> {
        let result = sqlx::query_as::<_, CompanyMemberRecord>(
            "SELECT uid, company_id, role FROM company_members WHERE uid = $1",
        )
        .bind(uid)
        .fetch_optional(&self.pool)
        .await?;

        Ok(result)
    }
}

/// Directorio en memoria
#[derive(Default, Clone)]
pub struct InMemoryUserDirectory {
    accounts: Vec<AccountRecord>,
    access: HashMap<String, AccessRecord>,
    members: HashMap<String, CompanyMemberRecord>,
}

impl InMemoryUserDirectory {
    pub fn new(
        accounts: Vec<AccountRecord>,
        access: Vec<AccessRecord>,
        members: Vec<CompanyMemberRecord>,
    ) -> Self {
        Self {
            accounts,
            access: access.into_iter().map(|r| (r.uid.clone(), r)).collect(),
            members: members.into_iter().map(|r| (r.uid.clone(), r)).collect(),
        }
    }
}

#[async_trait]
impl UserDirectory for InMemoryUserDirectory {
    async fn accounts(&self) -> Result<Vec<AccountRecord>, AppError> {
        Ok(self.accounts.clone())
    }

    async fn access_records(&self) -> Result<Vec<AccessRecord>, AppError> {
        Ok(self.access.values().cloned().collect())
    }

    async fn company_members(&self) -> Result<Vec<CompanyMemberRecord>, AppError> {
        Ok(self.members.values().cloned().collect())
    }

    async fn account(&self, uid: &str) -> Result<Option<AccountRecord>, AppError> {
        Ok(self.accounts.iter().find(|a| a.uid == uid).cloned())
    }

    async fn access_record(&self, uid: &str) -> Result<Option<AccessRecord>, AppError> {
        Ok(self.access.get(uid).cloned())
    }

    async fn company_member(&self, uid: &str) -> Result<Option<CompanyMemberRecord>, AppError> {
        Ok(self.members.get(uid).cloned())
    }
}
