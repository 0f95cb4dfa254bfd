//! Servicio de combinación de usuarios
//!
//! Construye la vista `UserRecord` uniendo cuentas, accesos y membresías de
//! empresa. La combinación es pura y total: cada cuenta produce exactamente
//! una fila, existan o no sus registros asociados.

use std::cmp::Ordering;
use std::collections::HashMap;
use std::sync::Arc;

use crate::models::user::{
    AccessRecord, AccountRecord, AccountType, CompanyMemberRecord, UserRecord, UNKNOWN_ROLE,
};
use crate::repositories::UserDirectory;
use crate::utils::errors::{not_found_error, AppResult};

/// Combinar una cuenta con sus registros de acceso y empresa
pub fn merge_user(
    account: AccountRecord,
    access: Option<&AccessRecord>,
    member: Option<&CompanyMemberRecord>,
) -> UserRecord {
    UserRecord {
        account_type: AccountType::parse(&account.account_type),
        uid: account.uid,
        email: account.email.unwrap_or_default(),
        first_name: account.first_name.unwrap_or_default(),
        last_name: account.last_name.unwrap_or_default(),
        phone_number: account.phone_number.unwrap_or_default(),
        company_id: member.and_then(|m| m.company_id.clone()),
        role: member
            .and_then(|m| m.role.clone())
            .filter(|role| !role.trim().is_empty())
            .unwrap_or_else(|| UNKNOWN_ROLE.to_string()),
        valid_access: access.and_then(|a| a.valid_access).unwrap_or(false),
        last_login: access.and_then(|a| a.last_login),
        created_at: account.created_at,
    }
}

/// Left join de las tres colecciones y ordenamiento final
pub fn merge_user_records(
    accounts: Vec<AccountRecord>,
    access: Vec<AccessRecord>,
    members: Vec<CompanyMemberRecord>,
) -> Vec<UserRecord> {
    let access_by_uid: HashMap<String, AccessRecord> =
        access.into_iter().map(|r| (r.uid.clone(), r)).collect();
    let members_by_uid: HashMap<String, CompanyMemberRecord> =
        members.into_iter().map(|r| (r.uid.clone(), r)).collect();

    let mut users: Vec<UserRecord> = accounts
        .into_iter()
        .map(|account| {
            let access = access_by_uid.get(&account.uid);
            let member = members_by_uid.get(&account.uid);
            merge_user(account, access, member)
        })
        .collect();

    users.sort_by(compare_users);
    users
}

/// Empresas primero; dentro de cada grupo, por apellido ascendente
pub fn compare_users(a: &UserRecord, b: &UserRecord) -> Ordering {
    let group = |user: &UserRecord| match user.account_type {
        AccountType::Company => 0,
        AccountType::Staff => 1,
    };

    group(a)
        .cmp(&group(b))
        .then_with(|| a.last_name.to_lowercase().cmp(&b.last_name.to_lowercase()))
        .then_with(|| a.first_name.to_lowercase().cmp(&b.first_name.to_lowercase()))
        .then_with(|| a.uid.cmp(&b.uid))
}

/// Servicio que lee el directorio y devuelve usuarios combinados
#[derive(Clone)]
pub struct UserMergeService {
    directory: Arc<dyn UserDirectory>,
}

impl UserMergeService {
    pub fn new(directory: Arc<dyn UserDirectory>) -> Self {
        Self { directory }
    }

    /// Leer las tres colecciones en paralelo y combinarlas
    pub async fn list_users(&self) -> AppResult<Vec<UserRecord>> {
        let (accounts, access, members) = futures::try_join!(
            self.directory.accounts(),
            self.directory.access_records(),
            self.directory.company_members(),
        )?;

        log::info!(
            "👥 Combinando {} cuentas, {} accesos, {} membresías",
            accounts.len(),
            access.len(),
            members.len()
        );

        Ok(merge_user_records(accounts, access, members))
    }

    /// Misma combinación para un solo uid
    pub async fn get_user(&self, uid: &str) -> AppResult<UserRecord> {
        let (account, access, member) = futures::try_join!(
            self.directory.account(uid),
            self.directory.access_record(uid),
            self.directory.company_member(uid),
        )?;

        let account = account.ok_or_else(|| not_found_error("User", uid))?;
        Ok(merge_user(account, access.as_ref(), member.as_ref()))
    }
}
