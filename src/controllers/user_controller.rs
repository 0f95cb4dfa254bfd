use crate::dto::ActionResult;
use crate::models::user::UserRecord;
use crate::services::{PROFILE_ROLES, USER_ADMIN_ROLES};
use crate::state::AppState;
use crate::utils::errors::AppResult;

/// Acciones del directorio de usuarios
pub struct UserController<'a> {
    state: &'a AppState,
}

impl<'a> UserController<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    /// Listado combinado de todos los usuarios
    pub async fn list_users(&self, token: Option<&str>) -> ActionResult<Vec<UserRecord>> {
        if self
            .state
            .sessions
            .verify_session_and_role(token, USER_ADMIN_ROLES)
            .await
            .is_none()
        {
            return ActionResult::unauthorized();
        }

        self.state.users.list_users().await.into()
    }

    /// Un usuario por uid
    pub async fn get_user(
        &self,
        token: Option<&str>,
        uid: AppResult<String>,
    ) -> ActionResult<UserRecord> {
        if self
            .state
            .sessions
            .verify_session_and_role(token, USER_ADMIN_ROLES)
            .await
            .is_none()
        {
            return ActionResult::unauthorized();
        }

        let result = match uid {
            Ok(uid) => self.state.users.get_user(&uid).await,
            Err(e) => Err(e),
        };
        result.into()
    }

    /// Perfil del usuario de la sesión
    pub async fn get_profile(&self, token: Option<&str>) -> ActionResult<UserRecord> {
        let Some(claims) = self
            .state
            .sessions
            .verify_session_and_role(token, PROFILE_ROLES)
            .await
        else {
            return ActionResult::unauthorized();
        };

        self.state.users.get_user(&claims.sub).await.into()
    }
}
