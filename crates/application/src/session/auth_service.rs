use super::password::{verify_missing_account, verify_password};
use domain::user::{AuthMode, DashboardVariant, User, UserRepository};
use domain::{DomainError, Result};
use serde::Serialize;
use std::sync::Arc;
use tracing::{info, warn};

const INVALID_CREDENTIALS: &str = "Documento o contraseña incorrectos";

/// Identity of a logged-in user and the dashboard it mounts
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Session {
    pub user_id: i32,
    pub documento_id: i64,
    pub nombre_usuario: String,
    pub rol: i32,
    pub dashboard: DashboardVariant,
}

impl From<&User> for Session {
    fn from(user: &User) -> Self {
        Self {
            user_id: user.id,
            documento_id: user.documento_id,
            nombre_usuario: user.nombre_usuario.clone(),
            rol: user.rol,
            dashboard: user.dashboard(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum SessionOutcome {
    Authenticated(Session),
    /// The provider knows the user but no local account matches
    Unregistered { email: String },
}

/// Resolves who is logged in, through whichever flow the deployment enables
pub struct AuthService {
    users: Arc<dyn UserRepository>,
    mode: AuthMode,
}

impl AuthService {
    pub fn new(users: Arc<dyn UserRepository>, mode: AuthMode) -> Self {
        Self { users, mode }
    }

    pub fn mode(&self) -> AuthMode {
        self.mode
    }

    /// Credential flow: `documento_id` and password against the stored hash
    pub async fn login(&self, documento_id: i64, password: &str) -> Result<Session> {
        self.require_mode(AuthMode::Credentials)?;

        let Some(user) = self.users.find_by_documento(documento_id).await? else {
            verify_missing_account(password);
            warn!(documento_id, "Login attempt for unknown documento");
            return Err(DomainError::Unauthorized(INVALID_CREDENTIALS.to_string()));
        };
        if !verify_password(password, &user.password_hash) {
            warn!(documento_id, "Login attempt with wrong password");
            return Err(DomainError::Unauthorized(INVALID_CREDENTIALS.to_string()));
        }

        let session = Session::from(&user);
        info!(documento_id, dashboard = ?session.dashboard, "User logged in");
        Ok(session)
    }

    /// Identity-provider flow. The provider has already vouched for `email`;
    /// an email without a local account never gets a default role.
    pub async fn identify(&self, email: &str) -> Result<SessionOutcome> {
        self.require_mode(AuthMode::IdentityProvider)?;

        let email = email.trim();
        if email.is_empty() {
            return Err(DomainError::validation("El email es obligatorio"));
        }

        match self.users.find_by_email(email).await? {
            Some(user) => {
                let session = Session::from(&user);
                info!(
                    documento_id = user.documento_id,
                    dashboard = ?session.dashboard,
                    "User identified"
                );
                Ok(SessionOutcome::Authenticated(session))
            }
            None => {
                info!(email, "Identified user has no local account");
                Ok(SessionOutcome::Unregistered {
                    email: email.to_string(),
                })
            }
        }
    }

    fn require_mode(&self, expected: AuthMode) -> Result<()> {
        if self.mode != expected {
            return Err(DomainError::not_found(
                "Flujo de autenticación no habilitado",
            ));
        }
        Ok(())
    }
}
