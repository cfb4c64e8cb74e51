use super::{DashboardVariant, Role};
use crate::company::require_text;
use crate::error::{DomainError, Result};
use crate::patch::{
    FieldChange, FieldValue, NO_FIELDS_MESSAGE, NullKind, Patch, push_change, push_nullable_change,
};
use serde::{Deserialize, Serialize};

/// A user account. `documento_id` is the login key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i32,
    pub documento_id: i64,
    pub nombre_usuario: String,
    pub email: Option<String>,
    /// Raw stored role code; see [`User::dashboard`]
    pub rol: i32,
    /// argon2 PHC string
    #[serde(skip_serializing, default)]
    pub password_hash: String,
}

impl User {
    pub fn dashboard(&self) -> DashboardVariant {
        DashboardVariant::for_role_code(self.rol)
    }
}

/// Insertable fields of a user.
///
/// `password` arrives as plaintext and is replaced by its hash before the
/// record reaches a repository.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewUser {
    pub documento_id: i64,
    pub nombre_usuario: String,
    #[serde(default)]
    pub email: Option<String>,
    pub rol: i32,
    pub password: String,
}

impl NewUser {
    pub fn validate(&self) -> Result<()> {
        validate_documento(self.documento_id)?;
        require_text(&self.nombre_usuario, "El nombre de usuario es obligatorio")?;
        validate_role(self.rol)?;
        require_text(&self.password, "La contraseña es obligatoria")
    }
}

/// Partial update of a user. Same plaintext-then-hash rule as [`NewUser`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserPatch {
    #[serde(default)]
    pub documento_id: Option<i64>,
    #[serde(default)]
    pub nombre_usuario: Option<String>,
    #[serde(
        default,
        deserialize_with = "crate::patch::nullable",
        skip_serializing_if = "Option::is_none"
    )]
    pub email: Option<Option<String>>,
    #[serde(default)]
    pub rol: Option<i32>,
    #[serde(default)]
    pub password: Option<String>,
}

impl UserPatch {
    pub fn validate(&self) -> Result<()> {
        if self.is_empty() {
            return Err(DomainError::validation(NO_FIELDS_MESSAGE));
        }
        if let Some(documento_id) = self.documento_id {
            validate_documento(documento_id)?;
        }
        if let Some(nombre) = &self.nombre_usuario {
            require_text(nombre, "El nombre de usuario es obligatorio")?;
        }
        if let Some(rol) = self.rol {
            validate_role(rol)?;
        }
        if let Some(password) = &self.password {
            require_text(password, "La contraseña es obligatoria")?;
        }
        Ok(())
    }
}

impl Patch for UserPatch {
    fn changes(&self) -> Vec<FieldChange> {
        let mut changes = Vec::new();
        push_change(&mut changes, "documento_id", &self.documento_id, |v| {
            FieldValue::BigInt(*v)
        });
        push_change(&mut changes, "nombre_usuario", &self.nombre_usuario, |v| {
            FieldValue::Text(v.clone())
        });
        push_nullable_change(&mut changes, "email", &self.email, NullKind::Text, |v| {
            FieldValue::Text(v.clone())
        });
        push_change(&mut changes, "rol", &self.rol, |v| {
            FieldValue::Int(*v)
        });
        push_change(&mut changes, "password_hash", &self.password, |v| {
            FieldValue::Text(v.clone())
        });
        changes
    }
}

/// Emails are stored and looked up trimmed and lowercased
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

fn validate_documento(documento_id: i64) -> Result<()> {
    if documento_id <= 0 {
        return Err(DomainError::validation(
            "El documento debe ser un número válido",
        ));
    }
    Ok(())
}

fn validate_role(rol: i32) -> Result<()> {
    if Role::from_code(rol).is_none() {
        return Err(DomainError::Validation(format!("Rol desconocido: {rol}")));
    }
    Ok(())
}
