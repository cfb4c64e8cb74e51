use crate::error::{DomainError, Result};
use crate::patch::{FieldChange, FieldValue, NO_FIELDS_MESSAGE, Patch, push_change};
use serde::{Deserialize, Serialize};

/// Client company. `elemento_pep` is the business code reports point at.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Company {
    pub id: i32,
    pub nombre_company: String,
    pub elemento_pep: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewCompany {
    pub nombre_company: String,
    pub elemento_pep: String,
}

impl NewCompany {
    pub fn validate(&self) -> Result<()> {
        require_text(
            &self.nombre_company,
            "El nombre de la compañía es obligatorio",
        )?;
        require_text(&self.elemento_pep, "El elemento PEP es obligatorio")
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyPatch {
    #[serde(default)]
    pub nombre_company: Option<String>,
    #[serde(default)]
    pub elemento_pep: Option<String>,
}

impl CompanyPatch {
    pub fn validate(&self) -> Result<()> {
        if self.is_empty() {
            return Err(DomainError::validation(NO_FIELDS_MESSAGE));
        }
        if let Some(nombre) = &self.nombre_company {
            require_text(nombre, "El nombre de la compañía es obligatorio")?;
        }
        if let Some(pep) = &self.elemento_pep {
            require_text(pep, "El elemento PEP es obligatorio")?;
        }
        Ok(())
    }
}

impl Patch for CompanyPatch {
    fn changes(&self) -> Vec<FieldChange> {
        let mut changes = Vec::new();
        push_change(&mut changes, "nombre_company", &self.nombre_company, |v| {
            FieldValue::Text(v.clone())
        });
        push_change(&mut changes, "elemento_pep", &self.elemento_pep, |v| {
            FieldValue::Text(v.clone())
        });
        changes
    }
}

pub(crate) fn require_text(value: &str, message: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(DomainError::validation(message));
    }
    Ok(())
}
