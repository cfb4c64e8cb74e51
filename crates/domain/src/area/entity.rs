use crate::company::require_text;
use crate::error::{DomainError, Result};
use crate::patch::{
    FieldChange, FieldValue, NO_FIELDS_MESSAGE, NullKind, Patch, push_change, push_nullable_change,
};
use serde::{Deserialize, Serialize};

/// A work area offered by one company. The same `nombre_area` can exist
/// under several companies with different ids.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AreaEnCompany {
    pub id: i32,
    pub nombre_area: String,
    pub area_cliente: Option<i32>,
    pub company_id: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AreaView {
    #[serde(flatten)]
    pub area: AreaEnCompany,
    pub nombre_company: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewArea {
    pub nombre_area: String,
    #[serde(default)]
    pub area_cliente: Option<i32>,
    pub company_id: i32,
}

impl NewArea {
    pub fn validate(&self) -> Result<()> {
        require_text(&self.nombre_area, "El nombre del área es obligatorio")
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AreaPatch {
    #[serde(default)]
    pub nombre_area: Option<String>,
    #[serde(
        default,
        deserialize_with = "crate::patch::nullable",
        skip_serializing_if = "Option::is_none"
    )]
    pub area_cliente: Option<Option<i32>>,
    #[serde(default)]
    pub company_id: Option<i32>,
}

impl AreaPatch {
    pub fn validate(&self) -> Result<()> {
        if self.is_empty() {
            return Err(DomainError::validation(NO_FIELDS_MESSAGE));
        }
        if let Some(nombre) = &self.nombre_area {
            require_text(nombre, "El nombre del área es obligatorio")?;
        }
        Ok(())
    }
}

impl Patch for AreaPatch {
    fn changes(&self) -> Vec<FieldChange> {
        let mut changes = Vec::new();
        push_change(&mut changes, "nombre_area", &self.nombre_area, |v| {
            FieldValue::Text(v.clone())
        });
        push_nullable_change(
            &mut changes,
            "area_cliente",
            &self.area_cliente,
            NullKind::Int,
            |v| FieldValue::Int(*v),
        );
        push_change(&mut changes, "company_id", &self.company_id, |v| {
            FieldValue::Int(*v)
        });
        changes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_area_patch_order() {
        let patch = AreaPatch {
            company_id: Some(2),
            nombre_area: Some("Soporte".to_string()),
            area_cliente: None,
        };
        let columns: Vec<_> = patch.changes().iter().map(|c| c.column).collect();
        assert_eq!(columns, vec!["nombre_area", "company_id"]);
    }

    #[test]
    fn test_null_area_cliente_is_a_change() {
        let patch: AreaPatch = serde_json::from_str(r#"{"area_cliente": null}"#).unwrap();
        assert!(patch.validate().is_ok());
        assert_eq!(patch.area_cliente, Some(None));
        assert_eq!(patch.changes()[0].value, FieldValue::Null(NullKind::Int));
    }

    #[test]
    fn test_new_area_requires_name() {
        let area = NewArea {
            nombre_area: " ".to_string(),
            area_cliente: None,
            company_id: 1,
        };
        assert!(area.validate().is_err());
    }
}
