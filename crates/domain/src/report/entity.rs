use super::ApprovalStatus;
use crate::error::{DomainError, Result};
use crate::patch::{
    FieldChange, FieldValue, NO_FIELDS_MESSAGE, NullKind, Patch, push_change, push_nullable_change,
};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Hours an employee logged against a client company and work area.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HourReport {
    pub id: i32,
    pub created_at: DateTime<Utc>,
    pub horas: f64,
    pub fecha_trabajada: Option<NaiveDate>,
    /// Company `elemento_pep`; may dangle
    pub cliente: String,
    pub documento_id: i64,
    /// `AreaEnCompany.id` rendered as text; may dangle
    pub area_trabajo: Option<String>,
    pub aprobado: ApprovalStatus,
}

impl HourReport {
    /// Date the hours count for: the worked date, else the creation day (UTC)
    pub fn effective_date(&self) -> NaiveDate {
        self.fecha_trabajada
            .unwrap_or_else(|| self.created_at.date_naive())
    }
}

/// A report joined with the display names of its company and area.
/// Missing references surface as `None`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HourReportView {
    #[serde(flatten)]
    pub report: HourReport,
    pub nombre_company: Option<String>,
    pub nombre_area: Option<String>,
}

impl From<HourReport> for HourReportView {
    fn from(report: HourReport) -> Self {
        Self {
            report,
            nombre_company: None,
            nombre_area: None,
        }
    }
}

/// Insertable fields of a report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewHourReport {
    pub horas: f64,
    #[serde(default)]
    pub fecha_trabajada: Option<NaiveDate>,
    pub cliente: String,
    pub documento_id: i64,
    #[serde(default)]
    pub area_trabajo: Option<String>,
}

impl NewHourReport {
    pub fn validate(&self) -> Result<()> {
        validate_horas(self.horas)?;
        if self.cliente.trim().is_empty() {
            return Err(DomainError::validation("El cliente es obligatorio"));
        }
        Ok(())
    }
}

/// Partial update of a report. Fields left `None` keep their stored value;
/// `Some(None)` on a nullable field clears it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HourReportPatch {
    #[serde(default)]
    pub horas: Option<f64>,
    #[serde(default)]
    pub cliente: Option<String>,
    #[serde(
        default,
        deserialize_with = "crate::patch::nullable",
        skip_serializing_if = "Option::is_none"
    )]
    pub fecha_trabajada: Option<Option<NaiveDate>>,
    #[serde(default)]
    pub documento_id: Option<i64>,
    #[serde(
        default,
        deserialize_with = "crate::patch::nullable",
        skip_serializing_if = "Option::is_none"
    )]
    pub area_trabajo: Option<Option<String>>,
}

impl HourReportPatch {
    pub fn validate(&self) -> Result<()> {
        if self.is_empty() {
            return Err(DomainError::validation(NO_FIELDS_MESSAGE));
        }
        if let Some(horas) = self.horas {
            validate_horas(horas)?;
        }
        if matches!(&self.cliente, Some(c) if c.trim().is_empty()) {
            return Err(DomainError::validation("El cliente es obligatorio"));
        }
        Ok(())
    }

    /// Applies the supplied fields onto `report`, leaving the rest untouched
    pub fn apply_to(&self, report: &mut HourReport) {
        if let Some(horas) = self.horas {
            report.horas = horas;
        }
        if let Some(cliente) = &self.cliente {
            report.cliente = cliente.clone();
        }
        if let Some(fecha) = self.fecha_trabajada {
            report.fecha_trabajada = fecha;
        }
        if let Some(documento_id) = self.documento_id {
            report.documento_id = documento_id;
        }
        if let Some(area) = &self.area_trabajo {
            report.area_trabajo = area.clone();
        }
    }
}

impl Patch for HourReportPatch {
    fn changes(&self) -> Vec<FieldChange> {
        let mut changes = Vec::new();
        push_change(&mut changes, "horas", &self.horas, |v| {
            FieldValue::Float(*v)
        });
        push_change(&mut changes, "cliente", &self.cliente, |v| {
            FieldValue::Text(v.clone())
        });
        push_nullable_change(
            &mut changes,
            "fecha_trabajada",
            &self.fecha_trabajada,
            NullKind::Date,
            |v| FieldValue::Date(*v),
        );
        push_change(&mut changes, "documento_id", &self.documento_id, |v| {
            FieldValue::BigInt(*v)
        });
        push_nullable_change(
            &mut changes,
            "area_trabajo",
            &self.area_trabajo,
            NullKind::Text,
            |v| FieldValue::Text(v.clone()),
        );
        changes
    }
}

fn validate_horas(horas: f64) -> Result<()> {
    if !horas.is_finite() || horas <= 0.0 {
        return Err(DomainError::validation(
            "Las horas deben ser un número positivo",
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample_report() -> HourReport {
        HourReport {
            id: 7,
            created_at: Utc.with_ymd_and_hms(2025, 1, 15, 22, 30, 0).unwrap(),
            horas: 4.0,
            fecha_trabajada: None,
            cliente: "PEP-2".to_string(),
            documento_id: 1001,
            area_trabajo: Some("3".to_string()),
            aprobado: ApprovalStatus::Pending,
        }
    }

    #[test]
    fn test_effective_date_prefers_worked_date() {
        let mut report = sample_report();
        assert_eq!(
            report.effective_date(),
            NaiveDate::from_ymd_opt(2025, 1, 15).unwrap()
        );

        report.fecha_trabajada = NaiveDate::from_ymd_opt(2025, 1, 10);
        assert_eq!(
            report.effective_date(),
            NaiveDate::from_ymd_opt(2025, 1, 10).unwrap()
        );
    }

    #[test]
    fn test_patch_changes_keep_declaration_order() {
        let patch = HourReportPatch {
            area_trabajo: Some(Some("9".to_string())),
            horas: Some(2.5),
            documento_id: Some(42),
            ..Default::default()
        };

        let columns: Vec<_> = patch.changes().iter().map(|c| c.column).collect();
        assert_eq!(columns, vec!["horas", "documento_id", "area_trabajo"]);
    }

    #[test]
    fn test_empty_patch_is_rejected() {
        let patch = HourReportPatch::default();
        assert!(patch.is_empty());
        assert_eq!(
            patch.validate(),
            Err(DomainError::Validation(NO_FIELDS_MESSAGE.to_string()))
        );
    }

    #[test]
    fn test_unknown_fields_do_not_count_as_changes() {
        let patch: HourReportPatch =
            serde_json::from_str(r#"{"aprobado": 1, "comentario": "x"}"#).unwrap();
        assert!(patch.is_empty());
    }

    #[test]
    fn test_patch_rejects_non_positive_hours() {
        let patch = HourReportPatch {
            horas: Some(0.0),
            ..Default::default()
        };
        assert!(patch.validate().is_err());

        let patch = HourReportPatch {
            horas: Some(-3.0),
            ..Default::default()
        };
        assert!(patch.validate().is_err());
    }

    #[test]
    fn test_apply_only_touches_supplied_fields() {
        let mut report = sample_report();
        let patch: HourReportPatch = serde_json::from_str(r#"{"horas": 6}"#).unwrap();
        patch.validate().unwrap();
        patch.apply_to(&mut report);

        assert_eq!(report.horas, 6.0);
        assert_eq!(report.cliente, "PEP-2");
        assert_eq!(report.documento_id, 1001);
        assert_eq!(report.area_trabajo.as_deref(), Some("3"));
    }

    #[test]
    fn test_explicit_null_clears_worked_date() {
        let mut report = sample_report();
        report.fecha_trabajada = NaiveDate::from_ymd_opt(2025, 1, 10);

        let json = r#"{"fecha_trabajada": null}"#;
        let patch: HourReportPatch = serde_json::from_str(json).unwrap();
        assert!(patch.validate().is_ok());
        let cleared = FieldChange::new("fecha_trabajada", FieldValue::Null(NullKind::Date));
        assert_eq!(patch.changes(), vec![cleared]);

        patch.apply_to(&mut report);
        assert_eq!(report.fecha_trabajada, None);
        assert_eq!(report.horas, 4.0);
        assert_eq!(report.area_trabajo.as_deref(), Some("3"));
    }

    #[test]
    fn test_new_report_validation() {
        let report = NewHourReport {
            horas: 8.0,
            fecha_trabajada: NaiveDate::from_ymd_opt(2025, 2, 1),
            cliente: "PEP-1".to_string(),
            documento_id: 1,
            area_trabajo: None,
        };
        assert!(report.validate().is_ok());

        let missing_client = NewHourReport {
            cliente: "  ".to_string(),
            ..report.clone()
        };
        assert!(missing_client.validate().is_err());

        let nan_hours = NewHourReport {
            horas: f64::NAN,
            ..report
        };
        assert!(nan_hours.validate().is_err());
    }

    #[test]
    fn test_view_serializes_flat_with_approval_flag() {
        let view = HourReportView {
            report: sample_report(),
            nombre_company: None,
            nombre_area: Some("Soporte".to_string()),
        };
        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["cliente"], "PEP-2");
        assert_eq!(json["aprobado"], 0);
        assert!(json["nombre_company"].is_null());
        assert_eq!(json["nombre_area"], "Soporte");
    }
}
