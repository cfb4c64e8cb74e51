use chrono::NaiveDate;
use domain::report::{DailyHours, HourReport, HourReportView, group_by_date};
use serde::Serialize;

/// State of an operative's hour-logging dashboard
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct OperativeDashboard {
    pub documento_id: i64,
    pub records: Vec<HourReportView>,
    /// Set after a save, cleared by [`OperativeAction::DismissSuccess`]
    pub show_success: bool,
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum OperativeAction {
    RecordsLoaded(Vec<HourReportView>),
    HoursSaved(HourReport),
    DismissSuccess,
    Failed(String),
}

impl OperativeDashboard {
    pub fn new(documento_id: i64) -> Self {
        Self {
            documento_id,
            ..Default::default()
        }
    }

    pub fn reduce(&self, action: OperativeAction) -> Self {
        let mut next = self.clone();
        match action {
            OperativeAction::RecordsLoaded(records) => {
                next.records = records;
                next.error = None;
            }
            OperativeAction::HoursSaved(report) => {
                next.records.insert(0, report.into());
                next.show_success = true;
                next.error = None;
            }
            OperativeAction::DismissSuccess => next.show_success = false,
            OperativeAction::Failed(message) => {
                next.show_success = false;
                next.error = Some(message);
            }
        }
        next
    }

    pub fn total_hours(&self) -> f64 {
        self.records.iter().map(|v| v.report.horas).sum()
    }

    pub fn total_hours_on(&self, day: NaiveDate) -> f64 {
        self.records
            .iter()
            .filter(|v| v.report.effective_date() == day)
            .map(|v| v.report.horas)
            .sum()
    }

    pub fn history(&self) -> Vec<DailyHours> {
        group_by_date(&self.records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use domain::report::ApprovalStatus;

    fn report(id: i32, horas: f64, day: u32) -> HourReport {
        HourReport {
            id,
            created_at: Utc.with_ymd_and_hms(2025, 1, day, 18, 0, 0).unwrap(),
            horas,
            fecha_trabajada: NaiveDate::from_ymd_opt(2025, 1, day),
            cliente: "PEP-1".to_string(),
            documento_id: 345678,
            area_trabajo: None,
            aprobado: ApprovalStatus::Pending,
        }
    }

    #[test]
    fn test_saving_hours_produces_new_snapshot() {
        let initial = OperativeDashboard::new(345678);
        let saved = initial.reduce(OperativeAction::HoursSaved(report(1, 4.0, 10)));

        assert!(initial.records.is_empty());
        assert!(!initial.show_success);
        assert_eq!(saved.records.len(), 1);
        assert!(saved.show_success);

        let dismissed = saved.reduce(OperativeAction::DismissSuccess);
        assert!(!dismissed.show_success);
        assert_eq!(dismissed.records, saved.records);
    }

    #[test]
    fn test_totals() {
        let records: Vec<HourReportView> = vec![
            report(1, 4.0, 10).into(),
            report(2, 2.5, 10).into(),
            report(3, 8.0, 11).into(),
        ];
        let dashboard = OperativeDashboard::new(345678);
        let dashboard = dashboard.reduce(OperativeAction::RecordsLoaded(records));

        assert_eq!(dashboard.total_hours(), 14.5);
        let day = NaiveDate::from_ymd_opt(2025, 1, 10).unwrap();
        assert_eq!(dashboard.total_hours_on(day), 6.5);
        assert_eq!(dashboard.history().len(), 2);
    }

    #[test]
    fn test_failure_keeps_records() {
        let dashboard = OperativeDashboard::new(1)
            .reduce(OperativeAction::RecordsLoaded(vec![report(1, 1.0, 3).into()]))
            .reduce(OperativeAction::Failed("Database error: timeout".to_string()));

        assert_eq!(dashboard.records.len(), 1);
        assert_eq!(dashboard.error.as_deref(), Some("Database error: timeout"));
    }
}
