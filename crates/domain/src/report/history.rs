use super::HourReportView;
use chrono::NaiveDate;
use serde::Serialize;
use std::collections::BTreeMap;

/// Reports of a single day with their summed hours
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailyHours {
    pub fecha: NaiveDate,
    pub total_horas: f64,
    pub reportes: Vec<HourReportView>,
}

/// Groups reports by effective date, newest day first. Reports inside a day
/// keep their input order.
pub fn group_by_date(reports: &[HourReportView]) -> Vec<DailyHours> {
    let mut days: BTreeMap<NaiveDate, Vec<HourReportView>> = BTreeMap::new();
    for view in reports {
        days.entry(view.report.effective_date())
            .or_default()
            .push(view.clone());
    }

    days.into_iter()
        .rev()
        .map(|(fecha, reportes)| DailyHours {
            fecha,
            total_horas: reportes.iter().map(|v| v.report.horas).sum(),
            reportes,
        })
        .collect()
}
