use super::{OperativeAction, OperativeDashboard};
use domain::report::{ApprovalStatus, HourReport, HourReportView};
use serde::Serialize;

/// A coordinator logs their own hours and reviews everybody else's
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CoordinatorDashboard {
    pub own: OperativeDashboard,
    pub queue: Vec<HourReportView>,
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum CoordinatorAction {
    Own(OperativeAction),
    QueueLoaded(Vec<HourReportView>),
    /// A report came back from approve/reject with its new status
    Reviewed(HourReport),
    Failed(String),
}

impl CoordinatorDashboard {
    pub fn new(documento_id: i64) -> Self {
        Self {
            own: OperativeDashboard::new(documento_id),
            ..Default::default()
        }
    }

    pub fn reduce(&self, action: CoordinatorAction) -> Self {
        let mut next = self.clone();
        match action {
            CoordinatorAction::Own(action) => next.own = self.own.reduce(action),
            CoordinatorAction::QueueLoaded(queue) => {
                next.queue = queue;
                next.error = None;
            }
            CoordinatorAction::Reviewed(report) => {
                if let Some(entry) = next.queue.iter_mut().find(|v| v.report.id == report.id) {
                    entry.report.aprobado = report.aprobado;
                }
                next.error = None;
            }
            CoordinatorAction::Failed(message) => next.error = Some(message),
        }
        next
    }

    pub fn pending_count(&self) -> usize {
        self.queue
            .iter()
            .filter(|v| v.report.aprobado == ApprovalStatus::Pending)
            .count()
    }
}
