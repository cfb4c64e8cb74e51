mod approval;
mod entity;
mod history;
mod repository;

pub use approval::ApprovalStatus;
pub use entity::{HourReport, HourReportPatch, HourReportView, NewHourReport};
pub use history::{DailyHours, group_by_date};
pub use repository::HourReportRepository;
#[cfg(any(test, feature = "mocks"))]
pub use repository::MockHourReportRepository;
