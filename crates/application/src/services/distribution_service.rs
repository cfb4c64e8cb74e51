use chrono::NaiveDate;
use domain::Result;
use domain::company::CompanyRepository;
use domain::distribution::{DateRange, DistributionError, PayrollDistribution, aggregate};
use domain::report::HourReportRepository;
use domain::user::UserRepository;
use std::sync::Arc;
use tracing::{debug, info};

/// Builds payroll distributions from the current store contents
pub struct DistributionService {
    reports: Arc<dyn HourReportRepository>,
    companies: Arc<dyn CompanyRepository>,
    users: Arc<dyn UserRepository>,
}

impl DistributionService {
    pub fn new(
        reports: Arc<dyn HourReportRepository>,
        companies: Arc<dyn CompanyRepository>,
        users: Arc<dyn UserRepository>,
    ) -> Self {
        Self {
            reports,
            companies,
            users,
        }
    }

    /// Range from optional bounds; a missing bound takes the matching end of
    /// the month containing `today`.
    pub fn resolve_range(
        from: Option<NaiveDate>,
        to: Option<NaiveDate>,
        today: NaiveDate,
    ) -> Result<DateRange> {
        let month = DateRange::month_of(today);
        Ok(DateRange::new(
            from.unwrap_or(month.from()),
            to.unwrap_or(month.to()),
        )?)
    }

    /// `None` when the range holds no approved reports
    pub async fn generate(&self, range: DateRange) -> Result<Option<PayrollDistribution>> {
        let (reports, companies, users) = tokio::try_join!(
            self.reports.find_all(),
            self.companies.find_all(),
            self.users.find_all(),
        )?;
        debug!(
            reports = reports.len(),
            companies = companies.len(),
            users = users.len(),
            "Aggregating payroll distribution"
        );

        let reports: Vec<_> = reports.into_iter().map(|view| view.report).collect();
        match aggregate(range, &reports, &companies, &users) {
            Ok(distribution) => {
                info!(
                    from = %range.from(),
                    to = %range.to(),
                    companies = distribution.companies.len(),
                    grand_total = distribution.grand_total,
                    "Payroll distribution generated"
                );
                Ok(Some(distribution))
            }
            Err(DistributionError::NoApprovedRecords { .. }) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }
}
