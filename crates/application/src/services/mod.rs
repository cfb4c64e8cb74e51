pub mod area_service;
pub mod company_service;
pub mod distribution_service;
pub mod report_service;
pub mod user_service;

pub use area_service::AreaService;
pub use company_service::CompanyService;
pub use distribution_service::DistributionService;
pub use report_service::ReportService;
pub use user_service::UserService;
