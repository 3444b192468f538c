//! Business logic services
//!
//! Services validate input, apply defaults and coordinate repositories.

pub mod account;
pub mod logs;
pub mod report;

pub use account::AccountService;
pub use logs::LogService;
pub use report::ReportService;
