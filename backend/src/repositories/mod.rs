//! Database repositories
//!
//! Provides data access layer for database operations.

pub mod account;
pub mod logs;
pub mod report;

pub use account::{AccountRecord, AccountRepository};
pub use logs::{
    CreateMeal, CreateMembership, CreateProgress, CreateWater, CreateWorkout, MealRecord,
    MealRepository, MembershipRecord, MembershipRepository, ProgressRecord, ProgressRepository,
    WaterRecord, WaterRepository, WorkoutRecord, WorkoutRepository,
};
pub use report::{CreateReport, ReportRecord, ReportRepository};
