//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods. CRUD
//! methods accept `&PgPool`; ledger steps that must share a transaction
//! accept `&mut PgConnection` (pass `&mut *tx`).

pub mod attendance_repo;
pub mod class_repo;
pub mod equipment_repo;
pub mod feedback_repo;
pub mod maintenance_repo;
pub mod member_class_repo;
pub mod member_repo;
pub mod member_trainer_repo;
pub mod membership_plan_repo;
pub mod payment_repo;
pub mod trainer_attendance_repo;
pub mod trainer_repo;

pub use attendance_repo::AttendanceRepo;
pub use class_repo::ClassRepo;
pub use equipment_repo::EquipmentRepo;
pub use feedback_repo::FeedbackRepo;
pub use maintenance_repo::MaintenanceRepo;
pub use member_class_repo::MemberClassRepo;
pub use member_repo::MemberRepo;
pub use member_trainer_repo::MemberTrainerRepo;
pub use membership_plan_repo::MembershipPlanRepo;
pub use payment_repo::PaymentRepo;
pub use trainer_attendance_repo::TrainerAttendanceRepo;
pub use trainer_repo::TrainerRepo;
