pub mod attendance;
pub mod class;
pub mod enrollment;
pub mod equipment;
pub mod feedback;
pub mod maintenance;
pub mod member;
pub mod membership_plan;
pub mod payment;
pub mod trainer;
pub mod trainer_attendance;
