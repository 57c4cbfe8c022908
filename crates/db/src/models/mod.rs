//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts
//! - A `Deserialize` update DTO (all `Option` fields) for patches
//!
//! Read-side joins (`...With...` structs) are composed explicitly in the
//! repositories rather than loaded lazily.

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
