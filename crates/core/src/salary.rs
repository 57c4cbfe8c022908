//! Trainer salary calculator.
//!
//! A trainer earns a revenue share from the classes they teach plus a fixed
//! rate per lesson. Both parts are multiplied by the trainer's `lesson`
//! counter, which is the same counter trainer check-in increments.

use serde::Serialize;

/// Fraction of each class's revenue (`members * price`) credited to the trainer.
pub const CLASS_REVENUE_SHARE: f64 = 0.10;

/// The two class columns the calculator reads.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClassShare {
    pub num_of_member: i32,
    pub price: Option<i32>,
}

/// Salary report returned by `GET /trainers/{id}/salary`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SalaryReport {
    pub salary_of_classes: f64,
    pub fixed_salary: f64,
    pub total_salary: f64,
}

/// Average revenue share per class.
///
/// Classes with no members or no price contribute nothing but still count
/// towards the divisor. With no classes at all the result is zero.
pub fn salary_per_lesson(classes: &[ClassShare]) -> f64 {
    let total: f64 = classes
        .iter()
        .filter_map(|c| match c.price {
            Some(price) if c.num_of_member != 0 && price != 0 => {
                Some(f64::from(c.num_of_member) * f64::from(price) * CLASS_REVENUE_SHARE)
            }
            _ => None,
        })
        .sum();
    total / classes.len().max(1) as f64
}

/// Compute a trainer's salary from their classes, lesson counter and fixed rate.
pub fn compute_salary(classes: &[ClassShare], lesson: i32, fixed_salary: i32) -> SalaryReport {
    let lessons = f64::from(lesson);
    let salary_of_classes = lessons * salary_per_lesson(classes);
    let fixed = f64::from(fixed_salary) * lessons;
    SalaryReport {
        salary_of_classes,
        fixed_salary: fixed,
        total_salary: salary_of_classes + fixed,
    }
}
