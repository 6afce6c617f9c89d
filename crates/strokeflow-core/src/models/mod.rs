pub mod eligibility;
pub mod nihss;
pub mod visit;
