pub mod health;
pub mod nihss;
pub mod scan;
pub mod tpa;
pub mod visits;
