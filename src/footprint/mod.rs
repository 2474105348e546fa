//! 탄소 발자국 계산 모듈 모음.

pub mod advice;
pub mod chart;
pub mod estimator;
pub mod factors;

pub use advice::*;
pub use chart::*;
pub use estimator::*;
pub use factors::*;
