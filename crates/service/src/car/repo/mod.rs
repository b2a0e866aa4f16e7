//! Concrete `CarRepository` backends.

pub mod memory;
pub mod seaorm;
