//! Domain models
//!
//! This module contains all domain models used throughout the application.

pub mod codeforces;
pub mod contest;
pub mod problem;
pub mod settings;
pub mod student;

pub use codeforces::*;
pub use contest::*;
pub use problem::*;
pub use settings::*;
pub use student::*;
