// Library surface for the normalization engine and integration tests.
// Keep this lean to avoid coupling to bin-only rendering in main.rs.
pub mod config;
pub mod duration;
pub mod error;
pub mod form;
pub mod normalize;
pub mod race;
pub mod standards;
