//! Domain models and parameter types.
//!
//! Domain models are converted from entity models at the repository boundary and are what
//! services and command handlers work with. They also hold the pure decision logic (voice
//! transition classification, rollup boundaries, pomodoro progress) so it can be tested
//! without a database or a gateway connection.

pub mod camera;
pub mod pomodoro;
pub mod reaction_role;
pub mod rollup;
pub mod time_activity;
