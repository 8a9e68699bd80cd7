//! Service layer for business logic and orchestration.
//!
//! Services sit between the gateway layer (event handlers and slash commands) and the data
//! layer. They hold the rules of each feature, coordinate repository calls and own the
//! delayed work scheduled through the [`timer::TimerRegistry`].

pub mod camera;
pub mod notifier;
pub mod pomodoro;
pub mod reaction_role;
pub mod rollup;
pub mod stats;
pub mod timer;
pub mod voice_session;
