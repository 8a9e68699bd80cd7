//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Each entity has its own factory module with both a
//! `Factory` struct for customization and a `create_*` convenience function for quick
//! default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let record = factory::create_time_activity(&db).await?;
//!
//!     // Customize
//!     let record = factory::time_activity::TimeActivityFactory::new(&db)
//!         .server_id("S1")
//!         .hours(2.0)
//!         .build()
//!         .await?;
//!
//!     Ok(())
//! }
//! ```

pub mod camera_channel;
pub mod guild_settings;
pub mod helpers;
pub mod pomodoro_session;
pub mod reaction_role;
pub mod time_activity;

pub use camera_channel::create_camera_channel;
pub use guild_settings::create_guild_settings;
pub use pomodoro_session::create_pomodoro_session;
pub use reaction_role::create_reaction_role;
pub use time_activity::create_time_activity;
