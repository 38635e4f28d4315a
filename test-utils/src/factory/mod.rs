//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Factories automatically handle dependencies and foreign
//! key relationships, making tests more concise and maintainable.
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
//!     let admin = factory::user::create_admin(&db).await?;
//!     let (mentor_user, mentor) = factory::mentor::create_mentor(&db).await?;
//!
//!     // Create a mentee already assigned to the mentor
//!     let (mentee_user, mentee) = factory::mentee::MenteeFactory::new(&db)
//!         .mentor_id(Some(mentor.id))
//!         .build()
//!         .await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Available Factories
//!
//! - `user` - Create bare user entities of any role
//! - `mentor` - Create a mentor user together with its mentor row
//! - `mentee` - Create a mentee user together with its mentee row
//! - `subject` - Create subject entities
//! - `academic_record` - Create academic records for a mentee and subject
//! - `helpers` - Shared ID generation and multi-entity helpers

pub mod academic_record;
pub mod helpers;
pub mod mentee;
pub mod mentor;
pub mod subject;
pub mod user;

pub use academic_record::create_record;
pub use mentee::{create_mentee, create_mentee_for};
pub use mentor::create_mentor;
pub use subject::create_subject;
pub use user::{create_admin, create_user};
