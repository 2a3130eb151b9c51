//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument. Every method is a single
//! autocommit statement.

pub mod family_repo;
pub mod monster_repo;

pub use family_repo::FamilyRepo;
pub use monster_repo::MonsterRepo;
