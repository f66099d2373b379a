//! Core domain logic for the recipes service.
//!
//! Everything in this crate is pure: domain types, validation, filter
//! construction and patch application. I/O lives in the `recipes` binary,
//! which implements the [`storage::RecipeRepository`] trait for each backend.

pub mod filter;
pub mod patch;
pub mod recipe;
pub mod storage;
