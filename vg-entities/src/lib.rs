#![deny(missing_debug_implementations)]
#![deny(rustdoc::broken_intra_doc_links)]
#![cfg_attr(test, deny(warnings))]

//! # vg-entities
//!
//! Reusable, agnostic domain entities for the Venice Guide.
//!
//! The entities only contain generic functionality that does not reveal any application-specific business logic.

pub mod email;
pub mod favorite;
pub mod geo;
pub mod id;
pub mod item;
pub mod location;
pub mod password;
pub mod price;
pub mod recommendation;
pub mod review;
pub mod route;
pub mod time;
pub mod user;
pub mod weather;

#[cfg(any(test, feature = "builders"))]
pub mod builders;
