//! # listsort-core
//!
//! Core crate for listsort. Contains the sort-token model, the token codec,
//! the sort-link builder, the pagination adapter and its model registry,
//! configuration schemas, and the unified error system.
//!
//! This crate has **no** dependency on a web framework; `listsort-api`
//! wires it into Axum.

pub mod codec;
pub mod config;
pub mod error;
pub mod link;
pub mod memory;
pub mod paginate;
pub mod registry;
pub mod result;
pub mod traits;
pub mod types;

pub use codec::{Base64Codec, SortCodec, TokenCodec};
pub use error::AppError;
pub use link::{LinkOptions, LinkRenderer, SortLink, SortLinkBuilder};
pub use memory::MemorySource;
pub use paginate::{ModelRef, PaginationAdapter};
pub use registry::{Listing, ModelRegistry, SortColumn};
pub use result::AppResult;
