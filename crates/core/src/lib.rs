//! `stockroom-core` — shared vocabulary of the catalog: the error taxonomy
//! and the validated identifier newtypes. Carries no catalog logic and no
//! IO; everything here is plain data plus validation.

pub mod error;
pub mod id;

pub use error::{CatalogError, CatalogResult};
pub use id::{CategoryName, ProductId};
