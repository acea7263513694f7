pub mod bom;
pub mod cli;
pub mod error;
pub mod interface;
pub mod models;
pub mod store;

pub use bom::BomEngine;
pub use error::{BomError, Result};
pub use models::{MaterialEntry, MaterialMap};
