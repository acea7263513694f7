pub mod aggregate;
pub mod constants;
pub mod engine;
pub mod explode;

pub use aggregate::add_material;
pub use constants::*;
pub use engine::BomEngine;
pub use explode::{
    collect_dough, collect_filling, materials_for_dough, materials_for_filling,
    materials_for_product,
};
