pub mod export;
pub mod prompts;
pub mod render;

pub use export::{export_materials, write_csv, write_json};
pub use prompts::{prompt_count, prompt_product, suggest};
pub use render::{display_catalog, display_materials, display_suggestions};
