//! Direct edits to an addon package
//!
//! Small operations that change one file at a time: adding recipes,
//! replacing JSON text and managing PNG textures.

pub mod json;
pub mod recipe;
pub mod texture;

pub use json::set_json_file;
pub use recipe::{RECIPES_FOLDER, add_recipe, default_recipe_file_name};
pub use texture::{
    TextureFile, TextureFolder, add_texture, extract_texture, list_textures, remove_texture,
    replace_texture, texture_tree,
};
