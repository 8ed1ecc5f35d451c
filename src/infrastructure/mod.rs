//! Infrastructure: item source loading

mod item_loader;

pub use item_loader::load_items;
