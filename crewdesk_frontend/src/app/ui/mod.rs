pub mod posts;
pub mod selector;
