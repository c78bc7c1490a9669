pub mod api;
pub mod assemble;
pub mod bootstrap;
pub mod element;
pub mod fetch;
pub mod models;
pub mod page;
pub mod refresh;
pub mod toggle;

pub use api::ApiClient;
pub use page::Page;
