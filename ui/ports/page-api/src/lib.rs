pub use api::*;

mod api;
