pub use api::Ui;

mod api;
mod generation;
mod handlers;
mod response;
