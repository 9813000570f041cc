pub use server::{router, run};

mod html;
mod server;
