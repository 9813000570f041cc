pub use client::QuoteRestClient;

mod client;
