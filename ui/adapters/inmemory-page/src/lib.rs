pub use page::InMemoryPage;

mod page;
