//! ProductService integration tests over the in-memory store.

mod properties;
mod scenarios;
