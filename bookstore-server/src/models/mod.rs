//! Data types exchanged between the HTTP surface and the repository

pub mod book;

pub use book::{Book, CreateBookRequest};
