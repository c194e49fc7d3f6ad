// tests/support/mocks/mod.rs
#![allow(dead_code)]
#![allow(unused_imports)]

pub mod items;
pub mod repos;

pub use items::{Item, ReversedItem};
pub use repos::{InMemoryRepo, Keyed};
