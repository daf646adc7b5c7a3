pub mod common;
pub mod configs;
pub mod pipeline;
pub mod rest;
pub mod server;
pub mod sources;
