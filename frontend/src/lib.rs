#![allow(non_snake_case)]
pub mod app;
pub mod components;
pub mod pages;
pub mod platform;
pub mod router;
pub mod utils;
