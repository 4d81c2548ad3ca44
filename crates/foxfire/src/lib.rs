#![doc = include_str!("../README.md")]

mod config;
pub mod content;
pub mod html;
pub mod markdown;
pub mod permalink;
pub mod render;
mod site;
pub mod storage;

pub use config::*;
pub use site::*;
