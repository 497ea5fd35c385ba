pub mod client;

pub use client::HttpUserDirectory;
