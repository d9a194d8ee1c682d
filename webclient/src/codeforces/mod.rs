mod client;
mod helper;
mod urls;

pub use client::CodeforcesClient;
