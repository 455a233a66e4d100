pub mod generation;
#[cfg(feature = "ssr")]
pub mod server;
