pub mod poll;
pub mod videogen;
#[cfg(feature = "hydrate")]
pub mod web;
