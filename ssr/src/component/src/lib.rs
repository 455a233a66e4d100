pub mod buttons;
pub mod spinner;
pub mod toggle;
