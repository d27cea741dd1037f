pub mod base;
pub mod enums;
