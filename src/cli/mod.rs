pub mod fetch;
pub mod input;
pub mod status;
