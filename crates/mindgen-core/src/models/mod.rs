pub mod label;
pub mod plan;
pub mod record;
