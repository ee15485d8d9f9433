pub mod cleanup;
pub mod update;
