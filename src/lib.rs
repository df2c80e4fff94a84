// Library surface for the binary and for headless/integration tests.
pub mod config;
pub mod error;
pub mod factory;
pub mod game;
pub mod input;
pub mod operation;
pub mod random;
pub mod record;
pub mod ui;
