pub mod alignment;
pub mod app;
pub mod clipboard;
pub mod config;
mod runner;
pub mod seq;
pub mod ui;
pub mod errors;

use crate::errors::SeqPairError;

pub fn run() -> Result<(), SeqPairError> {
    runner::run()
}
