pub mod analysis;
pub mod error;
pub mod health;
pub mod index;
pub mod prompts;
pub mod tags;
