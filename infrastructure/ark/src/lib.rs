pub mod client;
pub mod comparison;
pub mod response;
pub mod retry;
pub mod transport;
pub mod vision_extractor;

#[cfg(test)]
mod testing;
