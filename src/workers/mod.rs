//! Background workers that talk to the catalog on behalf of the UI loop

pub mod core;
pub mod fetcher;

pub use self::core::EventSender;
pub use fetcher::{FetchResponse, PageFetcher, PageRequest};
