pub mod dictionary;
pub mod error;
pub mod normalize;
pub mod plan;
pub mod resolver;
pub mod scheduler;
pub mod wordlist;

#[cfg(test)]
mod testing;

pub use dictionary::{ConnectionError, DictionaryBackend, Lookup, NotFoundReason};
pub use error::InvalidRequest;
pub use normalize::normalize;
pub use plan::{FetchPlan, parse_languages};
pub use resolver::{RetryPolicy, resolve};
pub use scheduler::FetchScheduler;
pub use wordlist::{normalize_set, prepare_words};
