pub mod chat;

pub use chat::{AvailabilityState, ChatBatch, ChatRecord, SaveResponse};
