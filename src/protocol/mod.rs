mod messages;

pub use messages::{ChatMessage, ChatRequest, ChatResponse, Choice, ChoiceMessage, USER_ROLE};
