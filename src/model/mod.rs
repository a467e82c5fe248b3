pub mod conversation;
pub mod index;
pub mod personality;
pub mod request_state;
pub mod search;
pub mod upload;
