pub mod credential;
pub mod token;
pub mod webutils;
