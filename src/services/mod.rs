pub mod analytics;
pub mod calendar;
pub mod catalog;
pub mod chat;
pub mod chatbot;
