pub mod config;
pub mod logger;
pub mod search_query;
