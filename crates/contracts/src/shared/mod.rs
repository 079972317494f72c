pub mod csv_codec;
pub mod search_filter;
pub mod taxonomy;
pub mod vocabulary;
