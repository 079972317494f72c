//! Общие типы и трейты сущностей каталога

pub mod aggregate_id;

pub use aggregate_id::AggregateId;
