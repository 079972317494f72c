//! Общие контракты каталога: записи категорий, вывод типа товара,
//! словари атрибутов, дерево классификации запчастей и DTO фильтра поиска.
//!
//! Все функции чистые и синхронные.

pub mod domain;
pub mod enums;
pub mod shared;
