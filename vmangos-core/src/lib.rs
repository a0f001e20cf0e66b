//! Core library for converting WoWEmu world dumps into VMaNGOS SQL.

pub mod blocks;
pub mod config;
pub mod converter;
pub mod emitter;
pub mod error;
pub mod file_utils;
pub mod models;
pub mod properties;
pub mod sql;

pub use config::ConverterConfig;
pub use converter::{collect_records, convert_file};
pub use error::{ConvertError, Result};
