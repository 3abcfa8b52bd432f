pub mod config;
pub mod error;
pub mod i18n;
pub mod modal_frame;
pub mod modal_host;
pub mod modal_outlet;
pub mod string_utils;
