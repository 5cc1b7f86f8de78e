pub mod api_utils;
pub mod format;
pub mod icons;
pub mod notify;
