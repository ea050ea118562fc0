pub mod constants;
pub mod string_utils;
pub mod url_utils;

pub use constants::*;
pub use string_utils::{char_byte_offset, slice_chars};
pub use url_utils::is_well_formed_url;
