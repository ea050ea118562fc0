//! Text transforms over description HTML.
//!
//! Every function takes an HTML fragment and returns a new one; nothing here
//! keeps state between calls beyond compiled patterns.
//! - [`formatting`]: flatten and pretty-print
//! - [`tags`]: regex-level tag, header, paragraph and break rewrites
//! - [`markdown`]: Markdown to HTML
//! - [`steam`]: storefront "About the Game" header removal
//! - [`images`]: image centering and size styles (DOM-level)
//! - [`image_insert`]: snippet builder for image insertion

pub mod formatting;
pub mod image_insert;
pub mod images;
pub mod markdown;
pub mod steam;
pub mod tags;

pub use formatting::{
    html_format, html_format_remove, html_format_remove_with_indent, html_format_with_indent,
};
pub use image_insert::{
    ImageInsertion, ImagePlacement, ImageSizing, build_image_html, parse_size_input,
    sanitize_size_input,
};
pub use images::{add_100_percent_style, center_image, remove_size_style};
pub use markdown::markdown_to_html;
pub use steam::{ABOUT_GAME_HEADERS, steam_remove_about};
pub use tags::{br_br_to_p, br_remove, header_to_bold, paragraph_remove, remove_tag, strip_tag};
