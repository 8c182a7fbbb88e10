pub mod html;
pub mod text;

pub use html::{escape_html, render_html};
pub use text::render_text;
