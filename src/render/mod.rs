//! Page rendering.
//!
//! Each page type is a pure function of (store, aggregate view, config
//! knobs) with no cross-page state. Conditional content is ordinary control
//! flow over optional record fields; page shells use a minimal `{{ ident }}`
//! placeholder syntax expanded from explicit contexts.

mod format;
mod index_page;
mod name_page;
mod overview_page;
mod table;
mod tag_page;
mod template;

pub use index_page::render_index_page;
pub use name_page::render_name_page;
pub use overview_page::render_overview_page;
pub use tag_page::render_tag_page;
pub use template::TemplateError;
