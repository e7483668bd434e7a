pub mod block;
pub mod cache;
pub mod identifier;
pub mod page;
pub mod property;
pub mod render;
pub mod rich_text;

pub use block::Block;
pub use cache::{Cache, MemoryCache, TitleCache};
pub use identifier::{is_page_id, normalize_page_id};
pub use page::{Page, PageError};
pub use property::{Property, PropertyValue, TextMode};
pub use render::{to_markdown, to_plain_text};
pub use rich_text::{Annotations, RichText};
