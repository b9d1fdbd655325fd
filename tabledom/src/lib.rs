pub mod element;
pub mod event;
pub mod render;

pub use element::{
    closest, contains, find_all_by_data, find_by_data, find_element, find_element_mut,
    sub_elements, Content, Element, MARKER,
};
pub use event::{Event, EventResult, MouseButton};
pub use render::{escape_html, to_html, HtmlWriter};
