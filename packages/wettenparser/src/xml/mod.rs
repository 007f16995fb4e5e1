//! XML utilities.

mod utils;

pub use utils::{
    element_children, find_by_path, find_child, find_children, get_tag_name, has_tag,
    header_text,
};
