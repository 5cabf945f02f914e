//! Parent/child relationships between cells of different resolutions.

pub mod parent_child;

pub use parent_child::{cell_to_center_child, cell_to_children, cell_to_children_size, cell_to_parent};
