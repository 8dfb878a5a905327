//! Navigation and display windowing for statically defined menu trees.
//!
//! Tracks the selected entry of an immutable N-ary menu tree, walks
//! sibling and parent/child relations on behalf of a small fixed-height
//! display, and works out per render pass whether the whole viewport or
//! only the one or two changed rows need repainting. Storage access and
//! the actual drawing stay on the host side behind the
//! [`tree::NodeReader`] and [`display::RowRenderer`] seams.

#![cfg_attr(not(test), no_std)]

pub mod action;
pub mod display;
pub mod engine;
pub mod tree;

pub use action::{Action, MenuControl, NodeCallback};
pub use display::{RowRenderer, RowView};
pub use engine::{Engine, EngineConfig, MAX_MENU_DEPTH, SiblingInfo, locate};
pub use tree::{LinkField, MenuNode, NodeId, NodeReader, RamTree, RegionAccess, RegionTree};
