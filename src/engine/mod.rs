//! Navigation state machine and display windowing over a menu tree.

use log::debug;

use crate::{
    action::{Action, MenuControl},
    display::{RowRenderer, RowView},
    tree::{LinkField, NodeId, NodeReader},
};

/// Deepest menu nesting [`Engine::path_from_root`] reports.
pub const MAX_MENU_DEPTH: usize = 8;

/// Sibling rank of one node. `position` is 1-based.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct SiblingInfo {
    pub position: u8,
    pub count: u8,
}

/// Host-tunable engine behavior.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct EngineConfig {
    /// Dispatch [`Action::DISPLAY`] on the node that just became
    /// current at the end of every successful navigation.
    pub announce_selection: bool,
}

/// Menu navigation engine over one immutable tree.
///
/// Owns the selection state and decides, per render pass, which
/// viewport rows actually need repainting. One engine is driven by one
/// input and render loop; handlers it dispatches run inline on that
/// loop's stack.
pub struct Engine<R: NodeReader> {
    reader: R,
    config: EngineConfig,
    current: NodeId,
    previous: Option<NodeId>,
    position: u8,
    sibling_count: u8,
    viewport_start: u8,
    force_full_redraw: bool,
}

impl<R> Engine<R>
where
    R: NodeReader,
{
    /// Engine focused on `start`, typically the first child of the
    /// tree's root entry.
    pub fn new(reader: R, start: NodeId) -> Self {
        Self::with_config(reader, start, EngineConfig::default())
    }

    pub fn with_config(reader: R, start: NodeId, config: EngineConfig) -> Self {
        Self {
            reader,
            config,
            current: start,
            previous: None,
            position: 0,
            sibling_count: 0,
            viewport_start: 0,
            force_full_redraw: true,
        }
    }

    pub fn reader(&self) -> &R {
        &self.reader
    }

    /// Currently selected node.
    pub fn current(&self) -> NodeId {
        self.current
    }

    /// Node that was current before the last navigation.
    pub fn previous(&self) -> Option<NodeId> {
        self.previous
    }

    /// 1-based sibling rank of the current node, `0` until the first
    /// render pass refreshes it.
    pub fn position(&self) -> u8 {
        self.position
    }

    /// Sibling count at the current level, `0` until the first render
    /// pass refreshes it.
    pub fn sibling_count(&self) -> u8 {
        self.sibling_count
    }

    /// Label of the currently selected node.
    pub fn current_label(&self) -> &str {
        self.reader.label(self.current)
    }

    /// Follow one relation of the current node.
    pub fn peek(&self, field: LinkField) -> Option<NodeId> {
        self.reader.link(self.current, field)
    }

    /// Ask the next render pass to repaint the whole viewport.
    pub fn request_full_redraw(&mut self) {
        self.force_full_redraw = true;
    }

    /// Chain of nodes from the outermost level down to the current one.
    ///
    /// Levels past [`MAX_MENU_DEPTH`] nearest the root are dropped.
    pub fn path_from_root(&self) -> heapless::Vec<NodeId, MAX_MENU_DEPTH> {
        let mut path: heapless::Vec<NodeId, MAX_MENU_DEPTH> = heapless::Vec::new();
        let mut cursor = Some(self.current);

        while let Some(node) = cursor {
            if path.push(node).is_err() {
                break;
            }
            cursor = self.reader.link(node, LinkField::Parent);
        }

        path.reverse();
        path
    }
}

include!("navigate.rs");
include!("render.rs");
