//! Callback actions and the control surface handed to node handlers.

use crate::tree::{LinkField, NodeId};

/// Reason a node handler runs. Bit-encoded so hosts can define their
/// own codes in the custom range alongside the built-in ones.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Action(u8);

impl Action {
    /// Selected item was activated while it has no submenu.
    pub const TRIGGER: Self = Self(1 << 0);

    /// Selection is about to leave for the enclosing level. The handler
    /// may return `false` to keep the selection where it is, e.g. while
    /// an edit is still unsaved.
    pub const PARENT: Self = Self(1 << 1);

    /// Node is being drawn as one of the visible rows. Fired once per
    /// visible row on every render pass, not only on selection change.
    pub const DISPLAY: Self = Self(1 << 2);

    /// Base bit of the host-defined range.
    pub const CUSTOM: Self = Self(1 << 7);

    /// Host-defined code tagged into the custom range.
    pub const fn custom(tag: u8) -> Self {
        Self(Self::CUSTOM.0 | tag)
    }

    pub const fn bits(self) -> u8 {
        self.0
    }

    pub const fn from_bits(bits: u8) -> Self {
        Self(bits)
    }

    pub const fn is_custom(self) -> bool {
        self.0 & Self::CUSTOM.0 != 0
    }
}

/// Handler attached to a node.
///
/// Returns whether the default navigation behavior should proceed; only
/// [`Action::PARENT`] consults the result, every other dispatch ignores
/// it.
pub type NodeCallback = fn(Action, &mut dyn MenuControl) -> bool;

/// Engine surface visible to node handlers.
///
/// Handlers run inline on the caller's stack. Calling
/// [`MenuControl::navigate`] from a handler is the supported way to
/// redirect the selection; handlers must not start a render pass.
pub trait MenuControl {
    /// Currently selected node.
    fn current(&self) -> NodeId;

    /// Node that was current before the last navigation.
    fn previous(&self) -> Option<NodeId>;

    /// 1-based rank of the current node among its siblings, as of the
    /// last refresh.
    fn position(&self) -> u8;

    /// Sibling count at the current level, as of the last refresh.
    fn sibling_count(&self) -> u8;

    /// Follow one relation of the current node.
    fn peek(&self, field: LinkField) -> Option<NodeId>;

    /// Move the selection; `None` does nothing.
    fn navigate(&mut self, target: Option<NodeId>);

    /// Ask the next render pass to repaint the whole viewport.
    fn request_full_redraw(&mut self);
}
