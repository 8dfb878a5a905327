/// Rank `node` among the children of its parent.
///
/// Walks the sibling list once, so cost is linear in the sibling count,
/// which menu layouts keep near the viewport size. A node without a
/// parent link counts as its whole level.
pub fn locate<R: NodeReader>(reader: &R, node: NodeId) -> SiblingInfo {
    let Some(parent) = reader.link(node, LinkField::Parent) else {
        return SiblingInfo {
            position: 1,
            count: 1,
        };
    };

    let mut count: u8 = 0;
    let mut position: u8 = 0;
    let mut cursor = reader.link(parent, LinkField::Child);

    while let Some(sibling) = cursor {
        count = count.saturating_add(1);
        if sibling == node {
            position = count;
        }
        cursor = reader.link(sibling, LinkField::Next);
    }

    debug_assert!(position != 0, "node missing from its parent's child list");

    // A miss means the sibling links are inconsistent; pin the rank
    // into range instead of handing 0 to the window arithmetic.
    let count = count.max(1);
    SiblingInfo {
        position: position.clamp(1, count),
        count,
    }
}

impl<R> Engine<R>
where
    R: NodeReader,
{
    /// Move the selection to `target`; `None` does nothing.
    ///
    /// Moving to the parent of the current item first offers that
    /// item's handler the chance to veto the exit.
    pub fn navigate(&mut self, target: Option<NodeId>) {
        let Some(target) = target else {
            return;
        };

        if Some(target) == self.reader.link(self.current, LinkField::Parent) {
            if !self.dispatch_on(Action::PARENT, self.current) {
                debug!(
                    "menu-nav: exit to parent vetoed at node={}",
                    self.current.index()
                );
                return;
            }
            self.force_full_redraw = true;
        }

        let left = self.current;
        self.previous = Some(left);
        self.current = target;
        debug!(
            "menu-nav: current={} previous={}",
            target.index(),
            left.index()
        );

        if self.config.announce_selection {
            let _ = self.dispatch_on(Action::DISPLAY, self.current);
        }
    }

    /// Activate the current item: descend into its submenu when it has
    /// one, fire its trigger handler otherwise.
    pub fn invoke(&mut self) {
        match self.reader.link(self.current, LinkField::Child) {
            Some(child) => {
                debug!("menu-nav: descend into node={}", child.index());
                self.navigate(Some(child));
                self.force_full_redraw = true;
            }
            None => {
                let _ = self.dispatch_on(Action::TRIGGER, self.current);
            }
        }
    }

    /// Dispatch `action` on the current node and return the handler's
    /// continuation flag.
    pub fn dispatch(&mut self, action: Action) -> bool {
        self.dispatch_on(action, self.current)
    }

    /// Nodes without a handler never object.
    fn dispatch_on(&mut self, action: Action, node: NodeId) -> bool {
        let Some(callback) = self.reader.callback(node) else {
            return true;
        };
        callback(action, self)
    }
}

impl<R> MenuControl for Engine<R>
where
    R: NodeReader,
{
    fn current(&self) -> NodeId {
        self.current
    }

    fn previous(&self) -> Option<NodeId> {
        self.previous
    }

    fn position(&self) -> u8 {
        self.position
    }

    fn sibling_count(&self) -> u8 {
        self.sibling_count
    }

    fn peek(&self, field: LinkField) -> Option<NodeId> {
        self.reader.link(self.current, field)
    }

    fn navigate(&mut self, target: Option<NodeId>) {
        Engine::navigate(self, target);
    }

    fn request_full_redraw(&mut self) {
        self.force_full_redraw = true;
    }
}
