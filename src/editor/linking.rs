use std::fmt;

/// Which branch option a two-click edge creation will carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BranchVariant {
    Yes,
    No,
}

impl BranchVariant {
    /// The static label the committed edge carries.
    pub fn label(self) -> &'static str {
        match self {
            BranchVariant::Yes => "Yes",
            BranchVariant::No => "No",
        }
    }
}

impl fmt::Display for BranchVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// The two-click edge-creation mode. Exactly one state holds at any time,
/// and the UI surfaces [`prompt`](LinkMode::prompt) so the user always knows
/// which click is expected next.
///
/// Kept as an explicit machine rather than boolean flags: node clicks are
/// routed through it while active, while double-click property editing stays
/// independent of it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LinkMode {
    #[default]
    Idle,
    /// The next node click chooses the edge's source.
    AwaitingSource { variant: BranchVariant },
    /// The next click on a node other than `source` chooses the target and
    /// commits the edge. Clicking `source` again is a no-op, which is how
    /// self-loops are kept out of the two-click flow.
    AwaitingTarget {
        variant: BranchVariant,
        source: String,
    },
}

impl LinkMode {
    pub fn is_active(&self) -> bool {
        !matches!(self, LinkMode::Idle)
    }

    /// User-facing text naming the click expected next, or `None` when idle.
    pub fn prompt(&self) -> Option<String> {
        match self {
            LinkMode::Idle => None,
            LinkMode::AwaitingSource { variant } => Some(format!(
                "Click the node the {} option branches from",
                variant.label()
            )),
            LinkMode::AwaitingTarget { variant, .. } => Some(format!(
                "Click the node the {} option leads to",
                variant.label()
            )),
        }
    }
}

/// What a node click did to the edge-creation machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkClick {
    /// The machine was idle; the click is an ordinary selection click.
    NotLinking,
    /// The clicked node was taken as the edge's source.
    SourceChosen,
    /// The edge was committed and the machine reset to idle.
    EdgeCreated { edge_id: String },
    /// The click was swallowed without effect (same node as the source, or a
    /// stale id); the machine state is unchanged.
    Ignored,
}
