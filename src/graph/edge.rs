use serde::{Deserialize, Serialize};

/// How a branch option is presented to the end user: either a fixed label
/// ("Yes", "No", ...) or a free-text input with a placeholder.
///
/// Serialized with the `optionType` tag inlined into the edge object. The
/// tagging makes label/placeholder exclusivity structural: switching the
/// variant discards the previously-active field rather than leaving it stale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    tag = "optionType",
    rename_all = "lowercase",
    rename_all_fields = "camelCase"
)]
pub enum EdgeOption {
    Static { label: String },
    Input { input_placeholder: String },
}

impl EdgeOption {
    pub fn static_label(label: impl Into<String>) -> Self {
        EdgeOption::Static {
            label: label.into(),
        }
    }

    pub fn input(placeholder: impl Into<String>) -> Self {
        EdgeOption::Input {
            input_placeholder: placeholder.into(),
        }
    }

    /// The fixed label, when this is a static option.
    pub fn label(&self) -> Option<&str> {
        match self {
            EdgeOption::Static { label } => Some(label),
            EdgeOption::Input { .. } => None,
        }
    }

    /// The input placeholder, when this is an input option.
    pub fn placeholder(&self) -> Option<&str> {
        match self {
            EdgeOption::Static { .. } => None,
            EdgeOption::Input { input_placeholder } => Some(input_placeholder),
        }
    }

    /// Short tag used when deriving edge ids.
    pub(crate) fn id_tag(&self) -> &'static str {
        match self {
            EdgeOption::Static { .. } => "static",
            EdgeOption::Input { .. } => "input",
        }
    }
}

/// A directed connection between two nodes of the same graph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    pub id: String,
    pub source: String,
    pub target: String,
    #[serde(flatten)]
    pub option: EdgeOption,
}

impl Edge {
    pub fn new(
        id: impl Into<String>,
        source: impl Into<String>,
        target: impl Into<String>,
        option: EdgeOption,
    ) -> Self {
        Self {
            id: id.into(),
            source: source.into(),
            target: target.into(),
            option,
        }
    }

    /// True when either endpoint is the given node.
    pub fn touches(&self, node_id: &str) -> bool {
        self.source == node_id || self.target == node_id
    }
}

/// Conventional edge id derived from the endpoints and option kind.
/// Callers must still uniquify against the graph on collision.
pub(crate) fn derive_edge_id(source: &str, target: &str, option: &EdgeOption) -> String {
    format!("e-{}-{}-{}", source, target, option.id_tag())
}
