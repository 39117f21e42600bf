/// Width used when an image node omits a usable `width`.
pub const DEFAULT_IMAGE_WIDTH: u32 = 200;
/// Height used when an image node omits a usable `height`.
pub const DEFAULT_IMAGE_HEIGHT: u32 = 200;

/// One node of a normalized schema tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SchemaNode {
    /// Leaf requesting a named kind of fake value.
    Scalar(String),
    /// Nested record; fields keep declaration order.
    Object(Vec<Field>),
    /// Randomly sized sequence of independently generated elements.
    Array(ArraySpec),
    /// Leaf producing a pseudo-image reference URL.
    Image(ImageSpec),
}

/// Named member of an object node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub name: String,
    pub node: SchemaNode,
}

/// Array node bounds and element schema.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArraySpec {
    /// Inclusive lower bound on the element count.
    pub min_size: usize,
    /// Inclusive upper bound on the element count; never below `min_size`.
    pub max_size: usize,
    pub element: Box<SchemaNode>,
}

/// Image node parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageSpec {
    pub width: u32,
    pub height: u32,
    /// Accepted and preserved, but not used to pick an image source.
    pub category: String,
}

impl Default for ImageSpec {
    fn default() -> Self {
        Self {
            width: DEFAULT_IMAGE_WIDTH,
            height: DEFAULT_IMAGE_HEIGHT,
            category: String::new(),
        }
    }
}

impl SchemaNode {
    /// Convenience constructor for scalar leaves.
    pub fn scalar(tag: impl Into<String>) -> Self {
        SchemaNode::Scalar(tag.into())
    }

    /// Convenience constructor for object nodes.
    pub fn object<I, S>(fields: I) -> Self
    where
        I: IntoIterator<Item = (S, SchemaNode)>,
        S: Into<String>,
    {
        SchemaNode::Object(
            fields
                .into_iter()
                .map(|(name, node)| Field {
                    name: name.into(),
                    node,
                })
                .collect(),
        )
    }

    /// Number of node levels from this node down to its deepest leaf.
    ///
    /// A lone leaf has depth 1; an empty object also has depth 1.
    pub fn depth(&self) -> usize {
        match self {
            SchemaNode::Scalar(_) | SchemaNode::Image(_) => 1,
            SchemaNode::Object(fields) => {
                1 + fields
                    .iter()
                    .map(|field| field.node.depth())
                    .max()
                    .unwrap_or(0)
            }
            SchemaNode::Array(spec) => 1 + spec.element.depth(),
        }
    }
}
