//! The shared node taxonomy: coarse `CommonKind` categories, the
//! `(namespace, kind, orderable)` wire triple, and kind-name normalization.

use serde::{Deserialize, Serialize};

/// Coarse structural category shared across source-language dialects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CommonKind {
    /// Synthetic root for a whole-project run.
    Project,
    /// A directory containing at least one eligible file.
    Dir,
    /// One source file.
    File,
    /// A module root inside a file.
    Mod,
    /// A statement construct.
    Stmt,
    /// An expression construct.
    Expr,
    /// Fallback for constructs the classification table doesn't know.
    Unclassified,
}

impl std::fmt::Display for CommonKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Project => write!(f, "project"),
            Self::Dir => write!(f, "dir"),
            Self::File => write!(f, "file"),
            Self::Mod => write!(f, "mod"),
            Self::Stmt => write!(f, "stmt"),
            Self::Expr => write!(f, "expr"),
            Self::Unclassified => write!(f, "unclassified"),
        }
    }
}

/// The fine-grained classification stamped onto every node.
///
/// `namespace` names the syntax-tree dialect in use (two incompatible
/// grammar revisions of the same language get different namespaces);
/// `kind` is the normalized construct tag; `orderable` states whether
/// sibling order at this node is semantically significant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Kind {
    pub namespace: String,
    pub kind: String,
    pub orderable: bool,
}

impl Kind {
    pub fn new(namespace: &str, kind: impl Into<String>, orderable: bool) -> Self {
        Self {
            namespace: namespace.to_string(),
            kind: kind.into(),
            orderable,
        }
    }
}

/// What a grammar's classification table says about one construct.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification {
    pub common_kind: CommonKind,
    pub orderable: bool,
}

impl Classification {
    pub const fn new(common_kind: CommonKind, orderable: bool) -> Self {
        Self {
            common_kind,
            orderable,
        }
    }
}

/// Normalize a concrete constructor name to the canonical
/// lowercase-with-underscores tag used in emitted `kind.kind` fields.
///
/// Grammar node names that are already snake_case pass through unchanged;
/// CamelCase spellings (e.g. an internal `FunctionDef` tag) gain an
/// underscore at each word boundary.
pub fn normalize_kind_name(raw: &str) -> String {
    let chars: Vec<char> = raw.chars().collect();
    let mut out = String::with_capacity(raw.len() + 4);

    for (i, &c) in chars.iter().enumerate() {
        if c.is_ascii_uppercase() {
            let after_lower = i > 0 && (chars[i - 1].is_ascii_lowercase() || chars[i - 1].is_ascii_digit());
            let before_lower = i + 1 < chars.len() && chars[i + 1].is_ascii_lowercase();
            let after_upper = i > 0 && chars[i - 1].is_ascii_uppercase();
            if after_lower || (after_upper && before_lower) {
                out.push('_');
            }
            out.push(c.to_ascii_lowercase());
        } else {
            out.push(c);
        }
    }

    out
}
