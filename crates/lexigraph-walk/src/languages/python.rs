//! Python grammar via tree-sitter-python.

use lexigraph_core::{Classification, CommonKind};

use crate::grammar::Grammar;

/// Dialect tag for the tree-sitter Python grammar.
pub const NAMESPACE: &str = "python_ts";

/// Python grammar with its classification table.
pub struct PythonGrammar;

impl PythonGrammar {
    pub fn new() -> Self {
        Self
    }
}

impl Default for PythonGrammar {
    fn default() -> Self {
        Self::new()
    }
}

impl Grammar for PythonGrammar {
    fn name(&self) -> &str {
        "python"
    }

    fn namespace(&self) -> &'static str {
        NAMESPACE
    }

    fn extensions(&self) -> &[&str] {
        &["py"]
    }

    fn language(&self) -> tree_sitter::Language {
        tree_sitter_python::LANGUAGE.into()
    }

    fn classify(&self, kind_name: &str) -> Classification {
        classify_python(kind_name)
    }
}

/// The classification table for the Python grammar: one closed match from
/// every supported construct to its coarse category, with a default arm so
/// unknown constructs degrade to the unclassified fallback instead of
/// failing the run.
///
/// Sibling order is significant for every syntactic construct, so
/// `orderable` is uniformly true here; only the synthetic project/dir
/// nodes built by the project walker are unordered.
fn classify_python(kind_name: &str) -> Classification {
    let common_kind = match kind_name {
        // Module roots
        "module" => CommonKind::Mod,

        // Statements: definitions, control flow, imports, exception
        // handling, assignment forms, and their clause/block nodes
        "function_definition"
        | "class_definition"
        | "decorated_definition"
        | "if_statement"
        | "elif_clause"
        | "else_clause"
        | "for_statement"
        | "while_statement"
        | "match_statement"
        | "case_clause"
        | "try_statement"
        | "except_clause"
        | "except_group_clause"
        | "finally_clause"
        | "with_statement"
        | "return_statement"
        | "pass_statement"
        | "break_statement"
        | "continue_statement"
        | "raise_statement"
        | "assert_statement"
        | "delete_statement"
        | "global_statement"
        | "nonlocal_statement"
        | "import_statement"
        | "import_from_statement"
        | "future_import_statement"
        | "print_statement"
        | "exec_statement"
        | "expression_statement"
        | "assignment"
        | "augmented_assignment"
        | "type_alias_statement"
        | "block" => CommonKind::Stmt,

        // Expressions: operators, literals, identifiers, strings and
        // their parts, collections, comprehensions, calls, access forms,
        // suspension/yield forms
        "binary_operator"
        | "boolean_operator"
        | "unary_operator"
        | "not_operator"
        | "comparison_operator"
        | "conditional_expression"
        | "named_expression"
        | "lambda"
        | "await"
        | "yield"
        | "call"
        | "attribute"
        | "subscript"
        | "slice"
        | "list"
        | "set"
        | "tuple"
        | "dictionary"
        | "pair"
        | "list_comprehension"
        | "set_comprehension"
        | "dictionary_comprehension"
        | "generator_expression"
        | "for_in_clause"
        | "if_clause"
        | "parenthesized_expression"
        | "expression_list"
        | "pattern_list"
        | "list_splat"
        | "dictionary_splat"
        | "identifier"
        | "keyword_identifier"
        | "string"
        | "concatenated_string"
        | "string_content"
        | "escape_sequence"
        | "interpolation"
        | "integer"
        | "float"
        | "true"
        | "false"
        | "none"
        | "ellipsis" => CommonKind::Expr,

        // Everything else (parameter/argument lists, decorators, type
        // annotations, import path fragments, match patterns, …)
        _ => CommonKind::Unclassified,
    };

    Classification::new(common_kind, true)
}
