//! Grammar registry.
//!
//! Each supported language implements the `Grammar` trait and is
//! registered here.

pub mod python;

use crate::grammar::Grammar;

/// Returns all available grammars.
pub fn all_grammars() -> Vec<Box<dyn Grammar>> {
    vec![Box::new(python::PythonGrammar::new())]
}

/// Find the grammar for a given file extension.
pub fn grammar_for_extension(ext: &str) -> Option<Box<dyn Grammar>> {
    all_grammars()
        .into_iter()
        .find(|grammar| grammar.extensions().contains(&ext))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_python_grammar() {
        let grammar = grammar_for_extension("py");
        assert!(grammar.is_some());
        assert_eq!(grammar.unwrap().name(), "python");
    }

    #[test]
    fn returns_none_for_unknown() {
        assert!(grammar_for_extension("xyz").is_none());
    }

    #[test]
    fn namespaces_are_distinct() {
        let grammars = all_grammars();
        let mut namespaces: Vec<_> = grammars.iter().map(|g| g.namespace()).collect();
        namespaces.sort_unstable();
        namespaces.dedup();
        assert_eq!(namespaces.len(), grammars.len());
    }
}
