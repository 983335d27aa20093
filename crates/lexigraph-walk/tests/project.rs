//! End-to-end invariants of the emitted node stream.

use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::{Path, PathBuf};

use lexigraph_core::{CommonKind, GraphNode, WalkConfig};
use lexigraph_walk::{JsonLinesEmitter, NodeBuffer, ProjectWalker};

/// Lay out the standard fixture project under a fresh temp directory.
fn fixture_project(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(name);
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(dir.join("pkg")).unwrap();
    fs::create_dir_all(dir.join("empty").join("inner")).unwrap();

    fs::write(dir.join("main.py"), b"x = 1\n\ndef top(a):\n    return a\n").unwrap();
    fs::write(
        dir.join("pkg").join("util.py"),
        b"def helper(b):\n    return b + 1\n",
    )
    .unwrap();
    fs::write(dir.join("pkg").join("data.txt"), b"not source\n").unwrap();
    fs::write(
        dir.join("empty").join("inner").join("readme.txt"),
        b"no source here\n",
    )
    .unwrap();

    dir
}

fn walk_fixture(name: &str, trunk: &str, changed: &[String]) -> (Vec<GraphNode>, PathBuf) {
    let dir = fixture_project(name);
    let mut buffer = NodeBuffer::new();
    let walker =
        ProjectWalker::new(&dir, trunk, changed, WalkConfig::default(), &mut buffer).unwrap();
    walker.run().unwrap();
    (buffer.nodes, dir)
}

fn run_to_bytes(dir: &Path, trunk: &str) -> Vec<u8> {
    let mut emitter = JsonLinesEmitter::new(Vec::new());
    let walker =
        ProjectWalker::new(dir, trunk, &[], WalkConfig::default(), &mut emitter).unwrap();
    walker.run().unwrap();
    emitter.flush().unwrap();
    emitter.into_inner()
}

fn filename(node: &GraphNode) -> &str {
    &node.properties["filename"].value
}

#[test]
fn keys_are_unique_within_a_run() {
    let (nodes, dir) = walk_fixture("lexigraph_it_unique", "7", &[]);
    let mut seen = HashSet::new();
    for node in &nodes {
        assert!(seen.insert(node.key.clone()), "duplicate key {}", node.key);
    }
    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn parents_are_emitted_strictly_before_children() {
    let (nodes, dir) = walk_fixture("lexigraph_it_precedence", "7", &[]);
    let mut emitted = HashSet::new();
    for node in &nodes {
        if !node.is_root() {
            assert!(
                emitted.contains(&node.parent_key),
                "node {} references parent {} that is not yet in the stream",
                node.key,
                node.parent_key
            );
        }
        emitted.insert(node.key.clone());
    }
    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn stream_forms_a_tree_with_one_root() {
    let (nodes, dir) = walk_fixture("lexigraph_it_tree", "7", &[]);

    let roots: Vec<&GraphNode> = nodes.iter().filter(|n| n.is_root()).collect();
    assert_eq!(roots.len(), 1, "expected exactly one root");
    assert_eq!(roots[0].common_kind, CommonKind::Project);
    assert_eq!(roots[0].key, "7");

    // Walking parentKey links upward from any node must reach the root
    // without revisiting a key.
    let by_key: HashMap<&str, &GraphNode> =
        nodes.iter().map(|n| (n.key.as_str(), n)).collect();
    for node in &nodes {
        let mut visited = HashSet::new();
        let mut current: &GraphNode = node;
        while !current.is_root() {
            assert!(
                visited.insert(current.key.clone()),
                "cycle through {}",
                current.key
            );
            current = by_key[current.parent_key.as_str()];
        }
    }
    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn older_siblings_match_emission_order() {
    let (nodes, dir) = walk_fixture("lexigraph_it_siblings", "7", &[]);
    let mut emitted_under: HashMap<String, Vec<String>> = HashMap::new();
    for node in &nodes {
        let siblings = emitted_under.entry(node.parent_key.clone()).or_default();
        assert_eq!(
            &node.older_siblings, siblings,
            "node {} olderSiblings out of step",
            node.key
        );
        siblings.push(node.key.clone());
    }
    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn empty_directories_are_pruned() {
    let (nodes, dir) = walk_fixture("lexigraph_it_pruning", "7", &[]);
    for node in &nodes {
        assert!(
            !filename(node).starts_with("./empty"),
            "pruned subtree leaked node {} ({})",
            node.key,
            filename(node)
        );
    }
    // The eligible directory is still there.
    assert!(nodes
        .iter()
        .any(|n| n.common_kind == CommonKind::Dir && filename(n) == "./pkg"));
    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn change_set_restricts_traversal_to_listed_files() {
    let changed = vec!["pkg/util.py".to_string()];
    let (nodes, dir) = walk_fixture("lexigraph_it_incremental", "7", &changed);

    assert!(
        nodes.iter().all(|n| filename(n) != "./main.py"),
        "unlisted file contributed nodes"
    );
    assert!(
        nodes
            .iter()
            .any(|n| n.common_kind == CommonKind::File && filename(n) == "./pkg/util.py"),
        "listed file missing"
    );
    // Ancestor directories of the listed file are still emitted.
    assert!(nodes
        .iter()
        .any(|n| n.common_kind == CommonKind::Dir && filename(n) == "./pkg"));
    assert!(nodes
        .iter()
        .any(|n| n.common_kind == CommonKind::Dir && filename(n) == "."));
    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn reruns_on_unchanged_input_are_byte_identical() {
    let dir = fixture_project("lexigraph_it_stability");
    let first = run_to_bytes(&dir, "7");
    let second = run_to_bytes(&dir, "7");
    assert_eq!(first, second, "stream is not deterministic");
    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn malformed_file_does_not_abort_the_run() {
    let dir = std::env::temp_dir().join("lexigraph_it_partial");
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("broken.py"), b"def broken(:\n").unwrap();
    fs::write(dir.join("valid.py"), b"def ok():\n    return 1\n").unwrap();

    let mut buffer = NodeBuffer::new();
    let walker =
        ProjectWalker::new(&dir, "7", &[], WalkConfig::default(), &mut buffer).unwrap();
    let summary = walker.run().unwrap();

    assert_eq!(summary.files_parsed, 1);
    assert_eq!(summary.files_failed, 1);

    // The broken file keeps its file node but contributes no interior.
    let broken_nodes: Vec<_> = buffer
        .nodes
        .iter()
        .filter(|n| filename(n) == "./broken.py")
        .collect();
    assert_eq!(broken_nodes.len(), 1);
    assert_eq!(broken_nodes[0].common_kind, CommonKind::File);

    // The valid file has its full graph.
    assert!(buffer
        .nodes
        .iter()
        .any(|n| filename(n) == "./valid.py" && n.kind.kind == "function_definition"));

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn positions_are_exact_and_string_encoded() {
    let (nodes, dir) = walk_fixture("lexigraph_it_positions", "7", &[]);
    let top = nodes
        .iter()
        .find(|n| n.kind.kind == "function_definition" && filename(n) == "./main.py")
        .expect("function node");
    // `def top(a):` sits on line 3, column 0 of main.py.
    assert_eq!(top.properties["start_line"].value, "3");
    assert_eq!(top.properties["start_column"].value, "0");
    assert_eq!(top.properties["end_line"].value, "4");
    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn wire_lines_match_the_schema() {
    let dir = fixture_project("lexigraph_it_wire");
    let out = String::from_utf8(run_to_bytes(&dir, "7")).unwrap();

    assert!(!out.trim_start().starts_with('['), "stream must not be an array");
    for line in out.lines() {
        let value: serde_json::Value =
            serde_json::from_str(line).expect("every line is a complete JSON object");
        for field in ["commonKind", "key", "kind", "parentKey", "properties", "olderSiblings"] {
            assert!(value.get(field).is_some(), "line missing {field}: {line}");
        }
        assert!(value["kind"].get("namespace").is_some());
        assert!(value["kind"].get("orderable").is_some());
        assert!(
            value["properties"].get("filename").is_some(),
            "every node carries filename: {line}"
        );
    }

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn file_and_dir_nodes_carry_expected_kinds() {
    let (nodes, dir) = walk_fixture("lexigraph_it_fskinds", "7", &[]);

    let project = &nodes[0];
    assert_eq!(project.common_kind, CommonKind::Project);
    assert_eq!(project.kind.kind, "project");
    assert!(!project.kind.orderable);

    let root_dir = nodes
        .iter()
        .find(|n| n.common_kind == CommonKind::Dir && filename(n) == ".")
        .expect("root dir node");
    assert!(!root_dir.kind.orderable);
    assert_eq!(root_dir.parent_key, project.key);

    let file = nodes
        .iter()
        .find(|n| n.common_kind == CommonKind::File && filename(n) == "./main.py")
        .expect("file node");
    assert!(file.kind.orderable);

    let module = nodes
        .iter()
        .find(|n| n.common_kind == CommonKind::Mod && filename(n) == "./main.py")
        .expect("module node");
    assert_eq!(module.parent_key, file.key);

    let _ = fs::remove_dir_all(&dir);
}
