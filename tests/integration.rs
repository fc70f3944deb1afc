//! Integration tests for dirtodo rendering


use dirtodo::{RenderConfig, RenderError, TreeRenderer, render};
use harness::{TestTree, body_lines};

#[test]
fn test_end_to_end_project() {
    let tree = TestTree::new();
    tree.add_sized_file("project/src/main.txt", &[b'x'; 2048]);
    tree.add_file("project/.git/HEAD", "ref: refs/heads/main");
    let root = tree.path().join("project");

    let doc = render(&root, &RenderConfig::default()).unwrap();
    let canonical = std::fs::canonicalize(&root).unwrap();

    let expected = format!(
        "# Todo List for: project\n\
         \n\
         *Generated from folder structure: `{}`*\n\
         \n\
         ## Directory Structure Tasks\n\
         \n\
         - [ ] **src/**\n  - [ ] main.txt `(2.0 KB)`",
        canonical.display()
    );
    assert_eq!(doc, expected);
}

#[test]
fn test_render_is_idempotent() {
    let tree = TestTree::new();
    tree.add_file("a/b/c.txt", "c");
    tree.add_file("a#x/d.txt", "dd");
    tree.add_tags("a", "#one #two");

    let config = RenderConfig::default();
    let first = render(tree.path(), &config).unwrap();
    let second = render(tree.path(), &config).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_sorting_case_insensitive() {
    let tree = TestTree::new();
    tree.add_dir("Zeta");
    tree.add_dir("alpha");
    tree.add_dir("Beta");

    let doc = render(tree.path(), &RenderConfig::default()).unwrap();
    assert_eq!(
        body_lines(&doc),
        ["- [ ] **alpha/**", "- [ ] **Beta/**", "- [ ] **Zeta/**"]
    );
}

#[test]
fn test_node_modules_excluded_with_descendants() {
    let tree = TestTree::new();
    tree.add_file("node_modules/left-pad/index.js", "module.exports = 1");
    tree.add_dir("src");

    let config = RenderConfig {
        exclude_dirs: ["node_modules".to_string()].into_iter().collect(),
        ..RenderConfig::default()
    };
    let doc = render(tree.path(), &config).unwrap();
    assert!(!doc.contains("node_modules"), "{}", doc);
    assert!(!doc.contains("left-pad"), "{}", doc);
    assert!(!doc.contains("index.js"), "{}", doc);
    assert_eq!(body_lines(&doc), ["- [ ] **src/**"]);
}

#[test]
fn test_custom_dir_exclusion_keeps_defaults() {
    let tree = TestTree::new();
    tree.add_dir("build");
    tree.add_dir("__pycache__");
    tree.add_dir("lib");

    let config = RenderConfig::default().exclude_dirs(["build"]);
    let doc = render(tree.path(), &config).unwrap();
    assert_eq!(body_lines(&doc), ["- [ ] **lib/**"]);
}

#[test]
fn test_file_pattern_exclusion() {
    let tree = TestTree::new();
    tree.add_file("app.log", "");
    tree.add_file("app.rs", "");
    tree.add_file(".DS_Store", "");

    let config = RenderConfig::default().exclude_files(["*.log"]);
    let doc = render(tree.path(), &config).unwrap();
    assert_eq!(body_lines(&doc), ["- [ ] app.rs `(0 B)`"]);
}

#[test]
fn test_depth_bound() {
    let tree = TestTree::new();
    tree.add_file("l0/l1/l2/l3/deep.txt", "");

    for k in 1..=4 {
        let config = RenderConfig::default().with_max_depth(k);
        let lines = TreeRenderer::new(config).collect_lines(tree.path()).unwrap();
        assert!(lines.iter().all(|l| l.depth < k), "depth {} violated", k);
        assert_eq!(lines.len(), k, "expected one directory per level for k={}", k);
    }

    let unlimited = RenderConfig::default().unlimited_depth();
    let lines = TreeRenderer::new(unlimited).collect_lines(tree.path()).unwrap();
    assert_eq!(lines.len(), 5);
    assert_eq!(lines[4].name(), Some("deep.txt"));
}

#[test]
fn test_default_depth_is_four() {
    let tree = TestTree::new();
    tree.add_dir("a/b/c/d/e");

    let doc = render(tree.path(), &RenderConfig::default()).unwrap();
    assert!(doc.contains("      - [ ] **d/**"), "{}", doc);
    assert!(!doc.contains("**e/**"), "{}", doc);
}

#[test]
fn test_line_count_matches_reachable_entries() {
    let tree = TestTree::new();
    tree.add_file("a/one.txt", "1");
    tree.add_file("a/b/two.txt", "2");
    tree.add_file("c/three.txt", "3");
    tree.add_file("top.txt", "t");
    tree.add_file("node_modules/skip.txt", "s");
    tree.add_file(".git/config", "");
    tree.add_file("Thumbs.db", "");

    // a, a/b, c, top.txt, one.txt, two.txt, three.txt
    let lines = TreeRenderer::new(RenderConfig::default())
        .collect_lines(tree.path())
        .unwrap();
    assert_eq!(lines.iter().filter(|l| !l.is_permission_error()).count(), 7);

    // Directories only: a, a/b, c
    let dirs_only = RenderConfig::default().with_include_files(false);
    let doc = render(tree.path(), &dirs_only).unwrap();
    assert_eq!(
        body_lines(&doc),
        ["- [ ] **a/**", "  - [ ] **b/**", "- [ ] **c/**"]
    );
}

#[test]
fn test_inline_tags_rendered_alphabetically() {
    let tree = TestTree::new();
    tree.add_dir("api#urgent#Backend");

    let doc = render(tree.path(), &RenderConfig::default()).unwrap();
    assert_eq!(
        body_lines(&doc),
        ["- [ ] **api#urgent#Backend/** `#backend` `#urgent`"]
    );
}

#[test]
fn test_sidecar_tags_merged() {
    let tree = TestTree::new();
    tree.add_tags("docs#guide", "#Documentation\n#guide");

    let config = RenderConfig::default().with_include_files(false);
    let doc = render(tree.path(), &config).unwrap();
    assert_eq!(
        body_lines(&doc),
        ["- [ ] **docs#guide/** `#documentation` `#guide`"]
    );
}

#[test]
fn test_tag_filter_prunes_subtree() {
    let tree = TestTree::new();
    tree.add_dir("app#backend/db#frontend");
    tree.add_dir("web#frontend/components");

    let config = RenderConfig::default().with_tags(["frontend"]);
    let doc = render(tree.path(), &config).unwrap();

    assert!(!doc.contains("app#backend"), "{}", doc);
    assert!(!doc.contains("db#frontend"), "{}", doc);
    // Children of a matching directory must match too
    assert_eq!(body_lines(&doc), ["- [ ] **web#frontend/** `#frontend`"]);
}

#[test]
fn test_tag_filter_keeps_matching_descendants() {
    let tree = TestTree::new();
    tree.add_dir("ui#frontend/widgets#frontend#ui");

    let config = RenderConfig::default().with_tags(["UI", "#frontend"]);
    let doc = render(tree.path(), &config).unwrap();
    let lines: Vec<&str> = doc.lines().collect();

    assert!(lines.contains(&"*Filtered by tags: `#frontend`, `#ui`*"));
    assert_eq!(
        body_lines(&doc),
        [
            "- [ ] **ui#frontend/** `#frontend`",
            "  - [ ] **widgets#frontend#ui/** `#frontend` `#ui`",
        ]
    );
}

#[test]
fn test_tag_filter_with_no_matches() {
    let tree = TestTree::new();
    tree.add_dir("plain");
    tree.add_file("readme.md", "");

    let config = RenderConfig::default().with_tags(["missing"]);
    let doc = render(tree.path(), &config).unwrap();
    assert_eq!(
        body_lines(&doc),
        ["*No directories found matching the specified tags.*"]
    );
}

#[test]
fn test_empty_directory_without_filter() {
    let tree = TestTree::new();

    let doc = render(tree.path(), &RenderConfig::default()).unwrap();
    assert!(doc.ends_with("## Directory Structure Tasks\n"), "{:?}", doc);
    assert!(body_lines(&doc).is_empty());
}

#[test]
fn test_missing_root() {
    let tree = TestTree::new();
    let err = render(&tree.path().join("absent"), &RenderConfig::default()).unwrap_err();
    assert!(matches!(err, RenderError::NotFound(_)));
    assert!(err.to_string().contains("Path does not exist"));
}

#[test]
fn test_root_is_file() {
    let tree = TestTree::new();
    let file = tree.add_file("notes.txt", "");
    let err = render(&file, &RenderConfig::default()).unwrap_err();
    assert!(matches!(err, RenderError::NotADirectory(_)));
    assert!(err.to_string().contains("Path is not a directory"));
}
