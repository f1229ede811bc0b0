//! Library-level block asset build tests

mod common;

use blockdeps::{BlockError, BuildContext, Dependency, build_block_asset};
use serde_json::json;

#[test]
fn test_frontmatter_title_is_mirrored() {
    let workspace = common::TestWorkspace::new();
    let entry = workspace.write_file(
        "demos/basic.tsx",
        "/**\n * title: Foo\n * description: A basic button\n * debug: true\n */\nexport default () => null;\n",
    );

    let parsed = build_block_asset(&BuildContext::new(&entry, "basic")).unwrap();

    let frontmatter = parsed.frontmatter.as_ref().unwrap();
    assert_eq!(frontmatter.get("title"), Some(&json!("Foo")));
    assert_eq!(frontmatter.get("debug"), Some(&json!(true)));
    assert_eq!(parsed.asset.title_str(), Some("Foo"));
    assert_eq!(parsed.asset.description, Some(json!("A basic button")));
    assert_eq!(
        parsed.asset.dependencies.get("index.tsx"),
        Some(&Dependency::File("export default () => null;\n".to_string()))
    );
}

#[test]
fn test_entry_without_comment_is_verbatim() {
    let workspace = common::TestWorkspace::new();
    let code = "// plain comment\nexport const x = 1;\n";
    let entry = workspace.write_file("demo.ts", code);
    let ctx = BuildContext::new(&entry, "plain");

    let first = build_block_asset(&ctx).unwrap();
    let second = build_block_asset(&ctx).unwrap();

    assert!(first.frontmatter.is_none());
    assert!(first.asset.title.is_none());
    assert_eq!(
        first.asset.dependencies.get("index.ts"),
        Some(&Dependency::File(code.to_string()))
    );
    assert_eq!(first, second);
}

#[test]
fn test_relative_import_is_collected() {
    let workspace = common::TestWorkspace::new();
    let entry = workspace.write_file("a.ts", "import { b } from './b.ts';\nconsole.log(b);\n");
    workspace.write_file("b.ts", "export const b = 'b';\n");

    let parsed = build_block_asset(&BuildContext::new(&entry, "a")).unwrap();

    assert_eq!(
        parsed.asset.dependencies.get("b.ts"),
        Some(&Dependency::File("export const b = 'b';\n".to_string()))
    );
    assert_eq!(parsed.sources.get("b.ts"), Some(&workspace.file("b.ts")));
    assert_eq!(parsed.sources.get("index.ts"), Some(&workspace.file("a.ts")));
}

#[test]
fn test_package_import_records_version_only() {
    let workspace = common::TestWorkspace::new();
    workspace.install_package("some-pkg", "2.3.1");
    let entry = workspace.write_file("demos/index.tsx", "import pkg from 'some-pkg';\n");

    let parsed = build_block_asset(&BuildContext::new(&entry, "pkg")).unwrap();

    assert_eq!(
        parsed.asset.dependencies.get("some-pkg"),
        Some(&Dependency::Npm("2.3.1".to_string()))
    );
    let leaked = |key: &String| key.contains("node_modules") || key.ends_with("index.js");
    assert!(!parsed.asset.dependencies.keys().any(leaked));
    assert!(!parsed.sources.keys().any(leaked));
}

#[test]
fn test_package_without_version_is_omitted() {
    let workspace = common::TestWorkspace::new();
    workspace.write_file("node_modules/unversioned/package.json", r#"{"name":"unversioned"}"#);
    workspace.write_file("node_modules/unversioned/index.js", "");
    let entry = workspace.write_file("index.tsx", "import 'unversioned';\n");

    let parsed = build_block_asset(&BuildContext::new(&entry, "x")).unwrap();
    assert!(!parsed.asset.dependencies.contains_key("unversioned"));
    assert_eq!(parsed.asset.dependencies.len(), 1);
}

#[test]
fn test_builtin_modules_are_skipped() {
    let workspace = common::TestWorkspace::new();
    let entry = workspace.write_file(
        "index.ts",
        "import fs from 'fs';\nimport path from 'node:path';\n",
    );

    let parsed = build_block_asset(&BuildContext::new(&entry, "x")).unwrap();
    assert_eq!(parsed.asset.dependencies.len(), 1);
}

#[test]
fn test_unsupported_assets_are_omitted() {
    let workspace = common::TestWorkspace::new();
    let entry = workspace.write_file(
        "index.tsx",
        "import logo from './logo.png';\nimport './index.less';\n",
    );
    workspace.write_file("logo.png", "\u{89}PNG");
    workspace.write_file("index.less", ".a { color: red; }\n");

    let parsed = build_block_asset(&BuildContext::new(&entry, "x")).unwrap();

    assert!(!parsed.asset.dependencies.contains_key("logo.png"));
    assert!(!parsed.sources.contains_key("logo.png"));
    assert_eq!(
        parsed.asset.dependencies.get("index.less"),
        Some(&Dependency::File(".a { color: red; }\n".to_string()))
    );
}

#[test]
fn test_entry_point_code_override() {
    let workspace = common::TestWorkspace::new();
    let entry = workspace.write_file("index.jsx", "export default 'from disk';\n");
    let ctx = BuildContext::new(&entry, "override")
        .with_ref_atom_ids(["Button"])
        .with_entry_point_code("/**\n * title: Override\n */\nexport default 'override';\n");

    let parsed = build_block_asset(&ctx).unwrap();

    assert_eq!(parsed.asset.title_str(), Some("Override"));
    assert_eq!(parsed.asset.ref_atom_ids, vec!["Button".to_string()]);
    assert_eq!(
        parsed.asset.dependencies.get("index.jsx"),
        Some(&Dependency::File("export default 'override';\n".to_string()))
    );
    assert!(!parsed.sources.contains_key("index.jsx"));
}

#[test]
fn test_files_outside_entry_dir_use_relative_keys() {
    let workspace = common::TestWorkspace::new();
    let entry = workspace.write_file("demos/index.tsx", "import { theme } from '../shared/theme';\n");
    workspace.write_file("shared/theme.ts", "export const theme = {};\n");

    let parsed = build_block_asset(&BuildContext::new(&entry, "x")).unwrap();
    assert!(parsed.asset.dependencies.contains_key("../shared/theme.ts"));
    assert_eq!(
        parsed.sources.get("../shared/theme.ts"),
        Some(&workspace.file("shared/theme.ts"))
    );
}

#[test]
fn test_missing_import_fails_whole_build() {
    let workspace = common::TestWorkspace::new();
    let entry = workspace.write_file("index.tsx", "import './a';\n");
    workspace.write_file("a.ts", "import './does-not-exist';\n");

    let err = build_block_asset(&BuildContext::new(&entry, "x")).unwrap_err();
    match err {
        BlockError::ModuleNotFound { specifier, .. } => assert_eq!(specifier, "./does-not-exist"),
        other => panic!("Expected ModuleNotFound, got {:?}", other),
    }
}

#[test]
fn test_wire_shape() {
    let workspace = common::TestWorkspace::new();
    workspace.install_package("react", "18.2.0");
    let entry = workspace.write_file(
        "index.tsx",
        "/**\n * title: Wire\n */\nimport React from 'react';\n",
    );

    let parsed = build_block_asset(&BuildContext::new(&entry, "wire")).unwrap();
    let value = serde_json::to_value(&parsed).unwrap();

    assert_eq!(value["asset"]["type"], json!("BLOCK"));
    assert_eq!(value["asset"]["id"], json!("wire"));
    assert_eq!(value["asset"]["refAtomIds"], json!([]));
    assert_eq!(value["asset"]["title"], json!("Wire"));
    assert_eq!(
        value["asset"]["dependencies"]["react"],
        json!({ "type": "NPM", "value": "18.2.0" })
    );
    assert_eq!(
        value["asset"]["dependencies"]["index.tsx"]["type"],
        json!("FILE")
    );
    assert_eq!(value["frontmatter"]["title"], json!("Wire"));
}

#[test]
fn test_frontmatter_serializes_as_null_when_absent() {
    let workspace = common::TestWorkspace::new();
    let entry = workspace.write_file("index.ts", "export const x = 1;\n");

    let parsed = build_block_asset(&BuildContext::new(&entry, "plain")).unwrap();
    let value = serde_json::to_value(&parsed).unwrap();

    assert!(value["frontmatter"].is_null());
    assert!(value["asset"].get("title").is_none());
}

#[test]
fn test_import_text_in_template_literal_is_not_followed() {
    let workspace = common::TestWorkspace::new();
    let entry = workspace.write_file(
        "index.tsx",
        "const snippet = `import { Demo } from './not-a-real-file';`;\nexport default snippet;\n",
    );

    let parsed = build_block_asset(&BuildContext::new(&entry, "snippet")).unwrap();
    let keys: Vec<&str> = parsed.asset.dependencies.keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["index.tsx"]);
}

#[test]
fn test_import_text_in_jsx_is_not_a_dependency() {
    let workspace = common::TestWorkspace::new();
    workspace.install_package("lodash", "4.17.21");
    let entry = workspace.write_file(
        "index.tsx",
        "export default () => <p>You can import debounce from 'lodash' yourself.</p>;\n",
    );

    let parsed = build_block_asset(&BuildContext::new(&entry, "jsx")).unwrap();
    let keys: Vec<&str> = parsed.asset.dependencies.keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["index.tsx"]);
}

#[test]
fn test_module_syntax_error_fails_build() {
    let workspace = common::TestWorkspace::new();
    let entry = workspace.write_file("index.tsx", "import './broken';\n");
    workspace.write_file("broken.ts", "export const = ;\n");

    let err = build_block_asset(&BuildContext::new(&entry, "x")).unwrap_err();
    match err {
        BlockError::SyntaxError { path, .. } => assert!(path.ends_with("broken.ts")),
        other => panic!("Expected SyntaxError, got {:?}", other),
    }
}

#[test]
fn test_package_subpath_under_marker_manifest_keeps_version() {
    let workspace = common::TestWorkspace::new();
    workspace.write_file(
        "node_modules/@babel/runtime/package.json",
        r#"{"name":"@babel/runtime","version":"7.23.0"}"#,
    );
    workspace.write_file(
        "node_modules/@babel/runtime/helpers/esm/package.json",
        r#"{"type":"module"}"#,
    );
    workspace.write_file(
        "node_modules/@babel/runtime/helpers/esm/extends.js",
        "export default function _extends() {}\n",
    );
    let entry = workspace.write_file(
        "index.tsx",
        "import _extends from '@babel/runtime/helpers/esm/extends';\n",
    );

    let parsed = build_block_asset(&BuildContext::new(&entry, "babel")).unwrap();
    assert_eq!(
        parsed.asset.dependencies.get("@babel/runtime/helpers/esm/extends"),
        Some(&Dependency::Npm("7.23.0".to_string()))
    );
}
