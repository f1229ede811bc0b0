//! Static import discovery for module code
//!
//! Parses the module and walks its syntax tree, so only real import forms
//! count: text in strings, templates, JSX or comments that merely looks like an
//! import is ignored. Only string-literal specifiers are collected; type-only
//! imports and re-exports are erased at build time and are skipped as well.

use std::collections::HashSet;
use std::path::Path;

use oxc_allocator::Allocator;
use oxc_ast::ast::{Argument, Expression};
use oxc_ast::{AstKind, Visit};
use oxc_parser::Parser;
use oxc_span::SourceType;

use crate::error::{Result, scan};

/// Distinct import specifiers in `code`, in order of first appearance
///
/// `path` picks the dialect (JS, JSX, TS or TSX) from its extension.
///
/// # Errors
///
/// Returns `SyntaxError` when `code` does not parse.
pub fn scan_imports(code: &str, path: &Path) -> Result<Vec<String>> {
    let source_type = SourceType::from_path(path)
        .unwrap_or_default()
        .with_module(true);

    let allocator = Allocator::default();
    let parsed = Parser::new(&allocator, code, source_type).parse();

    if let Some(error) = parsed.errors.first() {
        return Err(scan::syntax_error(
            path.display().to_string(),
            error.to_string(),
        ));
    }

    let mut collector = ImportCollector::default();
    collector.visit_program(&parsed.program);
    Ok(collector.specifiers)
}

#[derive(Default)]
struct ImportCollector {
    specifiers: Vec<String>,
    seen: HashSet<String>,
}

impl ImportCollector {
    fn push(&mut self, specifier: &str) {
        if !specifier.is_empty() && self.seen.insert(specifier.to_string()) {
            self.specifiers.push(specifier.to_string());
        }
    }
}

impl<'a> Visit<'a> for ImportCollector {
    fn enter_node(&mut self, kind: AstKind<'a>) {
        match kind {
            AstKind::ImportDeclaration(decl) if !decl.import_kind.is_type() => {
                self.push(decl.source.value.as_str());
            }
            AstKind::ExportAllDeclaration(decl) if !decl.export_kind.is_type() => {
                self.push(decl.source.value.as_str());
            }
            AstKind::ExportNamedDeclaration(decl) if !decl.export_kind.is_type() => {
                if let Some(source) = &decl.source {
                    self.push(source.value.as_str());
                }
            }
            AstKind::ImportExpression(import) => {
                if let Expression::StringLiteral(source) = &import.source {
                    self.push(source.value.as_str());
                }
            }
            // require('…') with exactly one literal argument
            AstKind::CallExpression(call) => {
                let is_require =
                    matches!(&call.callee, Expression::Identifier(id) if id.name == "require");
                if is_require && call.arguments.len() == 1 {
                    if let Some(Argument::StringLiteral(source)) = call.arguments.first() {
                        self.push(source.value.as_str());
                    }
                }
            }
            _ => {}
        }
    }
}
