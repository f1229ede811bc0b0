//! Resolve and load hook dispatch
//!
//! Each hook list is an ordered set of `(filter, handler)` rules. Dispatch picks
//! the first rule whose filter matches the specifier (resolve) or path (load);
//! later rules never see that request.

use regex::Regex;

use crate::collector::{self, LoadArgs, LoadOutcome};
use crate::error::{Result, extract, resolve};
use crate::path_utils::to_forward_slashes;
use crate::resolver::{ModuleResolver, Resolution, ResolveArgs};

use super::BuildState;

/// Handler for a resolve request
pub type ResolveHandler =
    fn(&mut BuildState<'_>, &ModuleResolver, &ResolveArgs<'_>) -> Result<Resolution>;

/// Handler for a load request
pub type LoadHandler = fn(&mut BuildState<'_>, &LoadArgs<'_>) -> Result<LoadOutcome>;

/// One `(filter, handler)` pair
#[derive(Debug, Clone)]
pub struct Rule<H> {
    pub name: &'static str,
    /// `None` matches everything
    pub filter: Option<Regex>,
    pub handler: H,
}

impl<H> Rule<H> {
    pub fn matches(&self, subject: &str) -> bool {
        self.filter.as_ref().is_none_or(|re| re.is_match(subject))
    }
}

/// Ordered resolve and load rules for one build pipeline
#[derive(Debug, Clone, Default)]
pub struct HookSet {
    resolve: Vec<Rule<ResolveHandler>>,
    load: Vec<Rule<LoadHandler>>,
}

impl HookSet {
    /// Empty hook set; every resolve fails and every load is unsupported
    pub fn new() -> Self {
        Self::default()
    }

    /// The dependency-collecting pipeline used by `AssetBuilder`
    pub fn collect_dependencies() -> Self {
        Self::new()
            .on_resolve("collect-deps", collect_resolve)
            .on_load("collect-deps", collector::load)
    }

    /// Append a resolve rule matching every specifier
    pub fn on_resolve(mut self, name: &'static str, handler: ResolveHandler) -> Self {
        self.resolve.push(Rule {
            name,
            filter: None,
            handler,
        });
        self
    }

    /// Append a resolve rule for specifiers matching `pattern`
    ///
    /// # Errors
    ///
    /// Returns `InvalidPattern` if `pattern` does not compile.
    pub fn on_resolve_matching(
        mut self,
        name: &'static str,
        pattern: &str,
        handler: ResolveHandler,
    ) -> Result<Self> {
        self.resolve.push(Rule {
            name,
            filter: Some(compile_filter(pattern)?),
            handler,
        });
        Ok(self)
    }

    /// Append a load rule matching every path
    pub fn on_load(mut self, name: &'static str, handler: LoadHandler) -> Self {
        self.load.push(Rule {
            name,
            filter: None,
            handler,
        });
        self
    }

    /// Append a load rule for paths matching `pattern` (forward-slashed)
    ///
    /// # Errors
    ///
    /// Returns `InvalidPattern` if `pattern` does not compile.
    pub fn on_load_matching(
        mut self,
        name: &'static str,
        pattern: &str,
        handler: LoadHandler,
    ) -> Result<Self> {
        self.load.push(Rule {
            name,
            filter: Some(compile_filter(pattern)?),
            handler,
        });
        Ok(self)
    }

    /// Run the first resolve rule matching `args.specifier`
    ///
    /// # Errors
    ///
    /// Propagates the handler's error; `ModuleNotFound` if no rule matches.
    pub fn dispatch_resolve(
        &self,
        state: &mut BuildState<'_>,
        resolver: &ModuleResolver,
        args: &ResolveArgs<'_>,
    ) -> Result<Resolution> {
        match self.resolve.iter().find(|rule| rule.matches(args.specifier)) {
            Some(rule) => (rule.handler)(state, resolver, args),
            None => Err(resolve::module_not_found(
                args.specifier,
                args.importer.display().to_string(),
            )),
        }
    }

    /// Run the first load rule matching `args.path`
    ///
    /// No matching rule means the file is unsupported.
    ///
    /// # Errors
    ///
    /// Propagates the handler's error.
    pub fn dispatch_load(
        &self,
        state: &mut BuildState<'_>,
        args: &LoadArgs<'_>,
    ) -> Result<LoadOutcome> {
        let subject = to_forward_slashes(args.path);
        match self.load.iter().find(|rule| rule.matches(&subject)) {
            Some(rule) => (rule.handler)(state, args),
            None => Ok(LoadOutcome::Unsupported),
        }
    }
}

fn compile_filter(pattern: &str) -> Result<Regex> {
    Regex::new(pattern).map_err(|e| extract::invalid_pattern(pattern, e.to_string()))
}

/// Resolve through the module resolver and register versioned packages
///
/// # Errors
///
/// Propagates resolver failures.
pub fn collect_resolve(
    state: &mut BuildState<'_>,
    resolver: &ModuleResolver,
    args: &ResolveArgs<'_>,
) -> Result<Resolution> {
    let resolution = resolver.resolve(args)?;

    if let Resolution::External {
        specifier,
        version: Some(version),
    } = &resolution
    {
        state.register_npm(specifier, version);
    }

    Ok(resolution)
}
