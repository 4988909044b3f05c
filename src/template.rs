//! Template rendering for per-student vhost files
//!
//! Rendering is kept behind a trait so the vhost emitter does not care where
//! templates come from. The default implementation loads them from a
//! directory and substitutes `{{ key }}` placeholders.

use anyhow::Context;
use std::path::PathBuf;

/// Renders a named template against a set of substitution variables
pub trait TemplateEngine {
    fn render(&self, name: &str, vars: &[(&str, &str)]) -> anyhow::Result<String>;
}

/// Template engine backed by plain files in a directory
#[derive(Debug, Clone)]
pub struct DirTemplates {
    root: PathBuf,
}

impl DirTemplates {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl TemplateEngine for DirTemplates {
    fn render(&self, name: &str, vars: &[(&str, &str)]) -> anyhow::Result<String> {
        let path = self.root.join(name);
        let template = std::fs::read_to_string(&path)
            .with_context(|| format!("failed to read template '{}'", path.display()))?;
        Ok(substitute(&template, vars))
    }
}

/// Replace `{{ key }}` placeholders with their values
///
/// Whitespace inside the braces is ignored. Placeholders with no matching
/// variable are left verbatim, as is a dangling `{{` with no closing braces.
pub fn substitute(template: &str, vars: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find("{{") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        match after.find("}}") {
            Some(end) => {
                let key = after[..end].trim();
                match vars.iter().find(|(k, _)| *k == key) {
                    Some((_, value)) => out.push_str(value),
                    None => out.push_str(&rest[start..start + 2 + end + 2]),
                }
                rest = &after[end + 2..];
            }
            None => {
                out.push_str(&rest[start..]);
                rest = "";
            }
        }
    }

    out.push_str(rest);
    out
}
