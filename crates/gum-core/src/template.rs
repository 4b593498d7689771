//! Template context and rendering.
//!
//! Templates are Handlebars strings (`{{HostAddress}}`, `{{Query.user.[0]}}`)
//! rendered in strict mode, so a reference to anything not in
//! [`TemplateContext`] is an error rather than an empty string. Output is not
//! HTML-escaped.

use crate::config::ProtocolDefinition;
use crate::error::{Error, Result};
use crate::url_parts::{QueryMap, UrlParts};
use handlebars::Handlebars;
use serde::Serialize;

/// Named values available to every template of a run.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct TemplateContext {
    #[serde(rename = "FullURL")]
    pub full_url: String,
    pub protocol: String,
    pub host_address: String,
    pub host_port: String,
    pub username: String,
    pub path: String,
    pub output_file: String,
    pub query: QueryMap,
}

impl TemplateContext {
    pub fn new(parts: &UrlParts, protocol: &ProtocolDefinition) -> Self {
        Self {
            full_url: parts.full.clone(),
            protocol: protocol.protocol.clone(),
            host_address: parts.host.clone(),
            host_port: parts.port.clone(),
            username: parts.username.clone(),
            path: parts.path.clone(),
            output_file: protocol.output_file.clone(),
            query: parts.query.clone(),
        }
    }
}

/// Strict, non-escaping Handlebars renderer.
pub struct Renderer {
    registry: Handlebars<'static>,
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer {
    pub fn new() -> Self {
        let mut registry = Handlebars::new();
        registry.set_strict_mode(true);
        registry.register_escape_fn(handlebars::no_escape);
        Self { registry }
    }

    /// Render one template string.
    pub fn render(&self, template: &str, ctx: &TemplateContext) -> Result<String> {
        self.registry
            .render_template(template, ctx)
            .map_err(|source| Error::TemplateRender {
                template: template.to_string(),
                source,
            })
    }

    /// Render an ordered list of templates into a new vector.
    ///
    /// Stops at the first failure; nothing rendered before it is returned.
    pub fn render_all(&self, templates: &[String], ctx: &TemplateContext) -> Result<Vec<String>> {
        templates.iter().map(|t| self.render(t, ctx)).collect()
    }
}
