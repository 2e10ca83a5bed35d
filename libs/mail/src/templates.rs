//! File-backed HTML template rendering.

use crate::error::{MailError, MailResult};
use handlebars::Handlebars;
use serde_json::Value;
use std::path::PathBuf;
use tracing::debug;

/// Renders `<name>.html` files from a configured directory.
///
/// Templates are loaded and parsed per request, so on-disk edits are
/// picked up without a restart. Rendering runs in strict mode: a
/// placeholder referencing a field absent from the supplied values is a
/// render error rather than silent empty output. Substituted values are
/// HTML-escaped.
#[derive(Debug, Clone)]
pub struct TemplateEngine {
    dir: PathBuf,
}

impl TemplateEngine {
    /// Engine serving templates from `dir`.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// On-disk path for a template name, joined verbatim onto the
    /// configured directory.
    fn template_path(&self, name: &str) -> PathBuf {
        self.dir.join(format!("{}.html", name))
    }

    /// Load and render the named template against `values`.
    pub async fn render(&self, name: &str, values: &Value) -> MailResult<String> {
        let path = self.template_path(name);
        debug!(template = %name, path = %path.display(), "Loading template");

        let source =
            tokio::fs::read_to_string(&path)
                .await
                .map_err(|e| MailError::TemplateLoad {
                    name: name.to_string(),
                    details: e.to_string(),
                })?;

        let mut handlebars = Handlebars::new();
        handlebars.set_strict_mode(true);
        handlebars
            .register_template_string(name, &source)
            .map_err(|e| MailError::TemplateLoad {
                name: name.to_string(),
                details: e.to_string(),
            })?;

        handlebars
            .render(name, values)
            .map_err(|e| MailError::TemplateRender {
                name: name.to_string(),
                details: e.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::fs;

    fn engine_with(file: &str, contents: &str) -> (tempfile::TempDir, TemplateEngine) {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(file), contents).unwrap();
        let engine = TemplateEngine::new(dir.path());
        (dir, engine)
    }

    #[tokio::test]
    async fn test_render_substitutes_values() {
        let (_dir, engine) = engine_with("welcome.html", "Hello {{name}}");

        let html = engine
            .render("welcome", &json!({"name": "Bob"}))
            .await
            .unwrap();

        assert_eq!(html, "Hello Bob");
    }

    #[tokio::test]
    async fn test_render_escapes_html_in_values() {
        let (_dir, engine) = engine_with("welcome.html", "Hello {{name}}");

        let html = engine
            .render("welcome", &json!({"name": "<b>Bob</b>"}))
            .await
            .unwrap();

        assert_eq!(html, "Hello &lt;b&gt;Bob&lt;/b&gt;");
    }

    #[tokio::test]
    async fn test_missing_template_is_a_load_error() {
        let dir = tempfile::tempdir().unwrap();
        let engine = TemplateEngine::new(dir.path());

        let err = engine.render("missing", &json!({})).await.unwrap_err();

        assert!(matches!(err, MailError::TemplateLoad { .. }));
    }

    #[tokio::test]
    async fn test_invalid_syntax_is_a_load_error() {
        let (_dir, engine) = engine_with("broken.html", "Hello {{name");

        let err = engine.render("broken", &json!({})).await.unwrap_err();

        assert!(matches!(err, MailError::TemplateLoad { .. }));
    }

    #[tokio::test]
    async fn test_missing_value_is_a_render_error() {
        let (_dir, engine) = engine_with("welcome.html", "Hello {{name}}");

        let err = engine
            .render("welcome", &json!({"other": 1}))
            .await
            .unwrap_err();

        assert!(matches!(err, MailError::TemplateRender { .. }));
    }

    #[tokio::test]
    async fn test_null_values_render_placeholder_free_templates() {
        let (_dir, engine) = engine_with("static.html", "<p>No placeholders</p>");

        let html = engine.render("static", &Value::Null).await.unwrap();

        assert_eq!(html, "<p>No placeholders</p>");
    }

    #[tokio::test]
    async fn test_on_disk_edits_are_picked_up() {
        let (dir, engine) = engine_with("welcome.html", "Hello {{name}}");

        let first = engine
            .render("welcome", &json!({"name": "Bob"}))
            .await
            .unwrap();
        assert_eq!(first, "Hello Bob");

        fs::write(dir.path().join("welcome.html"), "Hi {{name}}").unwrap();

        let second = engine
            .render("welcome", &json!({"name": "Bob"}))
            .await
            .unwrap();
        assert_eq!(second, "Hi Bob");
    }
}
