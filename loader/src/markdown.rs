use pulldown_cmark::{html, Options, Parser};

/// Markdown-to-HTML conversion as a capability the loader is handed,
/// so tests can substitute a deterministic stub.
pub trait MarkdownRenderer: Send + Sync {
    fn render(&self, markdown: &str) -> String;
}

/// Renderer backed by pulldown-cmark with the common extensions enabled.
#[derive(Debug, Default, Clone, Copy)]
pub struct CmarkRenderer;

impl MarkdownRenderer for CmarkRenderer {
    fn render(&self, markdown: &str) -> String {
        if markdown.trim().is_empty() {
            return String::new();
        }

        let mut options = Options::empty();
        options.insert(Options::ENABLE_TABLES);
        options.insert(Options::ENABLE_FOOTNOTES);
        options.insert(Options::ENABLE_STRIKETHROUGH);
        options.insert(Options::ENABLE_TASKLISTS);

        let parser = Parser::new_ext(markdown, options);
        let mut html_output = String::new();
        html::push_html(&mut html_output, parser);
        html_output
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn heading_renders_to_h1() {
        let html = CmarkRenderer.render("# Hello");
        assert!(html.contains("<h1>Hello</h1>"), "got: {html}");
    }

    #[test]
    fn rendering_is_deterministic() {
        let source = "# Release 1.2\n\n- fixed *that* bug\n- ~~dropped~~ kept the old API\n";
        assert_eq!(CmarkRenderer.render(source), CmarkRenderer.render(source));
    }

    #[test]
    fn blank_input_renders_to_nothing() {
        assert_eq!(CmarkRenderer.render("   \n"), "");
    }
}
