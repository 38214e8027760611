//! Markdown Rendering
//!
//! Renders note content for the preview pane. Notes travel to the API as the
//! raw Markdown string; only the preview ever sees HTML.

use pulldown_cmark::{html::push_html, Options, Parser};

fn get_options() -> Options {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TASKLISTS);
    options
}

/// Render Markdown to HTML for the preview pane
pub fn render_markdown(text: &str) -> String {
    let parser = Parser::new_ext(text, get_options());
    let mut html_output = String::new();
    push_html(&mut html_output, parser);
    html_output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_headings_and_paragraphs() {
        let html = render_markdown("# Título\n\ntexto corrido");
        assert!(html.contains("<h1>Título</h1>"));
        assert!(html.contains("<p>texto corrido</p>"));
    }

    #[test]
    fn renders_task_lists() {
        let html = render_markdown("- [x] feito\n- [ ] pendente");
        assert!(html.contains("checkbox"));
        assert!(html.contains("<li>"));
    }

    #[test]
    fn empty_document_renders_empty() {
        assert_eq!(render_markdown(""), "");
    }
}
