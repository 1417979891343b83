use super::*;

#[test]
fn renders_paragraphs_and_emphasis() {
    let html = render_markdown_html("Backend engineer.\n\nLoves **Rust**.");
    assert_eq!(html, "<p>Backend engineer.</p>\n<p>Loves <strong>Rust</strong>.</p>\n");
}

#[test]
fn drops_inline_html() {
    let html = render_markdown_html("hello <script>alert(1)</script> world");
    assert!(!html.contains("<script>"));
    assert!(html.contains("hello"));
}

#[test]
fn drops_block_html() {
    let html = render_markdown_html("<div onclick=\"x()\">raw</div>\n\ntext");
    assert!(!html.contains("<div"));
    assert!(html.contains("<p>text</p>"));
}

#[test]
fn empty_input_renders_nothing() {
    assert_eq!(render_markdown_html(""), "");
}

#[test]
fn fragment_links_survive_rendering() {
    let html = render_markdown_html("See [projects](#projects).");
    assert!(html.contains("<a href=\"#projects\">projects</a>"));
}
