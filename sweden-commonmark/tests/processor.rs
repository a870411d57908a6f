use sweden_commonmark::{
  MarkdownOptions,
  MarkdownOptionsBuilder,
  MarkdownProcessor,
  render_body,
};

#[test]
fn test_local_link_becomes_doc_reference() {
  let html = render_body("Visit [the setup guide](setup.md) for details.");
  assert!(html.contains("[the setup guide](doc:setup)"));
  assert!(!html.contains("<a "));
}

#[test]
fn test_external_link_is_unchanged() {
  let html = render_body("Read [docs](https://example.com/page).");
  assert_eq!(html, "<p>Read [docs](https://example.com/page).</p>\n");
}

#[test]
fn test_mailto_link_is_unchanged() {
  let html = render_body("[Mail us](mailto:docs@example.com)");
  assert_eq!(html, "<p>[Mail us](mailto:docs@example.com)</p>\n");
}

#[test]
fn test_nested_relative_link() {
  let html = render_body("See [install](../guides/install.md#linux).");
  assert!(html.contains("[install](doc:../guides/install)"));
}

#[test]
fn test_link_text_keeps_inline_formatting() {
  let html = render_body("[*fancy* `code`](page.md)");
  assert_eq!(
    html,
    "<p>[<em>fancy</em> <code>code</code>](doc:page)</p>\n"
  );
}

#[test]
fn test_link_title_follows_link_text() {
  let html = render_body(r#"[text](page.md "Title")"#);
  assert_eq!(html, "<p>[textTitle](doc:page)</p>\n");
}

#[test]
fn test_reference_style_link_is_rewritten() {
  let html = render_body("Go to [the page][ref].\n\n[ref]: other/page.md\n");
  assert_eq!(html, "<p>Go to [the page](doc:other/page).</p>\n");
}

#[test]
fn test_link_inside_heading_and_list() {
  let html = render_body("## See [x](y.md)\n\n- [a](a.md)\n- [b](https://b.example)\n");
  assert!(html.contains("<h2>See [x](doc:y)</h2>"));
  assert!(html.contains("<li>[a](doc:a)</li>"));
  assert!(html.contains("<li>[b](https://b.example)</li>"));
}

#[test]
fn test_autolinks_are_links_too() {
  let html = render_body("<https://example.com>");
  assert_eq!(html, "<p>[https://example.com](https://example.com)</p>\n");
}

#[test]
fn test_images_are_left_to_the_baseline_renderer() {
  let html = render_body("![diagram](diagram.png)");
  assert!(html.contains("<img src=\"diagram.png\" alt=\"diagram\""));
  assert!(!html.contains("doc:"));
}

#[test]
fn test_other_blocks_use_baseline_rendering() {
  let md = "# Heading\n\nSome **bold** and _em_.\n\n```rust\nfn main() {}\n```\n\n> quote\n";
  let html = render_body(md);
  assert!(html.starts_with("<h1>Heading</h1>\n\n"));
  assert!(html.contains("<p>Some <strong>bold</strong> and <em>em</em>.</p>"));
  assert!(
    html.contains("<pre><code class=\"language-rust\">fn main() {}\n</code></pre>")
  );
  assert!(html.contains("<blockquote>\n<p>quote</p>\n</blockquote>"));
  assert!(html.ends_with("</blockquote>\n"));
}

#[test]
fn test_raw_html_is_skipped_by_default() {
  let html = render_body("<div class=\"note\">raw</div>\n\nText with <span>inline</span> html.");
  assert_eq!(html, "<p>Text with inline html.</p>\n");
}

#[test]
fn test_raw_html_can_be_kept() {
  let processor =
    MarkdownProcessor::new(MarkdownOptionsBuilder::new().skip_html(false).build());
  let html = processor.render("<div>raw</div>\n\n[a](a.md)");
  assert_eq!(html, "<div>raw</div>\n\n<p>[a](doc:a)</p>\n");
}

#[test]
fn test_processor_is_reusable_across_documents() {
  let processor = MarkdownProcessor::new(MarkdownOptions::default());
  let first = processor.render("[one](one.md)");
  let second = processor.render("[two](two.md)");
  assert_eq!(first, "<p>[one](doc:one)</p>\n");
  assert_eq!(second, "<p>[two](doc:two)</p>\n");
}
