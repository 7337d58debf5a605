// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_html_content(size: usize) -> String {
    let base = r#"<section class="hero" style="color: red"><h1>Title</h1><p>Paragraph with <strong>some</strong> content.</p><img src="a.png" alt="A"><ul><li>One</li><li>Two</li></ul></section>"#;
    base.repeat(size)
}

#[allow(dead_code)]
pub fn generate_nested_html(sections: usize, depth: usize) -> String {
    let mut content = String::new();

    for section in 0..sections {
        content.push_str(&format!(
            r#"<div class="section-{section}" loopSource="items" loopVariable="item">"#
        ));
        content.push_str(&generate_nested_content(depth));
        content.push_str("</div>");
    }

    content
}

#[allow(dead_code)]
fn generate_nested_content(remaining_depth: usize) -> String {
    if remaining_depth == 0 {
        return "<p>Leaf paragraph &amp; text.</p>".to_string();
    }

    let mut content = String::from("<div>");
    content.push_str(&format!("<h2>Level {remaining_depth}</h2>"));

    // Inline SVG occasionally
    if remaining_depth % 2 == 0 {
        content.push_str(r#"<svg viewBox="0 0 24 24"><path d="M0 0h24v24H0z"/></svg>"#);
    }

    content.push_str(&generate_nested_content(remaining_depth - 1));
    content.push_str(&generate_nested_content(remaining_depth - 1));
    content.push_str("</div>");
    content
}

#[allow(dead_code)]
pub fn generate_large_document() -> String {
    generate_nested_html(20, 5)
}
