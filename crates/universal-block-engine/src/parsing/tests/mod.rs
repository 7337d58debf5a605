//! End-to-end tests for HTML → block forest.
//!
//! Uses inline snapshots of the forest outline for readability, and checks
//! the builder invariants on every forest produced.

use pretty_assertions::assert_eq;
use rstest::rstest;

use crate::block::{Block, BlockContent, ContentType, ControlFields};
use crate::parsing::{BuildOptions, build_forest, build_forest_with};
use crate::snapshot::{invariants, outline};

fn build(html: &str) -> Vec<Block> {
    let forest = build_forest(html);
    invariants(&forest);
    forest
}

// Fixture scenarios

#[test]
fn card_with_heading_and_paragraph() {
    let forest = build(r#"<div class="card"><h2>Title</h2><p>Body</p></div>"#);

    insta::assert_snapshot!(outline(&forest).trim_end(), @r#"
    div.card blocks
      h2 text "Title"
      p text "Body"
    "#);
}

#[test]
fn image_is_self_closing() {
    let forest = build(r#"<img src="x.jpg" alt="X">"#);

    assert_eq!(
        forest,
        vec![
            Block::self_closing("img")
                .with_attribute("src", "x.jpg")
                .with_attribute("alt", "X")
        ]
    );
    insta::assert_snapshot!(outline(&forest).trim_end(), @r#"img empty self-closing src="x.jpg" alt="X""#);
}

#[test]
fn loop_directives_become_control_fields() {
    let forest = build(r#"<div loopSource="posts" loopVariable="p"><p>{{p.title}}</p></div>"#);

    let div = &forest[0];
    assert!(div.attributes.is_empty());
    assert_eq!(
        div.controls,
        ControlFields {
            loop_source: Some("posts".into()),
            loop_variable: Some("p".into()),
            ..Default::default()
        }
    );
    assert_eq!(div.children(), &[Block::text("p", "{{p.title}}")]);
}

#[test]
fn conditional_and_set_directives() {
    let forest = build(
        r#"<section conditionalVisibility="1" conditionalExpression="user.logged_in" setVariable="name" setExpression="user.name|title"><h3>Hi</h3></section>"#,
    );

    insta::assert_snapshot!(outline(&forest).trim_end(), @r#"
    section blocks @conditionalVisibility="true" @conditionalExpression="user.logged_in" @setVariable="name" @setExpression="user.name|title"
      h3 text "Hi"
    "#);
}

// SVG absorption

#[rstest]
#[case(r#"<svg width="24"><path d="M0 0h24"/></svg>"#, r#"<path d="M0 0h24"></path>"#)]
#[case(
    r#"<svg width="24"><g><circle r="4"/><text>Label</text></g></svg>"#,
    r#"<g><circle r="4"></circle><text>Label</text></g>"#
)]
#[case(r#"<svg width="24">only text</svg>"#, "only text")]
fn svg_is_absorbed_as_html(#[case] html: &str, #[case] inner: &str) {
    let forest = build(html);

    assert_eq!(forest.len(), 1);
    assert_eq!(forest[0].tag_name, "svg");
    assert_eq!(forest[0].content, BlockContent::Html(inner.to_string()));
    assert_eq!(forest[0].attributes.get("width"), Some("24"));
}

#[test]
fn empty_svg_is_html_too() {
    let forest = build("<svg></svg>");
    assert_eq!(forest, vec![Block::html("svg", "")]);
}

// Content types

#[test]
fn mixed_content_is_kept_as_html() {
    let forest = build("<p>Hello <strong>world</strong>!</p>");
    assert_eq!(
        forest,
        vec![Block::html("p", "Hello <strong>world</strong>!")]
    );
}

#[test]
fn blank_element_is_empty() {
    let forest = build("<div class=\"spacer\">   </div>");
    assert_eq!(forest, vec![Block::new("div").with_class("spacer")]);
}

#[test]
fn nested_structure_keeps_document_order() {
    let forest = build(
        r#"
        <main>
          <header><h1>Site</h1></header>
          <ul>
            <li>One</li>
            <li>Two <em>2</em></li>
          </ul>
          <footer></footer>
        </main>
        "#,
    );

    insta::assert_snapshot!(outline(&forest).trim_end(), @r#"
    main blocks
      header blocks
        h1 text "Site"
      ul blocks
        li text "One"
        li html "Two <em>2</em>"
      footer empty
    "#);
}

#[rstest]
#[case("")]
#[case("   ")]
#[case("\n\t\n")]
#[case("<!-- only a comment -->")]
fn blank_input_yields_empty_forest(#[case] html: &str) {
    assert!(build(html).is_empty());
}

#[test]
fn top_level_comments_are_skipped() {
    let forest = build("<p>a</p><!-- note --><p>b</p>");
    assert_eq!(forest, vec![Block::text("p", "a"), Block::text("p", "b")]);
}

#[test]
fn top_level_text_is_wrapped() {
    let forest = build("Intro text <p>Para</p> outro");
    assert_eq!(
        forest,
        vec![
            Block::text("p", "Intro text"),
            Block::text("p", "Para"),
            Block::text("p", "outro"),
        ]
    );
}

#[test]
fn head_only_tags_are_kept_in_place() {
    let forest = build(
        r#"<style>.a{color:red}</style><link rel="stylesheet" href="x.css"><div>x</div>"#,
    );

    insta::assert_snapshot!(outline(&forest).trim_end(), @r#"
    style text ".a{color:red}"
    link empty self-closing rel="stylesheet" href="x.css"
    div text "x"
    "#);
}

// Attributes

#[test]
fn style_is_stored_as_data_style() {
    let forest = build(r#"<div style="color: red" id="a">x</div>"#);
    let div = &forest[0];

    assert_eq!(div.style(), Some("color: red"));
    assert_eq!(div.attributes.keys().collect::<Vec<_>>(), vec!["data-style", "id"]);
}

#[test]
fn entities_in_attributes_are_decoded() {
    let forest = build(r#"<a href="/q?a=1&amp;b=2" title="Tom &amp; Jerry">x</a>"#);
    assert_eq!(forest[0].attributes.get("href"), Some("/q?a=1&b=2"));
    assert_eq!(forest[0].attributes.get("title"), Some("Tom & Jerry"));
}

#[test]
fn double_encoded_attributes_are_decoded_once() {
    let forest = build(r#"<a title="&amp;amp;amp;" data-x="&amp;lt;b&amp;gt;">x</a>"#);
    assert_eq!(forest[0].attributes.get("title"), Some("&amp;amp;"));
    assert_eq!(forest[0].attributes.get("data-x"), Some("&lt;b&gt;"));
}

#[test]
fn attributes_and_text_share_one_decoding() {
    let forest = build(r#"<code title="&amp;lt;">&amp;lt;</code>"#);
    assert_eq!(
        forest,
        vec![Block::text("code", "&lt;").with_attribute("title", "&lt;")]
    );
}

#[test]
fn entities_in_text_are_decoded() {
    let forest = build("<p>a &lt; b &amp;&amp; c</p>");
    assert_eq!(forest, vec![Block::text("p", "a < b && c")]);
}

#[test]
fn boolean_attributes_keep_empty_value() {
    let forest = build(r#"<input type="checkbox" checked>"#);
    assert_eq!(forest[0].attributes.get("checked"), Some(""));
    assert!(forest[0].is_self_closing());
}

#[test]
fn custom_elements_are_ordinary_blocks() {
    let forest = build(r#"<my-card heading="Hi"><x-slot>Body</x-slot></my-card>"#);

    insta::assert_snapshot!(outline(&forest).trim_end(), @r#"
    my-card blocks heading="Hi"
      x-slot text "Body"
    "#);
}

// Self-closing

#[test]
fn configured_self_closing_wins_over_content() {
    let options = BuildOptions::new().with_self_closing_tags(["x-icon"]);
    let forest = build_forest_with(r#"<x-icon name="star">text</x-icon><p>after</p>"#, &options);
    invariants(&forest);

    assert!(forest[0].is_self_closing());
    assert_eq!(forest[0].content_type(), ContentType::Empty);
    assert_eq!(forest[0].attributes.get("name"), Some("star"));
    assert_eq!(forest[1], Block::text("p", "after"));
}

#[test]
fn self_closing_blocks_never_carry_content() {
    fn walk(forest: &[Block]) {
        for b in forest {
            if b.is_self_closing() {
                assert_eq!(b.content_type(), ContentType::Empty);
                assert_eq!(b.inner_content(), None);
                assert!(b.children().is_empty());
            }
            walk(b.children());
        }
    }

    walk(&build(
        r#"<div><br><hr class="sep"><img src="a"><p>x<br>y</p><input value="v"></div>"#,
    ));
}

// Malformed input

#[rstest]
#[case("<div><p>unclosed <b>bold</div>")]
#[case("</p></div>stray closers")]
#[case("<ul><li>one<li>two</ul>")]
#[case("<table><td>cell</td></table>")]
#[case("<div <p>>broken</p>")]
fn malformed_html_never_fails(#[case] html: &str) {
    let forest = build(html);
    assert!(!forest.is_empty());
}
