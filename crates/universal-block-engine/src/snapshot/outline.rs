use std::fmt::Write;

use crate::block::Block;

/// Renders a forest as one line per block, children indented by two spaces.
///
/// ```text
/// div.card blocks
///   h2 text "Title"
///   img empty self-closing src="x.jpg"
/// ```
pub fn outline(forest: &[Block]) -> String {
    let mut out = String::new();
    write_blocks(&mut out, forest, 0);
    out
}

fn write_blocks(out: &mut String, forest: &[Block], depth: usize) {
    for block in forest {
        write_line(out, block, depth);
        write_blocks(out, block.children(), depth + 1);
    }
}

fn write_line(out: &mut String, b: &Block, depth: usize) {
    let _ = write!(out, "{:indent$}{}", "", b.tag_name, indent = depth * 2);
    for class in b.class_name.split_whitespace() {
        let _ = write!(out, ".{class}");
    }
    let _ = write!(out, " {}", b.content_type().as_str());
    if b.is_self_closing() {
        out.push_str(" self-closing");
    }
    for (name, value) in b.attributes.iter() {
        let _ = write!(out, " {name}={value:?}");
    }
    for (name, value) in b.controls.entries() {
        let _ = write!(out, " @{name}={value:?}");
    }
    if let Some(content) = b.inner_content() {
        let _ = write!(out, " {content:?}");
    }
    out.push('\n');
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::block::ControlFields;

    #[test]
    fn renders_nested_forest() {
        let forest = vec![
            Block::blocks(
                "div",
                vec![
                    Block::text("h2", "Title"),
                    Block::self_closing("img").with_attribute("src", "x.jpg"),
                ],
            )
            .with_class("card wide")
            .with_controls(ControlFields {
                loop_source: Some("posts".into()),
                ..Default::default()
            }),
        ];

        assert_eq!(
            outline(&forest),
            "div.card.wide blocks @loopSource=\"posts\"\n  h2 text \"Title\"\n  img empty self-closing src=\"x.jpg\"\n"
        );
    }
}
