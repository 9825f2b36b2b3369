//! Terminal preview of a flattened layer.

use crate::types::{Layer, Pixel};

/// Render a layer as text, one line per row.
///
/// White is `#`, black is `.`, transparent is a space.
pub fn render_text(layer: &Layer<Pixel>) -> String {
    let mut out = String::with_capacity((layer.width() + 1) * layer.height());
    for row in layer.rows() {
        out.extend(row.iter().map(|p| p.glyph()));
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::decode;
    use crate::render::flatten;

    #[test]
    fn test_render_text_glyphs() {
        let layer = Layer::new(vec![
            vec![Pixel::White, Pixel::Black],
            vec![Pixel::Transparent, Pixel::White],
        ]);

        assert_eq!(render_text(&layer), "#.\n #\n");
    }

    #[test]
    fn test_render_text_snapshot() {
        let image = decode("111101001111100110112111", 4, 3).unwrap();
        let flat = flatten(&image).unwrap();

        insta::assert_snapshot!(render_text(&flat).trim_end(), @r"
        ####
        .#..
        ####
        ");
    }
}
