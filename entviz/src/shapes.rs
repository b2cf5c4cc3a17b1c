// Copyright 2019-2020 PolkaX. Licensed under MIT or Apache-2.0.

//! SVG markup emission.

use crate::layout::{Point, Rect, Size};

/// Quarter-turn rotations of a right triangle, naming the corner holding
/// the right angle.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum Rotation {
    /// Right angle at the bottom-left corner.
    R0,
    /// Right angle at the top-left corner.
    R90,
    /// Right angle at the top-right corner.
    R180,
    /// Right angle at the bottom-right corner.
    R270,
}

/// An SVG document under construction.
pub struct Canvas {
    body: String,
}

impl Canvas {
    /// Open a document of the given size.
    pub fn new(size: Size) -> Canvas {
        Canvas {
            body: format!(
                r#"<svg width="{}" height="{}" xmlns="http://www.w3.org/2000/svg">"#,
                size.width, size.height
            ),
        }
    }

    /// A filled rectangle.
    pub fn rect(&mut self, at: &Rect, fill: &str) {
        self.body.push_str(&format!(
            r#"<rect x="{}" y="{}" width="{}" height="{}" fill="{}"/>"#,
            at.left(),
            at.top(),
            at.size.width,
            at.size.height,
            fill
        ));
    }

    /// A filled circle inscribed in the given rectangle.
    pub fn circle(&mut self, at: &Rect, fill: &str) {
        let center = at.center();
        self.body.push_str(&format!(
            r#"<circle cx="{}" cy="{}" r="{}" fill="{}"/>"#,
            center.x,
            center.y,
            at.size.width / 2.0,
            fill
        ));
    }

    /// A right triangle filling half of the given rectangle.
    pub fn right_triangle(&mut self, at: &Rect, rotation: Rotation, fill: &str) {
        let points = match rotation {
            Rotation::R0 => format!("{} {} {}", at.top_left, at.bottom_left(), at.bottom_right()),
            Rotation::R90 => format!("{} {} {}", at.top_left, at.top_right(), at.bottom_left()),
            Rotation::R180 => format!("{} {} {}", at.top_left, at.top_right(), at.bottom_right()),
            Rotation::R270 => format!(
                "{} {} {}",
                at.bottom_left(),
                at.top_right(),
                at.bottom_right()
            ),
        };
        self.body.push_str(&format!(
            r#"<polygon points="{}" fill="{}"/>"#,
            points, fill
        ));
    }

    /// Centered text anchored at `at`.
    pub fn text(&mut self, at: Point, font_size: u32, fill: &str, content: &str) {
        self.body.push_str(&format!(
            r#"<text x="{}" y="{}" dominant-baseline="middle" text-anchor="middle" fill="{}" font-size="{}px">{}</text>"#,
            at.x, at.y, fill, font_size, content
        ));
    }

    /// Close the document and return the markup.
    pub fn finish(mut self) -> String {
        self.body.push_str("</svg>");
        self.body
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square() -> Rect {
        Rect::new(Point::new(100.0, 100.0), Size::new(50.0, 50.0))
    }

    fn assert_contains(markup: &str, parts: &[&str]) {
        for part in parts {
            assert!(markup.contains(part), "{:?} not in {}", part, markup);
        }
    }

    #[test]
    fn canvas_markup() {
        let markup = Canvas::new(Size::new(300.0, 200.0)).finish();
        assert_contains(
            &markup,
            &["<svg", r#"width="300"#, r#"height="200"#, r#"xmlns="http://"#],
        );
        assert!(markup.ends_with("</svg>"));
    }

    #[test]
    fn circle_markup() {
        let mut canvas = Canvas::new(Size::new(300.0, 200.0));
        canvas.circle(&square(), "blue");
        assert_contains(
            &canvas.finish(),
            &["<circle", r#"cx="125"#, r#"cy="125"#, r#"r="25"#, r#"fill="blue"#],
        );
    }

    #[test]
    fn rect_markup() {
        let mut canvas = Canvas::new(Size::new(300.0, 200.0));
        canvas.rect(&square(), "red");
        assert_contains(
            &canvas.finish(),
            &[
                "<rect",
                r#"x="100"#,
                r#"y="100"#,
                r#"width="50"#,
                r#"height="50"#,
                r#"fill="red"#,
            ],
        );
    }

    #[test]
    fn right_triangle_markup() {
        let cases = [
            (Rotation::R0, r#"points="100,100 100,150 150,150""#),
            (Rotation::R90, r#"points="100,100 150,100 100,150""#),
            (Rotation::R180, r#"points="100,100 150,100 150,150""#),
            (Rotation::R270, r#"points="100,150 150,100 150,150""#),
        ];
        for (rotation, expected) in &cases {
            let mut canvas = Canvas::new(Size::new(300.0, 200.0));
            canvas.right_triangle(&square(), *rotation, "green");
            assert_contains(&canvas.finish(), &["<polygon", expected, r#"fill="green"#]);
        }
    }

    #[test]
    fn text_markup() {
        let mut canvas = Canvas::new(Size::new(300.0, 200.0));
        canvas.text(Point::new(150.0, 190.0), 12, "black", "Bitcoin legacy");
        assert_contains(
            &canvas.finish(),
            &["<text", r#"font-size="12px""#, "Bitcoin legacy"],
        );
    }
}
