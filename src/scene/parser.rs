//! Line-oriented scene config parser
//!
//! Every non-empty line is `<Keyword> <field> <field> ...` with whitespace as
//! the only delimiter. Unknown keywords are skipped so config files can carry
//! records for other tools.

use std::fmt::Display;
use std::path::PathBuf;
use std::str::FromStr;

use glam::Vec2;

use super::{Color, FontConfig, Scene, Shape, ShapeKind, WindowConfig};
use crate::{Result, SceneError};

/// Record keywords and the number of fields each takes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Keyword {
    Window,
    Font,
    Circle,
    Rectangle,
}

impl Keyword {
    fn from_token(token: &str) -> Option<Self> {
        match token {
            "Window" => Some(Keyword::Window),
            "Font" => Some(Keyword::Font),
            "Circle" => Some(Keyword::Circle),
            "Rectangle" => Some(Keyword::Rectangle),
            _ => None,
        }
    }

    fn as_str(&self) -> &'static str {
        match self {
            Keyword::Window => "Window",
            Keyword::Font => "Font",
            Keyword::Circle => "Circle",
            Keyword::Rectangle => "Rectangle",
        }
    }

    fn field_count(&self) -> usize {
        match self {
            Keyword::Window => 2,
            Keyword::Font => 5,
            Keyword::Circle => 9,
            Keyword::Rectangle => 10,
        }
    }
}

/// Positional reader over one record's fields
struct Fields<'a> {
    line: usize,
    tokens: Vec<&'a str>,
    cursor: usize,
}

impl<'a> Fields<'a> {
    /// Collect the fields after the keyword, checking there are enough
    fn new(line: usize, keyword: Keyword, tokens: Vec<&'a str>) -> Result<Self> {
        let expected = keyword.field_count();
        if tokens.len() < expected {
            return Err(SceneError::MalformedRecord {
                line,
                keyword: keyword.as_str(),
                expected,
                found: tokens.len(),
            });
        }
        if tokens.len() > expected {
            log::warn!(
                "line {}: ignoring {} extra field(s) on {} record",
                line,
                tokens.len() - expected,
                keyword.as_str()
            );
        }
        Ok(Self {
            line,
            tokens,
            cursor: 0,
        })
    }

    fn next_raw(&mut self) -> &'a str {
        // Field count is checked in `new`
        let token = self.tokens[self.cursor];
        self.cursor += 1;
        token
    }

    fn text(&mut self) -> String {
        self.next_raw().to_string()
    }

    fn parse<T>(&mut self, field: &'static str) -> Result<T>
    where
        T: FromStr,
        T::Err: Display,
    {
        let raw = self.next_raw();
        raw.parse::<T>().map_err(|e| self.invalid(field, raw, e.to_string()))
    }

    /// Any finite float
    fn coord(&mut self, field: &'static str) -> Result<f32> {
        let value: f32 = self.parse(field)?;
        if !value.is_finite() {
            return Err(self.invalid(field, &value.to_string(), "must be finite"));
        }
        Ok(value)
    }

    /// Finite, non-negative float
    fn length(&mut self, field: &'static str) -> Result<f32> {
        let value = self.coord(field)?;
        if value < 0.0 {
            return Err(self.invalid(field, &value.to_string(), "must not be negative"));
        }
        Ok(value)
    }

    /// Positive integer dimension
    fn dimension(&mut self, field: &'static str) -> Result<u32> {
        let value: u32 = self.parse(field)?;
        if value == 0 {
            return Err(self.invalid(field, "0", "must be positive"));
        }
        Ok(value)
    }

    /// Integer color channel, saturated into 0..=255
    fn channel(&mut self, field: &'static str) -> Result<u8> {
        let value: i64 = self.parse(field)?;
        if !(0..=255).contains(&value) {
            log::warn!(
                "line {}: {} value {} outside 0-255, clamping",
                self.line,
                field,
                value
            );
        }
        Ok(value.clamp(0, 255) as u8)
    }

    fn color(&mut self) -> Result<Color> {
        Ok(Color::new(
            self.channel("red")?,
            self.channel("green")?,
            self.channel("blue")?,
        ))
    }

    fn vec2(&mut self, x: &'static str, y: &'static str) -> Result<Vec2> {
        Ok(Vec2::new(self.coord(x)?, self.coord(y)?))
    }

    fn invalid(&self, field: &'static str, value: &str, reason: impl Into<String>) -> SceneError {
        SceneError::InvalidField {
            line: self.line,
            field,
            value: value.to_string(),
            reason: reason.into(),
        }
    }
}

/// Parse a whole config into a scene
pub fn parse_scene(text: &str) -> Result<Scene> {
    let mut scene = Scene::default();

    for (index, raw_line) in text.lines().enumerate() {
        let line = index + 1;
        let mut tokens = raw_line.split_whitespace();
        let Some(first) = tokens.next() else {
            continue;
        };
        let Some(keyword) = Keyword::from_token(first) else {
            log::debug!("line {}: skipping unknown record '{}'", line, first);
            continue;
        };

        let mut fields = Fields::new(line, keyword, tokens.collect())?;
        match keyword {
            Keyword::Window => scene.window = window(&mut fields)?,
            Keyword::Font => scene.font = font(&mut fields)?,
            Keyword::Circle => scene.shapes.push(circle(&mut fields)?),
            Keyword::Rectangle => scene.shapes.push(rectangle(&mut fields)?),
        }
    }

    Ok(scene)
}

fn window(fields: &mut Fields) -> Result<WindowConfig> {
    Ok(WindowConfig {
        width: fields.dimension("width")?,
        height: fields.dimension("height")?,
    })
}

fn font(fields: &mut Fields) -> Result<FontConfig> {
    Ok(FontConfig {
        path: PathBuf::from(fields.text()),
        size: fields.dimension("font size")?,
        color: fields.color()?,
    })
}

/// Fields shared by every shape record, in file order
fn shape_header(fields: &mut Fields) -> Result<(String, Vec2, Vec2, Color)> {
    let name = fields.text();
    let pos = fields.vec2("posX", "posY")?;
    let vel = fields.vec2("speedX", "speedY")?;
    let color = fields.color()?;
    Ok((name, pos, vel, color))
}

fn circle(fields: &mut Fields) -> Result<Shape> {
    let (name, pos, vel, color) = shape_header(fields)?;
    let radius = fields.length("radius")?;
    Ok(Shape::new(name, pos, vel, color, ShapeKind::circle(radius)))
}

fn rectangle(fields: &mut Fields) -> Result<Shape> {
    let (name, pos, vel, color) = shape_header(fields)?;
    let width = fields.length("width")?;
    let height = fields.length("height")?;
    Ok(Shape::new(name, pos, vel, color, ShapeKind::rectangle(width, height)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::CIRCLE_SEGMENTS;

    #[test]
    fn test_window_record() {
        let scene = parse_scene("Window 800 600").unwrap();
        assert_eq!(scene.window, WindowConfig { width: 800, height: 600 });
        assert!(scene.shapes.is_empty());
    }

    #[test]
    fn test_circle_record() {
        let scene = parse_scene("Circle A 10 10 1 1 255 0 0 20").unwrap();
        assert_eq!(scene.shapes.len(), 1);

        let c = &scene.shapes[0];
        assert_eq!(c.name, "A");
        assert_eq!(c.pos, Vec2::new(10.0, 10.0));
        assert_eq!(c.vel, Vec2::new(1.0, 1.0));
        assert_eq!(c.color, Color::new(255, 0, 0));
        assert_eq!(
            c.kind,
            ShapeKind::Circle {
                radius: 20.0,
                segments: CIRCLE_SEGMENTS
            }
        );
        assert!(c.visible);
    }

    #[test]
    fn test_rectangle_record_with_floats() {
        let scene = parse_scene("Rectangle Box -1.5 2.25 0.5 -3 0 128 255 40 60.5").unwrap();
        let r = &scene.shapes[0];
        assert_eq!(r.pos, Vec2::new(-1.5, 2.25));
        assert_eq!(r.vel, Vec2::new(0.5, -3.0));
        assert_eq!(r.color, Color::new(0, 128, 255));
        assert_eq!(r.kind, ShapeKind::rectangle(40.0, 60.5));
    }

    #[test]
    fn test_shape_order_preserved() {
        let text = "\
Rectangle R1 0 0 1 1 1 2 3 10 10
Circle C1 5 5 1 1 4 5 6 3
Rectangle R2 0 0 1 1 1 2 3 10 10
";
        let scene = parse_scene(text).unwrap();
        let names: Vec<&str> = scene.shapes.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, ["R1", "C1", "R2"]);
        assert!(!scene.shapes[0].is_circle());
        assert!(scene.shapes[1].is_circle());
    }

    #[test]
    fn test_unknown_and_blank_lines_ignored() {
        let base = parse_scene("Window 800 600\nCircle A 1 1 1 1 1 1 1 1").unwrap();
        let noisy = parse_scene(
            "\n  \nWindow 800 600\nSprite foo\n\t\nwindow 1 1\nCircle A 1 1 1 1 1 1 1 1\n",
        )
        .unwrap();
        assert_eq!(base, noisy);
    }

    #[test]
    fn test_last_window_and_font_win() {
        let text = "\
Window 100 100
Font a.ttf 10 1 2 3
Window 320 240
Font fonts/b.otf 24 200 100 50
";
        let scene = parse_scene(text).unwrap();
        assert_eq!(scene.window, WindowConfig { width: 320, height: 240 });
        assert_eq!(scene.font.path, PathBuf::from("fonts/b.otf"));
        assert_eq!(scene.font.size, 24);
        assert_eq!(scene.font.color, Color::new(200, 100, 50));
    }

    #[test]
    fn test_extra_whitespace_tolerated() {
        let scene = parse_scene("   Circle\tA   10  10 1\t1 255 0 0    20   ").unwrap();
        assert_eq!(scene.shapes[0].name, "A");
    }

    #[test]
    fn test_too_few_fields_is_malformed() {
        let err = parse_scene("Window 800 600\nCircle A 10 10 1 1 255 0 0").unwrap_err();
        match err {
            SceneError::MalformedRecord {
                line,
                keyword,
                expected,
                found,
            } => {
                assert_eq!(line, 2);
                assert_eq!(keyword, "Circle");
                assert_eq!(expected, 9);
                assert_eq!(found, 8);
            }
            other => panic!("unexpected error: {other}"),
        }

        assert!(matches!(
            parse_scene("Window 800"),
            Err(SceneError::MalformedRecord { line: 1, .. })
        ));
    }

    #[test]
    fn test_bad_number_is_invalid_field() {
        let err = parse_scene("Rectangle R x 0 0 0 0 0 0 1 1").unwrap_err();
        assert!(matches!(err, SceneError::InvalidField { field: "posX", line: 1, .. }));

        let err = parse_scene("Circle C 0 0 0 0 0 0 0 nan").unwrap_err();
        assert!(matches!(err, SceneError::InvalidField { field: "radius", .. }));
    }

    #[test]
    fn test_window_must_be_positive() {
        assert!(matches!(
            parse_scene("Window 0 600"),
            Err(SceneError::InvalidField { field: "width", .. })
        ));
        assert!(matches!(
            parse_scene("Window 800 -1"),
            Err(SceneError::InvalidField { field: "height", .. })
        ));
    }

    #[test]
    fn test_negative_geometry_rejected() {
        let err = parse_scene("Rectangle R 0 0 0 0 0 0 0 10 -2").unwrap_err();
        assert!(matches!(err, SceneError::InvalidField { field: "height", .. }));
        assert_eq!(err.line(), Some(1));
    }

    #[test]
    fn test_color_channels_saturate() {
        let scene = parse_scene("Circle A 0 0 0 0 300 -4 128 1").unwrap();
        assert_eq!(scene.shapes[0].color, Color::new(255, 0, 128));
    }

    #[test]
    fn test_extra_fields_ignored() {
        let scene = parse_scene("Window 800 600 32").unwrap();
        assert_eq!(scene.window, WindowConfig { width: 800, height: 600 });
    }
}
