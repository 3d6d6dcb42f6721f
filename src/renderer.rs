//! Draws the pendulum, the selection label and the license notice.

use glam::DVec2;
use legion::*;
use sfml::cpp::FBox;
use sfml::graphics::*;
use sfml::system::Vector2f;

use crate::components::*;
use crate::config::Config;
use crate::error::{Error, Result};
use crate::scene::Scene;
use crate::selection::Selection;

const CIRCLE_POINTS: usize = 90;

pub struct Renderer {
    font: FBox<Font>,
    circle: CircleShape<'static>,
    rod: RectangleShape<'static>,

    background: Color,
    foreground: Color,
    size: Vector2f,
    inset: f32,
    small_size: u32,
    large_size: u32,
    license: String,
}

impl Renderer {
    pub fn new(config: &Config) -> Result<Self> {
        let path = &config.assets.font;
        let mut font = Font::from_file(&path.to_string_lossy())
            .map_err(|_| Error::Font(path.clone()))?;
        font.set_smooth(true);

        Ok(Self {
            font,
            circle: CircleShape::new(0.0, CIRCLE_POINTS),
            rod: RectangleShape::new(),
            background: config.colors.background.into(),
            foreground: config.colors.foreground.into(),
            size: Vector2f::new(config.window.width as f32, config.window.height as f32),
            inset: config.text.inset as f32,
            small_size: config.text.small_size,
            large_size: config.text.large_size,
            license: config.text.license.clone(),
        })
    }

    /// Paints one frame. Reads the scene, never changes it.
    pub fn draw(&mut self, target: &mut RenderWindow, scene: &Scene) {
        let FramePlan {
            selection,
            parts,
            license,
        } = plan(scene);

        target.clear(self.background);

        self.draw_label(target, &selection);

        for drawable in &parts {
            self.draw_part(target, drawable);
        }

        if license {
            self.draw_license(target);
        }
    }

    fn draw_label(&self, target: &mut RenderWindow, selection: &Selection) {
        let lines = selection.label_lines();
        if lines.is_empty() {
            return;
        }

        let spacing = self.font.line_spacing(self.large_size);
        let corner = Vector2f::new(self.size.x - self.inset, self.size.y);

        for (line, anchor) in lines.iter().zip(stack_upward(corner, spacing, lines.len())) {
            let mut text = Text::new(line.as_str(), &self.font, self.large_size);
            text.set_fill_color(self.foreground);

            let bounds = text.local_bounds();
            text.set_origin((bounds.left + bounds.width, spacing));
            text.set_position(anchor);

            target.draw(&text);
        }
    }

    fn draw_part(&mut self, target: &mut RenderWindow, drawable: &Drawable) {
        match *drawable {
            Drawable::Circle { pos, shape, .. } => {
                self.circle.set_radius(shape.radius as f32);
                self.circle.set_origin((shape.radius as f32, shape.radius as f32));
                self.circle.set_position((pos.x as f32, pos.y as f32));
                self.circle.set_fill_color(shape.color);

                match shape.outline {
                    Some(color) => {
                        self.circle.set_outline_color(color);
                        self.circle.set_outline_thickness(1.0);
                    }
                    None => self.circle.set_outline_thickness(0.0),
                }

                target.draw(&self.circle);
            }

            Drawable::Line {
                segment: Segment { start, end, width },
                ..
            } => {
                let delta = end - start;

                self.rod.set_size((delta.length() as f32, width as f32));
                self.rod.set_origin((0.0, width as f32 * 0.5));
                self.rod.set_position((start.x as f32, start.y as f32));
                self.rod.set_rotation(delta.y.atan2(delta.x).to_degrees() as f32);
                self.rod.set_fill_color(self.foreground);

                target.draw(&self.rod);
            }
        }
    }

    fn draw_license(&self, target: &mut RenderWindow) {
        let spacing = self.font.line_spacing(self.small_size);

        let mut text = Text::new(self.license.as_str(), &self.font, self.small_size);
        text.set_fill_color(self.foreground);
        text.set_origin((0.0, spacing));
        text.set_position((self.inset, self.size.y));

        target.draw(&text);
    }
}

/// One pendulum part ready to paint
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Drawable {
    Circle {
        part: Part,
        pos: DVec2,
        shape: ShapeInfo,
    },
    Line {
        part: Part,
        segment: Segment,
    },
}

impl Drawable {
    pub fn part(&self) -> Part {
        match *self {
            Drawable::Circle { part, .. } | Drawable::Line { part, .. } => part,
        }
    }
}

/// Everything a frame paints, parts in paint order
#[derive(Clone, Debug, PartialEq)]
pub struct FramePlan {
    pub selection: Selection,
    pub parts: Vec<Drawable>,
    /// The license notice shows until the first interaction
    pub license: bool,
}

pub fn plan(scene: &Scene) -> FramePlan {
    let mut query = <(
        &Part,
        Option<&Position>,
        Option<&ShapeInfo>,
        Option<&Segment>,
    )>::query();

    let mut parts = query
        .iter(scene.world())
        .filter_map(|(part, pos, shape, segment)| match (pos, shape, segment) {
            (Some(Position(pos)), Some(shape), _) => Some(Drawable::Circle {
                part: *part,
                pos: *pos,
                shape: *shape,
            }),
            (_, _, Some(segment)) => Some(Drawable::Line {
                part: *part,
                segment: *segment,
            }),
            _ => None,
        })
        .collect::<Vec<_>>();

    parts.sort_by_key(|drawable| drawable.part().draw_layer());

    FramePlan {
        selection: scene.selection(),
        parts,
        license: !scene.interaction().active,
    }
}

/// Anchors for `count` lines stacked upward so the last one sits on
/// `corner`. Top line first.
pub fn stack_upward(corner: Vector2f, spacing: f32, count: usize) -> Vec<Vector2f> {
    (0..count)
        .rev()
        .map(|i| Vector2f::new(corner.x, corner.y - spacing * i as f32))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::{PointerButton, Press};
    use crate::config::Config;

    #[test]
    fn bob_is_painted_after_the_rod() {
        let scene = Scene::new(&Config::default());

        let order = plan(&scene)
            .parts
            .iter()
            .map(Drawable::part)
            .collect::<Vec<_>>();

        assert_eq!(order, [Part::Pivot, Part::Rod, Part::Bob]);
    }

    #[test]
    fn parts_keep_their_geometry() {
        let scene = Scene::new(&Config::default());
        let parts = plan(&scene).parts;

        assert!(matches!(
            parts[0],
            Drawable::Circle { pos, shape, .. } if pos == DVec2::new(400.0, 150.0) && shape.outline.is_none()
        ));
        assert!(matches!(
            parts[1],
            Drawable::Line { segment, .. } if segment.end == DVec2::new(400.0, 450.0) && segment.width == 3.0
        ));
        assert!(matches!(
            parts[2],
            Drawable::Circle { shape, .. } if shape.radius == 27.0 && shape.outline == Some(Color::BLACK)
        ));
    }

    #[test]
    fn license_shows_until_first_interaction() {
        let mut scene = Scene::new(&Config::default());

        let before = plan(&scene);
        assert!(before.license);
        assert_eq!(plan(&scene), before);

        scene.engage();
        assert!(!plan(&scene).license);

        scene.press(Press {
            pos: (10, 10),
            button: PointerButton::Secondary,
        });
        assert!(!plan(&scene).license);
    }

    #[test]
    fn plan_carries_the_selection() {
        let mut scene = Scene::new(&Config::default());
        scene.press(Press {
            pos: (400, 150),
            button: PointerButton::Secondary,
        });

        assert_eq!(plan(&scene).selection.part(), Some(Part::Pivot));
    }

    #[test]
    fn single_line_sits_on_the_corner() {
        let anchors = stack_upward(Vector2f::new(797.0, 600.0), 24.0, 1);
        assert_eq!(anchors, [Vector2f::new(797.0, 600.0)]);
    }

    #[test]
    fn rod_label_stacks_three_lines() {
        let anchors = stack_upward(Vector2f::new(797.0, 600.0), 24.0, 3);

        assert_eq!(
            anchors,
            [
                Vector2f::new(797.0, 552.0),
                Vector2f::new(797.0, 576.0),
                Vector2f::new(797.0, 600.0),
            ]
        );
    }

    #[test]
    fn nothing_to_stack() {
        assert!(stack_upward(Vector2f::new(0.0, 0.0), 24.0, 0).is_empty());
    }
}
