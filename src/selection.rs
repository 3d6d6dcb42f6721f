use sfml::graphics::IntRect;

use crate::components::Part;
use crate::geometry::{center, mid_bottom, mid_top};

/// The part picked by the last qualifying press, with the hit box it was
/// picked through. Only one part is ever selected.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Selection {
    #[default]
    None,
    Pivot(IntRect),
    Bob(IntRect),
    Rod(IntRect),
}

impl Selection {
    pub fn of(part: Part, bounds: IntRect) -> Self {
        match part {
            Part::Pivot => Selection::Pivot(bounds),
            Part::Bob => Selection::Bob(bounds),
            Part::Rod => Selection::Rod(bounds),
        }
    }

    pub fn part(&self) -> Option<Part> {
        match self {
            Selection::None => None,
            Selection::Pivot(_) => Some(Part::Pivot),
            Selection::Bob(_) => Some(Part::Bob),
            Selection::Rod(_) => Some(Part::Rod),
        }
    }

    /// Label text, top line first
    pub fn label_lines(&self) -> Vec<String> {
        match self {
            Selection::None => vec![],
            Selection::Pivot(bounds) | Selection::Bob(bounds) => {
                let (x, y) = center(bounds);
                vec![
                    self.name().to_string(),
                    format!("position: ({x}, {y})"),
                ]
            }
            Selection::Rod(bounds) => {
                let (sx, sy) = mid_top(bounds);
                let (ex, ey) = mid_bottom(bounds);
                vec![
                    self.name().to_string(),
                    format!("start point: ({sx}, {sy})"),
                    format!("end point: ({ex}, {ey})"),
                ]
            }
        }
    }

    fn name(&self) -> &'static str {
        self.part().map(Part::name).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nothing_selected_has_no_label() {
        assert!(Selection::None.label_lines().is_empty());
        assert_eq!(Selection::default(), Selection::None);
    }

    #[test]
    fn pivot_label_shows_position() {
        let selection = Selection::of(Part::Pivot, IntRect::new(388, 138, 24, 24));

        assert_eq!(
            selection.label_lines(),
            ["frictionless pivot", "position: (400, 150)"]
        );
    }

    #[test]
    fn bob_label_shows_position() {
        let selection = Selection::of(Part::Bob, IntRect::new(373, 423, 54, 54));

        assert_eq!(selection.label_lines(), ["massive bob", "position: (400, 450)"]);
    }

    #[test]
    fn rod_label_shows_both_ends() {
        let selection = Selection::of(Part::Rod, IntRect::new(397, 150, 6, 300));

        assert_eq!(
            selection.label_lines(),
            [
                "massless rod",
                "start point: (400, 150)",
                "end point: (400, 450)"
            ]
        );
        assert_eq!(selection.part(), Some(Part::Rod));
    }
}
