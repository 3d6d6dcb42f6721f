use glam::DVec2;
use sfml::graphics::{Color, IntRect};

/// The three inspectable parts of the pendulum.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Part {
    Pivot,
    Bob,
    Rod,
}

impl Part {
    pub fn name(self) -> &'static str {
        match self {
            Part::Pivot => "frictionless pivot",
            Part::Bob => "massive bob",
            Part::Rod => "massless rod",
        }
    }

    /// Lower wins when a pointer lies inside several hit boxes
    pub fn hit_priority(self) -> u8 {
        match self {
            Part::Pivot => 0,
            Part::Bob => 1,
            Part::Rod => 2,
        }
    }

    /// Lower is painted first. The bob covers the end of the rod.
    pub fn draw_layer(self) -> u8 {
        match self {
            Part::Pivot => 0,
            Part::Rod => 1,
            Part::Bob => 2,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Position(pub DVec2);

/// Line between two points, drawn `width` pixels thick
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    pub start: DVec2,
    pub end: DVec2,
    pub width: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ShapeInfo {
    pub radius: f64,
    pub color: Color,
    /// Ring drawn one pixel outside `radius`
    pub outline: Option<Color>,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HitBox(pub IntRect);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerButton {
    Primary,
    Middle,
    Secondary,
    /// Side buttons. They never select anything.
    Other,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Press {
    pub pos: (i32, i32),
    pub button: PointerButton,
}

/// Press waiting for the selection system
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PendingPress(pub Option<Press>);

/// One-way latch, set by the first key or mouse press.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Interaction {
    pub active: bool,
}

impl Interaction {
    /// Returns true only on the press that flips the latch.
    pub fn engage(&mut self) -> bool {
        !std::mem::replace(&mut self.active, true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rod_is_layered_between_pivot_and_bob() {
        let mut parts = [Part::Bob, Part::Rod, Part::Pivot];
        parts.sort_by_key(|part| part.draw_layer());

        assert_eq!(parts, [Part::Pivot, Part::Rod, Part::Bob]);
    }

    #[test]
    fn pivot_is_hit_before_bob_and_rod() {
        let mut parts = [Part::Rod, Part::Bob, Part::Pivot];
        parts.sort_by_key(|part| part.hit_priority());

        assert_eq!(parts, [Part::Pivot, Part::Bob, Part::Rod]);
    }

    #[test]
    fn latch_never_resets() {
        let mut interaction = Interaction::default();

        assert!(interaction.engage());
        assert!(!interaction.engage());
        assert!(interaction.active);
    }
}
