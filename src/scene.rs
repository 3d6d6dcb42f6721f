//! The pendulum as a legion world, plus the interaction state kept in its
//! resources.

use legion::*;

use crate::components::*;
use crate::config::Config;
use crate::geometry::{circle_hitbox, segment_hitbox};
use crate::selection::Selection;
use crate::systems as sys;

pub struct Scene {
    world: World,
    resources: Resources,
    schedule: Schedule,
}

impl Scene {
    pub fn new(config: &Config) -> Self {
        let mut world = World::default();

        let pivot = config.pivot_position();
        let bob = config.bob_position();
        let foreground = config.colors.foreground.into();
        let pivot_radius = config.pendulum.pivot_radius as f64;
        let bob_radius = config.pendulum.bob_radius as f64;
        let rod_width = config.pendulum.rod_width as f64;

        world.push((
            Part::Pivot,
            Position(pivot),
            ShapeInfo {
                radius: pivot_radius,
                color: foreground,
                outline: None,
            },
            HitBox(circle_hitbox(pivot, pivot_radius)),
        ));

        world.push((
            Part::Bob,
            Position(bob),
            ShapeInfo {
                radius: bob_radius,
                color: config.colors.background.into(),
                outline: Some(foreground),
            },
            HitBox(circle_hitbox(bob, bob_radius)),
        ));

        // hit-tested at twice the drawn stroke
        world.push((
            Part::Rod,
            Segment {
                start: pivot,
                end: bob,
                width: rod_width,
            },
            HitBox(segment_hitbox(pivot, bob, rod_width * 2.0)),
        ));

        let mut resources = Resources::default();
        resources.insert(PendingPress::default());
        resources.insert(Selection::default());
        resources.insert(Interaction::default());

        let schedule = Schedule::builder()
            .add_system(sys::select_part_system())
            .build();

        Self {
            world,
            resources,
            schedule,
        }
    }

    /// Runs hit-testing for a single pointer press.
    pub fn press(&mut self, press: Press) {
        self.resources.insert(PendingPress(Some(press)));
        self.schedule.execute(&mut self.world, &mut self.resources);
    }

    /// Returns true if this call flipped the latch.
    pub fn engage(&mut self) -> bool {
        let mut interaction = self.interaction();
        let flipped = interaction.engage();
        self.resources.insert(interaction);
        flipped
    }

    pub fn selection(&self) -> Selection {
        self.resources
            .get::<Selection>()
            .map(|selection| *selection)
            .unwrap_or_default()
    }

    pub fn interaction(&self) -> Interaction {
        self.resources
            .get::<Interaction>()
            .map(|interaction| *interaction)
            .unwrap_or_default()
    }

    pub fn world(&self) -> &World {
        &self.world
    }
}
