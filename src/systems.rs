use legion::world::SubWorld;
use legion::*;

use crate::components::*;
use crate::geometry::inside_boundary;
use crate::selection::Selection;

/// Only the secondary button inspects parts
fn selects(button: PointerButton) -> bool {
    button == PointerButton::Secondary
}

/// Resolves the pending press against every part's hit box.
///
/// Pivot beats bob beats rod where boxes overlap. A press that picks
/// nothing, including a non-secondary press on a part, clears the selection.
#[system]
pub fn select_part(
    world: &mut SubWorld,
    query: &mut Query<(&Part, &HitBox)>,
    #[resource] pending: &mut PendingPress,
    #[resource] selection: &mut Selection,
) {
    let Some(Press { pos, button }) = pending.0.take() else {
        return;
    };

    let hit = if selects(button) {
        query
            .iter(world)
            .filter(|(_, HitBox(bounds))| inside_boundary(bounds, pos))
            .min_by_key(|(part, _)| part.hit_priority())
    } else {
        None
    };

    let next = match hit {
        Some((part, HitBox(bounds))) => Selection::of(*part, *bounds),
        None => Selection::None,
    };

    if next != *selection {
        tracing::debug!(?pos, ?button, selected = ?next.part(), "selection changed");
    }

    *selection = next;
}
