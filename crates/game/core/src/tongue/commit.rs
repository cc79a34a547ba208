use std::collections::BTreeSet;

use crate::state::{EntityId, EntityKind, Position, TileRegistry};

use super::path::TonguePath;

/// Board changes made when a tongue is committed.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CommitReport {
    /// Tiles whose topmost grape was removed, in path order.
    pub eaten: Vec<Position>,
    /// The frog that was fed, if the catch succeeded.
    pub fed: Option<EntityId>,
}

impl CommitReport {
    pub fn is_catch(&self) -> bool {
        self.fed.is_some()
    }
}

/// Applies a resolved tongue to the board.
///
/// Eating is speculative until here: only when the tongue tip rests on a grape
/// of the frog's color are the matching grapes along the whole path removed
/// and the frog marked fed. Any other resting point leaves the board untouched,
/// even if matching grapes were passed on the way.
pub fn commit_path(registry: &mut TileRegistry, frog: EntityId, path: &TonguePath) -> CommitReport {
    let color = path.color();
    let Some(last) = path.last_position() else {
        return CommitReport::default();
    };

    let caught = registry
        .topmost_at(last)
        .is_some_and(|entity| entity.is_grape_of(color));
    if !caught {
        tracing::debug!("tongue of {} retracted empty-handed", frog);
        return CommitReport::default();
    }

    let mut visited = BTreeSet::new();
    let mut eaten = Vec::new();
    for position in path.positions() {
        if !visited.insert(position) {
            continue;
        }
        let Some(tile) = registry.tile_at_mut(position) else {
            continue;
        };
        if tile.topmost().is_some_and(|entity| entity.is_grape_of(color)) {
            tile.remove_topmost();
            eaten.push(position);
        }
    }

    let fed = registry
        .tile_at_mut(path.origin())
        .and_then(|tile| tile.topmost_mut())
        .filter(|entity| entity.id == frog)
        .and_then(|entity| match &mut entity.kind {
            EntityKind::Frog { fed, .. } => {
                *fed = true;
                Some(entity.id)
            }
            _ => None,
        });

    if fed.is_some() {
        tracing::info!("frog {} fed with {} grapes", frog, eaten.len());
    } else {
        tracing::warn!("frog {} no longer on top of {}", frog, path.origin());
    }

    CommitReport { eaten, fed }
}
