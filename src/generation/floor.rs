//! A generated floor: an ordered run of rooms plus the metadata of the
//! floor-type it was built from.

use serde::{Deserialize, Serialize};

use crate::error::{TowerError, TowerResult};
use crate::rng::RandomSource;
use crate::room::{Room, RoomKind};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Floor {
    pub name: String,
    pub sprite: String,
    pub level: u32,
    /// Chance in [0,1] that a room's true content is shown
    pub visibility: f64,
    rooms: Vec<Room>,
    boss: bool,
}

impl Floor {
    pub fn new(
        name: impl Into<String>,
        sprite: impl Into<String>,
        level: u32,
        visibility: f64,
        rooms: Vec<Room>,
    ) -> Self {
        Self {
            name: name.into(),
            sprite: sprite.into(),
            level,
            visibility,
            rooms,
            boss: false,
        }
    }

    pub(crate) fn into_boss(mut self) -> Self {
        self.boss = true;
        self
    }

    pub fn is_boss(&self) -> bool {
        self.boss
    }

    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }

    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    pub fn room(&self, index: usize) -> TowerResult<&Room> {
        let len = self.rooms.len();
        self.rooms
            .get(index)
            .ok_or(TowerError::RoomIndexOutOfRange { index, len })
    }

    pub fn room_mut(&mut self, index: usize) -> TowerResult<&mut Room> {
        let len = self.rooms.len();
        self.rooms
            .get_mut(index)
            .ok_or(TowerError::RoomIndexOutOfRange { index, len })
    }

    pub fn kinds(&self) -> Vec<RoomKind> {
        self.rooms.iter().map(Room::kind).collect()
    }

    pub fn count(&self, kind: RoomKind) -> usize {
        self.rooms.iter().filter(|room| room.kind() == kind).count()
    }

    pub fn stairway_index(&self) -> Option<usize> {
        self.rooms
            .iter()
            .position(|room| room.kind() == RoomKind::Stairway)
    }

    /// Whether the presentation layer should show a room's real content.
    pub fn reveals(&self, rng: &mut impl RandomSource) -> bool {
        rng.next_unit() < self.visibility
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::ScriptedRng;
    use crate::room::RoomBehavior;

    fn floor() -> Floor {
        Floor::new(
            "Cellar",
            "cellar.png",
            2,
            0.4,
            vec![
                Room::new(0, RoomBehavior::Empty),
                Room::new(1, RoomBehavior::Stairway),
                Room::new(2, RoomBehavior::Trap { damage: 3.0 }),
            ],
        )
    }

    #[test]
    fn test_room_lookup_rejects_bad_index() {
        let mut floor = floor();
        assert_eq!(floor.room(2).unwrap().kind(), RoomKind::Trap);
        assert!(matches!(
            floor.room(3),
            Err(TowerError::RoomIndexOutOfRange { index: 3, len: 3 })
        ));
        assert!(floor.room_mut(7).is_err());
    }

    #[test]
    fn test_stairway_and_counts() {
        let floor = floor();
        assert_eq!(floor.stairway_index(), Some(1));
        assert_eq!(floor.count(RoomKind::Empty), 1);
        assert_eq!(floor.count(RoomKind::Enemy), 0);
        assert!(!floor.is_boss());
    }

    #[test]
    fn test_reveals_against_visibility() {
        let floor = floor();
        let mut rng = ScriptedRng::new([0.1, 0.4, 0.9], []);
        assert!(floor.reveals(&mut rng));
        assert!(!floor.reveals(&mut rng));
        assert!(!floor.reveals(&mut rng));
    }
}
