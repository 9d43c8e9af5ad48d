//! Error taxonomy for floor generation and room interaction.
//!
//! Content gaps with a sensible fallback (empty enemy or weapon pool) never
//! surface here; they degrade inside the generator.

/// Errors raised by the tower core
#[derive(Debug, thiserror::Error)]
pub enum TowerError {
    #[error("no floor-type covers level {level}")]
    NoEligibleFloorType { level: u32 },

    #[error("invalid precondition: {0}")]
    InvalidPrecondition(String),

    #[error("room index {index} out of range (floor has {len} rooms)")]
    RoomIndexOutOfRange { index: usize, len: usize },

    #[error("weapon index {index} out of range (inventory holds {len})")]
    WeaponIndexOutOfRange { index: usize, len: usize },

    #[error("invalid catalog: {0}")]
    InvalidCatalog(String),

    #[error("boss floor at level {level} has no enemy to fight")]
    NoBossCandidate { level: u32 },

    #[error("room {index} holds no enemy encounter")]
    NotAnEncounter { index: usize },

    #[error("room {index} holds no treasure")]
    NotATreasure { index: usize },

    #[error("enemy in room {index} is already defeated")]
    EncounterResolved { index: usize },

    #[error("player is not standing on the stairway")]
    NotOnStairway,

    #[error("the tower has been completed")]
    TowerCompleted,

    #[error("player has no weapon to attack with")]
    NoActiveWeapon,

    #[error("config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type TowerResult<T> = Result<T, TowerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = TowerError::NoEligibleFloorType { level: 4 };
        assert_eq!(err.to_string(), "no floor-type covers level 4");

        let err = TowerError::RoomIndexOutOfRange { index: 9, len: 7 };
        assert_eq!(
            err.to_string(),
            "room index 9 out of range (floor has 7 rooms)"
        );
    }

    #[test]
    fn test_io_error_converts() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: TowerError = io.into();
        assert!(matches!(err, TowerError::Io(_)));
    }
}
