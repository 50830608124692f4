use core::fmt;
use serde::{Deserialize, Serialize};

/// Fixed seats. Discriminants follow the deal order (south gets the first slice).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum PlayerPosition {
    South = 0,
    West = 1,
    North = 2,
    East = 3,
}

impl PlayerPosition {
    pub const LOOP: [PlayerPosition; 4] = [
        PlayerPosition::South,
        PlayerPosition::West,
        PlayerPosition::North,
        PlayerPosition::East,
    ];

    pub const fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(PlayerPosition::South),
            1 => Some(PlayerPosition::West),
            2 => Some(PlayerPosition::North),
            3 => Some(PlayerPosition::East),
            _ => None,
        }
    }

    pub const fn index(self) -> usize {
        self as usize
    }

    /// Play passes to the right: south, east, north, west.
    pub const fn next(self) -> PlayerPosition {
        match self {
            PlayerPosition::South => PlayerPosition::East,
            PlayerPosition::East => PlayerPosition::North,
            PlayerPosition::North => PlayerPosition::West,
            PlayerPosition::West => PlayerPosition::South,
        }
    }

    pub const fn partner(self) -> PlayerPosition {
        match self {
            PlayerPosition::South => PlayerPosition::North,
            PlayerPosition::North => PlayerPosition::South,
            PlayerPosition::West => PlayerPosition::East,
            PlayerPosition::East => PlayerPosition::West,
        }
    }

    pub const fn team(self) -> Team {
        match self {
            PlayerPosition::South | PlayerPosition::North => Team::Us,
            PlayerPosition::West | PlayerPosition::East => Team::Them,
        }
    }

    pub fn is_partner_of(self, other: PlayerPosition) -> bool {
        self.partner() == other
    }
}

impl fmt::Display for PlayerPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            PlayerPosition::South => "South",
            PlayerPosition::West => "West",
            PlayerPosition::North => "North",
            PlayerPosition::East => "East",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Team {
    Us,
    Them,
}

impl Team {
    pub const BOTH: [Team; 2] = [Team::Us, Team::Them];

    pub const fn opponent(self) -> Team {
        match self {
            Team::Us => Team::Them,
            Team::Them => Team::Us,
        }
    }

    pub const fn members(self) -> [PlayerPosition; 2] {
        match self {
            Team::Us => [PlayerPosition::South, PlayerPosition::North],
            Team::Them => [PlayerPosition::West, PlayerPosition::East],
        }
    }
}

impl fmt::Display for Team {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Team::Us => f.write_str("US"),
            Team::Them => f.write_str("THEM"),
        }
    }
}
