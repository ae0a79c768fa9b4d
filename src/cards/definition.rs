//! Card definitions - static card data.
//!
//! A `Card` is an immutable (rank, faction) pair. Its numeric value and its
//! playable roles follow from the rank alone; the faction only matters for
//! the scuttle tie-break.

use serde::{Deserialize, Serialize};

/// Unique identifier for one of the 52 cards.
///
/// Ids are dense: `faction * 13 + rank`, so `0..52` covers the catalog.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CardId(pub u8);

impl CardId {
    /// Number of distinct cards.
    pub const COUNT: usize = 52;

    /// Create a new card ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// The id of the card with the given rank and faction.
    #[must_use]
    pub const fn of(rank: Rank, faction: Faction) -> Self {
        Self(faction.index() as u8 * 13 + rank.index() as u8)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u8 {
        self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match Card::from_id(*self) {
            Some(card) => write!(f, "{}", card),
            None => write!(f, "Card({})", self.0),
        }
    }
}

/// The thirteen ranks. `Knight`, `Mage` and `King` are the face ranks.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Rank {
    Ace,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Knight,
    Mage,
    King,
}

impl Rank {
    /// All ranks in ascending order.
    pub const ALL: [Rank; 13] = [
        Rank::Ace,
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Knight,
        Rank::Mage,
        Rank::King,
    ];

    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Point value: the numeric rank, 1 for the ace, 0 for face ranks.
    #[must_use]
    pub const fn value(self) -> u32 {
        match self {
            Rank::Knight | Rank::Mage | Rank::King => 0,
            _ => self as u32 + 1,
        }
    }

    #[must_use]
    pub const fn is_face(self) -> bool {
        matches!(self, Rank::Knight | Rank::Mage | Rank::King)
    }

    /// Can this rank be placed on the field for points?
    ///
    /// Every non-face rank except the nine, which is only ever a one-off.
    #[must_use]
    pub const fn can_play_as_point(self) -> bool {
        !self.is_face() && !matches!(self, Rank::Nine)
    }

    /// Can this rank be placed as a standing permanent?
    ///
    /// The Knight is excluded: it is attached to a point card instead.
    #[must_use]
    pub const fn can_play_as_permanent(self) -> bool {
        matches!(self, Rank::Eight | Rank::Mage | Rank::King)
    }

    /// Can a card of this rank attack an opposing point card?
    #[must_use]
    pub const fn can_scuttle(self) -> bool {
        self.value() > 0
    }
}

impl std::fmt::Display for Rank {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Rank::Ace => write!(f, "Ace"),
            Rank::Knight => write!(f, "Knight"),
            Rank::Mage => write!(f, "Mage"),
            Rank::King => write!(f, "King"),
            other => write!(f, "{}", other.value()),
        }
    }
}

/// The four factions, weakest to strongest.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Faction {
    Elf,
    Goblin,
    Human,
    Demon,
}

impl Faction {
    pub const ALL: [Faction; 4] = [Faction::Elf, Faction::Goblin, Faction::Human, Faction::Demon];

    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Raw strength used by the scuttle tie-break (Elf 0 .. Demon 3).
    #[must_use]
    pub const fn strength(self) -> u8 {
        self as u8
    }
}

impl std::fmt::Display for Faction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Faction::Elf => "Elf",
            Faction::Goblin => "Goblin",
            Faction::Human => "Human",
            Faction::Demon => "Demon",
        };
        f.write_str(name)
    }
}

/// An immutable card.
///
/// ## Example
///
/// ```
/// use rust_cuttle::cards::{Card, Faction, Rank};
///
/// let card = Card::new(Rank::Seven, Faction::Goblin);
/// assert_eq!(card.value(), 7);
/// assert_eq!(Card::from_id(card.id), Some(card));
/// assert_eq!(card.to_string(), "Goblin 7");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub id: CardId,
    pub rank: Rank,
    pub faction: Faction,
}

impl Card {
    #[must_use]
    pub const fn new(rank: Rank, faction: Faction) -> Self {
        Self {
            id: CardId::of(rank, faction),
            rank,
            faction,
        }
    }

    /// Decode a card from its id. Returns `None` for ids outside the catalog.
    #[must_use]
    pub fn from_id(id: CardId) -> Option<Self> {
        let raw = id.raw() as usize;
        if raw >= CardId::COUNT {
            return None;
        }
        Some(Self::new(Rank::ALL[raw % 13], Faction::ALL[raw / 13]))
    }

    #[must_use]
    pub const fn value(&self) -> u32 {
        self.rank.value()
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.faction, self.rank)
    }
}
