//! Scuttle (attack) resolution.
//!
//! A hand card with a value attacks an opposing point card:
//!
//! | Values | Faction | Outcome |
//! |---|---|---|
//! | attacker > defender | any | both to scrap |
//! | attacker < defender | any | blocked |
//! | equal | attacker wins | defender to scrap, attacker stays in hand |
//! | equal | attacker loses | attacker to scrap |
//! | equal | same faction | both to scrap |
//!
//! Factions rank Elf < Goblin < Human < Demon, except that Elf beats Demon.

use serde::{Deserialize, Serialize};

use crate::cards::{Card, Faction};

/// Result of comparing two factions on an equal-value scuttle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Matchup {
    Win,
    Lose,
    Draw,
}

/// Compare the attacker's faction against the defender's.
///
/// ```
/// use rust_cuttle::cards::Faction;
/// use rust_cuttle::effects::{faction_matchup, Matchup};
///
/// assert_eq!(faction_matchup(Faction::Demon, Faction::Human), Matchup::Win);
/// assert_eq!(faction_matchup(Faction::Elf, Faction::Demon), Matchup::Win);
/// assert_eq!(faction_matchup(Faction::Demon, Faction::Elf), Matchup::Lose);
/// ```
#[must_use]
pub fn faction_matchup(attacker: Faction, defender: Faction) -> Matchup {
    use std::cmp::Ordering;

    match (attacker, defender) {
        (Faction::Elf, Faction::Demon) => Matchup::Win,
        (Faction::Demon, Faction::Elf) => Matchup::Lose,
        _ => match attacker.strength().cmp(&defender.strength()) {
            Ordering::Greater => Matchup::Win,
            Ordering::Less => Matchup::Lose,
            Ordering::Equal => Matchup::Draw,
        },
    }
}

/// What a scuttle does to the two cards (Mage protection aside).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScuttleOutcome {
    /// Attacker and defender both go to the scrap pile.
    Mutual,
    /// Defender goes to scrap; the attacker stays in hand.
    DefenderDestroyed,
    /// Attacker goes to scrap; the defender survives.
    AttackerDestroyed,
    /// Nothing moves.
    Blocked,
}

impl ScuttleOutcome {
    /// Does the defender leave the field?
    #[must_use]
    pub fn removes_defender(self) -> bool {
        matches!(self, ScuttleOutcome::Mutual | ScuttleOutcome::DefenderDestroyed)
    }

    /// Is the attacking card spent?
    #[must_use]
    pub fn spends_attacker(self) -> bool {
        matches!(self, ScuttleOutcome::Mutual | ScuttleOutcome::AttackerDestroyed)
    }
}

/// Resolve the value comparison and the faction tie-break.
#[must_use]
pub fn scuttle_outcome(attacker: Card, defender: Card) -> ScuttleOutcome {
    let (a, d) = (attacker.value(), defender.value());

    if a == 0 || d == 0 || a < d {
        return ScuttleOutcome::Blocked;
    }
    if a > d {
        return ScuttleOutcome::Mutual;
    }

    match faction_matchup(attacker.faction, defender.faction) {
        Matchup::Win => ScuttleOutcome::DefenderDestroyed,
        Matchup::Lose => ScuttleOutcome::AttackerDestroyed,
        Matchup::Draw => ScuttleOutcome::Mutual,
    }
}
