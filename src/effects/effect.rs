//! One-off effect table.
//!
//! Every rank with a one-off maps to exactly one `OneOff`. Dispatch is an
//! exhaustive match over `Rank`, so a new rank cannot be added without
//! deciding its effect here.

use serde::{Deserialize, Serialize};

use super::targeting::TargetRequirement;
use crate::cards::Rank;

/// A one-off effect.
///
/// ## Destroy / Return
///
/// - `DestroyPoint` (Ace): an opposing point card goes to the scrap pile
/// - `DestroyPermanent` (2): an opposing permanent or Knight goes to scrap
/// - `Bounce` (9): any opposing field card returns to hand
/// - `BouncePoint` (10): an opposing point card returns to hand
///
/// ## Card Flow
///
/// - `Reclaim` (3): a scrap card returns to the caster's hand
/// - `ForceDiscard` (4): the other seat discards
/// - `Draw` (5): the caster draws
/// - `Reveal` (7): the caster peeks at the top of the deck
///
/// ## Board Wipe
///
/// - `Sweep` (6): every permanent and every Knight goes to scrap
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OneOff {
    DestroyPoint,
    DestroyPermanent,
    Reclaim,
    ForceDiscard,
    Draw,
    Sweep,
    Reveal,
    Bounce,
    BouncePoint,
}

impl OneOff {
    /// The one-off of a rank, if it has one.
    ///
    /// ```
    /// use rust_cuttle::cards::Rank;
    /// use rust_cuttle::effects::OneOff;
    ///
    /// assert_eq!(OneOff::for_rank(Rank::Ace), Some(OneOff::DestroyPoint));
    /// assert_eq!(OneOff::for_rank(Rank::Eight), None);
    /// ```
    #[must_use]
    pub const fn for_rank(rank: Rank) -> Option<OneOff> {
        match rank {
            Rank::Ace => Some(OneOff::DestroyPoint),
            Rank::Two => Some(OneOff::DestroyPermanent),
            Rank::Three => Some(OneOff::Reclaim),
            Rank::Four => Some(OneOff::ForceDiscard),
            Rank::Five => Some(OneOff::Draw),
            Rank::Six => Some(OneOff::Sweep),
            Rank::Seven => Some(OneOff::Reveal),
            Rank::Nine => Some(OneOff::Bounce),
            Rank::Ten => Some(OneOff::BouncePoint),
            Rank::Eight | Rank::Knight | Rank::Mage | Rank::King => None,
        }
    }

    /// What the effect must be pointed at.
    #[must_use]
    pub const fn requirement(self) -> TargetRequirement {
        match self {
            OneOff::DestroyPoint | OneOff::BouncePoint => TargetRequirement::OpposingPoint,
            OneOff::DestroyPermanent => TargetRequirement::OpposingPermanent,
            OneOff::Reclaim => TargetRequirement::ScrapCard,
            OneOff::Bounce => TargetRequirement::OpposingAny,
            OneOff::ForceDiscard | OneOff::Draw | OneOff::Sweep | OneOff::Reveal => {
                TargetRequirement::None
            }
        }
    }

    #[must_use]
    pub const fn needs_target(self) -> bool {
        !matches!(self.requirement(), TargetRequirement::None)
    }
}

impl std::fmt::Display for OneOff {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text = match self {
            OneOff::DestroyPoint => "destroy a point card",
            OneOff::DestroyPermanent => "destroy a permanent",
            OneOff::Reclaim => "reclaim from scrap",
            OneOff::ForceDiscard => "force a discard",
            OneOff::Draw => "draw",
            OneOff::Sweep => "sweep permanents",
            OneOff::Reveal => "reveal the top of the deck",
            OneOff::Bounce => "return a card",
            OneOff::BouncePoint => "return a point card",
        };
        f.write_str(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_non_face_rank_but_eight_has_a_one_off() {
        for rank in Rank::ALL {
            let expected = !rank.is_face() && rank != Rank::Eight;
            assert_eq!(OneOff::for_rank(rank).is_some(), expected, "{rank}");
        }
    }

    #[test]
    fn test_targeted_one_offs() {
        let targeted: Vec<Rank> = Rank::ALL
            .into_iter()
            .filter(|&r| OneOff::for_rank(r).map_or(false, OneOff::needs_target))
            .collect();

        assert_eq!(
            targeted,
            vec![Rank::Ace, Rank::Two, Rank::Three, Rank::Nine, Rank::Ten]
        );
    }

    #[test]
    fn test_requirements() {
        assert_eq!(OneOff::DestroyPoint.requirement(), TargetRequirement::OpposingPoint);
        assert_eq!(OneOff::BouncePoint.requirement(), TargetRequirement::OpposingPoint);
        assert_eq!(OneOff::Bounce.requirement(), TargetRequirement::OpposingAny);
        assert_eq!(OneOff::Reclaim.requirement(), TargetRequirement::ScrapCard);
        assert_eq!(OneOff::Sweep.requirement(), TargetRequirement::None);
    }
}
