//! Forced-discard choice.

use smallvec::SmallVec;

use crate::cards::{Card, CardId};

/// Pick `count` cards to give up: face cards first, then the lowest values.
///
/// ```
/// use rust_cuttle::cards::{Card, Faction, Rank};
/// use rust_cuttle::policy::choose_discards;
///
/// let hand = [
///     Card::new(Rank::Nine, Faction::Elf),
///     Card::new(Rank::Two, Faction::Elf),
///     Card::new(Rank::Knight, Faction::Elf),
/// ];
/// let picks = choose_discards(&hand, 2);
/// assert_eq!(picks.as_slice(), &[hand[2].id, hand[1].id]);
/// ```
#[must_use]
pub fn choose_discards(hand: &[Card], count: usize) -> SmallVec<[CardId; 2]> {
    let mut ranked: Vec<Card> = hand.to_vec();
    ranked.sort_by_key(|card| (!card.rank.is_face(), card.value(), card.id));
    ranked.into_iter().take(count).map(|card| card.id).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Faction, Rank};

    #[test]
    fn test_short_hand() {
        let hand = [Card::new(Rank::Six, Faction::Demon)];
        assert_eq!(choose_discards(&hand, 2).len(), 1);
        assert!(choose_discards(&[], 2).is_empty());
    }

    #[test]
    fn test_prefers_low_values_without_faces() {
        let hand = [
            Card::new(Rank::Ten, Faction::Elf),
            Card::new(Rank::Three, Faction::Human),
            Card::new(Rank::Ace, Faction::Goblin),
        ];
        let picks = choose_discards(&hand, 2);
        assert_eq!(picks.as_slice(), &[hand[2].id, hand[1].id]);
    }
}
