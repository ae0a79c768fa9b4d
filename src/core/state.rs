//! Game state: the complete snapshot of a match.
//!
//! ## Durable facts
//!
//! Deck, scrap pile, both players (hand, field, King count), turn seat,
//! phase, winner, counters, spy reveal flags, the pending seven choice and
//! the action history.
//!
//! ## Interaction
//!
//! The selected card, the pending action awaiting a target, and the status
//! message. These live in `GameState::interaction` so a replay or storage
//! layer can drop them without touching the rules.
//!
//! Uses `im` persistent data structures: cloning a snapshot is O(1), which
//! is what makes the clone-then-mutate discipline of the engine cheap.

use im::Vector;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::action::{ActionRecord, Target};
use super::player::{PlayerMap, Seat};
use crate::cards::{Card, CardId, CardRegistry, Rank};

/// How a card sits on the field.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FieldRole {
    /// Scores its value for its controller.
    Point,
    /// Standing effect (Mage, King, spy 8); scores nothing.
    Permanent,
}

/// A Knight attached to a point card, remembering who attached it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AttachedKnight {
    pub card: Card,
    pub attached_by: Seat,
}

/// A card on a field.
///
/// `owner` is the seat that played it and whose field list holds it.
/// `controller` scores it: the seat that attached the topmost Knight, or the
/// owner when no Knight is attached.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldCard {
    pub card: Card,
    pub role: FieldRole,
    pub owner: Seat,
    pub controller: Seat,
    pub knights: Vector<AttachedKnight>,
}

impl FieldCard {
    /// A point card controlled by its owner.
    #[must_use]
    pub fn point(card: Card, owner: Seat) -> Self {
        Self::with_role(card, FieldRole::Point, owner)
    }

    /// A permanent controlled by its owner.
    #[must_use]
    pub fn permanent(card: Card, owner: Seat) -> Self {
        Self::with_role(card, FieldRole::Permanent, owner)
    }

    fn with_role(card: Card, role: FieldRole, owner: Seat) -> Self {
        Self {
            card,
            role,
            owner,
            controller: owner,
            knights: Vector::new(),
        }
    }

    #[must_use]
    pub fn is_point(&self) -> bool {
        self.role == FieldRole::Point
    }

    #[must_use]
    pub fn is_permanent(&self) -> bool {
        self.role == FieldRole::Permanent
    }

    /// Is this the spy (an 8 played as a permanent)?
    #[must_use]
    pub fn is_spy(&self) -> bool {
        self.is_permanent() && self.card.rank == Rank::Eight
    }

    /// Points this card scores for its controller.
    #[must_use]
    pub fn points(&self) -> u32 {
        if self.is_point() {
            self.card.value()
        } else {
            0
        }
    }

    /// Attach a Knight; the attaching seat takes control.
    pub fn attach(&mut self, knight: Card, attached_by: Seat) {
        self.knights.push_back(AttachedKnight {
            card: knight,
            attached_by,
        });
        self.controller = attached_by;
    }

    /// Remove one attached Knight and recompute control.
    pub fn detach(&mut self, knight: CardId) -> Option<AttachedKnight> {
        let pos = self.knights.iter().position(|k| k.card.id == knight)?;
        let removed = self.knights.remove(pos);
        self.recompute_controller();
        Some(removed)
    }

    /// Remove every attached Knight; control reverts to the owner.
    pub fn strip_knights(&mut self) -> Vector<AttachedKnight> {
        let knights = std::mem::take(&mut self.knights);
        self.controller = self.owner;
        knights
    }

    /// Controller is the seat of the topmost Knight, else the owner.
    pub fn recompute_controller(&mut self) {
        self.controller = self.knights.back().map_or(self.owner, |k| k.attached_by);
    }
}

/// A seat's hand and field.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub seat: Seat,
    pub name: String,
    pub hand: Vector<Card>,
    /// Cards this seat played, including ones the other seat now controls.
    pub field: Vector<FieldCard>,
    /// Kings this seat controls on the field.
    pub kings: u8,
}

impl Player {
    #[must_use]
    pub fn new(seat: Seat, name: impl Into<String>) -> Self {
        Self {
            seat,
            name: name.into(),
            hand: Vector::new(),
            field: Vector::new(),
            kings: 0,
        }
    }

    #[must_use]
    pub fn hand_position(&self, card: CardId) -> Option<usize> {
        self.hand.iter().position(|c| c.id == card)
    }

    #[must_use]
    pub fn holds(&self, card: CardId) -> bool {
        self.hand_position(card).is_some()
    }

    /// Get a hand card by id.
    #[must_use]
    pub fn hand_card(&self, card: CardId) -> Option<Card> {
        self.hand.iter().find(|c| c.id == card).copied()
    }

    /// Remove a card from hand.
    pub fn take_from_hand(&mut self, card: CardId) -> Option<Card> {
        let pos = self.hand_position(card)?;
        Some(self.hand.remove(pos))
    }
}

/// Phase of the current turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// The current seat chooses an action.
    SelectAction,
    /// A played card waits for its target.
    SelectTarget,
    /// The other seat must discard (rank-4 one-off).
    OpponentMustDiscard,
    /// The current seat answers the rank-7 reveal.
    SevenChoice,
    /// Terminal.
    GameOver,
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text = match self {
            Phase::SelectAction => "action selection",
            Phase::SelectTarget => "target selection",
            Phase::OpponentMustDiscard => "the forced discard",
            Phase::SevenChoice => "the seven choice",
            Phase::GameOver => "game over",
        };
        f.write_str(text)
    }
}

/// The kind of play waiting in `Phase::SelectTarget`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PendingAction {
    OneOff,
    Knight,
    Scuttle,
}

/// Current selection.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    pub card: Option<Card>,
    pub pending: Option<PendingAction>,
    pub target: Option<Target>,
}

impl Selection {
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Ephemeral presentation-facing data.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Interaction {
    pub selection: Selection,
    pub message: String,
}

/// Position of a top-level field card.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldSlot {
    /// Whose field list holds the card (its owner).
    pub side: Seat,
    pub index: usize,
}

/// Position of an attached Knight.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct KnightSlot {
    /// The point card carrying the Knight.
    pub host: FieldSlot,
    pub index: usize,
}

/// Complete match snapshot.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// Draw pile; the front is the top.
    pub deck: Vector<Card>,

    /// Discard pile; destroyed and spent cards are appended.
    pub scrap: Vector<Card>,

    pub players: PlayerMap<Player>,

    /// Seat whose turn it is.
    pub current: Seat,

    pub phase: Phase,

    /// Set when a seat reaches its win target. `None` with
    /// `Phase::GameOver` means a draw.
    pub winner: Option<Seat>,

    /// Turn number (starts at 1).
    pub turn: u32,

    pub consecutive_passes: u8,

    /// `hand_revealed[seat]`: the other seat can see this seat's hand.
    pub hand_revealed: PlayerMap<bool>,

    /// Top-of-deck cards offered by the rank-7 one-off.
    pub seven_choices: Option<SmallVec<[Card; 2]>>,

    /// Every applied action in order.
    pub history: Vector<ActionRecord>,

    pub interaction: Interaction,
}

impl GameState {
    /// A state with the given deck, empty hands and fields, first seat to act.
    #[must_use]
    pub fn with_deck(deck: impl IntoIterator<Item = Card>, names: [&str; 2]) -> Self {
        let players = PlayerMap::new(|seat| Player::new(seat, names[seat.index()]));
        let message = turn_message(&players[Seat::First]);

        Self {
            deck: deck.into_iter().collect(),
            scrap: Vector::new(),
            players,
            current: Seat::First,
            phase: Phase::SelectAction,
            winner: None,
            turn: 1,
            consecutive_passes: 0,
            hand_revealed: PlayerMap::with_value(false),
            seven_choices: None,
            history: Vector::new(),
            interaction: Interaction {
                selection: Selection::default(),
                message,
            },
        }
    }

    /// All 52 cards in catalog order in the deck; nothing dealt.
    ///
    /// Starting point for hand-built positions:
    ///
    /// ```
    /// use rust_cuttle::cards::{CardId, Faction, Rank};
    /// use rust_cuttle::core::{FieldRole, GameState, Seat};
    ///
    /// let mut state = GameState::unshuffled(["Ada", "Bo"]);
    /// state.deal_to_field(Seat::Second, CardId::of(Rank::Six, Faction::Elf), FieldRole::Point);
    ///
    /// assert_eq!(state.deck.len(), 51);
    /// assert_eq!(state.points(Seat::Second), 6);
    /// ```
    #[must_use]
    pub fn unshuffled(names: [&str; 2]) -> Self {
        Self::with_deck(CardRegistry::standard().deck(), names)
    }

    // === Seats ===

    #[must_use]
    pub fn player(&self, seat: Seat) -> &Player {
        &self.players[seat]
    }

    pub fn player_mut(&mut self, seat: Seat) -> &mut Player {
        &mut self.players[seat]
    }

    /// The seat that is not taking the current turn.
    #[must_use]
    pub fn opponent(&self) -> Seat {
        self.current.opponent()
    }

    /// The seat whose input the engine is waiting for.
    #[must_use]
    pub fn acting_seat(&self) -> Seat {
        match self.phase {
            Phase::OpponentMustDiscard => self.current.opponent(),
            _ => self.current,
        }
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    /// The status message for display.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.interaction.message
    }

    pub fn set_message(&mut self, message: impl Into<String>) {
        self.interaction.message = message.into();
    }

    // === Field Queries ===

    /// Iterate over every top-level field card with the side holding it.
    pub fn field_cards(&self) -> impl Iterator<Item = (Seat, &FieldCard)> {
        Seat::ALL
            .into_iter()
            .flat_map(move |side| self.players[side].field.iter().map(move |fc| (side, fc)))
    }

    /// Find a top-level field card.
    #[must_use]
    pub fn locate_field(&self, card: CardId) -> Option<FieldSlot> {
        Seat::ALL.into_iter().find_map(|side| {
            self.players[side]
                .field
                .iter()
                .position(|fc| fc.card.id == card)
                .map(|index| FieldSlot { side, index })
        })
    }

    /// Find an attached Knight.
    #[must_use]
    pub fn locate_knight(&self, knight: CardId) -> Option<KnightSlot> {
        Seat::ALL.into_iter().find_map(|side| {
            self.players[side]
                .field
                .iter()
                .enumerate()
                .find_map(|(index, fc)| {
                    fc.knights
                        .iter()
                        .position(|k| k.card.id == knight)
                        .map(|k| KnightSlot {
                            host: FieldSlot { side, index },
                            index: k,
                        })
                })
        })
    }

    #[must_use]
    pub fn field_card(&self, card: CardId) -> Option<&FieldCard> {
        let slot = self.locate_field(card)?;
        self.field_at(slot)
    }

    #[must_use]
    pub fn field_at(&self, slot: FieldSlot) -> Option<&FieldCard> {
        self.players[slot.side].field.get(slot.index)
    }

    pub fn field_at_mut(&mut self, slot: FieldSlot) -> Option<&mut FieldCard> {
        self.players[slot.side].field.get_mut(slot.index)
    }

    // === Scoring and Permanents ===

    /// Sum of point cards this seat controls, on either field.
    #[must_use]
    pub fn points(&self, seat: Seat) -> u32 {
        self.field_cards()
            .filter(|(_, fc)| fc.controller == seat)
            .map(|(_, fc)| fc.points())
            .sum()
    }

    /// Kings this seat controls.
    #[must_use]
    pub fn king_count(&self, seat: Seat) -> usize {
        self.controlled_permanents(seat, Rank::King)
    }

    /// Does this seat control an active Mage?
    #[must_use]
    pub fn has_mage(&self, seat: Seat) -> bool {
        self.controlled_permanents(seat, Rank::Mage) > 0
    }

    /// Does this seat control a spy?
    #[must_use]
    pub fn has_spy(&self, seat: Seat) -> bool {
        self.controlled_permanents(seat, Rank::Eight) > 0
    }

    fn controlled_permanents(&self, seat: Seat, rank: Rank) -> usize {
        self.field_cards()
            .filter(|(_, fc)| fc.is_permanent() && fc.card.rank == rank && fc.controller == seat)
            .count()
    }

    /// Recompute the King counts and spy reveal flags from the fields.
    pub fn sync_derived(&mut self) {
        for seat in Seat::ALL {
            let kings = self.king_count(seat).min(u8::MAX as usize) as u8;
            let revealed = self.has_spy(seat.opponent());
            self.players[seat].kings = kings;
            self.hand_revealed[seat] = revealed;
        }
    }

    /// Do the durable facts of two snapshots match (interaction ignored)?
    #[must_use]
    pub fn same_board(&self, other: &GameState) -> bool {
        self.deck == other.deck
            && self.scrap == other.scrap
            && self.players == other.players
            && self.current == other.current
            && self.phase == other.phase
            && self.winner == other.winner
            && self.turn == other.turn
            && self.consecutive_passes == other.consecutive_passes
            && self.hand_revealed == other.hand_revealed
            && self.seven_choices == other.seven_choices
    }

    // === Setup ===

    /// Remove a specific card from the deck.
    pub fn take_from_deck(&mut self, card: CardId) -> Option<Card> {
        let pos = self.deck.iter().position(|c| c.id == card)?;
        Some(self.deck.remove(pos))
    }

    /// Move a card from the deck into a seat's hand.
    pub fn deal_to_hand(&mut self, seat: Seat, card: CardId) -> Option<Card> {
        let card = self.take_from_deck(card)?;
        self.players[seat].hand.push_back(card);
        Some(card)
    }

    /// Move a card from the deck onto a seat's field.
    pub fn deal_to_field(&mut self, seat: Seat, card: CardId, role: FieldRole) -> Option<Card> {
        let card = self.take_from_deck(card)?;
        let field_card = match role {
            FieldRole::Point => FieldCard::point(card, seat),
            FieldRole::Permanent => FieldCard::permanent(card, seat),
        };
        self.players[seat].field.push_back(field_card);
        self.sync_derived();
        Some(card)
    }

    /// Move a card from the deck to the scrap pile.
    pub fn deal_to_scrap(&mut self, card: CardId) -> Option<Card> {
        let card = self.take_from_deck(card)?;
        self.scrap.push_back(card);
        Some(card)
    }
}

/// "<name>'s turn".
pub(crate) fn turn_message(player: &Player) -> String {
    format!("{}'s turn", player.name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Faction;

    fn id(rank: Rank, faction: Faction) -> CardId {
        CardId::of(rank, faction)
    }

    #[test]
    fn test_unshuffled_state() {
        let state = GameState::unshuffled(["A", "B"]);

        assert_eq!(state.deck.len(), 52);
        assert!(state.scrap.is_empty());
        assert_eq!(state.current, Seat::First);
        assert_eq!(state.phase, Phase::SelectAction);
        assert_eq!(state.turn, 1);
        assert_eq!(state.message(), "A's turn");
    }

    #[test]
    fn test_deal_moves_out_of_deck() {
        let mut state = GameState::unshuffled(["A", "B"]);
        let ace = id(Rank::Ace, Faction::Elf);

        assert!(state.deal_to_hand(Seat::First, ace).is_some());
        assert!(state.player(Seat::First).holds(ace));
        assert_eq!(state.deck.len(), 51);

        // Already dealt
        assert!(state.deal_to_hand(Seat::Second, ace).is_none());
    }

    #[test]
    fn test_field_card_knight_stack() {
        let six = Card::new(Rank::Six, Faction::Human);
        let k1 = Card::new(Rank::Knight, Faction::Elf);
        let k2 = Card::new(Rank::Knight, Faction::Goblin);

        let mut fc = FieldCard::point(six, Seat::Second);
        assert_eq!(fc.controller, Seat::Second);

        fc.attach(k1, Seat::First);
        assert_eq!(fc.controller, Seat::First);

        fc.attach(k2, Seat::Second);
        assert_eq!(fc.controller, Seat::Second);

        // Removing the topmost Knight hands control back to the one below
        let removed = fc.detach(k2.id).unwrap();
        assert_eq!(removed.attached_by, Seat::Second);
        assert_eq!(fc.controller, Seat::First);

        let stripped = fc.strip_knights();
        assert_eq!(stripped.len(), 1);
        assert_eq!(fc.controller, Seat::Second);
        assert_eq!(fc.owner, Seat::Second);
    }

    #[test]
    fn test_detach_lower_knight_keeps_top_controller() {
        let mut fc = FieldCard::point(Card::new(Rank::Nine, Faction::Elf), Seat::First);
        let k1 = Card::new(Rank::Knight, Faction::Elf);
        let k2 = Card::new(Rank::Knight, Faction::Human);

        fc.attach(k1, Seat::Second);
        fc.attach(k2, Seat::First);
        fc.detach(k1.id);

        assert_eq!(fc.controller, Seat::First);
        assert!(fc.detach(k1.id).is_none());
    }

    #[test]
    fn test_points_follow_controller() {
        let mut state = GameState::unshuffled(["A", "B"]);
        state.deal_to_field(Seat::First, id(Rank::Seven, Faction::Elf), FieldRole::Point);
        state.deal_to_field(Seat::Second, id(Rank::Four, Faction::Elf), FieldRole::Point);
        state.deal_to_field(Seat::Second, id(Rank::Eight, Faction::Elf), FieldRole::Permanent);

        assert_eq!(state.points(Seat::First), 7);
        assert_eq!(state.points(Seat::Second), 4);

        let slot = state.locate_field(id(Rank::Four, Faction::Elf)).unwrap();
        let knight = state.take_from_deck(id(Rank::Knight, Faction::Demon)).unwrap();
        state.field_at_mut(slot).unwrap().attach(knight, Seat::First);

        assert_eq!(state.points(Seat::First), 11);
        assert_eq!(state.points(Seat::Second), 0);
        assert!(state.locate_knight(knight.id).is_some());
    }

    #[test]
    fn test_sync_derived() {
        let mut state = GameState::unshuffled(["A", "B"]);
        state.deal_to_field(Seat::First, id(Rank::King, Faction::Elf), FieldRole::Permanent);
        state.deal_to_field(Seat::First, id(Rank::King, Faction::Demon), FieldRole::Permanent);
        state.deal_to_field(Seat::Second, id(Rank::Eight, Faction::Goblin), FieldRole::Permanent);

        assert_eq!(state.player(Seat::First).kings, 2);
        assert_eq!(state.player(Seat::Second).kings, 0);
        assert!(state.hand_revealed[Seat::First]);
        assert!(!state.hand_revealed[Seat::Second]);
    }

    #[test]
    fn test_acting_seat() {
        let mut state = GameState::unshuffled(["A", "B"]);
        assert_eq!(state.acting_seat(), Seat::First);

        state.phase = Phase::OpponentMustDiscard;
        assert_eq!(state.acting_seat(), Seat::Second);
    }

    #[test]
    fn test_same_board_ignores_interaction() {
        let state = GameState::unshuffled(["A", "B"]);
        let mut other = state.clone();
        other.set_message("something else");

        assert!(state.same_board(&other));
        assert_ne!(state, other);

        other.turn += 1;
        assert!(!state.same_board(&other));
    }

    #[test]
    fn test_state_serialization() {
        let mut state = GameState::unshuffled(["A", "B"]);
        state.deal_to_hand(Seat::First, id(Rank::Three, Faction::Human));

        let json = serde_json::to_string(&state).unwrap();
        let deserialized: GameState = serde_json::from_str(&json).unwrap();

        assert_eq!(state, deserialized);
    }
}
