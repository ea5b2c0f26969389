use bjtable::{
    ActionError, Card, CardDealt, EventLog, GameState, HandSnapshot, ManualClock, Outcome,
    RoundResult, Seat, Table, TableEvent, TableOptions, TableSnapshot,
};
use serde::Serialize;
use wasm_bindgen::prelude::*;

/// The table as seen from JavaScript.
///
/// The page drives time: call `tick` from `requestAnimationFrame` with
/// `performance.now()` and render the returned events.
#[wasm_bindgen]
pub struct WasmTable {
    table: Table<ManualClock, EventLog>,
    clock: ManualClock,
}

#[wasm_bindgen]
impl WasmTable {
    #[wasm_bindgen(constructor)]
    pub fn new(seed: u32) -> Self {
        let clock = ManualClock::new();
        let table = Table::with_observer(
            TableOptions::default(),
            seed as u64,
            clock.clone(),
            EventLog::new(),
        );
        Self { table, clock }
    }

    pub fn start_round(&mut self) -> Result<JsValue, JsValue> {
        let result = self.table.start_round();
        self.respond(result)
    }

    pub fn hit(&mut self) -> Result<JsValue, JsValue> {
        let result = self.table.hit();
        self.respond(result)
    }

    pub fn stand(&mut self) -> Result<JsValue, JsValue> {
        let result = self.table.stand();
        self.respond(result)
    }

    pub fn reset(&mut self) -> Result<JsValue, JsValue> {
        let result = self.table.reset();
        self.respond(result)
    }

    /// Moves the clock to `now_ms`, runs everything due, and returns the
    /// events produced since the last call.
    pub fn tick(&mut self, now_ms: f64) -> Result<JsValue, JsValue> {
        self.clock.set(now_ms.max(0.0) as u64);
        self.table.advance();

        let events: Vec<JsEvent> = self
            .table
            .observer_mut()
            .drain()
            .into_iter()
            .map(JsEvent::from)
            .collect();
        to_js_value(&events)
    }

    pub fn next_due(&self) -> Option<f64> {
        self.table.next_due().map(|due| due as f64)
    }

    pub fn snapshot(&self) -> Result<JsValue, JsValue> {
        to_js_value(&Snapshot::from(self.table.snapshot()))
    }
}

impl WasmTable {
    /// Ignored actions are not errors for the page: it gets the unchanged
    /// table back along with the reason.
    fn respond(&self, result: Result<TableSnapshot, ActionError>) -> Result<JsValue, JsValue> {
        let response = match result {
            Ok(snapshot) => ActionResponse {
                accepted: true,
                ignored_because: None,
                table: Snapshot::from(snapshot),
            },
            Err(err) => ActionResponse {
                accepted: false,
                ignored_because: Some(err.to_string()),
                table: Snapshot::from(self.table.snapshot()),
            },
        };
        to_js_value(&response)
    }
}

#[derive(Serialize)]
struct ActionResponse {
    accepted: bool,
    ignored_because: Option<String>,
    table: Snapshot,
}

#[derive(Serialize)]
struct Snapshot {
    state: &'static str,
    player: JsHand,
    dealer: JsHand,
    input_enabled: bool,
    cards_remaining: u32,
    result: Option<JsRoundResult>,
}

impl From<TableSnapshot> for Snapshot {
    fn from(snapshot: TableSnapshot) -> Self {
        Self {
            state: state_to_str(snapshot.state),
            player: JsHand::from(snapshot.player),
            dealer: JsHand::from(snapshot.dealer),
            input_enabled: snapshot.input_enabled,
            cards_remaining: snapshot.shoe_remaining as u32,
            result: snapshot.result.map(JsRoundResult::from),
        }
    }
}

#[derive(Serialize)]
struct JsCard {
    rank: u8,
    label: &'static str,
}

#[derive(Serialize)]
struct JsHand {
    seat: &'static str,
    cards: Vec<JsCard>,
    score: u8,
    active: bool,
}

impl From<HandSnapshot> for JsHand {
    fn from(hand: HandSnapshot) -> Self {
        Self {
            seat: seat_to_str(hand.seat),
            cards: hand.cards.into_iter().map(card_to_js).collect(),
            score: hand.score,
            active: hand.active,
        }
    }
}

#[derive(Serialize)]
struct JsRoundResult {
    outcome: &'static str,
    player_score: u8,
    dealer_score: u8,
    message: String,
}

impl From<RoundResult> for JsRoundResult {
    fn from(result: RoundResult) -> Self {
        Self {
            outcome: outcome_to_str(result.outcome),
            player_score: result.player_score,
            dealer_score: result.dealer_score,
            message: result.message(),
        }
    }
}

#[derive(Serialize)]
struct JsDealt {
    seat: &'static str,
    card: JsCard,
    card_index: u32,
    total_cards: u32,
    score: u8,
    started_at: f64,
    duration: f64,
}

impl From<CardDealt> for JsDealt {
    fn from(dealt: CardDealt) -> Self {
        Self {
            seat: seat_to_str(dealt.seat),
            card: card_to_js(dealt.card),
            card_index: dealt.card_index as u32,
            total_cards: dealt.total_cards as u32,
            score: dealt.score,
            started_at: dealt.animation.started_at as f64,
            duration: dealt.animation.duration as f64,
        }
    }
}

#[derive(Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum JsEvent {
    CardDealt(JsDealt),
    RoundOver(JsRoundResult),
    StateChanged { state: &'static str },
    InputChanged { enabled: bool },
    ShoeReshuffled { remaining: u32 },
}

impl From<TableEvent> for JsEvent {
    fn from(event: TableEvent) -> Self {
        match event {
            TableEvent::CardDealt(dealt) => Self::CardDealt(JsDealt::from(dealt)),
            TableEvent::RoundOver(result) => Self::RoundOver(JsRoundResult::from(result)),
            TableEvent::StateChanged(state) => Self::StateChanged {
                state: state_to_str(state),
            },
            TableEvent::InputChanged(enabled) => Self::InputChanged { enabled },
            TableEvent::ShoeReshuffled(remaining) => Self::ShoeReshuffled {
                remaining: remaining as u32,
            },
        }
    }
}

fn card_to_js(card: Card) -> JsCard {
    JsCard {
        rank: card.rank,
        label: card.label(),
    }
}

fn seat_to_str(seat: Seat) -> &'static str {
    match seat {
        Seat::Player => "Player",
        Seat::Dealer => "Dealer",
    }
}

fn state_to_str(state: GameState) -> &'static str {
    state.name()
}

fn outcome_to_str(outcome: Outcome) -> &'static str {
    match outcome {
        Outcome::Win => "Win",
        Outcome::Lose => "Lose",
        Outcome::Push => "Push",
    }
}

fn to_js_value<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|err| JsValue::from_str(&err.to_string()))
}
