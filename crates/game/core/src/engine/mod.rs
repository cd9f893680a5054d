//! Round and match progression.
//!
//! The [`MatchController`] owns both fighters, the opponent policy and the
//! round bookkeeping. Callers drive it one fixed-length tick at a time with
//! [`MatchController::tick`], passing the human player's [`InputSignal`] and a
//! random source, and receive the [`MatchEvent`]s produced by that tick.
//!
//! Simulation time is derived from the tick counter. It stops while the
//! match is paused, so attack/jump expiries, announcement delays and the
//! fight timer all freeze together and resume where they left off.

mod events;
mod snapshot;

pub use events::{EventCategory, MatchEvent};
pub use snapshot::{FighterView, MatchResult, MatchSnapshot, MatchWinner};

use crate::ai::{OpponentPolicy, PolicyAction};
use crate::combat::{
    AttackDescriptor, AttackKind, BasicAttack, RoundWinner, check_collision, is_round_over,
    perform_attack, perform_special_move, round_winner,
};
use crate::config::MatchConfig;
use crate::env::RngSource;
use crate::error::{ConfigError, MatchError};
use crate::input::InputSignal;
use crate::state::{Direction, Fighter, MatchPhase, MatchState, Millis, Side, Stage, Tick};

/// Fight timer granularity.
const SECOND_MS: u64 = 1000;

/// Drives a best-of-N match between a human-controlled fighter (player 1) and
/// the scripted opponent (player 2).
///
/// ```text
/// Select ─begin()→ VersusAnnounce → RoundAnnounce → RoundActive → RoundEnd ─┬→ RoundAnnounce
///                                                                           └→ MatchEnd
/// ```
///
/// Every phase except `Select` and `MatchEnd` advances on [`tick`](Self::tick).
/// Fighters are reset in place when a round is announced, which also drops any
/// attack or jump deadline left over from the previous round.
#[derive(Clone, Debug)]
pub struct MatchController {
    config: MatchConfig,
    state: MatchState,
    fighters: [Fighter; 2],
    stage: Option<Stage>,
    policy: OpponentPolicy,
    tick: Tick,
    phase_entered_at: Millis,
    /// Simulation milliseconds accumulated toward the next fight-timer second.
    countdown_ms: u64,
    rounds_played: u32,
}

impl MatchController {
    pub fn new(
        config: MatchConfig,
        player1: Fighter,
        player2: Fighter,
        stage: Option<Stage>,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        let policy = OpponentPolicy::new(config.opponent_difficulty)?;
        let state = MatchState::new(config.max_rounds, config.round_seconds);

        let mut controller = Self {
            config,
            state,
            fighters: [player1, player2],
            stage,
            policy,
            tick: Tick::ZERO,
            phase_entered_at: Millis::ZERO,
            countdown_ms: 0,
            rounds_played: 0,
        };
        controller.reset_fighters();
        Ok(controller)
    }

    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    pub fn state(&self) -> &MatchState {
        &self.state
    }

    pub fn phase(&self) -> MatchPhase {
        self.state.phase
    }

    /// `[player1, player2]`.
    pub fn fighters(&self) -> &[Fighter; 2] {
        &self.fighters
    }

    pub fn fighter(&self, side: Side) -> &Fighter {
        &self.fighters[side.index()]
    }

    pub fn stage(&self) -> Option<&Stage> {
        self.stage.as_ref()
    }

    pub fn current_tick(&self) -> Tick {
        self.tick
    }

    /// Current simulation time.
    pub fn now(&self) -> Millis {
        Millis::at_tick(self.tick, self.config.tick_rate_hz)
    }

    pub fn is_paused(&self) -> bool {
        self.state.paused
    }

    /// Leaves `Select` and announces the two fighters.
    pub fn begin(&mut self) -> Result<Vec<MatchEvent>, MatchError> {
        if self.state.phase != MatchPhase::Select {
            return Err(MatchError::InvalidPhase {
                expected: MatchPhase::Select,
                actual: self.state.phase,
            });
        }

        self.state.phase = MatchPhase::VersusAnnounce;
        self.phase_entered_at = self.now();

        Ok(vec![MatchEvent::VersusAnnounced {
            player1: self.fighters[0].name().to_owned(),
            player2: self.fighters[1].name().to_owned(),
        }])
    }

    /// Freezes the match. Returns `None` if already paused or not running.
    pub fn pause(&mut self) -> Option<MatchEvent> {
        if self.state.paused || !self.state.phase.is_running() {
            return None;
        }
        self.state.paused = true;
        Some(MatchEvent::Paused)
    }

    /// Unfreezes the match. Returns `None` if it was not paused.
    pub fn resume(&mut self) -> Option<MatchEvent> {
        if !self.state.paused {
            return None;
        }
        self.state.paused = false;
        Some(MatchEvent::Resumed)
    }

    pub fn toggle_pause(&mut self) -> Option<MatchEvent> {
        if self.state.paused {
            self.resume()
        } else {
            self.pause()
        }
    }

    /// Returns to `Select` with fresh counters for a rematch between the same fighters.
    pub fn reset(&mut self) {
        self.state = MatchState::new(self.config.max_rounds, self.config.round_seconds);
        self.tick = Tick::ZERO;
        self.phase_entered_at = Millis::ZERO;
        self.countdown_ms = 0;
        self.rounds_played = 0;
        self.policy.reset();
        self.reset_fighters();
    }

    /// Advances the simulation by one tick.
    ///
    /// Does nothing while paused or outside a running phase.
    pub fn tick(
        &mut self,
        input: &InputSignal,
        rng: &mut (impl RngSource + ?Sized),
    ) -> Vec<MatchEvent> {
        let mut events = Vec::new();
        if self.state.paused || !self.state.phase.is_running() {
            return events;
        }

        let before = self.now();
        self.tick = self.tick.next();
        let now = self.now();
        let elapsed = now.since(before);

        for fighter in &mut self.fighters {
            fighter.expire(now);
        }

        let in_phase = now.since(self.phase_entered_at);
        match self.state.phase {
            MatchPhase::VersusAnnounce => {
                if in_phase >= self.config.versus_announce_ms {
                    self.announce_round(now, &mut events);
                }
            }
            MatchPhase::RoundAnnounce => {
                if in_phase >= self.config.round_announce_ms {
                    self.start_fight(now, &mut events);
                }
            }
            MatchPhase::RoundActive => self.step_round(input, now, elapsed, rng, &mut events),
            MatchPhase::RoundEnd => {
                if in_phase >= self.config.round_end_delay_ms {
                    self.finish_round(now, &mut events);
                }
            }
            MatchPhase::Select | MatchPhase::MatchEnd => {}
        }

        events
    }

    pub fn snapshot(&self) -> MatchSnapshot {
        MatchSnapshot {
            tick: self.tick,
            phase: self.state.phase,
            paused: self.state.paused,
            round: self.state.current_round,
            fight_timer: self.state.fight_timer,
            player1_wins: self.state.player1_wins,
            player2_wins: self.state.player2_wins,
            fighters: [
                FighterView::from(&self.fighters[0]),
                FighterView::from(&self.fighters[1]),
            ],
        }
    }

    /// Final result, available once the match has ended.
    pub fn result(&self) -> Option<MatchResult> {
        if self.state.phase != MatchPhase::MatchEnd {
            return None;
        }
        let winner = MatchWinner::from_wins(self.state.player1_wins, self.state.player2_wins);
        Some(MatchResult {
            winner,
            winner_name: self.match_winner_name(winner),
            player1_wins: self.state.player1_wins,
            player2_wins: self.state.player2_wins,
            rounds_played: self.rounds_played,
        })
    }

    fn reset_fighters(&mut self) {
        let (start1, start2) = (self.config.player1_start, self.config.player2_start);
        self.fighters[0].reset(start1, Direction::toward(start1, start2));
        self.fighters[1].reset(start2, Direction::toward(start2, start1));
    }

    fn announce_round(&mut self, now: Millis, events: &mut Vec<MatchEvent>) {
        self.reset_fighters();
        self.policy.reset();
        self.state.fight_timer = self.config.round_seconds;
        self.state.round_active = false;
        self.state.phase = MatchPhase::RoundAnnounce;
        self.phase_entered_at = now;
        self.countdown_ms = 0;

        events.push(MatchEvent::RoundAnnounced {
            round: self.state.current_round,
        });
    }

    fn start_fight(&mut self, now: Millis, events: &mut Vec<MatchEvent>) {
        self.state.phase = MatchPhase::RoundActive;
        self.state.round_active = true;
        self.phase_entered_at = now;
        self.countdown_ms = 0;

        events.push(MatchEvent::FightStarted {
            round: self.state.current_round,
        });
    }

    /// One active-round tick. The round-over check runs after every step that
    /// can change health or the timer, and the tick stops as soon as it holds.
    fn step_round(
        &mut self,
        input: &InputSignal,
        now: Millis,
        elapsed: u64,
        rng: &mut (impl RngSource + ?Sized),
        events: &mut Vec<MatchEvent>,
    ) {
        self.apply_player_input(input, now, rng, events);
        self.apply_opponent(now, rng, events);
        self.update_facing();

        if let Some(hit) = check_collision(
            &self.fighters[0],
            &self.fighters[1],
            &self.config.combat,
            rng,
        ) {
            let target = &mut self.fighters[hit.target.index()];
            let damage = target.take_damage(hit.damage);
            events.push(MatchEvent::HitLanded {
                target: hit.target,
                attacker: hit.attacker,
                damage,
                position: target.position,
            });

            let attacker = &mut self.fighters[hit.attacker.index()];
            attacker.mark_connected();
            if attacker.combo_counter > 1 {
                events.push(MatchEvent::ComboTriggered {
                    side: hit.attacker,
                    count: attacker.combo_counter,
                    position: attacker.position,
                });
            }

            if self.round_over() {
                self.end_round(now, events);
                return;
            }
        }

        let trickle = self.config.energy_trickle_tenths;
        for fighter in &mut self.fighters {
            fighter.trickle_energy(trickle);
        }

        self.countdown_ms += elapsed;
        while self.countdown_ms >= SECOND_MS && self.state.fight_timer > 0 {
            self.countdown_ms -= SECOND_MS;
            self.state.fight_timer -= 1;
            events.push(MatchEvent::TimerTicked {
                seconds: self.state.fight_timer,
            });
        }
        if self.round_over() {
            self.end_round(now, events);
            return;
        }

        if self.roll_hazard(rng, events) && self.round_over() {
            self.end_round(now, events);
        }
    }

    /// Movement and jumping need a free fighter; blocking follows `down`
    /// every tick; the first accepted attack request (light, heavy, special)
    /// wins the tick.
    fn apply_player_input(
        &mut self,
        input: &InputSignal,
        now: Millis,
        rng: &mut (impl RngSource + ?Sized),
        events: &mut Vec<MatchEvent>,
    ) {
        let combat = &self.config.combat;
        let player = &mut self.fighters[Side::Player1.index()];

        if player.can_act() {
            let step = if player.is_jumping() {
                combat.air_walk_step
            } else {
                combat.walk_step
            };
            let delta = f64::from(input.horizontal()) * step;
            if delta != 0.0 {
                player.shift(delta, combat.arena_min, combat.arena_max);
            }
            if input.up && player.start_jump(now, combat.jump_duration_ms) {
                events.push(MatchEvent::Jumped {
                    side: Side::Player1,
                });
            }
        }

        player.set_blocking(input.down);

        let mut started = None;
        if input.light_attack {
            started = perform_attack(player, BasicAttack::Light, now, combat);
        }
        if started.is_none() && input.heavy_attack {
            started = perform_attack(player, BasicAttack::Heavy, now, combat);
        }
        if started.is_none() && input.special {
            started = perform_special_move(player, now, combat, rng);
        }
        if let Some(descriptor) = started {
            events.push(attack_event(Side::Player1, player, descriptor));
        }
    }

    fn apply_opponent(
        &mut self,
        now: Millis,
        rng: &mut (impl RngSource + ?Sized),
        events: &mut Vec<MatchEvent>,
    ) {
        let combat = &self.config.combat;
        let [player, cpu] = &mut self.fighters;

        let Some(action) = self.policy.decide(cpu, player, now, combat, rng) else {
            return;
        };

        let started = match action {
            PolicyAction::Light => perform_attack(cpu, BasicAttack::Light, now, combat),
            PolicyAction::Heavy => perform_attack(cpu, BasicAttack::Heavy, now, combat),
            PolicyAction::Special => perform_special_move(cpu, now, combat, rng),
            PolicyAction::Jump => {
                events.push(MatchEvent::Jumped {
                    side: Side::Player2,
                });
                None
            }
        };
        if let Some(descriptor) = started {
            events.push(attack_event(Side::Player2, cpu, descriptor));
        }
    }

    fn update_facing(&mut self) {
        let (p1, p2) = (self.fighters[0].position, self.fighters[1].position);
        self.fighters[0].direction = Direction::toward(p1, p2);
        self.fighters[1].direction = Direction::toward(p2, p1);
    }

    /// Rolls the stage hazard. Returns true if it fired.
    fn roll_hazard(
        &mut self,
        rng: &mut (impl RngSource + ?Sized),
        events: &mut Vec<MatchEvent>,
    ) -> bool {
        let Some(stage) = self.stage.as_ref().filter(|stage| stage.has_hazards()) else {
            return false;
        };
        if !rng.chance(self.config.hazard_chance) {
            return false;
        }
        let Some(description) = rng
            .index(stage.hazards.len())
            .map(|idx| stage.hazards[idx].clone())
        else {
            return false;
        };

        let min = i32::try_from(self.config.hazard_damage_min).unwrap_or(i32::MAX);
        let max = i32::try_from(self.config.hazard_damage_max).unwrap_or(i32::MAX);
        let mut damage = [None; 2];
        for (slot, fighter) in damage.iter_mut().zip(self.fighters.iter_mut()) {
            if fighter.is_jumping() {
                continue;
            }
            let amount = rng.range_i32(min, max).max(0) as u32;
            *slot = Some(fighter.take_damage(amount));
        }

        events.push(MatchEvent::StageHazardTriggered {
            description,
            damage,
        });
        true
    }

    fn round_over(&self) -> bool {
        is_round_over(
            &self.fighters[0],
            &self.fighters[1],
            self.state.fight_timer,
        )
    }

    fn end_round(&mut self, now: Millis, events: &mut Vec<MatchEvent>) {
        let winner = round_winner(&self.fighters[0], &self.fighters[1]);
        self.state.record(winner);
        self.state.round_active = false;
        self.state.phase = MatchPhase::RoundEnd;
        self.phase_entered_at = now;
        self.rounds_played += 1;

        let winner_name = match winner {
            RoundWinner::Player1 => Some(self.fighters[0].name().to_owned()),
            RoundWinner::Player2 => Some(self.fighters[1].name().to_owned()),
            RoundWinner::Draw => None,
        };
        events.push(MatchEvent::RoundWon {
            round: self.state.current_round,
            winner,
            winner_name,
            player1: self.fighters[0].name().to_owned(),
            player2: self.fighters[1].name().to_owned(),
            player1_wins: self.state.player1_wins,
            player2_wins: self.state.player2_wins,
        });
    }

    /// Leaves `RoundEnd` once the delay has passed.
    fn finish_round(&mut self, now: Millis, events: &mut Vec<MatchEvent>) {
        if self.state.is_decided() {
            self.state.phase = MatchPhase::MatchEnd;
            let winner = MatchWinner::from_wins(self.state.player1_wins, self.state.player2_wins);
            events.push(MatchEvent::MatchEnded {
                winner,
                winner_name: self.match_winner_name(winner),
            });
        } else {
            self.state.current_round += 1;
            self.announce_round(now, events);
        }
    }

    fn match_winner_name(&self, winner: MatchWinner) -> Option<String> {
        match winner {
            MatchWinner::Player1 => Some(self.fighters[0].name().to_owned()),
            MatchWinner::Player2 => Some(self.fighters[1].name().to_owned()),
            MatchWinner::Draw => None,
        }
    }
}

fn attack_event(side: Side, fighter: &Fighter, descriptor: AttackDescriptor) -> MatchEvent {
    match descriptor.kind {
        AttackKind::Special => MatchEvent::SpecialMoveUsed {
            side,
            name: descriptor.move_name.unwrap_or_default(),
            color: fighter.color().to_owned(),
            position: fighter.position,
        },
        kind => MatchEvent::AttackStarted {
            side,
            kind,
            duration_ms: descriptor.duration_ms,
            is_combo: descriptor.is_combo,
        },
    }
}
