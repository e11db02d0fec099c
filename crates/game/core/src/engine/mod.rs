//! Battle controller and round driver.
//!
//! A [`Battle`] owns both rosters, the round counter and the roll stream.
//! Each call to [`Battle::run_round`] orders the living combatants by
//! effective speed and gives each one turn:
//!
//! ```text
//! start-of-turn effects → choose action → validate → apply → end-of-turn tick
//! ```
//!
//! The round stops as soon as one roster is wiped out.

mod effects;
mod execute;
mod turns;

pub use turns::turn_order;

use std::collections::HashSet;

use crate::ai::{ActionSource, AutoPilot, BattleView};
use crate::config::BattleConfig;
use crate::env::Dice;
use crate::error::BattleError;
use crate::event::{BattleEvent, Participant, RoundLog};
use crate::state::{Combatant, CombatantId, Team};

/// One battle between a player roster and an enemy roster.
#[derive(Clone, Debug)]
pub struct Battle {
    /// Players first, then enemies, each in roster order.
    combatants: Vec<Combatant>,
    player_count: usize,
    round: u32,
    dice: Dice,
    config: BattleConfig,
}

impl Battle {
    pub fn builder() -> BattleBuilder {
        BattleBuilder::default()
    }

    pub fn round(&self) -> u32 {
        self.round
    }

    pub fn config(&self) -> &BattleConfig {
        &self.config
    }

    pub fn dice(&self) -> &Dice {
        &self.dice
    }

    pub fn combatants(&self) -> &[Combatant] {
        &self.combatants
    }

    pub fn players(&self) -> &[Combatant] {
        &self.combatants[..self.player_count]
    }

    pub fn enemies(&self) -> &[Combatant] {
        &self.combatants[self.player_count..]
    }

    pub fn roster(&self, team: Team) -> &[Combatant] {
        match team {
            Team::Player => self.players(),
            Team::Enemy => self.enemies(),
        }
    }

    pub fn combatant(&self, id: CombatantId) -> Option<&Combatant> {
        self.combatants.iter().find(|c| c.id == id)
    }

    pub fn view(&self) -> BattleView<'_> {
        BattleView::new(&self.combatants, self.round)
    }

    /// True iff nobody on `team` is still alive.
    pub fn is_roster_defeated(&self, team: Team) -> bool {
        self.roster(team).iter().all(|c| !c.is_alive())
    }

    pub fn is_over(&self) -> bool {
        self.is_roster_defeated(Team::Player) || self.is_roster_defeated(Team::Enemy)
    }

    /// Winning side once the battle is over.
    ///
    /// Players win only if the enemy roster is down and theirs is not; a
    /// double knockout goes to the enemies.
    pub fn winner(&self) -> Option<Team> {
        self.is_over().then(|| self.decided_winner())
    }

    fn decided_winner(&self) -> Team {
        if self.is_roster_defeated(Team::Enemy) && !self.is_roster_defeated(Team::Player) {
            Team::Player
        } else {
            Team::Enemy
        }
    }

    /// Plays one round with every combatant on autopilot.
    pub fn run_round(&mut self) -> RoundLog {
        let mut pilot = AutoPilot::new(&self.config);
        self.run_round_with(&mut pilot)
    }

    /// Plays one round, asking `source` for every actor's action.
    ///
    /// Returns an empty log, without advancing the round counter, when the
    /// battle is already over.
    pub fn run_round_with<S>(&mut self, source: &mut S) -> RoundLog
    where
        S: ActionSource + ?Sized,
    {
        if self.is_over() {
            return RoundLog::new(self.round);
        }

        self.round += 1;
        let span = tracing::debug_span!("round", round = self.round);
        let _enter = span.enter();

        let mut log = RoundLog::new(self.round);
        log.push(BattleEvent::RoundStarted { round: self.round });

        for index in turn_order(&self.combatants) {
            if !self.combatants[index].is_alive() {
                continue;
            }
            self.take_turn(index, source, &mut log);
            if self.is_over() {
                break;
            }
        }

        if let Some(winner) = self.winner() {
            tracing::info!(round = self.round, %winner, "battle finished");
            log.push(BattleEvent::Victory { winner });
        }
        log
    }

    /// Runs rounds on autopilot until one side is defeated.
    pub fn run_to_completion(&mut self) -> Team {
        let mut pilot = AutoPilot::new(&self.config);
        self.run_to_completion_with(&mut pilot)
    }

    /// Runs rounds with `source` until one side is defeated.
    ///
    /// A source that never lands a hit never finishes the battle.
    pub fn run_to_completion_with<S>(&mut self, source: &mut S) -> Team
    where
        S: ActionSource + ?Sized,
    {
        while !self.is_over() {
            self.run_round_with(source);
        }
        self.decided_winner()
    }

    fn take_turn<S>(&mut self, index: usize, source: &mut S, log: &mut RoundLog)
    where
        S: ActionSource + ?Sized,
    {
        let actor = Participant::from(&self.combatants[index]);
        log.push(BattleEvent::Thinking {
            actor: actor.clone(),
        });

        effects::start_of_turn(&mut self.combatants[index], log);
        if !self.combatants[index].is_alive() {
            tracing::debug!(actor = %actor, "fell to damage over time");
            return;
        }

        let view = BattleView::new(&self.combatants, self.round);
        let action = source.choose(&self.combatants[index], &view, &mut self.dice);
        tracing::debug!(actor = %actor, ?action, "action chosen");

        if let Err(reason) = self.execute(index, action, log) {
            tracing::debug!(actor = %actor, %reason, "action rejected");
            log.push(execute::rejection(actor, reason));
        }

        if self.combatants[index].is_alive() {
            effects::end_of_turn(&mut self.combatants[index], log);
        }
    }
}

/// Assembles and validates a [`Battle`].
#[derive(Debug, Default)]
pub struct BattleBuilder {
    players: Vec<Combatant>,
    enemies: Vec<Combatant>,
    dice: Option<Dice>,
    config: BattleConfig,
}

impl BattleBuilder {
    pub fn player(mut self, combatant: Combatant) -> Self {
        self.players.push(combatant);
        self
    }

    pub fn players(mut self, combatants: impl IntoIterator<Item = Combatant>) -> Self {
        self.players.extend(combatants);
        self
    }

    pub fn enemy(mut self, combatant: Combatant) -> Self {
        self.enemies.push(combatant);
        self
    }

    pub fn enemies(mut self, combatants: impl IntoIterator<Item = Combatant>) -> Self {
        self.enemies.extend(combatants);
        self
    }

    /// Seeds the default [`PcgRng`](crate::env::PcgRng)-backed dice.
    pub fn seed(mut self, seed: u64) -> Self {
        self.dice = Some(Dice::new(seed));
        self
    }

    pub fn dice(mut self, dice: Dice) -> Self {
        self.dice = Some(dice);
        self
    }

    pub fn config(mut self, config: BattleConfig) -> Self {
        self.config = config;
        self
    }

    /// Validates the rosters and creates the battle.
    ///
    /// Both rosters must be non-empty, every combatant must sit in the roster
    /// of its own team and ids must be unique across the battle.
    pub fn build(self) -> Result<Battle, BattleError> {
        validate_roster(&self.players, Team::Player)?;
        validate_roster(&self.enemies, Team::Enemy)?;

        let mut seen = HashSet::new();
        for combatant in self.players.iter().chain(&self.enemies) {
            if !seen.insert(combatant.id) {
                return Err(BattleError::DuplicateId(combatant.id));
            }
        }

        let player_count = self.players.len();
        let mut combatants = self.players;
        combatants.extend(self.enemies);
        let dice = self.dice.unwrap_or_else(|| Dice::new(0));

        tracing::debug!(
            players = player_count,
            enemies = combatants.len() - player_count,
            seed = dice.seed(),
            "battle assembled"
        );

        Ok(Battle {
            combatants,
            player_count,
            round: 0,
            dice,
            config: self.config,
        })
    }
}

fn validate_roster(roster: &[Combatant], team: Team) -> Result<(), BattleError> {
    if roster.is_empty() {
        return Err(BattleError::EmptyRoster(team));
    }
    if let Some(stray) = roster.iter().find(|c| c.team != team) {
        return Err(BattleError::TeamMismatch {
            id: stray.id,
            expected: team,
            actual: stray.team,
        });
    }
    Ok(())
}
