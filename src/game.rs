use alloc::string::ToString;
use alloc::vec::Vec;
use log::info;
use rand::Rng;

use crate::{
    common::{AttackReport, Coord, SessionError},
    config::GameConfig,
    player::{Player, PlayerKind},
    ship::{Orientation, ShipDef, ShipId},
};

/// Current status of a game, from the human player's side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum GameStatus {
    /// Human fleet is being deployed.
    Setup,
    InProgress,
    Won,
    Lost,
}

impl GameStatus {
    pub fn is_over(self) -> bool {
        matches!(self, GameStatus::Won | GameStatus::Lost)
    }
}

/// Everything that happened in one human turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct TurnReport {
    /// The human's attack on the computer board.
    pub player: AttackReport,
    /// The computer's answer, absent when the human attack ended the game.
    pub reply: Option<AttackReport>,
    pub status: GameStatus,
}

/// Human vs. computer game: both players, the fleet being deployed and the
/// turn sequencing between them.
#[derive(Debug)]
pub struct GameSession {
    config: GameConfig,
    human: Player,
    computer: Player,
    placed: Vec<&'static str>,
    status: GameStatus,
}

impl GameSession {
    pub fn new(config: GameConfig) -> Self {
        Self {
            human: Player::with_board_size(PlayerKind::Human, config.board_size),
            computer: Player::with_board_size(PlayerKind::Computer, config.board_size),
            config,
            placed: Vec::new(),
            status: GameStatus::Setup,
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn human(&self) -> &Player {
        &self.human
    }

    pub fn computer(&self) -> &Player {
        &self.computer
    }

    /// Names of the fleet entries already on the human board.
    pub fn placed_ships(&self) -> &[&'static str] {
        &self.placed
    }

    /// Fleet entries still waiting to be deployed.
    pub fn unplaced_ships(&self) -> impl Iterator<Item = &ShipDef> + '_ {
        self.config
            .fleet
            .iter()
            .filter(move |def| !self.placed.contains(&def.name()))
    }

    pub fn fleet_ready(&self) -> bool {
        self.placed.len() == self.config.fleet.len()
    }

    fn require(&self, status: GameStatus) -> Result<(), SessionError> {
        if self.status == status {
            Ok(())
        } else {
            Err(SessionError::WrongPhase)
        }
    }

    fn unplaced_def(&self, name: &str) -> Result<ShipDef, SessionError> {
        let def = self
            .config
            .ship_def(name)
            .ok_or_else(|| SessionError::UnknownShip(name.to_string()))?;
        if self.placed.contains(&def.name()) {
            return Err(SessionError::ShipAlreadyPlaced(def.name()));
        }
        Ok(def)
    }

    /// Whether the named ship could go at `(x, y)` right now.
    pub fn can_place(&self, name: &str, x: usize, y: usize, orientation: Orientation) -> bool {
        self.status == GameStatus::Setup
            && self.unplaced_def(name).is_ok_and(|def| {
                self.human
                    .gameboard()
                    .is_valid_placement(def.length(), x, y, orientation)
                    .is_ok()
            })
    }

    /// Deploy one fleet entry, by name, on the human board.
    pub fn place_ship(
        &mut self,
        name: &str,
        x: usize,
        y: usize,
        orientation: Orientation,
    ) -> Result<ShipId, SessionError> {
        self.require(GameStatus::Setup)?;
        let def = self.unplaced_def(name)?;
        let id = self
            .human
            .gameboard_mut()
            .place_ship(def.build(), x, y, orientation)?;
        self.placed.push(def.name());
        if self.fleet_ready() {
            info!("fleet deployed");
        }
        Ok(id)
    }

    /// Clear the human board and deploy the whole fleet at random.
    pub fn randomize_fleet<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<(), SessionError> {
        self.require(GameStatus::Setup)?;
        self.placed.clear();
        if let Err(e) = self.human.place_fleet_randomly(rng, &self.config.fleet) {
            self.human.reset();
            return Err(e.into());
        }
        self.placed = self.config.fleet.iter().map(|def| def.name()).collect();
        info!("fleet randomized");
        Ok(())
    }

    /// Deploy the computer fleet and open fire.
    pub fn start<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<(), SessionError> {
        self.require(GameStatus::Setup)?;
        if self.config.fleet.is_empty() {
            return Err(SessionError::EmptyFleet);
        }
        if !self.fleet_ready() {
            return Err(SessionError::FleetIncomplete {
                placed: self.placed.len(),
                total: self.config.fleet.len(),
            });
        }
        self.computer.place_fleet_randomly(rng, &self.config.fleet)?;
        self.status = GameStatus::InProgress;
        info!("game started");
        Ok(())
    }

    /// Human attack at `(x, y)` on the computer board, followed by the
    /// computer's reply. A rejected attack changes nothing and does not use up
    /// the turn.
    pub fn attack<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        x: usize,
        y: usize,
    ) -> Result<TurnReport, SessionError> {
        self.require(GameStatus::InProgress)?;
        let outcome = self.computer.gameboard_mut().receive_attack(x, y)?;
        let player = AttackReport {
            coord: Coord::new(x, y),
            outcome,
        };
        if self.computer.gameboard().all_ships_sunk() {
            self.status = GameStatus::Won;
            info!("enemy fleet destroyed");
            return Ok(TurnReport {
                player,
                reply: None,
                status: self.status,
            });
        }

        let reply = self
            .computer
            .random_attack(rng, self.human.gameboard_mut())?;
        if self.human.gameboard().all_ships_sunk() {
            self.status = GameStatus::Lost;
            info!("friendly fleet lost");
        }
        Ok(TurnReport {
            player,
            reply: Some(reply),
            status: self.status,
        })
    }

    /// Throw away both boards and return to fleet deployment.
    pub fn restart(&mut self) {
        self.human.reset();
        self.computer.reset();
        self.placed.clear();
        self.status = GameStatus::Setup;
        info!("game restarted");
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}
