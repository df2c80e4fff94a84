use crate::config::GameConfig;
use crate::error::GameError;
use crate::factory::{self, OperationType};
use crate::input::InputReader;
use crate::operation::MathOperation;
use crate::random::RandomSource;
use crate::record::{Attempt, Player};
use crate::ui;
use std::io::{BufRead, Write};
use std::time::Instant;
use tracing::{debug, info};

const ADDITIONAL_OPTIONS: [&str; 2] = ["History", "Quit"];
const HISTORY: i64 = 1;
const QUIT: i64 = 2;

#[derive(Debug, Clone, PartialEq)]
pub enum GameState {
    MainMenu,
    SubMenu,
    AwaitingAnswer(MathOperation),
    Finished,
}

/// One quiz session: menus, questions, and the player's history
pub struct Game<R, I, W> {
    rng: R,
    console: InputReader<I, W>,
    player: Player,
    config: GameConfig,
    state: GameState,
}

impl<R: RandomSource, I: BufRead, W: Write> Game<R, I, W> {
    pub fn new(rng: R, input: I, out: W, config: GameConfig) -> Self {
        Self {
            rng,
            console: InputReader::new(input, out),
            player: Player::new(),
            config,
            state: GameState::MainMenu,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn into_output(self) -> W {
        self.console.into_parts().1
    }

    /// Loop until the player quits or input runs out.
    pub fn run(&mut self) -> Result<(), GameError> {
        info!("session started");
        while self.state != GameState::Finished {
            match self.step() {
                Ok(()) => {}
                Err(e) if e.is_shutdown() => {
                    self.state = GameState::Finished;
                }
                Err(e) => return Err(e),
            }
        }
        let summary = self.player.summarize();
        info!(
            correct = summary.correct,
            wrong = summary.wrong,
            "session ended"
        );
        Ok(())
    }

    /// Advance by exactly one transition.
    pub fn step(&mut self) -> Result<(), GameError> {
        let next = match self.state.clone() {
            GameState::MainMenu => self.main_menu()?,
            GameState::SubMenu => self.sub_menu()?,
            GameState::AwaitingAnswer(question) => self.answer(question)?,
            GameState::Finished => GameState::Finished,
        };
        debug!(from = ?self.state, to = ?next, "state transition");
        self.state = next;
        Ok(())
    }

    fn main_menu(&mut self) -> Result<GameState, GameError> {
        let names = OperationType::names();
        ui::list(self.console.out(), "Choose option number:", &names[..])?;
        ui::prompt(self.console.out(), "(Enter 0 for additional options)")?;

        let choice = self.console.read_int_in(0, names.len() as i64)?;
        Ok(match OperationType::from_menu(choice) {
            Some(selection) => {
                let range = self.config.operands.clone();
                GameState::AwaitingAnswer(factory::make_in(selection, range, &mut self.rng))
            }
            None => GameState::SubMenu,
        })
    }

    fn sub_menu(&mut self) -> Result<GameState, GameError> {
        ui::list(self.console.out(), "Additional options:", &ADDITIONAL_OPTIONS[..])?;
        match self.console.read_int_up_to(ADDITIONAL_OPTIONS.len() as i64)? {
            HISTORY => {
                ui::history(self.console.out(), &self.player)?;
                Ok(GameState::MainMenu)
            }
            QUIT => Ok(GameState::Finished),
            _ => Ok(GameState::MainMenu),
        }
    }

    fn answer(&mut self, question: MathOperation) -> Result<GameState, GameError> {
        ui::prompt(self.console.out(), "What's the answer?")?;
        ui::question(self.console.out(), &question)?;

        let started = Instant::now();
        let answer = self.console.read_int()?;
        let attempt = Attempt::new(question, answer, started.elapsed());

        ui::attempt(self.console.out(), &attempt)?;
        self.player.record(attempt);
        Ok(GameState::MainMenu)
    }
}
