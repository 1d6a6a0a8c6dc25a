//! Line-oriented text protocol.
//!
//! Framing follows GTP: each request is an optional numeric id, a command
//! and its arguments; each response is `=id message` on success or
//! `?id message` on failure, followed by a blank line. Coordinates are
//! zero-indexed `row col`.
//!
//! ## Supported Commands
//!
//! - `name`, `version`, `list_commands`, `known_command <cmd>`, `quit`
//! - `start <variant> <size>` - Start a new game (`gomoku`, `go`, `othello` or full names)
//! - `move <row> <col>` - Play for the side to move
//! - `pass`, `undo`, `resign`, `restart`
//! - `genmove` - Let the configured selector play for the side to move
//! - `valid_moves`, `status`, `showboard`
//! - `save <file>`, `load <file>`
//!
//! ## Example
//!
//! ```ignore
//! use gridplay::protocol::ProtocolEngine;
//! let mut engine = ProtocolEngine::new(game, selector)?;
//! engine.run();
//! ```

use std::io::{self, BufRead, Write};
use std::path::Path;

use tracing::warn;

use crate::board::Point;
use crate::engine::{Status, Variant};
use crate::error::GameError;
use crate::game::Game;
use crate::selector::MoveSelector;
use crate::session::{Session, Turn};

/// The list of known commands.
const KNOWN_COMMANDS: &[&str] = &[
    "genmove",
    "known_command",
    "list_commands",
    "load",
    "move",
    "name",
    "pass",
    "quit",
    "resign",
    "restart",
    "save",
    "showboard",
    "start",
    "status",
    "undo",
    "valid_moves",
    "version",
];

pub struct ProtocolEngine {
    session: Session,
    selector: Box<dyn MoveSelector>,
}

impl ProtocolEngine {
    pub fn new(game: Game, selector: Box<dyn MoveSelector>) -> Result<Self, GameError> {
        Ok(Self {
            session: Session::new(game)?,
            selector,
        })
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Run the command loop on stdin/stdout until `quit` or end of input.
    pub fn run(&mut self) -> io::Result<()> {
        let stdin = io::stdin();
        let stdout = io::stdout();
        self.serve(stdin.lock(), stdout.lock())
    }

    /// Run the command loop over arbitrary reader and writer.
    pub fn serve<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> io::Result<()> {
        for line in input.lines() {
            let line = line?;

            // Skip empty lines and comments
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let (id, command_line) = Self::parse_id(line);
            let parts: Vec<&str> = command_line.split_whitespace().collect();
            let Some((command, args)) = parts.split_first() else {
                continue;
            };
            let command = command.to_lowercase();

            let (success, message) = self.execute(&command, args);
            let prefix = if success { '=' } else { '?' };
            let id_str = id.map(|i| i.to_string()).unwrap_or_default();

            writeln!(output, "{prefix}{id_str} {message}\n")?;
            output.flush()?;

            if command == "quit" {
                break;
            }
        }
        Ok(())
    }

    /// Parse an optional numeric command ID from the beginning of the line.
    fn parse_id(line: &str) -> (Option<u32>, &str) {
        let trimmed = line.trim();
        let end = trimmed
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(trimmed.len());
        if end > 0 {
            if let Ok(id) = trimmed[..end].parse::<u32>() {
                return (Some(id), trimmed[end..].trim());
            }
        }
        (None, trimmed)
    }

    fn parse_point(args: &[&str]) -> Result<Point, String> {
        match args {
            [row, col] => {
                let row = row
                    .parse::<usize>()
                    .map_err(|_| format!("invalid row: {row}"))?;
                let col = col
                    .parse::<usize>()
                    .map_err(|_| format!("invalid column: {col}"))?;
                Ok((row, col))
            }
            _ => Err("expected: move <row> <col>".to_string()),
        }
    }

    fn describe(turn: Turn) -> String {
        let mut parts = Vec::new();
        if let Some(color) = turn.auto_passed {
            parts.push(format!("{color} has no legal move and passes"));
        }
        if turn.status != Status::InProgress {
            parts.push(format!("game over: {}", turn.status));
        }
        parts.join("; ")
    }

    /// Execute a command and return (success, response).
    fn execute(&mut self, command: &str, args: &[&str]) -> (bool, String) {
        let result = match command {
            "name" => Ok("gridplay".to_string()),

            "version" => Ok(env!("CARGO_PKG_VERSION").to_string()),

            "list_commands" => Ok(KNOWN_COMMANDS.join("\n")),

            "known_command" => match args.first() {
                Some(cmd) => {
                    let known = KNOWN_COMMANDS.contains(&cmd.to_lowercase().as_str());
                    Ok(if known { "true" } else { "false" }.to_string())
                }
                None => Err("missing argument".to_string()),
            },

            "quit" => Ok(String::new()),

            "start" => self.start(args),

            "move" => Self::parse_point(args).and_then(|pt| {
                self.session
                    .play(pt)
                    .map(Self::describe)
                    .map_err(|e| e.to_string())
            }),

            "pass" => self
                .session
                .pass()
                .map(Self::describe)
                .map_err(|e| e.to_string()),

            "undo" => self
                .session
                .undo()
                .map(|()| String::new())
                .map_err(|e| e.to_string()),

            "resign" => self
                .session
                .resign()
                .map(|status| format!("game over: {status}"))
                .map_err(|e| e.to_string()),

            "restart" => self
                .session
                .restart()
                .map(|()| String::new())
                .map_err(|e| e.to_string()),

            "genmove" => self
                .session
                .select_and_play(self.selector.as_mut())
                .map(|(pt, turn)| {
                    let mv = pt.map_or("pass".to_string(), |(r, c)| format!("{r} {c}"));
                    let extra = Self::describe(turn);
                    if extra.is_empty() {
                        mv
                    } else {
                        format!("{mv}\n{extra}")
                    }
                })
                .map_err(|e| e.to_string()),

            "valid_moves" => Ok(self
                .session
                .game()
                .valid_moves()
                .iter()
                .map(|(r, c)| format!("{r} {c}"))
                .collect::<Vec<_>>()
                .join(", ")),

            "status" => {
                let game = self.session.game();
                let (black, white) = game.board().count_stones();
                Ok(format!(
                    "{} {}x{}, {} to move, {}, black {black} white {white}",
                    game.variant(),
                    game.size(),
                    game.size(),
                    game.current_player(),
                    self.session.status(),
                ))
            }

            "showboard" => Ok(format!("\n{}", self.session.game().board())),

            "save" => match args.first() {
                Some(file) => self
                    .session
                    .save(Path::new(file))
                    .map(|()| String::new())
                    .map_err(|e| format!("{e:#}")),
                None => Err("missing argument".to_string()),
            },

            "load" => match args.first() {
                Some(file) => self
                    .session
                    .load(Path::new(file))
                    .map(|()| String::new())
                    .map_err(|e| format!("{e:#}")),
                None => Err("missing argument".to_string()),
            },

            _ => Err(format!("unknown command: {command}")),
        };

        match result {
            Ok(message) => (true, message),
            Err(message) => {
                warn!(command, %message, "command failed");
                (false, message)
            }
        }
    }

    fn start(&mut self, args: &[&str]) -> Result<String, String> {
        let [variant, size] = args else {
            return Err("expected: start <variant> <size>".to_string());
        };
        let variant: Variant = variant.parse()?;
        let size = size
            .parse::<usize>()
            .map_err(|_| format!("invalid size: {size}"))?;
        let game = Game::new(variant, size).map_err(|e| e.to_string())?;
        self.session.replace(game).map_err(|e| e.to_string())?;
        Ok(String::new())
    }
}
