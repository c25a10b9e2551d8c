//! UCI protocol front-end and command loop.
//!
//! Parses UCI commands, maintains current position state, routes `go` requests
//! to the engine, and emits protocol-compliant output. Any failure is reported
//! as an `info string` line and the loop keeps reading.

use std::io::{self, BufRead, Write};

use log::{debug, warn};

use crate::chess_errors::{ChessError, ChessResult};
use crate::engines::engine_alpha_beta::MAX_DEPTH;
use crate::engines::engine_trait::{Engine, GoParams};
use crate::game_state::game_state::GameState;
use crate::search::alpha_beta::SearchConfig;
use crate::utils::long_algebraic::move_to_long_algebraic;
use crate::utils::render_game_state::render_game_state;

const UCI_ENGINE_NAME: &str = "Damson Chess";
const UCI_ENGINE_AUTHOR: &str = "the Damson Chess authors";

/// Read commands from stdin until `quit` or end of input.
pub fn run_stdio_loop(engine: Box<dyn Engine>, start: GameState) -> io::Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut uci = UciState::new(engine, start);

    for line in stdin.lock().lines() {
        let line = line?;
        let should_quit = uci.handle_command(&line, &mut stdout)?;
        stdout.flush()?;
        if should_quit {
            break;
        }
    }

    Ok(())
}

pub struct UciState {
    game_state: GameState,
    start: GameState,
    engine: Box<dyn Engine>,
}

impl UciState {
    /// `start` is the position `ucinewgame` returns to.
    pub fn new(engine: Box<dyn Engine>, start: GameState) -> Self {
        Self {
            game_state: start.clone(),
            start,
            engine,
        }
    }

    pub fn game_state(&self) -> &GameState {
        &self.game_state
    }

    /// Handle one line; returns `true` when the loop should stop.
    pub fn handle_command(&mut self, line: &str, out: &mut impl Write) -> io::Result<bool> {
        let trimmed = line.trim();
        let Some(cmd) = trimmed.split_whitespace().next() else {
            return Ok(false);
        };
        debug!("<< {trimmed}");

        match cmd {
            "uci" => {
                writeln!(out, "id name {}", UCI_ENGINE_NAME)?;
                writeln!(out, "id author {}", UCI_ENGINE_AUTHOR)?;
                writeln!(
                    out,
                    "option name Depth type spin default {} min 1 max {MAX_DEPTH}",
                    SearchConfig::default().depth
                )?;
                writeln!(out, "option name Seed type string default none")?;
                writeln!(out, "option name OwnBook type check default false")?;
                writeln!(out, "uciok")?;
            }
            "isready" => {
                writeln!(out, "readyok")?;
            }
            "setoption" => {
                if let Err(err) = self.handle_setoption(trimmed) {
                    report(out, "setoption", &err)?;
                }
            }
            "ucinewgame" => {
                self.game_state = self.start.clone();
                self.engine.new_game();
            }
            "position" => {
                if let Err(err) = self.handle_position(trimmed) {
                    report(out, "position", &err)?;
                }
            }
            "go" => {
                let params = parse_go_params(trimmed);
                match self.engine.choose_move(&self.game_state, &params) {
                    Ok(result) => {
                        for info in &result.info_lines {
                            writeln!(out, "{info}")?;
                        }
                        let best = result
                            .best_move
                            .map_or_else(|| "0000".to_owned(), move_to_long_algebraic);
                        writeln!(out, "bestmove {best}")?;
                    }
                    Err(err) => {
                        report(out, "go", &err)?;
                        writeln!(out, "bestmove 0000")?;
                    }
                }
            }
            "d" => {
                for row in render_game_state(&self.game_state).lines() {
                    writeln!(out, "info string {row}")?;
                }
            }
            "quit" => {
                return Ok(true);
            }
            _ => {
                writeln!(out, "info string unknown command '{cmd}'")?;
            }
        }

        Ok(false)
    }

    fn handle_setoption(&mut self, line: &str) -> ChessResult<()> {
        let mut name_tokens = Vec::<&str>::new();
        let mut value_tokens = Vec::<&str>::new();
        let mut mode = "";

        for tok in line.split_whitespace().skip(1) {
            match tok {
                "name" => mode = "name",
                "value" => mode = "value",
                _ if mode == "name" => name_tokens.push(tok),
                _ if mode == "value" => value_tokens.push(tok),
                _ => {}
            }
        }

        self.engine
            .set_option(&name_tokens.join(" "), &value_tokens.join(" "))
    }

    /// Build the new position completely before replacing the current one, so
    /// a bad FEN or move leaves the old position in place.
    fn handle_position(&mut self, line: &str) -> ChessResult<()> {
        let mut tokens = line.split_whitespace().skip(1).peekable();

        let mut base_state = match tokens.next() {
            Some("startpos") => GameState::new_game(),
            Some("fen") => {
                let mut fen_parts = Vec::<&str>::new();
                while let Some(&next) = tokens.peek() {
                    if next == "moves" {
                        break;
                    }
                    fen_parts.push(next);
                    tokens.next();
                }
                GameState::from_fen(&fen_parts.join(" "))?
            }
            _ => return Err(ChessError::InvalidCommand(line.to_owned())),
        };

        if tokens.peek() == Some(&"moves") {
            tokens.next();
            for text in tokens {
                base_state.play_move_text(text)?;
            }
        }

        debug!("position set\n{}", render_game_state(&base_state));
        self.game_state = base_state;
        Ok(())
    }
}

fn report(out: &mut impl Write, command: &str, err: &ChessError) -> io::Result<()> {
    warn!("{command} failed: {err}");
    writeln!(out, "info string {command} error: {err}")
}

fn parse_go_params(line: &str) -> GoParams {
    let mut params = GoParams::default();
    let mut tokens = line.split_whitespace();
    while let Some(tok) = tokens.next() {
        if tok == "depth" {
            params.depth = tokens.next().and_then(|x| x.parse::<u8>().ok()).filter(|&d| d > 0);
        }
    }
    params
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engines::engine_alpha_beta::AlphaBetaEngine;
    use crate::game_state::chess_types::Color;

    fn state() -> UciState {
        UciState::new(Box::new(AlphaBetaEngine::default()), GameState::new_game())
    }

    fn run(state: &mut UciState, line: &str) -> String {
        let mut out = Vec::new();
        state.handle_command(line, &mut out).expect("writing to a Vec cannot fail");
        String::from_utf8(out).expect("protocol output is UTF-8")
    }

    #[test]
    fn handshake() {
        let mut uci = state();
        let reply = run(&mut uci, "uci");
        assert!(reply.starts_with("id name Damson Chess\n"));
        assert!(reply.contains("option name Depth type spin default 4 min 1 max 12\n"));
        assert!(reply.ends_with("uciok\n"));
        assert_eq!(run(&mut uci, "isready"), "readyok\n");
    }

    #[test]
    fn position_startpos_with_moves_updates_state() {
        let mut uci = state();
        run(&mut uci, "position startpos moves e2e4 e7e5 g1f3");
        assert_eq!(uci.game_state().side_to_move, Color::Dark);
        assert_eq!(
            uci.game_state().get_fen(),
            "rnbqkbnr/pppp1ppp/8/4p3/4P3/5N2/PPPP1PPP/RNBQKB1R b KQkq - 1 2"
        );
    }

    #[test]
    fn position_fen_without_moves_updates_state() {
        let mut uci = state();
        run(&mut uci, "position fen 4k3/8/8/8/8/8/4P3/4K3 w - - 0 1");
        assert_eq!(uci.game_state().get_fen(), "4k3/8/8/8/8/8/4P3/4K3 w - - 0 1");
    }

    #[test]
    fn bad_position_keeps_previous_state() {
        let mut uci = state();
        run(&mut uci, "position startpos moves e2e4");
        let before = uci.game_state().clone();

        let reply = run(&mut uci, "position fen 8/8/8 w - - 0 1");
        assert!(reply.starts_with("info string position error: malformed FEN"));
        assert_eq!(uci.game_state(), &before);

        let reply = run(&mut uci, "position sideways");
        assert!(reply.starts_with("info string position error: malformed command"));
        assert!(run(&mut uci, "position").contains("malformed command"));
        assert_eq!(uci.game_state(), &before);

        let reply = run(&mut uci, "position startpos moves e2e4 e2e4");
        assert!(reply.contains("not legal"));
        assert_eq!(uci.game_state(), &before);
    }

    #[test]
    fn go_depth_reports_best_move() {
        let mut uci = state();
        run(&mut uci, "position fen 4k3/8/8/3q4/8/8/8/3RK3 w - - 0 1");
        let reply = run(&mut uci, "go depth 1");
        assert!(reply.ends_with("bestmove d1d5\n"), "{reply}");
    }

    #[test]
    fn go_scores_from_dark_point_of_view() {
        let mut uci = state();
        run(&mut uci, "position fen 3qk3/8/8/8/8/8/8/4K3 b - - 0 1");
        let reply = run(&mut uci, "go depth 2");
        let info = reply.lines().next().expect("search info line");
        let cp: i32 = info
            .split_whitespace()
            .skip_while(|&tok| tok != "cp")
            .nth(1)
            .and_then(|tok| tok.parse().ok())
            .expect("centipawn score");
        assert!(cp > 500, "{info}");

        run(&mut uci, "position fen r5k1/8/8/8/8/8/5PPP/6K1 b - - 0 1");
        let reply = run(&mut uci, "go depth 2");
        assert!(reply.contains(" score mate 1 "), "{reply}");
        assert!(reply.ends_with("bestmove a8a1\n"), "{reply}");
    }

    #[test]
    fn go_without_moves_reports_null_move() {
        let mut uci = state();
        run(&mut uci, "position fen k7/1Q6/2K5/8/8/8/8/8 b - - 0 1");
        assert!(run(&mut uci, "go depth 2").ends_with("bestmove 0000\n"));
    }

    #[test]
    fn go_on_kingless_board_reports_error() {
        let mut uci = state();
        run(&mut uci, "position fen 8/8/8/8/8/8/8/4K3 w - - 0 1");
        let reply = run(&mut uci, "go depth 1");
        assert!(reply.starts_with("info string go error: no Dark king"));
        assert!(reply.ends_with("bestmove 0000\n"));
    }

    #[test]
    fn setoption_errors_are_reported_and_loop_continues() {
        let mut uci = state();
        assert!(run(&mut uci, "setoption name Depth value 2").is_empty());
        let reply = run(&mut uci, "setoption name Depth value deep");
        assert!(reply.starts_with("info string setoption error"));
        assert_eq!(run(&mut uci, "isready"), "readyok\n");
    }

    #[test]
    fn ucinewgame_returns_to_start_and_quit_stops() {
        let mut uci = state();
        run(&mut uci, "position startpos moves e2e4");
        run(&mut uci, "ucinewgame");
        assert_eq!(uci.game_state(), &GameState::new_game());

        let mut out = Vec::new();
        assert!(uci.handle_command("quit", &mut out).expect("quit"));
    }

    #[test]
    fn parse_go_params_reads_depth() {
        assert_eq!(parse_go_params("go depth 6").depth, Some(6));
        assert_eq!(parse_go_params("go wtime 1000 depth x").depth, None);
        assert_eq!(parse_go_params("go").depth, None);
    }
}
