use crate::game::{GameOutcome, Move, Player, Position};

use super::agent::Agent;

/// Sentinel bound outside the score range [-1, 1], so the first window
/// comparison can never falsely cut off.
const INF: i32 = 2;

/// Numeric score of a terminal outcome. X is the maximizing side.
fn score(outcome: GameOutcome) -> i32 {
    match outcome {
        GameOutcome::Winner(Player::X) => 1,
        GameOutcome::Winner(Player::O) => -1,
        GameOutcome::Draw => 0,
    }
}

/// Return the game-theoretically optimal move for the side to move.
///
/// Works for either side: X maximizes the child minimax value, O
/// minimizes it. Siblings at the root share a tightening alpha/beta
/// window, so later siblings are pruned against the best value found so
/// far. Ties break to the first move in row-major enumeration order;
/// only a strictly better value replaces the incumbent, which makes the
/// selection deterministic.
///
/// The position must not be terminal; calling on a terminal position is
/// caller misuse and panics.
pub fn best_move(position: &Position) -> Move {
    let legal = position.legal_moves();
    assert!(
        !position.is_terminal() && !legal.is_empty(),
        "best_move called on a terminal position"
    );

    match position.side_to_move() {
        Player::X => {
            let mut best = legal[0];
            let mut value = -INF;
            let mut alpha = -INF;
            for &m in &legal {
                let child = position.apply_move(m).unwrap();
                let s = min_value(&child, alpha, INF);
                if s > value {
                    value = s;
                    best = m;
                }
                alpha = alpha.max(value);
            }
            best
        }
        Player::O => {
            let mut best = legal[0];
            let mut value = INF;
            let mut beta = INF;
            for &m in &legal {
                let child = position.apply_move(m).unwrap();
                let s = max_value(&child, -INF, beta);
                if s < value {
                    value = s;
                    best = m;
                }
                beta = beta.min(value);
            }
            best
        }
    }
}

/// Highest score the side to move (X) can force from this position.
pub fn max_value(position: &Position, mut alpha: i32, beta: i32) -> i32 {
    if let Some(outcome) = position.outcome() {
        return score(outcome);
    }

    let mut value = -INF;
    for m in position.legal_moves() {
        let child = position.apply_move(m).unwrap();
        value = value.max(min_value(&child, alpha, beta));
        alpha = alpha.max(value);
        if alpha >= beta {
            break;
        }
    }
    value
}

/// Lowest score the side to move (O) can force from this position.
pub fn min_value(position: &Position, alpha: i32, mut beta: i32) -> i32 {
    if let Some(outcome) = position.outcome() {
        return score(outcome);
    }

    let mut value = INF;
    for m in position.legal_moves() {
        let child = position.apply_move(m).unwrap();
        value = value.min(max_value(&child, alpha, beta));
        beta = beta.min(value);
        if alpha >= beta {
            break;
        }
    }
    value
}

/// Exhaustive alpha-beta agent. Optimal for either side; the game tree
/// is at most 9 plies deep, so the search runs depth-unlimited.
pub struct AlphaBetaAgent;

impl AlphaBetaAgent {
    pub fn new() -> Self {
        AlphaBetaAgent
    }
}

impl Default for AlphaBetaAgent {
    fn default() -> Self {
        Self::new()
    }
}

impl Agent for AlphaBetaAgent {
    fn select_move(&mut self, position: &Position) -> Move {
        best_move(position)
    }

    fn name(&self) -> &str {
        "AlphaBeta"
    }

    fn clone_agent(&self) -> Box<dyn Agent> {
        Box::new(AlphaBetaAgent)
    }
}
