use crate::game::{Move, Position};

/// Universal interface for computer players.
pub trait Agent {
    /// Select a move for the side to move in a non-terminal position.
    fn select_move(&mut self, position: &Position) -> Move;

    /// Return the agent's display name.
    fn name(&self) -> &str;

    /// Clone the agent into a boxed trait object.
    fn clone_agent(&self) -> Box<dyn Agent> {
        unimplemented!("clone_agent not implemented for this agent")
    }
}
