//! Agent API for action selection

use rand::Rng;

use azul_rules_engine::{clone_for_player, execute, heuristic_score, Action, GameState, PlayerId};

/// Inputs provided to an agent when selecting an action
pub struct AgentInput<'a> {
    /// The position as the acting player may see it
    pub state: &'a GameState,

    /// Enumerated legal actions for `current_player`; never empty
    pub legal_actions: &'a [Action],

    /// Index of the player whose turn it is
    pub current_player: PlayerId,
}

/// Trait for anything that can choose actions in a game:
/// random policy, search-based policy, or human input.
pub trait Agent {
    /// Choose one of `input.legal_actions`. May use rng for exploration.
    fn select_action(&mut self, input: &AgentInput, rng: &mut impl Rng) -> Action;
}

/// Random agent that uniformly samples from legal actions
#[derive(Clone, Debug, Default)]
pub struct RandomAgent;

impl RandomAgent {
    pub fn new() -> Self {
        Self
    }
}

impl Agent for RandomAgent {
    fn select_action(&mut self, input: &AgentInput, rng: &mut impl Rng) -> Action {
        match input.legal_actions.len() {
            0 => Action::Pass,
            n => input.legal_actions[rng.random_range(0..n)],
        }
    }
}

/// One-ply lookahead: plays each legal action on a redacted copy of the
/// state and keeps the one with the best heuristic score. Ties go to a
/// random pick among the best.
#[derive(Clone, Debug, Default)]
pub struct GreedyAgent;

impl GreedyAgent {
    pub fn new() -> Self {
        Self
    }
}

impl Agent for GreedyAgent {
    fn select_action(&mut self, input: &AgentInput, rng: &mut impl Rng) -> Action {
        let mut best: Vec<Action> = Vec::new();
        let mut best_value = f64::NEG_INFINITY;

        for &action in input.legal_actions {
            let mut copy = clone_for_player(input.state, Some(input.current_player));
            if execute(&mut copy, action).is_err() {
                continue;
            }
            let value = heuristic_score(&copy, input.current_player);
            if value > best_value {
                best_value = value;
                best.clear();
                best.push(action);
            } else if value == best_value {
                best.push(action);
            }
        }

        match best.len() {
            0 => Action::Pass,
            n => best[rng.random_range(0..n)],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use azul_rules_engine::{enumerate_actions, setup, Destination};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_random_agent_selects_legal_action() {
        let state = setup(2, 42).unwrap();
        let legal = enumerate_actions(&state, 0);
        let input = AgentInput {
            state: &state,
            legal_actions: &legal,
            current_player: 0,
        };

        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let mut agent = RandomAgent::new();

        // Select many times and verify all are legal
        for _ in 0..100 {
            let action = agent.select_action(&input, &mut rng);
            assert!(legal.contains(&action), "Random agent should select legal action");
        }
    }

    #[test]
    fn test_greedy_agent_avoids_floor_at_start() {
        let state = setup(2, 42).unwrap();
        let legal = enumerate_actions(&state, 0);
        let input = AgentInput {
            state: &state,
            legal_actions: &legal,
            current_player: 0,
        };

        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let action = GreedyAgent::new().select_action(&input, &mut rng);
        assert!(legal.contains(&action));
        let Action::Draft(draft) = action else {
            panic!("expected a draft");
        };
        assert_ne!(draft.destination, Destination::Floor);
    }

    #[test]
    fn test_agents_pass_when_nothing_is_legal() {
        let state = setup(2, 42).unwrap();
        let input = AgentInput {
            state: &state,
            legal_actions: &[],
            current_player: 0,
        };
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        assert_eq!(RandomAgent.select_action(&input, &mut rng), Action::Pass);
        assert_eq!(GreedyAgent.select_action(&input, &mut rng), Action::Pass);
    }
}
