mod draw;
mod eligibility;
mod tickets;

pub use draw::draw_winners;
pub use eligibility::{eligible_signups, is_eligible};
pub use tickets::{tickets_distribution, tickets_for, TicketsDistribution};

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

pub type Seed = <ChaCha8Rng as SeedableRng>::Seed;
pub type Name = String;
pub type TotalTickets = u64;

pub const DEFAULT_WINNERS: usize = 4;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum Error {
    #[error("No eligible comedians found in the signup sheet")]
    NoEligibleCandidates,

    #[error(
        "Not enough unique eligible comedians to select {requested} winners (only {available} available)"
    )]
    InsufficientCandidates { requested: usize, available: usize },
}

pub fn random_seed() -> Seed {
    rand::random()
}

pub fn seeded_rng(seed: Seed) -> ChaCha8Rng {
    ChaCha8Rng::from_seed(seed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::signups::{load_signups, SignupRow};
    use std::collections::HashSet;
    use std::path::PathBuf;

    fn draw_lineup(
        signups: &[SignupRow],
        winners: usize,
        seed: Seed,
    ) -> Result<(TicketsDistribution, Vec<Name>), Error> {
        let eligible = eligible_signups(signups)?;
        let distribution = tickets_distribution(eligible);
        let lineup = draw_winners(&distribution, winners, &mut seeded_rng(seed))?;
        Ok((distribution, lineup))
    }

    #[test]
    fn select_from_signup_sheet() {
        let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("resources/testing/signups.csv");
        let signups = load_signups(&path).unwrap();
        let (distribution, lineup) = draw_lineup(&signups, DEFAULT_WINNERS, [7; 32]).unwrap();

        let expected_tickets = [
            ("Ada Quinn", 2),
            ("Bo Ferris", 3),
            ("Fay Lindqvist", 2),
            ("Hana Ito", 1),
            ("Ivo Petrov", 1),
        ];
        assert_eq!(
            distribution
                .iter()
                .map(|(name, tickets)| (name.as_str(), tickets))
                .collect::<Vec<_>>(),
            expected_tickets
        );

        assert_eq!(lineup.len(), DEFAULT_WINNERS);
        let eligible: HashSet<&str> = expected_tickets.iter().map(|(name, _)| *name).collect();
        let winners: HashSet<&str> = lineup.iter().map(String::as_str).collect();
        assert_eq!(winners.len(), DEFAULT_WINNERS);
        assert!(winners.is_subset(&eligible));
    }

    #[test]
    fn same_seed_same_lineup() {
        let signups: Vec<SignupRow> = (0..10)
            .map(|i| SignupRow::dummy(&format!("comic{}", i), i % 2 == 0, i % 3 == 0))
            .collect();
        let seed = random_seed();
        let first = draw_lineup(&signups, 5, seed).unwrap();
        let second = draw_lineup(&signups, 5, seed).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn nobody_eligible_whatever_the_request() {
        let mut signups = vec![SignupRow::dummy("Ada", true, true)];
        signups[0].here = false;
        for winners in [0, 1, DEFAULT_WINNERS] {
            assert_eq!(
                draw_lineup(&signups, winners, [0; 32]),
                Err(Error::NoEligibleCandidates)
            );
        }
    }

    #[test]
    fn three_eligible_cannot_fill_four_slots() {
        let signups: Vec<SignupRow> = ["A", "B", "C"]
            .iter()
            .map(|name| SignupRow::dummy(name, true, true))
            .collect();
        assert_eq!(
            draw_lineup(&signups, 4, [0; 32]),
            Err(Error::InsufficientCandidates {
                requested: 4,
                available: 3
            })
        );
    }
}
