use super::{Name, TotalTickets};
use crate::signups::SignupRow;
use std::iter::FromIterator;
use tracing::{debug, warn};

/// Base ticket plus one per bonus box ticked, so always in `1..=3`.
pub fn tickets_for(signup: &SignupRow) -> TotalTickets {
    1 + TotalTickets::from(signup.first_5) + TotalTickets::from(signup.early)
}

/// The lottery pool: every name paired with the number of tickets it holds.
///
/// Conceptually this is the multiset where each name appears once per ticket,
/// but tickets are never materialized. Names keep the order in which they were
/// first seen, so that a seeded draw is reproducible.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TicketsDistribution {
    entries: Vec<(Name, TotalTickets)>,
}

impl TicketsDistribution {
    pub fn iter(&self) -> impl Iterator<Item = (&Name, TotalTickets)> + '_ {
        self.entries.iter().map(|(name, tickets)| (name, *tickets))
    }

    /// Number of different names in the pool.
    pub fn distinct(&self) -> usize {
        self.entries.len()
    }

    pub fn total_tickets(&self) -> TotalTickets {
        self.entries.iter().map(|(_, tickets)| tickets).sum()
    }

    pub fn tickets_of(&self, name: &str) -> Option<TotalTickets> {
        self.entries
            .iter()
            .find(|(entry, _)| entry == name)
            .map(|(_, tickets)| *tickets)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn add(&mut self, name: Name, tickets: TotalTickets) {
        if tickets == 0 {
            return;
        }
        match self.entries.iter_mut().find(|(entry, _)| *entry == name) {
            Some((_, held)) => {
                warn!(%name, "repeated name among eligible comedians, merging their tickets");
                *held += tickets;
            }
            None => self.entries.push((name, tickets)),
        }
    }
}

/// Entries with no tickets are dropped, repeated names pool their tickets.
impl FromIterator<(Name, TotalTickets)> for TicketsDistribution {
    fn from_iter<I: IntoIterator<Item = (Name, TotalTickets)>>(iter: I) -> Self {
        let mut distribution = Self::default();
        for (name, tickets) in iter {
            distribution.add(name, tickets);
        }
        distribution
    }
}

pub fn tickets_distribution<'a>(
    eligible: impl IntoIterator<Item = &'a SignupRow>,
) -> TicketsDistribution {
    eligible
        .into_iter()
        .map(|signup| {
            let tickets = tickets_for(signup);
            debug!(full_name = %signup.full_name, tickets, "tickets assigned");
            (signup.full_name.clone(), tickets)
        })
        .collect()
}
