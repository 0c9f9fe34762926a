use super::{Error, Name, TicketsDistribution, TotalTickets};
use rand::Rng;
use tracing::info;

/// Draw `winners` different names from the pool, in draw order.
///
/// Every round picks one ticket uniformly among the tickets still in the pool,
/// so a name's chance is its remaining tickets over the remaining total. All
/// the tickets of the winner then leave the pool: extra tickets improve the odds
/// in each round but never buy a second slot.
pub fn draw_winners<R: Rng + ?Sized>(
    distribution: &TicketsDistribution,
    winners: usize,
    rng: &mut R,
) -> Result<Vec<Name>, Error> {
    let available = distribution.distinct();
    let insufficient = || Error::InsufficientCandidates {
        requested: winners,
        available,
    };
    if available < winners {
        return Err(insufficient());
    }

    let mut pool: Vec<(&Name, TotalTickets)> = distribution.iter().collect();
    let mut remaining_tickets = distribution.total_tickets();
    let mut drawn = Vec::with_capacity(winners);

    for round in 1..=winners {
        if remaining_tickets == 0 {
            return Err(insufficient());
        }
        // Tickets are identified by their index in the residual pool, the owner
        // is found by walking the entries.
        let winning_ticket = rng.gen_range(0..remaining_tickets);
        let position = ticket_owner(&pool, winning_ticket).ok_or_else(insufficient)?;
        let (winner, tickets) = pool.remove(position);
        remaining_tickets -= tickets;

        info!(round, %winner, tickets, "comedian drawn");
        drawn.push(winner.clone());
    }

    Ok(drawn)
}

fn ticket_owner(pool: &[(&Name, TotalTickets)], ticket: TotalTickets) -> Option<usize> {
    let mut cumulative_ticket_index = 0;
    pool.iter().position(|(_, tickets)| {
        cumulative_ticket_index += tickets;
        ticket < cumulative_ticket_index
    })
}
