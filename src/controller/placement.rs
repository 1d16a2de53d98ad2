use serde::{Deserialize, Serialize};

use super::leaderboard::Standing;
use crate::model::{Player, PlayerId, Roster};

pub const NET_CHAMPION_DELTA: i32 = -2;
pub const NET_RUNNERUP_DELTA: i32 = -1;

/// Podium for the event. `None` means nobody qualified for that place.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct Placement {
    pub gross_champion: Option<PlayerId>,
    pub gross_runnerup: Option<PlayerId>,
    pub net_champion: Option<PlayerId>,
    pub net_runnerup: Option<PlayerId>,
}

impl Placement {
    pub fn handicap_delta(&self, player: &PlayerId) -> i32 {
        if self.net_champion.as_ref() == Some(player) {
            NET_CHAMPION_DELTA
        } else if self.net_runnerup.as_ref() == Some(player) {
            NET_RUNNERUP_DELTA
        } else {
            0
        }
    }

    /// `(title, player)` pairs in podium order.
    pub fn titles(&self) -> [(&'static str, Option<&PlayerId>); 4] {
        [
            ("gross champion", self.gross_champion.as_ref()),
            ("gross runner-up", self.gross_runnerup.as_ref()),
            ("net champion", self.net_champion.as_ref()),
            ("net runner-up", self.net_runnerup.as_ref()),
        ]
    }
}

fn ordered_by<F>(standings: &[Standing], key: F) -> Vec<&Standing>
where
    F: Fn(&Standing) -> i64,
{
    let mut ordered: Vec<&Standing> = standings.iter().collect();
    ordered.sort_by(|a, b| key(a).cmp(&key(b)).then_with(|| a.player.cmp(&b.player)));
    ordered
}

/// Pick the podium. Gross places honour the eligibility flags; net places
/// are drawn from everyone except the two gross placers, flags ignored.
pub fn resolve_placement(standings: &[Standing]) -> Placement {
    let by_gross = ordered_by(standings, |s| i64::from(s.gross_total));

    let gross_champion = by_gross
        .iter()
        .find(|s| !s.champion_ineligible)
        .map(|s| s.player.clone());
    let gross_runnerup = by_gross
        .iter()
        .filter(|s| Some(&s.player) != gross_champion.as_ref())
        .find(|s| !s.runnerup_ineligible)
        .map(|s| s.player.clone());

    let by_net = ordered_by(standings, |s| i64::from(s.net_total));
    let mut net_pool = by_net.iter().filter(|s| {
        Some(&s.player) != gross_champion.as_ref() && Some(&s.player) != gross_runnerup.as_ref()
    });
    let net_champion = net_pool.next().map(|s| s.player.clone());
    let net_runnerup = net_pool.next().map(|s| s.player.clone());

    Placement {
        gross_champion,
        gross_runnerup,
        net_champion,
        net_runnerup,
    }
}

/// Roster records for the next event with the podium deltas applied.
#[must_use]
pub fn next_event_roster(roster: &Roster, placement: &Placement) -> Vec<Player> {
    roster
        .iter()
        .map(|p| p.with_handicap_delta(placement.handicap_delta(&p.id)))
        .collect()
}
