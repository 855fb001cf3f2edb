//! Dashboard aggregation.
//!
//! Pure functions over already-loaded members and goals. Nothing here touches
//! storage, so every rule about grouping, ordering and tie-breaking can be
//! tested directly.

use std::collections::{BTreeMap, HashMap};

use crate::models::{DashboardStats, Goal, GoalView, Mood, MoodCount, TeamMember, TeamMemberView};

/// Group goals by owning member, keeping the input (creation) order.
pub fn group_goals_by_member(goals: &[Goal]) -> HashMap<i64, Vec<GoalView>> {
    let mut grouped: HashMap<i64, Vec<GoalView>> = HashMap::new();

    for goal in goals {
        grouped
            .entry(goal.team_member_id)
            .or_default()
            .push(GoalView::from(goal));
    }

    grouped
}

/// Build one view per member, each carrying its own goals.
///
/// Member order is preserved. Goals whose owner is not in `members` are
/// dropped from the views.
pub fn build_member_views(members: &[TeamMember], goals: &[Goal]) -> Vec<TeamMemberView> {
    let mut grouped = group_goals_by_member(goals);

    members
        .iter()
        .map(|member| {
            let goals = grouped.remove(&member.id).unwrap_or_default();
            TeamMemberView::new(member, goals)
        })
        .collect()
}

/// Compute the dashboard statistics.
///
/// Goal totals come from `goals`; the mood histogram comes from `members`.
pub fn compute_dashboard_stats(members: &[TeamMemberView], goals: &[Goal]) -> DashboardStats {
    let total_goals = goals.len();
    let completed_goals = goals.iter().filter(|g| g.is_completed).count();
    let mood_distribution = mood_distribution(members);
    let dominant_mood = dominant_mood(&mood_distribution);

    DashboardStats {
        total_goals,
        completed_goals,
        completion_percentage: completion_percentage(completed_goals, total_goals),
        mood_distribution,
        dominant_mood,
    }
}

/// `completed / total` as a whole percentage, exact halves rounded to even.
///
/// Zero goals yields zero.
pub fn completion_percentage(completed: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }

    let scaled = completed as u64 * 100;
    let total = total as u64;
    let quotient = scaled / total;
    let twice_remainder = (scaled % total) * 2;

    let rounded = match twice_remainder.cmp(&total) {
        std::cmp::Ordering::Greater => quotient + 1,
        std::cmp::Ordering::Equal if quotient % 2 == 1 => quotient + 1,
        _ => quotient,
    };

    // completed <= total keeps this at or below 100
    u32::try_from(rounded).unwrap_or(u32::MAX)
}

/// Count members per mood, ascending by ordinal, omitting absent moods.
pub fn mood_distribution(members: &[TeamMemberView]) -> Vec<MoodCount> {
    let mut counts: BTreeMap<Mood, usize> = BTreeMap::new();

    for member in members {
        *counts.entry(member.mood).or_default() += 1;
    }

    counts
        .into_iter()
        .map(|(mood, count)| MoodCount { mood, count })
        .collect()
}

/// The most common mood in an ordinal-sorted distribution.
///
/// Ties go to the earliest entry, i.e. the lowest ordinal.
pub fn dominant_mood(distribution: &[MoodCount]) -> Option<Mood> {
    let mut best: Option<MoodCount> = None;

    for entry in distribution {
        match best {
            Some(current) if current.count >= entry.count => {}
            _ => best = Some(*entry),
        }
    }

    best.map(|entry| entry.mood)
}
