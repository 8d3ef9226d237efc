use std::collections::HashSet;

use rand::Rng;

use crate::db::Question;

/// Category id meaning "every category".
pub const ALL_CATEGORIES: i64 = 0;

/// Draws one question uniformly from `candidates` minus the already asked ids.
///
/// Returns `None` once every candidate has been asked.
pub fn pick_next<R>(candidates: Vec<Question>, previous: &[i64], rng: &mut R) -> Option<Question>
where
    R: Rng,
{
    let asked: HashSet<i64> = previous.iter().copied().collect();
    let mut remaining: Vec<Question> = candidates
        .into_iter()
        .filter(|q| !asked.contains(&q.id))
        .collect();
    if remaining.is_empty() {
        return None;
    }
    let index = rng.gen_range(0..remaining.len());
    Some(remaining.swap_remove(index))
}
