//! Name lookup used to turn typed guesses into institutions.

use crate::normalize::normalize;
use crate::types::Institution;

/// Maximum suggestions the interactive prompt shows at once.
pub const SUGGESTION_CAP: usize = 200;

/// First institution whose name or alias equals `query` after normalization.
pub fn find_exact<'a>(institutions: &'a [Institution], query: &str) -> Option<&'a Institution> {
    let wanted = normalize(query);
    if wanted.is_empty() {
        return None;
    }
    institutions.iter().find(|inst| {
        normalize(&inst.name) == wanted || inst.aliases.iter().any(|a| normalize(a) == wanted)
    })
}

/// Alphabetical suggestions for a partial name.
///
/// Names starting with the query come before names that only contain it.
/// An empty query lists the first `limit` names.
pub fn suggest<'a>(institutions: &'a [Institution], query: &str, limit: usize) -> Vec<&'a Institution> {
    let mut sorted: Vec<(&Institution, String)> = institutions
        .iter()
        .map(|inst| (inst, normalize(&inst.name)))
        .collect();
    sorted.sort_by(|(a, _), (b, _)| a.name.cmp(&b.name));

    let wanted = normalize(query);
    if wanted.is_empty() {
        return sorted.into_iter().take(limit).map(|(i, _)| i).collect();
    }

    let mut starts = Vec::new();
    let mut contains = Vec::new();
    for (inst, norm) in sorted {
        if starts.len() + contains.len() >= limit {
            break;
        }
        if norm.starts_with(&wanted) {
            starts.push(inst);
        } else if norm.contains(&wanted) {
            contains.push(inst);
        }
    }
    starts.extend(contains);
    starts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Coordinate;

    fn pool() -> Vec<Institution> {
        [
            "University of Chicago",
            "Chicago State University",
            "Loyola University Chicago",
            "Stanford University",
        ]
        .iter()
        .enumerate()
        .map(|(i, n)| Institution::new(i as u64, *n, Coordinate::new(40.0, -90.0)))
        .collect()
    }

    #[test]
    fn prefix_matches_rank_first() {
        let p = pool();
        let names: Vec<_> = suggest(&p, "chicago", 10)
            .into_iter()
            .map(|i| i.name.as_str())
            .collect();
        assert_eq!(
            names,
            [
                "Chicago State University",
                "Loyola University Chicago",
                "University of Chicago"
            ]
        );
    }

    #[test]
    fn limit_caps_results() {
        let p = pool();
        assert_eq!(suggest(&p, "", 2).len(), 2);
        assert_eq!(suggest(&p, "university", 1).len(), 1);
    }

    #[test]
    fn exact_uses_aliases() {
        let mut p = pool();
        p[3] = p[3].clone().with_alias("Leland Stanford Junior University");
        let hit = find_exact(&p, "leland stanford junior university!").unwrap();
        assert_eq!(hit.name, "Stanford University");
        assert!(find_exact(&p, "Chicago").is_none());
        assert!(find_exact(&p, "  ").is_none());
    }
}
