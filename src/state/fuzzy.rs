//! Fuzzy matching for picker labels.

/// A label that matched the query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FuzzyMatch {
    pub score: i32,
    /// Matched character indices within the label
    pub indices: Vec<usize>,
}

/// Fuzzy score a query against a label.
///
/// Every query character must appear in the label in order, ignoring case.
/// Returns `None` when it does not. Matches at the start of a path segment,
/// runs of consecutive characters and matches early in the label score
/// higher; gaps between matched characters cost a point each.
pub fn fuzzy_score(query: &str, label: &str) -> Option<FuzzyMatch> {
    if query.is_empty() {
        return Some(FuzzyMatch {
            score: 0,
            indices: vec![],
        });
    }

    let query_lower: Vec<char> = query.chars().flat_map(|c| c.to_lowercase()).collect();
    let label_chars: Vec<char> = label.chars().collect();
    // Per-char lowering keeps indices aligned with `label_chars`
    let label_lower: Vec<char> = label_chars
        .iter()
        .map(|c| c.to_lowercase().next().unwrap_or(*c))
        .collect();

    let mut indices = Vec::with_capacity(query_lower.len());
    let mut search_from = 0;

    for &qc in &query_lower {
        match label_lower[search_from..].iter().position(|&lc| lc == qc) {
            Some(pos) => {
                let idx = search_from + pos;
                indices.push(idx);
                search_from = idx + 1;
            }
            None => return None,
        }
    }

    let mut score: i32 = 0;
    let half = label_chars.len() / 2;

    for (mi, &idx) in indices.iter().enumerate() {
        if is_segment_start(&label_chars, idx) {
            score += 10;
        }

        if mi > 0 && idx == indices[mi - 1] + 1 {
            score += 5;
        }

        if idx < half {
            score += 3;
        }

        if mi > 0 {
            let gap = idx.saturating_sub(indices[mi - 1] + 1);
            score -= gap as i32;
        }
    }

    Some(FuzzyMatch { score, indices })
}

fn is_segment_start(chars: &[char], idx: usize) -> bool {
    idx == 0
        || matches!(
            chars.get(idx - 1),
            Some('/' | '\\' | '.' | '_' | '-' | ' ')
        )
}
