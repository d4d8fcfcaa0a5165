use crate::artifacts::aliases::ALIASES;

const MAX_SUGGESTIONS: usize = 3;
const SIMILARITY_CUTOFF: f64 = 0.6;

/// Known aliases that look like `input`, best match first.
///
/// Only used to word the error for an unknown alias; resolution itself is
/// always an exact lookup.
pub fn similar_aliases(input: &str) -> Vec<&'static str> {
    let mut scored = ALIASES
        .keys()
        .map(|alias| (similarity(input, alias), *alias))
        .filter(|(score, _)| *score >= SIMILARITY_CUTOFF)
        .collect::<Vec<_>>();

    scored.sort_by(|(a_score, a_alias), (b_score, b_alias)| {
        b_score.total_cmp(a_score).then_with(|| a_alias.cmp(b_alias))
    });

    scored
        .into_iter()
        .take(MAX_SUGGESTIONS)
        .map(|(_, alias)| alias)
        .collect()
}

/// Edit distance normalised to `0.0..=1.0`, where 1.0 means equal.
fn similarity(a: &str, b: &str) -> f64 {
    let longest = a.chars().count().max(b.chars().count());
    if longest == 0 {
        return 1.0;
    }

    1.0 - levenshtein(a, b) as f64 / longest as f64
}

fn levenshtein(a: &str, b: &str) -> usize {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();
    let n = b_chars.len();

    let mut prev_row: Vec<usize> = (0..=n).collect();
    let mut curr_row = vec![0usize; n + 1];

    for (i, a_ch) in a_chars.iter().enumerate() {
        curr_row[0] = i + 1;
        for (j, b_ch) in b_chars.iter().enumerate() {
            let cost = usize::from(a_ch != b_ch);
            curr_row[j + 1] = (prev_row[j + 1] + 1)
                .min(curr_row[j] + 1)
                .min(prev_row[j] + cost);
        }
        std::mem::swap(&mut prev_row, &mut curr_row);
    }

    prev_row[n]
}
