//! Relevance scoring of a result title against the search term.

/// Shorter words are ignored for partial matches.
const PARTIAL_MATCH_MIN_LEN: usize = 3;
/// Shortest word that earns the minimal score.
const MINIMAL_MATCH_MIN_LEN: usize = 4;

const EXACT_MATCH_SCORE: f32 = 1.0;
const PARTIAL_MATCH_BASE: f32 = 0.5;
const PREFIX_BONUS: f32 = 0.3;
const URL_BONUS: f32 = 0.2;
const MINIMAL_SCORE: f32 = 0.1;

/// Scores a candidate's title and URL against the search term.
///
/// - The whole term appearing in the title scores 1.0; otherwise every term word longer
///   than two characters found in the title counts toward
///   `0.5 + 0.5 * matched / total_words`.
/// - A title starting with the term earns +0.3.
/// - A URL containing the term (spaces as hyphens) earns +0.2.
/// - A zero score is raised to 0.1 when a word of four or more characters appears in
///   the title.
///
/// Comparisons are case-insensitive. A score of zero means "no match".
///
/// # Examples
///
/// ```
/// use vixen_scraper::search::score_candidate;
///
/// let score = score_candidate("Jane Doe", "Doe and Jane", "https://www.vixen.com/videos/x");
/// assert_eq!(score, 1.0);
/// ```
pub fn score_candidate(term: &str, title: &str, url: &str) -> f32 {
    let term = term.to_lowercase();
    let title = title.to_lowercase();
    let words: Vec<&str> = term.split_whitespace().collect();

    let mut score = 0.0;

    if title.contains(&term) {
        score += EXACT_MATCH_SCORE;
    } else {
        let matched = words
            .iter()
            .filter(|word| word.chars().count() >= PARTIAL_MATCH_MIN_LEN && title.contains(*word))
            .count();
        if matched > 0 {
            score += PARTIAL_MATCH_BASE + PARTIAL_MATCH_BASE * matched as f32 / words.len() as f32;
        }
    }

    if title.starts_with(&term) {
        score += PREFIX_BONUS;
    }

    if url.to_lowercase().contains(&term.replace(' ', "-")) {
        score += URL_BONUS;
    }

    if score == 0.0
        && words
            .iter()
            .any(|word| word.chars().count() >= MINIMAL_MATCH_MIN_LEN && title.contains(*word))
    {
        score = MINIMAL_SCORE;
    }

    score
}
