/// Decimal digits cosine scores are rounded to.
pub const SCORE_DIGITS: i32 = 4;

pub fn dot_product(a: &[f64], b: &[f64]) -> f64 {
    a.iter().zip(b).map(|(x, y)| x * y).sum()
}

/// Euclidean norm.
pub fn magnitude(v: &[f64]) -> f64 {
    v.iter().map(|x| x * x).sum::<f64>().sqrt()
}

/// Round half away from zero to `digits` decimal places.
pub fn round_to(value: f64, digits: i32) -> f64 {
    let scale = 10_f64.powi(digits);
    (value * scale).round() / scale
}

/// Cosine similarity between a query vector and a document vector.
///
/// Both vectors have one slot per vocabulary term. If either has zero
/// magnitude the score is exactly `0.0`. Scores are rounded to
/// [`SCORE_DIGITS`] decimal places.
pub fn cosine_similarity(query: &[f64], document: &[f64]) -> f64 {
    let query_length = magnitude(query);
    let document_length = magnitude(document);

    if query_length == 0.0 || document_length == 0.0 {
        return 0.0;
    }

    round_to(
        dot_product(query, document) / (query_length * document_length),
        SCORE_DIGITS,
    )
}
