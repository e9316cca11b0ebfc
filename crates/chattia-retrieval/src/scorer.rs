//! BM25 term scoring. Pure functions, no failure modes.

/// Inverse document frequency: `ln(1 + (N - df + 0.5) / (df + 0.5))`.
///
/// A term never seen in the corpus gets idf 0 so it contributes nothing,
/// rather than a negative or undefined score.
pub fn idf(doc_count: usize, doc_freq: usize) -> f64 {
    if doc_freq == 0 {
        return 0.0;
    }
    let n = doc_count as f64;
    let df = doc_freq as f64;
    (1.0 + (n - df + 0.5) / (df + 0.5)).ln()
}

/// BM25 score contribution of one term for one document.
///
/// `tf` is the term's raw count inside the document, `doc_len` the document's
/// token count. A zero `avgdl` (empty corpus) substitutes 1 as the divisor.
pub fn term_score(idf: f64, tf: usize, doc_len: usize, avgdl: f64, k1: f64, b: f64) -> f64 {
    if tf == 0 {
        return 0.0;
    }
    let tf = tf as f64;
    let avgdl = if avgdl == 0.0 { 1.0 } else { avgdl };
    let numerator = tf * (k1 + 1.0);
    let denominator = tf + k1 * (1.0 - b + b * doc_len as f64 / avgdl);
    idf * (numerator / denominator)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_idf_unseen_term_is_zero() {
        assert_eq!(idf(10, 0), 0.0);
    }

    #[test]
    fn test_idf_strictly_decreasing_in_doc_freq() {
        let n = 20;
        let mut previous = f64::INFINITY;
        for df in 1..=n {
            let value = idf(n, df);
            assert!(value < previous, "idf must decrease: df={df}");
            previous = value;
        }
    }

    #[test]
    fn test_idf_matches_formula() {
        // N=3, df=1: ln(1 + 2.5/1.5)
        let expected = (1.0_f64 + 2.5 / 1.5).ln();
        assert!((idf(3, 1) - expected).abs() < 1e-12);
    }

    #[test]
    fn test_term_score_zero_tf_is_zero() {
        assert_eq!(term_score(1.0, 0, 10, 5.0, 1.5, 0.75), 0.0);
    }

    #[test]
    fn test_term_score_saturates_with_tf() {
        let k1 = 1.5;
        let b = 0.75;
        let s1 = term_score(1.0, 1, 10, 10.0, k1, b);
        let s2 = term_score(1.0, 2, 10, 10.0, k1, b);
        let s10 = term_score(1.0, 10, 10, 10.0, k1, b);
        assert!(s2 > s1);
        // Diminishing returns: the jump from 1→2 beats the average gain 2→10.
        assert!(s2 - s1 > (s10 - s2) / 8.0);
        // Bounded by idf * (k1 + 1)
        assert!(s10 < 1.0 * (k1 + 1.0));
    }

    #[test]
    fn test_term_score_penalizes_long_documents() {
        let short = term_score(1.0, 1, 5, 10.0, 1.5, 0.75);
        let long = term_score(1.0, 1, 50, 10.0, 1.5, 0.75);
        assert!(short > long);
    }

    #[test]
    fn test_zero_avgdl_does_not_divide_by_zero() {
        let score = term_score(1.0, 1, 3, 0.0, 1.5, 0.75);
        assert!(score.is_finite());
        assert!(score > 0.0);
    }
}
