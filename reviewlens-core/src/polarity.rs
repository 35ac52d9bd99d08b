//! Estimate the polarity of review text.
//!
//! The `PolarityScorer` trait is the seam between the pipeline and whatever
//! model produces a continuous valence for a piece of text. Closures of type
//! `Fn(&str) -> f64` implement it directly, which keeps ad-hoc scorers and
//! test doubles cheap to write.

/// Assign a polarity in `-1.0..=1.0` to a piece of text.
///
/// Negative values indicate negative sentiment, positive values positive
/// sentiment, and `0.0` neutral or unknown. Implementations must be
/// thread-safe (`Send` + `Sync`) so one scorer can serve concurrent pipeline
/// runs. The method is infallible; return `0.0` when nothing can be inferred.
///
/// Use [`PolarityScorer::sanitise`] to clamp raw model output.
///
/// # Examples
///
/// ```rust
/// use reviewlens_core::PolarityScorer;
///
/// struct Cheerful;
///
/// impl PolarityScorer for Cheerful {
///     fn polarity(&self, _text: &str) -> f64 {
///         1.0
///     }
/// }
///
/// assert_eq!(Cheerful.polarity("anything"), 1.0);
/// let closure = |text: &str| if text.contains("bad") { -0.7 } else { 0.0 };
/// assert_eq!(closure.polarity("bad soup"), -0.7);
/// ```
pub trait PolarityScorer: Send + Sync {
    /// Return the polarity of `text`.
    fn polarity(&self, text: &str) -> f64;

    /// Clamp and validate a raw polarity.
    ///
    /// Returns `0.0` for non-finite values and clamps to `-1.0..=1.0`.
    #[must_use]
    fn sanitise(score: f64) -> f64
    where
        Self: Sized,
    {
        if !score.is_finite() {
            return 0.0;
        }
        score.clamp(-1.0, 1.0)
    }
}

impl<F> PolarityScorer for F
where
    F: Fn(&str) -> f64 + Send + Sync,
{
    fn polarity(&self, text: &str) -> f64 {
        self(text)
    }
}
