//! List-price suggestion heuristic.
//!
//! The multipliers and tier boundaries here are hand-tuned business rules
//! carried over unchanged; they are exposed as configuration so behavior
//! stays reproducible rather than re-derived.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::domain::{round_cents, Title};

use super::competitors::CompetitorSummary;

/// Reasoning attached when no competitor was found in the category.
const PAGE_COUNT_REASONING: &str =
    "Based on page count analysis (no competitors found in category)";

/// Reasoning attached when competitors drove the suggestion.
const COMPETITOR_REASONING: &str = "Based on competitor analysis in same category";

/// Tunable constants of the suggestion heuristic.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SuggestionConfig {
    /// Hard lower bound for a suggested price.
    pub floor: Decimal,
    /// Hard upper bound for a suggested price.
    pub ceiling: Decimal,

    /// Fallback base price for titles up to `short_pages` pages.
    pub short_base: Decimal,
    /// Fallback base price for titles up to `medium_pages` pages.
    pub medium_base: Decimal,
    /// Fallback base price for longer titles.
    pub long_base: Decimal,
    pub short_pages: i32,
    pub medium_pages: i32,
    /// Bracket around the fallback base price.
    pub fallback_bracket_low: Decimal,
    pub fallback_bracket_high: Decimal,

    /// A rating must differ from the competitor mean by more than this
    /// margin before either multiplier applies.
    pub rating_margin: Decimal,
    pub rating_boost: Decimal,
    pub rating_cut: Decimal,
    /// Benchmark rating assumed when no competitor is rated.
    pub default_competitor_rating: Decimal,

    /// Page count beyond `mean × pages_over_ratio` earns the boost;
    /// below `mean × pages_under_ratio` takes the cut.
    pub pages_over_ratio: Decimal,
    pub pages_under_ratio: Decimal,
    pub pages_boost: Decimal,
    pub pages_cut: Decimal,

    /// Bracket around the clamped suggestion.
    pub bracket_low: Decimal,
    pub bracket_high: Decimal,
}

impl Default for SuggestionConfig {
    fn default() -> Self {
        Self {
            floor: dec!(0.99),
            ceiling: dec!(9.99),
            short_base: dec!(2.99),
            medium_base: dec!(4.99),
            long_base: dec!(9.99),
            short_pages: 300,
            medium_pages: 500,
            fallback_bracket_low: dec!(0.8),
            fallback_bracket_high: dec!(1.2),
            rating_margin: dec!(0.5),
            rating_boost: dec!(1.15),
            rating_cut: dec!(0.90),
            default_competitor_rating: dec!(4.0),
            pages_over_ratio: dec!(1.3),
            pages_under_ratio: dec!(0.7),
            pages_boost: dec!(1.10),
            pages_cut: dec!(0.95),
            bracket_low: dec!(0.85),
            bracket_high: dec!(1.15),
        }
    }
}

/// How a suggestion was reached.
#[derive(Debug, Clone, Serialize)]
pub struct SuggestionAnalysis {
    pub competitor_count: usize,
    pub avg_competitor_price: Option<Decimal>,
    pub avg_competitor_rating: Option<Decimal>,
    /// Display string of the observed competitor price range.
    pub price_range: Option<String>,
    pub reasoning: String,
}

/// A recommended list price with its surrounding band.
#[derive(Debug, Clone, Serialize)]
pub struct PriceSuggestion {
    pub suggested: Decimal,
    pub min: Decimal,
    pub max: Decimal,
    pub analysis: SuggestionAnalysis,
}

/// Suggest a list price for `title` given its competitor summary.
///
/// With no competitors the price is tiered purely by page count. Otherwise
/// the competitor mean price is adjusted for rating and length, then
/// clamped to `[floor, ceiling]`. Currency is rounded to cents at this
/// boundary only.
#[must_use]
pub fn suggest(
    title: &Title,
    summary: &CompetitorSummary,
    config: &SuggestionConfig,
) -> PriceSuggestion {
    if summary.is_empty() {
        return fallback_suggestion(title, config);
    }

    let mean_price = summary.mean_price().unwrap_or(config.short_base);
    let mut suggested = mean_price;

    if let Some(rating) = title.rating {
        let benchmark = summary
            .mean_rating()
            .unwrap_or(config.default_competitor_rating);
        if rating > benchmark + config.rating_margin {
            suggested *= config.rating_boost;
        } else if rating < benchmark - config.rating_margin {
            suggested *= config.rating_cut;
        }
    }

    if let (Some(pages), Some(mean_pages)) = (title.page_count, summary.mean_page_count()) {
        let pages = Decimal::from(pages);
        if pages > mean_pages * config.pages_over_ratio {
            suggested *= config.pages_boost;
        } else if pages < mean_pages * config.pages_under_ratio {
            suggested *= config.pages_cut;
        }
    }

    let clamped = suggested.clamp(config.floor, config.ceiling);

    let price_range = summary
        .price_range()
        .map(|(lo, hi)| format!("${:.2} - ${:.2}", round_cents(lo), round_cents(hi)));

    PriceSuggestion {
        suggested: round_cents(clamped),
        min: round_cents(clamped * config.bracket_low),
        max: round_cents(clamped * config.bracket_high),
        analysis: SuggestionAnalysis {
            competitor_count: summary.count(),
            avg_competitor_price: Some(round_cents(mean_price)),
            avg_competitor_rating: summary.mean_rating().map(round_hundredths),
            price_range,
            reasoning: COMPETITOR_REASONING.to_string(),
        },
    }
}

fn fallback_suggestion(title: &Title, config: &SuggestionConfig) -> PriceSuggestion {
    let pages = title.page_count.unwrap_or(0);
    let base = if pages > config.medium_pages {
        config.long_base
    } else if pages > config.short_pages {
        config.medium_base
    } else {
        config.short_base
    };

    PriceSuggestion {
        suggested: round_cents(base),
        min: round_cents(base * config.fallback_bracket_low),
        max: round_cents(base * config.fallback_bracket_high),
        analysis: SuggestionAnalysis {
            competitor_count: 0,
            avg_competitor_price: None,
            avg_competitor_rating: None,
            price_range: None,
            reasoning: PAGE_COUNT_REASONING.to_string(),
        },
    }
}

fn round_hundredths(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, rust_decimal::RoundingStrategy::MidpointAwayFromZero)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::TitleId;
    use crate::pricing::competitors::CompetitorPeer;
    use chrono::Utc;

    fn title(
        price: Option<Decimal>,
        rating: Option<Decimal>,
        page_count: Option<i32>,
    ) -> Title {
        Title {
            id: TitleId::new(1),
            external_id: None,
            name: "Test Title".to_string(),
            author: "Author".to_string(),
            current_price: price,
            rating,
            rating_count: 10,
            page_count,
            category: "Fiction".to_string(),
            publisher: None,
            published_date: None,
            added_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn peers(rows: &[(Decimal, Option<Decimal>, Option<i32>)]) -> CompetitorSummary {
        let peers: Vec<CompetitorPeer> = rows
            .iter()
            .map(|&(price, rating, page_count)| CompetitorPeer {
                price,
                rating,
                page_count,
            })
            .collect();
        CompetitorSummary::from_peers(&peers)
    }

    fn config() -> SuggestionConfig {
        SuggestionConfig::default()
    }

    #[test]
    fn no_competitors_tiers_by_page_count() {
        let cases = [
            (None, dec!(2.99)),
            (Some(120), dec!(2.99)),
            (Some(300), dec!(2.99)),
            (Some(301), dec!(4.99)),
            (Some(500), dec!(4.99)),
            (Some(501), dec!(9.99)),
        ];
        for (pages, expected) in cases {
            let s = suggest(&title(None, None, pages), &CompetitorSummary::empty(), &config());
            assert_eq!(s.suggested, expected, "pages {pages:?}");
            assert_eq!(s.min, round_cents(expected * dec!(0.8)));
            assert_eq!(s.max, round_cents(expected * dec!(1.2)));
            assert_eq!(s.analysis.competitor_count, 0);
            assert_eq!(s.analysis.avg_competitor_price, None);
            assert_eq!(s.analysis.price_range, None);
            assert!(s.analysis.reasoning.contains("page count"));
        }
    }

    #[test]
    fn competitor_mean_is_the_starting_point() {
        let summary = peers(&[
            (dec!(4.00), None, None),
            (dec!(6.00), None, None),
        ]);
        // unrated title, no page counts on either side: no adjustments
        let s = suggest(&title(None, None, None), &summary, &config());
        assert_eq!(s.suggested, dec!(5.00));
        assert_eq!(s.min, dec!(4.25));
        assert_eq!(s.max, dec!(5.75));
        assert_eq!(s.analysis.competitor_count, 2);
        assert_eq!(s.analysis.avg_competitor_price, Some(dec!(5.00)));
        assert_eq!(s.analysis.avg_competitor_rating, None);
        assert_eq!(s.analysis.price_range.as_deref(), Some("$4.00 - $6.00"));
        assert!(s.analysis.reasoning.contains("competitor"));
    }

    #[test]
    fn strong_rating_earns_the_boost() {
        let summary = peers(&[(dec!(5.00), Some(dec!(4.0)), None)]);
        // 4.6 > 4.0 + 0.5
        let s = suggest(&title(None, Some(dec!(4.6)), None), &summary, &config());
        assert_eq!(s.suggested, dec!(5.75)); // 5.00 * 1.15
    }

    #[test]
    fn weak_rating_takes_the_cut() {
        let summary = peers(&[(dec!(5.00), Some(dec!(4.0)), None)]);
        // 3.4 < 4.0 - 0.5
        let s = suggest(&title(None, Some(dec!(3.4)), None), &summary, &config());
        assert_eq!(s.suggested, dec!(4.50)); // 5.00 * 0.90
    }

    #[test]
    fn rating_within_margin_is_a_no_op() {
        let summary = peers(&[(dec!(5.00), Some(dec!(4.0)), None)]);
        for rating in [dec!(4.0), dec!(4.5), dec!(3.5)] {
            let s = suggest(&title(None, Some(rating), None), &summary, &config());
            assert_eq!(s.suggested, dec!(5.00), "rating {rating}");
        }
    }

    #[test]
    fn unrated_title_gets_no_rating_adjustment() {
        let summary = peers(&[(dec!(5.00), Some(dec!(1.0)), None)]);
        let s = suggest(&title(None, None, None), &summary, &config());
        assert_eq!(s.suggested, dec!(5.00));
    }

    #[test]
    fn unrated_competitors_benchmark_against_default() {
        // no competitor ratings: benchmark is 4.0
        let summary = peers(&[(dec!(5.00), None, None)]);
        let s = suggest(&title(None, Some(dec!(4.6)), None), &summary, &config());
        assert_eq!(s.suggested, dec!(5.75));
        assert_eq!(s.analysis.avg_competitor_rating, None);
    }

    #[test]
    fn long_title_earns_page_boost() {
        let summary = peers(&[(dec!(5.00), None, Some(300))]);
        // 400 > 300 * 1.3 = 390
        let s = suggest(&title(None, None, Some(400)), &summary, &config());
        assert_eq!(s.suggested, dec!(5.50)); // 5.00 * 1.10
    }

    #[test]
    fn short_title_takes_page_cut() {
        let summary = peers(&[(dec!(5.00), None, Some(300))]);
        // 200 < 300 * 0.7 = 210
        let s = suggest(&title(None, None, Some(200)), &summary, &config());
        assert_eq!(s.suggested, dec!(4.75)); // 5.00 * 0.95
    }

    #[test]
    fn page_adjustment_needs_competitor_page_counts() {
        let summary = peers(&[(dec!(5.00), None, None)]);
        let s = suggest(&title(None, None, Some(1000)), &summary, &config());
        assert_eq!(s.suggested, dec!(5.00));
    }

    #[test]
    fn adjustments_compose_multiplicatively() {
        let summary = peers(&[(dec!(5.00), Some(dec!(4.0)), Some(300))]);
        let s = suggest(
            &title(None, Some(dec!(4.6)), Some(400)),
            &summary,
            &config(),
        );
        // 5.00 * 1.15 * 1.10 = 6.325 -> 6.33
        assert_eq!(s.suggested, dec!(6.33));
        // bracket comes off the full-precision clamped value
        assert_eq!(s.min, round_cents(dec!(6.325) * dec!(0.85)));
        assert_eq!(s.max, round_cents(dec!(6.325) * dec!(1.15)));
    }

    #[test]
    fn suggestion_is_clamped_to_band() {
        let high = peers(&[(dec!(59.99), None, None)]);
        let s = suggest(&title(None, None, None), &high, &config());
        assert_eq!(s.suggested, dec!(9.99));

        let low = peers(&[(dec!(0.10), None, None)]);
        let s = suggest(&title(None, None, None), &low, &config());
        assert_eq!(s.suggested, dec!(0.99));
    }

    #[test]
    fn bracket_surrounds_the_clamped_value() {
        let high = peers(&[(dec!(59.99), None, None)]);
        let s = suggest(&title(None, None, None), &high, &config());
        assert_eq!(s.min, round_cents(dec!(9.99) * dec!(0.85)));
        assert_eq!(s.max, round_cents(dec!(9.99) * dec!(1.15)));
    }
}
