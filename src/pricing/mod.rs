//! Pricing engine: competitor aggregation, list-price suggestion, and
//! per-sale profit under tiered royalty rules.

pub mod competitors;
pub mod profit;
pub mod suggestion;

pub use competitors::{aggregate, CompetitorPeer, CompetitorSummary};
pub use profit::{
    calculate_profit, CostInputs, Format, ProfitBreakdown, ProfitConfig, RecommendedRange,
};
pub use suggestion::{suggest, PriceSuggestion, SuggestionAnalysis, SuggestionConfig};
