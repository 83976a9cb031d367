//! Shipped demo dataset
//!
//! Preloaded synthetic snapshot used by the demo binary, the API's
//! no-body path, and tests. Stands in for a future live data feed.

use crate::models::{
    Competitor, MarketSnapshot, MarketTrend, PricePoint, ReviewSample, ReviewSentiment,
    TrendStatus,
};

fn price_point(date: &str, price: f64) -> PricePoint {
    PricePoint {
        date: date.to_string(),
        price,
    }
}

/// The shipped fixture: 3 competitors, 3 trends, 4 reviews, with aligned
/// price-history date points.
pub fn demo_snapshot() -> MarketSnapshot {
    let competitors = vec![
        Competitor {
            id: "c1".to_string(),
            name: "TechFlow Pro".to_string(),
            url: "https://techflow.example.com".to_string(),
            price: 1299.0,
            currency: "$".to_string(),
            last_updated: "2025-12-05".to_string(),
            features: vec![
                "AI Noise Cancel".to_string(),
                "30h Battery".to_string(),
                "Multi-point Connect".to_string(),
            ],
            rating: 4.5,
            review_count: 1240,
            sentiment_score: 0.8,
            price_history: vec![
                price_point("2025-10-01", 1299.0),
                price_point("2025-11-01", 1249.0),
                price_point("2025-12-01", 1299.0),
            ],
            recent_changes: Some(vec![
                "Added Bluetooth 5.4 support".to_string(),
                "New Midnight Blue color".to_string(),
            ]),
        },
        Competitor {
            id: "c2".to_string(),
            name: "SoundWave X".to_string(),
            url: "https://soundwave.example.com".to_string(),
            price: 999.0,
            currency: "$".to_string(),
            last_updated: "2025-12-06".to_string(),
            features: vec![
                "Bass Boost".to_string(),
                "24h Battery".to_string(),
                "Water Resistant".to_string(),
            ],
            rating: 4.2,
            review_count: 850,
            sentiment_score: 0.4,
            price_history: vec![
                price_point("2025-10-01", 1100.0),
                price_point("2025-11-01", 999.0),
                price_point("2025-12-01", 999.0),
            ],
            recent_changes: Some(vec!["Price drop detected".to_string()]),
        },
        Competitor {
            id: "c3".to_string(),
            name: "AudioPure Z1".to_string(),
            url: "https://audiopure.example.com".to_string(),
            price: 1450.0,
            currency: "$".to_string(),
            last_updated: "2025-12-06".to_string(),
            features: vec![
                "Lossless Audio".to_string(),
                "40h Battery".to_string(),
                "Titanium Build".to_string(),
            ],
            rating: 4.8,
            review_count: 320,
            sentiment_score: 0.9,
            price_history: vec![
                price_point("2025-10-01", 1450.0),
                price_point("2025-11-01", 1450.0),
                price_point("2025-12-01", 1450.0),
            ],
            recent_changes: None,
        },
    ];

    let trends = vec![
        MarketTrend {
            keyword: "spatial audio".to_string(),
            volume: 45000,
            growth: 22.0,
            status: TrendStatus::Rising,
        },
        MarketTrend {
            keyword: "wired headphones".to_string(),
            volume: 12000,
            growth: -5.0,
            status: TrendStatus::Declining,
        },
        MarketTrend {
            keyword: "multipoint connection".to_string(),
            volume: 28000,
            growth: 15.0,
            status: TrendStatus::Rising,
        },
    ];

    let reviews = vec![
        ReviewSample {
            source: "Amazon".to_string(),
            text: "The battery life is amazing, but the case feels cheap.".to_string(),
            sentiment: ReviewSentiment::Neutral,
        },
        ReviewSample {
            source: "Twitter".to_string(),
            text: "TechFlow's new update completely fixed the connectivity issues!".to_string(),
            sentiment: ReviewSentiment::Positive,
        },
        ReviewSample {
            source: "TechRadar".to_string(),
            text: "SoundWave X is good value, but lacks the clarity of high-end models."
                .to_string(),
            sentiment: ReviewSentiment::Neutral,
        },
        ReviewSample {
            source: "Reddit".to_string(),
            text: "Avoid the Z1 if you have small ears, they are huge.".to_string(),
            sentiment: ReviewSentiment::Negative,
        },
    ];

    MarketSnapshot {
        competitors,
        trends,
        reviews,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_snapshot_is_aligned() {
        assert!(demo_snapshot().validate_alignment().is_ok());
    }

    #[test]
    fn demo_snapshot_matches_shipped_fixture() {
        let snapshot = demo_snapshot();
        assert_eq!(snapshot.competitors.len(), 3);
        assert_eq!(snapshot.trends.len(), 3);
        assert_eq!(snapshot.reviews.len(), 4);

        let prices: Vec<f64> = snapshot.competitors.iter().map(|c| c.price).collect();
        assert_eq!(prices, vec![1299.0, 999.0, 1450.0]);
    }
}
