// First-run catalog seeding
// Populates the asset catalog once, when the table is empty

use chrono::Utc;
use rust_decimal::Decimal;
use sea_orm::{DbErr, Set};

use crate::db::repositories::AssetRepository;
use crate::entity::assets::{ActiveModel, AssetStatus};

/// One catalog row to be seeded
pub struct SeedAsset {
    pub id: String,
    pub symbol: String,
    pub name: String,
    pub image: String,
    pub current_price: Decimal,
    pub price_change_percentage_24h: Decimal,
    pub market_cap_rank: i32,
}

impl SeedAsset {
    fn new(
        id: &str,
        symbol: &str,
        name: &str,
        image: &str,
        current_price: Decimal,
        price_change_percentage_24h: Decimal,
        market_cap_rank: i32,
    ) -> Self {
        SeedAsset {
            id: id.to_string(),
            symbol: symbol.to_string(),
            name: name.to_string(),
            image: image.to_string(),
            current_price,
            price_change_percentage_24h,
            market_cap_rank,
        }
    }
}

fn status_from_rank(rank: i32) -> AssetStatus {
    if rank % 7 == 0 {
        AssetStatus::Inactive
    } else {
        AssetStatus::Active
    }
}

fn base_seed_assets() -> Vec<SeedAsset> {
    vec![
        SeedAsset::new(
            "bitcoin",
            "btc",
            "Bitcoin",
            "https://assets.coingecko.com/coins/images/1/large/bitcoin.png",
            Decimal::new(432505, 1),
            Decimal::new(298, 2),
            1,
        ),
        SeedAsset::new(
            "ethereum",
            "eth",
            "Ethereum",
            "https://assets.coingecko.com/coins/images/279/large/ethereum.png",
            Decimal::new(265075, 2),
            Decimal::new(117, 2),
            2,
        ),
        SeedAsset::new(
            "binancecoin",
            "bnb",
            "BNB",
            "https://assets.coingecko.com/coins/images/825/large/bnb-icon2_2x.png",
            Decimal::new(31542, 2),
            Decimal::new(175, 2),
            4,
        ),
        SeedAsset::new(
            "solana",
            "sol",
            "Solana",
            "https://assets.coingecko.com/coins/images/4128/large/solana.png",
            Decimal::new(985, 1),
            Decimal::new(26, 1),
            5,
        ),
        SeedAsset::new(
            "cardano",
            "ada",
            "Cardano",
            "https://assets.coingecko.com/coins/images/975/large/cardano.png",
            Decimal::new(52, 2),
            Decimal::new(196, 2),
            8,
        ),
        SeedAsset::new(
            "polkadot",
            "dot",
            "Polkadot",
            "https://assets.coingecko.com/coins/images/12171/large/polkadot.png",
            Decimal::new(725, 2),
            Decimal::new(211, 2),
            12,
        ),
        SeedAsset::new(
            "chainlink",
            "link",
            "Chainlink",
            "https://assets.coingecko.com/coins/images/877/large/chainlink-new-logo.png",
            Decimal::new(1485, 2),
            Decimal::new(171, 2),
            14,
        ),
        SeedAsset::new(
            "polygon",
            "matic",
            "Polygon",
            "https://assets.coingecko.com/coins/images/4713/large/matic-token-icon.png",
            Decimal::new(85, 2),
            Decimal::new(241, 2),
            18,
        ),
        SeedAsset::new(
            "litecoin",
            "ltc",
            "Litecoin",
            "https://assets.coingecko.com/coins/images/2/large/litecoin.png",
            Decimal::new(725, 1),
            Decimal::new(211, 2),
            20,
        ),
        SeedAsset::new(
            "avalanche",
            "avax",
            "Avalanche",
            "https://assets.coingecko.com/coins/images/12559/large/avalanche-avax-logo.png",
            Decimal::new(3675, 2),
            Decimal::new(208, 2),
            9,
        ),
    ]
}

fn generated_seed_assets() -> Vec<SeedAsset> {
    let names = [
        "Ripple",
        "Dogecoin",
        "Shiba Inu",
        "Uniswap",
        "Cosmos",
        "Algorand",
        "VeChain",
        "Filecoin",
        "TRON",
        "Monero",
        "EOS",
        "Aave",
        "The Graph",
        "Curve",
        "Maker",
        "Compound",
        "Yearn",
        "SushiSwap",
        "1inch",
        "Enjin",
        "Decentraland",
        "Axie",
        "Sandbox",
        "Gala",
        "Immutable",
        "Flow",
        "Tezos",
        "Hedera",
        "Near",
        "Aptos",
    ];

    names
        .iter()
        .enumerate()
        .map(|(index, name)| {
            let symbol: String = name.chars().take(3).collect::<String>().to_lowercase();
            let rank = 25 + index as i32;
            // Deterministic filler values; exact numbers don't matter
            let price = Decimal::new((index as i64 * 137 + 42) % 10_000 + 10, 2);
            let pct_24h = Decimal::new((index as i64 * 53) % 500 - 250, 2);

            SeedAsset::new(
                &symbol,
                &symbol,
                name,
                &format!(
                    "https://assets.coingecko.com/coins/images/{}/large/{}.png",
                    1000 + index,
                    symbol
                ),
                price,
                pct_24h,
                rank,
            )
        })
        .collect()
}

/// Full deterministic seed catalog: 10 majors plus 30 generated entries
pub fn all_seed_assets() -> Vec<SeedAsset> {
    let mut assets = base_seed_assets();
    assets.extend(generated_seed_assets());
    assets
}

/// Populate the asset catalog on first run. Does nothing once any row exists.
/// Returns true when rows were inserted.
pub async fn seed_assets_if_empty(assets: &AssetRepository) -> Result<bool, DbErr> {
    if assets.count_all().await? > 0 {
        return Ok(false);
    }

    let now = Utc::now();
    let models: Vec<ActiveModel> = all_seed_assets()
        .into_iter()
        .map(|seed| ActiveModel {
            id: Set(seed.id),
            symbol: Set(seed.symbol),
            name: Set(seed.name),
            image: Set(seed.image),
            status: Set(status_from_rank(seed.market_cap_rank)),
            current_price: Set(Some(seed.current_price)),
            price_change_percentage_24h: Set(Some(seed.price_change_percentage_24h)),
            market_cap_rank: Set(Some(seed.market_cap_rank)),
            created_at: Set(now),
            updated_at: Set(now),
        })
        .collect();

    assets.insert_many(models).await?;
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn seed_catalog_has_forty_unique_assets() {
        let assets = all_seed_assets();
        assert_eq!(assets.len(), 40);

        let ids: HashSet<&str> = assets.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids.len(), 40);
    }

    #[test]
    fn seed_ranks_are_positive() {
        assert!(all_seed_assets().iter().all(|a| a.market_cap_rank > 0));
    }

    #[test]
    fn every_seventh_rank_is_inactive() {
        assert_eq!(status_from_rank(7), AssetStatus::Inactive);
        assert_eq!(status_from_rank(14), AssetStatus::Inactive);
        assert_eq!(status_from_rank(1), AssetStatus::Active);
        assert_eq!(status_from_rank(8), AssetStatus::Active);
    }

    #[test]
    fn bitcoin_leads_the_seed_ranking() {
        let assets = all_seed_assets();
        let bitcoin = assets.iter().find(|a| a.id == "bitcoin").unwrap();
        assert_eq!(bitcoin.market_cap_rank, 1);
        assert_eq!(bitcoin.symbol, "btc");
    }
}
