//! Unit tests for the in-memory document store.

use super::*;
use crate::instruments::{CashFlow, FlowType, Instrument, Valuation};
use crate::portfolio::Portfolio;
use crate::temporal::DateLike;
use rust_decimal_macros::dec;

fn sample_portfolio() -> Portfolio {
    let mut portfolio = Portfolio::bootstrap();
    portfolio.instruments.push(Instrument {
        name: "Bitcoin".to_string(),
        cash_flows: vec![CashFlow {
            id: "cf1".to_string(),
            date: DateLike::Epoch {
                seconds: 1_705_276_800,
                nanoseconds: 0,
            },
            amount: dec!(500),
            flow_type: FlowType::Deposit,
            description: None,
            transfer_id: None,
            transfer_from: None,
            transfer_to: None,
            created_at: None,
        }],
        valuations: vec![Valuation {
            id: "v1".to_string(),
            date: DateLike::Text("2024-02-15".to_string()),
            value: dec!(620),
            auto: true,
            created_at: None,
        }],
        current_value: dec!(620),
        total_deposited: dec!(500),
        net_invested: dec!(500),
        last_valuation_date: Some(DateLike::Text("2024-02-15".to_string())),
        ..Default::default()
    });
    portfolio
}

#[tokio::test]
async fn test_load_missing_document_is_none() {
    let store = MemoryStore::new();
    let loaded = store.load_portfolio("nobody").await.unwrap();
    assert!(loaded.is_none());
}

#[tokio::test]
async fn test_save_then_load_round_trips_document() {
    let store = MemoryStore::new();
    let portfolio = sample_portfolio();

    store.save_portfolio("u1", &portfolio).await.unwrap();
    let loaded = store.load_portfolio("u1").await.unwrap().unwrap();

    assert_eq!(loaded, portfolio);
    // The serialized forms match field for field as well
    assert_eq!(
        serde_json::to_value(&loaded).unwrap(),
        serde_json::to_value(&portfolio).unwrap()
    );
}

#[tokio::test]
async fn test_save_replaces_previous_document() {
    let store = MemoryStore::new();
    let mut portfolio = sample_portfolio();

    store.save_portfolio("u1", &portfolio).await.unwrap();
    portfolio.instruments[0].current_value = dec!(700);
    store.save_portfolio("u1", &portfolio).await.unwrap();

    let loaded = store.load_portfolio("u1").await.unwrap().unwrap();
    assert_eq!(loaded.instruments[0].current_value, dec!(700));
}

#[tokio::test]
async fn test_documents_are_isolated_per_user() {
    let store = MemoryStore::new();
    store
        .save_portfolio("u1", &sample_portfolio())
        .await
        .unwrap();

    assert!(store.load_portfolio("u2").await.unwrap().is_none());
}
