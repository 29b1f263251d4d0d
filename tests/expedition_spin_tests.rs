mod common;

use chrono::{Duration, TimeZone, Utc};
use common::*;
use cryptominer_bot::models::ExpeditionStatus;
use cryptominer_bot::operations::{is_spin_due, CycleContext, ExpeditionManager, SpinRotator};

#[tokio::test]
async fn test_idle_expedition_is_sent_at_flat_cost() {
    let api = MockGameApi::new();
    api.state().expeditions = vec![expedition(9, ExpeditionStatus::Idle)];
    let mut config = quiet_config().expeditions;
    config.enabled = true;
    config.cost = 50.0;
    let mut ctx = CycleContext::for_world(&world(3, 100.0, true));

    let sent = ExpeditionManager::new(&api, &config).dispatch(&mut ctx).await.unwrap();

    assert_eq!(sent, 1);
    assert_eq!(ctx.budget.amount(), 50.0);
    assert_eq!(
        api.calls(),
        vec!["expeditions(3)", "send_expedition(9)", "fund_expedition(9, 50)"]
    );
}

#[tokio::test]
async fn test_in_process_expedition_is_left_alone() {
    let api = MockGameApi::new();
    api.state().expeditions = vec![
        expedition(1, ExpeditionStatus::InProcess),
        expedition(2, ExpeditionStatus::Other),
    ];
    let mut config = quiet_config().expeditions;
    config.cost = 50.0;
    let mut ctx = CycleContext::for_world(&world(3, 1000.0, true));

    let sent = ExpeditionManager::new(&api, &config).dispatch(&mut ctx).await.unwrap();

    assert_eq!(sent, 1);
    assert_eq!(api.count_calls("send_expedition(1)"), 0);
    assert_eq!(api.count_calls("send_expedition(2)"), 1);
    assert_eq!(ctx.budget.amount(), 950.0);
}

#[tokio::test]
async fn test_expedition_needs_budget_above_cost() {
    let api = MockGameApi::new();
    api.state().expeditions = vec![expedition(1, ExpeditionStatus::Idle), expedition(2, ExpeditionStatus::Idle)];
    let mut config = quiet_config().expeditions;
    config.cost = 50.0;
    let mut ctx = CycleContext::for_world(&world(3, 120.0, true));

    let sent = ExpeditionManager::new(&api, &config).dispatch(&mut ctx).await.unwrap();

    // 120 -> 70 -> 20
    assert_eq!(sent, 2);
    assert_eq!(ctx.budget.amount(), 20.0);

    let mut ctx = CycleContext::for_world(&world(3, 50.0, true));
    api.state().expeditions = vec![expedition(3, ExpeditionStatus::Idle)];
    let sent = ExpeditionManager::new(&api, &config).dispatch(&mut ctx).await.unwrap();
    assert_eq!(sent, 0);
}

#[test]
fn test_spin_due_after_a_full_day() {
    let last = Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, 0).unwrap();
    let history = vec![spin_at(last)];

    assert!(!is_spin_due(&history, last + Duration::hours(23)));
    assert!(is_spin_due(&history, last + Duration::hours(24) + Duration::minutes(1)));
    assert!(is_spin_due(&history, last + Duration::hours(24)));
}

#[test]
fn test_spin_due_without_history() {
    assert!(is_spin_due(&[], Utc::now()));
}

#[test]
fn test_spin_uses_most_recent_record() {
    let now = Utc.with_ymd_and_hms(2026, 3, 2, 12, 0, 0).unwrap();
    let history = vec![
        spin_at(now - Duration::days(5)),
        spin_at(now - Duration::hours(2)),
    ];
    assert!(!is_spin_due(&history, now));
}

#[tokio::test]
async fn test_rotator_spins_once_when_due() {
    let api = MockGameApi::new();
    let now = Utc::now();
    api.state().spin_history = vec![spin_at(now - Duration::hours(24) - Duration::minutes(1))];
    let mut config = quiet_config().spin;
    config.enabled = true;

    let spun = SpinRotator::new(&api, &config).rotate_if_due(now).await.unwrap();

    assert!(spun);
    assert_eq!(api.count_calls("rotate_spin"), 1);
    assert_eq!(api.count_calls("spin_history(15, 1)"), 2, "history re-read after the spin");
}

#[tokio::test]
async fn test_rotator_waits_within_a_day() {
    let api = MockGameApi::new();
    let now = Utc::now();
    api.state().spin_history = vec![spin_at(now - Duration::hours(23))];
    let config = quiet_config().spin;

    let spun = SpinRotator::new(&api, &config).rotate_if_due(now).await.unwrap();

    assert!(!spun);
    assert_eq!(api.count_calls("rotate_spin"), 0);
}

#[tokio::test]
async fn test_rotator_spins_on_empty_history() {
    let api = MockGameApi::new();
    let config = quiet_config().spin;

    let spun = SpinRotator::new(&api, &config).rotate_if_due(Utc::now()).await.unwrap();

    assert!(spun);
    assert_eq!(api.count_calls("rotate_spin"), 1);
}
