//! End-to-end runs through sessions, the gateway and the dashboard.

use intake::surveys::{
    ProviderMulti, ProviderSingle, RealEstateMulti, RealEstateSingle, RealEstateSurvey,
    ServiceProviderSurvey, UserMulti, UserSingle, UserSurvey,
};
use intake::{
    Answers, Dashboard, Gateway, Group, MemoryStore, QuestionKind, RecordingNotifier, Route,
    Session, StoreError, SurveyKind, SurveyStore,
};
use serde_json::json;

#[test]
fn user_survey_round_trip() -> anyhow::Result<()> {
    let store = MemoryStore::new();
    let notifier = RecordingNotifier::new();
    let gateway = Gateway::new(&store, &notifier);

    let mut session = Session::<UserSurvey>::new();
    session.set(UserSingle::PrimaryReason, "Looking to buy a property");
    session.set(UserSingle::SearchFrequency, "Daily");
    session.toggle(UserMulti::ImportantFilters, "Location", true);
    session.toggle(UserMulti::ImportantFilters, "Price range", true);
    session.toggle(UserMulti::ImportantFilters, "Location", false);
    session.set(UserSingle::StruggledWithProviders, "Yes");
    session.toggle(UserMulti::MainChallenges, "Poor communication", true);
    session.set(UserSingle::CurrentPlatforms, "Jiji.ng");

    let mut route = None;
    while route.is_none() {
        route = gateway.advance(&mut session)?;
    }
    assert_eq!(route, Some(Route::Complete));

    let rows = store.rows(SurveyKind::User.collection());
    assert_eq!(rows.len(), 1);
    let row = &rows[0];
    assert_eq!(row["primary_reason"], "Looking to buy a property");
    assert_eq!(row["important_filters"], json!(["Price range"]));
    assert_eq!(row["main_challenges"], json!(["Poor communication"]));
    assert_eq!(row["current_platforms"], "Jiji.ng");
    assert_eq!(row["useful_features"], json!([]));
    assert_eq!(row["mobile_importance"], "");

    assert_eq!(notifier.notifications().len(), 1);
    assert!(!notifier.notifications()[0].is_error());
    Ok(())
}

#[test]
fn hidden_challenges_are_stored_empty() -> anyhow::Result<()> {
    let store = MemoryStore::new();
    let notifier = RecordingNotifier::new();
    let gateway = Gateway::new(&store, &notifier);

    let mut session = Session::<UserSurvey>::new();
    session.set(UserSingle::StruggledWithProviders, "Yes");
    session.toggle(UserMulti::MainChallenges, "Unclear pricing", true);
    session.set(UserSingle::StruggledWithProviders, "No");
    gateway.submit(&mut session)?;

    let rows = store.rows("user_surveys");
    assert_eq!(rows[0]["struggled_with_providers"], "No");
    assert_eq!(rows[0]["main_challenges"], json!([]));
    Ok(())
}

#[test]
fn provider_and_real_estate_rows_land_in_their_collections() -> anyhow::Result<()> {
    let store = MemoryStore::new();
    let notifier = RecordingNotifier::new();
    let gateway = Gateway::new(&store, &notifier);

    let mut provider = Session::<ServiceProviderSurvey>::new();
    provider.toggle(ProviderMulti::ServiceType, "Plumber", true);
    provider.set(ProviderSingle::PaymentWillingness, "Yes, for subscription");
    gateway.submit(&mut provider)?;

    let mut agent = Session::<RealEstateSurvey>::new();
    agent.set(RealEstateSingle::PrimaryRole, "Property Developer");
    agent.toggle(RealEstateMulti::ListingMethods, "Our own company website", true);
    gateway.submit(&mut agent)?;

    let providers = store.rows("service_provider_surveys");
    assert_eq!(providers.len(), 1);
    assert_eq!(providers[0]["service_type"], json!(["Plumber"]));
    assert_eq!(providers[0]["preferred_payments"], json!([]));

    let agents = store.rows("real_estate_surveys");
    assert_eq!(agents.len(), 1);
    assert_eq!(agents[0]["primary_role"], "Property Developer");
    assert_eq!(store.len("user_surveys"), 0);
    Ok(())
}

#[test]
fn every_question_field_round_trips_through_answers() {
    let mut session = Session::<RealEstateSurvey>::new();
    let questions: Vec<_> = session.definition().questions().cloned().collect();
    for question in &questions {
        match question.kind() {
            QuestionKind::SingleSelect { field, options } => {
                session.set(*field, options[0]);
                assert_eq!(session.answers().single(*field), options[0]);
            }
            QuestionKind::MultiSelect { field, options } => {
                session.toggle(*field, options[0], true);
                assert!(session.answers().multi(*field).contains(options[0]));
            }
            QuestionKind::FreeText { field, .. } => {
                session.set(*field, "free text");
                assert_eq!(session.answers().single(*field), "free text");
            }
        }
    }
}

#[test]
fn dashboard_summarizes_stored_rows() -> anyhow::Result<()> {
    let store = MemoryStore::new();
    store.seed(
        "user_surveys",
        json!({
            "id": "a",
            "created_at": "2025-02-01T10:00:00Z",
            "primary_reason": "Other",
        }),
    );
    store.seed(
        "user_surveys",
        json!({
            "id": "b",
            "created_at": "2025-03-15T10:00:00Z",
            "primary_reason": "Just browsing/researching",
            "search_frequency": "Daily",
        }),
    );
    store.seed(
        "user_surveys",
        json!({ "id": "c", "created_at": "2025-01-20T10:00:00Z", "primary_reason": null }),
    );
    store.seed(
        "service_provider_surveys",
        json!({
            "id": "p",
            "created_at": "2025-04-09T08:00:00Z",
            "service_type": ["Electrician", "Plumber", "Mover"],
        }),
    );

    let loader = Dashboard::fetch(&store);
    assert!(!loader.is_loading());
    assert!(loader.errors().is_empty());
    let dashboard = loader.dashboard().expect("all fetches resolved");

    let counts = dashboard.counts();
    assert_eq!((counts.users, counts.service_providers, counts.real_estate), (3, 1, 0));
    assert_eq!(counts.total(), 4);

    // newest first: b, a, c
    assert_eq!(
        dashboard.primary_reasons(),
        vec![
            Group { value: Some("Just browsing/researching".into()), count: 1 },
            Group { value: Some("Other".into()), count: 1 },
            Group { value: None, count: 1 },
        ]
    );

    let users = dashboard.user_table();
    assert_eq!(users[0].date, "3/15/2025");
    assert_eq!(users[0].search_frequency.as_deref(), Some("Daily"));
    assert_eq!(users[2].date, "1/20/2025");

    let providers = dashboard.provider_table();
    assert_eq!(providers[0].date, "4/9/2025");
    assert_eq!(providers[0].service_types.to_string(), "Electrician, Plumber +1 more");
    Ok(())
}

/// Refuses every select on one collection.
struct Outage<'a> {
    inner: &'a MemoryStore,
    down: &'static str,
}

impl SurveyStore for Outage<'_> {
    fn insert(&self, collection: &str, row: serde_json::Value) -> Result<(), StoreError> {
        self.inner.insert(collection, row)
    }

    fn select(&self, collection: &str) -> Result<Vec<serde_json::Value>, StoreError> {
        if collection == self.down {
            return Err(StoreError::backend(anyhow::anyhow!("{collection} is down")));
        }
        self.inner.select(collection)
    }
}

#[test]
fn dashboard_survives_a_failed_fetch() {
    let store = MemoryStore::new();
    store.seed(
        "real_estate_surveys",
        json!({ "id": "r", "created_at": "2025-05-05T00:00:00Z", "primary_role": "Other" }),
    );
    store.seed(
        "user_surveys",
        json!({ "id": "u", "created_at": "2025-05-05T00:00:00Z" }),
    );
    let flaky = Outage {
        inner: &store,
        down: "user_surveys",
    };

    let loader = Dashboard::fetch(&flaky);
    assert!(!loader.is_loading());
    assert_eq!(loader.errors().len(), 1);
    assert_eq!(loader.errors()[0].0, SurveyKind::User);

    let dashboard = loader.dashboard().expect("failed fetch still resolves");
    assert_eq!(dashboard.counts().users, 0);
    assert_eq!(dashboard.counts().real_estate, 1);
    assert_eq!(dashboard.real_estate_table()[0].date, "5/5/2025");
}

#[test]
fn submitted_rows_show_up_on_the_dashboard() -> anyhow::Result<()> {
    let store = MemoryStore::new();
    let notifier = RecordingNotifier::new();
    let gateway = Gateway::new(&store, &notifier);

    for reason in ["Other", "Other", "Looking to sell a property"] {
        let mut session = Session::<UserSurvey>::new();
        session.set(UserSingle::PrimaryReason, reason);
        gateway.submit(&mut session)?;
    }

    let dashboard = Dashboard::fetch(&store).dashboard().expect("resolved");
    let mut groups = dashboard.primary_reasons();
    groups.sort_by_key(|group| group.count);
    assert_eq!(groups.len(), 2);
    assert_eq!(groups[1], Group { value: Some("Other".into()), count: 2 });
    Ok(())
}

#[test]
fn malformed_rows_are_skipped_and_good_rows_survive() {
    let store = MemoryStore::new();
    store.seed(
        "user_surveys",
        json!({ "id": "a", "created_at": "2025-02-01T10:00:00Z", "primary_reason": "Other" }),
    );
    store.seed("user_surveys", json!({ "id": "x", "created_at": "yesterday" }));
    store.seed(
        "user_surveys",
        json!({
            "id": "b",
            "created_at": "2025-02-03T10:00:00.123456",
            "primary_reason": "Other",
        }),
    );

    let loader = Dashboard::fetch(&store);
    assert_eq!(loader.errors().len(), 1);
    let (kind, err) = &loader.errors()[0];
    assert_eq!(*kind, SurveyKind::User);
    assert!(matches!(err, StoreError::Decode { id: Some(id), .. } if id == "x"));

    let dashboard = loader.dashboard().expect("resolved");
    assert_eq!(dashboard.counts().users, 2);
    assert_eq!(
        dashboard.primary_reasons(),
        vec![Group { value: Some("Other".into()), count: 2 }]
    );
}
