//! Aggregates over every stored survey, for charts and tables.

use std::fmt;
use std::panic;
use std::thread;

use intake_surveys::{RealEstateSurveyRow, ServiceProviderSurveyRow, UserSurveyRow};
use intake_types::{Decoded, Stored, StoreError, SurveyKind, SurveyStore};
use serde::de::DeserializeOwned;
use tracing::warn;

/// Fetch and decode every row of one survey kind, newest first.
///
/// Fails only when the select itself fails. Rows that do not decode are
/// returned in [`Decoded::rejected`].
pub fn fetch_rows<T: DeserializeOwned>(
    store: &dyn SurveyStore,
    kind: SurveyKind,
) -> Result<Decoded<T>, StoreError> {
    let collection = kind.collection();
    Ok(Stored::decode_all(collection, store.select(collection)?))
}

/// Number of stored surveys per kind.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SurveyCounts {
    pub users: usize,
    pub service_providers: usize,
    pub real_estate: usize,
}

impl SurveyCounts {
    pub fn get(&self, kind: SurveyKind) -> usize {
        match kind {
            SurveyKind::User => self.users,
            SurveyKind::ServiceProvider => self.service_providers,
            SurveyKind::RealEstate => self.real_estate,
        }
    }

    pub fn total(&self) -> usize {
        self.users + self.service_providers + self.real_estate
    }

    /// One labelled bar per kind, in the fixed order users, providers, real estate.
    pub fn bars(&self) -> [(&'static str, usize); 3] {
        SurveyKind::ALL.map(|kind| (kind.chart_label(), self.get(kind)))
    }
}

/// How many records share one literal value of the grouped field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
    /// `None` when the field was absent or null.
    pub value: Option<String>,
    pub count: usize,
}

/// Count records by the literal value of one field.
///
/// Groups come out in the order their value first appears. Absent values form
/// their own group, and an empty string is a different group from absent.
pub fn group_by<T>(records: &[Stored<T>], field: impl Fn(&T) -> Option<&str>) -> Vec<Group> {
    let mut groups: Vec<Group> = Vec::new();
    for record in records {
        let value = field(&record.row);
        match groups.iter_mut().find(|g| g.value.as_deref() == value) {
            Some(group) => group.count += 1,
            None => groups.push(Group {
                value: value.map(str::to_string),
                count: 1,
            }),
        }
    }
    groups
}

/// The first two values of a multi-value cell and how many were left out.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Preview {
    pub shown: Vec<String>,
    pub overflow: usize,
}

impl Preview {
    pub const LIMIT: usize = 2;

    pub fn of(values: Option<&[String]>) -> Self {
        let values = values.unwrap_or_default();
        Self {
            shown: values.iter().take(Self::LIMIT).cloned().collect(),
            overflow: values.len().saturating_sub(Self::LIMIT),
        }
    }

    /// `+N more` when values were left out.
    pub fn overflow_label(&self) -> Option<String> {
        (self.overflow > 0).then(|| format!("+{} more", self.overflow))
    }
}

impl fmt::Display for Preview {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.shown.join(", "))?;
        if let Some(label) = self.overflow_label() {
            if !self.shown.is_empty() {
                f.write_str(" ")?;
            }
            f.write_str(&label)?;
        }
        Ok(())
    }
}

fn format_date<T>(record: &Stored<T>) -> String {
    record.created_at.format("%-m/%-d/%Y").to_string()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserTableRow {
    pub date: String,
    pub primary_reason: Option<String>,
    pub search_frequency: Option<String>,
    pub platform_useful: Option<String>,
    pub mobile_importance: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderTableRow {
    pub date: String,
    pub service_types: Preview,
    pub platform_interest: Option<String>,
    pub verification_importance: Option<String>,
    pub payment_willingness: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RealEstateTableRow {
    pub date: String,
    pub primary_role: Option<String>,
    pub platform_interest: Option<String>,
    pub subscription_interest: Option<String>,
    pub seo_importance: Option<String>,
}

/// Every stored survey of every kind, each list newest first.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dashboard {
    pub users: Vec<Stored<UserSurveyRow>>,
    pub providers: Vec<Stored<ServiceProviderSurveyRow>>,
    pub real_estate: Vec<Stored<RealEstateSurveyRow>>,
}

impl Dashboard {
    /// Run the three fetches side by side and collect them in a loader.
    pub fn fetch(store: &dyn SurveyStore) -> DashboardLoader {
        let mut loader = DashboardLoader::new();
        thread::scope(|scope| {
            let users = scope.spawn(|| fetch_rows::<UserSurveyRow>(store, SurveyKind::User));
            let providers = scope
                .spawn(|| fetch_rows::<ServiceProviderSurveyRow>(store, SurveyKind::ServiceProvider));
            let real_estate =
                scope.spawn(|| fetch_rows::<RealEstateSurveyRow>(store, SurveyKind::RealEstate));

            loader.resolve_users(join(users));
            loader.resolve_providers(join(providers));
            loader.resolve_real_estate(join(real_estate));
        });
        loader
    }

    pub fn counts(&self) -> SurveyCounts {
        SurveyCounts {
            users: self.users.len(),
            service_providers: self.providers.len(),
            real_estate: self.real_estate.len(),
        }
    }

    /// Users grouped by their primary reason, for the pie summary.
    pub fn primary_reasons(&self) -> Vec<Group> {
        group_by(&self.users, |row| row.primary_reason.as_deref())
    }

    pub fn user_table(&self) -> Vec<UserTableRow> {
        self.users
            .iter()
            .map(|record| UserTableRow {
                date: format_date(record),
                primary_reason: record.row.primary_reason.clone(),
                search_frequency: record.row.search_frequency.clone(),
                platform_useful: record.row.single_platform_useful.clone(),
                mobile_importance: record.row.mobile_importance.clone(),
            })
            .collect()
    }

    pub fn provider_table(&self) -> Vec<ProviderTableRow> {
        self.providers
            .iter()
            .map(|record| ProviderTableRow {
                date: format_date(record),
                service_types: Preview::of(record.row.service_type.as_deref()),
                platform_interest: record.row.platform_interest.clone(),
                verification_importance: record.row.verification_importance.clone(),
                payment_willingness: record.row.payment_willingness.clone(),
            })
            .collect()
    }

    pub fn real_estate_table(&self) -> Vec<RealEstateTableRow> {
        self.real_estate
            .iter()
            .map(|record| RealEstateTableRow {
                date: format_date(record),
                primary_role: record.row.primary_role.clone(),
                platform_interest: record.row.platform_interest.clone(),
                subscription_interest: record.row.subscription_interest.clone(),
                seo_importance: record.row.seo_importance.clone(),
            })
            .collect()
    }
}

fn join<T>(handle: thread::ScopedJoinHandle<'_, T>) -> T {
    handle.join().unwrap_or_else(|payload| panic::resume_unwind(payload))
}

/// Collects the three independent fetches in whatever order they finish.
///
/// Stays loading until all three have resolved. A failed fetch resolves its
/// slot with no rows, and a row that did not decode is left out; either
/// error is kept for the caller to report.
#[derive(Debug, Default)]
pub struct DashboardLoader {
    users: Option<Vec<Stored<UserSurveyRow>>>,
    providers: Option<Vec<Stored<ServiceProviderSurveyRow>>>,
    real_estate: Option<Vec<Stored<RealEstateSurveyRow>>>,
    errors: Vec<(SurveyKind, StoreError)>,
}

impl DashboardLoader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn resolve_users(&mut self, result: Result<Decoded<UserSurveyRow>, StoreError>) {
        self.users = Some(settle(&mut self.errors, SurveyKind::User, result));
    }

    pub fn resolve_providers(
        &mut self,
        result: Result<Decoded<ServiceProviderSurveyRow>, StoreError>,
    ) {
        self.providers = Some(settle(&mut self.errors, SurveyKind::ServiceProvider, result));
    }

    pub fn resolve_real_estate(
        &mut self,
        result: Result<Decoded<RealEstateSurveyRow>, StoreError>,
    ) {
        self.real_estate = Some(settle(&mut self.errors, SurveyKind::RealEstate, result));
    }

    pub fn is_loading(&self) -> bool {
        self.users.is_none() || self.providers.is_none() || self.real_estate.is_none()
    }

    /// Fetch failures and undecodable rows seen so far.
    pub fn errors(&self) -> &[(SurveyKind, StoreError)] {
        &self.errors
    }

    /// The finished dashboard, or `None` while any fetch is outstanding.
    pub fn dashboard(&self) -> Option<Dashboard> {
        Some(Dashboard {
            users: self.users.clone()?,
            providers: self.providers.clone()?,
            real_estate: self.real_estate.clone()?,
        })
    }
}

fn settle<T>(
    errors: &mut Vec<(SurveyKind, StoreError)>,
    kind: SurveyKind,
    result: Result<Decoded<T>, StoreError>,
) -> Vec<Stored<T>> {
    match result {
        Ok(decoded) => {
            for err in decoded.rejected {
                warn!(%kind, error = %err, "skipping survey response");
                errors.push((kind, err));
            }
            decoded.rows
        }
        Err(err) => {
            warn!(%kind, error = %err, "could not fetch survey responses");
            errors.push((kind, err));
            Vec::new()
        }
    }
}
