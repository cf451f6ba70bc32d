//! Full-page dashboard view model

use chrono::NaiveDate;
use serde::Serialize;

use crate::catalog::CATALOG;
use crate::dashboard::DashboardState;
use crate::render::{render_card, ResultCard};

/// Product name shown in the sidebar header
pub const PRODUCT_NAME: &str = "Falcon AI";

/// Number of "Last market updates" cards
pub const MARKET_UPDATE_SLOTS: usize = 3;

/// Text shown in each market update card
pub const MARKET_PLACEHOLDER: &str = "Market placeholder";

/// Sidebar checkbox row
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CatalogEntry {
    pub id: &'static str,
    pub label: &'static str,
    pub checked: bool,
}

/// Everything on the dashboard page
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DashboardView {
    pub title: &'static str,
    /// Catalog in declared order with checkbox state
    pub catalog: Vec<CatalogEntry>,
    pub market_updates: Vec<&'static str>,
    /// Date under "Your daily insights"
    #[serde(with = "iso_date")]
    pub date: NaiveDate,
    pub insight_text: String,
    pub question: String,
    pub result: Option<ResultCard>,
}

impl DashboardView {
    pub fn build(state: &DashboardState, today: NaiveDate) -> Self {
        let catalog = CATALOG
            .iter()
            .map(|c| CatalogEntry {
                id: c.id,
                label: c.label,
                checked: state.selections.contains(c.id),
            })
            .collect();

        Self {
            title: PRODUCT_NAME,
            catalog,
            market_updates: vec![MARKET_PLACEHOLDER; MARKET_UPDATE_SLOTS],
            date: today,
            insight_text: state.insight_text.clone(),
            question: state.question.clone(),
            result: render_card(state.result.as_ref()),
        }
    }

    /// Build with today's local date
    pub fn build_now(state: &DashboardState) -> Self {
        Self::build(state, chrono::Local::now().date_naive())
    }
}

mod iso_date {
    use chrono::NaiveDate;
    use serde::Serializer;

    pub fn serialize<S: Serializer>(date: &NaiveDate, s: S) -> Result<S::Ok, S::Error> {
        s.collect_str(&date.format("%Y-%m-%d"))
    }
}
