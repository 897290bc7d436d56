//! Ticker lookup: normalise free text and follow the residual-plot image
//! through loading to either shown or missing.

use super::config::StoryConfig;

/// Trim and uppercase; `None` when nothing is left.
pub fn normalize_ticker(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_uppercase())
    }
}

pub fn asset_file_name(ticker: &str) -> String {
    format!("{ticker}.png")
}

/// Image URL for a normalised ticker.
pub fn asset_path(config: &StoryConfig, ticker: &str) -> String {
    let dir = config.ticker_dir.trim_matches('/');
    config.asset(&format!("{dir}/{}", asset_file_name(ticker)))
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LookupState {
    #[default]
    Idle,
    Loading(String),
    Loaded(String),
    NotFound(String),
}

impl LookupState {
    pub fn ticker(&self) -> Option<&str> {
        match self {
            LookupState::Idle => None,
            LookupState::Loading(t) | LookupState::Loaded(t) | LookupState::NotFound(t) => Some(t),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TickerLookup {
    input: String,
    state: LookupState,
}

impl TickerLookup {
    /// Pre-fill the input with `ticker` and start loading it.
    pub fn starting_with(ticker: &str) -> Self {
        let mut lookup = Self {
            input: ticker.to_string(),
            state: LookupState::Idle,
        };
        lookup.search();
        lookup
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn state(&self) -> &LookupState {
        &self.state
    }

    pub fn set_input(&mut self, value: impl Into<String>) {
        self.input = value.into();
    }

    /// Start loading the normalised input. Empty input leaves everything as
    /// is. Returns the ticker now being loaded.
    pub fn search(&mut self) -> Option<String> {
        let ticker = normalize_ticker(&self.input)?;
        self.state = LookupState::Loading(ticker.clone());
        Some(ticker)
    }

    pub fn asset_loaded(&mut self, ticker: &str) -> bool {
        self.resolve(ticker, LookupState::Loaded)
    }

    pub fn asset_failed(&mut self, ticker: &str) -> bool {
        self.resolve(ticker, LookupState::NotFound)
    }

    // Late load/error events from a previously requested image are ignored.
    fn resolve(&mut self, ticker: &str, next: fn(String) -> LookupState) -> bool {
        match &self.state {
            LookupState::Loading(pending) if pending == ticker => {
                self.state = next(pending.clone());
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalises_case_and_whitespace() {
        assert_eq!(normalize_ticker("aapl"), Some("AAPL".to_string()));
        assert_eq!(normalize_ticker("  tsla \n"), Some("TSLA".to_string()));
        assert_eq!(normalize_ticker("   "), None);
        assert_eq!(normalize_ticker(""), None);
    }

    #[test]
    fn builds_asset_path_under_ticker_dir() {
        let config = StoryConfig::default();
        assert_eq!(asset_path(&config, "AAPL"), "./p4/plots/AAPL.png");
    }

    #[test]
    fn search_moves_to_loading() {
        let mut lookup = TickerLookup::default();
        assert_eq!(lookup.state(), &LookupState::Idle);
        lookup.set_input("msft ");
        assert_eq!(lookup.search(), Some("MSFT".to_string()));
        assert_eq!(lookup.state(), &LookupState::Loading("MSFT".into()));
    }

    #[test]
    fn empty_search_is_a_no_op() {
        let mut lookup = TickerLookup::starting_with("AAPL");
        lookup.asset_loaded("AAPL");
        lookup.set_input("  ");
        assert_eq!(lookup.search(), None);
        assert_eq!(lookup.state(), &LookupState::Loaded("AAPL".into()));
    }

    #[test]
    fn missing_asset_lands_in_not_found() {
        let mut lookup = TickerLookup::default();
        lookup.set_input("zzzz");
        lookup.search();
        assert!(lookup.asset_failed("ZZZZ"));
        assert_eq!(lookup.state(), &LookupState::NotFound("ZZZZ".into()));
        assert_eq!(lookup.state().ticker(), Some("ZZZZ"));
        assert_eq!(asset_file_name("ZZZZ"), "ZZZZ.png");
    }

    #[test]
    fn stale_events_are_ignored() {
        let mut lookup = TickerLookup::starting_with("AAPL");
        lookup.set_input("nvda");
        lookup.search();
        assert!(!lookup.asset_failed("AAPL"));
        assert_eq!(lookup.state(), &LookupState::Loading("NVDA".into()));
        assert!(lookup.asset_loaded("NVDA"));
        assert!(!lookup.asset_failed("NVDA"));
        assert_eq!(lookup.state(), &LookupState::Loaded("NVDA".into()));
    }
}
