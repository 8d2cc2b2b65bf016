//! Defines the properties for the `ScrapbookComponent`.

use common::config::ScrapbookConfig;
use yew::prelude::*;

/// Properties for the `ScrapbookComponent`.
#[derive(Properties, PartialEq, Clone)]
pub struct ScrapbookProps {
    /// Storage keys, autosave delay and music settings. Read once when the
    /// component is created; the defaults are the deployed page's values.
    #[prop_or_default]
    pub config: ScrapbookConfig,
}
