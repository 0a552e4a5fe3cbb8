//! Card grid configuration: colours, thresholds, number formatting and labels.

/// Inline colours applied through `style="color:…"`.
/// The CSS framework supplies everything else.
pub struct AccentColors {
    /// Gains, non-negative change and max-threshold breaches
    pub positive: &'static str,
    /// Losses and min-threshold breaches
    pub negative: &'static str,
}

/// Threshold levels used to highlight the min/max lines.
/// These mirror the producer's take-profit / stop-loss limits.
pub struct Thresholds {
    /// `min_percent` at or below this is highlighted
    pub min_percent_limit: f64,
    /// `max_percent` at or above this is highlighted
    pub max_percent_limit: f64,
}

/// Fractional digits per rendered number
pub struct Digits {
    pub price: usize,
    pub percent_change: usize,
    pub min_max_percent: usize,
}

/// Class names and icons consumed from the styling framework (Semantic UI)
pub struct CardClasses {
    pub card: &'static str,
    pub content: &'static str,
    pub header: &'static str,
    pub meta: &'static str,
    pub description: &'static str,
    pub banner: &'static str,
    pub min_icon: &'static str,
    pub max_icon: &'static str,
}

/// Element ids the page must provide before the first event
pub struct ContainerIds {
    pub data_table: &'static str,
    pub last_update: &'static str,
}

/// The Master Board Configuration
pub struct BoardConfig {
    pub colors: AccentColors,
    pub thresholds: Thresholds,
    pub digits: Digits,
    pub classes: CardClasses,
    pub ids: ContainerIds,
    pub currency_marker: &'static str,
    pub ago_suffix: &'static str,
}

pub const BOARD: BoardConfig = BoardConfig {
    colors: AccentColors {
        positive: "#0dd94e",
        negative: "red",
    },
    thresholds: Thresholds {
        min_percent_limit: -0.05,
        max_percent_limit: 0.10,
    },
    digits: Digits {
        price: 5,
        percent_change: 2,
        min_max_percent: 4,
    },
    classes: CardClasses {
        card: "ui centered card",
        content: "content",
        header: "header",
        meta: "meta",
        description: "description",
        banner: "extra content",
        min_icon: "times icon",
        max_icon: "star icon",
    },
    ids: ContainerIds {
        data_table: "data_table",
        last_update: "last_update",
    },
    currency_marker: "$",
    ago_suffix: "ago",
};
