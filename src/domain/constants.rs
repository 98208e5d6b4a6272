pub const DEFAULT_BASE_URL: &str = "https://api.data.gov.in/resource";

/// "Current daily price of various commodities from various markets (Mandi)".
pub const DEFAULT_RESOURCE_ID: &str = "9ef84268-d588-465a-a308-a864a43d0070";

/// Sample key published on data.gov.in for anonymous, rate-limited access.
pub const PUBLIC_SAMPLE_API_KEY: &str = "579b464db66ec23bdd0000016c8c15c073f94fc1608add75486d243f";

pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

pub const PLAIN_LIMIT: u32 = 10;
pub const PLAIN_PREVIEW: usize = 3;

pub const FILTER_LIMIT: u32 = 5;
pub const FILTER_PREVIEW: usize = 2;
pub const DEFAULT_COMMODITY: &str = "Wheat";

pub const NOT_AVAILABLE: &str = "N/A";

/// Record fields shown in the detailed report, paired with their labels.
pub const RECORD_FIELDS: [(&str, &str); 10] = [
    ("commodity", "Commodity"),
    ("variety", "Variety"),
    ("market", "Market"),
    ("state", "State"),
    ("district", "District"),
    ("min_price", "Min Price"),
    ("max_price", "Max Price"),
    ("modal_price", "Modal Price"),
    ("date", "Date"),
    ("arrival_quantity", "Arrival Quantity"),
];
