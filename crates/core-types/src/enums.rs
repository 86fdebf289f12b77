use serde::{Deserialize, Serialize};

/// Normalizes a free-form label the way the intake forms do: lowercase,
/// trimmed, inner spaces collapsed to underscores.
///
/// `" Real Estate "` becomes `"real_estate"`. Used both for industry lookup
/// in the AI-threat risk matrix and for parsing CLI arguments.
pub fn normalize_label(raw: &str) -> String {
    raw.trim().to_lowercase().replace(' ', "_")
}

/// The business verticals the intake form offers.
///
/// Unknown labels decode to `Other`, which carries no loss-audit surcharge
/// and the default AI-threat base risk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Industry {
    Retail,
    Healthcare,
    Finance,
    Manufacturing,
    Logistics,
    Education,
    RealEstate,
    ItServices,
    #[serde(rename = "e-commerce")]
    ECommerce,
    Hospitality,
    #[serde(other)]
    Other,
}

impl Industry {
    /// Parses a free-form label, falling back to `Other`.
    pub fn from_label(raw: &str) -> Self {
        match normalize_label(raw).as_str() {
            "retail" => Industry::Retail,
            "healthcare" => Industry::Healthcare,
            "finance" => Industry::Finance,
            "manufacturing" => Industry::Manufacturing,
            "logistics" => Industry::Logistics,
            "education" => Industry::Education,
            "real_estate" => Industry::RealEstate,
            "it_services" => Industry::ItServices,
            "e-commerce" | "ecommerce" | "e_commerce" => Industry::ECommerce,
            "hospitality" => Industry::Hospitality,
            _ => Industry::Other,
        }
    }

    /// The canonical key used in the risk matrix and persisted rows.
    pub fn as_key(&self) -> &'static str {
        match self {
            Industry::Retail => "retail",
            Industry::Healthcare => "healthcare",
            Industry::Finance => "finance",
            Industry::Manufacturing => "manufacturing",
            Industry::Logistics => "logistics",
            Industry::Education => "education",
            Industry::RealEstate => "real_estate",
            Industry::ItServices => "it_services",
            Industry::ECommerce => "e-commerce",
            Industry::Hospitality => "hospitality",
            Industry::Other => "other",
        }
    }
}

/// When the business stops answering inquiries for the day.
///
/// Earlier closing implies a larger share of inquiry volume arrives after
/// hours. Unknown labels decode to `EightPm`, the intake form's default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClosingTime {
    #[serde(rename = "6pm")]
    SixPm,
    #[serde(rename = "10pm")]
    TenPm,
    #[serde(rename = "8pm")]
    #[serde(other)]
    EightPm,
}

impl ClosingTime {
    /// Parses the form tier label, falling back to `EightPm`.
    pub fn from_label(raw: &str) -> Self {
        match normalize_label(raw).as_str() {
            "6pm" => ClosingTime::SixPm,
            "10pm" => ClosingTime::TenPm,
            _ => ClosingTime::EightPm,
        }
    }

    /// Closing hour on a 24h clock (6pm -> 18).
    pub fn hour(&self) -> i64 {
        match self {
            ClosingTime::SixPm => 18,
            ClosingTime::EightPm => 20,
            ClosingTime::TenPm => 22,
        }
    }

    pub fn as_label(&self) -> &'static str {
        match self {
            ClosingTime::SixPm => "6pm",
            ClosingTime::EightPm => "8pm",
            ClosingTime::TenPm => "10pm",
        }
    }
}

/// How quickly the business answers an after-hours inquiry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResponseSpeed {
    #[serde(rename = "instant")]
    Instant,
    #[serde(rename = "<30min")]
    UnderThirtyMin,
    #[serde(rename = "1-4hrs")]
    OneToFourHours,
    #[serde(rename = "nextday")]
    NextDay,
    #[serde(rename = "none")]
    NoFollowUp,
    /// Anything the catalogue does not recognize; converts at a nominal rate.
    #[serde(rename = "unknown")]
    #[serde(other)]
    Unknown,
}

impl ResponseSpeed {
    pub fn from_label(raw: &str) -> Self {
        match normalize_label(raw).as_str() {
            "instant" => ResponseSpeed::Instant,
            "<30min" => ResponseSpeed::UnderThirtyMin,
            "1-4hrs" => ResponseSpeed::OneToFourHours,
            "nextday" => ResponseSpeed::NextDay,
            "none" => ResponseSpeed::NoFollowUp,
            _ => ResponseSpeed::Unknown,
        }
    }

    pub fn as_label(&self) -> &'static str {
        match self {
            ResponseSpeed::Instant => "instant",
            ResponseSpeed::UnderThirtyMin => "<30min",
            ResponseSpeed::OneToFourHours => "1-4hrs",
            ResponseSpeed::NextDay => "nextday",
            ResponseSpeed::NoFollowUp => "none",
            ResponseSpeed::Unknown => "unknown",
        }
    }
}

/// AI-threat classification bands, in ascending severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ThreatLevel {
    Safe,
    Savdhan,
    Khatra,
}

impl ThreatLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            ThreatLevel::Safe => "SAFE",
            ThreatLevel::Savdhan => "SAVDHAN",
            ThreatLevel::Khatra => "KHATRA",
        }
    }
}

/// Digital-visibility bands, in ascending visibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum VisibilityStatus {
    Invisible,
    Ghost,
    Okay,
    Visible,
    Dominant,
}

impl VisibilityStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            VisibilityStatus::Invisible => "INVISIBLE",
            VisibilityStatus::Ghost => "GHOST",
            VisibilityStatus::Okay => "OKAY",
            VisibilityStatus::Visible => "VISIBLE",
            VisibilityStatus::Dominant => "DOMINANT",
        }
    }
}

/// The fixed catalogue of digital-presence signals the visibility scan asks
/// about. Catalogue order is display order for the gap report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VisibilitySignal {
    Website,
    #[serde(alias = "gmb")]
    GoogleListing,
    Social,
    Seo,
    Ads,
    Crm,
    WhatsappAutomation,
}

impl VisibilitySignal {
    /// All signals in catalogue order.
    pub const ALL: [VisibilitySignal; 7] = [
        VisibilitySignal::Website,
        VisibilitySignal::GoogleListing,
        VisibilitySignal::Social,
        VisibilitySignal::Seo,
        VisibilitySignal::Ads,
        VisibilitySignal::Crm,
        VisibilitySignal::WhatsappAutomation,
    ];

    /// Human-readable label shown in the gap report.
    pub fn label(&self) -> &'static str {
        match self {
            VisibilitySignal::Website => "Professional Website",
            VisibilitySignal::GoogleListing => "Google Business Listing Optimized",
            VisibilitySignal::Social => "Active Social Media (Daily/Weekly)",
            VisibilitySignal::Seo => "Basic SEO (Appears on Page 1)",
            VisibilitySignal::Ads => "Paid Advertising Active",
            VisibilitySignal::Crm => "CRM / Auto-responder",
            VisibilitySignal::WhatsappAutomation => "WhatsApp Automation",
        }
    }

    /// Parses a signal id, accepting the legacy `gmb` spelling.
    pub fn from_label(raw: &str) -> Option<Self> {
        match normalize_label(raw).as_str() {
            "website" => Some(VisibilitySignal::Website),
            "google_listing" | "gmb" => Some(VisibilitySignal::GoogleListing),
            "social" => Some(VisibilitySignal::Social),
            "seo" => Some(VisibilitySignal::Seo),
            "ads" => Some(VisibilitySignal::Ads),
            "crm" => Some(VisibilitySignal::Crm),
            "whatsapp_automation" | "whatsapp" => Some(VisibilitySignal::WhatsappAutomation),
            _ => None,
        }
    }

    pub fn as_key(&self) -> &'static str {
        match self {
            VisibilitySignal::Website => "website",
            VisibilitySignal::GoogleListing => "google_listing",
            VisibilitySignal::Social => "social",
            VisibilitySignal::Seo => "seo",
            VisibilitySignal::Ads => "ads",
            VisibilitySignal::Crm => "crm",
            VisibilitySignal::WhatsappAutomation => "whatsapp_automation",
        }
    }
}

/// Product categories offered by the export calculator.
///
/// The category is recorded with the result but does not influence the
/// revenue multiplier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExportCategory {
    Spices,
    Textiles,
    Jewelry,
    Handicrafts,
    Software,
    Manufacturing,
    Agriculture,
    #[serde(other)]
    Other,
}

impl ExportCategory {
    pub fn from_label(raw: &str) -> Self {
        match normalize_label(raw).as_str() {
            "spices" => ExportCategory::Spices,
            "textiles" => ExportCategory::Textiles,
            "jewelry" => ExportCategory::Jewelry,
            "handicrafts" => ExportCategory::Handicrafts,
            "software" => ExportCategory::Software,
            "manufacturing" => ExportCategory::Manufacturing,
            "agriculture" => ExportCategory::Agriculture,
            _ => ExportCategory::Other,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ExportCategory::Spices => "Spices & Herbs",
            ExportCategory::Textiles => "Cotton / Textiles",
            ExportCategory::Jewelry => "Jewelry / Gems",
            ExportCategory::Handicrafts => "Handicrafts",
            ExportCategory::Software => "Software/IT Services",
            ExportCategory::Manufacturing => "Manufacturing & Parts",
            ExportCategory::Agriculture => "Agricultural Produce",
            ExportCategory::Other => "Other/Miscellaneous",
        }
    }

    pub fn as_key(&self) -> &'static str {
        match self {
            ExportCategory::Spices => "spices",
            ExportCategory::Textiles => "textiles",
            ExportCategory::Jewelry => "jewelry",
            ExportCategory::Handicrafts => "handicrafts",
            ExportCategory::Software => "software",
            ExportCategory::Manufacturing => "manufacturing",
            ExportCategory::Agriculture => "agriculture",
            ExportCategory::Other => "other",
        }
    }
}

/// Destination markets the export calculator knows a price multiplier for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExportDestination {
    #[serde(rename = "USA")]
    Usa,
    #[serde(rename = "UK")]
    Uk,
    #[serde(rename = "Australia")]
    Australia,
    #[serde(rename = "Germany")]
    Germany,
    #[serde(rename = "Japan")]
    Japan,
    #[serde(rename = "UAE")]
    Uae,
    #[serde(rename = "Singapore")]
    Singapore,
    /// Any other market; priced at the conservative default multiplier.
    #[serde(rename = "Other")]
    #[serde(other)]
    Other,
}

impl ExportDestination {
    pub fn from_label(raw: &str) -> Self {
        match normalize_label(raw).as_str() {
            "usa" | "united_states" => ExportDestination::Usa,
            "uk" | "united_kingdom" => ExportDestination::Uk,
            "australia" => ExportDestination::Australia,
            "germany" => ExportDestination::Germany,
            "japan" => ExportDestination::Japan,
            "uae" | "united_arab_emirates" => ExportDestination::Uae,
            "singapore" => ExportDestination::Singapore,
            _ => ExportDestination::Other,
        }
    }

    pub fn as_label(&self) -> &'static str {
        match self {
            ExportDestination::Usa => "USA",
            ExportDestination::Uk => "UK",
            ExportDestination::Australia => "Australia",
            ExportDestination::Germany => "Germany",
            ExportDestination::Japan => "Japan",
            ExportDestination::Uae => "UAE",
            ExportDestination::Singapore => "Singapore",
            ExportDestination::Other => "Other",
        }
    }
}
