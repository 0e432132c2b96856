use serde::{Deserialize, Serialize};

/// Third-party data sources reachable through the backend proxy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IntegrationType {
    Notion,
    Airtable,
    Hubspot,
}

/// Backend route for one integration: `/integrations/{segment}/{action}`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntegrationRoute {
    pub segment: &'static str,
    pub action: &'static str,
}

impl IntegrationRoute {
    pub fn path(&self) -> String {
        format!("/integrations/{}/{}", self.segment, self.action)
    }
}

impl IntegrationType {
    /// Route table. Hubspot exposes its item listing under its own action name.
    pub fn route(&self) -> IntegrationRoute {
        match self {
            IntegrationType::Notion => IntegrationRoute {
                segment: "notion",
                action: "load",
            },
            IntegrationType::Airtable => IntegrationRoute {
                segment: "airtable",
                action: "load",
            },
            IntegrationType::Hubspot => IntegrationRoute {
                segment: "hubspot",
                action: "get_hubspot_items",
            },
        }
    }

    /// Human readable name, also the serialized form
    pub fn display_name(&self) -> &'static str {
        match self {
            IntegrationType::Notion => "Notion",
            IntegrationType::Airtable => "Airtable",
            IntegrationType::Hubspot => "Hubspot",
        }
    }

    /// Vendor's own spelling, used in user-facing messages
    pub fn vendor_name(&self) -> &'static str {
        match self {
            IntegrationType::Hubspot => "HubSpot",
            other => other.display_name(),
        }
    }

    pub fn all() -> Vec<IntegrationType> {
        vec![
            IntegrationType::Notion,
            IntegrationType::Airtable,
            IntegrationType::Hubspot,
        ]
    }

    /// Parse from the display name
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "Notion" => Some(IntegrationType::Notion),
            "Airtable" => Some(IntegrationType::Airtable),
            "Hubspot" => Some(IntegrationType::Hubspot),
            _ => None,
        }
    }
}

impl std::fmt::Display for IntegrationType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}
