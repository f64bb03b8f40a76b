//! CRM integration catalogue: the Alto API categories, their actions, and
//! provider badge detection.

use serde::{Deserialize, Serialize};

/// A group of related CRM API actions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IntegrationCategory {
    Leads,
    Clients,
    Contacts,
    PropertyManagement,
    SalesProgression,
    LettingsProgression,
    Offers,
    Appraisals,
    Appointments,
    FileNotes,
    Inventory,
    Listing,
    Media,
}

impl IntegrationCategory {
    /// All categories in inspector display order.
    pub const ALL: [IntegrationCategory; 13] = [
        IntegrationCategory::Leads,
        IntegrationCategory::Clients,
        IntegrationCategory::Contacts,
        IntegrationCategory::PropertyManagement,
        IntegrationCategory::SalesProgression,
        IntegrationCategory::LettingsProgression,
        IntegrationCategory::Offers,
        IntegrationCategory::Appraisals,
        IntegrationCategory::Appointments,
        IntegrationCategory::FileNotes,
        IntegrationCategory::Inventory,
        IntegrationCategory::Listing,
        IntegrationCategory::Media,
    ];

    pub fn name(self) -> &'static str {
        match self {
            IntegrationCategory::Leads => "Leads",
            IntegrationCategory::Clients => "Clients",
            IntegrationCategory::Contacts => "Contacts",
            IntegrationCategory::PropertyManagement => "PropertyManagement",
            IntegrationCategory::SalesProgression => "SalesProgression",
            IntegrationCategory::LettingsProgression => "LettingsProgression",
            IntegrationCategory::Offers => "Offers",
            IntegrationCategory::Appraisals => "Appraisals",
            IntegrationCategory::Appointments => "Appointments",
            IntegrationCategory::FileNotes => "FileNotes",
            IntegrationCategory::Inventory => "Inventory",
            IntegrationCategory::Listing => "Listing",
            IntegrationCategory::Media => "Media",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.name() == name)
    }

    /// Actions available in this category. Never empty.
    pub fn actions(self) -> &'static [&'static str] {
        match self {
            IntegrationCategory::Leads => {
                &["Get Leads", "Create Lead", "Update Lead", "Assign Lead"]
            }
            IntegrationCategory::Clients => {
                &["Get Client", "Create Client", "Update Client", "Archive Client"]
            }
            IntegrationCategory::Contacts => &[
                "Search Contacts",
                "Get Contact",
                "Create Contact",
                "Update Contact",
            ],
            IntegrationCategory::PropertyManagement => &[
                "Get Landlords",
                "Get Tenancies",
                "Create Charge",
                "Create WorkOrder",
                "Get Suppliers",
            ],
            IntegrationCategory::SalesProgression => {
                &["Get Sales Chain", "Update Milestone", "Complete Sale"]
            }
            IntegrationCategory::LettingsProgression => &[
                "Get Progression",
                "Update Status",
                "Reference Check Update",
                "Generate Tenancy Agreement",
            ],
            IntegrationCategory::Offers => &[
                "Get Offers",
                "Submit Offer",
                "Accept Offer",
                "Reject Offer",
                "Withdraw Offer",
            ],
            IntegrationCategory::Appraisals => &[
                "Book Appraisal",
                "Get Appraisals",
                "Update Appraisal",
                "Cancel Appraisal",
            ],
            IntegrationCategory::Appointments => &[
                "Book Viewing",
                "Get Diary",
                "Cancel Appointment",
                "Reschedule",
            ],
            IntegrationCategory::FileNotes => {
                &["Create File Note", "Get Notes", "Upload Document"]
            }
            IntegrationCategory::Inventory => &["Get Inventory", "Update Inventory Item"],
            IntegrationCategory::Listing => {
                &["Get Listing", "Update Listing Status", "Price Change"]
            }
            IntegrationCategory::Media => &["Upload Photo", "Get Floorplan", "Delete Media"],
        }
    }

    /// The action a node falls back to when its category changes.
    pub fn default_action(self) -> &'static str {
        self.actions()[0]
    }

    pub fn has_action(self, action: &str) -> bool {
        self.actions().contains(&action)
    }

    /// First category in catalogue order that lists `action`.
    pub fn for_action(action: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.has_action(action))
    }
}

impl std::fmt::Display for IntegrationCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A recognised third-party service shown as a badge on a node card.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProviderBadge {
    pub key: &'static str,
    pub name: &'static str,
    pub group: ProviderGroup,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProviderGroup {
    Crm,
    Portal,
    Channel,
}

/// Searched in order; the first key found wins.
pub const PROVIDER_BADGES: [ProviderBadge; 11] = [
    ProviderBadge {
        key: "alto",
        name: "Alto",
        group: ProviderGroup::Crm,
    },
    ProviderBadge {
        key: "apex27",
        name: "Apex27",
        group: ProviderGroup::Crm,
    },
    ProviderBadge {
        key: "reapit",
        name: "Reapit",
        group: ProviderGroup::Crm,
    },
    ProviderBadge {
        key: "zoopla",
        name: "Zoopla",
        group: ProviderGroup::Portal,
    },
    ProviderBadge {
        key: "rightmove",
        name: "Rightmove",
        group: ProviderGroup::Portal,
    },
    ProviderBadge {
        key: "onthemarket",
        name: "OnTheMarket",
        group: ProviderGroup::Portal,
    },
    ProviderBadge {
        key: "whatsapp",
        name: "WhatsApp",
        group: ProviderGroup::Channel,
    },
    ProviderBadge {
        key: "email",
        name: "Email",
        group: ProviderGroup::Channel,
    },
    ProviderBadge {
        key: "sms",
        name: "SMS",
        group: ProviderGroup::Channel,
    },
    ProviderBadge {
        key: "slack",
        name: "Slack",
        group: ProviderGroup::Channel,
    },
    ProviderBadge {
        key: "gmail",
        name: "Gmail",
        group: ProviderGroup::Channel,
    },
];

/// Case-insensitive substring search of `haystack` for a known provider.
pub fn detect_provider(haystack: &str) -> Option<&'static ProviderBadge> {
    let lower = haystack.to_lowercase();
    PROVIDER_BADGES.iter().find(|b| lower.contains(b.key))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_category_round_trips_by_name() {
        for category in IntegrationCategory::ALL {
            assert_eq!(IntegrationCategory::from_name(category.name()), Some(category));
        }
        assert_eq!(IntegrationCategory::from_name("leads"), None);
    }

    #[test]
    fn default_action_is_first_listed() {
        assert_eq!(IntegrationCategory::Listing.default_action(), "Get Listing");
        assert_eq!(IntegrationCategory::Media.default_action(), "Upload Photo");
        assert!(IntegrationCategory::Offers.has_action("Withdraw Offer"));
        assert!(!IntegrationCategory::Offers.has_action("Get Listing"));
    }

    #[test]
    fn category_is_found_from_action() {
        assert_eq!(
            IntegrationCategory::for_action("Get Listing"),
            Some(IntegrationCategory::Listing)
        );
        assert_eq!(
            IntegrationCategory::for_action("Book Viewing"),
            Some(IntegrationCategory::Appointments)
        );
        assert_eq!(IntegrationCategory::for_action("Publish Listing"), None);
    }

    #[test]
    fn provider_detection_is_case_insensitive_and_ordered() {
        assert_eq!(detect_provider("Sync to ALTO").map(|b| b.name), Some("Alto"));
        assert_eq!(detect_provider("send via Gmail").map(|b| b.name), Some("Gmail"));
        assert_eq!(
            detect_provider("Rightmove lead into Alto").map(|b| b.name),
            Some("Alto")
        );
        assert!(detect_provider("Notify Agent").is_none());
    }
}
