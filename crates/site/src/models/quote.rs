//! Quote wizard state stored in the session.
//!
//! The wizard walks a visitor from project details through photo upload,
//! matchmaking, quotation comparison, and consultation booking. The whole
//! journey is one state machine; `GET /start` renders whichever step the
//! session is on and the POST handlers advance it.

use chrono::{DateTime, Utc};
use ecobid_core::{
    BudgetRange, HomeType, MatchJobId, PhotoId, PortfolioItemId, Price, QuotationId, RoomType,
    StylePreference, VendorId,
};
use serde::{Deserialize, Serialize};

/// Contact and project details collected in step 1.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserDetails {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub state: String,
    pub city: String,
    pub budget: BudgetRange,
    pub home_type: HomeType,
    pub room_types: Vec<RoomType>,
    pub preferences: Vec<StylePreference>,
}

/// One uploaded room photo.
///
/// The bytes live in the photo store; the session keeps only the id, the
/// original filename, and the visitor's description.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HomePhoto {
    pub id: PhotoId,
    pub filename: String,
    pub description: String,
}

/// A portfolio entry shown on a quotation card.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PortfolioItem {
    pub id: PortfolioItemId,
    pub title: String,
    pub image_path: String,
    pub description: String,
}

/// A designer's quotation for the visitor's project.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Quotation {
    pub id: QuotationId,
    pub vendor_id: VendorId,
    pub vendor_name: String,
    pub vendor_rating: f32,
    pub price: Price,
    pub timeline: String,
    pub description: String,
    pub materials: Vec<String>,
    pub portfolio: Vec<PortfolioItem>,
    pub experience_years: u8,
    pub completed_projects: u32,
}

impl Quotation {
    /// Uppercase initials for the vendor avatar,
    /// e.g. "Green Spaces Design" renders as "GSD".
    #[must_use]
    pub fn vendor_initials(&self) -> String {
        self.vendor_name
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .collect()
    }
}

/// The visitor's preferred consultation slot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConsultationSlot {
    pub preferred_date: String,
    pub preferred_time: String,
    pub message: String,
}

/// Sub-steps after the visitor picks a designer.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "stage", rename_all = "snake_case")]
pub enum BookingStage {
    /// Reviewing the selection before sharing contact details.
    Confirm,
    /// Picking a consultation slot.
    Schedule,
    /// Consultation booked.
    Booked { slot: ConsultationSlot },
}

/// Where the visitor is in the quote wizard.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(tag = "step", rename_all = "snake_case")]
pub enum WizardState {
    /// Step 1: collecting contact and project details.
    #[default]
    Details,
    /// Step 2: uploading room photos.
    Photos {
        details: UserDetails,
        photos: Vec<HomePhoto>,
    },
    /// Matchmaking in progress.
    Waiting {
        details: UserDetails,
        photos: Vec<HomePhoto>,
        job: MatchJobId,
        started_at: DateTime<Utc>,
    },
    /// Quotations ready, sorted by price ascending.
    Quotations {
        details: UserDetails,
        photos: Vec<HomePhoto>,
        quotations: Vec<Quotation>,
    },
    /// A designer chosen; confirming and scheduling the consultation.
    Selection {
        details: UserDetails,
        photos: Vec<HomePhoto>,
        quotation: Quotation,
        stage: BookingStage,
    },
}

impl WizardState {
    /// Photo ids owned by this state, used to clean the photo store up
    /// when the wizard restarts.
    #[must_use]
    pub fn photo_ids(&self) -> Vec<PhotoId> {
        match self {
            Self::Details => Vec::new(),
            Self::Photos { photos, .. }
            | Self::Waiting { photos, .. }
            | Self::Quotations { photos, .. }
            | Self::Selection { photos, .. } => photos.iter().map(|p| p.id).collect(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn sample_details() -> UserDetails {
        UserDetails {
            name: "Aisha".to_string(),
            email: "aisha@example.com".to_string(),
            phone: "+91 98765 43210".to_string(),
            state: "Goa".to_string(),
            city: "Panaji".to_string(),
            budget: BudgetRange::Under15k,
            home_type: HomeType::Apartment,
            room_types: vec![RoomType::LivingRoom, RoomType::Balcony],
            preferences: vec![StylePreference::IndoorPlants],
        }
    }

    #[test]
    fn test_default_state_is_details() {
        assert!(matches!(WizardState::default(), WizardState::Details));
    }

    #[test]
    fn test_waiting_state_survives_session_serialization() {
        let state = WizardState::Waiting {
            details: sample_details(),
            photos: vec![HomePhoto {
                id: PhotoId::new(),
                filename: "living-room.jpg".to_string(),
                description: "More light please".to_string(),
            }],
            job: MatchJobId::new(),
            started_at: Utc::now(),
        };

        let json = serde_json::to_value(&state).unwrap();
        assert_eq!(json.get("step").unwrap(), "waiting");

        let restored: WizardState = serde_json::from_value(json).unwrap();
        match restored {
            WizardState::Waiting {
                details, photos, ..
            } => {
                assert_eq!(details.city, "Panaji");
                assert_eq!(photos.len(), 1);
            }
            other => panic!("expected waiting state, got {other:?}"),
        }
    }

    #[test]
    fn test_photo_ids_across_states() {
        assert!(WizardState::Details.photo_ids().is_empty());

        let photo = HomePhoto {
            id: PhotoId::new(),
            filename: "kitchen.png".to_string(),
            description: String::new(),
        };
        let state = WizardState::Photos {
            details: sample_details(),
            photos: vec![photo.clone()],
        };
        assert_eq!(state.photo_ids(), vec![photo.id]);
    }

    #[test]
    fn test_vendor_initials() {
        let quotation = Quotation {
            id: QuotationId::new("1"),
            vendor_id: VendorId::new("vendor1"),
            vendor_name: "Green Spaces Design".to_string(),
            vendor_rating: 4.8,
            price: Price::rupees(25_000),
            timeline: "2-3 weeks".to_string(),
            description: String::new(),
            materials: Vec::new(),
            portfolio: Vec::new(),
            experience_years: 5,
            completed_projects: 127,
        };

        assert_eq!(quotation.vendor_initials(), "GSD");
    }
}
