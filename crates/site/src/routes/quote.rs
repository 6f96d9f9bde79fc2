//! Quote wizard route handlers.
//!
//! The wizard is a session-held state machine (see [`WizardState`]). One
//! dispatcher, `GET /start`, renders whichever step the session is on; the
//! POST endpoints validate, advance the state, and redirect back to
//! `/start`. A POST arriving out of order redirects without side effects,
//! so stale tabs and replayed forms cannot skip steps.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::{Multipart, State},
    response::{IntoResponse, Redirect, Response},
};
use chrono::Utc;
use ecobid_core::{BudgetRange, HomeType, INDIAN_STATES, PhotoId, RoomType, StylePreference};
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use crate::bids;
use crate::error::{AppError, Result, add_breadcrumb};
use crate::filters;
use crate::forms::FormFields;
use crate::models::quote::{
    BookingStage, ConsultationSlot, HomePhoto, Quotation, UserDetails, WizardState,
};
use crate::models::session_keys;
use crate::services::photos::StoredPhoto;
use crate::state::AppState;

/// Per-photo upload cap.
const MAX_PHOTO_BYTES: usize = 10 * 1024 * 1024;

/// Body cap for the multipart upload route; leaves room for a handful of
/// photos at the per-file cap in one request.
pub const MAX_UPLOAD_BODY_BYTES: usize = 64 * 1024 * 1024;

/// How long past the expected matching delay the dispatcher waits for a
/// lost job result before synthesizing the quotations itself.
const RESULT_GRACE: std::time::Duration = std::time::Duration::from_secs(60);

// =============================================================================
// Session Helpers
// =============================================================================

/// Get the wizard state from the session, defaulting to the first step.
async fn get_wizard(session: &Session) -> WizardState {
    session
        .get::<WizardState>(session_keys::QUOTE_WIZARD)
        .await
        .ok()
        .flatten()
        .unwrap_or_default()
}

/// Persist the wizard state to the session.
async fn set_wizard(
    session: &Session,
    state: &WizardState,
) -> std::result::Result<(), tower_sessions::session::Error> {
    session.insert(session_keys::QUOTE_WIZARD, state).await
}

// =============================================================================
// View Types
// =============================================================================

/// One option in a select or checkbox group. The form value doubles as
/// the label.
#[derive(Clone)]
pub struct PickOption {
    pub value: &'static str,
    pub selected: bool,
}

/// Details form values re-rendered after a validation failure.
pub struct DetailsFormView {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub city: String,
    pub states: Vec<PickOption>,
    pub budgets: Vec<PickOption>,
    pub home_types: Vec<PickOption>,
    pub rooms: Vec<PickOption>,
    pub preferences: Vec<PickOption>,
}

impl DetailsFormView {
    fn empty() -> Self {
        Self::from_fields(&FormFields::default())
    }

    /// Rebuild the form view from a submission, preserving entered values
    /// and checked boxes.
    fn from_fields(fields: &FormFields) -> Self {
        let owned = |key: &str| fields.value(key).unwrap_or_default().trim().to_string();
        let selected_state = fields.value("state").unwrap_or_default();
        let selected_budget = fields.value("budget").unwrap_or_default();
        let selected_home = fields.value("home_type").unwrap_or_default();
        let checked_rooms: Vec<&str> = fields.values("rooms").collect();
        let checked_preferences: Vec<&str> = fields.values("preferences").collect();

        Self {
            name: owned("name"),
            email: owned("email"),
            phone: owned("phone"),
            city: owned("city"),
            states: INDIAN_STATES
                .iter()
                .map(|state| PickOption {
                    value: state,
                    selected: *state == selected_state,
                })
                .collect(),
            budgets: BudgetRange::ALL
                .into_iter()
                .map(|budget| PickOption {
                    value: budget.label(),
                    selected: budget.label() == selected_budget,
                })
                .collect(),
            home_types: HomeType::ALL
                .into_iter()
                .map(|home| PickOption {
                    value: home.label(),
                    selected: home.label() == selected_home,
                })
                .collect(),
            rooms: RoomType::ALL
                .into_iter()
                .map(|room| PickOption {
                    value: room.label(),
                    selected: checked_rooms.contains(&room.label()),
                })
                .collect(),
            preferences: StylePreference::ALL
                .into_iter()
                .map(|preference| PickOption {
                    value: preference.label(),
                    selected: checked_preferences.contains(&preference.label()),
                })
                .collect(),
        }
    }
}

/// One inline message per invalid details field.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct DetailsErrors {
    pub name: Option<&'static str>,
    pub email: Option<&'static str>,
    pub phone: Option<&'static str>,
    pub state: Option<&'static str>,
    pub city: Option<&'static str>,
    pub budget: Option<&'static str>,
    pub home_type: Option<&'static str>,
    pub rooms: Option<&'static str>,
}

impl DetailsErrors {
    /// Whether any field failed validation.
    #[must_use]
    pub const fn any(&self) -> bool {
        self.name.is_some()
            || self.email.is_some()
            || self.phone.is_some()
            || self.state.is_some()
            || self.city.is_some()
            || self.budget.is_some()
            || self.home_type.is_some()
            || self.rooms.is_some()
    }
}

/// Presence-check a details submission and build the stored details.
///
/// Validation is presence-only: any non-blank name, email, and phone pass.
/// State, budget, home type, and rooms must come from their fixed option
/// sets; preferences are optional.
fn parse_details(fields: &FormFields) -> std::result::Result<UserDetails, DetailsErrors> {
    let mut errors = DetailsErrors::default();

    let name = fields.non_empty("name");
    if name.is_none() {
        errors.name = Some("Name is required");
    }
    let email = fields.non_empty("email");
    if email.is_none() {
        errors.email = Some("Email is required");
    }
    let phone = fields.non_empty("phone");
    if phone.is_none() {
        errors.phone = Some("Phone is required");
    }
    let state = fields
        .non_empty("state")
        .filter(|value| INDIAN_STATES.contains(value));
    if state.is_none() {
        errors.state = Some("State is required");
    }
    let city = fields.non_empty("city");
    if city.is_none() {
        errors.city = Some("City is required");
    }
    let budget = fields
        .non_empty("budget")
        .and_then(|value| value.parse::<BudgetRange>().ok());
    if budget.is_none() {
        errors.budget = Some("Budget range is required");
    }
    let home_type = fields
        .non_empty("home_type")
        .and_then(|value| value.parse::<HomeType>().ok());
    if home_type.is_none() {
        errors.home_type = Some("Home type is required");
    }
    let room_types: Vec<RoomType> = fields
        .values("rooms")
        .filter_map(|value| value.parse().ok())
        .collect();
    if room_types.is_empty() {
        errors.rooms = Some("Select at least one room");
    }
    let preferences: Vec<StylePreference> = fields
        .values("preferences")
        .filter_map(|value| value.parse().ok())
        .collect();

    if let (Some(name), Some(email), Some(phone), Some(state), Some(city), Some(budget), Some(home_type), false) =
        (name, email, phone, state, city, budget, home_type, room_types.is_empty())
    {
        Ok(UserDetails {
            name: name.to_string(),
            email: email.to_string(),
            phone: phone.to_string(),
            state: state.to_string(),
            city: city.to_string(),
            budget,
            home_type,
            room_types,
            preferences,
        })
    } else {
        Err(errors)
    }
}

/// One uploaded photo on the photo step.
#[derive(Clone)]
pub struct PhotoView {
    pub id: String,
    pub url: String,
    pub filename: String,
    pub description: String,
}

impl From<&HomePhoto> for PhotoView {
    fn from(photo: &HomePhoto) -> Self {
        Self {
            id: photo.id.to_string(),
            url: format!("/uploads/{}", photo.id),
            filename: photo.filename.clone(),
            description: photo.description.clone(),
        }
    }
}

/// The project summary banner shown from the photo step onwards.
pub struct ProjectSummaryView {
    pub client: String,
    /// "City, State".
    pub location: String,
    pub budget: &'static str,
    pub home_type: &'static str,
    /// Room labels joined with commas.
    pub rooms: String,
    pub room_count: usize,
    pub photo_count: usize,
    /// Preference labels joined, or a no-preference line.
    pub preferences: String,
}

impl ProjectSummaryView {
    fn new(details: &UserDetails, photo_count: usize) -> Self {
        let preferences = if details.preferences.is_empty() {
            "No specific preferences".to_string()
        } else {
            details
                .preferences
                .iter()
                .map(|p| p.label())
                .collect::<Vec<_>>()
                .join(", ")
        };

        Self {
            client: details.name.clone(),
            location: format!("{}, {}", details.city, details.state),
            budget: details.budget.label(),
            home_type: details.home_type.label(),
            rooms: details
                .room_types
                .iter()
                .map(|r| r.label())
                .collect::<Vec<_>>()
                .join(", "),
            room_count: details.room_types.len(),
            photo_count,
            preferences,
        }
    }
}

/// Portfolio entry on a quotation card.
#[derive(Clone)]
pub struct PortfolioItemView {
    pub title: String,
    pub image_path: String,
    pub description: String,
}

/// One designer quotation card.
#[derive(Clone)]
pub struct QuotationView {
    pub id: String,
    pub vendor_name: String,
    pub vendor_initials: String,
    pub rating: String,
    pub price: String,
    pub timeline: String,
    pub description: String,
    pub materials: Vec<String>,
    pub portfolio: Vec<PortfolioItemView>,
    pub experience_years: u8,
    pub completed_projects: u32,
    /// The cheapest bid carries the "Best Value" badge.
    pub best_value: bool,
}

fn quotation_view(quotation: &Quotation, best_value: bool) -> QuotationView {
    QuotationView {
        id: quotation.id.as_str().to_string(),
        vendor_name: quotation.vendor_name.clone(),
        vendor_initials: quotation.vendor_initials(),
        rating: format!("{:.1}", quotation.vendor_rating),
        price: quotation.price.to_string(),
        timeline: quotation.timeline.clone(),
        description: quotation.description.clone(),
        materials: quotation.materials.clone(),
        portfolio: quotation
            .portfolio
            .iter()
            .map(|item| PortfolioItemView {
                title: item.title.clone(),
                image_path: item.image_path.clone(),
                description: item.description.clone(),
            })
            .collect(),
        experience_years: quotation.experience_years,
        completed_projects: quotation.completed_projects,
        best_value,
    }
}

/// Quotation cards in list order; the first (cheapest) is flagged best value.
fn quotation_views(quotations: &[Quotation]) -> Vec<QuotationView> {
    quotations
        .iter()
        .enumerate()
        .map(|(index, quotation)| quotation_view(quotation, index == 0))
        .collect()
}

// =============================================================================
// Forms and Templates
// =============================================================================

/// Remove photo form data.
#[derive(Debug, Deserialize)]
pub struct RemovePhotoForm {
    pub photo_id: String,
}

/// Designer selection form data.
#[derive(Debug, Deserialize)]
pub struct SelectForm {
    pub quotation_id: String,
}

/// Consultation scheduling form data.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScheduleForm {
    #[serde(default)]
    pub preferred_date: String,
    #[serde(default)]
    pub preferred_time: String,
    #[serde(default)]
    pub message: String,
}

/// Step 1: contact and project details.
#[derive(Template, WebTemplate)]
#[template(path = "quote/details.html")]
pub struct DetailsTemplate {
    pub form: DetailsFormView,
    pub errors: DetailsErrors,
}

/// Step 2: room photo upload.
#[derive(Template, WebTemplate)]
#[template(path = "quote/photos.html")]
pub struct PhotosTemplate {
    pub photos: Vec<PhotoView>,
    pub summary: ProjectSummaryView,
    pub error: Option<&'static str>,
}

/// Matching in progress; the page refreshes itself every second.
#[derive(Template, WebTemplate)]
#[template(path = "quote/waiting.html")]
pub struct WaitingTemplate;

/// Quotation comparison page.
#[derive(Template, WebTemplate)]
#[template(path = "quote/quotations.html")]
pub struct QuotationsTemplate {
    pub quotations: Vec<QuotationView>,
    pub summary: ProjectSummaryView,
}

/// Confirm the chosen designer before scheduling.
#[derive(Template, WebTemplate)]
#[template(path = "quote/confirm.html")]
pub struct ConfirmTemplate {
    pub quotation: QuotationView,
    pub summary: ProjectSummaryView,
}

/// Pick a consultation slot.
#[derive(Template, WebTemplate)]
#[template(path = "quote/schedule.html")]
pub struct ScheduleTemplate {
    pub vendor_name: String,
    /// Earliest selectable date, today in `YYYY-MM-DD`.
    pub min_date: String,
    pub form: ScheduleForm,
    pub error: Option<&'static str>,
}

/// Booking confirmed; the journey is complete.
#[derive(Template, WebTemplate)]
#[template(path = "quote/booked.html")]
pub struct BookedTemplate {
    pub vendor_name: String,
    pub preferred_date: String,
    pub preferred_time: String,
}

fn today() -> String {
    Utc::now().date_naive().format("%Y-%m-%d").to_string()
}

/// Render whichever step the wizard is on.
fn render_step(wizard: &WizardState) -> Response {
    match wizard {
        WizardState::Details => DetailsTemplate {
            form: DetailsFormView::empty(),
            errors: DetailsErrors::default(),
        }
        .into_response(),
        WizardState::Photos { details, photos } => PhotosTemplate {
            photos: photos.iter().map(PhotoView::from).collect(),
            summary: ProjectSummaryView::new(details, photos.len()),
            error: None,
        }
        .into_response(),
        WizardState::Waiting { .. } => WaitingTemplate.into_response(),
        WizardState::Quotations {
            details,
            photos,
            quotations,
        } => QuotationsTemplate {
            quotations: quotation_views(quotations),
            summary: ProjectSummaryView::new(details, photos.len()),
        }
        .into_response(),
        WizardState::Selection {
            details,
            photos,
            quotation,
            stage,
        } => match stage {
            BookingStage::Confirm => ConfirmTemplate {
                quotation: quotation_view(quotation, false),
                summary: ProjectSummaryView::new(details, photos.len()),
            }
            .into_response(),
            BookingStage::Schedule => ScheduleTemplate {
                vendor_name: quotation.vendor_name.clone(),
                min_date: today(),
                form: ScheduleForm::default(),
                error: None,
            }
            .into_response(),
            BookingStage::Booked { slot } => BookedTemplate {
                vendor_name: quotation.vendor_name.clone(),
                preferred_date: slot.preferred_date.clone(),
                preferred_time: slot.preferred_time.clone(),
            }
            .into_response(),
        },
    }
}

/// Move a waiting wizard forward if its match job has finished.
///
/// A finished job's result can be lost to cache eviction; once the delay
/// plus a grace period has passed, the bids are synthesized directly so
/// the visitor is never stranded on the waiting page.
async fn advance_waiting(
    state: &AppState,
    session: &Session,
    wizard: WizardState,
) -> Result<WizardState> {
    let WizardState::Waiting {
        details,
        photos,
        job,
        started_at,
    } = wizard
    else {
        return Ok(wizard);
    };

    let quotations = if let Some(found) = state.matchmaker().poll(job).await {
        found.as_ref().clone()
    } else {
        let elapsed = (Utc::now() - started_at).to_std().unwrap_or_default();
        if elapsed < state.config().matching_delay + RESULT_GRACE {
            return Ok(WizardState::Waiting {
                details,
                photos,
                job,
                started_at,
            });
        }
        tracing::warn!(job_id = %job, "Match result missing after grace period");
        bids::generate()
    };

    let next = WizardState::Quotations {
        details,
        photos,
        quotations,
    };
    set_wizard(session, &next).await?;
    Ok(next)
}

// =============================================================================
// Handlers
// =============================================================================

/// Display the current wizard step.
#[instrument(skip_all)]
pub async fn show(State(state): State<AppState>, session: Session) -> Result<Response> {
    let wizard = get_wizard(&session).await;
    let wizard = advance_waiting(&state, &session, wizard).await?;
    Ok(render_step(&wizard))
}

/// Submit contact and project details (step 1).
#[instrument(skip_all)]
pub async fn submit_details(session: Session, fields: FormFields) -> Result<Response> {
    if !matches!(get_wizard(&session).await, WizardState::Details) {
        return Ok(Redirect::to("/start").into_response());
    }

    let details = match parse_details(&fields) {
        Ok(details) => details,
        Err(errors) => {
            return Ok(DetailsTemplate {
                form: DetailsFormView::from_fields(&fields),
                errors,
            }
            .into_response());
        }
    };

    add_breadcrumb(
        "quote",
        "Project details submitted",
        Some(&[("city", &details.city), ("budget", details.budget.label())]),
    );

    let next = WizardState::Photos {
        details,
        photos: Vec::new(),
    };
    set_wizard(&session, &next).await?;
    Ok(Redirect::to("/start").into_response())
}

/// Upload room photos (step 2, multipart).
///
/// Non-image files are ignored; files above the per-photo cap are skipped
/// with a warning. Stored bytes go to the photo store and the wizard keeps
/// only the ids.
#[instrument(skip_all)]
pub async fn upload_photos(
    State(state): State<AppState>,
    session: Session,
    mut multipart: Multipart,
) -> Result<Response> {
    let WizardState::Photos {
        details,
        mut photos,
    } = get_wizard(&session).await
    else {
        return Ok(Redirect::to("/start").into_response());
    };

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(format!("Malformed upload: {e}")))?
    {
        if field.name() != Some("photos") {
            continue;
        }
        let filename = field.file_name().unwrap_or("photo").to_string();
        let content_type = field.content_type().unwrap_or_default().to_string();
        if !content_type.starts_with("image/") {
            tracing::warn!(filename, content_type, "Skipping non-image upload");
            continue;
        }

        let bytes = field
            .bytes()
            .await
            .map_err(|e| AppError::BadRequest(format!("Malformed upload: {e}")))?;
        // A file input with nothing chosen still submits one empty part
        if bytes.is_empty() {
            continue;
        }
        if bytes.len() > MAX_PHOTO_BYTES {
            tracing::warn!(filename, size = bytes.len(), "Skipping photo above the size cap");
            continue;
        }

        let id = state
            .photos()
            .insert(StoredPhoto {
                bytes,
                content_type,
                filename: filename.clone(),
            })
            .await;
        photos.push(HomePhoto {
            id,
            filename,
            description: String::new(),
        });
    }

    let next = WizardState::Photos { details, photos };
    set_wizard(&session, &next).await?;
    Ok(Redirect::to("/start").into_response())
}

/// Remove an uploaded photo before submission.
#[instrument(skip(state, session))]
pub async fn remove_photo(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<RemovePhotoForm>,
) -> Result<Response> {
    let WizardState::Photos {
        details,
        mut photos,
    } = get_wizard(&session).await
    else {
        return Ok(Redirect::to("/start").into_response());
    };

    if let Ok(id) = form.photo_id.parse::<uuid::Uuid>() {
        let id = PhotoId::from(id);
        photos.retain(|photo| photo.id != id);
        state.photos().remove(id).await;
    }

    let next = WizardState::Photos { details, photos };
    set_wizard(&session, &next).await?;
    Ok(Redirect::to("/start").into_response())
}

/// Finish the photo step: attach descriptions, submit the match job, and
/// move to the waiting page.
#[instrument(skip_all)]
pub async fn finish_photos(
    State(state): State<AppState>,
    session: Session,
    fields: FormFields,
) -> Result<Response> {
    let WizardState::Photos {
        details,
        mut photos,
    } = get_wizard(&session).await
    else {
        return Ok(Redirect::to("/start").into_response());
    };

    if photos.is_empty() {
        return Ok(PhotosTemplate {
            photos: Vec::new(),
            summary: ProjectSummaryView::new(&details, 0),
            error: Some("Upload at least one photo to continue"),
        }
        .into_response());
    }

    for photo in &mut photos {
        if let Some(description) = fields.non_empty(&format!("description_{}", photo.id)) {
            photo.description = description.to_string();
        }
    }

    let job = state.matchmaker().submit(&details);
    add_breadcrumb(
        "quote",
        "Match job submitted",
        Some(&[("photos", &photos.len().to_string())]),
    );

    let next = WizardState::Waiting {
        details,
        photos,
        job,
        started_at: Utc::now(),
    };
    set_wizard(&session, &next).await?;
    Ok(Redirect::to("/start").into_response())
}

/// Choose a designer from the quotation list.
#[instrument(skip(session))]
pub async fn select_designer(session: Session, Form(form): Form<SelectForm>) -> Result<Response> {
    let WizardState::Quotations {
        details,
        photos,
        quotations,
    } = get_wizard(&session).await
    else {
        return Ok(Redirect::to("/start").into_response());
    };

    let Some(quotation) = quotations
        .iter()
        .find(|q| q.id.as_str() == form.quotation_id)
        .cloned()
    else {
        return Err(AppError::BadRequest(format!(
            "unknown quotation {}",
            form.quotation_id
        )));
    };

    add_breadcrumb(
        "quote",
        "Designer selected",
        Some(&[("vendor", &quotation.vendor_name)]),
    );

    let next = WizardState::Selection {
        details,
        photos,
        quotation,
        stage: BookingStage::Confirm,
    };
    set_wizard(&session, &next).await?;
    Ok(Redirect::to("/start").into_response())
}

/// Confirm the selected designer and move on to scheduling.
#[instrument(skip(session))]
pub async fn confirm_selection(session: Session) -> Result<Response> {
    let WizardState::Selection {
        details,
        photos,
        quotation,
        stage: BookingStage::Confirm,
    } = get_wizard(&session).await
    else {
        return Ok(Redirect::to("/start").into_response());
    };

    let next = WizardState::Selection {
        details,
        photos,
        quotation,
        stage: BookingStage::Schedule,
    };
    set_wizard(&session, &next).await?;
    Ok(Redirect::to("/start").into_response())
}

/// Book the consultation slot.
///
/// There is no real booking backend; the payload is logged and the wizard
/// moves straight to its terminal state.
#[instrument(skip(session, form))]
pub async fn schedule(session: Session, Form(form): Form<ScheduleForm>) -> Result<Response> {
    let WizardState::Selection {
        details,
        photos,
        quotation,
        stage: BookingStage::Schedule,
    } = get_wizard(&session).await
    else {
        return Ok(Redirect::to("/start").into_response());
    };

    if form.preferred_date.trim().is_empty() {
        return Ok(ScheduleTemplate {
            vendor_name: quotation.vendor_name.clone(),
            min_date: today(),
            form,
            error: Some("Preferred date is required"),
        }
        .into_response());
    }

    let slot = ConsultationSlot {
        preferred_date: form.preferred_date.trim().to_string(),
        preferred_time: form.preferred_time.trim().to_string(),
        message: form.message.trim().to_string(),
    };

    tracing::info!(
        vendor_id = %quotation.vendor_id,
        vendor = %quotation.vendor_name,
        client = %details.name,
        email = %details.email,
        preferred_date = %slot.preferred_date,
        preferred_time = %slot.preferred_time,
        photos = photos.len(),
        "Consultation booked"
    );
    add_breadcrumb(
        "quote",
        "Consultation booked",
        Some(&[("vendor", &quotation.vendor_name)]),
    );

    let next = WizardState::Selection {
        details,
        photos,
        quotation,
        stage: BookingStage::Booked { slot },
    };
    set_wizard(&session, &next).await?;
    Ok(Redirect::to("/start").into_response())
}

/// Back from scheduling to the confirmation step.
#[instrument(skip(session))]
pub async fn schedule_back(session: Session) -> Result<Response> {
    let WizardState::Selection {
        details,
        photos,
        quotation,
        stage: BookingStage::Schedule,
    } = get_wizard(&session).await
    else {
        return Ok(Redirect::to("/start").into_response());
    };

    let next = WizardState::Selection {
        details,
        photos,
        quotation,
        stage: BookingStage::Confirm,
    };
    set_wizard(&session, &next).await?;
    Ok(Redirect::to("/start").into_response())
}

/// Abandon the wizard from any step.
///
/// Cancels a pending match job, evicts stored photos, and clears the
/// session entry so the next visit starts fresh.
#[instrument(skip_all)]
pub async fn restart(State(state): State<AppState>, session: Session) -> Result<Redirect> {
    let wizard = get_wizard(&session).await;

    if let WizardState::Waiting { job, .. } = &wizard {
        state.matchmaker().cancel(*job).await;
    }
    for id in wizard.photo_ids() {
        state.photos().remove(id).await;
    }
    session
        .remove::<WizardState>(session_keys::QUOTE_WIZARD)
        .await?;

    add_breadcrumb("quote", "Wizard restarted", None);
    Ok(Redirect::to("/start"))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_details_accepts_complete_form() {
        let fields = FormFields::parse(
            "name=Aisha&email=aisha%40example.com&phone=%2B91+98765+43210\
             &state=Goa&city=Panaji\
             &budget=Under+%E2%82%B915%2C000&home_type=Apartment\
             &rooms=Living+Room&rooms=Balcony&preferences=Indoor+Plants",
        );

        let details = parse_details(&fields).unwrap();
        assert_eq!(details.name, "Aisha");
        assert_eq!(details.state, "Goa");
        assert_eq!(details.budget, BudgetRange::Under15k);
        assert_eq!(details.home_type, HomeType::Apartment);
        assert_eq!(
            details.room_types,
            vec![RoomType::LivingRoom, RoomType::Balcony]
        );
        assert_eq!(details.preferences, vec![StylePreference::IndoorPlants]);
    }

    #[test]
    fn test_parse_details_empty_form_flags_every_field() {
        let errors = parse_details(&FormFields::default()).unwrap_err();

        assert_eq!(errors.name, Some("Name is required"));
        assert_eq!(errors.email, Some("Email is required"));
        assert_eq!(errors.phone, Some("Phone is required"));
        assert_eq!(errors.state, Some("State is required"));
        assert_eq!(errors.city, Some("City is required"));
        assert_eq!(errors.budget, Some("Budget range is required"));
        assert_eq!(errors.home_type, Some("Home type is required"));
        assert_eq!(errors.rooms, Some("Select at least one room"));
    }

    #[test]
    fn test_parse_details_rejects_state_outside_list() {
        let fields = FormFields::parse(
            "name=Aisha&email=a%40b.c&phone=1&state=Atlantis&city=Panaji\
             &budget=Under+%E2%82%B915%2C000&home_type=Apartment&rooms=Kitchen",
        );

        let errors = parse_details(&fields).unwrap_err();
        assert_eq!(errors.state, Some("State is required"));
        assert!(errors.name.is_none());
    }

    #[test]
    fn test_parse_details_preferences_are_optional() {
        let fields = FormFields::parse(
            "name=Aisha&email=a%40b.c&phone=1&state=Goa&city=Panaji\
             &budget=Under+%E2%82%B915%2C000&home_type=Apartment&rooms=Kitchen",
        );

        let details = parse_details(&fields).unwrap();
        assert!(details.preferences.is_empty());
    }

    #[test]
    fn test_details_form_view_preserves_entries() {
        let fields = FormFields::parse(
            "name=Aisha&state=Goa&rooms=Kitchen&rooms=Balcony&preferences=Natural+Light",
        );
        let view = DetailsFormView::from_fields(&fields);

        assert_eq!(view.name, "Aisha");
        let selected_states: Vec<&str> = view
            .states
            .iter()
            .filter(|o| o.selected)
            .map(|o| o.value)
            .collect();
        assert_eq!(selected_states, vec!["Goa"]);

        let checked_rooms: Vec<&str> = view
            .rooms
            .iter()
            .filter(|o| o.selected)
            .map(|o| o.value)
            .collect();
        assert_eq!(checked_rooms, vec!["Kitchen", "Balcony"]);
    }

    #[test]
    fn test_quotation_views_flag_cheapest_as_best_value() {
        let views = quotation_views(&bids::generate());
        let flagged: Vec<&str> = views
            .iter()
            .filter(|v| v.best_value)
            .map(|v| v.vendor_name.as_str())
            .collect();
        assert_eq!(flagged, vec!["EcoHome Experts"]);
    }

    #[test]
    fn test_project_summary_joins_labels() {
        let details = UserDetails {
            name: "Aisha".to_string(),
            email: "aisha@example.com".to_string(),
            phone: "+91 98765 43210".to_string(),
            state: "Goa".to_string(),
            city: "Panaji".to_string(),
            budget: BudgetRange::Between15kAnd30k,
            home_type: HomeType::Villa,
            room_types: vec![RoomType::Kitchen, RoomType::Balcony],
            preferences: Vec::new(),
        };

        let summary = ProjectSummaryView::new(&details, 3);
        assert_eq!(summary.location, "Panaji, Goa");
        assert_eq!(summary.rooms, "Kitchen, Balcony");
        assert_eq!(summary.room_count, 2);
        assert_eq!(summary.photo_count, 3);
        assert_eq!(summary.preferences, "No specific preferences");
    }

    #[test]
    fn test_today_is_iso_date() {
        let date = today();
        assert_eq!(date.len(), 10);
        assert!(date.parse::<chrono::NaiveDate>().is_ok());
    }
}
