use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{
        admin::{
            self, import, mentee as admin_mentee, mentor as admin_mentor,
            subject as admin_subject,
        },
        auth, health, mentee, mentor, message, notification, subject,
    },
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(info(
    title = "Mentorship API",
    description = "Mentor and mentee management backend"
))]
struct ApiDoc;

/// Builds the API router and serves its OpenAPI document under `/api/docs`.
pub fn router() -> Router<AppState> {
    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(health::health))
        // Auth
        .routes(routes!(auth::login))
        .routes(routes!(auth::logout))
        .routes(routes!(auth::get_user))
        .routes(routes!(auth::change_password))
        .routes(routes!(auth::check_route))
        // Admin
        .routes(routes!(admin::get_dashboard))
        .routes(routes!(admin::get_error_logs))
        .routes(routes!(admin_mentor::get_mentors, admin_mentor::create_mentor))
        .routes(routes!(
            admin_mentor::get_mentor,
            admin_mentor::update_mentor,
            admin_mentor::delete_mentor
        ))
        .routes(routes!(admin_mentee::get_mentees, admin_mentee::create_mentee))
        .routes(routes!(admin_mentee::auto_assign))
        .routes(routes!(
            admin_mentee::get_mentee,
            admin_mentee::update_mentee,
            admin_mentee::delete_mentee
        ))
        .routes(routes!(admin_mentee::assign_mentor))
        .routes(routes!(admin_subject::get_subjects, admin_subject::create_subject))
        .routes(routes!(admin_subject::update_subject, admin_subject::delete_subject))
        .routes(routes!(import::import_mentees))
        .routes(routes!(import::import_mentors))
        // Mentor
        .routes(routes!(mentor::get_dashboard))
        .routes(routes!(mentor::get_mentees))
        .routes(routes!(mentor::get_mentee_progress))
        .routes(routes!(mentor::upsert_record))
        .routes(routes!(mentor::get_at_risk))
        .routes(routes!(mentor::get_group_messages, mentor::post_group_message))
        // Mentee
        .routes(routes!(mentee::get_dashboard))
        .routes(routes!(mentee::get_progress))
        .routes(routes!(mentee::get_group_messages))
        // Shared
        .routes(routes!(subject::get_subjects))
        .routes(routes!(message::send_message))
        .routes(routes!(message::get_unread_count))
        .routes(routes!(message::get_conversation))
        .routes(routes!(
            notification::get_notifications,
            notification::create_notification
        ))
        .routes(routes!(notification::get_unread_count))
        .routes(routes!(notification::mark_read))
        .split_for_parts();

    router.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
}
