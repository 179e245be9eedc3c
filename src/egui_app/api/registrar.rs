//! Registrar endpoints
//!
//! The administrative CRUD surface: user accounts, careers, subjects,
//! payments, enrollment and grades. All of these are plain JSON
//! endpoints, so the client is built from three private helpers rather
//! than spelling the request dance out per method.

use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::{call_runtime, ensure_success};
use crate::egui_app::config::Config;
use crate::shared::model::registrar::{NewCareer, NewPayment, NewSubject, NewUserAccount};
use crate::shared::model::{Career, GradeRecord, Payment, Session, Subject, UserAccount};
use crate::shared::ApiError;

/// Registrar API client
pub struct RegistrarApi {
    config: Config,
    client: Client,
}

impl RegistrarApi {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            client: Client::new(),
        }
    }

    fn get_json<T: DeserializeOwned>(&self, session: &Session, path: &str) -> Result<T, ApiError> {
        let url = self.config.api_url(path);
        let rt = call_runtime()?;

        rt.block_on(async {
            let response = self
                .client
                .get(&url)
                .bearer_auth(&session.token)
                .send()
                .await
                .map_err(|e| ApiError::network(e.to_string()))?;

            let response = ensure_success(response).await?;

            response
                .json::<T>()
                .await
                .map_err(|e| ApiError::decode(e.to_string()))
        })
    }

    fn post_json<B: Serialize>(&self, session: &Session, path: &str, body: &B) -> Result<(), ApiError> {
        let url = self.config.api_url(path);
        let rt = call_runtime()?;

        rt.block_on(async {
            let response = self
                .client
                .post(&url)
                .bearer_auth(&session.token)
                .json(body)
                .send()
                .await
                .map_err(|e| ApiError::network(e.to_string()))?;

            ensure_success(response).await?;
            Ok(())
        })
    }

    fn delete(&self, session: &Session, path: &str) -> Result<(), ApiError> {
        let url = self.config.api_url(path);
        let rt = call_runtime()?;

        rt.block_on(async {
            let response = self
                .client
                .delete(&url)
                .bearer_auth(&session.token)
                .send()
                .await
                .map_err(|e| ApiError::network(e.to_string()))?;

            ensure_success(response).await?;
            Ok(())
        })
    }

    // Users

    pub fn list_users(&self, session: &Session) -> Result<Vec<UserAccount>, ApiError> {
        self.get_json(session, "/api/users")
    }

    pub fn create_user(&self, session: &Session, user: &NewUserAccount) -> Result<(), ApiError> {
        self.post_json(session, "/api/users", user)
    }

    pub fn delete_user(&self, session: &Session, user_id: i64) -> Result<(), ApiError> {
        self.delete(session, &format!("/api/users/{}", user_id))
    }

    // Careers

    pub fn list_careers(&self, session: &Session) -> Result<Vec<Career>, ApiError> {
        self.get_json(session, "/api/careers")
    }

    pub fn create_career(&self, session: &Session, career: &NewCareer) -> Result<(), ApiError> {
        self.post_json(session, "/api/careers", career)
    }

    pub fn delete_career(&self, session: &Session, career_id: i64) -> Result<(), ApiError> {
        self.delete(session, &format!("/api/careers/{}", career_id))
    }

    // Subjects and enrollment

    pub fn list_subjects(&self, session: &Session) -> Result<Vec<Subject>, ApiError> {
        self.get_json(session, "/api/subjects")
    }

    pub fn create_subject(&self, session: &Session, subject: &NewSubject) -> Result<(), ApiError> {
        self.post_json(session, "/api/subjects", subject)
    }

    pub fn delete_subject(&self, session: &Session, subject_id: i64) -> Result<(), ApiError> {
        self.delete(session, &format!("/api/subjects/{}", subject_id))
    }

    pub fn enroll(&self, session: &Session, subject_id: i64) -> Result<(), ApiError> {
        self.post_json(
            session,
            &format!("/api/subjects/{}/enroll", subject_id),
            &serde_json::json!({ "userId": session.id }),
        )
    }

    /// Students enrolled in a subject (instructor roster)
    pub fn roster(&self, session: &Session, subject_id: i64) -> Result<Vec<UserAccount>, ApiError> {
        self.get_json(session, &format!("/api/subjects/{}/roster", subject_id))
    }

    // Grades

    pub fn grades_for(&self, session: &Session, student_id: i64) -> Result<Vec<GradeRecord>, ApiError> {
        self.get_json(session, &format!("/api/users/{}/grades", student_id))
    }

    pub fn record_grade(&self, session: &Session, grade: &GradeRecord) -> Result<(), ApiError> {
        self.post_json(session, "/api/grades", grade)
    }

    // Payments

    pub fn list_payments(&self, session: &Session) -> Result<Vec<Payment>, ApiError> {
        self.get_json(session, "/api/payments")
    }

    pub fn payments_for(&self, session: &Session, user_id: i64) -> Result<Vec<Payment>, ApiError> {
        self.get_json(session, &format!("/api/payments/{}", user_id))
    }

    pub fn register_payment(&self, session: &Session, payment: &NewPayment) -> Result<(), ApiError> {
        self.post_json(session, "/api/payments", payment)
    }
}
