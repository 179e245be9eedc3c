//! Registrar State
//!
//! Backing state for the thin administrative panels: users, careers,
//! subjects (with enrollment), payments and grades. Every panel is the
//! same shape: a [`RemoteList`] fetched on first visit, a small create
//! form, and a reload after each successful write.

use std::collections::HashMap;
use std::sync::mpsc::{channel, Receiver};

use crate::egui_app::api::RegistrarApi;
use crate::egui_app::config::Config;
use crate::egui_app::remote::RemoteList;
use crate::shared::model::registrar::{NewCareer, NewPayment, NewSubject, NewUserAccount};
use crate::shared::model::{Career, GradeRecord, Payment, Role, Session, Subject, UserAccount};
use crate::shared::ApiError;

/// Which list a finished write should reload
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum WriteTarget {
    Users,
    Careers,
    Subjects,
    Payments,
    Roster,
}

/// Create-user form fields
pub struct UserForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub role: Role,
}

impl Default for UserForm {
    fn default() -> Self {
        Self {
            first_name: String::new(),
            last_name: String::new(),
            email: String::new(),
            role: Role::Student,
        }
    }
}

/// Create-career form fields
#[derive(Default)]
pub struct CareerForm {
    pub name: String,
    pub years: String,
}

/// Create-subject form fields
#[derive(Default)]
pub struct SubjectForm {
    pub name: String,
    pub career_id: String,
    pub year: String,
}

/// Register-payment form fields
#[derive(Default)]
pub struct PaymentForm {
    pub user_id: String,
    pub concept: String,
    pub amount: String,
}

/// State for all registrar panels
pub struct RegistrarState {
    pub users: RemoteList<UserAccount>,
    pub careers: RemoteList<Career>,
    pub subjects: RemoteList<Subject>,
    pub payments: RemoteList<Payment>,
    /// The session student's own grades
    pub grades: RemoteList<GradeRecord>,
    /// Roster of the subject an instructor is grading
    pub roster: RemoteList<UserAccount>,
    pub roster_subject_id: Option<i64>,

    pub user_form: UserForm,
    pub career_form: CareerForm,
    pub subject_form: SubjectForm,
    pub payment_form: PaymentForm,
    /// Per-student score inputs on the roster panel
    pub grade_inputs: HashMap<i64, String>,

    /// Informational notice (form validation, write failures)
    pub notice: Option<String>,

    pending_write: Option<(WriteTarget, Receiver<Result<(), ApiError>>)>,
}

impl Default for RegistrarState {
    fn default() -> Self {
        Self::new()
    }
}

impl RegistrarState {
    pub fn new() -> Self {
        Self {
            users: RemoteList::new(),
            careers: RemoteList::new(),
            subjects: RemoteList::new(),
            payments: RemoteList::new(),
            grades: RemoteList::new(),
            roster: RemoteList::new(),
            roster_subject_id: None,
            user_form: UserForm::default(),
            career_form: CareerForm::default(),
            subject_form: SubjectForm::default(),
            payment_form: PaymentForm::default(),
            grade_inputs: HashMap::new(),
            notice: None,
            pending_write: None,
        }
    }

    /// Forget everything; used on logout
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Collect finished fetches and writes; called once per frame
    pub fn poll(&mut self, config: &Config, session: &Session) {
        self.users.poll("users");
        self.careers.poll("careers");
        self.subjects.poll("subjects");
        self.payments.poll("payments");
        self.grades.poll("grades");
        self.roster.poll("roster");

        if let Some((target, rx)) = &self.pending_write {
            let target = *target;
            if let Ok(result) = rx.try_recv() {
                self.pending_write = None;
                match result {
                    Ok(()) => self.reload(target, config, session),
                    Err(e) => {
                        tracing::error!("registrar write failed: {}", e);
                        self.notice = Some(e.user_message());
                    }
                }
            }
        }
    }

    fn reload(&mut self, target: WriteTarget, config: &Config, session: &Session) {
        match target {
            WriteTarget::Users => self.load_users(config, session),
            WriteTarget::Careers => self.load_careers(config, session),
            WriteTarget::Subjects => self.load_subjects(config, session),
            WriteTarget::Payments => self.load_payments(config, session),
            WriteTarget::Roster => {
                if let Some(subject_id) = self.roster_subject_id {
                    self.load_roster(config, session, subject_id);
                }
            }
        }
    }

    // Loads

    pub fn load_users(&mut self, config: &Config, session: &Session) {
        let tx = self.users.begin();
        let config = config.clone();
        let session = session.clone();
        std::thread::spawn(move || {
            let api = RegistrarApi::new(config);
            let _ = tx.send(api.list_users(&session));
        });
    }

    pub fn load_careers(&mut self, config: &Config, session: &Session) {
        let tx = self.careers.begin();
        let config = config.clone();
        let session = session.clone();
        std::thread::spawn(move || {
            let api = RegistrarApi::new(config);
            let _ = tx.send(api.list_careers(&session));
        });
    }

    pub fn load_subjects(&mut self, config: &Config, session: &Session) {
        let tx = self.subjects.begin();
        let config = config.clone();
        let session = session.clone();
        std::thread::spawn(move || {
            let api = RegistrarApi::new(config);
            let _ = tx.send(api.list_subjects(&session));
        });
    }

    pub fn load_payments(&mut self, config: &Config, session: &Session) {
        let tx = self.payments.begin();
        let config = config.clone();
        let session = session.clone();
        std::thread::spawn(move || {
            let api = RegistrarApi::new(config);
            // Admins see every payment, students only their own history.
            let result = match session.role {
                Role::Admin => api.list_payments(&session),
                _ => api.payments_for(&session, session.id),
            };
            let _ = tx.send(result);
        });
    }

    pub fn load_grades(&mut self, config: &Config, session: &Session) {
        let tx = self.grades.begin();
        let config = config.clone();
        let session = session.clone();
        std::thread::spawn(move || {
            let api = RegistrarApi::new(config);
            let _ = tx.send(api.grades_for(&session, session.id));
        });
    }

    pub fn load_roster(&mut self, config: &Config, session: &Session, subject_id: i64) {
        self.roster_subject_id = Some(subject_id);
        self.grade_inputs.clear();
        let tx = self.roster.begin();
        let config = config.clone();
        let session = session.clone();
        std::thread::spawn(move || {
            let api = RegistrarApi::new(config);
            let _ = tx.send(api.roster(&session, subject_id));
        });
    }

    // Writes

    pub fn create_user(&mut self, config: &Config, session: &Session) {
        let form = &self.user_form;
        if form.first_name.trim().is_empty()
            || form.last_name.trim().is_empty()
            || form.email.trim().is_empty()
        {
            self.notice = Some("First name, last name and email are required.".to_string());
            return;
        }
        let body = NewUserAccount {
            first_name: form.first_name.trim().to_string(),
            last_name: form.last_name.trim().to_string(),
            email: form.email.trim().to_string(),
            role: form.role,
        };
        self.user_form = UserForm::default();
        self.dispatch_write(WriteTarget::Users, config, session, move |api, session| {
            api.create_user(session, &body)
        });
    }

    pub fn delete_user(&mut self, config: &Config, session: &Session, user_id: i64) {
        self.dispatch_write(WriteTarget::Users, config, session, move |api, session| {
            api.delete_user(session, user_id)
        });
    }

    pub fn create_career(&mut self, config: &Config, session: &Session) {
        let name = self.career_form.name.trim().to_string();
        let Ok(years) = self.career_form.years.trim().parse::<u8>() else {
            self.notice = Some("Years must be a small whole number.".to_string());
            return;
        };
        if name.is_empty() {
            self.notice = Some("A career needs a name.".to_string());
            return;
        }
        self.career_form = CareerForm::default();
        let body = NewCareer { name, years };
        self.dispatch_write(WriteTarget::Careers, config, session, move |api, session| {
            api.create_career(session, &body)
        });
    }

    pub fn delete_career(&mut self, config: &Config, session: &Session, career_id: i64) {
        self.dispatch_write(WriteTarget::Careers, config, session, move |api, session| {
            api.delete_career(session, career_id)
        });
    }

    pub fn create_subject(&mut self, config: &Config, session: &Session) {
        let name = self.subject_form.name.trim().to_string();
        let Ok(career_id) = self.subject_form.career_id.trim().parse::<i64>() else {
            self.notice = Some("Pick the career id the subject belongs to.".to_string());
            return;
        };
        let Ok(year) = self.subject_form.year.trim().parse::<u8>() else {
            self.notice = Some("Year must be a small whole number.".to_string());
            return;
        };
        if name.is_empty() {
            self.notice = Some("A subject needs a name.".to_string());
            return;
        }
        self.subject_form = SubjectForm::default();
        let body = NewSubject { name, career_id, year };
        self.dispatch_write(WriteTarget::Subjects, config, session, move |api, session| {
            api.create_subject(session, &body)
        });
    }

    pub fn delete_subject(&mut self, config: &Config, session: &Session, subject_id: i64) {
        self.dispatch_write(WriteTarget::Subjects, config, session, move |api, session| {
            api.delete_subject(session, subject_id)
        });
    }

    pub fn enroll(&mut self, config: &Config, session: &Session, subject_id: i64) {
        self.dispatch_write(WriteTarget::Subjects, config, session, move |api, session| {
            api.enroll(session, subject_id)
        });
    }

    pub fn register_payment(&mut self, config: &Config, session: &Session) {
        let Ok(user_id) = self.payment_form.user_id.trim().parse::<i64>() else {
            self.notice = Some("Payment needs the paying user's id.".to_string());
            return;
        };
        let Ok(amount) = self.payment_form.amount.trim().parse::<f64>() else {
            self.notice = Some("Amount must be a number.".to_string());
            return;
        };
        let concept = self.payment_form.concept.trim().to_string();
        if concept.is_empty() {
            self.notice = Some("Payment needs a concept.".to_string());
            return;
        }
        self.payment_form = PaymentForm::default();
        let body = NewPayment { user_id, concept, amount };
        self.dispatch_write(WriteTarget::Payments, config, session, move |api, session| {
            api.register_payment(session, &body)
        });
    }

    pub fn record_grade(&mut self, config: &Config, session: &Session, student_id: i64) {
        let Some(subject_id) = self.roster_subject_id else {
            return;
        };
        let input = self.grade_inputs.get(&student_id).cloned().unwrap_or_default();
        let Ok(score) = input.trim().parse::<f32>() else {
            self.notice = Some("The score must be a number.".to_string());
            return;
        };
        let grade = GradeRecord { subject_id, student_id, score, subject_name: None };
        self.dispatch_write(WriteTarget::Roster, config, session, move |api, session| {
            api.record_grade(session, &grade)
        });
    }

    fn dispatch_write<F>(&mut self, target: WriteTarget, config: &Config, session: &Session, work: F)
    where
        F: FnOnce(&RegistrarApi, &Session) -> Result<(), ApiError> + Send + 'static,
    {
        let (tx, rx) = channel();
        self.pending_write = Some((target, rx));
        let config = config.clone();
        let session = session.clone();
        std::thread::spawn(move || {
            let api = RegistrarApi::new(config);
            let _ = tx.send(work(&api, &session));
        });
    }
}
