//! Registrar Records
//!
//! Thin DTOs for the administrative CRUD endpoints: user accounts,
//! careers (degree programs), subjects, payments and grades.

use serde::{Deserialize, Serialize};

use super::session::Role;

/// A user account as listed in the admin panel
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UserAccount {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub role: Role,
}

impl UserAccount {
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// A degree program
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Career {
    pub id: i64,
    pub name: String,
    pub years: u8,
}

/// A subject taught within a career
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Subject {
    pub id: i64,
    pub name: String,
    pub career_id: i64,
    pub year: u8,
}

/// A registered payment
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Payment {
    pub id: i64,
    pub user_id: i64,
    pub concept: String,
    pub amount: f64,
    /// ISO-8601 payment date
    pub date: String,
}

/// A grade recorded for a student in a subject
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GradeRecord {
    pub subject_id: i64,
    pub student_id: i64,
    pub score: f32,
    /// Subject name, denormalized for display
    #[serde(default)]
    pub subject_name: Option<String>,
}

/// Body for creating a user account
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewUserAccount {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub role: Role,
}

/// Body for creating a career
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCareer {
    pub name: String,
    pub years: u8,
}

/// Body for creating a subject
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewSubject {
    pub name: String,
    pub career_id: i64,
    pub year: u8,
}

/// Body for registering a payment
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPayment {
    pub user_id: i64,
    pub concept: String,
    pub amount: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_account_display_name() {
        let user = UserAccount {
            id: 1,
            first_name: "Martín".to_string(),
            last_name: "Suárez".to_string(),
            email: "martin@example.edu".to_string(),
            role: Role::Instructor,
        };
        assert_eq!(user.display_name(), "Martín Suárez");
    }

    #[test]
    fn test_subject_round_trips_camel_case() {
        let json = r#"{"id":4,"name":"Algebra I","careerId":2,"year":1}"#;
        let subject: Subject = serde_json::from_str(json).unwrap();
        assert_eq!(subject.career_id, 2);
        assert_eq!(serde_json::to_string(&subject).unwrap(), json);
    }

    #[test]
    fn test_grade_record_subject_name_optional() {
        let json = r#"{"subjectId":4,"studentId":7,"score":8.5}"#;
        let grade: GradeRecord = serde_json::from_str(json).unwrap();
        assert!(grade.subject_name.is_none());
    }
}
