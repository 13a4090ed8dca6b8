use chrono::NaiveDate;

/// Partial profile update. The username is immutable.
#[derive(Debug, Clone, Default)]
pub struct UpdateProfileDto {
    pub email: Option<String>,
    pub name: Option<String>,
    pub gender: Option<String>,
    pub age: Option<i32>,
    pub occupation: Option<String>,
    pub dob: Option<NaiveDate>,
}
