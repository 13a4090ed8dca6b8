use chrono::NaiveDate;

#[derive(Debug, Clone)]
pub struct CreateProfileDto {
    pub username: String,
    pub email: String,
    pub name: Option<String>,
    pub gender: Option<String>,
    pub age: Option<i32>,
    pub occupation: Option<String>,
    pub dob: Option<NaiveDate>,
}
