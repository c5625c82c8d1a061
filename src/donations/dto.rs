use serde::{Deserialize, Serialize};

use crate::donations::repo_types::Donation;

/// Request body for a donation form submission.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DonationRequest {
    pub name: String,
    pub age: i32,
    pub gender: String,
    pub blood_group: String,
    pub weight: f64,
    pub phone: String,
}

#[derive(Debug, Serialize)]
pub struct DonationResponse {
    pub msg: &'static str,
    pub donation: Donation,
}

#[derive(Debug, Serialize)]
pub struct CountResponse {
    pub count: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_accepts_camel_case_fields() {
        let json = r#"{
            "name": "Alice",
            "age": 30,
            "gender": "female",
            "bloodGroup": "O+",
            "weight": 65.5,
            "phone": "555-0199"
        }"#;
        let req: DonationRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.blood_group, "O+");
        assert_eq!(req.age, 30);
        assert!((req.weight - 65.5).abs() < f64::EPSILON);
    }
}
