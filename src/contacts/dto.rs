use serde::Deserialize;
use time::Date;

time::serde::format_description!(iso_date, Date, "[year]-[month]-[day]");

/// Body for contact creation and update. An update replaces every stored
/// field with the values given here; there is no partial merge.
#[derive(Debug, Deserialize)]
pub struct ContactPayload {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    #[serde(with = "iso_date")]
    pub birthday: Date,
    pub additional_info: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct Pagination {
    #[serde(default = "default_limit")]
    pub limit: i64,
    #[serde(default)]
    pub offset: i64,
}

fn default_limit() -> i64 {
    20
}

const MAX_PAGE_SIZE: i64 = 100;

impl Pagination {
    /// Bounded limit/offset actually sent to the database.
    pub fn clamped(&self) -> (i64, i64) {
        (self.limit.clamp(1, MAX_PAGE_SIZE), self.offset.max(0))
    }
}

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub q: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pagination_defaults() {
        let p: Pagination = serde_json::from_str("{}").unwrap();
        assert_eq!(p.clamped(), (20, 0));
    }

    #[test]
    fn pagination_is_bounded() {
        let p = Pagination {
            limit: 10_000,
            offset: -3,
        };
        assert_eq!(p.clamped(), (100, 0));

        let p = Pagination {
            limit: 0,
            offset: 40,
        };
        assert_eq!(p.clamped(), (1, 40));
    }

    #[test]
    fn payload_parses_iso_dates() {
        let raw = r#"{
            "first_name": "Jane",
            "last_name": "Doe",
            "email": "jane@example.com",
            "phone": "1234567890",
            "birthday": "1990-04-01"
        }"#;
        let p: ContactPayload = serde_json::from_str(raw).unwrap();
        assert_eq!(p.birthday.to_string(), "1990-04-01");
        assert!(p.additional_info.is_none());
    }
}
