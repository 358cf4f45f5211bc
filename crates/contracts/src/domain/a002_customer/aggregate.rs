use crate::domain::common::AggregateId;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CustomerId(pub i64);

impl CustomerId {
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl AggregateId for CustomerId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        s.parse::<i64>()
            .map(CustomerId::new)
            .map_err(|e| format!("Invalid customer id: {}", e))
    }
}

impl fmt::Display for CustomerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Customer as returned by `GET /customers/list`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    pub id: CustomerId,
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
}

impl Customer {
    /// Label for the customer picker: "Name (phone)" when a phone is known
    pub fn label(&self) -> String {
        match self.phone.as_deref().filter(|p| !p.is_empty()) {
            Some(phone) => format!("{} ({})", self.name, phone),
            None => self.name.clone(),
        }
    }
}

/// Body of `POST /customers/add`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerDto {
    pub name: String,
    pub phone: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl CustomerDto {
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Customer name is required".into());
        }
        if self.phone.trim().is_empty() {
            return Err("Customer phone is required".into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_customer_contact_fields_are_optional() {
        let c: Customer = serde_json::from_str(r#"{"id": 9, "name": "Asha"}"#).unwrap();
        assert_eq!(c.id, CustomerId(9));
        assert_eq!(c.email, None);
        assert_eq!(c.label(), "Asha");
    }

    #[test]
    fn test_label_includes_phone() {
        let c = Customer {
            id: CustomerId(1),
            name: "Ravi".into(),
            email: None,
            phone: Some("98450 00000".into()),
        };
        assert_eq!(c.label(), "Ravi (98450 00000)");
    }

    #[test]
    fn test_customer_dto_validation() {
        let ok = CustomerDto {
            name: "Ravi".into(),
            phone: "123".into(),
            email: None,
        };
        assert!(ok.validate().is_ok());
        assert!(CustomerDto { name: " ".into(), ..ok.clone() }.validate().is_err());
        assert!(CustomerDto { phone: "".into(), ..ok }.validate().is_err());
    }

    #[test]
    fn test_customer_dto_omits_missing_email() {
        let dto = CustomerDto {
            name: "Ravi".into(),
            phone: "123".into(),
            email: None,
        };
        let json = serde_json::to_value(&dto).unwrap();
        assert!(json.get("email").is_none());
    }
}
