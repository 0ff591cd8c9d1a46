//! Request types for the registration API

use serde::Deserialize;

/// `POST /api/members` body
///
/// Every field is optional at the wire level so that missing fields surface
/// as a validation error rather than a JSON rejection.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RegisterMemberRequest {
    #[serde(default)]
    pub members_name: Option<String>,
    #[serde(default)]
    pub members_phone_number: Option<String>,
    #[serde(default)]
    pub members_company: Option<String>,
    #[serde(default)]
    pub members_message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_deserialize_as_none() {
        let req: RegisterMemberRequest =
            serde_json::from_str(r#"{"members_name":"Lee"}"#).unwrap();
        assert_eq!(req.members_name.as_deref(), Some("Lee"));
        assert!(req.members_phone_number.is_none());
        assert!(req.members_company.is_none());
    }

    #[test]
    fn test_null_fields_deserialize_as_none() {
        let req: RegisterMemberRequest =
            serde_json::from_str(r#"{"members_name":null,"members_message":null}"#).unwrap();
        assert!(req.members_name.is_none());
        assert!(req.members_message.is_none());
    }
}
