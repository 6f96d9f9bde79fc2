//! Form body parsing for handlers that read repeated keys.
//!
//! Checkbox groups submit the same key once per checked box. `axum::extract::Form`
//! deserializes into a struct and keeps only the last value for a repeated key,
//! so handlers that need the whole group extract [`FormFields`] instead.

use axum::extract::{FromRequest, Request};

/// All key/value pairs from a `application/x-www-form-urlencoded` body,
/// in submission order.
#[derive(Debug, Default)]
pub struct FormFields {
    pairs: Vec<(String, String)>,
}

impl FormFields {
    /// Parse a urlencoded body into its key/value pairs.
    #[must_use]
    pub fn parse(body: &str) -> Self {
        let pairs = url::form_urlencoded::parse(body.as_bytes())
            .into_owned()
            .collect();
        Self { pairs }
    }

    /// First value for `key`, if present.
    #[must_use]
    pub fn value(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// All values for `key`, in submission order.
    pub fn values<'a>(&'a self, key: &'a str) -> impl Iterator<Item = &'a str> {
        self.pairs
            .iter()
            .filter(move |(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// First value for `key`, trimmed, or `None` if missing or blank.
    #[must_use]
    pub fn non_empty(&self, key: &str) -> Option<&str> {
        self.value(key)
            .map(str::trim)
            .filter(|v| !v.is_empty())
    }
}

impl<S> FromRequest<S> for FormFields
where
    S: Send + Sync,
{
    type Rejection = <String as FromRequest<S>>::Rejection;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let body = String::from_request(req, state).await?;
        Ok(Self::parse(&body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_single_values() {
        let fields = FormFields::parse("name=Aisha&city=Panaji");
        assert_eq!(fields.value("name"), Some("Aisha"));
        assert_eq!(fields.value("city"), Some("Panaji"));
        assert_eq!(fields.value("missing"), None);
    }

    #[test]
    fn test_parse_repeated_keys() {
        let fields = FormFields::parse("rooms=Living+Room&rooms=Kitchen&rooms=Balcony");
        let rooms: Vec<&str> = fields.values("rooms").collect();
        assert_eq!(rooms, vec!["Living Room", "Kitchen", "Balcony"]);
    }

    #[test]
    fn test_parse_decodes_percent_escapes() {
        let fields = FormFields::parse("email=aisha%40example.com&city=New%20Delhi");
        assert_eq!(fields.value("email"), Some("aisha@example.com"));
        assert_eq!(fields.value("city"), Some("New Delhi"));
    }

    #[test]
    fn test_non_empty_rejects_blank() {
        let fields = FormFields::parse("name=+++&city=Panaji");
        assert_eq!(fields.non_empty("name"), None);
        assert_eq!(fields.non_empty("city"), Some("Panaji"));
        assert_eq!(fields.non_empty("missing"), None);
    }

    #[test]
    fn test_value_returns_first_of_repeated() {
        let fields = FormFields::parse("sort=featured&sort=rating");
        assert_eq!(fields.value("sort"), Some("featured"));
    }
}
