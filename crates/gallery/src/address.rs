use std::fmt;

/// A page address split into path, query pairs and fragment.
///
/// Query pairs keep their raw (still percent-encoded) text and their order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Address {
    path: String,
    query: Vec<(String, String)>,
    fragment: Option<String>,
}

impl Address {
    pub fn parse(raw: &str) -> Self {
        let (rest, fragment) = match raw.split_once('#') {
            Some((rest, fragment)) => (rest, Some(fragment.to_string())),
            None => (raw, None),
        };

        let (path, query) = match rest.split_once('?') {
            Some((path, query)) => (path, parse_query(query)),
            None => (rest, Vec::new()),
        };

        Self {
            path: path.to_string(),
            query,
            fragment,
        }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    /// First value of `name`.
    pub fn query_param(&self, name: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn has_param(&self, name: &str) -> bool {
        self.query_param(name).is_some()
    }

    /// Copy of this address with every occurrence of `name` removed.
    pub fn without_param(&self, name: &str) -> Self {
        Self {
            path: self.path.clone(),
            query: self
                .query
                .iter()
                .filter(|(key, _)| key != name)
                .cloned()
                .collect(),
            fragment: self.fragment.clone(),
        }
    }
}

fn parse_query(query: &str) -> Vec<(String, String)> {
    query
        .split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| match pair.split_once('=') {
            Some((key, value)) => (key.to_string(), value.to_string()),
            None => (pair.to_string(), String::new()),
        })
        .collect()
}

impl From<&str> for Address {
    fn from(raw: &str) -> Self {
        Self::parse(raw)
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path)?;

        for (idx, (key, value)) in self.query.iter().enumerate() {
            let sep = if idx == 0 { '?' } else { '&' };
            write!(f, "{sep}{key}={value}")?;
        }

        if let Some(ref fragment) = self.fragment {
            write!(f, "#{fragment}")?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_display() {
        let raw = "/admin/app_storage/mediafile/?p=2&autoplay=last#top";
        let address = Address::parse(raw);

        assert_eq!(address.path(), "/admin/app_storage/mediafile/");
        assert_eq!(address.query_param("p"), Some("2"));
        assert_eq!(address.query_param("autoplay"), Some("last"));
        assert_eq!(address.to_string(), raw);
    }

    #[test]
    fn test_without_param_keeps_the_rest() {
        let address = Address::parse("/list/?autoplay=first&limit=40&autoplay=x#f");
        let stripped = address.without_param("autoplay");

        assert!(!stripped.has_param("autoplay"));
        assert_eq!(stripped.to_string(), "/list/?limit=40#f");
        assert_eq!(
            Address::parse("/list/?autoplay=last")
                .without_param("autoplay")
                .to_string(),
            "/list/"
        );
    }

    #[test]
    fn test_flag_without_value() {
        let address = Address::parse("/list/?autoplay");
        assert_eq!(address.query_param("autoplay"), Some(""));
    }
}
