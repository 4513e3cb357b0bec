//! Query Parameter Handling
//!
//! An ordered, mutable set of query-string parameters used to build page
//! links. Only "set a parameter" and "encode back to a string" are needed;
//! business logic never reads from it.

use url::form_urlencoded;

// == Query Params ==
/// Ordered query-string parameters.
///
/// Preserves the order parameters arrived in so generated links stay
/// stable across requests.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<(String, String)>,
}

impl QueryParams {
    /// Creates an empty parameter set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a raw query string (without the leading `?`).
    pub fn parse(raw: &str) -> Self {
        let pairs = form_urlencoded::parse(raw.as_bytes())
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();
        Self { pairs }
    }

    // == Set ==
    /// Sets `name` to `value`, replacing every existing occurrence while
    /// keeping the parameter's original position.
    pub fn set(&mut self, name: &str, value: impl ToString) {
        let value = value.to_string();
        let mut replaced = false;
        self.pairs.retain_mut(|(k, v)| {
            if k == name {
                if replaced {
                    return false;
                }
                *v = value.clone();
                replaced = true;
            }
            true
        });
        if !replaced {
            self.pairs.push((name.to_string(), value));
        }
    }

    /// Returns the first value stored under `name`.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    // == Encode ==
    /// Percent-encodes the parameters back into a query string.
    pub fn encode(&self) -> String {
        form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.pairs.iter().map(|(k, v)| (k.as_str(), v.as_str())))
            .finish()
    }

    /// Number of parameters.
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// True if no parameters are present.
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}
