use indexmap::IndexMap;

/// A call after its configuration has been merged over the defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestData {
    pub endpoint: String,
    pub method: String,
    pub headers: IndexMap<String, String>,
    pub body: Option<String>,
    pub fail: bool,
}
