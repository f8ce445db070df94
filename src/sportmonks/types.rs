use serde::Deserialize;

/// Top-level envelope of every provider response.
///
/// Collection endpoints carry an array in `data`, item endpoints a single
/// object. Sibling keys such as `pagination` or `rate_limit` are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct Envelope<T> {
    pub data: T,
}

impl<T> Envelope<T> {
    pub fn into_data(self) -> T {
        self.data
    }
}
