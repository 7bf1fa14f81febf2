//! Which probe statuses count as "the resource exists".

/// Explicit set of accepted probe status codes.
///
/// The default accepts exactly 200: 201, 204, 206 and unfollowed redirects
/// are reported as missing. Widen it through configuration, not here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusPolicy {
    accepted: Vec<u32>,
}

impl StatusPolicy {
    pub const DEFAULT_ACCEPTED: u32 = 200;

    /// Policy accepting `codes`. An empty list falls back to the default.
    pub fn new(codes: impl IntoIterator<Item = u32>) -> Self {
        let mut accepted: Vec<u32> = codes.into_iter().collect();
        accepted.sort_unstable();
        accepted.dedup();
        if accepted.is_empty() {
            return Self::default();
        }
        Self { accepted }
    }

    pub fn accepts(&self, code: u32) -> bool {
        self.accepted.contains(&code)
    }

    pub fn codes(&self) -> &[u32] {
        &self.accepted
    }
}

impl Default for StatusPolicy {
    fn default() -> Self {
        Self {
            accepted: vec![Self::DEFAULT_ACCEPTED],
        }
    }
}
