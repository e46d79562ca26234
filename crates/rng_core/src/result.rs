//! Generated batch of rendered values.

/// Ordered sequence of generated values, each in canonical decimal text form.
///
/// On success the length always equals the requested quantity.
///
/// # Examples
///
/// ```rust
/// use rng_core::GenerationResult;
///
/// let result = GenerationResult::from(vec!["4".to_string(), "2".to_string()]);
/// assert_eq!(result.len(), 2);
/// assert_eq!(result.join_lines(), "4\n2");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct GenerationResult {
    values: Vec<String>,
}

impl GenerationResult {
    /// Rendered values in generation order.
    #[inline]
    pub fn values(&self) -> &[String] {
        &self.values
    }

    /// Number of values.
    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if the batch holds no values.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterates over the rendered values.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.values.iter()
    }

    /// Consumes the result, returning the rendered values.
    #[inline]
    pub fn into_values(self) -> Vec<String> {
        self.values
    }

    /// Newline-joined form used for "copy all".
    pub fn join_lines(&self) -> String {
        self.values.join("\n")
    }
}

impl From<Vec<String>> for GenerationResult {
    fn from(values: Vec<String>) -> Self {
        Self { values }
    }
}

impl IntoIterator for GenerationResult {
    type Item = String;
    type IntoIter = std::vec::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.into_iter()
    }
}

impl<'a> IntoIterator for &'a GenerationResult {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}
