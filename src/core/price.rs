/// Text-backed price input.
///
/// Keeps the raw text the user typed next to the last value that parsed.
/// Invalid text never reaches the value; on submit it is replaced by the
/// last valid value instead of surfacing an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriceField {
    text: String,
    value: u64,
}

impl PriceField {
    pub fn new(value: u64) -> Self {
        Self {
            text: value.to_string(),
            value,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Last value that parsed.
    pub fn value(&self) -> u64 {
        self.value
    }

    /// Replace the text. The value follows only when the new text parses.
    pub fn edit(&mut self, text: impl Into<String>) {
        self.text = text.into();
        if let Some(value) = parse_price(&self.text) {
            self.value = value;
        }
    }

    /// Commit the field, reverting the text if it does not parse.
    pub fn submit(&mut self) -> u64 {
        match parse_price(&self.text) {
            Some(value) => self.value = value,
            None => {
                log::debug!("Rejected price input '{}', reverting to {}", self.text, self.value);
                self.text = self.value.to_string();
            }
        }
        self.value
    }
}

impl Default for PriceField {
    fn default() -> Self {
        Self::new(0)
    }
}

/// Non-negative whole number, no surrounding whitespace.
pub fn parse_price(text: &str) -> Option<u64> {
    text.parse::<u64>().ok()
}
