//! JSON rendering of the page/column/paragraph structure.

use crate::converters::OutputConverter;
use crate::error::Result;
use crate::layout::PageBlock;

/// Serializes pages as a JSON array of page blocks.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonConverter {
    /// Indent the output
    pub pretty: bool,
}

impl JsonConverter {
    /// Create a compact JSON converter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an indented JSON converter.
    pub fn pretty() -> Self {
        Self { pretty: true }
    }
}

impl OutputConverter for JsonConverter {
    fn convert(&self, pages: &[PageBlock]) -> Result<String> {
        let json = if self.pretty {
            serde_json::to_string_pretty(pages)?
        } else {
            serde_json::to_string(pages)?
        };
        Ok(json)
    }

    fn name(&self) -> &'static str {
        "json"
    }
}
