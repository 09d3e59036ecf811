//! Configuration options for the converters and formatters

/// Conversion configuration options
#[derive(Debug, Clone)]
pub struct ConversionConfig {
    /// Spaces per indentation level in pretty-printed JSON output (0-8)
    pub indent_size: u8,
    /// Infer numbers, booleans and null from CSV field strings; when
    /// disabled every field stays a string
    pub infer_types: bool,
}

impl Default for ConversionConfig {
    fn default() -> Self {
        Self {
            indent_size: 2,
            infer_types: true,
        }
    }
}

impl ConversionConfig {
    /// Create a configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the indentation width
    pub fn with_indent_size(mut self, indent_size: u8) -> Self {
        self.indent_size = indent_size;
        self
    }

    /// Enable or disable CSV type inference
    pub fn with_infer_types(mut self, infer_types: bool) -> Self {
        self.infer_types = infer_types;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.indent_size > 8 {
            return Err(format!(
                "Indent size must be between 0 and 8, got {}",
                self.indent_size
            ));
        }
        Ok(())
    }
}
