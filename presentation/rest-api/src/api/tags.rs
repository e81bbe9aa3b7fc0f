use poem_openapi::Tags;

#[derive(Debug, Tags)]
pub enum ApiTags {
    /// Liveness and version information
    Health,
    /// Product inventory, answered with outcome envelopes
    Products,
}
