use crate::dto::HealthRes;

/// Simple health service that can be used by any API surface
///
/// This service provides a standardised way to check the health status of the Axiom service.
#[derive(Clone)]
pub struct HealthService;

impl HealthService {
    /// Static method to check health without creating an instance
    ///
    /// # Returns
    /// A `HealthRes` indicating the service is healthy.
    pub fn check_health() -> HealthRes {
        HealthRes {
            ok: true,
            message: "Axiom is alive".into(),
        }
    }
}
