/// Shared application state available to all route handlers via Axum's
/// `State` extractor.
pub struct AppState {
    /// The async SDK. Catalogs are loaded once at startup and never
    /// mutated, so handlers share it without locking.
    pub sdk: energy_offers_sdk::AsyncEnergyOffersSdk,
}
