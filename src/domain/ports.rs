use crate::utils::error::Result;

/// Key-value persistence used for the credential and UI preferences.
/// Stands in for the browser extension's local storage area.
pub trait KeyStore: Send + Sync {
    fn get(&self, key: &str) -> impl std::future::Future<Output = Result<Option<String>>> + Send;
    fn set(
        &self,
        key: &str,
        value: &str,
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}
