/// Macro to generate the `RepositoryError` conversion for a service error
///
/// Usage:
/// ```ignore
/// impl_service_error_conversions!(UserServiceError, InternalServerError, UserNotFound, ValidationError);
/// ```
#[macro_export]
macro_rules! impl_service_error_conversions {
  ($error_type:ty, $internal_variant:ident, $not_found_variant:ident, $conflict_variant:ident) => {
    impl From<$crate::db::RepositoryError> for $error_type {
      fn from(err: $crate::db::RepositoryError) -> Self {
        use $crate::db::RepositoryError;
        match err {
          RepositoryError::DatabaseError(e) => <$error_type>::$internal_variant(format!("Database error: {}", e)),
          RepositoryError::NotFound(msg) => <$error_type>::$not_found_variant(msg),
          RepositoryError::Conflict(msg) => <$error_type>::$conflict_variant(msg),
        }
      }
    }
  };
}
