use ens_normalize_rs::{EnsNameNormalizer, ProcessError};
use std::sync::LazyLock;

static ENSIP15: LazyLock<Ensip15Normalizer> = LazyLock::new(Ensip15Normalizer::default);

/// The normalizer rejected a name. Carries the normalizer's own error untouched.
#[derive(Debug, thiserror::Error)]
#[error(transparent)]
pub struct InvalidNameError(#[from] pub ProcessError);

/// Canonicalizes a raw name before it is hashed.
pub trait Normalizer {
	/// # Errors
	///
	/// Errors if the name contains disallowed code points, unbalanced bidi text or
	/// confusable sequences.
	fn normalize(&self, name: &str) -> Result<String, InvalidNameError>;
}

/// ENSIP-15 normalization, the profile the NNS registry hashes against.
#[derive(Default)]
pub struct Ensip15Normalizer {
	inner: EnsNameNormalizer,
}

impl Normalizer for Ensip15Normalizer {
	fn normalize(&self, name: &str) -> Result<String, InvalidNameError> {
		Ok(self.inner.normalize(name)?)
	}
}

/// Normalize a name with the shared ENSIP-15 tables.
///
/// # Errors
///
/// See [`Normalizer::normalize`].
pub fn normalize(name: &str) -> Result<String, InvalidNameError> {
	ENSIP15.normalize(name)
}

/// The shared ENSIP-15 normalizer.
pub fn ensip15() -> &'static Ensip15Normalizer {
	&ENSIP15
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn lowercases_ascii() {
		assert_eq!(normalize("Vitalik.NAD").unwrap(), "vitalik.nad");
	}

	#[test]
	fn normalized_names_are_fixed_points() {
		for name in ["nad", "alice.nad", "ret↩️rn.nad", "Ünicode.NAD"] {
			let once = normalize(name).unwrap();
			assert_eq!(normalize(&once).unwrap(), once);
		}
	}

	#[test]
	fn rejects_disallowed_characters() {
		assert!(normalize("hello world.nad").is_err());
	}

	#[test]
	fn rejects_empty_labels() {
		assert!(normalize("alice..nad").is_err());
	}
}
