use rand::{Rng, RngCore};

use fauxforge_core::ImageSpec;

/// Exclusive upper bound of the `random` query parameter.
const IMAGE_NONCE_BOUND: u32 = 1000;

/// Build a pseudo-image URL for an image node.
///
/// The category is not part of the URL; the random nonce alone makes
/// consecutive URLs point at different images.
pub fn image_url(base_url: &str, spec: &ImageSpec, rng: &mut dyn RngCore) -> String {
    let nonce = rng.random_range(0..IMAGE_NONCE_BOUND);
    let base = base_url.trim_end_matches('/');
    format!("{base}/{}/{}?random={nonce}", spec.width, spec.height)
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use super::*;

    #[test]
    fn trailing_slash_in_base_is_ignored() {
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let url = image_url("https://img.test/", &ImageSpec::default(), &mut rng);
        assert!(url.starts_with("https://img.test/200/200?random="), "{url}");
    }

    #[test]
    fn nonce_stays_below_one_thousand() {
        let mut rng = ChaCha8Rng::seed_from_u64(9);
        for _ in 0..500 {
            let url = image_url("https://img.test", &ImageSpec::default(), &mut rng);
            let nonce: u32 = url
                .rsplit('=')
                .next()
                .and_then(|raw| raw.parse().ok())
                .expect("numeric nonce");
            assert!(nonce < 1000);
        }
    }
}
