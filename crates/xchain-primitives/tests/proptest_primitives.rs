use proptest::prelude::*;

use xchain_primitives::ec::signature::Signature;
use xchain_primitives::ec::PrivateKey;
use xchain_primitives::hash::sha256d;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    /// Any fixed-width (r, s) pair survives a DER encode/decode round trip.
    #[test]
    fn der_roundtrip(r in prop::array::uniform32(any::<u8>()),
                     s in prop::array::uniform32(any::<u8>())) {
        let sig = Signature::new(r, s);
        let der = sig.to_der();
        let decoded = Signature::from_der(&der).unwrap();
        prop_assert_eq!(decoded, sig);
    }

    /// The pad byte appears exactly when a component's high bit is set.
    #[test]
    fn der_length_tracks_high_bits(r in prop::array::uniform32(any::<u8>()),
                                   s in prop::array::uniform32(any::<u8>())) {
        let der = Signature::new(r, s).to_der();
        let r_pad = usize::from(r[0] & 0x80 != 0);
        let s_pad = usize::from(s[0] & 0x80 != 0);
        prop_assert_eq!(der.len(), 2 + 2 + 32 + r_pad + 2 + 32 + s_pad);
        prop_assert_eq!(der[3] as usize, 32 + r_pad);
    }

    /// Truncating a valid envelope always fails decoding, never panics.
    #[test]
    fn der_truncation_is_rejected(r in prop::array::uniform32(any::<u8>()),
                                  s in prop::array::uniform32(any::<u8>()),
                                  cut in 1usize..60) {
        let der = Signature::new(r, s).to_der();
        let cut = cut.min(der.len() - 1);
        let truncated = &der[..der.len() - cut];
        prop_assert!(Signature::from_der(truncated).is_err());
    }
}

proptest! {
    // Signing involves curve arithmetic, keep the case count modest.
    #![proptest_config(ProptestConfig::with_cases(8))]

    /// Sign/verify holds across the DER envelope for arbitrary messages.
    #[test]
    fn sign_der_verify(msg in prop::collection::vec(any::<u8>(), 0..256)) {
        let key = PrivateKey::new();
        let digest = sha256d(&msg);

        let sig = key.sign(&digest).unwrap();
        let recovered = Signature::from_der(&sig.to_der()).unwrap();
        prop_assert!(key.pub_key().verify(&digest, &recovered));
    }
}
