//! ECDSA signature with the ledger's DER envelope.
//!
//! The ledger exchanges signatures as a two-integer ASN.1 DER sequence:
//! `0x30 <total> 0x02 <len r> <r> 0x02 <len s> <s>`. The codec here is a
//! pure byte-level envelope around the fixed-width (r, s) pair produced by
//! the signer; it performs no curve arithmetic of its own.

use crate::PrimitivesError;

/// Width in bytes of one signature component on the fixed 256-bit curve.
pub const COMPONENT_LEN: usize = 32;

/// An ECDSA signature with R and S components.
///
/// Both components are fixed-width big-endian unsigned magnitudes. DER
/// serialization follows the ledger's convention exactly: a component whose
/// leading byte has its high bit set is prefixed with a single `0x00` so it
/// cannot be read as a negative integer; otherwise it is emitted as-is.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Signature {
    /// The R component of the signature (32 bytes, big-endian).
    r: [u8; COMPONENT_LEN],
    /// The S component of the signature (32 bytes, big-endian).
    s: [u8; COMPONENT_LEN],
}

impl Signature {
    /// Create a signature from raw R and S 32-byte arrays.
    ///
    /// # Arguments
    /// * `r` - The R component (32 bytes, big-endian).
    /// * `s` - The S component (32 bytes, big-endian).
    ///
    /// # Returns
    /// A new `Signature` with the given R and S values.
    pub fn new(r: [u8; COMPONENT_LEN], s: [u8; COMPONENT_LEN]) -> Self {
        Signature { r, s }
    }

    /// Access the R component of the signature.
    pub fn r(&self) -> &[u8; COMPONENT_LEN] {
        &self.r
    }

    /// Access the S component of the signature.
    pub fn s(&self) -> &[u8; COMPONENT_LEN] {
        &self.s
    }

    /// Serialize the signature in the ledger's DER format.
    ///
    /// Output layout: `0x30 <total> 0x02 <len r> <r> 0x02 <len s> <s>`,
    /// where `total = 4 + len(r) + len(s)`. Each component is emitted at its
    /// fixed 32-byte width, plus one `0x00` prefix byte when its leading
    /// byte has the high bit set.
    ///
    /// # Returns
    /// A byte vector containing the DER-encoded signature.
    pub fn to_der(&self) -> Vec<u8> {
        let rb = der_int(&self.r);
        let sb = der_int(&self.s);

        let mut out = Vec::with_capacity(6 + rb.len() + sb.len());
        out.push(0x30);
        out.push((4 + rb.len() + sb.len()) as u8);
        out.push(0x02);
        out.push(rb.len() as u8);
        out.extend_from_slice(&rb);
        out.push(0x02);
        out.push(sb.len() as u8);
        out.extend_from_slice(&sb);
        out
    }

    /// Parse a DER-encoded ECDSA signature.
    ///
    /// Strips at most one leading `0x00` padding byte per component, then
    /// left-pads each component back to its fixed 32-byte width, so
    /// `from_der(sig.to_der())` reproduces `sig` exactly.
    ///
    /// # Arguments
    /// * `bytes` - DER-encoded signature bytes.
    ///
    /// # Returns
    /// `Ok(Signature)` on success, or `MalformedSignature` when the buffer
    /// is 8 bytes or shorter, a marker byte is wrong, a declared component
    /// length overruns the buffer, or a component exceeds the fixed width.
    pub fn from_der(bytes: &[u8]) -> Result<Self, PrimitivesError> {
        if bytes.len() <= 8 {
            return Err(PrimitivesError::MalformedSignature(
                "too short".to_string(),
            ));
        }

        if bytes[0] != 0x30 {
            return Err(PrimitivesError::MalformedSignature(
                "no sequence marker".to_string(),
            ));
        }

        if bytes[2] != 0x02 {
            return Err(PrimitivesError::MalformedSignature(
                "no 1st integer marker".to_string(),
            ));
        }
        let r_len = bytes[3] as usize;
        if r_len == 0 || 4 + r_len + 2 > bytes.len() {
            return Err(PrimitivesError::MalformedSignature(
                "bogus R length".to_string(),
            ));
        }
        let r_bytes = &bytes[4..4 + r_len];

        if bytes[4 + r_len] != 0x02 {
            return Err(PrimitivesError::MalformedSignature(
                "no 2nd integer marker".to_string(),
            ));
        }
        let s_len = bytes[5 + r_len] as usize;
        if s_len == 0 || 6 + r_len + s_len > bytes.len() {
            return Err(PrimitivesError::MalformedSignature(
                "bogus S length".to_string(),
            ));
        }
        let s_bytes = &bytes[6 + r_len..6 + r_len + s_len];

        Ok(Signature {
            r: fixed_width(r_bytes)?,
            s: fixed_width(s_bytes)?,
        })
    }
}

/// Render one component for DER: prefix a single `0x00` iff the leading
/// byte has its high bit set, otherwise pass the fixed-width value through.
fn der_int(val: &[u8; COMPONENT_LEN]) -> Vec<u8> {
    if val[0] & 0x80 != 0 {
        let mut out = Vec::with_capacity(COMPONENT_LEN + 1);
        out.push(0x00);
        out.extend_from_slice(val);
        out
    } else {
        val.to_vec()
    }
}

/// Reconstitute a fixed-width component from a DER integer field.
///
/// Strips at most one leading `0x00` (the padding the encoder may have
/// added), then left-pads to the component width.
fn fixed_width(bytes: &[u8]) -> Result<[u8; COMPONENT_LEN], PrimitivesError> {
    let trimmed = match bytes {
        [0x00, rest @ ..] if !rest.is_empty() => rest,
        other => other,
    };
    if trimmed.len() > COMPONENT_LEN {
        return Err(PrimitivesError::MalformedSignature(format!(
            "integer field of {} bytes exceeds component width",
            trimmed.len()
        )));
    }
    let mut out = [0u8; COMPONENT_LEN];
    out[COMPONENT_LEN - trimmed.len()..].copy_from_slice(trimmed);
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hex_to_32(s: &str) -> [u8; 32] {
        let bytes = hex::decode(s).unwrap();
        let mut out = [0u8; 32];
        out[32 - bytes.len()..].copy_from_slice(&bytes);
        out
    }

    /// Components with a clear high bit gain one 0x00 prefix byte; those
    /// without are emitted at their fixed width.
    #[test]
    fn test_der_high_bit_padding() {
        let r = hex_to_32("80ed0e7ebcbe7b63fe1d8eecbdbde03a67ceba4fc8f6482bdcb9606a911404aa");
        let s = hex_to_32("181522ec8eca07de4860a4acdd12909d831cc56cbbac4622082221a8768d1d09");
        let sig = Signature::new(r, s);

        let der = sig.to_der();
        assert_eq!(der[0], 0x30);
        assert_eq!(der[1] as usize, der.len() - 2);
        assert_eq!(der[2], 0x02);
        assert_eq!(der[3] as usize, 33, "high-bit R gets a pad byte");
        assert_eq!(der[4], 0x00);
        assert_eq!(&der[5..37], &r);
        assert_eq!(der[37], 0x02);
        assert_eq!(der[38] as usize, 32, "low-bit S is emitted as-is");
        assert_eq!(&der[39..71], &s);

        let decoded = Signature::from_der(&der).unwrap();
        assert_eq!(decoded, sig);
    }

    #[test]
    fn test_der_both_high_bits() {
        let r = [0xFFu8; 32];
        let s = [0x80u8; 32];
        let sig = Signature::new(r, s);

        let der = sig.to_der();
        // 0x30, total, then two 33-byte integer fields with headers.
        assert_eq!(der.len(), 2 + 2 + 33 + 2 + 33);
        assert_eq!(der[1] as usize, 4 + 33 + 33);

        assert_eq!(Signature::from_der(&der).unwrap(), sig);
    }

    #[test]
    fn test_der_roundtrip_plain() {
        let sig = Signature::new(
            hex_to_32("4e45e16932b8af514961a1d3a1a25fdf3f4f7732e9d624c6c61548ab5fb8cd41"),
            hex_to_32("181522ec8eca07de4860a4acdd12909d831cc56cbbac4622082221a8768d1d09"),
        );
        let der = sig.to_der();
        assert_eq!(der.len(), 2 + 2 + 32 + 2 + 32);
        assert_eq!(Signature::from_der(&der).unwrap(), sig);
    }

    /// Values that naturally begin with 0x00 keep their width through a
    /// round trip because the decoder re-pads to the component width.
    #[test]
    fn test_der_roundtrip_leading_zero_value() {
        let sig = Signature::new(
            hex_to_32("0000e16932b8af514961a1d3a1a25fdf3f4f7732e9d624c6c61548ab5fb8cd41"),
            hex_to_32("01"),
        );
        assert_eq!(Signature::from_der(&sig.to_der()).unwrap(), sig);
    }

    #[test]
    fn test_from_der_rejects_short_buffers() {
        assert!(Signature::from_der(&[]).is_err());
        // Exactly 8 bytes is still too short.
        assert!(Signature::from_der(&[0x30, 0x06, 0x02, 0x01, 0x00, 0x02, 0x01, 0x00]).is_err());
    }

    #[test]
    fn test_from_der_rejects_bad_markers() {
        let sig = Signature::new([0x11u8; 32], [0x22u8; 32]);
        let der = sig.to_der();

        let mut bad_magic = der.clone();
        bad_magic[0] = 0x31;
        assert!(Signature::from_der(&bad_magic).is_err());

        let mut bad_first_int = der.clone();
        bad_first_int[2] = 0x03;
        assert!(Signature::from_der(&bad_first_int).is_err());

        let mut bad_second_int = der.clone();
        bad_second_int[2 + 2 + 32] = 0x03;
        assert!(Signature::from_der(&bad_second_int).is_err());
    }

    #[test]
    fn test_from_der_rejects_overrun_lengths() {
        let sig = Signature::new([0x11u8; 32], [0x22u8; 32]);
        let mut der = sig.to_der();

        // Declare R longer than the buffer holds.
        der[3] = 0xFF;
        assert!(Signature::from_der(&der).is_err());

        // Declare S longer than the remaining buffer.
        let mut der = sig.to_der();
        let s_len_at = 5 + 32;
        der[s_len_at] = 0xFF;
        assert!(Signature::from_der(&der).is_err());
    }

    #[test]
    fn test_from_der_rejects_oversized_component() {
        // 34-byte R field whose first byte is not a pad: exceeds the width.
        let mut buf = vec![0x30, 0x00, 0x02, 34];
        buf.extend_from_slice(&[0x01u8; 34]);
        buf.extend_from_slice(&[0x02, 0x01, 0x07]);
        buf[1] = (buf.len() - 2) as u8;
        assert!(Signature::from_der(&buf).is_err());
    }
}
