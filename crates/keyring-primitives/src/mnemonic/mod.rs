//! BIP-39 recovery phrases.
//!
//! Generation, validation and PBKDF2 seed stretching over the English word
//! list. Every entry point normalizes its input first (trim, lowercase,
//! single spaces), so a phrase typed with stray capitals or line breaks is
//! treated exactly like its canonical form. Other word-list languages are
//! not enabled and are rejected as invalid.

use std::fmt;

use bip39::{Language, Mnemonic};
use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};
use serde::{Deserialize, Serialize};
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

use crate::PrimitivesError;

/// Length of the stretched seed in bytes.
pub const SEED_LEN: usize = 64;

/// Entropy strength of a generated phrase.
///
/// Each step of 32 bits adds three words. `Bits256` (24 words) is the
/// default for new wallets. Serializes as its bit count.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "usize", into = "usize")]
pub enum EntropyStrength {
    /// 128 bits, 12 words.
    Bits128,
    /// 160 bits, 15 words.
    Bits160,
    /// 192 bits, 18 words.
    Bits192,
    /// 224 bits, 21 words.
    Bits224,
    /// 256 bits, 24 words.
    #[default]
    Bits256,
}

impl EntropyStrength {
    /// All supported strengths, weakest first.
    pub const ALL: [EntropyStrength; 5] = [
        EntropyStrength::Bits128,
        EntropyStrength::Bits160,
        EntropyStrength::Bits192,
        EntropyStrength::Bits224,
        EntropyStrength::Bits256,
    ];

    /// Select a strength by entropy bit count.
    pub fn from_bits(bits: usize) -> Result<Self, PrimitivesError> {
        Self::ALL
            .into_iter()
            .find(|s| s.bits() == bits)
            .ok_or_else(|| {
                PrimitivesError::InvalidPhrase(format!(
                    "unsupported entropy strength of {} bits",
                    bits
                ))
            })
    }

    /// Entropy size in bits.
    pub fn bits(self) -> usize {
        match self {
            EntropyStrength::Bits128 => 128,
            EntropyStrength::Bits160 => 160,
            EntropyStrength::Bits192 => 192,
            EntropyStrength::Bits224 => 224,
            EntropyStrength::Bits256 => 256,
        }
    }

    /// Entropy size in bytes.
    pub fn bytes(self) -> usize {
        self.bits() / 8
    }

    /// Number of words in a phrase of this strength.
    pub fn word_count(self) -> usize {
        self.bits() / 32 * 3
    }
}

impl TryFrom<usize> for EntropyStrength {
    type Error = PrimitivesError;

    fn try_from(bits: usize) -> Result<Self, Self::Error> {
        Self::from_bits(bits)
    }
}

impl From<EntropyStrength> for usize {
    fn from(strength: EntropyStrength) -> usize {
        strength.bits()
    }
}

/// A validated recovery phrase in normalized form.
///
/// The phrase is the only secret a user is ever shown for backup. It is
/// wiped on drop and `Debug` prints only the word count.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct RecoveryPhrase {
    phrase: String,
}

impl RecoveryPhrase {
    /// Normalize and validate a user-supplied phrase.
    ///
    /// # Returns
    /// `InvalidPhrase` if any word is outside the English list, the word
    /// count is not 12/15/18/21/24, or the checksum does not match.
    pub fn parse(phrase: &str) -> Result<Self, PrimitivesError> {
        let normalized = Zeroizing::new(normalize_phrase(phrase));
        let mnemonic = parse_normalized(&normalized)?;
        Ok(Self::from_mnemonic(&mnemonic))
    }

    /// Encode raw entropy (16 to 32 bytes in 4-byte steps) as a phrase.
    pub fn from_entropy(entropy: &[u8]) -> Result<Self, PrimitivesError> {
        let mnemonic = Mnemonic::from_entropy_in(Language::English, entropy)
            .map_err(map_bip39_error)?;
        Ok(Self::from_mnemonic(&mnemonic))
    }

    /// The normalized phrase, single-space separated.
    pub fn as_str(&self) -> &str {
        &self.phrase
    }

    /// Iterate over the words of the phrase.
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.phrase.split(' ')
    }

    /// Number of words in the phrase.
    pub fn word_count(&self) -> usize {
        self.words().count()
    }

    /// Recover the entropy the phrase encodes, without the checksum bits.
    pub fn to_entropy(&self) -> Result<Zeroizing<Vec<u8>>, PrimitivesError> {
        let mnemonic = parse_normalized(&self.phrase)?;
        Ok(Zeroizing::new(mnemonic.to_entropy()))
    }

    /// Stretch the phrase into seed bytes (PBKDF2-HMAC-SHA512, 2048
    /// rounds, empty passphrase).
    pub fn to_seed(&self) -> Result<SeedBytes, PrimitivesError> {
        let mnemonic = parse_normalized(&self.phrase)?;
        Ok(SeedBytes(mnemonic.to_seed_normalized("")))
    }

    fn from_mnemonic(mnemonic: &Mnemonic) -> Self {
        RecoveryPhrase {
            phrase: mnemonic.words().collect::<Vec<_>>().join(" "),
        }
    }
}

impl fmt::Debug for RecoveryPhrase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RecoveryPhrase({} words, redacted)", self.word_count())
    }
}

/// The 64-byte BIP-39 seed. Never displayed; wiped on drop.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct SeedBytes([u8; SEED_LEN]);

impl SeedBytes {
    /// Wrap raw seed bytes.
    pub fn new(bytes: [u8; SEED_LEN]) -> Self {
        SeedBytes(bytes)
    }

    /// Borrow the full 64-byte seed.
    pub fn as_bytes(&self) -> &[u8; SEED_LEN] {
        &self.0
    }
}

impl fmt::Debug for SeedBytes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SeedBytes(redacted)")
    }
}

/// The 2048-word English list phrases are drawn from.
pub fn word_list() -> &'static [&'static str; 2048] {
    Language::English.word_list()
}

/// Canonical form of a phrase: trimmed, lowercased, single-space joined.
pub fn normalize_phrase(phrase: &str) -> String {
    phrase
        .split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Generate a new phrase from the operating system's secure random source.
///
/// # Returns
/// `EntropySourceFailure` if the OS source cannot be read.
pub fn generate_phrase(strength: EntropyStrength) -> Result<RecoveryPhrase, PrimitivesError> {
    generate_phrase_with(&mut OsRng, strength)
}

/// Generate a new phrase from a caller-supplied cryptographic RNG.
///
/// Production code goes through [`generate_phrase`]; this variant exists so
/// tests can pin the random source.
pub fn generate_phrase_with<R: RngCore + CryptoRng>(
    rng: &mut R,
    strength: EntropyStrength,
) -> Result<RecoveryPhrase, PrimitivesError> {
    let mut entropy = Zeroizing::new(vec![0u8; strength.bytes()]);
    rng.try_fill_bytes(&mut entropy)
        .map_err(|e| PrimitivesError::EntropySourceFailure(e.to_string()))?;
    RecoveryPhrase::from_entropy(&entropy)
}

/// Check word-list membership, word count and checksum.
///
/// Never fails: malformed input of any shape yields `false`.
pub fn validate_phrase(phrase: &str) -> bool {
    let normalized = Zeroizing::new(normalize_phrase(phrase));
    parse_normalized(&normalized).is_ok()
}

/// Validate a phrase and stretch it into seed bytes.
///
/// Validation runs first; an invalid phrase fails with `InvalidPhrase`
/// without any PBKDF2 work.
pub fn to_seed(phrase: &str) -> Result<SeedBytes, PrimitivesError> {
    RecoveryPhrase::parse(phrase)?.to_seed()
}

fn parse_normalized(normalized: &str) -> Result<Mnemonic, PrimitivesError> {
    Mnemonic::parse_in_normalized(Language::English, normalized).map_err(map_bip39_error)
}

/// Map a bip39 error to `InvalidPhrase` without quoting any word.
fn map_bip39_error(e: bip39::Error) -> PrimitivesError {
    let reason = match e {
        bip39::Error::BadWordCount(n) => {
            format!("word count {} is not one of 12, 15, 18, 21 or 24", n)
        }
        bip39::Error::UnknownWord(i) => format!("word {} is not in the English word list", i + 1),
        bip39::Error::InvalidChecksum => "checksum mismatch".to_string(),
        bip39::Error::BadEntropyBitCount(bits) => format!(
            "entropy of {} bits is not 128-256 bits in 32-bit steps",
            bits
        ),
        _ => "unsupported phrase".to_string(),
    };
    PrimitivesError::InvalidPhrase(reason)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const ABANDON_12: &str = "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon about";

    const ABANDON_12_SEED: &str = "5eb00bbddcf069084889a8ab9155568165f5c453ccb85e70811aaed6f6da5fc1\
                                   9a5ac40b389cd370d086206dec8aa6c43daea6690f20ad3d8d48b2d2ce9e38e4";

    /// Entropy-to-phrase vectors from the BIP-39 reference list.
    #[test]
    fn test_from_entropy_vectors() {
        let vectors = [
            ("00000000000000000000000000000000", ABANDON_12),
            (
                "7f7f7f7f7f7f7f7f7f7f7f7f7f7f7f7f",
                "legal winner thank year wave sausage worth useful legal winner thank yellow",
            ),
            (
                "80808080808080808080808080808080",
                "letter advice cage absurd amount doctor acoustic avoid letter advice cage above",
            ),
            (
                "ffffffffffffffffffffffffffffffff",
                "zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo wrong",
            ),
        ];
        for (entropy_hex, expected) in vectors {
            let entropy = hex::decode(entropy_hex).unwrap();
            let phrase = RecoveryPhrase::from_entropy(&entropy).unwrap();
            assert_eq!(phrase.as_str(), expected);
            assert_eq!(*phrase.to_entropy().unwrap(), entropy);
        }

        let zero_256 = RecoveryPhrase::from_entropy(&[0u8; 32]).unwrap();
        assert_eq!(zero_256.word_count(), 24);
        assert!(zero_256.as_str().ends_with("abandon art"));
    }

    #[test]
    fn test_to_seed_known_vector() {
        let seed = to_seed(ABANDON_12).unwrap();
        assert_eq!(hex::encode(seed.as_bytes()), ABANDON_12_SEED);
    }

    #[test]
    fn test_normalization() {
        assert_eq!(normalize_phrase("  Abandon\tABOUT \n"), "abandon about");
        let messy = format!("  {}  \n", ABANDON_12.to_uppercase().replace(' ', "   "));
        assert!(validate_phrase(&messy));
        assert_eq!(RecoveryPhrase::parse(&messy).unwrap().as_str(), ABANDON_12);
        assert_eq!(
            to_seed(&messy).unwrap().as_bytes(),
            to_seed(ABANDON_12).unwrap().as_bytes()
        );
    }

    #[test]
    fn test_generate_each_strength() {
        for strength in EntropyStrength::ALL {
            let phrase = generate_phrase(strength).unwrap();
            assert_eq!(phrase.word_count(), strength.word_count());
            assert!(validate_phrase(phrase.as_str()));
            assert_eq!(phrase.to_entropy().unwrap().len(), strength.bytes());
        }
    }

    #[test]
    fn test_generate_with_pinned_rng_is_deterministic() {
        let a = generate_phrase_with(&mut StdRng::seed_from_u64(7), EntropyStrength::Bits256)
            .unwrap();
        let b = generate_phrase_with(&mut StdRng::seed_from_u64(7), EntropyStrength::Bits256)
            .unwrap();
        let c = generate_phrase_with(&mut StdRng::seed_from_u64(8), EntropyStrength::Bits256)
            .unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    /// A random source that always reports failure.
    struct FailingRng;

    impl RngCore for FailingRng {
        fn next_u32(&mut self) -> u32 {
            unreachable!("only try_fill_bytes is used")
        }

        fn next_u64(&mut self) -> u64 {
            unreachable!("only try_fill_bytes is used")
        }

        fn fill_bytes(&mut self, _dest: &mut [u8]) {
            unreachable!("only try_fill_bytes is used")
        }

        fn try_fill_bytes(&mut self, _dest: &mut [u8]) -> Result<(), rand::Error> {
            Err(rand::Error::new("entropy source offline"))
        }
    }

    impl CryptoRng for FailingRng {}

    #[test]
    fn test_generate_with_failing_rng() {
        for strength in EntropyStrength::ALL {
            match generate_phrase_with(&mut FailingRng, strength) {
                Err(PrimitivesError::EntropySourceFailure(reason)) => {
                    assert!(reason.contains("entropy source offline"));
                }
                other => panic!("expected EntropySourceFailure, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_unknown_word_rejected() {
        let phrase = ABANDON_12.replace("about", "bitcoinz");
        assert!(!validate_phrase(&phrase));
        match to_seed(&phrase) {
            Err(PrimitivesError::InvalidPhrase(reason)) => {
                assert!(reason.contains("12"));
                assert!(!reason.contains("bitcoinz"));
            }
            other => panic!("expected InvalidPhrase, got {:?}", other),
        }
    }

    #[test]
    fn test_checksum_corruption_rejected() {
        // Swapping the checksum-bearing last word for another valid word.
        let phrase = ABANDON_12.replace("about", "abandon");
        assert!(!validate_phrase(&phrase));
        assert!(matches!(
            to_seed(&phrase),
            Err(PrimitivesError::InvalidPhrase(_))
        ));

        let phrase_24 = vec!["abandon"; 24].join(" ");
        assert!(!validate_phrase(&phrase_24));
    }

    #[test]
    fn test_bad_word_counts_rejected() {
        for n in [0usize, 1, 11, 13, 23, 25, 27, 30] {
            let phrase = vec!["abandon"; n].join(" ");
            assert!(!validate_phrase(&phrase), "{} words", n);
        }
        assert!(!validate_phrase(""));
        assert!(!validate_phrase("   \n\t "));
    }

    #[test]
    fn test_foreign_word_list_rejected() {
        // Spanish BIP-39 words; only the English list is enabled.
        let spanish = "ábaco ábaco ábaco ábaco ábaco ábaco ábaco ábaco ábaco ábaco ábaco abierto";
        assert!(!validate_phrase(spanish));
        assert!(matches!(
            RecoveryPhrase::parse(spanish),
            Err(PrimitivesError::InvalidPhrase(_))
        ));
    }

    #[test]
    fn test_word_list_bounds() {
        let words = word_list();
        assert_eq!(words[0], "abandon");
        assert_eq!(words[2047], "zoo");
    }

    #[test]
    fn test_validate_is_idempotent() {
        let bad = ABANDON_12.replace("about", "abandon");
        for _ in 0..3 {
            assert!(validate_phrase(ABANDON_12));
            assert!(!validate_phrase(&bad));
        }
    }

    #[test]
    fn test_entropy_strength_lookup() {
        assert_eq!(EntropyStrength::from_bits(128).unwrap(), EntropyStrength::Bits128);
        assert_eq!(EntropyStrength::from_bits(256).unwrap().word_count(), 24);
        assert!(EntropyStrength::from_bits(512).is_err());
        assert_eq!(EntropyStrength::default(), EntropyStrength::Bits256);
    }

    #[test]
    fn test_entropy_strength_serde_as_bits() {
        assert_eq!(serde_json::to_string(&EntropyStrength::Bits160).unwrap(), "160");
        let parsed: EntropyStrength = serde_json::from_str("224").unwrap();
        assert_eq!(parsed, EntropyStrength::Bits224);
        assert!(serde_json::from_str::<EntropyStrength>("100").is_err());
    }

    #[test]
    fn test_bad_entropy_length() {
        assert!(matches!(
            RecoveryPhrase::from_entropy(&[0u8; 15]),
            Err(PrimitivesError::InvalidPhrase(_))
        ));
    }

    #[test]
    fn test_debug_is_redacted() {
        let phrase = RecoveryPhrase::parse(ABANDON_12).unwrap();
        let debug = format!("{:?}", phrase);
        assert!(!debug.contains("abandon"));
        assert!(debug.contains("12 words"));
        assert_eq!(format!("{:?}", to_seed(ABANDON_12).unwrap()), "SeedBytes(redacted)");
    }
}
