//! Constants for NIST P-384 (secp384r1)

/// Size of a P-384 scalar or field element in bytes
pub const P384_SCALAR_SIZE: usize = 48;

/// Size of a P-384 scalar in 32-bit words
pub const P384_SCALAR_WORDS: usize = P384_SCALAR_SIZE / 4;

/// Size of a message digest accepted for signing and verification (384 bits)
pub const P384_DIGEST_SIZE: usize = 48;

/// Extra masking bits carried by each private-key share
pub const P384_MASKING_BITS: usize = 64;

/// Size of one arithmetic share of a blinded private scalar in bytes
pub const P384_PRIVATE_SHARE_SIZE: usize = P384_SCALAR_SIZE + P384_MASKING_BITS / 8;

/// Keyblob size of a blinded ECDSA or ECDH private key (two shares)
pub const P384_PRIVATE_KEYBLOB_SIZE: usize = 2 * P384_PRIVATE_SHARE_SIZE;

/// Size of one XOR share of a blinded shared secret in bytes
pub const P384_SHARED_SHARE_SIZE: usize = P384_SCALAR_SIZE;

/// Keyblob size of a blinded ECDH shared secret (two shares)
pub const P384_SHARED_KEYBLOB_SIZE: usize = 2 * P384_SHARED_SHARE_SIZE;

/// Size of an unblinded public point Q = x || y in bytes
pub const P384_PUBLIC_KEY_SIZE: usize = 2 * P384_SCALAR_SIZE;

/// Size of a signature (r, s) in 32-bit words
pub const P384_SIGNATURE_WORDS: usize = 2 * P384_SCALAR_WORDS;

/// Size of a signature (r, s) in bytes
pub const P384_SIGNATURE_SIZE: usize = 2 * P384_SCALAR_SIZE;

/// Number of salt words diversifying a hardware-backed key
pub const KEY_HANDLE_SALT_WORDS: usize = 7;

/// P-384 curve order n in big-endian format
pub const P384_ORDER_BE: [u8; P384_SCALAR_SIZE] = [
    0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF,
    0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xC7, 0x63, 0x4D, 0x81, 0xF4, 0x37, 0x2D, 0xDF,
    0x58, 0x1A, 0x0D, 0xB2, 0x48, 0xB0, 0xA7, 0x7A, 0xEC, 0xEC, 0x19, 0x6A, 0xCC, 0xC5, 0x29, 0x73,
];
