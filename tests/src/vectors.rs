//! Known-answer vectors

use once_cell::sync::Lazy;

/// Deterministic ECDSA vector with the private scalar in the clear
pub struct EcdsaVector {
    pub private: Vec<u8>,
    pub public: Vec<u8>,
    pub message: &'static [u8],
    pub r: Vec<u8>,
    pub s: Vec<u8>,
}

impl EcdsaVector {
    /// `share0` for an import where `share1` is zero
    pub fn share0(&self) -> Vec<u8> {
        let mut share = vec![0u8; 56 - self.private.len()];
        share.extend_from_slice(&self.private);
        share
    }
}

fn decode(hex: &str) -> Vec<u8> {
    hex::decode(hex).unwrap_or_default()
}

/// RFC 6979 A.2.6, P-384 with SHA-384
pub static RFC6979_P384: Lazy<Vec<EcdsaVector>> = Lazy::new(|| {
    let private = decode(
        "6b9d3dad2e1b8c1c05b19875b6659f4de23c3b667bf297ba9aa47740787137d8\
         96d5724e4c70a825f872c9ea60d2edf5",
    );
    let public = decode(
        "ec3a4e415b4e19a4568618029f427fa5da9a8bc4ae92e02e06aae5286b300c64\
         def8f0ea9055866064a254515480bc13\
         8015d9b72d7d57244ea8ef9ac0c621896708a59367f9dfb9f54ca84b3f1c9db1\
         288b231c3ae0d4fe7344fd2533264720",
    );
    vec![
        EcdsaVector {
            private: private.clone(),
            public: public.clone(),
            message: b"sample",
            r: decode(
                "94edbb92a5ecb8aad4736e56c691916b3f88140666ce9fa73d64c4ea95ad133c\
                 81a648152e44acf96e36dd1e80fabe46",
            ),
            s: decode(
                "99ef4aeb15f178cea1fe40db2603138f130e740a19624526203b6351d0a3a94f\
                 a329c145786e679e7b82c71a38628ac8",
            ),
        },
        EcdsaVector {
            private,
            public,
            message: b"test",
            r: decode(
                "8203b63d3c853e8d77227fb377bcf7b7b772e97892a80f36ab775d509d7a5feb\
                 0542a7f0812998da8f1dd3ca3cf023db",
            ),
            s: decode(
                "ddd0760448d42d8a43af45af836fce4de8be06b485e9b61b827c2f13173923e0\
                 6a739f040649a667bf3b828246baa5a5",
            ),
        },
    ]
});
