//! Route segment obfuscation.
//!
//! # Responsibilities
//! - Translate route words into opaque path tokens and back
//! - Provide one process-wide codec shared by the router and link builders
//!
//! # Design Decisions
//! - Tokens are `base64url(word XOR key)`: deterministic, path-safe, injective
//! - Decoding is a table lookup, never a raw base64 decode, so a token
//!   outside the vocabulary can only ever yield `None`
//! - Tables are built once and never mutated

use std::collections::HashMap;
use std::sync::OnceLock;

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine as _;

use crate::routing::vocabulary::Segment;

const OBFUSCATION_KEY: &[u8] = b"wm-admin/route-key";

static GLOBAL: OnceLock<SegmentCodec> = OnceLock::new();

/// Bidirectional mapping between route words and opaque tokens.
#[derive(Debug)]
pub struct SegmentCodec {
    /// Indexed by `Segment as usize`.
    forward: Vec<String>,
    reverse: HashMap<String, Segment>,
}

impl SegmentCodec {
    /// The shared codec. Built on first access; every call returns the same instance.
    pub fn global() -> &'static SegmentCodec {
        GLOBAL.get_or_init(SegmentCodec::build)
    }

    /// Build the token tables from the vocabulary.
    pub fn build() -> Self {
        let mut forward = Vec::with_capacity(Segment::ALL.len());
        let mut reverse = HashMap::with_capacity(Segment::ALL.len());

        for &segment in Segment::ALL {
            let token = obfuscate(segment.as_str());
            let previous = reverse.insert(token.clone(), segment);
            debug_assert!(previous.is_none(), "token collision for {segment}");
            forward.push(token);
        }

        tracing::debug!(words = forward.len(), "Segment codec built");
        Self { forward, reverse }
    }

    /// Opaque token for a known word.
    pub fn encode(&self, segment: Segment) -> &str {
        &self.forward[segment as usize]
    }

    /// Opaque token for a plaintext word, or `None` if the word is not in the vocabulary.
    pub fn encode_str(&self, plain: &str) -> Option<&str> {
        Segment::from_plain(plain).map(|segment| self.encode(segment))
    }

    /// The word behind a token, or `None` for anything the codec did not produce.
    pub fn decode(&self, token: &str) -> Option<Segment> {
        self.reverse.get(token).copied()
    }

    /// Number of words the codec knows.
    pub fn len(&self) -> usize {
        self.forward.len()
    }

    pub fn is_empty(&self) -> bool {
        self.forward.is_empty()
    }
}

fn obfuscate(plain: &str) -> String {
    let masked: Vec<u8> = plain
        .bytes()
        .zip(OBFUSCATION_KEY.iter().cycle())
        .map(|(byte, key)| byte ^ key)
        .collect();
    URL_SAFE_NO_PAD.encode(masked)
}
