mod decode;
mod encode;
mod rewrite;

pub use decode::decode;
pub use encode::{SafeSet, SpaceMode, encode};
pub use rewrite::wsa_plus;

/// Encode-side settings shared by `enc` and `url`.
#[derive(Debug, Clone, Default)]
pub struct EncodeOptions {
    pub space: SpaceMode,
    pub safe: SafeSet,
    pub wsa_plus: bool,
}

/// Encode a payload and apply the optional WSA-plus rewrite.
pub fn encode_value(payload: &str, opts: &EncodeOptions) -> String {
    let encoded = encode(payload, opts.space, &opts.safe);
    if !opts.wsa_plus {
        return encoded;
    }
    let rewritten = wsa_plus(&encoded);
    if rewritten != encoded {
        tracing::debug!(before = %encoded, after = %rewritten, "applied wsa-plus rewrite");
    }
    rewritten
}
