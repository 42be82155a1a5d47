/// Characters `--pretty` keeps readable in query strings.
pub const DEFAULT_PRETTY_SAFE: &str = "@,()=/:._-";

/// How a space is written into (or read back from) a query component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SpaceMode {
    /// `' '` <-> `+`
    #[default]
    Plus,
    /// `' '` <-> `%20`, `+` stays literal
    Percent20,
}

/// Characters the encoder leaves alone on top of the unreserved set.
///
/// The encoder works on UTF-8 bytes, so only ASCII members can ever match.
/// Space is never honored: it is always turned into `+` or `%20`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SafeSet {
    chars: String,
}

impl SafeSet {
    pub fn new(chars: &str) -> Self {
        Self {
            chars: chars.to_string(),
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn pretty() -> Self {
        Self::new(DEFAULT_PRETTY_SAFE)
    }

    /// An explicit `--safe` list wins over `--pretty`.
    pub fn from_flags(safe: Option<&str>, pretty: bool) -> Self {
        match safe {
            Some(chars) => Self::new(chars),
            None if pretty => Self::pretty(),
            None => Self::empty(),
        }
    }

    pub fn contains(&self, c: char) -> bool {
        c.is_ascii() && c != ' ' && self.chars.contains(c)
    }

    pub fn as_str(&self) -> &str {
        &self.chars
    }

    fn allows(&self, b: u8) -> bool {
        self.contains(char::from(b))
    }
}

fn is_unreserved(b: u8) -> bool {
    b.is_ascii_alphanumeric() || matches!(b, b'-' | b'_' | b'.' | b'~')
}

/// Percent-encode `payload` for use as a query component value.
///
/// Works byte-wise over the UTF-8 encoding; escapes are uppercase `%XX`.
pub fn encode(payload: &str, space: SpaceMode, safe: &SafeSet) -> String {
    let mut out = String::with_capacity(payload.len());
    for b in payload.bytes() {
        if b == b' ' && space == SpaceMode::Plus {
            out.push('+');
        } else if is_unreserved(b) || safe.allows(b) {
            out.push(char::from(b));
        } else {
            out.push('%');
            out.push_str(&format!("{:02X}", b));
        }
    }
    out
}
