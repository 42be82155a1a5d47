use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct EncodeView {
    pub input: String,
    pub output: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct DecodeView {
    pub input: String,
    pub output: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct UrlView {
    pub base_url: String,
    pub param: String,
    pub value: String,
    pub url: String,
}

pub fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
