//! Compressed diagram payload for the hosted Mermaid viewer
//!
//! The token is the viewer state as JSON, zlib-compressed at the highest
//! level and base64 encoded with the URL-safe alphabet. Padding is kept.

use std::io::Write;

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE;
use flate2::Compression;
use flate2::write::ZlibEncoder;
use serde::{Deserialize, Serialize};

use crate::constants::viewer::THEME_CONFIG;
use crate::error::Deps2MermaidError;

/// Editor state understood by mermaid.live and mermaid.ink
///
/// Field order is part of the format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewerState {
    pub code: String,
    /// Mermaid configuration, itself a JSON document
    pub mermaid: String,
    pub auto_sync: bool,
    pub update_diagram: bool,
    pub pan_zoom: bool,
    pub zoom: u32,
    pub pan: Pan,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pan {
    pub x: i32,
    pub y: i32,
}

impl ViewerState {
    /// Dark theme, auto sync and pan/zoom on, unit zoom, no pan
    pub fn new(code: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            mermaid: THEME_CONFIG.to_string(),
            auto_sync: true,
            update_diagram: false,
            pan_zoom: true,
            zoom: 1,
            pan: Pan::default(),
        }
    }
}

/// Encode rendered Mermaid text into a URL-safe viewer token
pub fn encode_payload(code: &str) -> Result<String, Deps2MermaidError> {
    let json = serde_json::to_vec(&ViewerState::new(code))?;

    let mut encoder = ZlibEncoder::new(Vec::new(), Compression::best());
    encoder.write_all(&json)?;
    let compressed = encoder.finish()?;

    Ok(URL_SAFE.encode(compressed))
}

#[cfg(test)]
mod tests {
    use std::io::Read;

    use base64::engine::general_purpose::STANDARD;
    use flate2::read::ZlibDecoder;

    use super::*;

    fn decode(token: &str) -> String {
        let compressed = URL_SAFE.decode(token).unwrap();
        let mut json = String::new();
        ZlibDecoder::new(compressed.as_slice())
            .read_to_string(&mut json)
            .unwrap();
        json
    }

    #[test]
    fn test_json_layout() {
        let json = serde_json::to_string(&ViewerState::new("graph LR")).unwrap();
        assert_eq!(
            json,
            r#"{"code":"graph LR","mermaid":"{\"theme\": \"dark\"}","autoSync":true,"updateDiagram":false,"panZoom":true,"zoom":1,"pan":{"x":0,"y":0}}"#
        );
    }

    #[test]
    fn test_payload_decodes_to_state() {
        let code = "graph LR\n  A[\"A\n    1.0.0\"] --> B[\"B\n    2.0.0\"]\n";
        let token = encode_payload(code).unwrap();

        let state: ViewerState = serde_json::from_str(&decode(&token)).unwrap();
        assert_eq!(state, ViewerState::new(code));
    }

    #[test]
    fn test_token_is_url_safe() {
        // enough varied text to make '+' and '/' likely in a standard encoding
        let code: String = (0..200).map(|i| format!("N{i} --> M{}\n", i * 7)).collect();
        let token = encode_payload(&code).unwrap();

        assert!(!token.contains('+'));
        assert!(!token.contains('/'));

        let standard = STANDARD.encode(URL_SAFE.decode(&token).unwrap());
        assert_eq!(token, standard.replace('/', "_").replace('+', "-"));
    }

    #[test]
    fn test_zlib_header() {
        let token = encode_payload("graph LR").unwrap();
        let bytes = URL_SAFE.decode(token).unwrap();
        // deflate with a 32K window, checksum-valid header
        assert_eq!(bytes[0], 0x78);
        assert_eq!(((u16::from(bytes[0]) << 8) | u16::from(bytes[1])) % 31, 0);
    }
}
