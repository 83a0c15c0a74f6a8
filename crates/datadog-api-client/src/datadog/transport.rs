// Copyright 2023-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

//! HTTP plumbing: client construction, request body compression and the
//! redaction helpers used when logging requests.

use std::borrow::Cow;
use std::io::{Read, Write};

use flate2::write::{GzEncoder, ZlibEncoder};
use flate2::Compression;
use reqwest::header::HeaderMap;
use reqwest::{Client, ClientBuilder};
#[cfg(feature = "fips")]
use tracing::debug;

use crate::datadog::configuration::Configuration;
use crate::datadog::error::ConfigurationError;

/// Headers whose values never reach the logs.
const SENSITIVE_HEADERS: [&str; 3] = ["dd-api-key", "dd-application-key", "authorization"];

/// Upper bound of characters shown in a body preview.
const PREVIEW_MAX_CHARS: usize = 1024;

/// Request body encodings the client can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentEncoding {
    Gzip,
    /// zlib-wrapped deflate.
    Deflate,
    Zstd1,
}

impl ContentEncoding {
    pub fn from_header(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "gzip" => Some(Self::Gzip),
            "deflate" => Some(Self::Deflate),
            "zstd1" => Some(Self::Zstd1),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Gzip => "gzip",
            Self::Deflate => "deflate",
            Self::Zstd1 => "zstd1",
        }
    }

    pub fn compress(&self, body: &[u8]) -> std::io::Result<Vec<u8>> {
        match self {
            Self::Gzip => {
                let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
                encoder.write_all(body)?;
                encoder.finish()
            }
            Self::Deflate => {
                let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
                encoder.write_all(body)?;
                encoder.finish()
            }
            Self::Zstd1 => zstd::encode_all(body, zstd::DEFAULT_COMPRESSION_LEVEL),
        }
    }

    fn decompress(&self, body: &[u8]) -> Option<Vec<u8>> {
        let mut decompressed = Vec::new();
        let read = match self {
            Self::Gzip => flate2::read::GzDecoder::new(body).read_to_end(&mut decompressed),
            Self::Deflate => flate2::read::ZlibDecoder::new(body).read_to_end(&mut decompressed),
            Self::Zstd1 => return zstd::decode_all(body).ok(),
        };
        read.ok().map(|_| decompressed)
    }
}

/// Creates a reqwest client builder with rustls.
#[cfg(not(feature = "fips"))]
fn create_client_builder() -> Result<ClientBuilder, ConfigurationError> {
    Ok(Client::builder().use_rustls_tls())
}

/// Creates a reqwest client builder restricted to a FIPS-compliant rustls
/// provider, which must have been installed by the application beforehand.
#[cfg(feature = "fips")]
fn create_client_builder() -> Result<ClientBuilder, ConfigurationError> {
    let provider = rustls::crypto::CryptoProvider::get_default()
        .ok_or_else(|| ConfigurationError::Tls("no crypto provider configured".to_string()))?;
    if !provider.fips() {
        return Err(ConfigurationError::Tls(
            "crypto provider is not FIPS-compliant".to_string(),
        ));
    }

    let mut roots = rustls::RootCertStore::empty();
    let mut valid_count = 0;
    for cert in rustls_native_certs::load_native_certs().certs {
        match roots.add(cert) {
            Ok(()) => valid_count += 1,
            Err(err) => debug!("Failed to parse certificate: {:?}", err),
        }
    }
    if valid_count == 0 {
        return Err(ConfigurationError::Tls(
            "no valid certificates found in native root store".to_string(),
        ));
    }

    let config = rustls::ClientConfig::builder_with_provider(provider.clone())
        .with_protocol_versions(rustls::ALL_VERSIONS)
        .map_err(|err| ConfigurationError::Tls(err.to_string()))?
        .with_root_certificates(roots)
        .with_no_client_auth();
    if !config.fips() {
        return Err(ConfigurationError::Tls(
            "the final TLS configuration is not FIPS-compliant".to_string(),
        ));
    }
    debug!("Client builder is configured with FIPS.");

    Ok(Client::builder().use_preconfigured_tls(config))
}

/// Builds the shared HTTP client from the transport settings of `config`.
pub fn build_http_client(config: &Configuration) -> Result<Client, ConfigurationError> {
    let mut builder = create_client_builder()?;
    if let Some(timeout) = config.timeout {
        builder = builder.timeout(timeout);
    }
    if let Some(proxy_url) = &config.proxy_url {
        let proxy = reqwest::Proxy::https(proxy_url)
            .map_err(|err| ConfigurationError::InvalidProxy(err.to_string()))?;
        builder = builder.proxy(proxy);
    }
    if !config.compress {
        builder = builder.no_gzip();
    }
    builder
        .build()
        .map_err(|err| ConfigurationError::Client(err.to_string()))
}

/// Returns a redacted view of request headers suitable for debug logging.
pub(crate) fn redact_headers(headers: &HeaderMap) -> Vec<(String, String)> {
    headers
        .iter()
        .map(|(name, value)| {
            let lower = name.as_str().to_ascii_lowercase();
            let display = if SENSITIVE_HEADERS.contains(&lower.as_str()) {
                "<redacted>".to_string()
            } else {
                value
                    .to_str()
                    .map(|s| s.to_string())
                    .unwrap_or_else(|_| "<non-utf8>".to_string())
            };
            (lower, display)
        })
        .collect()
}

/// Returns a human-readable preview of a request body for verbose logging.
pub(crate) fn request_body_preview(headers: &HeaderMap, body: &[u8]) -> String {
    let header = |name: &str| {
        headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("")
            .to_ascii_lowercase()
    };
    let content_type = header("content-type");
    if !(content_type.contains("json") || content_type.contains("text")) {
        return format!("[{} bytes binary]", body.len());
    }

    let decompressed =
        ContentEncoding::from_header(&header("content-encoding")).and_then(|e| e.decompress(body));
    let data = decompressed.as_deref().unwrap_or(body);
    truncate_preview_text(String::from_utf8_lossy(data))
}

fn truncate_preview_text(text: Cow<'_, str>) -> String {
    let mut chars = text.chars();
    let mut preview: String = chars.by_ref().take(PREVIEW_MAX_CHARS).collect();
    if chars.next().is_some() {
        preview.push('…');
    }
    preview
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use reqwest::header::HeaderValue;

    fn json_headers() -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert("content-type", HeaderValue::from_static("application/json"));
        headers
    }

    #[test]
    fn test_content_encoding_from_header() {
        assert_eq!(ContentEncoding::from_header("gzip"), Some(ContentEncoding::Gzip));
        assert_eq!(ContentEncoding::from_header("Deflate"), Some(ContentEncoding::Deflate));
        assert_eq!(ContentEncoding::from_header("zstd1"), Some(ContentEncoding::Zstd1));
        assert_eq!(ContentEncoding::from_header("br"), None);
    }

    #[test]
    fn test_compression_is_reversible() {
        let body = br#"{"series":[{"metric":"system.load.1"}]}"#;
        for encoding in [
            ContentEncoding::Gzip,
            ContentEncoding::Deflate,
            ContentEncoding::Zstd1,
        ] {
            let compressed = encoding.compress(body).unwrap();
            assert_ne!(compressed.as_slice(), body.as_slice());
            assert_eq!(encoding.decompress(&compressed).unwrap(), body.to_vec());
        }
    }

    #[test]
    fn test_redact_headers() {
        let mut headers = json_headers();
        headers.insert("DD-API-KEY", HeaderValue::from_static("secret"));
        headers.insert("DD-APPLICATION-KEY", HeaderValue::from_static("secret-app"));
        let redacted = redact_headers(&headers);
        assert!(redacted.contains(&("dd-api-key".to_string(), "<redacted>".to_string())));
        assert!(redacted.contains(&("dd-application-key".to_string(), "<redacted>".to_string())));
        assert!(redacted.contains(&("content-type".to_string(), "application/json".to_string())));
    }

    #[test]
    fn test_request_body_preview_handles_plain_text() {
        let preview = request_body_preview(&json_headers(), br#"{"hello":"world"}"#);
        assert_eq!(preview, r#"{"hello":"world"}"#);
    }

    #[test]
    fn test_request_body_preview_limits_length() {
        let payload = "a".repeat(1500);
        let preview = request_body_preview(&json_headers(), payload.as_bytes());
        assert!(preview.ends_with('…'));
        assert_eq!(preview.chars().count(), PREVIEW_MAX_CHARS + 1);
    }

    #[test]
    fn test_request_body_preview_handles_binary_payloads() {
        let preview = request_body_preview(&HeaderMap::new(), &[0, 159, 146, 150]);
        assert_eq!(preview, "[4 bytes binary]");
    }

    #[test]
    fn test_request_body_preview_decompresses() {
        let mut headers = json_headers();
        headers.insert("content-encoding", HeaderValue::from_static("zstd1"));
        let compressed = ContentEncoding::Zstd1.compress(br#"{"key":"value"}"#).unwrap();
        assert_eq!(request_body_preview(&headers, &compressed), r#"{"key":"value"}"#);
    }

    #[test]
    fn test_build_http_client_rejects_invalid_proxy() {
        let mut config = Configuration::new();
        config.proxy_url = Some("http://[::1".to_string());
        assert!(matches!(
            build_http_client(&config),
            Err(ConfigurationError::InvalidProxy(_))
        ));
    }
}
