use navkit_api::ResourcePath;

pub const FALLBACK_CONTENT_TYPE: &str = "application/octet-stream";

/// Content type for a file, picked from its extension.
pub fn content_type_for(path: &ResourcePath) -> &'static str {
    let Some(extension) = path.extension() else {
        return FALLBACK_CONTENT_TYPE;
    };

    match extension.to_ascii_lowercase().as_str() {
        "js" | "mjs" => "text/javascript; charset=utf-8",
        "css" => "text/css; charset=utf-8",
        "html" | "htm" => "text/html; charset=utf-8",
        "json" | "map" => "application/json",
        "txt" => "text/plain; charset=utf-8",
        "xml" => "application/xml",
        "svg" => "image/svg+xml",
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "ico" => "image/x-icon",
        "webp" => "image/webp",
        "woff" => "font/woff",
        "woff2" => "font/woff2",
        "wasm" => "application/wasm",
        _ => FALLBACK_CONTENT_TYPE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ct(path: &str) -> &'static str {
        content_type_for(&ResourcePath::parse(path).unwrap())
    }

    #[test]
    fn test_known_extensions() {
        assert_eq!(ct("Script.js"), "text/javascript; charset=utf-8");
        assert_eq!(ct("css/SITE.CSS"), "text/css; charset=utf-8");
        assert_eq!(ct("logo.svg"), "image/svg+xml");
    }

    #[test]
    fn test_fallback() {
        assert_eq!(ct("LICENSE"), FALLBACK_CONTENT_TYPE);
        assert_eq!(ct("archive.tar.zst"), FALLBACK_CONTENT_TYPE);
    }
}
