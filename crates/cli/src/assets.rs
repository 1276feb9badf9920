use navkit_api::FileProvider;
use navkit_core::{Host, HostConfig};
use serde::Serialize;
use tabled::{Table, Tabled};

#[derive(Debug, Serialize)]
struct Listing {
    components: Vec<String>,
    view_sources: Vec<SourceListing>,
    mounts: Vec<MountListing>,
}

#[derive(Debug, Serialize)]
struct SourceListing {
    order: usize,
    name: String,
    files: Vec<FileListing>,
}

#[derive(Debug, Serialize)]
struct MountListing {
    order: usize,
    prefix: String,
    source: String,
    files: Vec<FileListing>,
}

#[derive(Debug, Serialize)]
struct FileListing {
    path: String,
    size_bytes: usize,
}

#[derive(Tabled)]
struct AssetRow {
    #[tabled(rename = "#")]
    order: usize,
    #[tabled(rename = "Kind")]
    kind: &'static str,
    #[tabled(rename = "Path")]
    path: String,
    #[tabled(rename = "Source")]
    source: String,
    #[tabled(rename = "Size")]
    size: String,
}

pub fn run(config: HostConfig, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let host = navkit_runtime::build_default_host(config)?;
    let listing = build_listing(&host);

    if json {
        println!("{}", serde_json::to_string_pretty(&listing)?);
        return Ok(());
    }

    println!("Components: {}", listing.components.join(", "));
    let rows = rows(&listing);
    if rows.is_empty() {
        println!("No assets registered.");
    } else {
        println!("{}", Table::new(rows));
    }
    Ok(())
}

fn build_listing(host: &Host) -> Listing {
    Listing {
        components: host.components().names().map(|n| n.to_string()).collect(),
        view_sources: host
            .view_sources()
            .iter()
            .enumerate()
            .map(|(order, source)| SourceListing {
                order,
                name: source.name().to_string(),
                files: files_of(source.as_ref()),
            })
            .collect(),
        mounts: host
            .mounts()
            .iter()
            .enumerate()
            .map(|(order, mount)| MountListing {
                order,
                prefix: mount.prefix.to_string(),
                source: mount.source.name().to_string(),
                files: files_of(mount.source.as_ref()),
            })
            .collect(),
    }
}

fn files_of(source: &dyn FileProvider) -> Vec<FileListing> {
    source
        .entries()
        .into_iter()
        .map(|path| FileListing {
            size_bytes: source.get_file(&path).map(|f| f.len()).unwrap_or(0),
            path: path.to_string(),
        })
        .collect()
}

fn rows(listing: &Listing) -> Vec<AssetRow> {
    let views = listing.view_sources.iter().flat_map(|source| {
        source.files.iter().map(move |file| AssetRow {
            order: source.order,
            kind: "view",
            path: file.path.clone(),
            source: source.name.clone(),
            size: format_size(file.size_bytes),
        })
    });

    let statics = listing.mounts.iter().flat_map(|mount| {
        mount.files.iter().map(move |file| AssetRow {
            order: mount.order,
            kind: "static",
            path: url_for(&mount.prefix, &file.path),
            source: mount.source.clone(),
            size: format_size(file.size_bytes),
        })
    });

    views.chain(statics).collect()
}

fn url_for(prefix: &str, path: &str) -> String {
    format!("{}/{}", prefix.trim_end_matches('/'), path)
}

fn format_size(bytes: usize) -> String {
    if bytes < 1024 {
        format!("{} B", bytes)
    } else if bytes < 1024 * 1024 {
        format!("{:.1} KB", bytes as f64 / 1024.0)
    } else {
        format!("{:.1} MB", bytes as f64 / 1024.0 / 1024.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_listing_of_default_host() {
        let host = navkit_runtime::build_default_host(HostConfig::default()).unwrap();
        let listing = build_listing(&host);

        assert_eq!(listing.components, vec!["Nav"]);
        assert_eq!(listing.view_sources.len(), 1);
        assert_eq!(listing.mounts[0].prefix, "/Scripts");

        let rows = rows(&listing);
        assert!(rows.iter().any(|r| r.kind == "static" && r.path == "/Scripts/Script.js"));
        assert!(
            rows.iter()
                .any(|r| r.kind == "view" && r.path == "Shared/Components/Nav/Default.html")
        );
    }

    #[test]
    fn test_url_for_root_mount() {
        assert_eq!(url_for("/", "css/site.css"), "/css/site.css");
        assert_eq!(url_for("/Scripts", "Script.js"), "/Scripts/Script.js");
    }

    #[test]
    fn test_format_size() {
        assert_eq!(format_size(512), "512 B");
        assert_eq!(format_size(2048), "2.0 KB");
        assert_eq!(format_size(3 * 1024 * 1024), "3.0 MB");
    }
}
