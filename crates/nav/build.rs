use std::path::Path;

fn main() {
    let assets = Path::new(env!("CARGO_MANIFEST_DIR")).join("assets");

    for (dir, name) in [("views", "NAV_VIEWS"), ("scripts", "NAV_SCRIPTS")] {
        if let Err(e) = navkit_build::emit_manifest(assets.join(dir), name) {
            panic!("failed to embed {}: {}", dir, e);
        }
    }
}
